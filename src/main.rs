use anyhow::{Context, Result};
use ivrit_annotator::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level; both accept full filter directives.
fn log_filter(rust_log: Option<String>, configured: &str) -> Result<(String, EnvFilter)> {
    let directives = rust_log.unwrap_or_else(|| configured.to_string());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter '{directives}'"))?;
    Ok((directives, filter))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is not up yet, so startup failures go to stderr
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let (directives, filter) = match log_filter(rust_log, &config.server.logs.level) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        listen = %format!("{}:{}", config.server.host, config.server.port),
        model = %config.llm.model,
        "Starting annotation service with log filter '{}'",
        directives
    );

    server::run(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("ivrit_annotator=debug,tower_http=info")]
    #[case("warn,ivrit_annotator::gateway=trace")]
    fn test_rust_log_directives_override_config(#[case] rust_log: &str) {
        let (directives, _) = log_filter(Some(rust_log.to_string()), "info").unwrap();
        assert_eq!(directives, rust_log);
    }

    #[test]
    fn test_configured_level_used_without_rust_log() {
        let (directives, _) = log_filter(None, "debug").unwrap();
        assert_eq!(directives, "debug");
    }

    #[test]
    fn test_malformed_directive_is_rejected() {
        let err = log_filter(Some("ivrit_annotator=loud".to_string()), "info").unwrap_err();
        assert!(err.to_string().contains("ivrit_annotator=loud"));
    }
}
