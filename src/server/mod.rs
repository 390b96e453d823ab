pub mod handlers;
pub mod types;

use crate::{Result, config::Config, gateway::AnnotationGateway, llm::OpenAiClient};
use axum::{
    Router,
    routing::{MethodFilter, get, on},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // One completion client for the whole process, injected through the state
    let client = OpenAiClient::new(config.llm.clone())?;
    info!("Completion client ready for model {}", client.model());
    let gateway = AnnotationGateway::new(Arc::new(client), config.llm.temperature);

    let app_state = AppState {
        gateway: Arc::new(gateway),
        public_url: config.server.public_url.clone(),
    };

    let app = build_router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page))
        .route("/panel", get(handlers::word_panel))
        .route(
            "/api/analyze",
            // HEAD would otherwise fall through to the GET handler
            on(MethodFilter::HEAD, handlers::method_not_allowed)
                .post(handlers::annotate_text)
                .get(handlers::lookup_word)
                .fallback(handlers::method_not_allowed),
        )
        .route("/healthz", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
