use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network, authentication and rate-limit failures of the completion service.
    /// Displays the service's message unchanged.
    #[error("{0}")]
    Upstream(#[from] async_openai::error::OpenAIError),

    #[error("{0}")]
    Llm(String),

    /// Completion content did not match the annotation schema.
    #[error("{0}")]
    Parse(String),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// True for failures that originate at the completion service.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Llm(_))
    }
}
