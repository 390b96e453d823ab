use crate::gateway::AnnotatedWord;
use serde::{Deserialize, Serialize};

/// POST body. A missing `text` is forwarded as empty input.
#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotateResponse {
    pub analysis: Vec<AnnotatedWord>,
}

#[derive(Debug, Deserialize)]
pub struct WordQuery {
    #[serde(default)]
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
