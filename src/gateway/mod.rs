pub mod extract;

use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, LlmClient},
    prompt::{self, AnalysisRequest},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Correctness verdict for one word of the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnnotatedWord {
    pub word: String,
    pub is_correct: bool,
    #[serde(default)]
    pub correction: Option<String>,
}

/// Lexical lookup for a single word. Every field may be missing from the model output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDetail {
    pub transcription: Option<String>,
    pub translation: Option<String>,
    pub explanation: Option<String>,
    pub synonyms: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnnotationEnvelope {
    analysis: Vec<AnnotatedWord>,
}

/// Validates full-text completion content against the annotation schema.
pub fn parse_annotations(raw: &str) -> Result<Vec<AnnotatedWord>> {
    let envelope: AnnotationEnvelope = serde_json::from_str(raw)
        .map_err(|e| Error::parse(format!("invalid annotation payload: {}", e)))?;
    Ok(envelope.analysis)
}

/// Single entry point to the completion service for both analysis modes.
pub struct AnnotationGateway {
    client: Arc<dyn LlmClient>,
    temperature: f32,
}

impl AnnotationGateway {
    pub fn new(client: Arc<dyn LlmClient>, temperature: f32) -> Self {
        Self {
            client,
            temperature,
        }
    }

    pub async fn analyze_full_text(&self, text: &str) -> Result<Vec<AnnotatedWord>> {
        info!(
            chars = text.chars().count(),
            "Requesting full-text annotation"
        );

        let content = self.complete(&AnalysisRequest::FullText(text.to_string())).await?;
        let analysis = parse_annotations(&content).inspect_err(|e| {
            warn!("Rejected full-text completion: {}", e);
        })?;

        debug!("Parsed {} annotated words", analysis.len());
        Ok(analysis)
    }

    pub async fn analyze_single_word(&self, word: &str) -> Result<WordDetail> {
        info!("Requesting detail for word: {}", word);

        let content = self
            .complete(&AnalysisRequest::SingleWord(word.to_string()))
            .await?;
        let detail = extract::extract_detail(&content);

        if detail == WordDetail::default() {
            warn!("No labelled sections found in completion for word: {}", word);
        }
        Ok(detail)
    }

    async fn complete(&self, request: &AnalysisRequest) -> Result<String> {
        let prompt = prompt::build(request);
        let response = self
            .client
            .create_chat_completion(ChatCompletionRequest {
                messages: prompt.messages,
                temperature: Some(self.temperature),
                response_format: prompt.response_format,
            })
            .await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        Ok(response.content()?.to_string())
    }
}
