use crate::{Result, gateway::WordDetail};
use askama::Template;
use tracing::debug;

pub const LOADING_MESSAGE: &str = "Загрузка информации...";
pub const FAILURE_MESSAGE: &str = "Не удалось загрузить информацию о слове";
const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayState {
    Closed,
    Loading { word: String, token: u64 },
    Showing { word: String, detail: WordDetail },
    Failed { word: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    Select {
        word: String,
    },
    /// Lookup finished; `outcome` carries the error message on failure.
    Resolved {
        token: u64,
        outcome: std::result::Result<WordDetail, String>,
    },
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// A response for a superseded or dismissed lookup.
    Discarded,
}

/// Word-detail panel. Each selection issues a fresh token and only the
/// response carrying the latest token may update the panel.
#[derive(Debug)]
pub struct DetailOverlay {
    state: OverlayState,
    latest_token: u64,
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Closed,
            latest_token: 0,
        }
    }

    pub fn current_state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, OverlayState::Closed)
    }

    /// Opens the panel for `word` and returns the token the lookup must carry.
    pub fn select(&mut self, word: impl Into<String>) -> u64 {
        self.handle(OverlayEvent::Select { word: word.into() });
        self.latest_token
    }

    pub fn resolve(
        &mut self,
        token: u64,
        outcome: std::result::Result<WordDetail, String>,
    ) -> Transition {
        self.handle(OverlayEvent::Resolved { token, outcome })
    }

    pub fn dismiss(&mut self) {
        self.handle(OverlayEvent::Dismiss);
    }

    pub fn handle(&mut self, event: OverlayEvent) -> Transition {
        let next = match (&self.state, event) {
            (_, OverlayEvent::Select { word }) => {
                self.latest_token += 1;
                OverlayState::Loading {
                    word,
                    token: self.latest_token,
                }
            }
            (_, OverlayEvent::Dismiss) => OverlayState::Closed,
            (OverlayState::Loading { word, token }, OverlayEvent::Resolved { token: t, outcome })
                if *token == t =>
            {
                match outcome {
                    Ok(detail) => OverlayState::Showing {
                        word: word.clone(),
                        detail,
                    },
                    Err(message) => {
                        debug!("Lookup for '{}' failed: {}", word, message);
                        OverlayState::Failed { word: word.clone() }
                    }
                }
            }
            (state, OverlayEvent::Resolved { token, .. }) => {
                debug!(
                    "Discarding stale lookup response (token {}, latest {}, state {:?})",
                    token, self.latest_token, state
                );
                return Transition::Discarded;
            }
        };

        self.state = next;
        Transition::Applied
    }

    /// Word shown in the panel header.
    pub fn title(&self) -> Option<&str> {
        match &self.state {
            OverlayState::Closed => None,
            OverlayState::Loading { word, .. }
            | OverlayState::Showing { word, .. }
            | OverlayState::Failed { word } => Some(word),
        }
    }

    pub fn render_body(&self) -> Result<String> {
        let body = match &self.state {
            OverlayState::Closed => String::new(),
            OverlayState::Loading { .. } => MessageTemplate {
                message: LOADING_MESSAGE,
            }
            .render()?,
            OverlayState::Failed { .. } => MessageTemplate {
                message: FAILURE_MESSAGE,
            }
            .render()?,
            OverlayState::Showing { detail, .. } => DetailTemplate {
                transcription: or_missing(detail.transcription.as_deref()),
                translation: or_missing(detail.translation.as_deref()),
                explanation: or_missing(detail.explanation.as_deref()),
                synonyms: non_empty(detail.synonyms.as_deref()),
            }
            .render()?,
        };
        Ok(body)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_missing(value: Option<&str>) -> &str {
    non_empty(value).unwrap_or(MISSING_VALUE)
}

#[derive(Template)]
#[template(source = "<p>{{ message }}</p>", ext = "html")]
struct MessageTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<div class="word-info-item"><span class="word-info-label">Транскрипция:</span> <span>{{ transcription }}</span></div>
<div class="word-info-item"><span class="word-info-label">Перевод:</span> <span>{{ translation }}</span></div>
<div class="word-info-item"><span class="word-info-label">Объяснение:</span> <span>{{ explanation }}</span></div>
{%- match synonyms %}{% when Some with (synonyms) %}
<div class="word-info-item"><span class="word-info-label">Синонимы:</span> <span>{{ synonyms }}</span></div>
{%- when None %}{% endmatch %}"#,
    ext = "html"
)]
struct DetailTemplate<'a> {
    transcription: &'a str,
    translation: &'a str,
    explanation: &'a str,
    synonyms: Option<&'a str>,
}
