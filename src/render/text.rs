use crate::{Result, gateway::AnnotatedWord};
use askama::Template;

const CORRECTION_PREFIX: &str = "Исправление: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { hint: String },
    /// No annotation available, the word is only selectable.
    Unmarked,
}

/// One selectable unit of the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub word: String,
    pub verdict: Verdict,
}

impl WordToken {
    pub fn css_class(&self) -> &'static str {
        match self.verdict {
            Verdict::Correct => "word correct",
            Verdict::Incorrect { .. } => "word incorrect",
            Verdict::Unmarked => "word",
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Incorrect { hint } => Some(hint),
            _ => None,
        }
    }
}

pub fn annotated_tokens(analysis: &[AnnotatedWord]) -> Vec<WordToken> {
    analysis
        .iter()
        .map(|item| WordToken {
            word: item.word.clone(),
            verdict: if item.is_correct {
                Verdict::Correct
            } else {
                Verdict::Incorrect {
                    hint: format!(
                        "{CORRECTION_PREFIX}{}",
                        item.correction.as_deref().unwrap_or_default()
                    ),
                }
            },
        })
        .collect()
}

/// Fallback when no annotation is available.
pub fn plain_tokens(text: &str) -> Vec<WordToken> {
    text.split_whitespace()
        .map(|word| WordToken {
            word: word.to_string(),
            verdict: Verdict::Unmarked,
        })
        .collect()
}

#[derive(Template)]
#[template(
    source = r#"{% for token in tokens %}<span class="{{ token.css_class() }}" data-word="{{ token.word }}" tabindex="0">{{ token.word }} {% match token.hint() %}{% when Some with (hint) %}<span class="tooltip">{{ hint }}</span>{% when None %}{% endmatch %}</span>{% endfor %}"#,
    ext = "html"
)]
struct TokensTemplate<'a> {
    tokens: &'a [WordToken],
}

pub fn render_tokens(tokens: &[WordToken]) -> Result<String> {
    Ok(TokensTemplate { tokens }.render()?)
}
