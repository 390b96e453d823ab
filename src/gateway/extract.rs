//! Labelled-section extraction for single-word lookups.
//!
//! The model answers in free text with one `Label: value` line per section.
//! Each label is searched independently, so reordered or partial answers only
//! lose the sections that are actually missing.

use super::WordDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Transcription,
    Translation,
    Explanation,
    Synonyms,
}

/// Section labels in the order the prompt asks for them.
pub const SECTIONS: [(&str, DetailField); 4] = [
    ("Транскрипция:", DetailField::Transcription),
    ("Перевод:", DetailField::Translation),
    ("Объяснение:", DetailField::Explanation),
    ("Синонимы:", DetailField::Synonyms),
];

/// Returns the text following the first `label`, up to the next line break
/// (or a repeated `label` on the same line), trimmed. `None` when the label is absent.
pub fn extract_section(text: &str, label: &str) -> Option<String> {
    let (_, rest) = text.split_once(label)?;
    let segment = rest.split(label).next().unwrap_or_default();
    let line = segment.split('\n').next().unwrap_or_default();
    Some(line.trim().to_string())
}

pub fn extract_detail(text: &str) -> WordDetail {
    let mut detail = WordDetail::default();
    for (label, field) in SECTIONS {
        let value = extract_section(text, label);
        match field {
            DetailField::Transcription => detail.transcription = value,
            DetailField::Translation => detail.translation = value,
            DetailField::Explanation => detail.explanation = value,
            DetailField::Synonyms => detail.synonyms = value,
        }
    }
    detail
}
