//! Instruction payloads for the two analysis modes.

use crate::gateway::extract::SECTIONS;
use crate::llm::{ChatMessage, ResponseFormat};

const FULL_TEXT_INSTRUCTION: &str = "Ты эксперт по ивриту. Проанализируй каждое слово текста \
пользователя в том порядке, в котором слова встречаются. Верни строго JSON-объект вида \
{\"analysis\": [...]}, где каждый элемент массива содержит:
- word: слово в точности как в тексте
- isCorrect: boolean (правильно ли написано)
- correction: предложенное исправление, или null если ошибки нет
Не добавляй других полей и никакого текста вне JSON.";

const SINGLE_WORD_INSTRUCTION: &str =
    "Ты помощник для изучения иврита. Дай транскрипцию, перевод, объяснение и синонимы для слова.";

/// What the caller wants analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    FullText(String),
    SingleWord(String),
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub messages: Vec<ChatMessage>,
    pub response_format: Option<ResponseFormat>,
}

pub fn build(request: &AnalysisRequest) -> Prompt {
    match request {
        AnalysisRequest::FullText(text) => Prompt {
            messages: vec![
                ChatMessage::system(FULL_TEXT_INSTRUCTION),
                ChatMessage::user(text.clone()),
            ],
            response_format: Some(ResponseFormat::JsonObject),
        },
        AnalysisRequest::SingleWord(word) => Prompt {
            messages: vec![
                ChatMessage::system(SINGLE_WORD_INSTRUCTION),
                ChatMessage::user(single_word_layout(word)),
            ],
            response_format: None,
        },
    }
}

fn single_word_layout(word: &str) -> String {
    let mut content = format!(
        "Слово: {word}\n\nОтветь ровно четырьмя строками, каждая начинается с метки:\n"
    );
    for (label, _) in SECTIONS {
        content.push_str(label);
        content.push_str(" ...\n");
    }
    content.push_str(
        "Транскрипцию дай русскими буквами. Если синонимов нет, оставь строку синонимов пустой.",
    );
    content
}
