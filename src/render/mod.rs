//! Server-side markup for the reading page and the word-detail panel.

pub mod overlay;
pub mod page;
pub mod text;

pub use overlay::{DetailOverlay, OverlayEvent, OverlayState, Transition};
pub use page::{page_url, render_page};
pub use text::{Verdict, WordToken, annotated_tokens, plain_tokens, render_tokens};
