//! Output formatter implementations

pub mod concise;
pub mod json;
pub mod text;

pub use concise::ConciseFormatter;
pub use json::{JsonFormatter, format_all_warnings_as_json};
pub use text::TextFormatter;
