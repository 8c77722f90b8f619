//! 제안 표시 상태

pub mod suggestion;

pub use suggestion::{SuggestionSlot, DEFAULT_SUGGESTION_TIMEOUT_MS};
