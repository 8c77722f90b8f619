//! 토큰 언어 판별 모듈

pub mod language;
pub mod patterns;

pub use language::{detect_language, Language};
pub use patterns::{clean_hebrew_token, clean_latin_token, extract_trigger_token, is_boundary_char};
