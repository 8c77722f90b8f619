//! 자판 매핑과 단어 변환

pub mod converter;
pub mod layout;

pub use converter::{convert, convert_word, transliterate};
pub use layout::{Direction, TranslationTable};
