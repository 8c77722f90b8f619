//! 입력 영역 연동 (텍스트 읽기/교체)

pub mod surface;
pub mod text_replacer;

pub use surface::{EditableSurface, TextField};
pub use text_replacer::replace_last_word;
