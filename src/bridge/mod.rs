//! 포그라운드/백그라운드 컨텍스트 연결

pub mod background;
pub mod channel;
pub mod messages;

pub use background::BackgroundService;
pub use channel::{BackgroundHandle, RequestChannel};
pub use messages::{IsHebrewWordResponse, Request};
