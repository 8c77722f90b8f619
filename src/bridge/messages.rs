//! 포그라운드 <-> 백그라운드 메시지 형식
//!
//! 요청: `{ "type": "isHebrewWord", "word": "..." }`
//! 응답: `{ "isValid": true }`

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 백그라운드 컨텍스트로 보내는 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// `word`는 문자열이 아닐 수도 있으므로 원본 값 그대로 받음
    #[serde(rename = "isHebrewWord")]
    IsHebrewWord {
        #[serde(default)]
        word: Value,
    },
}

impl Request {
    pub fn is_hebrew_word(word: impl Into<String>) -> Self {
        Request::IsHebrewWord {
            word: Value::String(word.into()),
        }
    }
}

/// `isHebrewWord` 응답
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsHebrewWordResponse {
    pub is_valid: bool,
}

impl IsHebrewWordResponse {
    pub fn new(is_valid: bool) -> Self {
        Self { is_valid }
    }

    pub fn invalid() -> Self {
        Self::new(false)
    }
}
