//! 단어 유효성 판정
//!
//! 히브리어는 백그라운드 사전, 영어는 원격 사전으로 확인합니다.
//! 모든 실패는 이 경계에서 `false`로 접히며 호출자에게 에러가 전달되지 않습니다.

use std::sync::Arc;

use crate::bridge::channel::RequestChannel;
use crate::bridge::messages::Request;
use crate::detection::{clean_hebrew_token, clean_latin_token, detect_language, Language};
use crate::error::KeyfixResult;

use super::lookup::WordLookup;

pub struct ValidityOracle {
    channel: Arc<dyn RequestChannel>,
    lookup: Arc<dyn WordLookup>,
}

impl ValidityOracle {
    pub fn new(channel: Arc<dyn RequestChannel>, lookup: Arc<dyn WordLookup>) -> Self {
        Self { channel, lookup }
    }

    /// 토큰이 판별된 언어의 실제 단어인지 확인 (Unknown이면 조회 없이 false)
    pub async fn is_real_word(&self, token: &str) -> bool {
        match detect_language(token) {
            Language::Latin => self.is_latin_word(token).await,
            Language::Hebrew => self.is_hebrew_word(token).await,
            Language::Unknown => false,
        }
    }

    /// 히브리어 사전 확인
    pub async fn is_hebrew_word(&self, token: &str) -> bool {
        let clean = clean_hebrew_token(token);
        if clean.is_empty() {
            return false;
        }

        match self.check_hebrew(&clean).await {
            Ok(is_valid) => is_valid,
            Err(e) => {
                log::warn!("히브리어 사전 확인 실패 '{}': {}", clean, e);
                false
            }
        }
    }

    /// 영어 원격 사전 확인
    pub async fn is_latin_word(&self, token: &str) -> bool {
        let clean = clean_latin_token(token);
        if clean.is_empty() {
            return false;
        }

        match self.lookup.lookup(&clean).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("영어 사전에 없음 '{}': {}", clean, e);
                false
            }
        }
    }

    async fn check_hebrew(&self, clean: &str) -> KeyfixResult<bool> {
        let response = self.channel.request(Request::is_hebrew_word(clean)).await?;
        Ok(response.is_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::messages::IsHebrewWordResponse;
    use crate::error::KeyfixError;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// 요청을 기록하는 테스트용 채널
    struct RecordingChannel {
        words: HashSet<&'static str>,
        fail: bool,
        seen: Mutex<Vec<String>>,
    }

    impl RecordingChannel {
        fn with_words(words: &[&'static str]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                fail: false,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::with_words(&[])
            }
        }
    }

    #[async_trait]
    impl RequestChannel for RecordingChannel {
        async fn request(&self, request: Request) -> KeyfixResult<IsHebrewWordResponse> {
            let Request::IsHebrewWord { word } = request;
            let word = word.as_str().map(str::to_string).unwrap_or_default();
            self.seen.lock().unwrap().push(word.clone());
            if self.fail {
                return Err(KeyfixError::CrossContext("closed".to_string()));
            }
            Ok(IsHebrewWordResponse::new(self.words.contains(word.as_str())))
        }
    }

    /// 요청을 기록하는 테스트용 원격 사전
    struct RecordingLookup {
        words: HashSet<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    impl RecordingLookup {
        fn with_words(words: &[&'static str]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WordLookup for RecordingLookup {
        async fn lookup(&self, word: &str) -> KeyfixResult<()> {
            self.seen.lock().unwrap().push(word.to_string());
            if self.words.contains(word) {
                Ok(())
            } else {
                Err(KeyfixError::Transport("404 Not Found".to_string()))
            }
        }
    }

    fn oracle(
        channel: Arc<RecordingChannel>,
        lookup: Arc<RecordingLookup>,
    ) -> ValidityOracle {
        ValidityOracle::new(channel, lookup)
    }

    #[tokio::test]
    async fn test_hebrew_word_cleaned_before_request() {
        let channel = Arc::new(RecordingChannel::with_words(&["שלום"]));
        let lookup = Arc::new(RecordingLookup::with_words(&[]));
        let oracle = oracle(channel.clone(), lookup.clone());

        assert!(oracle.is_real_word("שלום.").await);
        assert!(!oracle.is_real_word("בית!").await);
        assert_eq!(*channel.seen.lock().unwrap(), vec!["שלום", "בית"]);
        assert!(lookup.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_latin_word_cleaned_and_lowercased() {
        let channel = Arc::new(RecordingChannel::with_words(&[]));
        let lookup = Arc::new(RecordingLookup::with_words(&["hello"]));
        let oracle = oracle(channel.clone(), lookup.clone());

        assert!(oracle.is_real_word("Hello,").await);
        assert!(!oracle.is_real_word("akuo").await);
        assert_eq!(*lookup.seen.lock().unwrap(), vec!["hello", "akuo"]);
        assert!(channel.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_never_looked_up() {
        let channel = Arc::new(RecordingChannel::with_words(&["שלום"]));
        let lookup = Arc::new(RecordingLookup::with_words(&["hello"]));
        let oracle = oracle(channel.clone(), lookup.clone());

        assert!(!oracle.is_real_word("abשל").await);
        assert!(!oracle.is_real_word("1234").await);
        assert!(!oracle.is_real_word("").await);
        assert!(channel.seen.lock().unwrap().is_empty());
        assert!(lookup.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_after_cleaning_skips_request() {
        let channel = Arc::new(RecordingChannel::with_words(&[]));
        let lookup = Arc::new(RecordingLookup::with_words(&[]));
        let oracle = oracle(channel.clone(), lookup.clone());

        assert!(!oracle.is_hebrew_word("?!.").await);
        assert!(!oracle.is_latin_word("'").await);
        assert!(channel.seen.lock().unwrap().is_empty());
        assert!(lookup.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_channel_failure_is_false() {
        let channel = Arc::new(RecordingChannel::failing());
        let lookup = Arc::new(RecordingLookup::with_words(&[]));
        let oracle = oracle(channel.clone(), lookup);

        assert!(!oracle.is_real_word("שלום").await);
        assert_eq!(channel.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_string_word() {
        let channel = Arc::new(RecordingChannel::with_words(&[]));
        let oracle = oracle(channel.clone(), Arc::new(RecordingLookup::with_words(&[])));
        oracle.is_hebrew_word("(בית)").await;
        assert_eq!(
            Request::is_hebrew_word("בית"),
            Request::IsHebrewWord {
                word: Value::from("בית")
            }
        );
        assert_eq!(*channel.seen.lock().unwrap(), vec!["בית"]);
    }
}
