//! 영어 단어 원격 조회 (Free Dictionary API)

use std::sync::OnceLock;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{KeyfixError, KeyfixResult};

pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// 커넥션 풀 재사용을 위한 공용 클라이언트
static CLIENT: OnceLock<Client> = OnceLock::new();

fn shared_client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(concat!("keyfix/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// 단어 존재 여부 원격 조회
#[async_trait]
pub trait WordLookup: Send + Sync {
    /// 정리된 소문자 단어 조회. 사전에 있으면 Ok(())
    async fn lookup(&self, word: &str) -> KeyfixResult<()>;
}

/// `GET {base_url}/{word}` 형식의 단어 정의 서비스 클라이언트
#[derive(Debug, Clone)]
pub struct DictionaryApiClient {
    base_url: String,
}

impl DictionaryApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn entry_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(word)
        )
    }
}

impl Default for DictionaryApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_BASE_URL)
    }
}

#[async_trait]
impl WordLookup for DictionaryApiClient {
    async fn lookup(&self, word: &str) -> KeyfixResult<()> {
        let url = self.entry_url(word);
        let response = shared_client().get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeyfixError::Transport(format!("'{}' 조회 응답 {}", word, status)));
        }
        Ok(())
    }
}
