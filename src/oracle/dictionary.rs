//! 히브리어 로컬 사전
//!
//! JSON 배열 리소스를 한 번만 읽어 `HashSet`으로 보관합니다.
//! 상태는 `watch` 채널로 공개되며, 로드 중에 들어온 요청은
//! 진행 중인 로드 결과를 함께 기다립니다 (중복 fetch 없음).

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::{KeyfixError, KeyfixResult};

/// 단어 목록 원본 (번들 리소스)
#[async_trait]
pub trait WordListSource: Send + Sync {
    /// 리소스 원본 바이트 읽기
    async fn fetch(&self) -> KeyfixResult<Vec<u8>>;
}

/// 파일 시스템의 JSON 단어 목록
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WordListSource for FileWordList {
    async fn fetch(&self) -> KeyfixResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            KeyfixError::ResourceLoad(format!("{} 읽기 실패: {}", self.path.display(), e))
        })
    }
}

/// 사전 수명 주기
#[derive(Debug, Clone)]
pub enum DictionaryState {
    NotStarted,
    Loading,
    Ready(Arc<HashSet<String>>),
    Failed(KeyfixError),
}

impl DictionaryState {
    fn is_settled(&self) -> bool {
        matches!(self, DictionaryState::Ready(_) | DictionaryState::Failed(_))
    }
}

/// JSON 배열 바이트를 단어 집합으로 파싱
pub fn parse_word_list(bytes: &[u8]) -> KeyfixResult<HashSet<String>> {
    let words: Vec<String> = serde_json::from_slice(bytes)?;
    Ok(words.into_iter().collect())
}

/// 로드 상태를 가진 히브리어 사전
pub struct HebrewDictionary {
    source: Arc<dyn WordListSource>,
    state: Arc<watch::Sender<DictionaryState>>,
}

impl HebrewDictionary {
    pub fn new(source: Arc<dyn WordListSource>) -> Self {
        let (tx, _rx) = watch::channel(DictionaryState::NotStarted);
        Self {
            source,
            state: Arc::new(tx),
        }
    }

    /// 이미 준비된 단어 집합으로 생성 (로드 생략)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: Arc<HashSet<String>> = Arc::new(words.into_iter().map(Into::into).collect());
        let dictionary = Self::new(Arc::new(FixedWordList(Arc::clone(&set))));
        dictionary.state.send_replace(DictionaryState::Ready(set));
        dictionary
    }

    /// 현재 상태 스냅샷
    pub fn state(&self) -> DictionaryState {
        self.state.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), DictionaryState::Ready(_))
    }

    /// 로드 대기 없이 답할 수 있으면 답함
    ///
    /// Ready면 포함 여부, Failed면 false, 그 외(NotStarted/Loading)는 None
    pub fn lookup_now(&self, word: &str) -> Option<bool> {
        match &*self.state.borrow() {
            DictionaryState::Ready(set) => Some(set.contains(word)),
            DictionaryState::Failed(_) => Some(false),
            DictionaryState::NotStarted | DictionaryState::Loading => None,
        }
    }

    /// 필요하면 로드를 기다린 뒤 포함 여부 반환
    pub async fn contains(&self, word: &str) -> KeyfixResult<bool> {
        let ready = match &*self.state.borrow() {
            DictionaryState::Ready(set) => Some(Arc::clone(set)),
            _ => None,
        };
        let set = match ready {
            Some(set) => set,
            None => self.load().await?,
        };
        Ok(set.contains(word))
    }

    /// 사전 로드 시작 (또는 진행 중인 로드에 합류)
    ///
    /// 최초 호출만 실제 fetch를 시작하며, 이후 호출은 같은 결과를 받습니다.
    /// 실패한 사전은 자동으로 재시도하지 않습니다 (`reload` 필요).
    pub async fn load(&self) -> KeyfixResult<Arc<HashSet<String>>> {
        self.start_loading();
        self.wait_settled().await
    }

    /// 실패/완료 상태를 버리고 다시 로드
    pub async fn reload(&self) -> KeyfixResult<Arc<HashSet<String>>> {
        self.state.send_if_modified(|state| {
            if state.is_settled() {
                *state = DictionaryState::NotStarted;
                true
            } else {
                false
            }
        });
        self.load().await
    }

    /// NotStarted -> Loading 전환에 성공한 호출만 로드 태스크를 띄움
    pub fn start_loading(&self) {
        let mut started = false;
        self.state.send_if_modified(|state| {
            if matches!(state, DictionaryState::NotStarted) {
                *state = DictionaryState::Loading;
                started = true;
                true
            } else {
                false
            }
        });

        if !started {
            return;
        }

        log::info!("사전 로드 시작");
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        // 대기자가 드롭되어도 로드는 끝까지 진행
        tokio::spawn(async move {
            let result = match source.fetch().await {
                Ok(bytes) => parse_word_list(&bytes),
                Err(e) => Err(e),
            };
            match result {
                Ok(set) => {
                    log::info!("사전 로드 완료: {}개 단어", set.len());
                    state.send_replace(DictionaryState::Ready(Arc::new(set)));
                }
                Err(e) => {
                    log::error!("사전 로드 실패: {}", e);
                    state.send_replace(DictionaryState::Failed(e));
                }
            }
        });
    }

    async fn wait_settled(&self) -> KeyfixResult<Arc<HashSet<String>>> {
        let mut rx = self.state.subscribe();
        let settled = rx
            .wait_for(DictionaryState::is_settled)
            .await
            .map_err(|e| KeyfixError::ResourceLoad(e.to_string()))?
            .clone();

        match settled {
            DictionaryState::Ready(set) => Ok(set),
            DictionaryState::Failed(e) => Err(e),
            DictionaryState::NotStarted | DictionaryState::Loading => Err(
                KeyfixError::ResourceLoad("사전 상태가 확정되지 않음".to_string()),
            ),
        }
    }
}

/// `from_words`용 원본 (reload 시 같은 단어 집합)
struct FixedWordList(Arc<HashSet<String>>);

#[async_trait]
impl WordListSource for FixedWordList {
    async fn fetch(&self) -> KeyfixResult<Vec<u8>> {
        Ok(serde_json::to_vec(&*self.0)?)
    }
}
