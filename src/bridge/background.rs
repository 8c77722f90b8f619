//! 백그라운드 컨텍스트: 사전을 소유하고 `isHebrewWord` 요청에 응답

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use super::channel::{BackgroundHandle, Envelope};
use super::messages::{IsHebrewWordResponse, Request};
use crate::detection::clean_hebrew_token;
use crate::oracle::dictionary::HebrewDictionary;

/// 요청의 `word` 값을 조회 가능한 단어로 정리 (문자열이 아니거나 비면 None)
fn hebrew_query(word: &Value) -> Option<String> {
    let cleaned = clean_hebrew_token(word.as_str()?);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

pub struct BackgroundService {
    dictionary: Arc<HebrewDictionary>,
}

impl BackgroundService {
    pub fn new(dictionary: Arc<HebrewDictionary>) -> Self {
        Self { dictionary }
    }

    /// 서비스 생성과 동시에 사전 로드 시작
    pub fn start(dictionary: Arc<HebrewDictionary>) -> Arc<Self> {
        dictionary.start_loading();
        Arc::new(Self::new(dictionary))
    }

    /// 기다리지 않고 답할 수 있으면 즉시 응답
    ///
    /// 잘못된 단어, Ready, Failed는 즉시 응답. 로드 중이면 None
    pub fn respond_now(&self, request: &Request) -> Option<IsHebrewWordResponse> {
        let Request::IsHebrewWord { word } = request;
        let Some(word) = hebrew_query(word) else {
            return Some(IsHebrewWordResponse::invalid());
        };
        self.dictionary
            .lookup_now(&word)
            .map(IsHebrewWordResponse::new)
    }

    /// 항상 응답을 만든다 (필요하면 로드 완료까지 대기)
    pub async fn respond(&self, request: &Request) -> IsHebrewWordResponse {
        if let Some(response) = self.respond_now(request) {
            return response;
        }

        log::warn!("사전이 아직 준비되지 않음, 로드 완료 대기");
        let Request::IsHebrewWord { word } = request;
        let Some(word) = hebrew_query(word) else {
            return IsHebrewWordResponse::invalid();
        };

        match self.dictionary.contains(&word).await {
            Ok(is_valid) => IsHebrewWordResponse::new(is_valid),
            Err(e) => {
                log::error!("사전 확인 중 오류: {}", e);
                IsHebrewWordResponse::invalid()
            }
        }
    }

    /// JSON 메시지 처리. 알 수 없는 메시지 유형은 응답하지 않음 (None)
    pub async fn handle_json(&self, raw: &str) -> Option<String> {
        let request: Request = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("처리하지 않는 메시지: {}", e);
                return None;
            }
        };
        let response = self.respond(&request).await;
        serde_json::to_string(&response).ok()
    }

    /// 요청 워커 시작
    ///
    /// 즉시 답할 수 있는 요청은 워커에서 바로 응답하고,
    /// 로드를 기다려야 하는 요청은 별도 태스크로 넘겨 다른 요청을 막지 않습니다.
    pub fn spawn(self: Arc<Self>) -> BackgroundHandle {
        let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();

        tokio::spawn(async move {
            while let Some(Envelope { request, reply }) = rx.recv().await {
                if let Some(response) = self.respond_now(&request) {
                    let _ = reply.send(response);
                    continue;
                }

                let service = Arc::clone(&self);
                tokio::spawn(async move {
                    let response = service.respond(&request).await;
                    let _ = reply.send(response);
                });
            }
            log::info!("백그라운드 워커 종료");
        });

        BackgroundHandle::new(tx)
    }
}
