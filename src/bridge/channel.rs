//! 컨텍스트 간 요청/응답 채널

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::messages::{IsHebrewWordResponse, Request};
use crate::error::{KeyfixError, KeyfixResult};

/// 백그라운드 컨텍스트에 요청을 보내고 응답을 받는 통로
#[async_trait]
pub trait RequestChannel: Send + Sync {
    async fn request(&self, request: Request) -> KeyfixResult<IsHebrewWordResponse>;
}

/// 워커로 전달되는 요청 + 응답 슬롯
pub(crate) struct Envelope {
    pub request: Request,
    pub reply: oneshot::Sender<IsHebrewWordResponse>,
}

/// 같은 프로세스 안의 백그라운드 워커 핸들
#[derive(Clone)]
pub struct BackgroundHandle {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl BackgroundHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Envelope>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl RequestChannel for BackgroundHandle {
    async fn request(&self, request: Request) -> KeyfixResult<IsHebrewWordResponse> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                request,
                reply: reply_tx,
            })
            .map_err(|_| KeyfixError::CrossContext("백그라운드 워커가 종료됨".to_string()))?;

        reply_rx
            .await
            .map_err(|_| KeyfixError::CrossContext("응답 없이 채널이 닫힘".to_string()))
    }
}
