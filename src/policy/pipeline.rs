//! 입력 이벤트 -> 교정 제안 파이프라인
//!
//! 1. 캐럿 앞 마지막 토큰 추출
//! 2. 언어 판별 (Unknown이면 중단)
//! 3. 원본 유효성 확인
//! 4. 반대 자판으로 변환 (변화 없으면 중단)
//! 5. 변환 결과 유효성 확인
//! 6. 최종 판정

use std::sync::Arc;

use crate::core::converter::convert;
use crate::detection::{detect_language, extract_trigger_token, Language};
use crate::oracle::ValidityOracle;

use super::decision::{decide, Decision, Proposal};

pub struct CorrectionPipeline {
    oracle: Arc<ValidityOracle>,
}

impl CorrectionPipeline {
    pub fn new(oracle: Arc<ValidityOracle>) -> Self {
        Self { oracle }
    }

    /// 캐럿 앞 텍스트로 한 번 실행. 경계 문자가 아니거나 제안이 없으면 None
    pub async fn on_input(&self, text_before_caret: &str) -> Option<Proposal> {
        let token = extract_trigger_token(text_before_caret)?;
        self.evaluate(token).await.proposal()
    }

    /// 토큰 하나에 대한 판정
    pub async fn evaluate(&self, token: &str) -> Decision {
        let language = detect_language(token);
        if language == Language::Unknown {
            return Decision::UnknownLanguage;
        }

        let original_is_valid = self.oracle.is_real_word(token).await;

        let converted = convert(token, language);
        if converted == token {
            return Decision::NotConverted;
        }

        // 히브리어 -> 영어 변환은 원격 사전을 믿기 어려워 검증 없이 유효로 간주
        // (알려진 오탐 원인)
        let converted_is_valid = match language {
            Language::Hebrew => true,
            _ => self.oracle.is_real_word(&converted).await,
        };

        let decision = decide(token, &converted, original_is_valid, converted_is_valid);
        match &decision {
            Decision::Propose(p) => {
                log::info!("'{}' (무효) -> 제안: '{}' (유효)", p.original, p.converted)
            }
            Decision::OriginalValid => log::debug!("'{}' 유효한 단어, 교정하지 않음", token),
            _ => log::debug!("'{}', 변환 '{}' 모두 사전에 없음", token, converted),
        }
        decision
    }
}
