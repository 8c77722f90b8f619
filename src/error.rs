//! 에러 타입
//!
//! 모든 내부 연산은 `Result<_, KeyfixError>`를 반환하고,
//! 검증기(oracle) 경계에서만 `false`로 접힌다.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyfixError {
    /// 사전 리소스 읽기/파싱 실패
    #[error("사전 로드 실패: {0}")]
    ResourceLoad(String),

    /// 원격 사전 조회 실패 (연결 불가 또는 2xx 아님)
    #[error("원격 조회 실패: {0}")]
    Transport(String),

    /// 백그라운드 컨텍스트와의 요청/응답 실패
    #[error("컨텍스트 간 요청 실패: {0}")]
    CrossContext(String),

    /// 설정 파일 저장 실패
    #[error("설정 오류: {0}")]
    Config(String),
}

pub type KeyfixResult<T> = Result<T, KeyfixError>;

impl From<std::io::Error> for KeyfixError {
    fn from(err: std::io::Error) -> Self {
        KeyfixError::ResourceLoad(err.to_string())
    }
}

impl From<serde_json::Error> for KeyfixError {
    fn from(err: serde_json::Error) -> Self {
        KeyfixError::ResourceLoad(format!("JSON 파싱 오류: {}", err))
    }
}

impl From<reqwest::Error> for KeyfixError {
    fn from(err: reqwest::Error) -> Self {
        KeyfixError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_resource_load() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(KeyfixError::from(io), KeyfixError::ResourceLoad(_)));
    }

    #[test]
    fn test_json_error_is_resource_load() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let converted = KeyfixError::from(err);
        assert!(converted.to_string().starts_with("사전 로드 실패"));
    }
}
