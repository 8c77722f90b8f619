//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KeyfixError;
use crate::oracle::DEFAULT_LOOKUP_BASE_URL;
use crate::ui::DEFAULT_SUGGESTION_TIMEOUT_MS;

/// Keyfix 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KeyfixConfig {
    /// 히브리어 단어 목록(JSON 배열) 경로
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// 영어 단어 조회 서비스 주소
    #[serde(default = "default_lookup_base_url")]
    pub lookup_base_url: String,
    /// 제안 툴팁 자동 닫힘 시간 (ms)
    #[serde(default = "default_suggestion_timeout_ms")]
    pub suggestion_timeout_ms: u64,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("data").join("hebrew-words.json")
}

fn default_lookup_base_url() -> String {
    DEFAULT_LOOKUP_BASE_URL.to_string()
}

fn default_suggestion_timeout_ms() -> u64 {
    DEFAULT_SUGGESTION_TIMEOUT_MS
}

impl Default for KeyfixConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            lookup_base_url: default_lookup_base_url(),
            suggestion_timeout_ms: default_suggestion_timeout_ms(),
        }
    }
}

/// 설정 파일 경로: ~/.config/keyfix/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("keyfix").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KeyfixConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> KeyfixConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            KeyfixConfig::default()
        }),
        Err(_) => KeyfixConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &KeyfixConfig) -> Result<(), KeyfixError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &KeyfixConfig, path: &Path) -> Result<(), KeyfixError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| KeyfixError::Config(format!("설정 디렉토리 생성 실패: {}", e)))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| KeyfixError::Config(format!("직렬화 실패: {}", e)))?;
    fs::write(path, json).map_err(|e| KeyfixError::Config(format!("설정 파일 저장 실패: {}", e)))?;
    Ok(())
}
