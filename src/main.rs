//! Keyfix - 히브리어/영어 자판 실수 교정기
//!
//! 표준 입력의 각 줄을 입력 필드에 타이핑한 것처럼 처리합니다.
//! 경계 문자가 입력될 때마다 직전 단어를 검사하고, `:accept`로 현재 제안을 적용,
//! `:dismiss`로 제안을 닫습니다.

use keyfix::bridge::BackgroundService;
use keyfix::config::{config_path, load_config, save_config};
use keyfix::detection::is_boundary_char;
use keyfix::oracle::{DictionaryApiClient, FileWordList, HebrewDictionary, ValidityOracle};
use keyfix::platform::{EditableSurface, TextField};
use keyfix::policy::CorrectionPipeline;
use keyfix::ui::SuggestionSlot;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const ACCEPT_COMMAND: &str = ":accept";
const DISMISS_COMMAND: &str = ":dismiss";

#[tokio::main]
async fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();
    if !config_path().exists() {
        // 첫 실행: 편집할 수 있도록 기본 설정 파일 생성
        if let Err(e) = save_config(&config) {
            log::warn!("기본 설정 파일 생성 실패: {}", e);
        }
    }

    // 백그라운드 컨텍스트 (시작과 동시에 사전 로드)
    let dictionary = Arc::new(HebrewDictionary::new(Arc::new(FileWordList::new(
        &config.dictionary_path,
    ))));
    let background = BackgroundService::start(dictionary).spawn();

    // 포그라운드 컨텍스트
    let lookup = Arc::new(DictionaryApiClient::new(config.lookup_base_url.clone()));
    let oracle = Arc::new(ValidityOracle::new(Arc::new(background), lookup));
    let pipeline = CorrectionPipeline::new(oracle);

    let mut field = TextField::new();
    let mut slot = SuggestionSlot::new(Duration::from_millis(config.suggestion_timeout_ms));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        if line.trim() == ACCEPT_COMMAND {
            if slot.accept(&mut field) {
                println!("적용됨: {}", field.value());
            } else {
                println!("적용할 제안 없음");
            }
            continue;
        }
        if line.trim() == DISMISS_COMMAND {
            slot.dismiss();
            continue;
        }

        for c in line.chars().chain(std::iter::once('\n')) {
            field.insert_char(c);
            if !is_boundary_char(c) {
                continue;
            }
            if let Some(proposal) = pipeline.on_input(&field.text_before_caret()).await {
                println!("{}", SuggestionSlot::label(&proposal));
                slot.show(proposal);
            }
        }
    }

    print!("{}", field.value());
}
