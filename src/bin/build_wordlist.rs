//! 히브리어 단어 목록 빌더
//!
//! 사용법: keyfix-wordlist [입력 텍스트] [출력 JSON]

use keyfix::wordlist::build_word_list;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("hebrew.txt"));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data").join("hebrew-words.json"));

    match build_word_list(&input, &output) {
        Ok(count) => {
            log::info!("변환 완료: {}개 단어 -> {}", count, output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("변환 실패: {}", e);
            eprintln!("'{}' 파일이 있는지 확인해주세요.", input.display());
            ExitCode::FAILURE
        }
    }
}
