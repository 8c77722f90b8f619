//! 히브리어 단어 목록 빌더 (텍스트 -> JSON 배열)
//!
//! 줄 단위 텍스트 파일을 읽어 앞뒤 공백을 정리하고 빈 줄을 버린 뒤
//! 사전 리소스 형식(문자열 JSON 배열)으로 저장합니다.

use std::fs;
use std::path::Path;

use crate::error::KeyfixResult;

/// 줄 단위 텍스트를 단어 목록으로 변환
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 입력 텍스트 파일을 JSON 배열로 변환해 저장. 저장한 단어 수 반환
pub fn build_word_list(input: &Path, output: &Path) -> KeyfixResult<usize> {
    log::info!("텍스트 파일 읽기: {}", input.display());
    let text = fs::read_to_string(input)?;
    let words = parse_lines(&text);

    let json = serde_json::to_string(&words)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            log::info!("디렉토리 생성: {}", parent.display());
        }
    }
    fs::write(output, json)?;

    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::dictionary::parse_word_list;

    #[test]
    fn test_parse_lines() {
        let words = parse_lines("שלום\n  בית \n\n\r\nגן\r\n");
        assert_eq!(words, vec!["שלום", "בית", "גן"]);
    }

    #[test]
    fn test_build_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hebrew.txt");
        let output = dir.path().join("data").join("hebrew-words.json");
        fs::write(&input, "שלום\n\nבית\n").unwrap();

        let count = build_word_list(&input, &output).unwrap();
        assert_eq!(count, 2);

        let set = parse_word_list(&fs::read(&output).unwrap()).unwrap();
        assert!(set.contains("שלום"));
        assert!(set.contains("בית"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = build_word_list(&dir.path().join("none.txt"), &dir.path().join("out.json"));
        assert!(result.is_err());
    }
}
