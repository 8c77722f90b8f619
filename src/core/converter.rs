//! 자판 기준 단어 변환기

use crate::core::layout::Direction;
use crate::detection::language::{detect_language, Language};

/// 지정한 방향의 테이블로 문자 단위 변환
/// 테이블에 없는 문자(숫자, 일부 특수문자)는 그대로 유지
pub fn transliterate(input: &str, direction: Direction) -> String {
    let table = direction.table();
    input
        .chars()
        .map(|c| table.get(c).unwrap_or(c))
        .collect()
}

/// 판별된 언어의 반대 자판으로 변환 (Unknown이면 그대로)
pub fn convert(token: &str, language: Language) -> String {
    match language {
        Language::Latin => transliterate(token, Direction::LatinToHebrew),
        Language::Hebrew => transliterate(token, Direction::HebrewToLatin),
        Language::Unknown => token.to_string(),
    }
}

/// 언어를 판별한 뒤 반대 자판으로 변환
pub fn convert_word(token: &str) -> String {
    convert(token, detect_language(token))
}
