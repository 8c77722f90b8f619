//! 입력 트리거/정리용 문자 패턴

use super::language::is_latin_letter;

/// 입력되면 직전 단어 검사를 시작하는 경계 문자
pub const BOUNDARY_CHARS: &[char] = &[' ', '\n', '.', ',', '!', '?'];

/// 히브리어 사전 조회 전에 제거하는 구두점
pub const HEBREW_STRIP_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '{', '}', '[', ']', '<', '>', '/', '\\',
];

pub fn is_boundary_char(c: char) -> bool {
    BOUNDARY_CHARS.contains(&c)
}

/// 히브리어 토큰에서 구두점 제거
pub fn clean_hebrew_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !HEBREW_STRIP_CHARS.contains(c))
        .collect()
}

/// 라틴 토큰에서 라틴 문자 외 모두 제거 후 소문자화
pub fn clean_latin_token(token: &str) -> String {
    token
        .chars()
        .filter(|&c| is_latin_letter(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 캐럿 앞 텍스트에서 검사 대상 토큰 추출
///
/// 마지막 문자가 경계 문자일 때만 동작하며, 공백으로 구분된 마지막 토큰을 반환합니다.
/// 토큰에 붙은 구두점(예: "akuo,")은 그대로 남습니다.
pub fn extract_trigger_token(text_before_caret: &str) -> Option<&str> {
    let last = text_before_caret.chars().last()?;
    if !is_boundary_char(last) {
        return None;
    }

    text_before_caret
        .split_whitespace()
        .next_back()
        .filter(|token| !token.is_empty())
}
