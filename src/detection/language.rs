//! 토큰 문자 체계 판별
//!
//! 히브리어 블록(U+0590 ~ U+05FF)과 라틴 문자 포함 여부로 판별합니다.
//! 게레쉬/아포스트로피는 두 체계가 공유하므로 단독으로 판정을 깨지 않습니다.

use crate::core::layout::GERESH;

/// 토큰의 문자 체계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Latin,
    Hebrew,
    Unknown,
}

/// 라틴 문자(A-Z, a-z)인지 확인
pub fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// 히브리어 유니코드 블록 문자인지 확인
pub fn is_hebrew_char(ch: char) -> bool {
    let cp = ch as u32;
    (0x0590..=0x05FF).contains(&cp)
}

/// 두 체계가 공유하는 게레쉬/아포스트로피
pub fn is_shared_mark(ch: char) -> bool {
    ch == GERESH || ch == '\''
}

/// 토큰의 문자 체계 판별 (먼저 맞는 규칙이 이김)
pub fn detect_language(token: &str) -> Language {
    let has_latin = token.chars().any(is_latin_letter);
    let has_hebrew = token.chars().any(is_hebrew_char);

    // 1~2. 단일 체계 빠른 경로
    if has_latin && !has_hebrew {
        return Language::Latin;
    }
    if has_hebrew && !has_latin {
        return Language::Hebrew;
    }

    if token.is_empty() {
        return Language::Unknown;
    }

    // 3~4. 공유 기호만 섞인 경우
    if token.chars().all(|c| is_latin_letter(c) || is_shared_mark(c)) {
        return Language::Latin;
    }
    if token.chars().all(|c| is_hebrew_char(c) || is_shared_mark(c)) {
        return Language::Hebrew;
    }

    Language::Unknown
}
