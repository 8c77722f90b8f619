//! 캐럿 앞 단어 교체

use super::surface::EditableSurface;

/// 캐럿 앞 마지막 토큰과 그 뒤 공백
fn split_last_token(text: &str) -> (&str, &str) {
    let trimmed = text.trim_end();
    let trailing = &text[trimmed.len()..];
    let start = trimmed
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    (&trimmed[start..], trailing)
}

/// 캐럿 앞의 `original` 토큰을 `suggestion`으로 교체
///
/// 토큰 뒤 공백은 유지하고, 없으면 공백 하나를 붙입니다.
/// 캐럿 앞 토큰이 `original`과 다르면 (이미 더 입력한 경우 등) 아무것도 하지 않고 false.
pub fn replace_last_word<S>(surface: &mut S, original: &str, suggestion: &str) -> bool
where
    S: EditableSurface + ?Sized,
{
    let before = surface.text_before_caret();
    let (token, trailing) = split_last_token(&before);

    if token.is_empty() || token != original {
        log::debug!("교체 대상 '{}'을(를) 캐럿 앞에서 찾지 못함", original);
        return false;
    }

    let separator = if trailing.is_empty() { " " } else { trailing };
    let remove = token.chars().count() + trailing.chars().count();
    let insert = format!("{}{}", suggestion, separator);

    surface.replace_before_caret(remove, &insert);
    surface.notify_changed();
    true
}
