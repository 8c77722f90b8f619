//! 편집 가능한 입력 영역 추상화

/// 텍스트 입력 영역 (입력 필드, 리치 텍스트 등)
pub trait EditableSurface {
    /// 캐럿 앞 텍스트
    fn text_before_caret(&self) -> String;

    /// 캐럿 바로 앞 `remove`개 문자를 `insert`로 교체하고 캐럿을 삽입 텍스트 뒤에 둠
    fn replace_before_caret(&mut self, remove: usize, insert: &str);

    /// 내용 변경 통지
    fn notify_changed(&mut self);
}

/// 메모리 상의 단일 줄/여러 줄 입력 필드
///
/// 캐럿 위치는 문자(char) 단위입니다.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    caret: usize,
    changes: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// 텍스트를 채우고 캐럿을 끝에 둠
    pub fn with_text(text: &str) -> Self {
        Self {
            value: text.to_string(),
            caret: text.chars().count(),
            changes: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// 변경 통지 횟수
    pub fn change_count(&self) -> usize {
        self.changes
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.value.chars().count());
    }

    /// 캐럿 위치에 문자 입력
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.caret);
        self.value.insert(at, c);
        self.caret += 1;
        self.notify_changed();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

impl EditableSurface for TextField {
    fn text_before_caret(&self) -> String {
        self.value[..self.byte_offset(self.caret)].to_string()
    }

    fn replace_before_caret(&mut self, remove: usize, insert: &str) {
        let remove = remove.min(self.caret);
        let start = self.byte_offset(self.caret - remove);
        let end = self.byte_offset(self.caret);
        self.value.replace_range(start..end, insert);
        self.caret = self.caret - remove + insert.chars().count();
    }

    fn notify_changed(&mut self) {
        self.changes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_caret() {
        let mut field = TextField::new();
        for c in "akuo ".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value(), "akuo ");
        assert_eq!(field.caret(), 5);
        assert_eq!(field.change_count(), 5);
    }

    #[test]
    fn test_text_before_caret_multibyte() {
        let mut field = TextField::with_text("שלום עולם");
        field.set_caret(4);
        assert_eq!(field.text_before_caret(), "שלום");
    }

    #[test]
    fn test_replace_before_caret() {
        let mut field = TextField::with_text("hi akuo tail");
        field.set_caret(8);
        field.replace_before_caret(5, "שלום ");
        assert_eq!(field.value(), "hi שלום tail");
        assert_eq!(field.caret(), 8);
    }

    #[test]
    fn test_set_caret_clamped() {
        let mut field = TextField::with_text("abc");
        field.set_caret(100);
        assert_eq!(field.caret(), 3);
    }
}
