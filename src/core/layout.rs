//! 영문(QWERTY) <-> 히브리어(SI-1452) 자판 매핑 테이블
//!
//! 같은 물리 키를 누르면 두 자판에서 어떤 문자가 나오는지 정의합니다.
//! 테이블은 프로세스당 한 번만 만들어지고 이후 읽기 전용입니다.

use std::collections::HashMap;
use std::sync::LazyLock;

/// 게레쉬 (U+05F3)
pub const GERESH: char = '\u{05F3}';
/// 게르샤임 (U+05F4)
pub const GERSHAYIM: char = '\u{05F4}';

/// 영문 키 -> 히브리어 문자
const LATIN_TO_HEBREW: &[(char, char)] = &[
    // 소문자
    ('q', '/'),
    ('w', GERESH),
    ('e', 'ק'),
    ('r', 'ר'),
    ('t', 'א'),
    ('y', 'ט'),
    ('u', 'ו'),
    ('i', 'ן'),
    ('o', 'ם'),
    ('p', 'פ'),
    ('a', 'ש'),
    ('s', 'ד'),
    ('d', 'ג'),
    ('f', 'כ'),
    ('g', 'ע'),
    ('h', 'י'),
    ('j', 'ח'),
    ('k', 'ל'),
    ('l', 'ך'),
    ('z', 'ז'),
    ('x', 'ס'),
    ('c', 'ב'),
    ('v', 'ה'),
    ('b', 'נ'),
    ('n', 'מ'),
    ('m', 'צ'),
    (',', 'ת'),
    ('.', 'ץ'),
    (';', 'ף'),
    ('\'', GERESH),
    // 대문자 (히브리어에는 대소문자가 없으므로 같은 글자)
    ('Q', '?'),
    ('W', GERSHAYIM),
    ('E', 'ק'),
    ('R', 'ר'),
    ('T', 'א'),
    ('Y', 'ט'),
    ('U', 'ו'),
    ('I', 'ן'),
    ('O', 'ם'),
    ('P', 'פ'),
    ('A', 'ש'),
    ('S', 'ד'),
    ('D', 'ג'),
    ('F', 'כ'),
    ('G', 'ע'),
    ('H', 'י'),
    ('J', 'ח'),
    ('K', 'ל'),
    ('L', 'ך'),
    ('Z', 'ז'),
    ('X', 'ס'),
    ('C', 'ב'),
    ('V', 'ה'),
    ('B', 'נ'),
    ('N', 'מ'),
    ('M', 'צ'),
    ('<', 'ת'),
    ('>', 'ץ'),
];

/// 히브리어 문자 -> 영문 키 (항상 소문자)
const HEBREW_TO_LATIN: &[(char, char)] = &[
    ('/', 'q'),
    // 게레쉬/게르샤임/아포스트로피는 모두 w 키로 합쳐짐
    (GERESH, 'w'),
    (GERSHAYIM, 'w'),
    ('\'', 'w'),
    ('ק', 'e'),
    ('ר', 'r'),
    ('א', 't'),
    ('ט', 'y'),
    ('ו', 'u'),
    ('ן', 'i'),
    ('ם', 'o'),
    ('פ', 'p'),
    ('ש', 'a'),
    ('ד', 's'),
    ('ג', 'd'),
    ('כ', 'f'),
    ('ע', 'g'),
    ('י', 'h'),
    ('ח', 'j'),
    ('ל', 'k'),
    ('ך', 'l'),
    ('ז', 'z'),
    ('ס', 'x'),
    ('ב', 'c'),
    ('ה', 'v'),
    ('נ', 'b'),
    ('מ', 'n'),
    ('צ', 'm'),
    ('ת', ','),
    ('ץ', '.'),
    ('ף', ';'),
    ('?', 'q'),
];

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LatinToHebrew,
    HebrewToLatin,
}

impl Direction {
    /// 해당 방향의 매핑 테이블
    pub fn table(self) -> &'static TranslationTable {
        match self {
            Direction::LatinToHebrew => &LATIN_TO_HEBREW_TABLE,
            Direction::HebrewToLatin => &HEBREW_TO_LATIN_TABLE,
        }
    }
}

/// 문자 하나를 문자 하나로 바꾸는 불변 매핑
#[derive(Debug)]
pub struct TranslationTable {
    map: HashMap<char, char>,
}

impl TranslationTable {
    fn from_pairs(pairs: &[(char, char)]) -> Self {
        Self {
            map: pairs.iter().copied().collect(),
        }
    }

    /// 매핑된 문자 반환, 매핑이 없으면 None
    pub fn get(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }
}

static LATIN_TO_HEBREW_TABLE: LazyLock<TranslationTable> =
    LazyLock::new(|| TranslationTable::from_pairs(LATIN_TO_HEBREW));

static HEBREW_TO_LATIN_TABLE: LazyLock<TranslationTable> =
    LazyLock::new(|| TranslationTable::from_pairs(HEBREW_TO_LATIN));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_letters_mapped() {
        let table = Direction::LatinToHebrew.table();
        for c in 'a'..='z' {
            assert!(table.contains(c), "'{}' 매핑 없음", c);
        }
    }

    #[test]
    fn test_uppercase_follows_lowercase() {
        let table = Direction::LatinToHebrew.table();
        // Q, W는 Shift 기호가 따로 있음
        for c in 'A'..='Z' {
            if c == 'Q' || c == 'W' {
                continue;
            }
            assert_eq!(table.get(c), table.get(c.to_ascii_lowercase()));
        }
        assert_eq!(table.get('Q'), Some('?'));
        assert_eq!(table.get('W'), Some(GERSHAYIM));
    }

    #[test]
    fn test_many_to_one_marks() {
        let table = Direction::HebrewToLatin.table();
        assert_eq!(table.get(GERESH), Some('w'));
        assert_eq!(table.get(GERSHAYIM), Some('w'));
        assert_eq!(table.get('\''), Some('w'));
    }

    #[test]
    fn test_lowercase_keys_are_stable_both_ways() {
        let forward = Direction::LatinToHebrew.table();
        let backward = Direction::HebrewToLatin.table();
        for c in ('a'..='z').chain([',', '.', ';']) {
            let hebrew = forward.get(c).unwrap();
            assert_eq!(backward.get(hebrew), Some(c), "'{}' -> '{}'", c, hebrew);
        }
    }

    #[test]
    fn test_unmapped() {
        let table = Direction::LatinToHebrew.table();
        assert_eq!(table.get('1'), None);
        assert_eq!(table.get('!'), None);
    }
}
