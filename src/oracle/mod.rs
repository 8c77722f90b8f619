//! 단어 유효성 검증 (로컬 히브리어 사전 + 원격 영어 사전)

pub mod dictionary;
pub mod lookup;
pub mod validity;

pub use dictionary::{DictionaryState, FileWordList, HebrewDictionary, WordListSource};
pub use lookup::{DictionaryApiClient, WordLookup, DEFAULT_LOOKUP_BASE_URL};
pub use validity::ValidityOracle;
