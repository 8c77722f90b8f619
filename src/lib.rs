pub mod bridge;
pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod oracle;
pub mod platform;
pub mod policy;
pub mod ui;
pub mod wordlist;

pub use crate::core::converter::{convert, convert_word};
pub use detection::{detect_language, Language};
pub use error::{KeyfixError, KeyfixResult};
pub use oracle::ValidityOracle;
pub use policy::{decide, CorrectionPipeline, Decision, Proposal};
