//! 교정 제안 정책

pub mod decision;
pub mod pipeline;

pub use decision::{decide, Decision, Proposal};
pub use pipeline::CorrectionPipeline;
