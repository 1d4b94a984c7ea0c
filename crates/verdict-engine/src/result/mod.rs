//! Evaluation results: statuses, traces, metadata, and assembly

mod builder;
mod result;
mod trace;

pub use builder::ResultBuilder;
pub use result::{DecisionResult, ResultMeta, Status};
pub use trace::RuleTrace;
