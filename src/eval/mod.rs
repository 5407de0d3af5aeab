//! Scoring: per-question rank computation, average precision, corpus MAP.

pub mod metrics;
pub mod ranks;
pub mod report;

pub use metrics::{average_precision, mean_average_precision};
pub use ranks::compute_ranks;
pub use report::{EvalReport, QuestionScore};
