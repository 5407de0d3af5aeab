pub mod baseline;
pub mod dataset;
pub mod error;
pub mod eval;

pub use dataset::{load_gold, load_gold_file, load_pred, load_pred_file, RelevanceMap};
pub use error::{ExplmapError, Result};
pub use eval::{average_precision, compute_ranks, mean_average_precision};
