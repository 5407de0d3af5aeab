//! Gold and prediction table loading.

pub mod gold;
pub mod pred;
pub mod tables;

pub use gold::{load_gold, load_gold_file};
pub use pred::{load_pred, load_pred_file};

use indexmap::IndexMap;

/// Question identifier, lower-cased at load time.
pub type QuestionId = String;

/// Explanation sentence identifier, lower-cased at load time.
pub type ItemId = String;

/// Ordered mapping from question to its item list. Iteration order is
/// insertion order, which both loaders define as source row order.
pub type RelevanceMap = IndexMap<QuestionId, Vec<ItemId>>;
