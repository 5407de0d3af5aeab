//! Reference TF-IDF ranker: a replaceable producer of prediction tables.
//!
//! Anything that emits `question<TAB>item` lines in best-first order can
//! feed the scorer; this module is the bundled nearest-neighbor baseline.

pub mod corpus;
pub mod tfidf;

pub use corpus::{
    collect_explanations, load_questions, load_questions_file, read_explanations, Explanation,
    Question,
};
pub use tfidf::{cosine_distance, rank_nearest, SparseVector, TfidfVectorizer};
