use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use regex::Regex;

/// Sparse TF-IDF vector: `(term id, weight)` pairs sorted by term id,
/// L2-normalized at construction.
pub type SparseVector = Vec<(usize, f64)>;

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// Tokens are runs of at least two word characters in lower-cased text,
/// document frequencies are smoothed (`ln((1 + n) / (1 + df)) + 1`), and
/// vectors are L2-normalized so the dot product of two vectors is their
/// cosine similarity.
pub struct TfidfVectorizer {
    vocabulary: IndexMap<String, usize>,
    idf: Vec<f64>,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and document frequencies from a corpus.
    /// Term ids are assigned in first-seen order.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let token_pattern = Regex::new(r"\b\w\w+\b").expect("token pattern is valid");

        let mut vocabulary: IndexMap<String, usize> = IndexMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokenize(&token_pattern, document.as_ref()) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token).or_insert(next_id);
                if id == document_frequency.len() {
                    document_frequency.push(0);
                }
                if seen.insert(id) {
                    document_frequency[id] += 1;
                }
            }
        }

        let n_documents = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self {
            vocabulary,
            idf,
            token_pattern,
        }
    }

    /// Project a document onto the learned vocabulary.
    ///
    /// Out-of-vocabulary tokens are ignored; a document with no known
    /// tokens yields the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(&self.token_pattern, text) {
            if let Some(&id) = self.vocabulary.get(&token) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(id, count)| (id, count * self.idf[id]))
            .collect();
        vector.sort_by_key(|&(id, _)| id);

        let norm = vector.iter().map(|&(_, weight)| weight * weight).sum::<f64>().sqrt();
        if norm > 0.0 {
            for entry in &mut vector {
                entry.1 /= norm;
            }
        }

        vector
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

fn tokenize(pattern: &Regex, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Cosine distance between two L2-normalized sparse vectors.
pub fn cosine_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    1.0 - dot(a, b)
}

fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut total = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                total += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    total
}

/// Indices of the `k` corpus vectors nearest to `query`, nearest first.
/// Ties resolve to the lower corpus index so output is deterministic.
pub fn rank_nearest(query: &SparseVector, corpus: &[SparseVector], k: usize) -> Vec<usize> {
    let mut order: Vec<(usize, f64)> = corpus
        .iter()
        .enumerate()
        .map(|(index, vector)| (index, cosine_distance(query, vector)))
        .collect();

    order.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    order.into_iter().take(k).map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(corpus: &[&str]) -> TfidfVectorizer {
        TfidfVectorizer::fit(corpus)
    }

    #[test]
    fn test_tokenizer_drops_single_character_tokens() {
        let vectorizer = fit(&["a bc def"]);
        assert_eq!(vectorizer.vocabulary_len(), 2);
    }

    #[test]
    fn test_tokenizer_is_case_insensitive() {
        let vectorizer = fit(&["Water WATER water"]);
        assert_eq!(vectorizer.vocabulary_len(), 1);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = fit(&["water is wet", "fire is hot"]);
        let vector = vectorizer.transform("water is wet");
        let norm: f64 = vector.iter().map(|&(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_ignores_unknown_tokens() {
        let vectorizer = fit(&["water is wet"]);
        let vector = vectorizer.transform("quantum entanglement");
        assert!(vector.is_empty());
    }

    #[test]
    fn test_identical_document_is_nearest() {
        let corpus = vec![
            "the sun heats the air".to_string(),
            "ice melts into water".to_string(),
            "plants need sunlight to grow".to_string(),
        ];
        let vectorizer = TfidfVectorizer::fit(&corpus);
        let vectors: Vec<SparseVector> =
            corpus.iter().map(|text| vectorizer.transform(text)).collect();

        let query = vectorizer.transform("ice melts into water");
        let ranked = rank_nearest(&query, &vectors, 3);
        assert_eq!(ranked[0], 1);
        assert!((cosine_distance(&query, &vectors[1])).abs() < 1e-9);
    }

    #[test]
    fn test_rank_nearest_respects_k() {
        let vectorizer = fit(&["one two", "three four", "five six"]);
        let vectors: Vec<SparseVector> = ["one two", "three four", "five six"]
            .iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        let query = vectorizer.transform("one two");
        assert_eq!(rank_nearest(&query, &vectors, 2).len(), 2);
    }

    #[test]
    fn test_rank_nearest_breaks_ties_by_index() {
        // An empty query is equidistant from everything.
        let vectorizer = fit(&["one two", "three four"]);
        let vectors: Vec<SparseVector> = ["one two", "three four"]
            .iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        let query = vectorizer.transform("zzz");
        assert_eq!(rank_nearest(&query, &vectors, 2), vec![0, 1]);
    }
}
