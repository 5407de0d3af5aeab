use crate::dataset::ItemId;

/// Compute the 1-based rank at which each gold item is first predicted.
///
/// Predicted items are scanned best-first; each predicted item may consume
/// at most one matching gold occurrence, so a gold list with duplicates
/// needs the same item predicted once per occurrence (predictions are
/// already deduplicated, so only gold-side repeats are affected). Gold
/// occurrences never predicted each contribute a trailing rank of 0 and are
/// reported through a non-fatal warning naming the question.
///
/// Matched ranks are appended in prediction scan order, then the zeros;
/// when both inputs are non-empty the output has exactly one entry per gold
/// occurrence. If either input is empty the question is unmeasurable and
/// the result is empty.
pub fn compute_ranks(question: &str, gold: &[ItemId], pred: &[ItemId]) -> Vec<usize> {
    let mut ranks = Vec::new();

    if gold.is_empty() || pred.is_empty() {
        return ranks;
    }

    // Consumed markers stand in for removal so the scan never credits the
    // same occurrence twice.
    let mut consumed = vec![false; gold.len()];

    for (position, pred_id) in pred.iter().enumerate() {
        if let Some(index) = (0..gold.len()).find(|&j| !consumed[j] && gold[j] == *pred_id) {
            consumed[index] = true;
            ranks.push(position + 1);
        }
    }

    let leftovers: Vec<&str> = gold
        .iter()
        .zip(&consumed)
        .filter(|(_, &was_consumed)| !was_consumed)
        .map(|(item, _)| item.as_str())
        .collect();

    if !leftovers.is_empty() {
        log::warn!(
            "question {question}: gold items never predicted: {}",
            leftovers.join(", ")
        );
        ranks.extend(std::iter::repeat(0).take(leftovers.len()));
    }

    ranks
}
