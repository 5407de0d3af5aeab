//! Average precision per question and mean average precision per corpus.

use crate::dataset::RelevanceMap;
use crate::eval::ranks::compute_ranks;

/// Average precision of a single question's rank list.
///
/// The entry at 0-based position `i` holding rank `r` contributes
/// `(i + 1) / r`; a rank of 0 (gold item never retrieved) contributes
/// positive infinity so the caller cannot mistake the question for a merely
/// low-scoring one. Aggregation clamps the infinity to 0 in a second stage.
/// An empty rank list scores 0.
pub fn average_precision(ranks: &[usize]) -> f64 {
    if ranks.is_empty() {
        return 0.0;
    }

    let total: f64 = ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            if rank > 0 {
                (i + 1) as f64 / rank as f64
            } else {
                f64::INFINITY
            }
        })
        .sum();

    total / ranks.len() as f64
}

/// Mean average precision over every gold question.
///
/// Questions missing from `pred` are skipped without a score but still
/// count in the denominator, so absent predictions lower the mean through
/// `gold.len()` rather than through an explicit zero. A question with an
/// unretrieved gold item scores infinity in isolation and is clamped to 0
/// here. `on_question` is invoked with each scored question in gold
/// insertion order; it is a reporting side channel with no effect on the
/// aggregate.
pub fn mean_average_precision(
    gold: &RelevanceMap,
    pred: &RelevanceMap,
    mut on_question: Option<&mut dyn FnMut(&str, f64)>,
) -> f64 {
    if gold.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;

    for (question, gold_items) in gold {
        let Some(pred_items) = pred.get(question) else {
            continue;
        };

        let ranks = compute_ranks(question, gold_items, pred_items);
        let mut score = average_precision(&ranks);
        if !score.is_finite() {
            score = 0.0;
        }

        total += score;

        if let Some(callback) = on_question.as_mut() {
            callback(question.as_str(), score);
        }
    }

    total / gold.len() as f64
}
