//! Deterministic ranking and top-N selection.
//!
//! Primary key: unrounded composite score, descending. Exact ties fall
//! through to higher sustainability score, then higher population, then
//! candidate id ascending — a total order, so output is reproducible
//! regardless of input ordering.

use std::cmp::Ordering;

use crate::model::ScoredCandidate;

/// Sorts, truncates to `top_n`, and assigns 1-based ranks.
///
/// Returns all survivors without padding when fewer than `top_n` remain.
pub fn rank(mut scored: Vec<ScoredCandidate>, top_n: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(compare);
    scored.truncate(top_n);
    for (i, entry) in scored.iter_mut().enumerate() {
        entry.rank = i + 1;
    }
    scored
}

/// Best-first comparison with the full tie-break chain.
///
/// Floats compare via `total_cmp`, which is transitive — an epsilon
/// window here would not be, and would make near-tie chains sort
/// input-order-dependently.
fn compare(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.exact_score
        .total_cmp(&a.exact_score)
        .then_with(|| {
            b.dimension_scores
                .sustainability
                .total_cmp(&a.dimension_scores.sustainability)
        })
        .then_with(|| b.candidate.population.cmp(&a.candidate.population))
        .then_with(|| a.candidate.id.cmp(&b.candidate.id))
}
