//! Composite scoring: weighted sum over the five dimensions.
//!
//! Pure and deterministic: identical inputs always yield identical
//! outputs. The per-candidate loop has no ordering dependency, so it
//! runs through rayon when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::model::ScoredCandidate;
use crate::normalize::NormalizedCandidate;
use crate::weights::WeightVector;

/// Computes each candidate's composite score. No ranking yet; `rank`
/// stays 0 until the ranker assigns positions.
pub fn score(normalized: Vec<NormalizedCandidate>, weights: &WeightVector) -> Vec<ScoredCandidate> {
    #[cfg(feature = "parallel")]
    {
        normalized
            .into_par_iter()
            .map(|n| score_one(n, weights))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        normalized
            .into_iter()
            .map(|n| score_one(n, weights))
            .collect()
    }
}

fn score_one(normalized: NormalizedCandidate, weights: &WeightVector) -> ScoredCandidate {
    let d = &normalized.dimensions;
    let exact = weights.demand * d.demand
        + weights.cost * d.cost
        + weights.delivery * d.delivery
        + weights.competition * d.competition
        + weights.sustainability * d.sustainability;

    ScoredCandidate {
        candidate: normalized.candidate,
        dimension_scores: normalized.dimensions,
        composite_score: round_one_decimal(exact),
        exact_score: exact,
        rank: 0,
    }
}

/// Display rounding. The unrounded value is kept as the ranking key so
/// rounding cannot introduce artificial ties.
fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Candidate, DimensionScores};

    fn normalized(id: &str, scores: DimensionScores) -> NormalizedCandidate {
        NormalizedCandidate {
            candidate: Candidate::new(id, id, "R"),
            dimensions: scores,
        }
    }

    #[test]
    fn test_weighted_sum() {
        let weights = WeightVector::new(0.4, 0.1, 0.2, 0.2, 0.1);
        let scores = DimensionScores {
            demand: 10.0,
            cost: 5.0,
            delivery: 0.0,
            competition: 10.0,
            sustainability: 5.0,
        };
        let out = score(vec![normalized("a", scores)], &weights);

        // 0.4*10 + 0.1*5 + 0.2*0 + 0.2*10 + 0.1*5 = 7.0
        assert!((out[0].exact_score - 7.0).abs() < 1e-12);
        assert!((out[0].composite_score - 7.0).abs() < 1e-12);
        assert_eq!(out[0].rank, 0);
    }

    #[test]
    fn test_display_rounding_keeps_exact_key() {
        let weights = WeightVector::new(0.2, 0.2, 0.2, 0.2, 0.2);
        let scores = DimensionScores {
            demand: 8.13,
            cost: 8.13,
            delivery: 8.13,
            competition: 8.13,
            sustainability: 8.13,
        };
        let out = score(vec![normalized("a", scores)], &weights);

        assert!((out[0].composite_score - 8.1).abs() < 1e-12);
        assert!((out[0].exact_score - 8.13).abs() < 1e-9);
    }

    #[test]
    fn test_composite_bounded_by_dimensions() {
        let weights = WeightVector::new(0.4, 0.1, 0.2, 0.2, 0.1);
        let scores = DimensionScores {
            demand: 10.0,
            cost: 10.0,
            delivery: 10.0,
            competition: 10.0,
            sustainability: 10.0,
        };
        let out = score(vec![normalized("a", scores)], &weights);
        assert!((out[0].exact_score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch() {
        let weights = WeightVector::new(0.2, 0.2, 0.2, 0.2, 0.2);
        assert!(score(Vec::new(), &weights).is_empty());
    }
}
