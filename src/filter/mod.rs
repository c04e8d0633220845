//! Hard constraint filtering, applied before normalization.
//!
//! Constraints gate eligibility and are conservative: a candidate with
//! a missing constraint-relevant field is excluded, never defaulted.
//! Running before normalization keeps constraint-violating outliers
//! from compressing the normalized scale for the candidates that
//! actually matter.

use crate::model::{AnalysisRequest, Candidate};

/// Returns the candidates that satisfy every hard constraint.
/// An empty result is a valid outcome, not an error.
pub fn apply(candidates: &[Candidate], request: &AnalysisRequest) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| eligible(c, request))
        .cloned()
        .collect()
}

/// Fail-closed eligibility predicate.
fn eligible(candidate: &Candidate, request: &AnalysisRequest) -> bool {
    let within_budget = matches!(candidate.setup_cost, Some(cost) if cost <= request.budget);
    let within_radius = matches!(
        candidate.service_radius_km,
        Some(radius) if radius <= request.delivery_radius_km
    );
    let category_ok = candidate
        .eligible_categories
        .iter()
        .any(|cat| cat == &request.product_category);

    within_budget && within_radius && category_ok
}
