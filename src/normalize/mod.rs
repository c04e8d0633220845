//! Metric normalization: one batch pass onto a common [0, 10] scale.
//!
//! Normalization ranges depend on the full candidate set (min/max per
//! metric), so this runs as a single batch pass over the *filtered*
//! candidates, never per-candidate. Pure function of its inputs.

mod spec;

pub use spec::{Direction, MetricSpec, MetricSpecs, RiskSeverity};

use tracing::warn;

use crate::model::{Candidate, Dimension, DimensionScores};

/// A candidate paired with its normalized dimension scores, ready for
/// composite scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCandidate {
    pub candidate: Candidate,
    pub dimensions: DimensionScores,
}

const EPSILON: f64 = 1e-9;

/// Midpoint score assigned when a metric has no variance.
const NEUTRAL_SCORE: f64 = 5.0;

/// Normalizes every raw metric of every candidate onto [0, 10].
///
/// Candidates missing a raw metric take the spec's default when one is
/// declared; otherwise the candidate is dropped from scoring with a
/// warning. One incomplete record must not deny results for the rest.
pub fn normalize(
    candidates: &[Candidate],
    specs: &MetricSpecs,
    severity: &RiskSeverity,
) -> Vec<NormalizedCandidate> {
    // Resolve raw values first so dropped candidates never influence
    // the observed min/max of the survivors.
    let mut complete: Vec<(&Candidate, [f64; 5])> = Vec::with_capacity(candidates.len());
    'candidates: for candidate in candidates {
        let mut raws = [0.0f64; 5];
        for (slot, dim) in Dimension::ALL.iter().enumerate() {
            match raw_value(candidate, *dim, specs, severity) {
                Some(raw) => raws[slot] = raw,
                None => {
                    warn!(
                        id = %candidate.id,
                        metric = dim.as_str(),
                        "dropping candidate with missing or non-finite metric and no default"
                    );
                    continue 'candidates;
                }
            }
        }
        complete.push((candidate, raws));
    }

    // Per-dimension range: declared bounds win, otherwise observed.
    let mut ranges = [(0.0f64, 0.0f64); 5];
    for (slot, dim) in Dimension::ALL.iter().enumerate() {
        ranges[slot] = match specs.get(*dim).bounds {
            Some(bounds) => bounds,
            None => observed_range(complete.iter().map(|(_, raws)| raws[slot])),
        };
    }

    complete
        .into_iter()
        .map(|(candidate, raws)| {
            let mut dimensions = DimensionScores::default();
            for (slot, dim) in Dimension::ALL.iter().enumerate() {
                let (min, max) = ranges[slot];
                let score = scale(raws[slot], min, max, specs.get(*dim).direction);
                dimensions.set(*dim, score);
            }
            NormalizedCandidate {
                candidate: candidate.clone(),
                dimensions,
            }
        })
        .collect()
}

/// Resolves the raw value for one dimension: the candidate's metric,
/// the severity table for the competition label, or the spec default.
/// Non-finite values are treated as missing so a NaN can never reach
/// the composite (configured bounds, defaults, and severities are
/// already validated finite).
fn raw_value(
    candidate: &Candidate,
    dimension: Dimension,
    specs: &MetricSpecs,
    severity: &RiskSeverity,
) -> Option<f64> {
    let raw = match dimension {
        Dimension::Demand => candidate.demand,
        Dimension::Cost => candidate.cost_index,
        Dimension::Delivery => candidate.delivery_feasibility,
        Dimension::Competition => candidate.competition_risk.map(|r| severity.severity(r)),
        Dimension::Sustainability => candidate.sustainability,
    };
    raw.filter(|v| v.is_finite())
        .or(specs.get(dimension).default)
}

fn observed_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        // Empty batch; the range is never consulted.
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

/// Direction-aware min-max rescaling onto [0, 10], clamped.
///
/// A degenerate range (max == min) yields the neutral midpoint for
/// everyone rather than dividing by zero.
fn scale(raw: f64, min: f64, max: f64, direction: Direction) -> f64 {
    let span = max - min;
    if span.abs() < EPSILON {
        return NEUTRAL_SCORE;
    }
    let fraction = match direction {
        Direction::Ascending => (raw - min) / span,
        Direction::Descending => (max - raw) / span,
    };
    (10.0 * fraction).clamp(0.0, 10.0)
}
