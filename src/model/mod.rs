//! Shared data shapes: candidates, requests, and scored responses.
//!
//! These types form the engine's external contract. They are plain
//! serde-derived values with no behavior beyond construction helpers
//! and small classification functions; all scoring logic lives in the
//! stage modules.

mod candidate;
mod request;
mod response;

pub use candidate::{Candidate, RiskLevel};
pub use request::{AnalysisRequest, CustomWeights, PriorityFactor, DEFAULT_TOP_N};
pub use response::{AggregateStats, AnalysisResponse, DimensionScores, RiskCounts, ScoredCandidate};

use serde::{Deserialize, Serialize};

/// One of the five scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Forecast demand at the location.
    Demand,
    /// Cost index (raw scale is lower-is-better).
    Cost,
    /// Delivery / logistics feasibility.
    Delivery,
    /// Competition risk (raw severity is lower-is-better).
    Competition,
    /// Sustainability rating.
    Sustainability,
}

impl Dimension {
    /// All five dimensions, in canonical order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Demand,
        Dimension::Cost,
        Dimension::Delivery,
        Dimension::Competition,
        Dimension::Sustainability,
    ];

    /// Stable lowercase name, matching the wire-format keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Demand => "demand",
            Dimension::Cost => "cost",
            Dimension::Delivery => "delivery",
            Dimension::Competition => "competition",
            Dimension::Sustainability => "sustainability",
        }
    }
}
