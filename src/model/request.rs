//! Analysis requests: constraints, priority factor, custom weights.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Default result size when the caller does not specify one.
pub const DEFAULT_TOP_N: usize = 10;

/// User-selected emphasis; resolves to a preset weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityFactor {
    Demand,
    Cost,
    Logistics,
    Sustainability,
    Balanced,
}

impl PriorityFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityFactor::Demand => "demand",
            PriorityFactor::Cost => "cost",
            PriorityFactor::Logistics => "logistics",
            PriorityFactor::Sustainability => "sustainability",
            PriorityFactor::Balanced => "balanced",
        }
    }
}

impl fmt::Display for PriorityFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityFactor {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demand" => Ok(PriorityFactor::Demand),
            "cost" => Ok(PriorityFactor::Cost),
            "logistics" => Ok(PriorityFactor::Logistics),
            "sustainability" => Ok(PriorityFactor::Sustainability),
            "balanced" => Ok(PriorityFactor::Balanced),
            other => Err(EngineError::InvalidRequest(format!(
                "unknown priority factor '{other}'"
            ))),
        }
    }
}

/// Caller-supplied weights overriding the preset for the request.
///
/// All five entries must be present and non-negative to resolve; the
/// resolver normalizes them by their sum, so `{2, 1, 1, 1, 1}` is a
/// valid way to say "demand counts double".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWeights {
    pub demand: Option<f64>,
    pub cost: Option<f64>,
    pub delivery: Option<f64>,
    pub competition: Option<f64>,
    pub sustainability: Option<f64>,
}

impl CustomWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demand(mut self, w: f64) -> Self {
        self.demand = Some(w);
        self
    }

    pub fn with_cost(mut self, w: f64) -> Self {
        self.cost = Some(w);
        self
    }

    pub fn with_delivery(mut self, w: f64) -> Self {
        self.delivery = Some(w);
        self
    }

    pub fn with_competition(mut self, w: f64) -> Self {
        self.competition = Some(w);
        self
    }

    pub fn with_sustainability(mut self, w: f64) -> Self {
        self.sustainability = Some(w);
        self
    }
}

/// Input describing what to compute.
///
/// Hard constraints (`budget`, `delivery_radius_km`, `product_category`)
/// gate eligibility; `priority` (or `custom_weights`) selects the weight
/// vector; `top_n` bounds the result size.
///
/// # Examples
///
/// ```
/// use siterank::model::{AnalysisRequest, PriorityFactor};
///
/// let request = AnalysisRequest::new(1_000_000.0, 50.0, "general", PriorityFactor::Demand)
///     .with_top_n(5);
/// assert_eq!(request.top_n, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Maximum acceptable setup cost.
    pub budget: f64,
    /// Maximum acceptable service radius.
    pub delivery_radius_km: f64,
    /// Product category the location must be eligible for.
    pub product_category: String,
    /// Priority factor selecting the preset weight vector.
    pub priority: PriorityFactor,
    /// Result size; defaults to [`DEFAULT_TOP_N`], must be >= 1.
    pub top_n: usize,
    /// Optional per-request weights overriding the preset.
    pub custom_weights: Option<CustomWeights>,
}

impl AnalysisRequest {
    pub fn new(
        budget: f64,
        delivery_radius_km: f64,
        product_category: impl Into<String>,
        priority: PriorityFactor,
    ) -> Self {
        Self {
            budget,
            delivery_radius_km,
            product_category: product_category.into(),
            priority,
            top_n: DEFAULT_TOP_N,
            custom_weights: None,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_custom_weights(mut self, weights: CustomWeights) -> Self {
        self.custom_weights = Some(weights);
        self
    }
}
