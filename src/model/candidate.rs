//! Candidate locations and the ordinal risk scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Ordinal Low/Medium/High scale.
///
/// Used both as the raw competition-risk label on a [`Candidate`] and
/// as the bucket type for aggregate counts (competition risk and
/// sustainability buckets in the response).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a normalized [0, 10] dimension score: >= 7 is High,
    /// >= 4 is Medium, anything lower is Low.
    pub fn from_score(score: f64) -> RiskLevel {
        if score >= 7.0 {
            RiskLevel::High
        } else if score >= 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

impl FromStr for RiskLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(EngineError::InvalidRequest(format!(
                "unknown risk level '{other}'"
            ))),
        }
    }
}

/// A location under evaluation.
///
/// Raw metrics are `Option` so a dataset provider can mark a value as
/// explicitly unavailable; what happens to an incomplete candidate is
/// decided by the normalizer's default policy, never by silently
/// treating the gap as zero. Constraint proxies (`setup_cost`,
/// `service_radius_km`, `eligible_categories`) gate eligibility and
/// are fail-closed when missing.
///
/// # Examples
///
/// ```
/// use siterank::model::{Candidate, RiskLevel};
///
/// let c = Candidate::new("ngp", "Nagpur", "Maharashtra")
///     .with_demand(7.2)
///     .with_cost_index(6.9)
///     .with_delivery_feasibility(8.4)
///     .with_competition_risk(RiskLevel::Low)
///     .with_sustainability(8.1)
///     .with_setup_cost(750_000.0)
///     .with_service_radius_km(40.0)
///     .with_categories(["general", "groceries"])
///     .with_population(2_497_777)
///     .with_coordinates(79.0882, 21.1458);
/// assert_eq!(c.population, 2_497_777);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique stable identifier.
    pub id: String,
    /// Display name; not used in scoring.
    pub name: String,
    /// Display region; not used in scoring.
    pub region: String,

    /// Forecast demand, raw scale.
    pub demand: Option<f64>,
    /// Cost index, raw scale (lower is better).
    pub cost_index: Option<f64>,
    /// Delivery / logistics feasibility, raw scale.
    pub delivery_feasibility: Option<f64>,
    /// Competition risk label.
    pub competition_risk: Option<RiskLevel>,
    /// Sustainability rating, raw scale.
    pub sustainability: Option<f64>,

    /// Estimated setup cost, compared against the request budget.
    pub setup_cost: Option<f64>,
    /// Serviceable radius, compared against the request delivery radius.
    pub service_radius_km: Option<f64>,
    /// Product categories this location can serve.
    pub eligible_categories: Vec<String>,

    /// Population reach; reporting only, never part of the composite.
    pub population: u64,
    /// (longitude, latitude), opaque passthrough for rendering.
    pub coordinates: (f64, f64),
}

impl Candidate {
    /// Creates a candidate with no metrics populated.
    pub fn new(id: impl Into<String>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            demand: None,
            cost_index: None,
            delivery_feasibility: None,
            competition_risk: None,
            sustainability: None,
            setup_cost: None,
            service_radius_km: None,
            eligible_categories: Vec::new(),
            population: 0,
            coordinates: (0.0, 0.0),
        }
    }

    pub fn with_demand(mut self, v: f64) -> Self {
        self.demand = Some(v);
        self
    }

    pub fn with_cost_index(mut self, v: f64) -> Self {
        self.cost_index = Some(v);
        self
    }

    pub fn with_delivery_feasibility(mut self, v: f64) -> Self {
        self.delivery_feasibility = Some(v);
        self
    }

    pub fn with_competition_risk(mut self, risk: RiskLevel) -> Self {
        self.competition_risk = Some(risk);
        self
    }

    pub fn with_sustainability(mut self, v: f64) -> Self {
        self.sustainability = Some(v);
        self
    }

    pub fn with_setup_cost(mut self, v: f64) -> Self {
        self.setup_cost = Some(v);
        self
    }

    pub fn with_service_radius_km(mut self, v: f64) -> Self {
        self.service_radius_km = Some(v);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_coordinates(mut self, lon: f64, lat: f64) -> Self {
        self.coordinates = (lon, lat);
        self
    }
}
