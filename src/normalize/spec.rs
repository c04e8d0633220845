//! Metric specs and the ordinal risk severity table.

use serde::{Deserialize, Serialize};

use crate::model::{Dimension, RiskLevel};

/// Whether a higher raw value is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Higher raw value is better.
    Ascending,
    /// Lower raw value is better.
    Descending,
}

/// Per-metric normalization spec.
///
/// When `bounds` is unset, the (min, max) range is observed over the
/// candidate batch being normalized; operators can pin a declared range
/// instead to make scores comparable across requests. `default`, when
/// set, substitutes for a missing raw value; without it an incomplete
/// candidate is dropped from scoring.
///
/// # Examples
///
/// ```
/// use siterank::normalize::{Direction, MetricSpec};
///
/// let spec = MetricSpec::new(Direction::Descending)
///     .with_bounds(0.0, 10.0)
///     .with_default(5.0);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSpec {
    /// Scoring direction.
    pub direction: Direction,
    /// Declared (min, max) range; observed from the batch when unset.
    pub bounds: Option<(f64, f64)>,
    /// Substitute raw value for candidates missing this metric.
    pub default: Option<f64>,
}

impl MetricSpec {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            bounds: None,
            default: None,
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    pub fn with_default(mut self, raw: f64) -> Self {
        self.default = Some(raw);
        self
    }

    /// Validates the spec.
    pub fn validate(&self) -> Result<(), String> {
        if let Some((min, max)) = self.bounds {
            if !min.is_finite() || !max.is_finite() {
                return Err(format!("bounds must be finite, got ({min}, {max})"));
            }
            if min > max {
                return Err(format!("bounds min {min} exceeds max {max}"));
            }
        }
        if let Some(default) = self.default {
            if !default.is_finite() {
                return Err(format!("default must be finite, got {default}"));
            }
        }
        Ok(())
    }
}

/// One spec per scoring dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSpecs {
    pub demand: MetricSpec,
    pub cost: MetricSpec,
    pub delivery: MetricSpec,
    pub competition: MetricSpec,
    pub sustainability: MetricSpec,
}

impl Default for MetricSpecs {
    /// Batch-observed ranges everywhere; cost and competition severity
    /// are lower-is-better, the rest higher-is-better.
    fn default() -> Self {
        Self {
            demand: MetricSpec::new(Direction::Ascending),
            cost: MetricSpec::new(Direction::Descending),
            delivery: MetricSpec::new(Direction::Ascending),
            competition: MetricSpec::new(Direction::Descending),
            sustainability: MetricSpec::new(Direction::Ascending),
        }
    }
}

impl MetricSpecs {
    pub fn get(&self, dimension: Dimension) -> &MetricSpec {
        match dimension {
            Dimension::Demand => &self.demand,
            Dimension::Cost => &self.cost,
            Dimension::Delivery => &self.delivery,
            Dimension::Competition => &self.competition,
            Dimension::Sustainability => &self.sustainability,
        }
    }

    pub fn with_spec(mut self, dimension: Dimension, spec: MetricSpec) -> Self {
        match dimension {
            Dimension::Demand => self.demand = spec,
            Dimension::Cost => self.cost = spec,
            Dimension::Delivery => self.delivery = spec,
            Dimension::Competition => self.competition = spec,
            Dimension::Sustainability => self.sustainability = spec,
        }
        self
    }

    /// Validates all five specs.
    pub fn validate(&self) -> Result<(), String> {
        for dim in Dimension::ALL {
            self.get(dim)
                .validate()
                .map_err(|e| format!("{} metric: {e}", dim.as_str()))?;
        }
        Ok(())
    }
}

/// Ordinal severity assigned to each competition-risk label before the
/// descending normalization formula applies.
///
/// The default table (Low=2, Medium=6, High=9) is a tuning choice, not
/// a fixed constant; operators can retune it without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSeverity {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for RiskSeverity {
    fn default() -> Self {
        Self {
            low: 2.0,
            medium: 6.0,
            high: 9.0,
        }
    }
}

impl RiskSeverity {
    /// Raw severity for a risk label.
    pub fn severity(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    /// Validates that severities are finite and strictly increasing.
    pub fn validate(&self) -> Result<(), String> {
        for (name, v) in [("low", self.low), ("medium", self.medium), ("high", self.high)] {
            if !v.is_finite() {
                return Err(format!("{name} severity must be finite, got {v}"));
            }
        }
        if !(self.low < self.medium && self.medium < self.high) {
            return Err(format!(
                "severities must be strictly increasing, got {} / {} / {}",
                self.low, self.medium, self.high
            ));
        }
        Ok(())
    }
}
