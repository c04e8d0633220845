//! Weight resolution: priority factor (or custom weights) to a
//! validated weight vector summing to 1.0.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::model::{CustomWeights, Dimension, PriorityFactor};

/// Tolerance for the sum-to-one invariant.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// The five named dimension weights. Resolved vectors always sum to
/// 1.0 within [`SUM_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightVector {
    pub demand: f64,
    pub cost: f64,
    pub delivery: f64,
    pub competition: f64,
    pub sustainability: f64,
}

impl WeightVector {
    pub fn new(demand: f64, cost: f64, delivery: f64, competition: f64, sustainability: f64) -> Self {
        Self {
            demand,
            cost,
            delivery,
            competition,
            sustainability,
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Demand => self.demand,
            Dimension::Cost => self.cost,
            Dimension::Delivery => self.delivery,
            Dimension::Competition => self.competition,
            Dimension::Sustainability => self.sustainability,
        }
    }

    pub fn sum(&self) -> f64 {
        self.demand + self.cost + self.delivery + self.competition + self.sustainability
    }

    /// Validates that all weights are finite and non-negative and that
    /// the vector sums to 1.0 within tolerance.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for dim in Dimension::ALL {
            let w = self.get(dim);
            if !w.is_finite() || w < 0.0 {
                return Err(format!(
                    "{} weight must be finite and non-negative, got {w}",
                    dim.as_str()
                ));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(format!("weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }
}

/// Built-in weight vectors per priority factor.
///
/// Supplied configuration, not hardcoded constants: operators can
/// retune any preset without code changes as long as it still sums
/// to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightPresets {
    pub demand: WeightVector,
    pub cost: WeightVector,
    pub logistics: WeightVector,
    pub sustainability: WeightVector,
    pub balanced: WeightVector,
}

impl Default for WeightPresets {
    fn default() -> Self {
        Self {
            demand: WeightVector::new(0.4, 0.1, 0.2, 0.2, 0.1),
            cost: WeightVector::new(0.15, 0.45, 0.15, 0.15, 0.1),
            logistics: WeightVector::new(0.15, 0.15, 0.45, 0.15, 0.1),
            sustainability: WeightVector::new(0.1, 0.1, 0.15, 0.15, 0.5),
            balanced: WeightVector::new(0.2, 0.2, 0.2, 0.2, 0.2),
        }
    }
}

impl WeightPresets {
    pub fn preset_for(&self, priority: PriorityFactor) -> &WeightVector {
        match priority {
            PriorityFactor::Demand => &self.demand,
            PriorityFactor::Cost => &self.cost,
            PriorityFactor::Logistics => &self.logistics,
            PriorityFactor::Sustainability => &self.sustainability,
            PriorityFactor::Balanced => &self.balanced,
        }
    }

    /// Validates every preset.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for priority in [
            PriorityFactor::Demand,
            PriorityFactor::Cost,
            PriorityFactor::Logistics,
            PriorityFactor::Sustainability,
            PriorityFactor::Balanced,
        ] {
            self.preset_for(priority)
                .validate()
                .map_err(|e| format!("{priority} preset: {e}"))?;
        }
        Ok(())
    }
}

/// Resolves the effective weight vector for a request.
///
/// Custom weights, when supplied, take precedence over the preset:
/// all five keys must be present and non-negative, and the vector is
/// normalized by its sum (a zero sum is rejected).
pub fn resolve(
    priority: PriorityFactor,
    custom: Option<&CustomWeights>,
    presets: &WeightPresets,
) -> Result<WeightVector> {
    match custom {
        Some(custom) => resolve_custom(custom),
        None => Ok(*presets.preset_for(priority)),
    }
}

fn resolve_custom(custom: &CustomWeights) -> Result<WeightVector> {
    let entries = [
        ("demand", custom.demand),
        ("cost", custom.cost),
        ("delivery", custom.delivery),
        ("competition", custom.competition),
        ("sustainability", custom.sustainability),
    ];

    let mut raw = [0.0f64; 5];
    for (slot, (name, value)) in entries.iter().enumerate() {
        let w = value.ok_or_else(|| {
            EngineError::InvalidRequest(format!("custom weights missing '{name}'"))
        })?;
        if !w.is_finite() || w < 0.0 {
            return Err(EngineError::InvalidRequest(format!(
                "custom weight '{name}' must be finite and non-negative, got {w}"
            )));
        }
        raw[slot] = w;
    }

    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return Err(EngineError::InvalidRequest(
            "custom weights sum to zero".into(),
        ));
    }

    Ok(WeightVector::new(
        raw[0] / sum,
        raw[1] / sum,
        raw[2] / sum,
        raw[3] / sum,
        raw[4] / sum,
    ))
}
