//! Request orchestration: validate, sequence the stages, assemble the
//! response.
//!
//! The engine is stateless across invocations; each `evaluate` call is
//! a self-contained computation over its inputs, so independent
//! requests can run in parallel on a shared `Engine` with no locking.

use tracing::debug;

use crate::error::{EngineError, Result};
use crate::filter;
use crate::model::{AggregateStats, AnalysisRequest, AnalysisResponse, Candidate};
use crate::normalize::{self, MetricSpecs, RiskSeverity};
use crate::rank;
use crate::score;
use crate::weights::{self, WeightPresets};

/// Engine configuration: metric specs, the risk severity table, and
/// the weight presets. All externally retunable.
///
/// # Examples
///
/// ```
/// use siterank::engine::EngineConfig;
/// use siterank::model::Dimension;
/// use siterank::normalize::{Direction, MetricSpec};
///
/// let config = EngineConfig::default().with_metric_spec(
///     Dimension::Cost,
///     MetricSpec::new(Direction::Descending).with_bounds(0.0, 10.0),
/// );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Per-dimension normalization specs.
    pub metrics: MetricSpecs,
    /// Ordinal severity per competition-risk label.
    pub risk_severity: RiskSeverity,
    /// Weight vector per priority factor.
    pub presets: WeightPresets,
}

impl EngineConfig {
    pub fn with_metric_spec(
        mut self,
        dimension: crate::model::Dimension,
        spec: normalize::MetricSpec,
    ) -> Self {
        self.metrics = self.metrics.with_spec(dimension, spec);
        self
    }

    pub fn with_risk_severity(mut self, severity: RiskSeverity) -> Self {
        self.risk_severity = severity;
        self
    }

    pub fn with_presets(mut self, presets: WeightPresets) -> Self {
        self.presets = presets;
        self
    }

    /// Validates specs, severity table, and presets.
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.metrics.validate()?;
        self.risk_severity.validate()?;
        self.presets.validate()?;
        Ok(())
    }
}

/// The location scoring and ranking engine.
///
/// # Usage
///
/// ```
/// use siterank::engine::Engine;
/// use siterank::model::{AnalysisRequest, PriorityFactor};
///
/// let engine = Engine::default();
/// let request = AnalysisRequest::new(1_000_000.0, 50.0, "general", PriorityFactor::Balanced);
/// let response = engine.evaluate(&[], &request).unwrap();
/// assert!(response.ranked.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        // The default config is valid by construction.
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl Engine {
    /// Creates an engine, rejecting an invalid configuration up front.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates a request over a candidate set.
    ///
    /// Stage order: constraint filter, batch normalization, composite
    /// scoring, ranking. Normalization runs on the filtered set so
    /// observed ranges reflect only eligible candidates. Aggregates
    /// cover the ranked output only. An empty filtered set yields an
    /// explicit empty response, never an error.
    pub fn evaluate(
        &self,
        candidates: &[Candidate],
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse> {
        validate_request(request)?;
        // Resolve before any per-candidate work so a bad request fails
        // without partial computation.
        let weights = weights::resolve(
            request.priority,
            request.custom_weights.as_ref(),
            &self.config.presets,
        )?;

        let eligible = filter::apply(candidates, request);
        debug!(
            total = candidates.len(),
            eligible = eligible.len(),
            "constraint filter applied"
        );
        if eligible.is_empty() {
            return Ok(AnalysisResponse::empty());
        }

        let normalized = normalize::normalize(&eligible, &self.config.metrics, &self.config.risk_severity);
        debug!(scored = normalized.len(), "metrics normalized");
        if normalized.is_empty() {
            // Every eligible candidate was incomplete.
            return Ok(AnalysisResponse::empty());
        }

        let scored = score::score(normalized, &weights);
        let ranked = rank::rank(scored, request.top_n);
        let aggregate = AggregateStats::over(&ranked);
        debug!(ranked = ranked.len(), "response assembled");

        Ok(AnalysisResponse { ranked, aggregate })
    }
}

/// Fails fast on a semantically invalid request.
fn validate_request(request: &AnalysisRequest) -> Result<()> {
    if request.top_n == 0 {
        return Err(EngineError::InvalidRequest("topN must be >= 1".into()));
    }
    if !request.budget.is_finite() || request.budget < 0.0 {
        return Err(EngineError::InvalidRequest(format!(
            "budget must be finite and non-negative, got {}",
            request.budget
        )));
    }
    if !request.delivery_radius_km.is_finite() || request.delivery_radius_km < 0.0 {
        return Err(EngineError::InvalidRequest(format!(
            "delivery radius must be finite and non-negative, got {}",
            request.delivery_radius_km
        )));
    }
    if request.product_category.is_empty() {
        return Err(EngineError::InvalidRequest(
            "product category must not be empty".into(),
        ));
    }
    Ok(())
}
