//! Engine error taxonomy.
//!
//! Two failure classes exist: a request that cannot be evaluated
//! (`InvalidRequest`) and a configuration that cannot be installed
//! (`InvalidConfig`). Candidates missing raw metrics are not errors —
//! they are dropped from scoring and logged, so one bad record never
//! denies results for the rest. An empty result set is likewise a
//! normal response, not an error.

use thiserror::Error;

/// Errors reported by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed or semantically invalid analysis request.
    ///
    /// Surfaced before any computation is attempted: unknown priority
    /// factor, non-positive top N, negative budget or radius, custom
    /// weights missing a key or summing to zero.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid engine configuration (metric specs, risk severity table,
    /// or weight presets). Caught when the engine is constructed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::InvalidRequest("topN must be >= 1".into());
        assert_eq!(err.to_string(), "invalid request: topN must be >= 1");

        let err = EngineError::InvalidConfig("weights sum to 0.9".into());
        assert_eq!(err.to_string(), "invalid config: weights sum to 0.9");
    }
}
