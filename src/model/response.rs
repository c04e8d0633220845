//! Scored candidates and the assembled analysis response.

use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, RiskLevel};
use super::Dimension;

/// The five normalized [0, 10] dimension scores for one candidate,
/// or per-dimension means in the aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub demand: f64,
    pub cost: f64,
    pub delivery: f64,
    pub competition: f64,
    pub sustainability: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Demand => self.demand,
            Dimension::Cost => self.cost,
            Dimension::Delivery => self.delivery,
            Dimension::Competition => self.competition,
            Dimension::Sustainability => self.sustainability,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Demand => self.demand = value,
            Dimension::Cost => self.cost = value,
            Dimension::Delivery => self.delivery = value,
            Dimension::Competition => self.competition = value,
            Dimension::Sustainability => self.sustainability = value,
        }
    }
}

/// A candidate with its normalized scores and composite, derived fresh
/// per request and never cached across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    /// The originating candidate, passed through unmodified.
    pub candidate: Candidate,
    /// Normalized [0, 10] score per dimension.
    pub dimension_scores: DimensionScores,
    /// Weighted composite, rounded to one decimal for display stability.
    pub composite_score: f64,
    /// Unrounded composite; the ranking key. Kept separate so display
    /// rounding cannot introduce artificial ties.
    pub exact_score: f64,
    /// 1-based position after sorting; 0 until the ranker assigns it.
    pub rank: usize,
}

/// Counts per Low/Medium/High bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskCounts {
    pub fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Summary statistics over the ranked subset (only what is shown, not
/// the full filtered set — matching the product's metrics overview).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Mean normalized score per dimension.
    pub mean_scores: DimensionScores,
    /// Total population reach across the ranked candidates.
    pub total_population: u64,
    /// Counts by competition-risk label. Candidates whose risk label
    /// was unavailable (scored via a metric default) are not counted.
    pub competition_counts: RiskCounts,
    /// Counts by sustainability bucket, derived from the normalized
    /// sustainability score.
    pub sustainability_counts: RiskCounts,
}

impl AggregateStats {
    /// Computes aggregates over a ranked subset. Zeroed for an empty slice.
    pub fn over(ranked: &[ScoredCandidate]) -> Self {
        if ranked.is_empty() {
            return Self::default();
        }

        let mut stats = Self::default();
        for entry in ranked {
            for dim in Dimension::ALL {
                let sum = stats.mean_scores.get(dim) + entry.dimension_scores.get(dim);
                stats.mean_scores.set(dim, sum);
            }
            stats.total_population += entry.candidate.population;
            if let Some(risk) = entry.candidate.competition_risk {
                stats.competition_counts.bump(risk);
            }
            stats
                .sustainability_counts
                .bump(RiskLevel::from_score(entry.dimension_scores.sustainability));
        }

        let n = ranked.len() as f64;
        for dim in Dimension::ALL {
            stats.mean_scores.set(dim, stats.mean_scores.get(dim) / n);
        }
        stats
    }
}

/// The engine's output: ranked candidates plus summary aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Ordered best-first, at most `top_n` entries.
    pub ranked: Vec<ScoredCandidate>,
    /// Aggregates over `ranked` only.
    pub aggregate: AggregateStats,
}

impl AnalysisResponse {
    /// The explicit empty response: filtering removed every candidate.
    /// A valid outcome, distinct from engine failure.
    pub fn empty() -> Self {
        Self::default()
    }
}
