//! Multi-factor location scoring and ranking engine.
//!
//! Turns heterogeneous per-candidate metrics (demand, cost, delivery
//! feasibility, competition risk, sustainability) into a single ranked
//! list of recommended locations under a user-selected priority and
//! constraint set:
//!
//! - **Constraint Filter**: removes candidates that violate hard
//!   constraints (budget, delivery radius, product-category eligibility).
//! - **Metric Normalizer**: rescales each raw metric onto a common
//!   direction-aware [0, 10] scale in one batch pass.
//! - **Weight Resolver**: maps a priority factor (or custom weights)
//!   into a validated weight vector summing to 1.0.
//! - **Composite Scorer**: per-candidate weighted sum over the five
//!   scoring dimensions.
//! - **Ranker**: deterministic descending sort with a total-order
//!   tie-break chain, truncated to the requested top N.
//! - **Engine**: validates the request, sequences the stages, and
//!   assembles the response with summary aggregates.
//!
//! # Architecture
//!
//! The engine is a pure library: it never performs I/O, holds no state
//! across calls, and contains no randomness or clock dependence, so two
//! calls with identical inputs produce identical responses. Supplying
//! the candidate set and rendering the ranked output are both consumer
//! concerns at higher layers.
//!
//! # Usage
//!
//! ```
//! use siterank::engine::Engine;
//! use siterank::model::{AnalysisRequest, Candidate, PriorityFactor, RiskLevel};
//!
//! let candidates = vec![Candidate::new("bpl", "Bhopal", "Madhya Pradesh")
//!     .with_demand(8.5)
//!     .with_cost_index(3.2)
//!     .with_delivery_feasibility(6.2)
//!     .with_competition_risk(RiskLevel::Low)
//!     .with_sustainability(8.8)
//!     .with_setup_cost(900_000.0)
//!     .with_service_radius_km(35.0)
//!     .with_categories(["general"])
//!     .with_population(1_883_381)];
//!
//! let request = AnalysisRequest::new(1_000_000.0, 50.0, "general", PriorityFactor::Demand);
//! let response = Engine::default().evaluate(&candidates, &request).unwrap();
//! assert_eq!(response.ranked.len(), 1);
//! ```

pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod score;
pub mod weights;
