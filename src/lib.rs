//! Domain-agnostic local search.
//!
//! Provides generic implementations of two iterative-improvement
//! procedures over any problem that can generate states, enumerate or
//! sample neighbors, and score states:
//!
//! - **Hill Climbing (HC)**: steepest-descent or first-choice moves to
//!   strictly better neighbors, with optional random restarts.
//! - **Simulated Annealing (SA)**: Metropolis acceptance of worsening
//!   moves under a decreasing temperature schedule, calibrated from the
//!   problem's cost spread by default or supplied by the caller.
//!
//! # Architecture
//!
//! The runners are generic over the [`Problem`] trait and never look
//! inside a state. Every run owns its own seeded random number generator,
//! so independent runs share no mutable state. A permutation-based
//! [`queens::NQueens`] ships as the reference problem.
//!
//! # Examples
//!
//! ```
//! use u_localsearch::queens::NQueens;
//! use u_localsearch::sa::{SaConfig, SaRunner};
//! use u_localsearch::Problem;
//!
//! let problem = NQueens::new(8);
//! let config = SaConfig::default().with_max_steps(20_000).with_seed(1);
//! let result = SaRunner::run(&problem, &config).unwrap();
//! assert_eq!(problem.cost(&result.best), result.best_cost);
//! ```

pub mod error;
pub mod hill;
pub mod problem;
pub mod queens;
pub mod rng;
pub mod sa;

pub use error::ConfigError;
pub use problem::Problem;
