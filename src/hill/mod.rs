//! Hill Climbing (HC).
//!
//! Repeatedly moves to a better neighbor until none is found. Two
//! neighbor selection rules are available:
//!
//! - **Steepest descent**: scan the full neighborhood and take the best
//!   strictly improving neighbor (first one in enumeration order on ties).
//! - **First choice**: draw random neighbors up to a trial budget and take
//!   the first strictly improving one.
//!
//! A run may restart from independent random states; the lowest-cost
//! terminal state over all restarts is returned.
//!
//! # References
//!
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1
//!   "Local Search Algorithms and Optimization Problems"

mod config;
mod runner;

pub use config::{HcConfig, NeighborSelection};
pub use runner::{HcResult, HcRunner};
