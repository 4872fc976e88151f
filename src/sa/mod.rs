//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The run consumes one temperature per iteration from a [`Schedule`]
//! (or any caller-supplied `f64` sequence) and stops when the sequence
//! ends, when a temperature is not positive, or when the best cost has
//! stagnated. The best state seen is returned, not the final one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod schedule;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner, Termination};
pub use schedule::{calibrate_temperature, CoolingSchedule, Schedule};
