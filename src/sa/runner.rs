//! SA execution loop.

use super::config::SaConfig;
use super::schedule::{calibrate_temperature, Schedule};
use crate::error::ConfigError;
use crate::problem::Problem;
use crate::rng::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Why an annealing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The schedule ran out, or yielded a temperature that is not positive.
    ScheduleExhausted,
    /// `stagnation_limit` iterations passed without a new best.
    Stagnated,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best state found.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Cost of the random state the run started from.
    pub initial_cost: f64,

    /// First temperature drawn from the schedule (`None` if it was empty).
    pub initial_temperature: Option<f64>,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature of the last iteration that ran.
    pub final_temperature: Option<f64>,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with the default schedule built from `config`.
    ///
    /// The starting temperature is `config.initial_temperature`, or is
    /// calibrated from the problem when unset.
    pub fn run<P: Problem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::State>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with the default schedule and an optional cancellation token.
    pub fn run_with_cancel<P: Problem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::State>, ConfigError> {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let t0 = match config.initial_temperature {
            Some(t) => t,
            None => {
                let samples = config
                    .calibration_samples
                    .unwrap_or_else(|| 10 * problem.state_size());
                let t0 = calibrate_temperature(problem, samples, &mut rng);
                debug!(samples, t0, "calibrated initial temperature");
                t0
            }
        };
        let schedule = Schedule::new(config.cooling, t0, config.max_steps);

        let initial = problem.random_state(&mut rng);
        Ok(anneal(problem, config, &mut rng, initial, schedule, cancel.as_deref()))
    }

    /// Runs SA with a caller-supplied temperature sequence.
    ///
    /// `config.cooling`, `initial_temperature`, `calibration_samples` and
    /// `max_steps` are not used; the run lasts until `schedule` is
    /// exhausted, yields a non-positive temperature, or stagnates.
    pub fn run_with_schedule<P, I>(
        problem: &P,
        config: &SaConfig,
        schedule: I,
    ) -> Result<SaResult<P::State>, ConfigError>
    where
        P: Problem,
        I: IntoIterator<Item = f64>,
    {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let initial = problem.random_state(&mut rng);
        Ok(anneal(problem, config, &mut rng, initial, schedule, None))
    }
}

fn anneal<P, R, I>(
    problem: &P,
    config: &SaConfig,
    rng: &mut R,
    initial: P::State,
    schedule: I,
    cancel: Option<&AtomicBool>,
) -> SaResult<P::State>
where
    P: Problem,
    R: Rng,
    I: IntoIterator<Item = f64>,
{
    let mut current = initial;
    let mut current_cost = problem.cost(&current);
    let initial_cost = current_cost;
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut since_best = 0usize;
    let mut initial_temperature = None;
    let mut final_temperature = None;
    let mut termination = Termination::ScheduleExhausted;

    let mut cost_history = vec![best_cost];

    for temperature in schedule {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            termination = Termination::Cancelled;
            break;
        }

        // exp(-delta / T) is undefined for T <= 0
        if temperature.is_nan() || temperature <= 0.0 {
            debug!(temperature, iterations, "non-positive temperature, schedule exhausted");
            break;
        }
        initial_temperature.get_or_insert(temperature);
        final_temperature = Some(temperature);

        let neighbor = problem.random_neighbor(&current, rng);
        let neighbor_cost = problem.cost(&neighbor);
        let delta = neighbor_cost - current_cost;

        // Metropolis acceptance criterion
        let accept = if delta <= 0.0 {
            if delta < 0.0 {
                improving_moves += 1;
            }
            true
        } else {
            let probability = (-delta / temperature).exp();
            rng.random_range(0.0..1.0) < probability
        };

        if accept {
            current = neighbor;
            current_cost = neighbor_cost;
            accepted_moves += 1;
        }

        if current_cost < best_cost {
            best = current.clone();
            best_cost = current_cost;
            since_best = 0;
            trace!(iteration = iterations, best_cost, temperature, "new best");
        } else {
            since_best += 1;
        }

        iterations += 1;

        if iterations.is_multiple_of(config.history_interval) {
            cost_history.push(best_cost);
        }

        if config.stagnation_limit.is_some_and(|limit| since_best >= limit) {
            termination = Termination::Stagnated;
            break;
        }
    }

    // Final history entry
    if cost_history
        .last()
        .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
    {
        cost_history.push(best_cost);
    }

    debug!(
        initial_cost,
        best_cost,
        iterations,
        accepted_moves,
        ?termination,
        "annealing finished"
    );

    SaResult {
        best,
        best_cost,
        initial_cost,
        initial_temperature,
        iterations,
        final_temperature,
        accepted_moves,
        improving_moves,
        termination,
        cost_history,
    }
}
