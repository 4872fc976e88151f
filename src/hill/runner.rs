//! Hill Climbing execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a given or random state
//! 2. At each step:
//!    a. Find a candidate neighbor (best of the full neighborhood, or the
//!       first improving random neighbor within the trial budget)
//!    b. Move there if it is strictly cheaper, otherwise stop
//! 3. With restarts, repeat from fresh random states and keep the
//!    cheapest terminal state (first found on ties)

use super::config::{HcConfig, NeighborSelection};
use crate::error::ConfigError;
use crate::problem::Problem;
use crate::rng::create_rng;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
pub struct HcResult<S: Clone> {
    /// Best terminal state over all restarts.
    pub best: S,
    /// Cost of the best state.
    pub best_cost: f64,
    /// Moves accepted, summed over all restarts.
    pub moves: usize,
    /// Cost evaluations, summed over all restarts.
    pub evaluations: usize,
    /// Number of climbs executed.
    pub restarts: usize,
    /// Terminal cost of each climb, in order.
    pub restart_costs: Vec<f64>,
    /// Whether any climb stopped at `max_moves` rather than at a local minimum.
    pub hit_move_limit: bool,
}

/// Hill Climbing runner.
pub struct HcRunner;

impl HcRunner {
    /// Runs `config.restarts` climbs from independent random states.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hill::{HcConfig, HcRunner};
    /// use u_localsearch::queens::NQueens;
    ///
    /// let config = HcConfig::default().with_restarts(10).with_seed(42);
    /// let result = HcRunner::run(&NQueens::new(8), &config).unwrap();
    /// assert_eq!(result.restart_costs.len(), 10);
    /// ```
    pub fn run<P: Problem>(problem: &P, config: &HcConfig) -> Result<HcResult<P::State>, ConfigError> {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let mut best: Option<Climb<P::State>> = None;
        let mut moves = 0;
        let mut evaluations = 0;
        let mut hit_move_limit = false;
        let mut restart_costs = Vec::with_capacity(config.restarts);

        for restart in 0..config.restarts {
            let start = problem.random_state(&mut rng);
            let outcome = climb(problem, config, start, &mut rng);
            trace!(restart, cost = outcome.cost, moves = outcome.moves, "climb finished");

            moves += outcome.moves;
            evaluations += outcome.evaluations;
            hit_move_limit |= outcome.hit_move_limit;
            restart_costs.push(outcome.cost);

            if best.as_ref().is_none_or(|b| outcome.cost < b.cost) {
                best = Some(outcome);
            }
        }

        // restarts >= 1 after validation
        let Some(best) = best else {
            return Err(ConfigError::ZeroRestarts);
        };

        debug!(
            restarts = config.restarts,
            best_cost = best.cost,
            moves,
            evaluations,
            "hill climbing finished"
        );

        Ok(HcResult {
            best: best.state,
            best_cost: best.cost,
            moves,
            evaluations,
            restarts: config.restarts,
            restart_costs,
            hit_move_limit,
        })
    }

    /// Runs a single climb from `start`, ignoring `config.restarts`.
    pub fn climb_from<P: Problem>(
        problem: &P,
        start: P::State,
        config: &HcConfig,
    ) -> Result<HcResult<P::State>, ConfigError> {
        config.validate()?;
        let mut rng = create_rng(config.seed);

        let outcome = climb(problem, config, start, &mut rng);
        debug!(cost = outcome.cost, moves = outcome.moves, "climb finished");

        Ok(HcResult {
            best: outcome.state,
            best_cost: outcome.cost,
            moves: outcome.moves,
            evaluations: outcome.evaluations,
            restarts: 1,
            restart_costs: vec![outcome.cost],
            hit_move_limit: outcome.hit_move_limit,
        })
    }
}

struct Climb<S> {
    state: S,
    cost: f64,
    moves: usize,
    evaluations: usize,
    hit_move_limit: bool,
}

fn climb<P: Problem, R: Rng>(
    problem: &P,
    config: &HcConfig,
    start: P::State,
    rng: &mut R,
) -> Climb<P::State> {
    let mut current = start;
    let mut current_cost = problem.cost(&current);
    let mut evaluations = 1;
    let mut moves = 0;
    let mut hit_move_limit = false;

    loop {
        if config.max_moves > 0 && moves >= config.max_moves {
            hit_move_limit = true;
            break;
        }

        let candidate = match config.selection {
            NeighborSelection::SteepestDescent => best_neighbor(problem, &current, &mut evaluations),
            NeighborSelection::FirstChoice { max_trials } => first_improving(
                problem,
                &current,
                current_cost,
                max_trials,
                rng,
                &mut evaluations,
            ),
        };

        match candidate {
            Some((next, cost)) if cost < current_cost => {
                current = next;
                current_cost = cost;
                moves += 1;
            }
            _ => break,
        }
    }

    Climb {
        state: current,
        cost: current_cost,
        moves,
        evaluations,
        hit_move_limit,
    }
}

/// Cheapest neighbor, first in enumeration order on ties.
fn best_neighbor<P: Problem>(
    problem: &P,
    state: &P::State,
    evaluations: &mut usize,
) -> Option<(P::State, f64)> {
    let mut best: Option<(P::State, f64)> = None;
    for neighbor in problem.neighbors(state) {
        let cost = problem.cost(&neighbor);
        *evaluations += 1;
        if best.as_ref().is_none_or(|(_, c)| cost < *c) {
            best = Some((neighbor, cost));
        }
    }
    best
}

fn first_improving<P: Problem, R: Rng>(
    problem: &P,
    state: &P::State,
    cost: f64,
    max_trials: usize,
    rng: &mut R,
    evaluations: &mut usize,
) -> Option<(P::State, f64)> {
    for _ in 0..max_trials {
        let neighbor = problem.random_neighbor(state, rng);
        let neighbor_cost = problem.cost(&neighbor);
        *evaluations += 1;
        if neighbor_cost < cost {
            return Some((neighbor, neighbor_cost));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Discrete quadratic: f(x) = (x - 7)^2, minimum at x = 7 ----

    struct Quadratic;

    impl Problem for Quadratic {
        type State = i64;

        fn state_size(&self) -> usize {
            1
        }

        fn random_state<R: Rng>(&self, rng: &mut R) -> i64 {
            rng.random_range(-50..50)
        }

        fn neighbors<'a>(&'a self, x: &'a i64) -> impl Iterator<Item = i64> + 'a {
            [x - 1, x + 1].into_iter()
        }

        fn random_neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
            if rng.random_bool(0.5) {
                x - 1
            } else {
                x + 1
            }
        }

        fn cost(&self, x: &i64) -> f64 {
            ((x - 7) * (x - 7)) as f64
        }
    }

    // ---- 0 has neighbors 3, 2, 1; 2 and 1 tie ----

    struct Ties;

    impl Problem for Ties {
        type State = u8;

        fn state_size(&self) -> usize {
            1
        }

        fn random_state<R: Rng>(&self, _rng: &mut R) -> u8 {
            0
        }

        fn neighbors<'a>(&'a self, x: &'a u8) -> impl Iterator<Item = u8> + 'a {
            let next: &[u8] = if *x == 0 { &[3, 2, 1] } else { &[] };
            next.iter().copied()
        }

        fn random_neighbor<R: Rng>(&self, x: &u8, _rng: &mut R) -> u8 {
            *x
        }

        fn cost(&self, x: &u8) -> f64 {
            match x {
                0 => 10.0,
                3 => 7.0,
                _ => 5.0,
            }
        }
    }

    // ---- Every state is its own local minimum ----

    struct Plateau;

    impl Problem for Plateau {
        type State = u32;

        fn state_size(&self) -> usize {
            1
        }

        fn random_state<R: Rng>(&self, rng: &mut R) -> u32 {
            rng.random()
        }

        fn neighbors<'a>(&'a self, _x: &'a u32) -> impl Iterator<Item = u32> + 'a {
            std::iter::empty()
        }

        fn random_neighbor<R: Rng>(&self, x: &u32, _rng: &mut R) -> u32 {
            *x
        }

        fn cost(&self, _x: &u32) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_steepest_descent_finds_optimum() {
        let config = HcConfig::default().with_seed(42);
        let result = HcRunner::run(&Quadratic, &config).unwrap();

        assert_eq!(result.best, 7);
        assert_eq!(result.best_cost, 0.0);
        assert!(!result.hit_move_limit);
    }

    #[test]
    fn test_steepest_descent_move_count() {
        let config = HcConfig::default();
        let result = HcRunner::climb_from(&Quadratic, 20, &config).unwrap();

        assert_eq!(result.best, 7);
        assert_eq!(result.moves, 13);
        // start + 2 neighbors per step, including the final failed step
        assert_eq!(result.evaluations, 1 + 2 * 14);
    }

    #[test]
    fn test_steepest_descent_tie_break_is_enumeration_order() {
        let config = HcConfig::default();
        let result = HcRunner::climb_from(&Ties, 0, &config).unwrap();

        assert_eq!(result.best, 2);
        assert_eq!(result.best_cost, 5.0);
        assert_eq!(result.moves, 1);
    }

    #[test]
    fn test_empty_neighborhood_returns_start() {
        let config = HcConfig::default();
        let result = HcRunner::climb_from(&Plateau, 99, &config).unwrap();

        assert_eq!(result.best, 99);
        assert_eq!(result.moves, 0);
        assert_eq!(result.evaluations, 1);
    }

    #[test]
    fn test_local_minimum_is_fixed_point() {
        let config = HcConfig::default().with_seed(3);
        let first = HcRunner::run(&Quadratic, &config).unwrap();
        let again = HcRunner::climb_from(&Quadratic, first.best, &config).unwrap();

        assert_eq!(again.best, first.best);
        assert_eq!(again.moves, 0);
    }

    #[test]
    fn test_first_choice_finds_optimum() {
        let config = HcConfig::default()
            .with_selection(NeighborSelection::FirstChoice { max_trials: 30 })
            .with_seed(42);
        let result = HcRunner::climb_from(&Quadratic, -40, &config).unwrap();

        assert_eq!(result.best, 7);
        assert_eq!(result.moves, 47);
    }

    #[test]
    fn test_first_choice_stops_after_trial_budget() {
        let config = HcConfig::default()
            .with_selection(NeighborSelection::FirstChoice { max_trials: 25 })
            .with_seed(42);
        let result = HcRunner::climb_from(&Quadratic, 7, &config).unwrap();

        assert_eq!(result.best, 7);
        assert_eq!(result.moves, 0);
        assert_eq!(result.evaluations, 1 + 25);
    }

    #[test]
    fn test_max_moves_limit() {
        let config = HcConfig::default().with_max_moves(3);
        let result = HcRunner::climb_from(&Quadratic, 50, &config).unwrap();

        assert_eq!(result.best, 47);
        assert_eq!(result.moves, 3);
        assert!(result.hit_move_limit);
    }

    #[test]
    fn test_restarts_keep_cheapest() {
        let config = HcConfig::default().with_max_moves(5).with_restarts(8).with_seed(11);
        let result = HcRunner::run(&Quadratic, &config).unwrap();

        assert_eq!(result.restarts, 8);
        assert_eq!(result.restart_costs.len(), 8);
        let min = result
            .restart_costs
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_cost, min);
    }

    #[test]
    fn test_restart_ties_keep_first_found() {
        let seed = 17;
        let config = HcConfig::default().with_restarts(5).with_seed(seed);
        let result = HcRunner::run(&Plateau, &config).unwrap();

        let mut rng = create_rng(Some(seed));
        let first_start = Plateau.random_state(&mut rng);
        assert_eq!(result.best, first_start);
        assert_eq!(result.restart_costs, vec![1.0; 5]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = HcConfig::default().with_restarts(0);
        assert_eq!(
            HcRunner::run(&Quadratic, &config).err(),
            Some(ConfigError::ZeroRestarts)
        );
    }
}
