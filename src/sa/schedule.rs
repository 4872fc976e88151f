//! Temperature schedules and initial-temperature calibration.
//!
//! Calibration and cooling are separate steps: the starting temperature
//! `T0` is measured once per run, then a stateless cooling rule maps
//! `(T0, i)` to the temperature of iteration `i`.

use rand::Rng;

use crate::problem::Problem;

/// Cooling rule mapping an iteration index to a temperature.
///
/// Every variant is a decreasing family anchored at `T0` for `i = 1`.
///
/// # References
///
/// - Inverse: the classical `T0 / i` schedule
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// `T_i = T0 / (1 + (i - 1) * stride)`.
    ///
    /// With `stride = 1` this is `T0 / i`. Larger strides cool faster
    /// over the same number of steps.
    Inverse {
        /// Step of the denominator per iteration. Must be at least 1.
        stride: usize,
    },

    /// Geometric (exponential) cooling: `T_i = T0 * alpha^(i - 1)`.
    ///
    /// Typical `alpha`: 0.95–0.999.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling, `T_{k+1} = T_k / (1 + beta * T_k)`, in closed
    /// form: `T_i = T0 / (1 + (i - 1) * beta * T0)`.
    ///
    /// Reference: Lundy & Mees (1986)
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Inverse { stride: 1 }
    }
}

impl CoolingSchedule {
    /// Temperature at iteration `i` (1-based) for starting temperature `t0`.
    pub fn temperature(&self, t0: f64, i: usize) -> f64 {
        let k = i.saturating_sub(1) as f64;
        match *self {
            CoolingSchedule::Inverse { stride } => t0 / (1.0 + k * stride as f64),
            CoolingSchedule::Geometric { alpha } => t0 * alpha.powf(k),
            CoolingSchedule::LundyMees { beta } => t0 / (1.0 + k * beta * t0),
        }
    }
}

/// A finite, lazily produced temperature sequence for one run.
///
/// Yields `cooling.temperature(t0, i)` for `i = 1..=max_steps`. Values
/// are consumed once; a new run needs a new `Schedule`.
#[derive(Debug, Clone)]
pub struct Schedule {
    cooling: CoolingSchedule,
    t0: f64,
    step: usize,
    max_steps: usize,
}

impl Schedule {
    pub fn new(cooling: CoolingSchedule, t0: f64, max_steps: usize) -> Self {
        Self {
            cooling,
            t0,
            step: 0,
            max_steps,
        }
    }

    /// The starting temperature.
    pub fn initial_temperature(&self) -> f64 {
        self.t0
    }
}

impl Iterator for Schedule {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.step >= self.max_steps {
            return None;
        }
        self.step += 1;
        Some(self.cooling.temperature(self.t0, self.step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max_steps - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Schedule {}

/// Estimates a starting temperature from the problem's cost spread.
///
/// Samples the cost of `samples` random states and returns
/// `2 * (max - min)`. The result is 0 when every sample has the same
/// cost or when `samples` is 0; a schedule started at 0 is exhausted
/// immediately.
pub fn calibrate_temperature<P: Problem, R: Rng>(problem: &P, samples: usize, rng: &mut R) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for _ in 0..samples {
        let cost = problem.cost(&problem.random_state(rng));
        min = min.min(cost);
        max = max.max(cost);
    }
    if samples == 0 {
        return 0.0;
    }
    2.0 * (max - min)
}
