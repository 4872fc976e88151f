//! SA configuration.

use super::schedule::CoolingSchedule;
use crate::error::ConfigError;

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_cooling(CoolingSchedule::Inverse { stride: 2 })
///     .with_max_steps(50_000)
///     .with_stagnation_limit(5_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Cooling schedule used by the default schedule.
    pub cooling: CoolingSchedule,

    /// Starting temperature. `None` calibrates it from the problem's
    /// cost spread at the start of each run.
    pub initial_temperature: Option<f64>,

    /// Random states sampled for calibration. `None` = `10 * state_size`.
    pub calibration_samples: Option<usize>,

    /// Length of the default schedule (number of temperatures drawn).
    pub max_steps: usize,

    /// Stop after this many consecutive iterations without a new best.
    pub stagnation_limit: Option<usize>,

    /// Record the best cost every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling: CoolingSchedule::default(),
            initial_temperature: None,
            calibration_samples: None,
            max_steps: 1_000_000,
            stagnation_limit: None,
            history_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_calibration_samples(mut self, n: usize) -> Self {
        self.calibration_samples = Some(n);
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = Some(n);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(t) = self.initial_temperature {
            if !(t > 0.0 && t.is_finite()) {
                return Err(ConfigError::InvalidInitialTemperature(t));
            }
        }
        if self.stagnation_limit == Some(0) {
            return Err(ConfigError::ZeroStagnationLimit);
        }
        if self.history_interval == 0 {
            return Err(ConfigError::ZeroHistoryInterval);
        }
        match self.cooling {
            CoolingSchedule::Inverse { stride } => {
                if stride == 0 {
                    return Err(ConfigError::ZeroStride);
                }
            }
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(ConfigError::InvalidAlpha(alpha));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta <= 0.0 {
                    return Err(ConfigError::InvalidBeta(beta));
                }
            }
        }
        Ok(())
    }
}
