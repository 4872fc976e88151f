//! Hill Climbing configuration.

use crate::error::ConfigError;

/// How the next move is chosen among a state's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborSelection {
    /// Evaluate every neighbor and move to the cheapest one if it is
    /// strictly better than the current state.
    #[default]
    SteepestDescent,

    /// Draw up to `max_trials` random neighbors and move to the first one
    /// that is strictly better. The budget resets after every move.
    FirstChoice {
        /// Random neighbors tried before declaring a local minimum.
        max_trials: usize,
    },
}

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::{HcConfig, NeighborSelection};
///
/// let config = HcConfig::default()
///     .with_selection(NeighborSelection::FirstChoice { max_trials: 100 })
///     .with_restarts(10)
///     .with_seed(7);
/// assert_eq!(config.restarts, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Neighbor selection rule.
    pub selection: NeighborSelection,
    /// Number of independent climbs from random states.
    pub restarts: usize,
    /// Maximum moves per climb. 0 = no limit.
    pub max_moves: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            selection: NeighborSelection::default(),
            restarts: 1,
            max_moves: 0,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the neighbor selection rule.
    pub fn with_selection(mut self, selection: NeighborSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the number of restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the maximum number of moves per climb.
    pub fn with_max_moves(mut self, n: usize) -> Self {
        self.max_moves = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(ConfigError::ZeroRestarts);
        }
        if let NeighborSelection::FirstChoice { max_trials: 0 } = self.selection {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }
}
