//! Core trait shared by every search procedure.

use rand::Rng;

/// Defines a local search problem.
///
/// The user implements state generation, neighborhood generation and
/// cost evaluation. The search runners only ever call these operations;
/// they never inspect or edit a state themselves.
///
/// # Minimization
///
/// All runners minimize the cost function. For maximization, negate
/// the cost. Costs may be negative.
///
/// # Examples
///
/// ```ignore
/// struct Sorting { n: usize }
///
/// impl Problem for Sorting {
///     type State = Vec<usize>;
///
///     fn state_size(&self) -> usize {
///         self.n
///     }
///
///     fn random_state<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         let mut perm: Vec<usize> = (0..self.n).collect();
///         perm.shuffle(rng);
///         perm
///     }
///
///     fn neighbors<'a>(&'a self, perm: &'a Vec<usize>) -> impl Iterator<Item = Vec<usize>> + 'a {
///         (1..self.n).map(move |i| {
///             let mut next = perm.clone();
///             next.swap(i - 1, i);
///             next
///         })
///     }
///
///     fn random_neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         let mut next = perm.clone();
///         let i = rng.random_range(1..self.n);
///         next.swap(i - 1, i);
///         next
///     }
///
///     fn cost(&self, perm: &Vec<usize>) -> f64 {
///         perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
///     }
/// }
/// ```
pub trait Problem: Send + Sync {
    /// The state representation type.
    type State: Clone + Send;

    /// Size of a state (e.g. the length of a permutation).
    ///
    /// Sets the default number of random states sampled when calibrating
    /// an annealing temperature.
    fn state_size(&self) -> usize;

    /// Creates a random state.
    fn random_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Enumerates every neighbor of `state`.
    ///
    /// The iterator must be finite and is produced lazily; each call
    /// starts a fresh enumeration. Steepest-descent hill climbing breaks
    /// ties by enumeration order.
    fn neighbors<'a>(&'a self, state: &'a Self::State)
        -> impl Iterator<Item = Self::State> + 'a;

    /// Generates one random neighbor of `state`, independently on each call.
    fn random_neighbor<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;

    /// Computes the cost of a state. Lower is better.
    fn cost(&self, state: &Self::State) -> f64;
}
