//! N-queens as a permutation problem.
//!
//! A state holds one queen per column; `state[c]` is the queen's row.
//! Keeping the state a permutation rules out row and column conflicts,
//! so the cost only counts diagonal attacks. Neighbors swap the rows of
//! two columns, which preserves the permutation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::problem::Problem;

/// The N-queens problem on an `n × n` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of queens.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether `state` is a permutation of `0..n`.
    pub fn is_permutation(&self, state: &[usize]) -> bool {
        if state.len() != self.n {
            return false;
        }
        let mut seen = vec![false; self.n];
        for &row in state {
            if row >= self.n || seen[row] {
                return false;
            }
            seen[row] = true;
        }
        true
    }
}

impl Default for NQueens {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Problem for NQueens {
    type State = Vec<usize>;

    fn state_size(&self) -> usize {
        self.n
    }

    fn random_state<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut state: Vec<usize> = (0..self.n).collect();
        state.shuffle(rng);
        state
    }

    fn neighbors<'a>(&'a self, state: &'a Vec<usize>) -> impl Iterator<Item = Vec<usize>> + 'a {
        SwapNeighbors::new(state)
    }

    fn random_neighbor<R: Rng>(&self, state: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = state.clone();
        if self.n < 2 {
            return next;
        }
        let i = rng.random_range(0..self.n);
        let mut j = rng.random_range(0..self.n - 1);
        if j >= i {
            j += 1;
        }
        next.swap(i, j);
        next
    }

    fn cost(&self, state: &Vec<usize>) -> f64 {
        let mut conflicts = 0usize;
        for i in 0..state.len() {
            for j in (i + 1)..state.len() {
                if state[i].abs_diff(state[j]) == j - i {
                    conflicts += 1;
                }
            }
        }
        conflicts as f64
    }
}

/// Lazy enumeration of every two-position swap of a state.
///
/// Pairs `(i, j)` with `i < j` are visited in lexicographic order. Each
/// item is a fresh copy; the source state is never touched.
#[derive(Debug, Clone)]
pub struct SwapNeighbors<'a, T> {
    state: &'a [T],
    i: usize,
    j: usize,
}

impl<'a, T: Clone> SwapNeighbors<'a, T> {
    pub fn new(state: &'a [T]) -> Self {
        Self { state, i: 0, j: 1 }
    }
}

impl<T: Clone> Iterator for SwapNeighbors<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let n = self.state.len();
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= n {
                return None;
            }
        }
        let mut next = self.state.to_vec();
        next.swap(self.i, self.j);
        self.j += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.state.len();
        if self.i + 1 >= n {
            return (0, Some(0));
        }
        // rest of row i, then every full row after it
        let row = n - self.j.min(n);
        let tail = (n - self.i - 1) * (n - self.i - 2) / 2;
        let remaining = row + tail;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_eight_queens_has_28_distinct_neighbors() {
        let problem = NQueens::new(8);
        let state: Vec<usize> = (0..8).collect();

        let neighbors: Vec<Vec<usize>> = problem.neighbors(&state).collect();
        assert_eq!(neighbors.len(), 28);

        let distinct: HashSet<Vec<usize>> = neighbors.iter().cloned().collect();
        assert_eq!(distinct.len(), 28);
        assert!(neighbors.iter().all(|s| problem.is_permutation(s)));
        assert!(!distinct.contains(&state));
    }

    #[test]
    fn test_neighbors_are_restartable() {
        let problem = NQueens::new(5);
        let state = vec![2, 0, 3, 1, 4];

        let first: Vec<Vec<usize>> = problem.neighbors(&state).collect();
        let second: Vec<Vec<usize>> = problem.neighbors(&state).collect();
        assert_eq!(first, second);
        assert_eq!(state, vec![2, 0, 3, 1, 4]);
    }

    #[test]
    fn test_neighbor_order_is_lexicographic_pairs() {
        let problem = NQueens::new(3);
        let state = vec![0, 1, 2];
        let neighbors: Vec<Vec<usize>> = problem.neighbors(&state).collect();
        assert_eq!(neighbors, vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let state: Vec<usize> = (0..6).collect();
        let mut iter = SwapNeighbors::new(&state);
        let mut expected = 15;
        loop {
            assert_eq!(iter.size_hint(), (expected, Some(expected)));
            if iter.next().is_none() {
                break;
            }
            expected -= 1;
        }
        assert_eq!(expected, 0);
    }

    #[test]
    fn test_single_queen() {
        let problem = NQueens::new(1);
        let mut rng = create_rng(Some(3));
        let state = problem.random_state(&mut rng);

        assert_eq!(state, vec![0]);
        assert_eq!(problem.neighbors(&state).count(), 0);
        assert_eq!(problem.random_neighbor(&state, &mut rng), vec![0]);
        assert_eq!(problem.cost(&state), 0.0);
    }

    #[test]
    fn test_cost_counts_diagonal_pairs() {
        let problem = NQueens::new(4);
        // main diagonal: every pair attacks
        assert_eq!(problem.cost(&vec![0, 1, 2, 3]), 6.0);
        // a known solution
        assert_eq!(problem.cost(&vec![1, 3, 0, 2]), 0.0);
        assert_eq!(problem.cost(&vec![1, 0, 2, 3]), 2.0);
    }

    #[test]
    fn test_random_neighbor_swaps_exactly_two() {
        let problem = NQueens::new(8);
        let mut rng = create_rng(Some(11));
        let state = problem.random_state(&mut rng);

        for _ in 0..100 {
            let next = problem.random_neighbor(&state, &mut rng);
            assert!(problem.is_permutation(&next));
            let changed = state.iter().zip(&next).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 2);
        }
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        let problem = NQueens::new(3);
        assert!(problem.is_permutation(&[2, 0, 1]));
        assert!(!problem.is_permutation(&[0, 0, 1]));
        assert!(!problem.is_permutation(&[0, 1, 3]));
        assert!(!problem.is_permutation(&[0, 1]));
    }
}
