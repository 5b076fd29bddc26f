//! Exact solver for replace tic-tac-toe.
//!
//! Memoized full-depth minimax over the symmetry-reduced game tree, with a
//! transposition cache persisted to a binary snapshot file across runs.

pub mod cache;
pub mod solver;
pub mod stats;
