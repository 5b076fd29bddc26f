//! Recursive memoized minimax over the full game tree.
//!
//! Full-depth exact search: no pruning, no move ordering heuristics, no depth
//! limit. Optimality follows from exhaustiveness. Player One maximizes,
//! Player Two minimizes; win scores are biased by depth so the engine prefers
//! faster wins and slower losses.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use rttt_core::encoding::canonical_key;
use rttt_core::{GameState, Move, Outcome, Player};

use crate::cache::EvalCache;
use crate::stats::SearchStats;

/// Base win score; a win at depth d scores `10 - d` for Player One and
/// `d - 10` for Player Two.
const WIN_SCORE: i8 = 10;

/// The search was asked to pick a move in a position with no legal moves;
/// the caller should resolve game-over instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NoLegalMoveError;

impl fmt::Display for NoLegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal moves in this position")
    }
}

impl std::error::Error for NoLegalMoveError {}

/// Exact minimax solver with a persistent transposition cache.
pub struct Solver {
    pub cache: EvalCache,
    pub stats: SearchStats,
    /// Progress log interval in seconds; None disables logging.
    pub log_interval_secs: Option<u64>,
}

impl Solver {
    pub fn new() -> Self {
        Self::with_cache(EvalCache::new())
    }

    pub fn with_cache(cache: EvalCache) -> Self {
        Self {
            cache,
            stats: SearchStats::new(),
            log_interval_secs: None,
        }
    }

    /// Exact score of `state`, searched to the end of the game.
    ///
    /// The state is mutated in place by apply/undo pairs and is restored
    /// exactly before returning, including on cancellation. Returns None if
    /// the `running` flag was cleared; nothing partial is cached in that
    /// case. Terminal scores are never cached - only folded interior values
    /// are, one write per key per session.
    pub fn evaluate(
        &mut self,
        state: &mut GameState,
        depth: u8,
        running: &AtomicBool,
    ) -> Option<i8> {
        let key = canonical_key(state);
        if let Some(score) = self.cache.get(key) {
            self.stats.cache_hits += 1;
            return Some(score);
        }

        let outcome = state.outcome();
        match outcome {
            Outcome::Won(Player::One) => {
                self.stats.record_terminal(outcome);
                return Some(WIN_SCORE - depth as i8);
            }
            Outcome::Won(Player::Two) => {
                self.stats.record_terminal(outcome);
                return Some(depth as i8 - WIN_SCORE);
            }
            Outcome::Draw => {
                self.stats.record_terminal(outcome);
                return Some(0);
            }
            Outcome::InProgress => {}
        }

        let maximizing = state.to_move() == Player::One;
        // InProgress guarantees at least one legal move, so the sentinel is
        // always replaced.
        let mut best = if maximizing { i8::MIN } else { i8::MAX };

        for mv in state.legal_moves() {
            if !running.load(Ordering::Relaxed) {
                return None;
            }
            let captured = state.apply(mv).expect("legal move must apply");
            let score = self.evaluate(state, depth + 1, running);
            state.undo(mv, captured);
            let score = score?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        self.stats.positions_evaluated += 1;
        if self.stats.max_depth < depth as u32 {
            self.stats.max_depth = depth as u32;
        }
        if let Some(interval) = self.log_interval_secs {
            if self.stats.should_log(interval) {
                self.stats.log_progress(self.cache.len());
            }
        }

        self.cache.put(key, best);
        Some(best)
    }

    /// Best move for the side to move, ties broken by first occurrence in
    /// move-generation order. Returns Ok(None) if the search was cancelled
    /// mid-way, and an error if the position has no legal moves at all.
    pub fn best_move(
        &mut self,
        state: &mut GameState,
        running: &AtomicBool,
    ) -> Result<Option<Move>, NoLegalMoveError> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(NoLegalMoveError);
        }

        let maximizing = state.to_move() == Player::One;
        let mut best_score: Option<i8> = None;
        let mut best_move = None;

        for mv in moves {
            if !running.load(Ordering::Relaxed) {
                return Ok(None);
            }
            let captured = state.apply(mv).expect("legal move must apply");
            let score = self.evaluate(state, 0, running);
            state.undo(mv, captured);
            let Some(score) = score else {
                return Ok(None);
            };

            let improved = match best_score {
                None => true,
                Some(b) => {
                    if maximizing {
                        score > b
                    } else {
                        score < b
                    }
                }
            };
            if improved {
                best_score = Some(score);
                best_move = Some(mv);
            }
        }

        Ok(best_move)
    }

    /// Pre-populate the cache by solving from the empty initial position.
    /// Forces evaluation of the entire reachable, symmetry-reduced game
    /// tree. Returns the opening move, or None if interrupted.
    pub fn populate(&mut self, running: &AtomicBool) -> Option<Move> {
        let mut state = GameState::new();
        self.best_move(&mut state, running)
            .expect("initial position has legal moves")
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
