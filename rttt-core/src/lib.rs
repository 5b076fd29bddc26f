//! Replace tic-tac-toe game rules with bit-based state encoding.
//!
//! Pieces come in three sizes. A move either places a piece from the mover's
//! reserve onto an empty cell, or replaces an opponent's piece with a strictly
//! larger one. A replaced piece is destroyed permanently - it is not returned
//! to either player's reserve.
//!
//! # Board layout
//!
//! ```text
//! Cell indices (row-major order):
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```
//!
//! # State encoding (39 bits)
//!
//! ```text
//! Each cell (3 bits), cell 0 most significant:
//!   000          = empty
//!   owner | rank = 1 bit owner (0=P1, 1=P2), 2 bits size rank
//!                  (Small=01, Medium=10, Large=11)
//!
//! Board:    27 bits (9 cells x 3 bits)
//! Reserves: 12 bits (P1 s/m/l then P2 s/m/l, 2 bits per counter,
//!           first counter most significant)
//!
//! key = canonical_board << 12 | reserves
//! ```
//!
//! See [`encoding`] for the encoder and the symmetry canonicalizer.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod encoding;

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Traditional symbol: P1 plays X, P2 plays O.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Piece size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Size {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl Size {
    /// Check if a piece of this size may replace a piece of `other` size.
    /// Replacement requires a strictly larger piece.
    #[inline]
    pub fn can_replace(self, other: Size) -> bool {
        self > other
    }

    /// Convert from index (0, 1, 2) to Size.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Size> {
        match idx {
            0 => Some(Size::Small),
            1 => Some(Size::Medium),
            2 => Some(Size::Large),
            _ => None,
        }
    }

    /// Parse the single-letter notation used by the CLI (`s`, `m`, `l`).
    pub fn from_letter(c: char) -> Option<Size> {
        match c {
            's' => Some(Size::Small),
            'm' => Some(Size::Medium),
            'l' => Some(Size::Large),
            _ => None,
        }
    }

    /// Single-letter notation.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Size::Small => 's',
            Size::Medium => 'm',
            Size::Large => 'l',
        }
    }

    /// All sizes, ascending.
    pub fn all() -> impl Iterator<Item = Size> {
        [Size::Small, Size::Medium, Size::Large].into_iter()
    }
}

/// Initial reserve allotment per player, indexed by size: 3 small, 3 medium,
/// 2 large.
pub const ALLOTMENT: [u8; 3] = [3, 3, 2];

/// Position on the 3x3 board (0-8, row-major).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos(pub u8);

impl Pos {
    /// Create a position from row and column (0-2 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Pos {
        debug_assert!(row < 3 && col < 3);
        Pos(row * 3 + col)
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all 9 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..9).map(Pos)
    }
}

/// A piece on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub size: Size,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.size.letter(), self.owner.symbol())
    }
}

/// A move: place or replace with a piece of `size` at `pos`.
///
/// Whether it is a placement or a replacement is determined by the cell
/// content at apply time; both consume one reserve piece of `size`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub size: Size,
}

impl Move {
    #[inline]
    pub fn new(row: u8, col: u8, size: Size) -> Move {
        Move {
            pos: Pos::from_row_col(row, col),
            size,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.pos.row(), self.pos.col(), self.size.letter())
    }
}

/// Why a move was rejected. The state is left untouched on rejection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IllegalMoveError {
    /// The mover has no piece of the requested size left in reserve.
    OutOfReserve { size: Size },
    /// The target cell holds one of the mover's own pieces.
    OwnPiece { at: Pos },
    /// The target cell holds an opponent piece that is not strictly smaller.
    NotLarger { placed: Size, occupant: Size },
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::OutOfReserve { size } => {
                write!(f, "no {:?} piece left in reserve", size)
            }
            IllegalMoveError::OwnPiece { at } => {
                write!(f, "cell ({},{}) holds your own piece", at.row(), at.col())
            }
            IllegalMoveError::NotLarger { placed, occupant } => {
                write!(
                    f,
                    "{:?} cannot replace {:?}: replacement must be strictly larger",
                    placed, occupant
                )
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Game status as seen from a state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Won(Player),
    Draw,
    InProgress,
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Complete game state: board, both reserves, side to move.
///
/// Mutated in place by [`apply`](GameState::apply) / [`undo`](GameState::undo)
/// during search; a full apply/undo pair restores the state exactly.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    cells: [Option<Piece>; 9],
    /// Remaining reserve, indexed [player][size].
    reserves: [[u8; 3]; 2],
    to_move: Player,
}

impl GameState {
    /// Fresh game: empty board, full reserves, Player One to move.
    pub fn new() -> GameState {
        GameState {
            cells: [None; 9],
            reserves: [ALLOTMENT, ALLOTMENT],
            to_move: Player::One,
        }
    }

    /// Reconstruct a state from its parts (GUI restore, tests).
    ///
    /// Debug builds assert the allotment invariant: for each player and size,
    /// pieces on the board plus reserve never exceed the initial allotment.
    pub fn from_parts(cells: [Option<Piece>; 9], reserves: [[u8; 3]; 2], to_move: Player) -> GameState {
        let state = GameState {
            cells,
            reserves,
            to_move,
        };
        #[cfg(debug_assertions)]
        for player in [Player::One, Player::Two] {
            for size in Size::all() {
                let on_board = state
                    .cells
                    .iter()
                    .flatten()
                    .filter(|p| p.owner == player && p.size == size)
                    .count() as u8;
                debug_assert!(
                    on_board + state.reserve(player, size) <= ALLOTMENT[size as usize],
                    "allotment exceeded for {:?} {:?}",
                    player,
                    size
                );
            }
        }
        state
    }

    /// The side to move.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The piece at a position, if any.
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.cells[pos.0 as usize]
    }

    /// Remaining reserve count for one player and size.
    #[inline]
    pub fn reserve(&self, player: Player, size: Size) -> u8 {
        self.reserves[player.index()][size as usize]
    }

    /// Remaining reserve counts for one player, indexed by size.
    #[inline]
    pub fn reserves(&self, player: Player) -> [u8; 3] {
        self.reserves[player.index()]
    }

    /// Number of pieces a player currently has on the board.
    pub fn pieces_on_board(&self, player: Player) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.owner == player)
            .count() as u8
    }

    /// Check if every cell is occupied.
    pub fn board_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Check a move against the placement/replacement rules without applying.
    pub fn validate(&self, mv: Move) -> Result<(), IllegalMoveError> {
        match self.cells[mv.pos.0 as usize] {
            Some(p) if p.owner == self.to_move => {
                return Err(IllegalMoveError::OwnPiece { at: mv.pos })
            }
            Some(p) if !mv.size.can_replace(p.size) => {
                return Err(IllegalMoveError::NotLarger {
                    placed: mv.size,
                    occupant: p.size,
                })
            }
            _ => {}
        }
        if self.reserve(self.to_move, mv.size) == 0 {
            return Err(IllegalMoveError::OutOfReserve { size: mv.size });
        }
        Ok(())
    }

    /// Check if a move is legal for the side to move.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Generate all legal moves for the side to move.
    ///
    /// Order is row-major by cell, then ascending size. This order is part of
    /// the contract: it decides tie-breaking in the search.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(27);
        for pos in Pos::all() {
            for size in Size::all() {
                let mv = Move { pos, size };
                if self.is_legal(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Check if the side to move has at least one legal move.
    pub fn has_legal_move(&self) -> bool {
        Pos::all().any(|pos| Size::all().any(|size| self.is_legal(Move { pos, size })))
    }

    /// Apply a move: consume one reserve piece, overwrite the cell, switch
    /// the side to move. Returns the replaced piece so the move can be
    /// undone. A replaced piece is destroyed - it never returns to a reserve.
    pub fn apply(&mut self, mv: Move) -> Result<Option<Piece>, IllegalMoveError> {
        self.validate(mv)?;
        let mover = self.to_move;
        let captured = self.cells[mv.pos.0 as usize];
        self.cells[mv.pos.0 as usize] = Some(Piece {
            owner: mover,
            size: mv.size,
        });
        self.reserves[mover.index()][mv.size as usize] -= 1;
        self.to_move = mover.opponent();
        Ok(captured)
    }

    /// Undo a move: the exact inverse of [`apply`](GameState::apply).
    ///
    /// `captured` must be the value the matching `apply` returned.
    pub fn undo(&mut self, mv: Move, captured: Option<Piece>) {
        self.to_move = self.to_move.opponent();
        let mover = self.to_move;
        debug_assert_eq!(
            self.cells[mv.pos.0 as usize],
            Some(Piece {
                owner: mover,
                size: mv.size
            }),
            "undo does not match the applied move"
        );
        self.cells[mv.pos.0 as usize] = captured;
        self.reserves[mover.index()][mv.size as usize] += 1;
    }

    /// Game status: a line of three same-owner pieces wins regardless of
    /// size, checked before any exhaustion test. With no winning line, the
    /// game ends when the board is full or the side to move has no legal
    /// move; whoever then has more pieces on the board wins, equal counts
    /// draw. The exhaustion path can trigger on a non-full board.
    pub fn outcome(&self) -> Outcome {
        for line in &LINES {
            if let [Some(a), Some(b), Some(c)] =
                [self.cells[line[0]], self.cells[line[1]], self.cells[line[2]]]
            {
                if a.owner == b.owner && b.owner == c.owner {
                    return Outcome::Won(a.owner);
                }
            }
        }
        if self.board_full() || !self.has_legal_move() {
            let one = self.pieces_on_board(Player::One);
            let two = self.pieces_on_board(Player::Two);
            return match one.cmp(&two) {
                std::cmp::Ordering::Greater => Outcome::Won(Player::One),
                std::cmp::Ordering::Less => Outcome::Won(Player::Two),
                std::cmp::Ordering::Equal => Outcome::Draw,
            };
        }
        Outcome::InProgress
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn piece(owner: Player, size: Size) -> Option<Piece> {
        Some(Piece { owner, size })
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_size_can_replace() {
        assert!(!Size::Small.can_replace(Size::Small));
        assert!(!Size::Small.can_replace(Size::Medium));
        assert!(Size::Medium.can_replace(Size::Small));
        assert!(!Size::Medium.can_replace(Size::Medium));
        assert!(Size::Large.can_replace(Size::Small));
        assert!(Size::Large.can_replace(Size::Medium));
        assert!(!Size::Large.can_replace(Size::Large));
    }

    #[test]
    fn test_pos_row_col_roundtrip() {
        for i in 0..9 {
            let pos = Pos(i);
            assert_eq!(Pos::from_row_col(pos.row(), pos.col()), pos);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.to_move(), Player::One);
        assert_eq!(state.reserves(Player::One), [3, 3, 2]);
        assert_eq!(state.reserves(Player::Two), [3, 3, 2]);
        assert!(Pos::all().all(|p| state.piece_at(p).is_none()));
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_initial_move_count() {
        // 9 empty cells x 3 sizes in reserve.
        let state = GameState::new();
        assert_eq!(state.legal_moves().len(), 27);
    }

    #[test]
    fn test_move_order_is_row_major_then_size() {
        let state = GameState::new();
        let moves = state.legal_moves();
        assert_eq!(moves[0], Move::new(0, 0, Size::Small));
        assert_eq!(moves[1], Move::new(0, 0, Size::Medium));
        assert_eq!(moves[2], Move::new(0, 0, Size::Large));
        assert_eq!(moves[3], Move::new(0, 1, Size::Small));
        assert_eq!(moves[26], Move::new(2, 2, Size::Large));
    }

    #[test]
    fn test_apply_place_and_switch() {
        let mut state = GameState::new();
        let captured = state.apply(Move::new(1, 1, Size::Medium)).unwrap();
        assert_eq!(captured, None);
        assert_eq!(
            state.piece_at(Pos::from_row_col(1, 1)),
            piece(Player::One, Size::Medium)
        );
        assert_eq!(state.reserve(Player::One, Size::Medium), 2);
        assert_eq!(state.to_move(), Player::Two);
    }

    #[test]
    fn test_replacement_rules() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Medium)).unwrap();

        // P2 may not match the size, only exceed it.
        assert_eq!(
            state.validate(Move::new(0, 0, Size::Medium)),
            Err(IllegalMoveError::NotLarger {
                placed: Size::Medium,
                occupant: Size::Medium
            })
        );
        assert_eq!(
            state.validate(Move::new(0, 0, Size::Small)),
            Err(IllegalMoveError::NotLarger {
                placed: Size::Small,
                occupant: Size::Medium
            })
        );

        let captured = state.apply(Move::new(0, 0, Size::Large)).unwrap();
        assert_eq!(captured, piece(Player::One, Size::Medium));
        assert_eq!(
            state.piece_at(Pos(0)),
            piece(Player::Two, Size::Large)
        );
    }

    #[test]
    fn test_cannot_replace_own_piece() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Small)).unwrap();
        state.apply(Move::new(2, 2, Size::Small)).unwrap();
        assert_eq!(
            state.validate(Move::new(0, 0, Size::Large)),
            Err(IllegalMoveError::OwnPiece { at: Pos(0) })
        );
    }

    #[test]
    fn test_out_of_reserve() {
        let mut state = GameState::new();
        // Burn both large pieces of P1.
        state.apply(Move::new(0, 0, Size::Large)).unwrap();
        state.apply(Move::new(0, 1, Size::Small)).unwrap();
        state.apply(Move::new(1, 0, Size::Large)).unwrap();
        state.apply(Move::new(0, 2, Size::Small)).unwrap();
        assert_eq!(state.reserve(Player::One, Size::Large), 0);
        assert_eq!(
            state.validate(Move::new(2, 2, Size::Large)),
            Err(IllegalMoveError::OutOfReserve { size: Size::Large })
        );
    }

    #[test]
    fn test_failed_apply_leaves_state_unchanged() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Large)).unwrap();
        let before = state.clone();
        assert!(state.apply(Move::new(0, 0, Size::Small)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_captured_piece_is_destroyed() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Small)).unwrap();
        state.apply(Move::new(0, 0, Size::Medium)).unwrap();
        // P1's small is gone for good: not on the board, not in reserve.
        assert_eq!(state.reserve(Player::One, Size::Small), 2);
        assert_eq!(state.pieces_on_board(Player::One), 0);
        assert_eq!(state.pieces_on_board(Player::Two), 1);
    }

    #[test]
    fn test_undo_restores_exactly() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Small)).unwrap();
        let before = state.clone();

        let mv = Move::new(0, 0, Size::Large);
        let captured = state.apply(mv).unwrap();
        state.undo(mv, captured);
        assert_eq!(state, before);
    }

    #[test]
    fn test_random_playout_undo_symmetry() {
        // Play random games; unwinding every move must restore the initial
        // state bit-for-bit, and the allotment invariant must hold throughout.
        let mut rng = StdRng::seed_from_u64(0xA11C4);
        for _ in 0..200 {
            let mut state = GameState::new();
            let initial = state.clone();
            let mut trail = Vec::new();

            loop {
                if state.outcome() != Outcome::InProgress {
                    break;
                }
                let moves = state.legal_moves();
                let mv = moves[rng.random_range(0..moves.len())];
                let snapshot = state.clone();
                let captured = state.apply(mv).unwrap();

                for player in [Player::One, Player::Two] {
                    for size in Size::all() {
                        let on_board = Pos::all()
                            .filter_map(|p| state.piece_at(p))
                            .filter(|p| p.owner == player && p.size == size)
                            .count() as u8;
                        assert!(on_board + state.reserve(player, size) <= ALLOTMENT[size as usize]);
                    }
                }

                let mut check = state.clone();
                check.undo(mv, captured);
                assert_eq!(check, snapshot);

                trail.push((mv, captured));
            }

            while let Some((mv, captured)) = trail.pop() {
                state.undo(mv, captured);
            }
            assert_eq!(state, initial);
        }
    }

    #[test]
    fn test_line_win_ignores_size() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Small)).unwrap();
        state.apply(Move::new(1, 0, Size::Small)).unwrap();
        state.apply(Move::new(0, 1, Size::Medium)).unwrap();
        state.apply(Move::new(1, 1, Size::Small)).unwrap();
        state.apply(Move::new(0, 2, Size::Large)).unwrap();
        assert_eq!(state.outcome(), Outcome::Won(Player::One));
    }

    #[test]
    fn test_diagonal_win() {
        let cells_idx = [0usize, 4, 8];
        let mut cells = [None; 9];
        for &i in &cells_idx {
            cells[i] = piece(Player::Two, Size::Small);
        }
        let state = GameState::from_parts(cells, [[3, 3, 2], [0, 3, 2]], Player::One);
        assert_eq!(state.outcome(), Outcome::Won(Player::Two));
    }

    #[test]
    fn test_line_win_beats_count_tiebreak() {
        // Full board where P2 completes the main diagonal but P1 holds twice
        // as many cells: the line decides, not the count.
        let mut cells = [None; 9];
        for &i in &[0, 4, 8] {
            cells[i] = piece(Player::Two, Size::Small);
        }
        for &i in &[1, 2, 3] {
            cells[i] = piece(Player::One, Size::Small);
        }
        for &i in &[5, 6, 7] {
            cells[i] = piece(Player::One, Size::Medium);
        }
        let state = GameState::from_parts(cells, [[0, 0, 2], [0, 3, 2]], Player::One);
        assert_eq!(state.outcome(), Outcome::Won(Player::Two));
    }

    #[test]
    fn test_full_board_count_tiebreak() {
        // Full board, no line, P1 holds 5 cells to P2's 4.
        let mut cells = [None; 9];
        for &i in &[0, 1, 6] {
            cells[i] = piece(Player::One, Size::Small);
        }
        for &i in &[4, 5] {
            cells[i] = piece(Player::One, Size::Medium);
        }
        for &i in &[2, 3, 7] {
            cells[i] = piece(Player::Two, Size::Small);
        }
        cells[8] = piece(Player::Two, Size::Medium);
        let state = GameState::from_parts(cells, [[0, 1, 2], [0, 2, 2]], Player::Two);
        assert_eq!(state.outcome(), Outcome::Won(Player::One));
    }

    #[test]
    fn test_exhaustion_on_non_full_board() {
        // Side to move has an empty reserve and no replacement targets, so
        // the game ends even though cells remain open. Equal counts: draw.
        let mut cells = [None; 9];
        cells[0] = piece(Player::Two, Size::Large);
        cells[8] = piece(Player::One, Size::Large);
        let state = GameState::from_parts(cells, [[0, 0, 0], [3, 3, 1]], Player::One);
        assert!(!state.board_full());
        assert!(!state.has_legal_move());
        assert_eq!(state.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_exhaustion_count_win_on_non_full_board() {
        let mut cells = [None; 9];
        cells[0] = piece(Player::Two, Size::Large);
        cells[1] = piece(Player::Two, Size::Large);
        cells[8] = piece(Player::One, Size::Large);
        let state = GameState::from_parts(cells, [[0, 0, 0], [3, 3, 0]], Player::One);
        assert!(!state.has_legal_move());
        assert_eq!(state.outcome(), Outcome::Won(Player::Two));
    }

    #[test]
    fn test_replacement_moves_generated() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0, Size::Small)).unwrap();
        // P2 can replace the small at (0,0) with medium or large, plus place
        // any of 3 sizes on the 8 empty cells.
        let moves = state.legal_moves();
        assert_eq!(moves.len(), 8 * 3 + 2);
        assert!(moves.contains(&Move::new(0, 0, Size::Medium)));
        assert!(moves.contains(&Move::new(0, 0, Size::Large)));
        assert!(!moves.contains(&Move::new(0, 0, Size::Small)));
    }
}
