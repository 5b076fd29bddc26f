//! Bit-string state encoding and D4 symmetry canonicalization.
//!
//! A board encodes to 27 bits (9 cells x 3 bits, cell 0 most significant)
//! and the six reserve counters to 12 bits. The canonical board code is the
//! lexicographically smallest of the 8 symmetry images of the board string;
//! reserves have no spatial symmetry and are appended unchanged. The result
//! is a 39-bit cache key.
//!
//! Boards that are geometric transforms of each other have the same
//! game-theoretic value, so folding them onto one representative shrinks the
//! reachable state space by up to 8x.

use crate::{GameState, Piece, Player, Pos, Size};

/// Bits per cell code.
const CELL_BITS: u32 = 3;
/// Bits in a full board code.
pub const BOARD_BITS: u32 = 27;
/// Bits in the reserve code.
pub const RESERVE_BITS: u32 = 12;

/// Position mapping for each of the 8 D4 transformations.
/// Each array maps new position -> old position.
const TRANSFORMS: [[usize; 9]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8], // Identity
    [6, 3, 0, 7, 4, 1, 8, 5, 2], // Rotate 90 degrees clockwise
    [8, 7, 6, 5, 4, 3, 2, 1, 0], // Rotate 180 degrees
    [2, 5, 8, 1, 4, 7, 0, 3, 6], // Rotate 270 degrees clockwise
    [2, 1, 0, 5, 4, 3, 8, 7, 6], // Flip left-right
    [6, 7, 8, 3, 4, 5, 0, 1, 2], // Flip top-bottom
    [0, 3, 6, 1, 4, 7, 2, 5, 8], // Flip main diagonal
    [8, 5, 2, 7, 4, 1, 6, 3, 0], // Flip anti-diagonal
];

/// 3-bit cell code: `000` empty, otherwise owner bit (P1=0, P2=1) followed
/// by the size rank (Small=01, Medium=10, Large=11).
#[inline]
fn cell_code(cell: Option<Piece>) -> u32 {
    match cell {
        None => 0,
        Some(Piece { owner, size }) => ((owner as u32) << 2) | (size as u32 + 1),
    }
}

/// Encode the board to its 27-bit code, cell (0,0) in the most significant
/// position. Pure function of the board content.
pub fn encode_board(state: &GameState) -> u32 {
    let mut code = 0u32;
    for pos in Pos::all() {
        code = (code << CELL_BITS) | cell_code(state.piece_at(pos));
    }
    code
}

/// Encode the six reserve counters to their 12-bit code: P1 small/medium/
/// large then P2 small/medium/large, 2 bits each, first counter most
/// significant.
pub fn encode_reserves(state: &GameState) -> u16 {
    let mut code = 0u16;
    for player in [Player::One, Player::Two] {
        for size in Size::all() {
            code = (code << 2) | state.reserve(player, size) as u16;
        }
    }
    code
}

/// Apply one of the 8 D4 transformations to a 27-bit board code.
fn transform_board(code: u32, t: usize) -> u32 {
    let mapping = &TRANSFORMS[t];
    let mut out = 0u32;
    for (new_pos, &old_pos) in mapping.iter().enumerate() {
        let cell = (code >> (CELL_BITS * (8 - old_pos as u32))) & 0b111;
        out |= cell << (CELL_BITS * (8 - new_pos as u32));
    }
    out
}

/// Canonical board code: the lexicographically smallest of the 8 symmetry
/// images, compared as 27-bit strings. The width is fixed, so unsigned
/// integer order coincides with bit-string order, leading zeros included.
pub fn canonical_board(code: u32) -> u32 {
    let mut min = code;
    for t in 1..8 {
        let candidate = transform_board(code, t);
        if candidate < min {
            min = candidate;
        }
    }
    min
}

/// All 8 symmetry images of a board code.
pub fn all_symmetries(code: u32) -> [u32; 8] {
    let mut out = [0u32; 8];
    for (t, slot) in out.iter_mut().enumerate() {
        *slot = transform_board(code, t);
    }
    out
}

/// The 39-bit cache key: canonical board code followed by the unpermuted
/// reserve code, as an unsigned integer.
///
/// The side to move is deliberately absent: Player One moves first and every
/// move consumes exactly one reserve piece, so the turn is derivable from the
/// reserve counters.
pub fn canonical_key(state: &GameState) -> u64 {
    let board = canonical_board(encode_board(state)) as u64;
    (board << RESERVE_BITS) | encode_reserves(state) as u64
}
