//! Per-piece move and attack generation.
//!
//! Destination sets are always computed fresh against the board's current
//! occupancy; nothing is cached between calls.

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::Color,
    errors::MoveError,
    position::{Direction, Position},
    role::Role,
    types::Piece,
};

/// A container for destination squares that can be stored inline on the
/// stack.
///
/// 27 squares is the maximum mobility of any piece: a queen near the
/// middle of an otherwise empty board.
pub type PositionList = ArrayVec<Position, 27>;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The squares the piece at `from` may move to, each currently empty.
///
/// Returns the empty list if `from` holds no piece.
///
/// # Examples
///
/// ```
/// use tabia::{movegen, position, Board, Color, Role};
///
/// let mut board = Board::new();
/// board.add(Color::White, Role::Rook, position::A1)?;
/// assert_eq!(movegen::moves(&board, position::A1)?.len(), 14);
/// assert!(movegen::attacks(&board, position::A1)?.is_empty());
/// # Ok::<_, tabia::MoveError>(())
/// ```
pub fn moves(board: &Board, from: Position) -> Result<PositionList, MoveError> {
    Ok(board
        .at(from)?
        .map_or_else(PositionList::new, |placed| placed.possible_moves()))
}

/// The squares the piece at `from` may capture on, each currently
/// holding an opposing piece.
///
/// Returns the empty list if `from` holds no piece.
pub fn attacks(board: &Board, from: Position) -> Result<PositionList, MoveError> {
    Ok(board
        .at(from)?
        .map_or_else(PositionList::new, |placed| placed.possible_attacks()))
}

pub(crate) fn piece_moves(board: &Board, piece: Piece, from: Position) -> PositionList {
    match piece.role {
        Role::Pawn => pawn_moves(board, piece.color, from),
        Role::Knight => leaper_moves(board, from, &KNIGHT_DELTAS),
        Role::King => leaper_moves(board, from, &KING_DELTAS),
        Role::Rook => slider_moves(board, from, &Direction::ROOK),
        Role::Bishop => slider_moves(board, from, &Direction::BISHOP),
        Role::Queen => slider_moves(board, from, &Direction::ALL),
    }
}

pub(crate) fn piece_attacks(board: &Board, piece: Piece, from: Position) -> PositionList {
    match piece.role {
        Role::Pawn => pawn_attacks(board, piece.color, from),
        Role::Knight => leaper_attacks(board, piece.color, from, &KNIGHT_DELTAS),
        Role::King => leaper_attacks(board, piece.color, from, &KING_DELTAS),
        Role::Rook => slider_attacks(board, piece.color, from, &Direction::ROOK),
        Role::Bishop => slider_attacks(board, piece.color, from, &Direction::BISHOP),
        Role::Queen => slider_attacks(board, piece.color, from, &Direction::ALL),
    }
}

fn leaper_moves(board: &Board, from: Position, deltas: &[(i8, i8)]) -> PositionList {
    let mut list = PositionList::new();
    for &delta in deltas {
        let to = from + delta;
        if to.in_bounds() && board.occupant(to).is_none() {
            list.push(to);
        }
    }
    list
}

fn leaper_attacks(board: &Board, color: Color, from: Position, deltas: &[(i8, i8)]) -> PositionList {
    let mut list = PositionList::new();
    for &delta in deltas {
        let to = from + delta;
        if to.in_bounds() && board.occupant(to).is_some_and(|target| target.color != color) {
            list.push(to);
        }
    }
    list
}

fn slider_moves(board: &Board, from: Position, directions: &[Direction]) -> PositionList {
    let mut list = PositionList::new();
    for &direction in directions {
        for to in from.ray(direction) {
            if board.occupant(to).is_some() {
                break;
            }
            list.push(to);
        }
    }
    list
}

fn slider_attacks(
    board: &Board,
    color: Color,
    from: Position,
    directions: &[Direction],
) -> PositionList {
    let mut list = PositionList::new();
    for &direction in directions {
        // Only the first occupied square on a ray is reachable.
        for to in from.ray(direction) {
            if let Some(target) = board.occupant(to) {
                if target.color != color {
                    list.push(to);
                }
                break;
            }
        }
    }
    list
}

fn pawn_moves(board: &Board, color: Color, from: Position) -> PositionList {
    let mut list = PositionList::new();
    let forward = color.fold(1, -1);

    let single = from + (forward, 0);
    if single.in_bounds() && board.occupant(single).is_none() {
        list.push(single);

        // The double step requires the starting rank and both squares free.
        if from.row() == color.fold(1, 6) {
            let double = from + (2 * forward, 0);
            if board.occupant(double).is_none() {
                list.push(double);
            }
        }
    }
    list
}

fn pawn_attacks(board: &Board, color: Color, from: Position) -> PositionList {
    let mut list = PositionList::new();
    let forward = color.fold(1, -1);
    for dcol in [-1, 1] {
        let to = from + (forward, dcol);
        if to.in_bounds() && board.occupant(to).is_some_and(|target| target.color != color) {
            list.push(to);
        }
    }
    list
}
