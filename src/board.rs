//! The piece placement grid and the move executor.

use std::fmt;

use crate::{
    color::Color,
    errors::MoveError,
    movegen::{self, PositionList},
    position::Position,
    role::Role,
    types::Piece,
};

/// An 8×8 grid of optional pieces, the sole owner of every piece placed
/// on it.
///
/// Slots are addressed by [`Position`]; at most one piece occupies a
/// square. Out-of-bounds access fails with [`MoveError::OutOfBounds`]
/// instead of being silently treated as empty.
///
/// # Examples
///
/// ```
/// use tabia::{position, Board, Color, Role};
///
/// let mut board = Board::new();
/// board.add(Color::White, Role::Rook, position::A1)?;
/// assert!(!board.is_empty(position::A1)?);
/// assert!(board.is_empty(position::A2)?);
/// # Ok::<_, tabia::MoveError>(())
/// ```
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board::default()
    }

    fn index(position: Position) -> Result<(usize, usize), MoveError> {
        if position.in_bounds() {
            Ok((position.row() as usize, position.col() as usize))
        } else {
            Err(MoveError::OutOfBounds)
        }
    }

    pub(crate) fn occupant(&self, position: Position) -> Option<Piece> {
        debug_assert!(position.in_bounds());
        self.grid[position.row() as usize][position.col() as usize]
    }

    /// Looks up the piece at `position`, if any.
    pub fn at(&self, position: Position) -> Result<Option<PlacedPiece<'_>>, MoveError> {
        let (row, col) = Board::index(position)?;
        Ok(self.grid[row][col].map(|piece| PlacedPiece {
            board: self,
            piece,
            position,
        }))
    }

    /// Checks whether the square at `position` holds no piece.
    pub fn is_empty(&self, position: Position) -> Result<bool, MoveError> {
        let (row, col) = Board::index(position)?;
        Ok(self.grid[row][col].is_none())
    }

    /// Places a new piece on an empty square and returns it.
    ///
    /// Fails with [`MoveError::Occupied`] if the square already holds a
    /// piece; overwriting is never permitted.
    pub fn add(&mut self, color: Color, role: Role, position: Position) -> Result<Piece, MoveError> {
        let (row, col) = Board::index(position)?;
        if self.grid[row][col].is_some() {
            return Err(MoveError::Occupied);
        }
        let piece = role.of(color);
        self.grid[row][col] = Some(piece);
        Ok(piece)
    }

    /// All 64 squares with their occupants, row-major starting at `A1`.
    pub fn squares(&self) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        Position::all().map(move |position| (position, self.occupant(position)))
    }

    /// Every piece on the board.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece<'_>> {
        self.squares().filter_map(move |(position, piece)| {
            piece.map(|piece| PlacedPiece {
                board: self,
                piece,
                position,
            })
        })
    }

    /// Every piece of the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PlacedPiece<'_>> {
        self.pieces().filter(move |placed| placed.color() == color)
    }

    /// Validates and executes a move or capture from `from` to `to`.
    ///
    /// An empty destination must be among the piece's possible moves, an
    /// occupied one among its possible attacks. On success the piece is
    /// relocated and the captured piece, if any, is returned to the
    /// caller. A rejected request leaves the board unchanged.
    ///
    /// Whether the moving piece's color is to play is not checked here;
    /// that is the calling session's policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabia::{position, Board, Color, MoveError, Role};
    ///
    /// let mut board = Board::new();
    /// board.add(Color::White, Role::Knight, position::B1)?;
    /// board.add(Color::Black, Role::Pawn, position::C3)?;
    ///
    /// assert_eq!(board.move_to(position::B1, position::B4), Err(MoveError::IllegalMove));
    /// assert_eq!(board.move_to(position::B1, position::C3), Ok(Some(Color::Black.pawn())));
    /// # Ok::<_, tabia::MoveError>(())
    /// ```
    pub fn move_to(&mut self, from: Position, to: Position) -> Result<Option<Piece>, MoveError> {
        let (from_row, from_col) = Board::index(from)?;
        let (to_row, to_col) = Board::index(to)?;
        let piece = self.grid[from_row][from_col].ok_or(MoveError::IllegalMove)?;

        if self.grid[to_row][to_col].is_none() {
            if !movegen::piece_moves(self, piece, from).contains(&to) {
                return Err(MoveError::IllegalMove);
            }
        } else if !movegen::piece_attacks(self, piece, from).contains(&to) {
            return Err(MoveError::IllegalAttack);
        }

        self.grid[from_row][from_col] = None;
        Ok(self.grid[to_row][to_col].replace(piece))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8usize).rev() {
            write!(f, "{}", (b'1' + row as u8) as char)?;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(piece) => write!(f, " {}", piece.code())?,
                    None => f.write_str(" ..")?,
                }
            }
            writeln!(f)?;
        }
        f.write_str("   A  B  C  D  E  F  G  H")
    }
}

/// A piece together with the square it stands on.
///
/// Borrows the board it was looked up on, only to query occupancy: move
/// and attack sets are computed fresh against the current placement on
/// every call.
#[derive(Copy, Clone)]
pub struct PlacedPiece<'a> {
    board: &'a Board,
    piece: Piece,
    position: Position,
}

impl PlacedPiece<'_> {
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.piece.role
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The squares this piece could move to, each currently empty.
    pub fn possible_moves(&self) -> PositionList {
        movegen::piece_moves(self.board, self.piece, self.position)
    }

    /// The squares this piece could capture on, each currently holding
    /// an opposing piece.
    pub fn possible_attacks(&self) -> PositionList {
        movegen::piece_attacks(self.board, self.piece, self.position)
    }
}

impl fmt::Debug for PlacedPiece<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacedPiece")
            .field("piece", &self.piece)
            .field("position", &self.position)
            .finish()
    }
}
