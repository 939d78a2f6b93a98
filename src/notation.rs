//! Read and write the grid notation used at the system boundary.
//!
//! A board is encoded as 8 rows (row 0 = rank 1) of 8 entries, each
//! either the empty string or a 2-letter piece code such as `WP`.

use crate::{board::Board, errors::ParseError, position::Position, types::Piece};

/// The standard 32-piece starting placement.
pub const STARTING_NOTATION: [[&str; 8]; 8] = [
    ["WR", "WN", "WB", "WQ", "WK", "WB", "WN", "WR"],
    ["WP"; 8],
    [""; 8],
    [""; 8],
    [""; 8],
    [""; 8],
    ["BP"; 8],
    ["BR", "BN", "BB", "BQ", "BK", "BB", "BN", "BR"],
];

impl Board {
    /// The standard starting placement.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabia::{position, Board, Color};
    ///
    /// let board = Board::standard();
    /// assert_eq!(board.pieces().count(), 32);
    /// assert_eq!(board.at(position::D8)?.map(|p| p.piece()), Some(Color::Black.queen()));
    /// # Ok::<_, tabia::MoveError>(())
    /// ```
    pub fn standard() -> Board {
        Board::from_notation(&STARTING_NOTATION).expect("starting notation is a valid 8x8 grid")
    }

    /// Serializes the placement as 8 rows of 8 codes, rank 1 first.
    ///
    /// A pure read: the grid carries piece placement only, no turn or
    /// player state.
    pub fn to_notation(&self) -> Vec<Vec<String>> {
        let mut rows = vec![vec![String::new(); 8]; 8];
        for placed in self.pieces() {
            let position = placed.position();
            rows[position.row() as usize][position.col() as usize] = placed.piece().code();
        }
        rows
    }

    /// Builds a board from a notation grid.
    ///
    /// Codes are parsed case-insensitively. Fails with
    /// [`ParseError::InvalidGrid`] unless the grid is exactly 8 rows of
    /// 8 entries, and with [`ParseError::InvalidPieceCode`] on any entry
    /// that is neither empty nor a piece code.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabia::{position, Board, Color};
    ///
    /// let board = Board::from_notation(&[
    ///     [""; 8],
    ///     ["", "", "", "", "WP", "", "", ""],
    ///     ["", "", "", "BP", "", "", "", ""],
    ///     [""; 8],
    ///     [""; 8],
    ///     [""; 8],
    ///     [""; 8],
    ///     [""; 8],
    /// ])?;
    /// assert_eq!(board.at(position::E2)?.map(|p| p.piece()), Some(Color::White.pawn()));
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_notation<R, S>(rows: &[R]) -> Result<Board, ParseError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() != 8 {
            return Err(ParseError::InvalidGrid);
        }
        let mut board = Board::new();
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != 8 {
                return Err(ParseError::InvalidGrid);
            }
            for (col, code) in entries.iter().enumerate() {
                let code = code.as_ref();
                if code.is_empty() {
                    continue;
                }
                let piece = Piece::from_code(code)?;
                board
                    .add(piece.color, piece.role, Position::new(row as i8, col as i8))
                    .expect("every slot of a fresh board is in bounds and empty");
            }
        }
        Ok(board)
    }
}
