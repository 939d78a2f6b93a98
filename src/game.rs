//! Turn and session bookkeeping layered on top of the board.
//!
//! The core stays stateless aside from the [`Board`] it is handed; whose
//! turn it is lives here, owned by the serving component.

use std::{error::Error, fmt};

use crate::{
    board::Board,
    color::Color,
    errors::{MoveError, ParseError},
    position::Position,
    types::Piece,
};

/// A session: a board plus turn bookkeeping.
///
/// # Examples
///
/// ```
/// use tabia::{Color, Game};
///
/// let mut game = Game::new();
/// assert_eq!(game.current_player(), Color::White);
///
/// game.play("E2", "E4")?;
/// assert_eq!(game.turn(), 2);
/// assert_eq!(game.current_player(), Color::Black);
/// # Ok::<_, tabia::GameError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Game {
    board: Board,
    turn: u32,
    current_player: Color,
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl Game {
    /// A fresh game: standard placement, white to play, turn 1.
    pub fn new() -> Game {
        Game {
            board: Board::standard(),
            turn: 1,
            current_player: Color::White,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Restores the starting placement and gives white the move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Plays a move given algebraic endpoints such as `"E2"`, `"E4"`.
    ///
    /// The origin square must hold a piece of the player to move; the
    /// destination is validated by the move executor. On success the
    /// turn counter advances, the other player is to move, and the
    /// captured piece, if any, is returned. Any failure leaves the
    /// session untouched.
    pub fn play(&mut self, begin: &str, end: &str) -> Result<Option<Piece>, GameError> {
        let from: Position = begin.parse()?;
        let to: Position = end.parse()?;

        let piece = self
            .board
            .at(from)?
            .map(|placed| placed.piece())
            .ok_or(GameError::EmptySquare(from))?;
        if piece.color != self.current_player {
            return Err(GameError::WrongTurn(self.current_player));
        }

        let captured = self.board.move_to(from, to)?;
        self.turn += 1;
        self.current_player = !self.current_player;
        Ok(captured)
    }

    /// Snapshots the session in wire form.
    pub fn state(&self) -> GameState {
        GameState {
            turn: self.turn,
            current_player: self.current_player,
            board: self.board.to_notation(),
        }
    }
}

/// Wire-shaped snapshot of a [`Game`]: turn number, player to move and
/// the board notation grid.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub turn: u32,
    pub current_player: Color,
    pub board: Vec<Vec<String>>,
}

/// Error when playing a move in a session.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameError {
    /// A malformed algebraic endpoint.
    Parse(ParseError),
    /// The move executor rejected the request.
    Move(MoveError),
    /// The origin square holds no piece.
    EmptySquare(Position),
    /// The piece on the origin square belongs to the waiting player.
    WrongTurn(Color),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GameError::Parse(err) => err.fmt(f),
            GameError::Move(err) => err.fmt(f),
            GameError::EmptySquare(position) => write!(f, "no piece at {position}"),
            GameError::WrongTurn(color) => write!(f, "it is {color}'s turn"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Parse(err) => Some(err),
            GameError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for GameError {
    fn from(err: ParseError) -> GameError {
        GameError::Parse(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> GameError {
        GameError::Move(err)
    }
}
