//! A library for chess board representation, per-piece move generation
//! and move execution.
//!
//! # Examples
//!
//! Query a pawn's moves and attacks:
//!
//! ```
//! use tabia::{position, Board, Color, Role};
//!
//! let mut board = Board::new();
//! board.add(Color::White, Role::Pawn, position::E2)?;
//! board.add(Color::Black, Role::Pawn, position::D3)?;
//!
//! let pawn = board.at(position::E2)?.expect("pawn was placed");
//! assert_eq!(pawn.possible_moves().as_slice(), &[position::E3, position::E4]);
//! assert_eq!(pawn.possible_attacks().as_slice(), &[position::D3]);
//! # Ok::<_, tabia::MoveError>(())
//! ```
//!
//! Run a session with turn alternation:
//!
//! ```
//! use tabia::Game;
//!
//! let mut game = Game::new();
//! game.play("E2", "E4")?;
//! game.play("D7", "D5")?;
//!
//! let captured = game.play("E4", "D5")?;
//! assert_eq!(captured.map(|piece| piece.code()), Some("BP".to_string()));
//! # Ok::<_, tabia::GameError>(())
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations, and for [`GameState`].

#![warn(missing_debug_implementations)]

mod board;
mod color;
mod errors;
mod game;
mod role;
mod types;

pub mod movegen;
pub mod notation;
pub mod position;

pub use crate::{
    board::{Board, PlacedPiece},
    color::Color,
    errors::{MoveError, ParseError},
    game::{Game, GameError, GameState},
    movegen::PositionList,
    position::{Direction, Position, Ray},
    role::Role,
    types::Piece,
};
