//! Grid coordinates, directional rays and algebraic notation.

use std::{fmt, iter::FusedIterator, ops, str::FromStr};

use crate::errors::ParseError;

/// A coordinate pair on (or around) the 8×8 grid, with row 0 being rank `1`.
///
/// Construction and arithmetic are unchecked: out-of-bounds positions are
/// legal intermediate values, checked with [`Position::in_bounds`] before any
/// board access.
///
/// # Examples
///
/// ```
/// use tabia::{position, Position};
///
/// assert_eq!(position::E2, Position::new(1, 4));
/// assert_eq!(position::E2 + (1, 0), position::E3);
/// assert_eq!(position::E4 - position::E2, (2, 0));
/// assert!(!(position::A1 + (-1, 0)).in_bounds());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Checks that both coordinates are in `0..8`.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        0 <= self.row && self.row < 8 && 0 <= self.col && self.col < 8
    }

    /// All 64 positions of the grid, row-major starting at `A1`.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|row| (0..8).map(move |col| Position::new(row, col)))
    }

    /// Walks from this position towards the board edge.
    ///
    /// The ray starts one step away and never yields an out-of-bounds
    /// position. It is computed lazily and can be restarted by calling
    /// `ray` again.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabia::{position, Direction};
    ///
    /// let up: Vec<_> = position::E6.ray(Direction::Up).collect();
    /// assert_eq!(up, [position::E7, position::E8]);
    /// assert_eq!(position::E6.ray(Direction::Left).len(), 4);
    /// ```
    pub const fn ray(self, direction: Direction) -> Ray {
        Ray {
            cursor: self,
            direction,
        }
    }
}

impl ops::Add<(i8, i8)> for Position {
    type Output = Position;

    /// Translates by `(drow, dcol)`, without a bounds check.
    #[inline]
    fn add(self, (drow, dcol): (i8, i8)) -> Position {
        Position::new(self.row + drow, self.col + dcol)
    }
}

impl ops::Sub for Position {
    type Output = (i8, i8);

    /// The `(drow, dcol)` delta between two positions.
    #[inline]
    fn sub(self, other: Position) -> (i8, i8) {
        (self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'A' + self.col as u8) as char,
            (b'1' + self.row as u8) as char
        )
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Position, ParseError> {
        let mut chars = s.chars();
        let col = chars.next().and_then(col_from_char);
        let row = chars.next().and_then(row_from_char);
        match (col, row, chars.next()) {
            (Some(col), Some(row), None) => Ok(Position::new(row, col)),
            _ => Err(ParseError::InvalidPosition),
        }
    }
}

const fn col_from_char(ch: char) -> Option<i8> {
    match ch {
        'A'..='H' => Some(ch as i8 - 'A' as i8),
        'a'..='h' => Some(ch as i8 - 'a' as i8),
        _ => None,
    }
}

const fn row_from_char(ch: char) -> Option<i8> {
    match ch {
        '1'..='8' => Some(ch as i8 - '1' as i8),
        _ => None,
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Position, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PositionVisitor;

        impl serde::de::Visitor<'_> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("algebraic position such as `E2`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Position, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(PositionVisitor)
    }
}

/// One of the eight ray directions.
///
/// `Up` points towards increasing rows, `Right` towards increasing columns.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The unit `(drow, dcol)` step of this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (1, -1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (-1, 1),
        }
    }

    /// All eight directions, the queen's set.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The four orthogonal directions.
    pub const ROOK: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The four diagonal directions.
    pub const BISHOP: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];
}

/// Iterator over the squares from a position to the board edge.
///
/// Created by [`Position::ray`].
#[derive(Clone, Debug)]
pub struct Ray {
    cursor: Position,
    direction: Direction,
}

impl Iterator for Ray {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let next = self.cursor + self.direction.delta();
        if next.in_bounds() {
            self.cursor = next;
            Some(next)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Ray {
    fn len(&self) -> usize {
        let (drow, dcol) = self.direction.delta();
        let rows = match drow {
            1 => 7 - self.cursor.row,
            -1 => self.cursor.row,
            _ => 7,
        };
        let cols = match dcol {
            1 => 7 - self.cursor.col,
            -1 => self.cursor.col,
            _ => 7,
        };
        rows.min(cols).max(0) as usize
    }
}

impl FusedIterator for Ray {}

macro_rules! positions {
    ($($name:ident => ($row:expr, $col:expr),)+) => {
        $(
            #[allow(missing_docs)]
            pub const $name: Position = Position::new($row, $col);
        )+
    };
}

positions! {
    A1 => (0, 0), B1 => (0, 1), C1 => (0, 2), D1 => (0, 3),
    E1 => (0, 4), F1 => (0, 5), G1 => (0, 6), H1 => (0, 7),
    A2 => (1, 0), B2 => (1, 1), C2 => (1, 2), D2 => (1, 3),
    E2 => (1, 4), F2 => (1, 5), G2 => (1, 6), H2 => (1, 7),
    A3 => (2, 0), B3 => (2, 1), C3 => (2, 2), D3 => (2, 3),
    E3 => (2, 4), F3 => (2, 5), G3 => (2, 6), H3 => (2, 7),
    A4 => (3, 0), B4 => (3, 1), C4 => (3, 2), D4 => (3, 3),
    E4 => (3, 4), F4 => (3, 5), G4 => (3, 6), H4 => (3, 7),
    A5 => (4, 0), B5 => (4, 1), C5 => (4, 2), D5 => (4, 3),
    E5 => (4, 4), F5 => (4, 5), G5 => (4, 6), H5 => (4, 7),
    A6 => (5, 0), B6 => (5, 1), C6 => (5, 2), D6 => (5, 3),
    E6 => (5, 4), F6 => (5, 5), G6 => (5, 6), H6 => (5, 7),
    A7 => (6, 0), B7 => (6, 1), C7 => (6, 2), D7 => (6, 3),
    E7 => (6, 4), F7 => (6, 5), G7 => (6, 6), H7 => (6, 7),
    A8 => (7, 0), B8 => (7, 1), C8 => (7, 2), D8 => (7, 3),
    E8 => (7, 4), F8 => (7, 5), G8 => (7, 6), H8 => (7, 7),
}
