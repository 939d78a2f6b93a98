use crate::{color::Color, errors::ParseError, role::Role};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// The 2-letter board notation code, e.g. `WP` for a white pawn.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabia::Color;
    ///
    /// assert_eq!(Color::Black.queen().code(), "BQ");
    /// ```
    pub fn code(self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.color.char());
        code.push(self.role.upper_char());
        code
    }

    /// Parses a 2-letter code, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabia::{Color, Piece};
    ///
    /// assert_eq!(Piece::from_code("wn"), Ok(Color::White.knight()));
    /// assert!(Piece::from_code("XP").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Piece, ParseError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(color), Some(role), None) => {
                let color = Color::from_char(color).ok_or(ParseError::InvalidPieceCode)?;
                let role = Role::from_char(role).ok_or(ParseError::InvalidPieceCode)?;
                Ok(Piece { color, role })
            }
            _ => Err(ParseError::InvalidPieceCode),
        }
    }
}
