//! The [`CellState`] type: what occupies a single grid cell.

use std::fmt;

/// State of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
}

impl CellState {
    /// Whether the cell blocks movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// One-character text form used by [`Grid::parse`](crate::Grid::parse).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping() {
        for state in [
            CellState::Empty,
            CellState::Wall,
            CellState::Start,
            CellState::End,
        ] {
            assert_eq!(CellState::from_char(state.to_char()), Some(state));
        }
        assert_eq!(CellState::from_char('x'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(CellState::Wall.is_wall());
        assert!(!CellState::Start.is_wall());
        assert!(!CellState::End.is_wall());
        assert!(!CellState::default().is_wall());
    }
}
