use super::*;
use lab3_core::*;

/// The branch of the function governing a given abscissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Outside every branch.
    Undefined,
    /// `y = x + offset`, offset in tenths.
    Linear(Tenths),
    /// `y` is a whole constant, printed without decimals.
    Constant(i32),
}

impl Piece {
    pub fn of(x: Tenths) -> Self {
        match x {
            Tenths::MIN..=-31 => Self::Undefined,
            -30..=-11 => Self::Linear(30),
            -10..=-1 => Self::Constant(2),
            00..=29 => Self::Linear(20),
            30..=49 => Self::Constant(5),
            50..=70 => Self::Linear(0),
            71..=Tenths::MAX => Self::Undefined,
        }
    }

    /// Evaluates this branch at `x`.
    pub fn value(&self, x: Tenths) -> Cell {
        match self {
            Self::Undefined => Cell::Undefined,
            Self::Linear(offset) => Cell::Decimal(x + offset),
            Self::Constant(c) => Cell::Whole(*c),
        }
    }
}

/// A rendered `y` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Undefined,
    Decimal(Tenths),
    Whole(i32),
}

impl From<Tenths> for Cell {
    fn from(x: Tenths) -> Self {
        Piece::of(x).value(x)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "{}", UNDEFINED),
            Self::Decimal(y) => write!(f, "{}", decimal(*y)),
            Self::Whole(y) => write!(f, "{}", y),
        }
    }
}
