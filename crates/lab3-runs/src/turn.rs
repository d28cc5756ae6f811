use lab3_core::Score;

/// Who acts at a game state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Turn {
    P1,
    P2,
    Terminal,
}

impl Turn {
    /// The player acting after this one.
    pub fn next(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
            Self::Terminal => Self::Terminal,
        }
    }
    /// Sign applied to a P1-minus-P2 differential to view it from this seat.
    pub fn direction(&self) -> Score {
        match self {
            Self::P1 => 1,
            Self::P2 => -1,
            Self::Terminal => unreachable!("terminal has no perspective"),
        }
    }
}

impl From<usize> for Turn {
    fn from(ply: usize) -> Self {
        match ply % 2 {
            0 => Self::P1,
            _ => Self::P2,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
