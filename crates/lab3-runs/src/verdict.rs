use super::*;

/// Whether the first player finishes strictly ahead under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Loss,
}

impl From<&Advantage> for Verdict {
    fn from(advantage: &Advantage) -> Self {
        match advantage.root() > 0 {
            true => Self::Win,
            false => Self::Loss,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "1"),
            Self::Loss => write!(f, "0"),
        }
    }
}
