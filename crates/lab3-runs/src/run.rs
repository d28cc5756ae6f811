use lab3_core::Length;

/// A move: take this many elements from the front.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Run(Length);

impl Run {
    pub fn len(&self) -> Length {
        self.0
    }
}

impl From<Length> for Run {
    fn from(k: Length) -> Self {
        debug_assert!(k >= 1, "a run takes at least one element");
        Self(k)
    }
}

impl std::fmt::Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
