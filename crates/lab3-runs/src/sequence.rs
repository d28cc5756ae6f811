use lab3_core::*;

/// The ordered elements on the table, front first.
///
/// Immutable once constructed. State `i` of the game means the first `i`
/// elements have already been taken.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence(Vec<Value>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Sum of every element, widened.
    pub fn total(&self) -> Score {
        self.0.iter().map(|&v| v as Score).sum()
    }
    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl Arbitrary for Sequence {
    fn random() -> Self {
        let n = rand::random_range(0..=ARBITRARY_MAX_LENGTH);
        (0..n)
            .map(|_| rand::random_range(-ARBITRARY_MAX_VALUE..=ARBITRARY_MAX_VALUE))
            .collect::<Vec<_>>()
            .into()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self
            .0
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_widens() {
        let sequence = Sequence::from(vec![Value::MAX, Value::MAX]);
        assert!(sequence.total() == 2 * Value::MAX as Score);
    }

    #[test]
    fn random_within_bounds() {
        for _ in 0..64 {
            let sequence = Sequence::random();
            assert!(sequence.len() <= ARBITRARY_MAX_LENGTH);
            assert!(sequence.values().iter().all(|v| v.abs() <= ARBITRARY_MAX_VALUE));
        }
    }
}
