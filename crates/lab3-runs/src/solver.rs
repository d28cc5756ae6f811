use super::*;
use lab3_core::*;

/// One solved instance of the run-taking game.
///
/// Owns the sequence together with its prefix sums and DP table, all sized
/// once from the sequence length.
#[derive(Debug, Clone)]
pub struct Solver {
    sequence: Sequence,
    prefix: Prefix,
    advantage: Advantage,
    limit: Length,
}

impl Solver {
    /// Solves `sequence` with runs of at most `limit` elements.
    pub fn new(sequence: Sequence, limit: Length) -> anyhow::Result<Self> {
        if limit == 0 {
            anyhow::bail!("maximum run length must be at least 1");
        }
        if sequence.len() > MAX_SEQUENCE_LENGTH {
            anyhow::bail!(
                "sequence of {} elements exceeds the limit of {}",
                sequence.len(),
                MAX_SEQUENCE_LENGTH
            );
        }
        Ok(Self::build(sequence, limit))
    }

    /// Reads `n`, `m`, then `n` elements.
    pub fn scan(scanner: &mut Scanner) -> anyhow::Result<Self> {
        let n = scanner.next::<usize>("sequence length")?;
        let m = scanner.next::<Length>("maximum run length")?;
        if n > MAX_SEQUENCE_LENGTH {
            anyhow::bail!(
                "sequence length {} exceeds the limit of {}",
                n,
                MAX_SEQUENCE_LENGTH
            );
        }
        let values = scanner.many::<Value>(n, "sequence element")?;
        log::debug!("read {} elements, runs up to {}", n, m);
        Self::new(Sequence::from(values), m)
    }

    fn build(sequence: Sequence, limit: Length) -> Self {
        let prefix = Prefix::from(&sequence);
        let advantage = Advantage::solve(&prefix, limit);
        log::debug!(
            "solved {} elements with runs up to {}: advantage {:+}",
            sequence.len(),
            limit,
            advantage.root()
        );
        Self {
            sequence,
            prefix,
            advantage,
            limit,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from(&self.advantage)
    }
    pub fn advantage(&self) -> &Advantage {
        &self.advantage
    }
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }
    pub fn limit(&self) -> Length {
        self.limit
    }
    /// Principal variation of optimal play.
    pub fn line(&self) -> Line {
        Line::from(self)
    }

    /// Cross-checks the table against exhaustive search.
    pub fn verify(&self) -> anyhow::Result<()> {
        if self.sequence.len() > MINIMAX_MAX_LENGTH {
            anyhow::bail!(
                "exhaustive verification is limited to {} elements, got {}",
                MINIMAX_MAX_LENGTH,
                self.sequence.len()
            );
        }
        let brute = minimax(&RunGame::root(&self.sequence, self.limit));
        let table = self.advantage.root();
        if brute != table {
            anyhow::bail!("table says {:+} but exhaustive search says {:+}", table, brute);
        }
        log::info!("verified advantage {:+} by exhaustive search", table);
        Ok(())
    }
}

impl Arbitrary for Solver {
    fn random() -> Self {
        Self::build(
            Sequence::random(),
            rand::random_range(1..=ARBITRARY_MAX_RUN),
        )
    }
}
