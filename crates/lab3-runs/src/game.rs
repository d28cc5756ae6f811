use super::*;
use lab3_core::*;

/// Explicit game state for the run-taking game.
///
/// Unlike [`Advantage`], which only needs the position, this carries both
/// players' running totals so payoffs can be read off terminal states
/// directly. Used by the exhaustive [`minimax`] reference.
#[derive(Debug, Clone, Copy)]
pub struct RunGame<'a> {
    sequence: &'a Sequence,
    limit: Length,
    position: usize,
    ply: usize,
    p1: Score,
    p2: Score,
}

impl<'a> RunGame<'a> {
    /// Opening state: nothing taken, P1 to move.
    pub fn root(sequence: &'a Sequence, limit: Length) -> Self {
        Self {
            sequence,
            limit,
            position: 0,
            ply: 0,
            p1: 0,
            p2: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_terminal(&self) -> bool {
        self.position == self.sequence.len()
    }

    pub fn turn(&self) -> Turn {
        if self.is_terminal() {
            Turn::Terminal
        } else {
            Turn::from(self.ply)
        }
    }

    /// Legal runs from here, shortest first. Empty at the terminal.
    pub fn choices(&self) -> Vec<Run> {
        (1..=self.limit.min(self.sequence.len() - self.position))
            .map(Run::from)
            .collect()
    }

    /// Sum of the elements `run` would take.
    pub fn gain(&self, run: Run) -> Score {
        self.sequence.values()[self.position..self.position + run.len()]
            .iter()
            .map(|&v| v as Score)
            .sum()
    }

    pub fn apply(&self, run: Run) -> Self {
        debug_assert!(self.choices().contains(&run));
        let gain = self.gain(run);
        let (p1, p2) = match self.turn() {
            Turn::P1 => (self.p1 + gain, self.p2),
            Turn::P2 => (self.p1, self.p2 + gain),
            Turn::Terminal => unreachable!("no moves past the end"),
        };
        Self {
            position: self.position + run.len(),
            ply: self.ply + 1,
            p1,
            p2,
            ..*self
        }
    }

    /// P1-minus-P2 differential of everything taken so far.
    pub fn banked(&self) -> Score {
        self.p1 - self.p2
    }

    /// Final differential from `turn`'s point of view.
    pub fn payoff(&self, turn: Turn) -> Score {
        debug_assert!(self.is_terminal());
        turn.direction() * self.banked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_turn() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        let game = RunGame::root(&sequence, 2);
        assert!(game.turn() == Turn::P1);
        assert!(game.choices() == vec![Run::from(1), Run::from(2)]);
    }

    #[test]
    fn empty_is_terminal() {
        let sequence = Sequence::default();
        let game = RunGame::root(&sequence, 3);
        assert!(game.is_terminal());
        assert!(game.turn() == Turn::Terminal);
        assert!(game.choices().is_empty());
    }

    #[test]
    fn apply_alternates_and_scores() {
        let sequence = Sequence::from(vec![4, -1, 7]);
        let game = RunGame::root(&sequence, 2)
            .apply(Run::from(2))
            .apply(Run::from(1));
        assert!(game.is_terminal());
        assert!(game.payoff(Turn::P1) == 3 - 7);
        assert!(game.payoff(Turn::P2) == 7 - 3);
    }

    #[test]
    fn choices_clamped_at_end() {
        let sequence = Sequence::from(vec![1, 1, 1]);
        let game = RunGame::root(&sequence, 5).apply(Run::from(2));
        assert!(game.position() == 2);
        assert!(game.turn() == Turn::P2);
        assert!(game.choices() == vec![Run::from(1)]);
    }
}
