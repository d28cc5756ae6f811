use super::*;
use lab3_core::*;

/// One turn of the principal variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    turn: Turn,
    run: Run,
    taken: Score,
    differential: Score,
}

impl Step {
    pub fn turn(&self) -> Turn {
        self.turn
    }
    pub fn run(&self) -> Run {
        self.run
    }
    /// Sum of the elements taken this turn.
    pub fn taken(&self) -> Score {
        self.taken
    }
    /// Running P1-minus-P2 differential after this turn.
    pub fn differential(&self) -> Score {
        self.differential
    }
}

/// Optimal play from the opening state, read back out of the DP table.
///
/// At each state the shortest run attaining the table value is chosen, so
/// the line is deterministic when several runs tie.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line(Vec<Step>);

impl Line {
    pub fn steps(&self) -> &[Step] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Final P1-minus-P2 differential; zero when nobody moved.
    pub fn differential(&self) -> Score {
        self.0.last().map(Step::differential).unwrap_or_default()
    }
}

impl From<&Solver> for Line {
    fn from(solver: &Solver) -> Self {
        let prefix = solver.prefix();
        let advantage = solver.advantage();
        let n = prefix.n();
        let mut steps = Vec::new();
        let mut position = 0;
        let mut differential = 0;
        while position < n {
            let turn = Turn::from(steps.len());
            let Some(k) = (1..=solver.limit().min(n - position)).find(|&k| {
                prefix.sum(position, k) - advantage.at(position + k) == advantage.at(position)
            }) else {
                unreachable!("table entry {} has no witnessing run", position)
            };
            let taken = prefix.sum(position, k);
            differential += turn.direction() * taken;
            steps.push(Step {
                turn,
                run: Run::from(k),
                taken,
                differential,
            });
            position += k;
        }
        Self(steps)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌──────┬──────┬──────┬──────────┬──────────┐")?;
        writeln!(f, "│  Ply │ Turn │  Run │    Taken │  P1 - P2 │")?;
        writeln!(f, "├──────┼──────┼──────┼──────────┼──────────┤")?;
        for (ply, step) in self.0.iter().enumerate() {
            writeln!(
                f,
                "│ {:>4} │ {:>4} │ {:>4} │ {:>+8} │ {:>+8} │",
                ply + 1,
                step.turn.to_string(),
                step.run.to_string(),
                step.taken,
                step.differential,
            )?;
        }
        writeln!(f, "└──────┴──────┴──────┴──────────┴──────────┘")?;
        Ok(())
    }
}
