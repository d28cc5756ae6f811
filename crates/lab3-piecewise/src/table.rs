use super::*;
use lab3_core::*;

/// One `x | y` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    x: Tenths,
    y: Cell,
}

impl Row {
    pub fn x(&self) -> Tenths {
        self.x
    }
    pub fn y(&self) -> Cell {
        self.y
    }
}

impl From<Tenths> for Row {
    fn from(x: Tenths) -> Self {
        Self { x, y: Cell::from(x) }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t| {}", decimal(self.x), self.y)
    }
}

/// The whole table: header, rule, and one row per abscissa.
#[derive(Debug, Clone)]
pub struct Table(Vec<Row>);

impl Default for Table {
    fn default() -> Self {
        Self(Abscissa::default().map(Row::from).collect())
    }
}

impl Table {
    pub fn rows(&self) -> &[Row] {
        &self.0
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "x\t| y")?;
        writeln!(f, "{}", "-".repeat(16))?;
        for row in self.0.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
