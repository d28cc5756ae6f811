use lab3_core::*;

/// Walks the table's x values from `X_START` to `X_END` inclusive.
#[derive(Debug, Clone, Copy)]
pub struct Abscissa {
    next: Tenths,
}

impl Default for Abscissa {
    fn default() -> Self {
        Self { next: X_START }
    }
}

impl Iterator for Abscissa {
    type Item = Tenths;
    fn next(&mut self) -> Option<Self::Item> {
        (self.next <= X_END).then(|| {
            let x = self.next;
            self.next += X_STEP;
            x
        })
    }
}
