use super::*;
use anyhow::Context;
use lab3_core::*;

/// The series `Σ_{k>=1} k^a / b^k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Series {
    a: u32,
    b: u64,
}

/// Value of a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sum {
    /// `b = 1`: every term is at least 1.
    Divergent,
    Fraction(Fraction),
}

impl Series {
    pub fn new(a: u32, b: u64) -> anyhow::Result<Self> {
        if b == 0 {
            anyhow::bail!("base must be positive");
        }
        if a > MAX_POWER {
            anyhow::bail!("exponent {} exceeds the limit of {}", a, MAX_POWER);
        }
        Ok(Self { a, b })
    }

    /// Reads `a` then `b`.
    pub fn scan(scanner: &mut Scanner) -> anyhow::Result<Self> {
        let a = scanner.next::<u32>("exponent")?;
        let b = scanner.next::<u64>("base")?;
        Self::new(a, b)
    }

    pub fn sum(&self) -> anyhow::Result<Sum> {
        if self.b == 1 {
            log::debug!("base 1 diverges");
            return Ok(Sum::Divergent);
        }
        let b = self.b as u128;
        let numerator = eulerian(self.a)
            .into_iter()
            .enumerate()
            .map(|(j, coefficient)| (coefficient, self.a - j as u32))
            .try_fold(0u128, |acc, (coefficient, power)| {
                b.checked_pow(power)
                    .and_then(|p| p.checked_mul(coefficient))
                    .and_then(|term| acc.checked_add(term))
            })
            .context("numerator overflows 128 bits")?;
        let denominator = (b - 1)
            .checked_pow(self.a + 1)
            .context("denominator overflows 128 bits")?;
        log::debug!(
            "k^{} / {}^k = {} / {} before reduction",
            self.a,
            self.b,
            numerator,
            denominator
        );
        Ok(Sum::Fraction(Fraction::reduced(numerator, denominator)))
    }
}

impl std::fmt::Display for Sum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Divergent => write!(f, "infinity"),
            Self::Fraction(fraction) => write!(f, "{}", fraction),
        }
    }
}
