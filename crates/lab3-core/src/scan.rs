//! Whitespace-delimited token reader for console exercises.
use anyhow::Context;

/// Pulls typed tokens out of a whitespace/line-delimited input.
///
/// Tokens may be spread across any number of lines. Anything left over
/// after the caller stops reading is ignored.
#[derive(Debug, Clone)]
pub struct Scanner {
    tokens: std::vec::IntoIter<String>,
    taken: usize,
}

impl Scanner {
    /// Reads the whole input up front.
    pub fn read<R>(mut reader: R) -> anyhow::Result<Self>
    where
        R: std::io::Read,
    {
        let ref mut buffer = String::new();
        reader
            .read_to_string(buffer)
            .context("reading input")?;
        Ok(Self::from(buffer.as_str()))
    }

    /// Parses the next token as `T`. `what` names the token in diagnostics.
    pub fn next<T>(&mut self, what: &str) -> anyhow::Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| anyhow::anyhow!("unexpected end of input, expected {}", what))?;
        self.taken += 1;
        token
            .parse::<T>()
            .with_context(|| format!("token {} ({:?}) is not a valid {}", self.taken, token, what))
    }

    /// Parses the next `n` tokens as `T`.
    pub fn many<T>(&mut self, n: usize, what: &str) -> anyhow::Result<Vec<T>>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        (0..n)
            .map(|i| {
                self.next(what)
                    .with_context(|| format!("reading {} {} of {}", what, i + 1, n))
            })
            .collect()
    }

    /// Count of tokens consumed so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl From<&str> for Scanner {
    fn from(input: &str) -> Self {
        Self {
            tokens: input
                .split_whitespace()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter(),
            taken: 0,
        }
    }
}
