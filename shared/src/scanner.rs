use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug)]
pub enum ScanError {
    /// A token was read but is not a decimal integer of the requested width.
    InputFormat {
        token: String,
        source: ParseIntError,
    },
    /// The reader ran out before another token showed up.
    Exhausted,
    Io(io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InputFormat { token, source } => {
                write!(f, "input format error: '{token}' is not a valid integer ({source})")
            }
            Self::Exhausted => write!(f, "no more input: expected an integer"),
            Self::Io(e) => write!(f, "failed to read input: {e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputFormat { source, .. } => Some(source),
            Self::Exhausted => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Splits a buffered reader into whitespace-delimited tokens.
///
/// Lines are pulled lazily, so an interactive caller can prompt between
/// reads. Tokens that share a line with an earlier one are kept for the
/// following calls.
pub struct TokenScanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<String, ScanError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ScanError::Exhausted);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next token as a base-10 integer.
    ///
    /// The token is consumed even when it fails to parse.
    pub fn next_int<T>(&mut self) -> Result<T, ScanError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let token = self.next_token()?;
        token
            .parse::<T>()
            .map_err(|source| ScanError::InputFormat { token, source })
    }
}
