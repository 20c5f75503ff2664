use std::fmt;
use std::io::{self, BufRead, Write};

use shared::{ScanError, TokenScanner};

pub const FIRST_PROMPT: &str = "Enter the first number: ";
pub const SECOND_PROMPT: &str = "Enter the second number: ";

/// Both operands of one run together with their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summation {
    pub first: i32,
    pub second: i32,
    pub sum: i32,
}

impl fmt::Display for Summation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "The sum of {} and {} is: {}",
            self.first, self.second, self.sum
        )
    }
}

/// Adds with 32-bit two's-complement wraparound, so `i32::MAX + 1` is `i32::MIN`.
pub fn add(first: i32, second: i32) -> Summation {
    let (sum, overflowed) = first.overflowing_add(second);
    if overflowed {
        log::warn!("{first} + {second} overflows i32, wrapped around to {sum}");
    }
    Summation { first, second, sum }
}

#[derive(Debug)]
pub enum RunError {
    Scan(ScanError),
    Write(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Write(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Write(e) => Some(e),
        }
    }
}

impl From<ScanError> for RunError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

fn prompt_int<R: BufRead, W: Write>(
    scanner: &mut TokenScanner<R>,
    out: &mut W,
    prompt: &str,
) -> Result<i32, RunError> {
    write!(out, "{prompt}").map_err(RunError::Write)?;
    out.flush().map_err(RunError::Write)?;

    let value = scanner.next_int::<i32>()?;
    log::debug!("operand: {value}");
    Ok(value)
}

/// Prompts for two integers, then writes the result line.
pub fn run<R: BufRead, W: Write>(
    scanner: &mut TokenScanner<R>,
    out: &mut W,
) -> Result<Summation, RunError> {
    let first = prompt_int(scanner, out, FIRST_PROMPT)?;
    let second = prompt_int(scanner, out, SECOND_PROMPT)?;

    let summation = add(first, second);
    log::debug!("{:?}", summation);

    writeln!(out, "{summation}").map_err(RunError::Write)?;
    out.flush().map_err(RunError::Write)?;

    Ok(summation)
}
