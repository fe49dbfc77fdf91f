//! Validated page size shared by the catalog query and the CLI.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Largest page size the catalog API accepts outside bulk operations.
pub const MAX_BATCH_SIZE: u32 = 250;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchSizeError {
    #[error("batch size must be a positive integer, got \"{0}\"")]
    NotPositive(String),

    #[error("batch size cannot be greater than {MAX_BATCH_SIZE}, got {0}")]
    TooLarge(u64),
}

/// Number of products (and variants per product) requested per page.
///
/// Always within `1..=MAX_BATCH_SIZE`; values above the cap are rejected
/// rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BatchSize(u32);

impl BatchSize {
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u64> for BatchSize {
    type Error = BatchSizeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(BatchSizeError::NotPositive(value.to_string()));
        }
        match u32::try_from(value) {
            Ok(v) if v <= MAX_BATCH_SIZE => Ok(Self(v)),
            _ => Err(BatchSizeError::TooLarge(value)),
        }
    }
}

impl FromStr for BatchSize {
    type Err = BatchSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(BatchSizeError::NotPositive(s.to_owned()));
        }
        let value = trimmed
            .parse::<u64>()
            .map_err(|_| BatchSizeError::NotPositive(s.to_owned()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
