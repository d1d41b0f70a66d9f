//! Module for the types defining the benchmark domain.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, invalid_limit_error};


/// Distance between consecutive sweep steps, in roles.
pub(crate) const STEP_SIZE: u32 = 10;

/// The upper bound of a benchmark sweep. Immutable for the run.
///
/// Construction rejects a zero limit, and [`FromStr`] rejects anything that
/// is not a positive integer, so a sweep can only be started with a usable
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepParams {
    limit: u32,
}

impl SweepParams {
    pub fn new(limit: u32) -> Result<Self, String> {
        if limit == 0 {
            return Err("the sweep limit must be positive".to_string());
        }
        Ok(Self { limit })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Ascending role counts `0, 10, 20, …` strictly below the limit.
    pub fn steps(&self) -> impl Iterator<Item = u32> {
        (0..self.limit).step_by(STEP_SIZE as usize)
    }
}

impl FromStr for SweepParams {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let limit: u32 = s
            .trim()
            .parse()
            .map_err(|_| invalid_limit_error(s, "not a positive integer"))?;
        Self::new(limit).map_err(|reason| invalid_limit_error(s, reason))
    }
}

/// Number of replicated role sections in a generated fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCount(u32);

impl RoleCount {
    pub fn new(count: u32) -> Self {
        Self(count)
    }
}

impl From<RoleCount> for u32 {
    fn from(value: RoleCount) -> Self {
        value.0
    }
}

/// One timed measurement: the 1-based step label paired with the wall-clock
/// seconds of a single invocation of the measured program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub label: u32,
    pub seconds: f64,
}

impl Sample {
    pub(crate) fn new(label: u32, elapsed: Duration) -> Self {
        Self {
            label,
            seconds: elapsed.as_secs_f64(),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.seconds)
    }
}
