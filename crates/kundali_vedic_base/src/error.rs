//! Error types for Vedic chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundali_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from calendar / sidereal-time computation.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// A non-finite value reached a computation.
    NonFinite(&'static str),
    /// Nakshatra number outside 1..=27.
    NakshatraOutOfRange(u8),
    /// No nakshatra with the given name.
    UnknownNakshatra(String),
    /// House number outside 1..=12.
    HouseOutOfRange(u8),
    /// A static reference table violates its own invariants.
    TableIntegrity(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NonFinite(what) => write!(f, "non-finite {what}"),
            Self::NakshatraOutOfRange(n) => write!(f, "nakshatra number {n} outside 1..=27"),
            Self::UnknownNakshatra(name) => write!(f, "unknown nakshatra name: {name:?}"),
            Self::HouseOutOfRange(n) => write!(f, "house number {n} outside 1..=12"),
            Self::TableIntegrity(msg) => write!(f, "reference table integrity: {msg}"),
        }
    }
}

impl Error for VedicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

/// Reject a non-finite input with a tagged error.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64, VedicError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VedicError::NonFinite(what))
    }
}
