//! The number-suffix naming convention
//!
//! Every result column alias must end in `_<N>`, where N is a long-term
//! fixed positive integer that stays stable as the query evolves. This
//! module only extracts the number; the full alias, suffix included, is
//! what ends up as the output's name.

use sqlcontract_core::ErrorCode;
use thiserror::Error;

/// Failure to extract a number suffix from an alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuffixError {
    /// No `_<N>` tail at all, or the tail is not an integer
    #[error("not named with a number suffix, add _<N> at the end")]
    NotNumbered,

    /// The tail parsed as an integer but is below 1
    #[error("invalid number suffix for name, must be > 0")]
    OutOfRange,
}

impl SuffixError {
    /// Stable code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotNumbered => ErrorCode::NotNamedWithNumberSuffix,
            Self::OutOfRange => ErrorCode::InvalidNumberSuffix,
        }
    }
}

/// Extract the number at the end of an alias, separated by an underscore
///
/// The parse is signed so `total_-3` fails as out-of-range rather than as
/// unnumbered.
pub fn number_suffix(name: &str) -> Result<i64, SuffixError> {
    let Some((_, tail)) = name.rsplit_once('_') else {
        return Err(SuffixError::NotNumbered);
    };

    if tail.is_empty() {
        return Err(SuffixError::NotNumbered);
    }

    let number: i64 = tail.parse().map_err(|_| SuffixError::NotNumbered)?;
    if number < 1 {
        return Err(SuffixError::OutOfRange);
    }

    Ok(number)
}
