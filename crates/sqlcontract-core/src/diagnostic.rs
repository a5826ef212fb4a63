//! Error codes and source locations
//!
//! IMPORTANT: Error codes are versioned and stable.
//! NEVER rename or remove codes - they are part of the public API.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};

/// Error code registry (v1)
///
/// These codes are STABLE and VERSIONED.
/// Do NOT rename or remove codes - only add new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The raw SQL text failed to parse; fatal for the whole call
    SyntaxError,

    /// Statement kind is not one of SELECT, INSERT, UPDATE, DELETE
    UnsupportedStatement,

    /// A result column has no `AS` alias
    NoAliasUsed,

    /// A result column has no explicit `::` type cast
    ColumnWithoutCast,

    /// A type cast has an unexpected number of name parts
    InvalidTypeCast,

    /// An alias does not end in a `_<N>` number suffix
    NotNamedWithNumberSuffix,

    /// An alias has a number suffix below 1
    InvalidNumberSuffix,

    /// Two columns of one statement claim the same number suffix
    DuplicateNumberSuffix,
}

impl ErrorCode {
    /// Get the error code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyntaxError => "SYNTAX_ERROR",
            Self::UnsupportedStatement => "UNSUPPORTED_STATEMENT",
            Self::NoAliasUsed => "NO_ALIAS_USED",
            Self::ColumnWithoutCast => "COLUMN_WITHOUT_CAST",
            Self::InvalidTypeCast => "INVALID_TYPE_CAST",
            Self::NotNamedWithNumberSuffix => "NOT_NAMED_WITH_NUMBER_SUFFIX",
            Self::InvalidNumberSuffix => "INVALID_NUMBER_SUFFIX",
            Self::DuplicateNumberSuffix => "DUPLICATE_NUMBER_SUFFIX",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position in the SQL source buffer (1-indexed line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed)
    pub line: u64,

    /// Column number (1-indexed)
    pub column: u64,
}

impl Location {
    /// Create a new location
    pub fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
