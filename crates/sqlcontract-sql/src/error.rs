//! Validation failure aggregation
//!
//! Per-column and per-statement failures are accumulated rather than
//! short-circuiting: one bad statement never hides its siblings, and one bad
//! column never hides the rest of its statement. The caller receives every
//! failure in one structured aggregate it can search by stable code.

use crate::target::TargetError;
use crate::validate::DuplicateError;
use sqlcontract_core::{ErrorCode, Location};
use sqlparser::parser::ParserError;

/// All column-level and uniqueness failures of one statement
#[derive(Debug, Clone, PartialEq)]
pub struct StatementError {
    /// Position of the statement in the source buffer, if known
    pub location: Option<Location>,

    /// Failures of individual result targets, in source order
    pub targets: Vec<TargetError>,

    /// Number-suffix collision among the targets that did validate
    pub duplicate: Option<DuplicateError>,
}

impl StatementError {
    /// Whether any underlying failure carries the given code
    pub fn contains(&self, code: ErrorCode) -> bool {
        if self.targets.iter().any(|target| target.kind.code() == code) {
            return true;
        }

        self.duplicate.is_some() && code == ErrorCode::DuplicateNumberSuffix
    }
}

impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "statement at {location}: ")?,
            None => write!(f, "statement: ")?,
        }

        let mut first = true;
        for target in &self.targets {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{target}")?;
            first = false;
        }

        if let Some(duplicate) = &self.duplicate {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{duplicate}")?;
        }

        Ok(())
    }
}

impl std::error::Error for StatementError {}

/// One independent cause in the aggregate
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The raw SQL text failed to parse; fatal for the whole buffer
    Syntax(ParserError),

    /// A statement kind outside SELECT, INSERT, UPDATE, DELETE
    Unsupported { location: Option<Location> },

    /// A supported statement whose columns or numbering failed validation
    Statement(StatementError),
}

impl ParseError {
    /// Whether this cause (or any failure inside it) carries the given code
    pub fn contains(&self, code: ErrorCode) -> bool {
        match self {
            Self::Syntax(_) => code == ErrorCode::SyntaxError,
            Self::Unsupported { .. } => code == ErrorCode::UnsupportedStatement,
            Self::Statement(statement) => statement.contains(code),
        }
    }
}

impl From<ParserError> for ParseError {
    fn from(error: ParserError) -> Self {
        Self::Syntax(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(error) => write!(f, "failed to parse: {error}"),
            Self::Unsupported {
                location: Some(location),
            } => {
                write!(
                    f,
                    "statement at {location}: only support SELECT, INSERT, UPDATE or DELETE statements"
                )
            }
            Self::Unsupported { location: None } => {
                write!(
                    f,
                    "statement: only support SELECT, INSERT, UPDATE or DELETE statements"
                )
            }
            Self::Statement(statement) => write!(f, "{statement}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::Unsupported { .. } => None,
            Self::Statement(statement) => Some(statement),
        }
    }
}

/// Aggregate of every independent failure across one parsed buffer
///
/// Renders combined (one cause per line) and supports predicate search for
/// a specific failure code, so per-column and per-statement failures can
/// coexist without masking each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseErrors {
    causes: Vec<ParseError>,
}

impl ParseErrors {
    /// Wrap collected causes; absent when there is nothing to report
    pub(crate) fn from_causes(causes: Vec<ParseError>) -> Option<Self> {
        if causes.is_empty() {
            None
        } else {
            Some(Self { causes })
        }
    }

    /// The independent causes, in source order
    pub fn causes(&self) -> &[ParseError] {
        &self.causes
    }

    /// Whether any cause (at any depth) carries the given code
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.causes.iter().any(|cause| cause.contains(code))
    }
}

impl From<ParseError> for ParseErrors {
    fn from(cause: ParseError) -> Self {
        Self {
            causes: vec![cause],
        }
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{cause}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
