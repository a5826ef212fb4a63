//! SQL parsing using sqlparser-rs
//!
//! Thin wrapper around the external grammar parser. The fully-typed
//! convention is defined over the Postgres dialect, so that is the only
//! dialect offered.

use sqlcontract_core::Location;
use sqlparser::ast::Statement;
use sqlparser::dialect::{Dialect, PostgreSqlDialect};
use sqlparser::parser::{Parser, ParserError};
use sqlparser::tokenizer::Span;

/// Postgres-dialect SQL parser
pub struct SqlParser {
    dialect: Box<dyn Dialect>,
}

impl SqlParser {
    /// Create a new Postgres-dialect parser
    pub fn new() -> Self {
        Self {
            dialect: Box::new(PostgreSqlDialect {}),
        }
    }

    /// Parse a SQL buffer into its top-level statements
    ///
    /// A grammar-level failure here is fatal for the whole buffer; it is
    /// never folded into the recoverable validation taxonomy.
    pub fn parse(&self, sql: &str) -> Result<Vec<Statement>, ParserError> {
        Parser::parse_sql(&*self.dialect, sql)
    }
}

impl Default for SqlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a node span into a source location
///
/// The grammar parser reports an empty span (line 0) for nodes it has no
/// position information for; those map to no location rather than a bogus one.
pub(crate) fn span_location(span: Span) -> Option<Location> {
    if span.start.line == 0 {
        None
    } else {
        Some(Location::new(span.start.line, span.start.column))
    }
}
