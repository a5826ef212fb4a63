//! Fully-typed SQL parsing and validation
//!
//! This crate handles:
//! - Parsing Postgres-dialect SQL using sqlparser-rs
//! - Enforcing the fully-typed authoring convention (explicit casts,
//!   `AS <name>_<N>` aliases, per-statement unique number suffixes)
//! - Extracting each statement's typed output contract
//! - Aggregating validation failures across statements and columns

pub mod error;
pub mod extract;
pub mod parser;
pub mod suffix;
pub mod target;
pub mod validate;

pub use error::{ParseError, ParseErrors, StatementError};
pub use extract::{parse, Parsed};
pub use parser::SqlParser;
pub use suffix::{number_suffix, SuffixError};
pub use target::{TargetError, TargetErrorKind};
pub use validate::DuplicateError;
