//! Statement classification and action extraction
//!
//! Dispatches each top-level statement to its output-bearing list (the
//! target list for SELECT, the RETURNING list for the others), validates
//! every result target, and builds the statement's action. Statements are
//! evaluated independently: a failed statement contributes its failures to
//! the aggregate and nothing to the action list.

use crate::error::{ParseError, ParseErrors, StatementError};
use crate::parser::{span_location, SqlParser};
use crate::target::parse_result_target;
use crate::validate::check_unique;
use sqlcontract_core::{Action, ActionKind, Output};
use sqlparser::ast::{SelectItem, SetExpr, Spanned, Statement};

/// Everything extracted from one SQL buffer
///
/// Actions of fully-valid statements in source order, plus the aggregate of
/// every failure encountered. Both can be non-empty at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// One action per fully-valid statement, in source order
    pub actions: Vec<Action>,

    /// Every failure across the buffer, absent when all statements validated
    pub errors: Option<ParseErrors>,
}

/// Parse a SQL buffer into fully-typed actions
///
/// The convention needs no schema or catalog access: every result column
/// must be explicitly aliased with `AS`, the alias must end in a `_<N>`
/// number suffix (N >= 1, unique per statement), and the column value must
/// carry an explicit type cast. Statements that violate the convention are
/// reported and skipped; a grammar-level syntax failure is fatal for the
/// whole buffer and yields no actions at all.
pub fn parse(sql: &str) -> Parsed {
    let statements = match SqlParser::new().parse(sql) {
        Ok(statements) => statements,
        Err(error) => {
            return Parsed {
                actions: Vec::new(),
                errors: Some(ParseErrors::from(ParseError::Syntax(error))),
            }
        }
    };

    tracing::debug!(statements = statements.len(), "parsed sql buffer");

    let mut actions = Vec::new();
    let mut causes = Vec::new();
    for statement in &statements {
        match extract_statement(statement) {
            Ok(action) => {
                tracing::trace!(
                    kind = %action.kind(),
                    outputs = action.outputs().len(),
                    "extracted action"
                );
                actions.push(action);
            }
            Err(cause) => causes.push(cause),
        }
    }

    Parsed {
        actions,
        errors: ParseErrors::from_causes(causes),
    }
}

/// Classify one statement and extract its action
pub(crate) fn extract_statement(statement: &Statement) -> Result<Action, ParseError> {
    let location = span_location(statement.span());

    let (kind, items) = match statement {
        Statement::Query(query) => match query.body.as_ref() {
            SetExpr::Select(select) => (ActionKind::Select, select.projection.as_slice()),
            // VALUES, set operations and the like carry no aliased target
            // list to validate.
            _ => return Err(ParseError::Unsupported { location }),
        },
        Statement::Insert(insert) => (ActionKind::Insert, returning_items(&insert.returning)),
        Statement::Update { returning, .. } => (ActionKind::Update, returning_items(returning)),
        Statement::Delete(delete) => (ActionKind::Delete, returning_items(&delete.returning)),
        _ => return Err(ParseError::Unsupported { location }),
    };

    let mut outputs = Vec::with_capacity(items.len());
    let mut targets = Vec::new();
    for item in items {
        match parse_result_target(item) {
            Ok(output) => outputs.push(output),
            Err(error) => targets.push(error),
        }
    }

    // Uniqueness is checked over whatever targets did validate, so a
    // collision reports alongside sibling column failures.
    let duplicate = check_unique(&outputs).err();

    if targets.is_empty() && duplicate.is_none() {
        Ok(build_action(kind, outputs))
    } else {
        Err(ParseError::Statement(StatementError {
            location,
            targets,
            duplicate,
        }))
    }
}

/// A statement without a RETURNING clause has zero output items, which is
/// valid and yields an action with no outputs.
fn returning_items(returning: &Option<Vec<SelectItem>>) -> &[SelectItem] {
    returning.as_deref().unwrap_or_default()
}

fn build_action(kind: ActionKind, outputs: Vec<Output>) -> Action {
    match kind {
        ActionKind::Select => Action::Select { outputs },
        ActionKind::Insert => Action::Insert { outputs },
        ActionKind::Update => Action::Update { outputs },
        ActionKind::Delete => Action::Delete { outputs },
    }
}
