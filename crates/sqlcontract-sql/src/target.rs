//! Result-target validation
//!
//! Validates one output-bearing node of a statement (one selected or
//! returned column): the alias must be present and carry a number suffix,
//! and the value must have an explicit type cast with one or two name parts.

use crate::parser::span_location;
use crate::suffix::{number_suffix, SuffixError};
use sqlcontract_core::{ErrorCode, Location, Output, TypeRef};
use sqlparser::ast::{DataType, Expr, ObjectNamePart, SelectItem, Spanned};
use thiserror::Error;

/// What went wrong with one result target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetErrorKind {
    /// The column is not explicitly named
    #[error("no alias for column in result set, use \"AS\" to define the alias")]
    NoAliasUsed,

    /// The alias violates the number-suffix convention
    #[error("alias '{alias}': {source}")]
    BadNumberSuffix { alias: String, source: SuffixError },

    /// The column value is not type casted
    #[error("alias '{alias}': no type cast for column in result set, use \"::\" to declare the type")]
    ColumnWithoutCast { alias: String },

    /// The cast's type name has an unexpected number of parts
    #[error("alias '{alias}': invalid type cast for column, must be \"::<name>\" or \"::<schema>.<name>\", number of parts: {parts}")]
    InvalidTypeCast { alias: String, parts: usize },
}

impl TargetErrorKind {
    /// Stable code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoAliasUsed => ErrorCode::NoAliasUsed,
            Self::BadNumberSuffix { source, .. } => source.code(),
            Self::ColumnWithoutCast { .. } => ErrorCode::ColumnWithoutCast,
            Self::InvalidTypeCast { .. } => ErrorCode::InvalidTypeCast,
        }
    }
}

/// A validation failure on one result target, tagged with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetError {
    /// Position of the target in the source buffer, if known
    pub location: Option<Location>,

    /// The underlying failure
    pub kind: TargetErrorKind,
}

impl std::fmt::Display for TargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(f, "result target at {}: {}", location, self.kind),
            None => write!(f, "result target: {}", self.kind),
        }
    }
}

impl std::error::Error for TargetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Validate one output-bearing node and produce its typed output column
pub(crate) fn parse_result_target(item: &SelectItem) -> Result<Output, TargetError> {
    let (expr, alias) = match item {
        SelectItem::ExprWithAlias { expr, alias } => (expr, alias),
        SelectItem::UnnamedExpr(expr) => {
            return Err(TargetError {
                location: span_location(expr.span()),
                kind: TargetErrorKind::NoAliasUsed,
            })
        }
        SelectItem::Wildcard(_) | SelectItem::QualifiedWildcard(_, _) => {
            return Err(TargetError {
                location: None,
                kind: TargetErrorKind::NoAliasUsed,
            })
        }
    };

    let location = span_location(alias.span);
    let name = alias.value.clone();
    if name.is_empty() {
        return Err(TargetError {
            location,
            kind: TargetErrorKind::NoAliasUsed,
        });
    }

    let number = number_suffix(&name).map_err(|source| TargetError {
        location,
        kind: TargetErrorKind::BadNumberSuffix {
            alias: name.clone(),
            source,
        },
    })?;

    let ty = cast_type_ref(expr, &name, location)?;

    Ok(Output { number, name, ty })
}

/// Extract the declared type from the target's cast expression
fn cast_type_ref(
    expr: &Expr,
    alias: &str,
    location: Option<Location>,
) -> Result<TypeRef, TargetError> {
    // Grouping parentheses are transparent: `(x::t)` declares a type just
    // as `x::t` does.
    let mut expr = expr;
    while let Expr::Nested(inner) = expr {
        expr = inner;
    }

    // Both `x::t` and `CAST(x AS t)` arrive as a cast node.
    let Expr::Cast { data_type, .. } = expr else {
        return Err(TargetError {
            location,
            kind: TargetErrorKind::ColumnWithoutCast {
                alias: alias.to_string(),
            },
        });
    };

    match data_type {
        DataType::Custom(name, _) => match name.0.as_slice() {
            // not fully qualified, e.g:  SELECT '123'::int4
            [name] => Ok(TypeRef::new(plain_segment(name))),
            // fully qualified, e.g:      SELECT '123'::pg_catalog.int4
            [schema, name] => Ok(TypeRef::qualified(plain_segment(schema), plain_segment(name))),
            parts => Err(TargetError {
                location,
                kind: TargetErrorKind::InvalidTypeCast {
                    alias: alias.to_string(),
                    parts: parts.len(),
                },
            }),
        },
        // Builtin types come back as a dedicated variant with a single-part
        // name, e.g. `id::text`.
        builtin => Ok(TypeRef::new(builtin.to_string().to_ascii_lowercase())),
    }
}

/// A legal cast only ever carries plain identifier name parts; anything else
/// is a broken grammar contract, not user input.
fn plain_segment(part: &ObjectNamePart) -> String {
    match part {
        ObjectNamePart::Identifier(ident) => {
            assert!(
                !ident.value.is_empty(),
                "type cast name part is not a plain identifier: {ident:?}"
            );

            ident.value.clone()
        }
        other => panic!("type cast name part is not a plain identifier: {other:?}"),
    }
}
