//! The extracted output contract of a fully-typed SQL statement

use serde::{Deserialize, Serialize};

/// Reference to a SQL type, optionally schema-qualified
///
/// `id::text` carries a bare name, `'1'::pg_catalog.int4` a schema-qualified
/// one. The name is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Schema the type lives in, if qualified
    pub schema: Option<String>,

    /// Type name
    pub name: String,
}

impl TypeRef {
    /// Create an unqualified type reference
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    /// Create a schema-qualified type reference
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// One named, typed, uniquely-numbered result column of an [`Action`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    /// Long-term stable identifier taken from the `_<N>` alias suffix, >= 1
    pub number: i64,

    /// Full column alias, number suffix included
    pub name: String,

    /// Declared type from the explicit cast
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl Output {
    /// Create a new output column
    pub fn new(number: i64, name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            number,
            name: name.into(),
            ty,
        }
    }
}

/// Statement kind of an [`Action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select => write!(f, "SELECT"),
            Self::Insert => write!(f, "INSERT"),
            Self::Update => write!(f, "UPDATE"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One statement's validated, typed output contract
///
/// Closed over exactly the four supported statement kinds so the set is
/// exhaustively checkable at compile time. Outputs are in source order and
/// their numbers are pairwise distinct; a statement without a RETURNING list
/// yields an empty outputs sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    /// An action that selects data
    Select { outputs: Vec<Output> },

    /// An action that inserts data
    Insert { outputs: Vec<Output> },

    /// An action that updates data
    Update { outputs: Vec<Output> },

    /// An action that deletes data
    Delete { outputs: Vec<Output> },
}

impl Action {
    /// Statement kind of this action
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Select { .. } => ActionKind::Select,
            Self::Insert { .. } => ActionKind::Insert,
            Self::Update { .. } => ActionKind::Update,
            Self::Delete { .. } => ActionKind::Delete,
        }
    }

    /// Output columns in source order
    pub fn outputs(&self) -> &[Output] {
        match self {
            Self::Select { outputs }
            | Self::Insert { outputs }
            | Self::Update { outputs }
            | Self::Delete { outputs } => outputs,
        }
    }
}
