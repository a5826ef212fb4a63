//! SqlContract Core
//!
//! Stable domain model for extracted SQL output contracts.
//! Never rename error codes - they are part of the public API.

pub mod action;
pub mod diagnostic;

pub use action::{Action, ActionKind, Output, TypeRef};
pub use diagnostic::{ErrorCode, Location};
