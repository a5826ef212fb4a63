//! Duplicate-number validation
//!
//! Number suffixes are long-term column identifiers, so within one action
//! every output must claim a distinct number.

use sqlcontract_core::Output;
use std::collections::hash_map::{Entry, HashMap};
use thiserror::Error;

/// Two outputs of one action claim the same number suffix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate number suffix, {number} is already used by: {first}")]
pub struct DuplicateError {
    /// The contested number
    pub number: i64,

    /// Name of the first output that claimed it
    pub first: String,
}

/// Check that all output numbers within one action are pairwise distinct
///
/// Stops at the first repeat found.
pub(crate) fn check_unique(outputs: &[Output]) -> Result<(), DuplicateError> {
    let mut by_number: HashMap<i64, &Output> = HashMap::new();
    for output in outputs {
        match by_number.entry(output.number) {
            Entry::Occupied(existing) => {
                return Err(DuplicateError {
                    number: output.number,
                    first: existing.get().name.clone(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(output);
            }
        }
    }

    Ok(())
}
