use std::collections::BTreeMap;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation. `errors` maps each offending field to a reason.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, String>,
    },
}

impl CoreError {
    /// Build a validation error that names a single field.
    pub fn field(
        message: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CoreError::Validation {
            message: message.into(),
            errors: BTreeMap::from([(field.into(), reason.into())]),
        }
    }
}
