//! Person domain rules.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity label used in not-found errors.
pub const PERSON_ENTITY: &str = "Person";

/// Collection path of the person API, also used to build `Location` headers.
pub const PERSONS_PATH: &str = "/api/v1/persons";

/// Check that a person name is present and not blank after trimming.
pub fn validate_person_name(name: Option<&str>) -> Result<(), CoreError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(()),
        _ => Err(CoreError::field(
            "name validation error",
            "name",
            "name is required",
        )),
    }
}

/// `Location` header value for a newly created person.
pub fn person_location(id: DbId) -> String {
    format!("{PERSONS_PATH}/{id}")
}
