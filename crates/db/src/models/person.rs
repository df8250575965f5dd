//! Person row model and request DTOs.

use persons_core::error::CoreError;
use persons_core::patch::Patch;
use persons_core::person::validate_person_name;
use persons_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `persons` table.
///
/// Serializes as the API representation: nullable columns are omitted
/// rather than emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a person. Every field is optional at the wire level so
/// a missing `name` surfaces as a validation error, not a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePerson {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub work: Option<String>,
}

impl CreatePerson {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_person_name(self.name.as_deref())
    }
}

/// DTO for partially updating a person.
///
/// Keys left out of the payload keep their stored value. See [`Patch::apply`]
/// for how an explicit `null` is treated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePerson {
    pub name: Patch<String>,
    pub age: Patch<i32>,
    pub address: Patch<String>,
    pub work: Patch<String>,
}

impl UpdatePerson {
    /// A supplied name must still be non-blank; `null` or a missing key is fine.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.name.value() {
            Some(name) => validate_person_name(Some(name)),
            None => Ok(()),
        }
    }

    /// Overlay the supplied fields onto the stored row.
    pub fn merge_onto(&self, current: Person) -> Person {
        Person {
            id: current.id,
            name: self.name.resolve(current.name),
            age: self.age.apply(current.age),
            address: self.address.apply(current.address),
            work: self.work.apply(current.work),
        }
    }
}
