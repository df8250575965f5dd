//! Tri-state request fields for partial updates.
//!
//! A JSON object key can be missing, present with `null`, or present with a
//! value. `Option<T>` folds the first two together; [`Patch`] keeps them
//! apart so the merge rule is decided in one place.

use serde::{Deserialize, Deserializer};

/// One field of a partial-update payload.
///
/// Use with `#[serde(default)]` on the containing struct so a missing key
/// deserializes to [`Patch::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not in the payload.
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    /// The supplied value, if any. `Absent` and `Null` both yield `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Absent | Patch::Null => None,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// Merge onto a nullable stored value.
    ///
    /// Only `Value` overwrites. `Null` keeps the stored value, exactly like
    /// `Absent`: an explicit `null` does not clear a column.
    pub fn apply(&self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v.clone()),
            Patch::Absent | Patch::Null => current,
        }
    }

    /// Merge onto a non-nullable stored value.
    pub fn resolve(&self, current: T) -> T {
        match self {
            Patch::Value(v) => v.clone(),
            Patch::Absent | Patch::Null => current,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key exists; a missing key goes through `Default`.
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Patch::Null, Patch::Value))
    }
}
