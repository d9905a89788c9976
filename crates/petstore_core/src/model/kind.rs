//! Kind records.
//!
//! A kind is a pet category (dog, cat) carrying optional food and sound
//! attributes. Pets reference kinds through `pet.kind_id`.

use super::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

/// Auto-assigned `kind.id`.
pub type KindId = i64;

/// One row of the `kind` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    pub id: KindId,
    pub name: String,
    pub food: Option<String>,
    pub sound: Option<String>,
}

/// Caller payload for creating or overwriting a kind.
///
/// Every field may be absent; `validate` decides which absences are fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindDraft {
    pub name: Option<String>,
    pub food: Option<String>,
    pub sound: Option<String>,
}

/// Validated kind fields ready to bind into `INSERT`/`UPDATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKind {
    pub name: String,
    pub food: Option<String>,
    pub sound: Option<String>,
}

impl KindDraft {
    /// Builds a fully populated draft.
    pub fn new(
        name: impl Into<String>,
        food: impl Into<String>,
        sound: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            food: Some(food.into()),
            sound: Some(sound.into()),
        }
    }

    /// Checks required fields.
    ///
    /// # Errors
    /// - `MissingField("name")` when `name` is absent. `food` and `sound`
    ///   are nullable columns; an absent value is written as `NULL` rather
    ///   than rejected.
    pub fn validate(&self) -> Result<NewKind, ValidationError> {
        Ok(NewKind {
            name: require(&self.name, "name")?,
            food: self.food.clone(),
            sound: self.sound.clone(),
        })
    }
}
