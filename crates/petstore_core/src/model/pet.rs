//! Pet records and age normalization.
//!
//! # Responsibility
//! - Define the `pet` row shape and the joined pet+kind projection.
//! - Normalize loosely typed age input before persistence.
//!
//! # Invariants
//! - Persisted age is never negative.
//! - Age coercion is intentional: unparseable input becomes `0` instead of
//!   an error, which also hides caller mistakes such as `"nine"`.

use super::kind::KindId;
use super::validation::{require, ValidationError};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Auto-assigned `pet.id`.
pub type PetId = i64;

/// One row of the `pet` table, as returned by single-pet reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub age: i64,
    pub owner: Option<String>,
    pub kind_id: KindId,
}

/// Pet row joined with its kind, as returned by pet listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetWithKind {
    pub id: PetId,
    pub name: String,
    pub age: i64,
    pub owner: Option<String>,
    pub kind_id: KindId,
    /// `kind.name`, renamed so it does not shadow the pet name.
    pub kind_name: String,
    pub food: Option<String>,
    pub sound: Option<String>,
}

/// Loosely typed age value as it arrives from a caller payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, arrays, objects: always normalized to `0`.
    Other(IgnoredAny),
}

impl From<i64> for AgeInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AgeInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AgeInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AgeInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Coerces caller age input into the stored integer.
///
/// - integers are kept
/// - finite floats are truncated toward zero
/// - text is trimmed and parsed as a base-10 integer
/// - everything else, including absence and parse failures, becomes `0`
///
/// Negative results are clamped to `0`.
pub fn normalize_age(input: Option<&AgeInput>) -> i64 {
    let age = match input {
        Some(AgeInput::Integer(value)) => *value,
        Some(AgeInput::Float(value)) if value.is_finite() => value.trunc() as i64,
        Some(AgeInput::Text(value)) => value.trim().parse::<i64>().unwrap_or(0),
        Some(AgeInput::Float(_)) | Some(AgeInput::Other(_)) | None => 0,
    };
    age.max(0)
}

/// Caller payload for creating or overwriting a pet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetDraft {
    pub name: Option<String>,
    pub age: Option<AgeInput>,
    pub kind_id: Option<KindId>,
    pub owner: Option<String>,
}

/// Validated pet fields ready to bind into `INSERT`/`UPDATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub age: i64,
    pub kind_id: KindId,
    pub owner: String,
}

impl PetDraft {
    /// Builds a draft with every required field set and no age.
    pub fn new(name: impl Into<String>, kind_id: KindId, owner: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age: None,
            kind_id: Some(kind_id),
            owner: Some(owner.into()),
        }
    }

    pub fn with_age(mut self, age: impl Into<AgeInput>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Normalizes age and checks required fields.
    ///
    /// # Errors
    /// - `MissingField` for the first absent field among `name`, `kind_id`,
    ///   `owner`. A missing age is not an error.
    pub fn validate(&self) -> Result<NewPet, ValidationError> {
        Ok(NewPet {
            name: require(&self.name, "name")?,
            age: normalize_age(self.age.as_ref()),
            kind_id: require(&self.kind_id, "kind_id")?,
            owner: require(&self.owner, "owner")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_age, AgeInput, PetDraft, ValidationError};

    #[test]
    fn normalize_age_coerces_loose_input() {
        assert_eq!(normalize_age(Some(&AgeInput::from(9i64))), 9);
        assert_eq!(normalize_age(Some(&AgeInput::from(" 15 "))), 15);
        assert_eq!(normalize_age(Some(&AgeInput::from(7.9))), 7);
        assert_eq!(normalize_age(Some(&AgeInput::from("abc"))), 0);
        assert_eq!(normalize_age(Some(&AgeInput::from("7.5"))), 0);
        assert_eq!(normalize_age(Some(&AgeInput::from(f64::NAN))), 0);
        assert_eq!(normalize_age(None), 0);
    }

    #[test]
    fn normalize_age_clamps_negative_values() {
        assert_eq!(normalize_age(Some(&AgeInput::from(-3i64))), 0);
        assert_eq!(normalize_age(Some(&AgeInput::from("-3"))), 0);
    }

    #[test]
    fn draft_deserializes_mixed_age_types() {
        let numeric: PetDraft =
            serde_json::from_str(r#"{"name":"rex","age":4,"kind_id":1,"owner":"ann"}"#).unwrap();
        assert_eq!(numeric.validate().unwrap().age, 4);

        let text: PetDraft =
            serde_json::from_str(r#"{"name":"rex","age":"12","kind_id":1,"owner":"ann"}"#)
                .unwrap();
        assert_eq!(text.validate().unwrap().age, 12);

        let boolean: PetDraft =
            serde_json::from_str(r#"{"name":"rex","age":true,"kind_id":1,"owner":"ann"}"#)
                .unwrap();
        assert_eq!(boolean.validate().unwrap().age, 0);

        let missing: PetDraft =
            serde_json::from_str(r#"{"name":"rex","kind_id":1,"owner":"ann"}"#).unwrap();
        assert_eq!(missing.validate().unwrap().age, 0);
    }

    #[test]
    fn validate_reports_first_missing_required_field() {
        let draft = PetDraft {
            name: Some("rex".to_string()),
            owner: Some("ann".to_string()),
            ..PetDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::MissingField("kind_id")
        );

        let no_owner = PetDraft {
            owner: None,
            ..PetDraft::new("rex", 1, "ann")
        };
        assert_eq!(
            no_owner.validate().unwrap_err(),
            ValidationError::MissingField("owner")
        );
    }
}
