//! Record types for the pet/kind schema.
//!
//! # Responsibility
//! - Define read models returned by the store.
//! - Define caller write payloads (`*Draft`) and their validated forms (`New*`).
//!
//! # Invariants
//! - Drafts are validated before any SQL runs; a missing required field
//!   never reaches storage as a placeholder value.
//! - Pet age is normalized to a non-negative integer on every write path.

pub mod kind;
pub mod pet;
mod validation;

pub use validation::ValidationError;
