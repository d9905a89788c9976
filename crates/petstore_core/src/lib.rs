//! SQLite data store for pets and their kinds.
//!
//! `PetStore` owns one connection to a single-file database holding the
//! `kind` and `pet` tables and exposes per-entity CRUD plus the joined
//! pet listing. `fixture` rebuilds a small seeded database for tests.

pub mod db;
pub mod fixture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use fixture::{setup_test_database, setup_test_database_at, FIXTURE_DB_FILE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::kind::{Kind, KindDraft, KindId, NewKind};
pub use model::pet::{normalize_age, AgeInput, NewPet, Pet, PetDraft, PetId, PetWithKind};
pub use model::ValidationError;
pub use repo::kind_repo::{KindRepository, SqliteKindRepository};
pub use repo::pet_repo::{PetRepository, SqlitePetRepository};
pub use repo::{RepoError, RepoResult};
pub use store::PetStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
