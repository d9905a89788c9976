//! Deterministic fixture database for tests and the CLI probe.
//!
//! # Responsibility
//! - Drop and recreate the `kind`/`pet` tables.
//! - Seed a fixed set of two kinds and four pets.
//!
//! # Invariants
//! - Reset and seed run in one transaction; a half-seeded fixture is
//!   never visible.
//! - Ids restart at 1 on every run (dropping an `AUTOINCREMENT` table
//!   also drops its `sqlite_sequence` entry).

use crate::db::schema::ensure_schema;
use crate::model::kind::KindDraft;
use crate::model::pet::PetDraft;
use crate::repo::kind_repo::{KindRepository, SqliteKindRepository};
use crate::repo::pet_repo::{PetRepository, SqlitePetRepository};
use crate::repo::RepoResult;
use crate::store::PetStore;
use log::info;
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// File name of the fixture database, relative to the working directory.
pub const FIXTURE_DB_FILE: &str = "test_pets.db";

const FIXTURE_KINDS: &[(&str, &str, &str)] =
    &[("dog", "dogfood", "bark"), ("cat", "catfood", "meow")];

// (name, kind_id, age, owner)
const FIXTURE_PETS: &[(&str, i64, i64, &str)] = &[
    ("dorothy", 1, 9, "greg"),
    ("suzy", 1, 9, "greg"),
    ("casey", 2, 9, "greg"),
    ("heidi", 2, 15, "david"),
];

/// Builds the fixture database at [`FIXTURE_DB_FILE`] and returns its store.
pub fn setup_test_database() -> RepoResult<PetStore> {
    setup_test_database_at(FIXTURE_DB_FILE)
}

/// Builds the fixture database at `path`, discarding any existing rows.
pub fn setup_test_database_at(path: impl AsRef<Path>) -> RepoResult<PetStore> {
    let started_at = Instant::now();
    let store = PetStore::initialize(path.as_ref())?;
    {
        let mut conn = store.lock();
        reset_and_seed(&mut conn)?;
    }
    info!(
        "event=fixture_setup module=fixture status=ok kinds={} pets={} duration_ms={}",
        FIXTURE_KINDS.len(),
        FIXTURE_PETS.len(),
        started_at.elapsed().as_millis()
    );
    Ok(store)
}

fn reset_and_seed(conn: &mut Connection) -> RepoResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch("DROP TABLE IF EXISTS pet; DROP TABLE IF EXISTS kind;")?;
    ensure_schema(&tx)?;

    let kinds = SqliteKindRepository::new(&tx);
    for (name, food, sound) in FIXTURE_KINDS {
        kinds.create_kind(&KindDraft::new(*name, *food, *sound).validate()?)?;
    }

    let pets = SqlitePetRepository::new(&tx);
    for (name, kind_id, age, owner) in FIXTURE_PETS {
        let pet = PetDraft::new(*name, *kind_id, *owner)
            .with_age(*age)
            .validate()?;
        pets.create_pet(&pet)?;
    }

    tx.commit()?;
    Ok(())
}
