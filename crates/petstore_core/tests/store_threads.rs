use petstore_core::{KindDraft, PetDraft, PetStore};
use std::thread;

#[test]
fn one_store_serves_writers_on_many_threads() {
    let dir = tempfile::tempdir().unwrap();
    let store = PetStore::initialize(dir.path().join("threads.db")).unwrap();
    let dog = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                for index in 0..5i64 {
                    let draft =
                        PetDraft::new(format!("pup-{worker}-{index}"), dog, "kennel").with_age(index);
                    store.create_pet(&draft).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let pets = store.get_pets().unwrap();
    assert_eq!(pets.len(), 20);
    assert!(pets.iter().all(|pet| pet.kind_name == "dog"));
}

#[test]
fn reinitializing_yields_independent_store_on_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");

    let first = PetStore::initialize(&path).unwrap();
    let second = PetStore::initialize(&path).unwrap();

    let id = first
        .create_kind(&KindDraft::new("cat", "catfood", "meow"))
        .unwrap();
    let seen = second.get_kind(id).unwrap().unwrap();
    assert_eq!(seen.name, "cat");
}

#[test]
fn writes_report_busy_while_another_connection_holds_the_lock() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locked.db");
    let store = PetStore::initialize(&path).unwrap();

    let other = rusqlite::Connection::open(&path).unwrap();
    other.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let err = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap_err();
    assert!(err.is_busy(), "unexpected error: {err}");
    assert!(!err.is_constraint_violation());

    other.execute_batch("ROLLBACK;").unwrap();
    let id = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();
    assert_eq!(store.get_kind(id).unwrap().unwrap().name, "dog");
}
