use petstore_core::db::open_db_in_memory;
use petstore_core::{
    KindDraft, KindRepository, PetDraft, PetStore, RepoError, SqliteKindRepository,
    ValidationError,
};

#[test]
fn create_and_get_roundtrip() {
    let store = PetStore::in_memory().unwrap();

    let id = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();

    let kind = store.get_kind(id).unwrap().unwrap();
    assert_eq!(kind.id, id);
    assert_eq!(kind.name, "dog");
    assert_eq!(kind.food.as_deref(), Some("dogfood"));
    assert_eq!(kind.sound.as_deref(), Some("bark"));
}

#[test]
fn get_kinds_on_empty_store_is_empty() {
    let store = PetStore::in_memory().unwrap();
    assert!(store.get_kinds().unwrap().is_empty());
}

#[test]
fn get_kinds_returns_insertion_order() {
    let store = PetStore::in_memory().unwrap();
    store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();
    store
        .create_kind(&KindDraft::new("cat", "catfood", "meow"))
        .unwrap();
    store
        .create_kind(&KindDraft::new("cow", "hay", "moo"))
        .unwrap();

    let names: Vec<_> = store
        .get_kinds()
        .unwrap()
        .into_iter()
        .map(|kind| kind.name)
        .collect();
    assert_eq!(names, ["dog", "cat", "cow"]);
}

#[test]
fn get_missing_kind_returns_none() {
    let store = PetStore::in_memory().unwrap();
    assert!(store.get_kind(42).unwrap().is_none());
}

#[test]
fn create_without_name_fails_before_insert() {
    let store = PetStore::in_memory().unwrap();
    let draft = KindDraft {
        name: None,
        food: Some("seed".to_string()),
        sound: Some("tweet".to_string()),
    };

    let err = store.create_kind(&draft).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingField("name"))
    ));
    assert!(store.get_kinds().unwrap().is_empty());
}

#[test]
fn create_without_food_and_sound_stores_nulls() {
    let store = PetStore::in_memory().unwrap();
    let draft = KindDraft {
        name: Some("fish".to_string()),
        ..KindDraft::default()
    };

    let id = store.create_kind(&draft).unwrap();
    let kind = store.get_kind(id).unwrap().unwrap();
    assert_eq!(kind.food, None);
    assert_eq!(kind.sound, None);
}

#[test]
fn update_overwrites_every_field() {
    let store = PetStore::in_memory().unwrap();
    let id = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();

    let draft = KindDraft {
        name: Some("wolf".to_string()),
        food: Some("meat".to_string()),
        sound: None,
    };
    store.update_kind(id, &draft).unwrap();

    let kind = store.get_kind(id).unwrap().unwrap();
    assert_eq!(kind.name, "wolf");
    assert_eq!(kind.food.as_deref(), Some("meat"));
    assert_eq!(kind.sound, None);
}

#[test]
fn update_missing_kind_is_silent() {
    let store = PetStore::in_memory().unwrap();
    store
        .update_kind(7, &KindDraft::new("ghost", "none", "boo"))
        .unwrap();
    assert!(store.get_kinds().unwrap().is_empty());
}

#[test]
fn delete_unreferenced_kind_removes_it() {
    let store = PetStore::in_memory().unwrap();
    let dog = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();
    let cat = store
        .create_kind(&KindDraft::new("cat", "catfood", "meow"))
        .unwrap();

    store.delete_kind(cat).unwrap();

    let kinds = store.get_kinds().unwrap();
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0].id, dog);
    assert!(store.get_kind(cat).unwrap().is_none());
}

#[test]
fn delete_missing_kind_is_silent() {
    let store = PetStore::in_memory().unwrap();
    store.delete_kind(99).unwrap();
}

#[test]
fn delete_referenced_kind_fails_with_constraint_error() {
    let store = PetStore::in_memory().unwrap();
    let dog = store
        .create_kind(&KindDraft::new("dog", "dogfood", "bark"))
        .unwrap();
    store
        .create_pet(&PetDraft::new("dorothy", dog, "greg").with_age(9i64))
        .unwrap();

    let err = store.delete_kind(dog).unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert!(!err.is_busy());
    assert!(store.get_kind(dog).unwrap().is_some());
}

#[test]
fn repository_works_on_plain_connection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKindRepository::new(&conn);

    let draft = KindDraft::new("cat", "catfood", "meow");
    let id = repo.create_kind(&draft.validate().unwrap()).unwrap();

    let kinds = repo.list_kinds().unwrap();
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0].id, id);
    assert_eq!(kinds[0].name, "cat");
}
