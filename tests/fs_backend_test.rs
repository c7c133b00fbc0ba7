use shelf::api::ShelfApi;
use shelf::error::ShelfError;
use shelf::model::{BookId, NewBook};
use shelf::store::backend::StorageBackend;
use shelf::store::fs_backend::FsBackend;
use shelf::store::{BookSlot, BookStore, DEFAULT_SLOT_KEY};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read_slot("books").unwrap(), None);

    backend.write_slot("books", "[]").unwrap();
    assert_eq!(backend.read_slot("books").unwrap(), Some("[]".to_string()));

    backend.remove_slot("books").unwrap();
    assert_eq!(backend.read_slot("books").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write_slot("books", "[1]").unwrap();
    backend.write_slot("books", "[2]").unwrap();

    let expected_path = dir.path().join("books.json");
    assert_eq!(backend.slot_path("books"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[2]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());

    backend.write_slot("books", "[]").unwrap();
    assert!(nested.join("books.json").exists());
}

#[test]
fn test_persisted_layout_uses_is_complete() {
    let (dir, backend) = setup();
    let mut store = BookStore::open(BookSlot::new(backend)).unwrap();
    store
        .add(NewBook::new("Dune", "Frank Herbert", 1965, true))
        .unwrap();

    let raw = fs::read_to_string(dir.path().join(format!("{}.json", DEFAULT_SLOT_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value[0];
    assert_eq!(entry["title"], "Dune");
    assert_eq!(entry["author"], "Frank Herbert");
    assert_eq!(entry["year"], 1965);
    assert_eq!(entry["isComplete"], true);
    assert!(entry["id"].is_i64());
}

#[test]
fn test_reads_hand_written_slot() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("books.json"),
        r#"[{"id":1700000000000,"title":"Emma","author":"Jane Austen","year":1815,"isComplete":false}]"#,
    )
    .unwrap();

    let store = BookStore::open(BookSlot::new(backend)).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.find(BookId(1700000000000)).unwrap().title, "Emma");
}

#[test]
fn test_corrupt_slot_is_reported() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("books.json"),
        r#"[{"id":1,"title":"A","author":"B","year":2000,"isComplete":false},
            {"id":1,"title":"C","author":"D","year":2001,"isComplete":true}]"#,
    )
    .unwrap();

    let err = BookStore::open(BookSlot::new(backend)).unwrap_err();
    assert!(matches!(err, ShelfError::CorruptStore { .. }));
}

#[test]
fn test_malformed_slot_is_a_serialization_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("books.json"), "{not json").unwrap();

    let err = BookStore::open(BookSlot::new(backend)).unwrap_err();
    assert!(matches!(err, ShelfError::Serialization(_)));
}

#[test]
fn test_dune_scenario_across_reopen() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut api = ShelfApi::open_dir(dir.path(), DEFAULT_SLOT_KEY).unwrap();
        let id = api
            .add_book(NewBook::new("Dune", "Herbert", 1965, false))
            .unwrap()
            .affected_books[0]
            .id;
        api.toggle_books(&[id]).unwrap();
        id
    };

    let api = ShelfApi::open_dir(dir.path(), DEFAULT_SLOT_KEY).unwrap();
    assert_eq!(api.books().len(), 1);
    let book = api.find(id).unwrap();
    assert_eq!(book.title, "Dune");
    assert!(book.is_complete);
    assert_eq!(api.view().finished.len(), 1);
}

#[test]
fn test_custom_storage_key() {
    let dir = TempDir::new().unwrap();
    let mut api = ShelfApi::open_dir(dir.path(), "library").unwrap();
    api.add_book(NewBook::new("Emma", "Austen", 1815, false))
        .unwrap();

    assert!(dir.path().join("library.json").exists());
    assert!(!dir.path().join("books.json").exists());
}
