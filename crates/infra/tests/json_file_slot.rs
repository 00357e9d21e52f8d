use std::fs;

use guestbook_core::{CommentStore, EditCursor, StoreError, StoreOptions};
use guestbook_infra::storage::JsonFileStorage;
use tempfile::TempDir;

fn open_store(tmp: &TempDir) -> CommentStore<JsonFileStorage> {
    let storage = JsonFileStorage::open(tmp.path(), "comments").unwrap();
    CommentStore::initialize(storage, StoreOptions::default())
}

#[test]
fn comments_survive_restart() {
    let tmp = TempDir::new().unwrap();
    let mut store = open_store(&tmp);
    let a = store.add("Ada", "first post").unwrap();
    let b = store.add("Bob", "second post").unwrap();
    store.begin_edit(a.id).unwrap();
    store.update("Ada", "first post, edited").unwrap();
    let expected = store.snapshot();
    drop(store);

    let reopened = open_store(&tmp);
    assert_eq!(reopened.list(), expected.as_slice());
    assert_eq!(reopened.list()[0].id, b.id);
    assert_eq!(reopened.list()[1].body, "first post, edited");
}

#[test]
fn slot_file_uses_record_field_names() {
    let tmp = TempDir::new().unwrap();
    let mut store = open_store(&tmp);
    store.add("Ada", "hello").unwrap();
    let text = fs::read_to_string(store.storage().path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let record = value.as_array().unwrap()[0].as_object().unwrap();
    let mut keys: Vec<_> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["author", "body", "createdOrUpdatedAt", "id"]);
    assert!(record["id"].is_i64());
}

#[test]
fn corrupt_slot_starts_empty_and_is_overwritten() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("comments.json"), "[{\"id\": ").unwrap();
    let mut store = open_store(&tmp);
    assert!(store.is_empty());
    store.add("Ada", "fresh start").unwrap();

    let reopened = open_store(&tmp);
    assert_eq!(reopened.len(), 1);
}

#[test]
fn deleting_edited_comment_returns_to_create_mode() {
    let tmp = TempDir::new().unwrap();
    let mut store = open_store(&tmp);
    let a = store.add("Ada", "doomed").unwrap();
    store.begin_edit(a.id).unwrap();
    store.delete(a.id).unwrap();
    assert_eq!(store.cursor(), EditCursor::Idle);
    assert_eq!(store.update("Ada", "too late"), Ok(None));
    assert!(matches!(store.begin_edit(a.id), Err(StoreError::NotFound(_))));

    store.add("Bob", "after").unwrap();
    let reopened = open_store(&tmp);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].author, "Bob");
}
