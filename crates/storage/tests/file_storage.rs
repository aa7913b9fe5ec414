use lootbox_storage::{FileStorage, MemoryStorage, Storage, StorageError};
use pretty_assertions::assert_eq;

#[test]
fn missing_file_opens_empty() {
	let dir = tempfile::tempdir().unwrap();
	let storage = FileStorage::open(dir.path().join("nested/storage.json")).unwrap();
	assert_eq!(storage.get("lootbox_cart"), None);
}

#[test]
fn writes_survive_reopen() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nested/storage.json");

	let mut storage = FileStorage::open(&path).unwrap();
	storage.set("lootbox_cart", "[]").unwrap();
	storage.set("other", "value").unwrap();
	storage.remove("other").unwrap();
	drop(storage);

	let reopened = FileStorage::open(&path).unwrap();
	assert_eq!(reopened.get("lootbox_cart").as_deref(), Some("[]"));
	assert_eq!(reopened.get("other"), None);
	assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("storage.json");
	std::fs::write(&path, "not json").unwrap();

	let err = FileStorage::open(&path).unwrap_err();
	assert!(matches!(err, StorageError::Json { .. }), "{err}");
}

#[test]
fn blank_file_opens_empty() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("storage.json");
	std::fs::write(&path, "\n").unwrap();
	assert!(FileStorage::open(&path).unwrap().get("anything").is_none());
}

#[test]
fn memory_storage_behaves_like_a_map() {
	let mut storage = MemoryStorage::with_entry("a", "1");
	assert_eq!(storage.get("a").as_deref(), Some("1"));
	storage.set("a", "2").unwrap();
	storage.remove("missing").unwrap();
	assert_eq!(storage.get("a").as_deref(), Some("2"));
	assert_eq!(storage.len(), 1);
}
