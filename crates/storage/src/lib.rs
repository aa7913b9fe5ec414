//! Durable key-value storage.
//!
//! Mirrors the browser's `localStorage` contract: string keys, string values,
//! synchronous reads and writes. [`MemoryStorage`] backs tests and ephemeral
//! sessions; [`FileStorage`] keeps every key in one JSON object on disk and
//! rewrites the file on each mutation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

mod file;

pub use file::FileStorage;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("failed to access storage file '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("storage file '{}' is not a JSON object of strings: {source}", path.display())]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl StorageError {
	pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
		Self::Io {
			path: path.to_path_buf(),
			source,
		}
	}
}

/// Synchronous string key-value store.
pub trait Storage {
	/// Returns the value stored under `key`, or `None` when absent.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores `value` under `key`. Returns only after the value is durable.
	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

	/// Removes `key`. Removing an absent key is not an error.
	fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).set(key, value)
	}

	fn remove(&mut self, key: &str) -> Result<(), StorageError> {
		(**self).remove(key)
	}
}

/// In-process storage that lives as long as the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
	entries: BTreeMap<String, String>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates storage pre-populated with one entry.
	pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
		let mut entries = BTreeMap::new();
		entries.insert(key.into(), value.into());
		Self { entries }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Storage for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		self.entries.insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<(), StorageError> {
		self.entries.remove(key);
		Ok(())
	}
}
