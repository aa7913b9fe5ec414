use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Storage, StorageError};

/// Storage persisted as a single JSON object file.
///
/// Writes go to a sibling temporary file that is renamed over the target, so
/// a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStorage {
	path: PathBuf,
	entries: BTreeMap<String, String>,
}

impl FileStorage {
	/// Opens the storage file, starting empty if it does not exist yet.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
		let path = path.into();
		let entries = match fs::read_to_string(&path) {
			Ok(text) if text.trim().is_empty() => BTreeMap::new(),
			Ok(text) => serde_json::from_str(&text).map_err(|source| StorageError::Json {
				path: path.clone(),
				source,
			})?,
			Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
			Err(err) => return Err(StorageError::io(&path, err)),
		};
		debug!(path = %path.display(), keys = entries.len(), "storage.open");
		Ok(Self { path, entries })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self) -> Result<(), StorageError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
		}

		let json = serde_json::to_string_pretty(&self.entries).map_err(|source| StorageError::Json {
			path: self.path.clone(),
			source,
		})?;

		let mut tmp = self.path.clone().into_os_string();
		tmp.push(".tmp");
		let tmp = PathBuf::from(tmp);
		fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
		fs::rename(&tmp, &self.path).map_err(|e| StorageError::io(&self.path, e))?;
		debug!(path = %self.path.display(), keys = self.entries.len(), "storage.flush");
		Ok(())
	}
}

impl Storage for FileStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		self.entries.insert(key.to_owned(), value.to_owned());
		self.flush()
	}

	fn remove(&mut self, key: &str) -> Result<(), StorageError> {
		if self.entries.remove(key).is_some() {
			self.flush()?;
		}
		Ok(())
	}
}
