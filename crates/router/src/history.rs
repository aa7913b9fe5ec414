use crate::router::HOME_FRAGMENT;

/// Session history of URL fragments.
///
/// Entries hold the fragment including its `#`, or `None` for a URL without
/// one. Pushing discards any forward entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
	entries: Vec<Option<String>>,
	index: usize,
}

impl Default for History {
	fn default() -> Self {
		Self::new(None)
	}
}

impl History {
	/// Starts a session at `initial`. An empty fragment counts as none.
	pub fn new(initial: Option<&str>) -> Self {
		Self {
			entries: vec![normalize(initial)],
			index: 0,
		}
	}

	/// `location.hash` of the current entry.
	pub fn hash(&self) -> Option<&str> {
		self.entries[self.index].as_deref()
	}

	/// Fragment the router should show: the current hash, or `#home`.
	pub fn target(&self) -> &str {
		self.hash().unwrap_or(HOME_FRAGMENT)
	}

	pub fn push(&mut self, fragment: &str) {
		self.entries.truncate(self.index + 1);
		self.entries.push(normalize(Some(fragment)));
		self.index += 1;
	}

	/// Moves one entry back. Returns `false` at the start of the session.
	pub fn back(&mut self) -> bool {
		if self.index == 0 {
			return false;
		}
		self.index -= 1;
		true
	}

	/// Moves one entry forward. Returns `false` at the newest entry.
	pub fn forward(&mut self) -> bool {
		if self.index + 1 >= self.entries.len() {
			return false;
		}
		self.index += 1;
		true
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn index(&self) -> usize {
		self.index
	}
}

fn normalize(fragment: Option<&str>) -> Option<String> {
	fragment.filter(|f| !f.is_empty()).map(str::to_owned)
}
