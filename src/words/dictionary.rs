//! Loading the verb document into sorted roots.

use log::{debug, info};
use serde::Deserialize;

use super::collate;
use super::error::{Result, WordError};
use super::model::RootWord;
use super::session::GraphSession;

/// One derived verb as it appears in the input document.
#[derive(Clone, Debug, Deserialize)]
pub struct RawChild {
	/// German infinitive.
	pub verb: String,
	/// English translation.
	pub trans: String,
	/// Separability flag.
	pub separ: bool,
}

/// One root entry as it appears in the input document.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRoot {
	/// German infinitive of the root.
	pub root: String,
	/// English translation.
	pub trans: String,
	/// Derived verbs, in display order.
	#[serde(rename = "childWords")]
	pub child_words: Vec<RawChild>,
}

/// Every root verb, sorted by German collation. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
	roots: Vec<RootWord>,
}

impl Dictionary {
	/// Parses a JSON array of root entries.
	pub fn parse(raw: &str) -> Result<Self> {
		let records: Vec<RawRoot> = serde_json::from_str(raw)?;
		let dict = Self::from_records(records);
		info!("Loaded {} verb roots", dict.len());
		Ok(dict)
	}

	/// Builds the dictionary from already-decoded records.
	pub fn from_records(records: Vec<RawRoot>) -> Self {
		let mut roots: Vec<RootWord> = records
			.into_iter()
			.map(|raw| {
				let mut root = RootWord::new(raw.root, raw.trans);
				for child in raw.child_words {
					root.add_child(child.verb, child.trans, child.separ);
				}
				debug!("root {} with {} children", root.german(), root.children().len());
				root
			})
			.collect();
		// stable: equal names keep document order
		roots.sort_by(|a, b| collate::compare(a.german(), b.german()));
		Self { roots }
	}

	/// Roots in sorted order.
	pub fn roots(&self) -> &[RootWord] {
		&self.roots
	}

	/// Number of roots.
	pub fn len(&self) -> usize {
		self.roots.len()
	}

	/// True when the document held no roots.
	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	/// Root at `index` in sorted order.
	pub fn get(&self, index: usize) -> Option<&RootWord> {
		self.roots.get(index)
	}

	/// Index of the first root spelled `german`.
	pub fn position(&self, german: &str) -> Option<usize> {
		self.roots.iter().position(|r| r.german() == german)
	}

	/// Starts a fresh graph session for the root at `index`.
	pub fn select_root(&self, index: usize) -> Result<GraphSession> {
		let root = self.get(index).ok_or(WordError::EmptySelection {
			index,
			len: self.len(),
		})?;
		Ok(GraphSession::new(index, root))
	}
}
