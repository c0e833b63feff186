//! Root and child verb records.

/// Distinguishes a root verb from one of its derived verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
	/// A root verb; owns children.
	Root,
	/// A derived verb; always a leaf.
	Child,
}

/// A German verb with its English translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
	/// German infinitive.
	pub german: String,
	/// English translation.
	pub english: String,
	/// Whether the prefix detaches in conjugation.
	pub separable: bool,
	/// Root or child.
	pub kind: WordKind,
}

impl Word {
	/// A root word. Roots are never separable.
	pub fn root(german: impl Into<String>, english: impl Into<String>) -> Self {
		Self {
			german: german.into(),
			english: english.into(),
			separable: false,
			kind: WordKind::Root,
		}
	}

	/// A derived child word.
	pub fn child(german: impl Into<String>, english: impl Into<String>, separable: bool) -> Self {
		Self {
			german: german.into(),
			english: english.into(),
			separable,
			kind: WordKind::Child,
		}
	}

	/// True for root words.
	pub fn is_root(&self) -> bool {
		self.kind == WordKind::Root
	}
}

/// A root verb and the verbs derived from it, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootWord {
	word: Word,
	children: Vec<Word>,
}

impl RootWord {
	/// A root with no children yet.
	pub fn new(german: impl Into<String>, english: impl Into<String>) -> Self {
		Self {
			word: Word::root(german, english),
			children: Vec::new(),
		}
	}

	/// Appends a derived verb. Only the dictionary builds roots, so children are
	/// fixed once it hands them out.
	pub(crate) fn add_child(
		&mut self,
		german: impl Into<String>,
		english: impl Into<String>,
		separable: bool,
	) {
		self.children.push(Word::child(german, english, separable));
	}

	/// Builder form of [`add_child`](Self::add_child), handy for fixtures.
	pub fn with_child(
		mut self,
		german: impl Into<String>,
		english: impl Into<String>,
		separable: bool,
	) -> Self {
		self.add_child(german, english, separable);
		self
	}

	/// The root's own word record.
	pub fn word(&self) -> &Word {
		&self.word
	}

	/// German infinitive of the root.
	pub fn german(&self) -> &str {
		&self.word.german
	}

	/// English translation of the root.
	pub fn english(&self) -> &str {
		&self.word.english
	}

	/// Children in the order they were added.
	pub fn children(&self) -> &[Word] {
		&self.children
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn children_keep_insertion_order_and_kind() {
		let root = RootWord::new("fahren", "drive")
			.with_child("verfahren", "proceed", false)
			.with_child("abfahren", "depart", true);

		let names: Vec<_> = root.children().iter().map(|c| c.german.as_str()).collect();
		assert_eq!(names, ["verfahren", "abfahren"]);
		assert!(root.children().iter().all(|c| c.kind == WordKind::Child));
		assert!(root.word().is_root());
		assert!(!root.word().separable);
	}
}
