use thiserror::Error;

/// Errors raised while loading the verb dictionary or picking a root.
#[derive(Error, Debug)]
pub enum WordError {
	/// The input document does not match the expected schema.
	#[error("malformed verb document: {0}")]
	MalformedInput(#[from] serde_json::Error),

	/// A root index outside the dictionary was selected.
	#[error("no root at index {index} (dictionary holds {len})")]
	EmptySelection {
		/// Requested index.
		index: usize,
		/// Number of roots available.
		len: usize,
	},
}

/// Result alias for dictionary operations.
pub type Result<T> = std::result::Result<T, WordError>;
