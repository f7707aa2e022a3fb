//! Error types for table views.

use thiserror::Error;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while building or driving a table view.
///
/// Navigation and filtering never fail: out-of-range pages are clamped and
/// empty result sets are valid. Only configuration and caller-supplied field
/// names are checked.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
	/// The view was configured with unusable parameters (e.g. a zero page size).
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// The field is not one of the recognized options.
	#[error("field not found: {0}")]
	FieldNotFound(String),

	/// The field exists but cannot be sorted on.
	#[error("field is not sortable: {0}")]
	FieldNotSortable(String),

	/// The field exists but cannot be searched.
	#[error("field is not searchable: {0}")]
	FieldNotSearchable(String),

	/// The dataset could not be decoded.
	#[cfg(feature = "json")]
	#[error("invalid dataset: {0}")]
	Dataset(#[from] serde_json::Error),
}
