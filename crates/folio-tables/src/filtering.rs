//! Filtering functionality for tables

use crate::record::Fields;

/// Case-insensitive substring search against a single field
///
/// The query is trimmed before matching; an empty query matches every row.
///
/// # Example
///
/// ```rust
/// use folio_tables::{Record, SearchQuery, Value};
///
/// let mut chad = Record::new();
/// chad.insert("name".to_string(), Value::from("Chad"));
///
/// assert!(SearchQuery::new("name", "  ha ").matches(&chad));
/// assert!(SearchQuery::new("name", "").matches(&chad));
/// assert!(!SearchQuery::new("name", "mali").matches(&chad));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
	field: String,
	needle: String,
}

impl SearchQuery {
	/// Creates a search over `field` for `query`
	pub fn new(field: impl Into<String>, query: &str) -> Self {
		Self {
			field: field.into(),
			needle: query.trim().to_lowercase(),
		}
	}

	/// Returns the searched field
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Returns the normalized query text
	pub fn query(&self) -> &str {
		&self.needle
	}

	/// Returns `true` when the query matches every row
	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	/// Tests a row against this search
	pub fn matches<R: Fields + ?Sized>(&self, row: &R) -> bool {
		if self.needle.is_empty() {
			return true;
		}
		row.field(&self.field)
			.as_text()
			.to_lowercase()
			.contains(&self.needle)
	}
}
