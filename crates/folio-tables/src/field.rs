//! Field options offered to the presentation layer
//!
//! A [`FieldOption`] pairs a record field with the label a table shows for
//! it, and says whether the field may be searched or sorted. Views use the
//! field name as a lookup key and nothing more.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A selectable field of a table
///
/// # Example
///
/// ```rust
/// use folio_tables::FieldOption;
///
/// let name = FieldOption::new("name", "Country");
/// let code = FieldOption::new("iso2", "Code").sortable(false);
///
/// assert!(name.is_sortable());
/// assert!(!code.is_sortable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
	field: String,
	label: String,
	sortable: bool,
	searchable: bool,
}

impl FieldOption {
	/// Creates a sortable, searchable field option
	pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			label: label.into(),
			sortable: true,
			searchable: true,
		}
	}

	/// Sets whether this field is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this field is searchable
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	/// Returns the record field name
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Returns the display label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns whether this field can be sorted on
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns whether this field can be searched
	pub fn is_searchable(&self) -> bool {
		self.searchable
	}
}

/// Ordered set of field options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldOptions {
	options: Vec<FieldOption>,
}

impl FieldOptions {
	/// Creates an empty set
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an option, replacing any previous option for the same field
	pub fn push(&mut self, option: FieldOption) {
		match self.options.iter_mut().find(|o| o.field == option.field) {
			Some(existing) => *existing = option,
			None => self.options.push(option),
		}
	}

	/// Builder form of [`FieldOptions::push`]
	pub fn with(mut self, option: FieldOption) -> Self {
		self.push(option);
		self
	}

	/// Iterates the options in order
	pub fn iter(&self) -> std::slice::Iter<'_, FieldOption> {
		self.options.iter()
	}

	/// Returns the number of options
	pub fn len(&self) -> usize {
		self.options.len()
	}

	/// Returns `true` when there are no options
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	/// Looks up an option by field name
	pub fn get(&self, field: &str) -> Option<&FieldOption> {
		self.options.iter().find(|o| o.field == field)
	}

	/// Returns the option for `field` if it may be searched
	pub fn searchable(&self, field: &str) -> Result<&FieldOption> {
		let option = self
			.get(field)
			.ok_or_else(|| TableError::FieldNotFound(field.to_string()))?;
		if !option.searchable {
			return Err(TableError::FieldNotSearchable(field.to_string()));
		}
		Ok(option)
	}

	/// Returns the option for `field` if it may be sorted on
	pub fn sortable(&self, field: &str) -> Result<&FieldOption> {
		let option = self
			.get(field)
			.ok_or_else(|| TableError::FieldNotFound(field.to_string()))?;
		if !option.sortable {
			return Err(TableError::FieldNotSortable(field.to_string()));
		}
		Ok(option)
	}
}

impl FromIterator<FieldOption> for FieldOptions {
	fn from_iter<I: IntoIterator<Item = FieldOption>>(iter: I) -> Self {
		let mut options = Self::new();
		for option in iter {
			options.push(option);
		}
		options
	}
}

impl<'a> IntoIterator for &'a FieldOptions {
	type Item = &'a FieldOption;
	type IntoIter = std::slice::Iter<'a, FieldOption>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options() -> FieldOptions {
		FieldOptions::new()
			.with(FieldOption::new("name", "Country"))
			.with(FieldOption::new("capital", "Capital").searchable(false))
			.with(FieldOption::new("iso2", "Code").sortable(false))
	}

	#[test]
	fn test_field_option_defaults() {
		let option = FieldOption::new("name", "Country");
		assert_eq!(option.field(), "name");
		assert_eq!(option.label(), "Country");
		assert!(option.is_sortable());
		assert!(option.is_searchable());
	}

	#[test]
	fn test_options_keep_order() {
		let options = options();
		let labels: Vec<&str> = options.iter().map(FieldOption::label).collect();
		assert_eq!(labels, vec!["Country", "Capital", "Code"]);
	}

	#[test]
	fn test_push_replaces_same_field() {
		let mut options = options();
		options.push(FieldOption::new("name", "Name"));
		assert_eq!(options.len(), 3);
		assert_eq!(options.get("name").map(FieldOption::label), Some("Name"));
	}

	#[test]
	fn test_searchable_lookup() {
		let options = options();
		assert!(options.searchable("name").is_ok());
		assert!(matches!(
			options.searchable("capital"),
			Err(TableError::FieldNotSearchable(_))
		));
		assert!(matches!(
			options.searchable("currency"),
			Err(TableError::FieldNotFound(_))
		));
	}

	#[test]
	fn test_sortable_lookup() {
		let options = options();
		assert!(options.sortable("capital").is_ok());
		assert!(matches!(
			options.sortable("iso2"),
			Err(TableError::FieldNotSortable(_))
		));
	}
}
