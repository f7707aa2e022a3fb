//! Table view settings and the layered builder that produces them

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::sources::{ConfigSource, SourceError};

/// Error type for settings resolution
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// A source failed to load
	#[error("failed to load {source_name}: {error}")]
	Source {
		/// Description of the failing source
		source_name: String,
		/// Underlying error
		#[source]
		error: SourceError,
	},

	/// The merged configuration does not fit [`TableSettings`]
	#[error("invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	/// A value is out of range
	#[error("invalid settings: {0}")]
	Invalid(String),
}

/// Defaults for a paginated table view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Rows per page
	pub page_size: usize,
	/// Page shown first
	pub start_from: usize,
	/// Pages shown on each side of the current page in the page index
	pub on_each_side: usize,
	/// Pages shown at each end of the page index
	pub on_ends: usize,
	/// Field searched by default
	#[serde(deserialize_with = "string_from_scalar")]
	pub search_field: String,
	/// Initial sort as a query parameter, e.g. `"name"` or `"-name"`
	#[serde(deserialize_with = "optional_string_from_scalar")]
	pub sort: Option<String>,
}

// Environment values are coerced to numbers and booleans before the
// merge, so text settings take any scalar back as its string form.
fn string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::String(text) => Ok(text),
		Value::Number(number) => Ok(number.to_string()),
		Value::Bool(flag) => Ok(flag.to_string()),
		other => Err(D::Error::custom(format!("expected a string, found {other}"))),
	}
}

fn optional_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null => Ok(None),
		Value::String(text) => Ok(Some(text)),
		Value::Number(number) => Ok(Some(number.to_string())),
		Value::Bool(flag) => Ok(Some(flag.to_string())),
		other => Err(D::Error::custom(format!("expected a string, found {other}"))),
	}
}

impl TableSettings {
	/// Returns the initial sort parameter, ignoring blank values
	pub fn sort_param(&self) -> Option<&str> {
		self.sort
			.as_deref()
			.map(str::trim)
			.filter(|sort| !sort.is_empty() && *sort != "-")
	}

	/// Checks value ranges
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.page_size == 0 {
			return Err(SettingsError::Invalid(
				"page_size must be greater than zero".to_string(),
			));
		}
		if self.on_each_side == 0 {
			return Err(SettingsError::Invalid(
				"on_each_side must be greater than zero".to_string(),
			));
		}
		if self.on_ends == 0 {
			return Err(SettingsError::Invalid(
				"on_ends must be greater than zero".to_string(),
			));
		}
		if self.search_field.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"search_field must not be empty".to_string(),
			));
		}
		Ok(())
	}
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_size: 10,
			start_from: 1,
			on_each_side: 1,
			on_ends: 1,
			search_field: "name".to_string(),
			sort: None,
		}
	}
}

/// Merges configuration sources into [`TableSettings`]
///
/// # Examples
///
/// ```
/// use folio_conf::{SettingsBuilder, sources::DefaultSource};
/// use serde_json::Value;
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("page_size", Value::Number(25.into())))
///     .build()
///     .unwrap();
/// assert_eq!(settings.page_size, 25);
/// assert_eq!(settings.search_field, "name");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder without sources
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a source; order of addition does not matter, priority does
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Loads every source and merges the results
	pub fn merged(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let mut sources: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		sources.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in sources {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			merged.extend(values);
		}
		Ok(merged)
	}

	/// Builds and validates the settings
	pub fn build(&self) -> Result<TableSettings, SettingsError> {
		let merged = self.merged()?;
		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: TableSettings = serde_json::from_value(Value::Object(object))?;
		settings.validate()?;
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sources::{DefaultSource, EnvSource, SourceError, TomlFileSource};
	use rstest::rstest;
	use std::io::Write;
	use tempfile::NamedTempFile;

	/// Environment variables given explicitly instead of read from the process
	struct FixedEnv(Vec<(String, String)>);

	impl ConfigSource for FixedEnv {
		fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
			Ok(EnvSource::default().load_from(self.0.clone()))
		}

		fn priority(&self) -> u8 {
			EnvSource::default().priority()
		}

		fn description(&self) -> String {
			"fixed environment".to_string()
		}
	}

	fn env(pairs: &[(&str, &str)]) -> FixedEnv {
		FixedEnv(
			pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
		)
	}

	#[test]
	fn test_defaults() {
		let settings = SettingsBuilder::new().build().unwrap();
		assert_eq!(settings, TableSettings::default());
		assert_eq!(settings.page_size, 10);
		assert_eq!(settings.start_from, 1);
	}

	#[test]
	fn test_higher_priority_wins() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "page_size = 20\nsort = \"-name\"").unwrap();

		// Added before the defaults, still overrides them
		let settings = SettingsBuilder::new()
			.add_source(TomlFileSource::new(file.path()))
			.add_source(
				DefaultSource::new()
					.with_value("page_size", Value::Number(5.into()))
					.with_value("start_from", Value::Number(2.into())),
			)
			.build()
			.unwrap();

		assert_eq!(settings.page_size, 20);
		assert_eq!(settings.start_from, 2);
		assert_eq!(settings.sort_param(), Some("-name"));
	}

	#[test]
	fn test_zero_page_size_is_invalid() {
		let result = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("page_size", Value::Number(0.into())))
			.build();
		assert!(matches!(result, Err(SettingsError::Invalid(_))));
	}

	#[rstest]
	#[case("on_each_side")]
	#[case("on_ends")]
	fn test_zero_window_is_invalid(#[case] key: &str) {
		let result = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value(key, Value::Number(0.into())))
			.build();
		let message = result.unwrap_err().to_string();
		assert!(message.contains(key), "{message}");
	}

	#[rstest]
	#[case("true", "1", "true", "1")]
	#[case("42", "false", "42", "false")]
	#[case("capital", "-name", "capital", "-name")]
	fn test_env_scalars_keep_text_fields(
		#[case] search_field: &str,
		#[case] sort: &str,
		#[case] expected_field: &str,
		#[case] expected_sort: &str,
	) {
		let settings = SettingsBuilder::new()
			.add_source(env(&[
				("FOLIO_SEARCH_FIELD", search_field),
				("FOLIO_SORT", sort),
				("FOLIO_PAGE_SIZE", "25"),
			]))
			.build()
			.unwrap();

		assert_eq!(settings.search_field, expected_field);
		assert_eq!(settings.sort.as_deref(), Some(expected_sort));
		assert_eq!(settings.page_size, 25);
	}

	#[test]
	fn test_text_field_rejects_non_scalar() {
		let result = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("search_field", Value::Array(vec![])))
			.build();
		assert!(matches!(result, Err(SettingsError::Deserialize(_))));
	}

	#[test]
	fn test_wrong_type_is_rejected() {
		let result = SettingsBuilder::new()
			.add_source(DefaultSource::new().with_value("page_size", Value::String("ten".into())))
			.build();
		assert!(matches!(result, Err(SettingsError::Deserialize(_))));
	}

	#[test]
	fn test_source_failure_names_source() {
		let result = SettingsBuilder::new()
			.add_source(TomlFileSource::new("/nonexistent/folio.toml").required(true))
			.build();
		let message = result.unwrap_err().to_string();
		assert!(message.contains("/nonexistent/folio.toml"));
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some(""), None)]
	#[case(Some("  "), None)]
	#[case(Some("-"), None)]
	#[case(Some("name"), Some("name"))]
	#[case(Some(" -capital "), Some("-capital"))]
	fn test_sort_param(#[case] sort: Option<&str>, #[case] expected: Option<&str>) {
		let settings = TableSettings {
			sort: sort.map(str::to_string),
			..TableSettings::default()
		};
		assert_eq!(settings.sort_param(), expected);
	}
}
