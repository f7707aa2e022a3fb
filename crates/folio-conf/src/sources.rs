//! Configuration sources for layered settings
//!
//! Sources are merged in priority order
//! (environment variables > settings file > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for configuration sources
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Parse error: {0}")]
	Parse(String),

	#[error("Settings file not found: {0}")]
	Missing(PathBuf),
}

/// Environment variable configuration source
///
/// Only variables starting with the prefix are read. The prefix is stripped
/// and the remaining key lowercased, so `FOLIO_PAGE_SIZE=25` becomes
/// `page_size = 25`.
pub struct EnvSource {
	prefix: String,
}

impl EnvSource {
	/// Prefix used by [`EnvSource::default`]
	pub const DEFAULT_PREFIX: &'static str = "FOLIO_";

	/// Create a source reading variables with the given prefix
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::sources::EnvSource;
	///
	/// let source = EnvSource::new("COUNTRIES_");
	/// ```
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	/// Build configuration from an explicit set of variables
	pub fn load_from<I>(&self, vars: I) -> IndexMap<String, Value>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		vars.into_iter()
			.filter_map(|(key, value)| {
				let key = key.strip_prefix(&self.prefix)?.to_lowercase();
				Some((key, parse_env_value(value)))
			})
			.collect()
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PREFIX)
	}
}

fn parse_env_value(value: String) -> Value {
	if let Ok(num) = value.trim().parse::<i64>() {
		Value::Number(num.into())
	} else if let Ok(b) = value.trim().parse::<bool>() {
		Value::Bool(b)
	} else {
		Value::String(value)
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.load_from(std::env::vars()))
	}

	fn priority(&self) -> u8 {
		100 // Highest priority
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// TOML file configuration source
///
/// Settings may sit at the root of the file or under a `[table]` section.
/// When both are present, keys from `[table]` override root keys.
pub struct TomlFileSource {
	path: PathBuf,
	required: bool,
}

impl TomlFileSource {
	/// Create a source for an optional TOML file
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::sources::TomlFileSource;
	///
	/// let source = TomlFileSource::new("folio.toml").required(true);
	/// ```
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// Fail instead of yielding nothing when the file is missing
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		if !self.path.exists() {
			if self.required {
				return Err(SourceError::Missing(self.path.clone()));
			}
			tracing::debug!(path = %self.path.display(), "settings file not found, skipping");
			return Ok(IndexMap::new());
		}

		let content = fs::read_to_string(&self.path)?;
		let toml_value: toml::Table = toml::from_str(&content)?;
		let json_value = serde_json::to_value(toml_value)?;

		let Value::Object(root) = json_value else {
			return Err(SourceError::Parse("Expected table at root".to_string()));
		};

		let mut map: IndexMap<String, Value> = root.into_iter().collect();
		match map.shift_remove("table") {
			Some(Value::Object(section)) => {
				tracing::debug!(
					path = %self.path.display(),
					keys = section.len(),
					"merging [table] section over root keys"
				);
				map.extend(section);
			}
			Some(_) => {
				return Err(SourceError::Parse("Expected [table] to be a table".to_string()));
			}
			None => {}
		}

		Ok(map)
	}

	fn priority(&self) -> u8 {
		50 // Medium priority
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Default values configuration source
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Create an empty default values source
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Add a default value for a configuration key
	///
	/// # Examples
	///
	/// ```
	/// use folio_conf::sources::DefaultSource;
	/// use serde_json::Value;
	///
	/// let source = DefaultSource::new()
	///     .with_value("page_size", Value::Number(20.into()));
	/// ```
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl Default for DefaultSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SourceError> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0 // Lowest priority
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_env_source_strips_prefix_and_parses() {
		let source = EnvSource::default();
		let config = source.load_from(vars(&[
			("FOLIO_PAGE_SIZE", "25"),
			("FOLIO_SORT", "-name"),
			("PATH", "/usr/bin"),
		]));

		assert_eq!(config.len(), 2);
		assert_eq!(config.get("page_size"), Some(&Value::Number(25.into())));
		assert_eq!(config.get("sort"), Some(&Value::String("-name".to_string())));
	}

	#[test]
	fn test_toml_source_reads_root_keys() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "page_size = 20\nsearch_field = \"capital\"").unwrap();

		let config = TomlFileSource::new(file.path()).load().unwrap();
		assert_eq!(config.get("page_size"), Some(&Value::Number(20.into())));
		assert_eq!(
			config.get("search_field"),
			Some(&Value::String("capital".to_string()))
		);
	}

	#[test]
	fn test_toml_source_reads_table_section() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "[table]\nstart_from = 3").unwrap();

		let config = TomlFileSource::new(file.path()).load().unwrap();
		assert_eq!(config.get("start_from"), Some(&Value::Number(3.into())));
	}

	#[test]
	fn test_toml_source_merges_root_and_table_section() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(
			file,
			"page_size = 20\nstart_from = 2\n\n[table]\nstart_from = 3\nsort = \"-name\""
		)
		.unwrap();

		let config = TomlFileSource::new(file.path()).load().unwrap();
		assert_eq!(config.len(), 3);
		assert_eq!(config.get("page_size"), Some(&Value::Number(20.into())));
		assert_eq!(config.get("start_from"), Some(&Value::Number(3.into())));
		assert_eq!(config.get("sort"), Some(&Value::String("-name".to_string())));
		assert!(config.get("table").is_none());
	}

	#[test]
	fn test_toml_source_rejects_scalar_table_key() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "table = 3").unwrap();

		let result = TomlFileSource::new(file.path()).load();
		assert!(matches!(result, Err(SourceError::Parse(_))));
	}

	#[test]
	fn test_missing_toml_file() {
		let source = TomlFileSource::new("/nonexistent/folio.toml");
		assert!(source.load().unwrap().is_empty());

		let required = TomlFileSource::new("/nonexistent/folio.toml").required(true);
		assert!(matches!(required.load(), Err(SourceError::Missing(_))));
	}

	#[test]
	fn test_source_priority() {
		assert_eq!(EnvSource::default().priority(), 100);
		assert_eq!(TomlFileSource::new("folio.toml").priority(), 50);
		assert_eq!(DefaultSource::new().priority(), 0);
	}
}
