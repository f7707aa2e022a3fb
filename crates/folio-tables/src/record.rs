//! Records and scalar field values
//!
//! A record is an ordered mapping from field name to a scalar [`Value`].
//! Views never depend on a concrete row type: anything implementing
//! [`Fields`] can be paginated, searched and sorted.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A scalar field value
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
	/// Textual value
	Text(String),
	/// Numeric value
	Number(f64),
	/// Absent or null value
	#[default]
	Null,
}

impl Value {
	/// Returns the value rendered as text
	///
	/// `Null` renders as the empty string and integral numbers are rendered
	/// without a fractional part.
	///
	/// # Example
	///
	/// ```rust
	/// use folio_tables::Value;
	///
	/// assert_eq!(Value::from(42).as_text(), "42");
	/// assert_eq!(Value::Null.as_text(), "");
	/// ```
	pub fn as_text(&self) -> String {
		match self {
			Self::Text(text) => text.clone(),
			Self::Number(number) => number.to_string(),
			Self::Null => String::new(),
		}
	}

	/// Returns `true` for `Null` and for empty text
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Text(text) => text.is_empty(),
			Self::Number(_) => false,
			Self::Null => true,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Number(number) => write!(f, "{}", number),
			Self::Null => Ok(()),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a string, number, boolean or null")
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
		Ok(Value::Text(v.to_string()))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
		Ok(Value::Number(v as f64))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
		Ok(Value::Number(v as f64))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
		Ok(Value::Number(v))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
		Ok(Value::Text(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
		Ok(Value::Text(v))
	}

	fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
		deserializer.deserialize_any(self)
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(ValueVisitor)
	}
}

/// A generic record: field name to scalar value, in insertion order
pub type Record = IndexMap<String, Value>;

/// Field lookup for rows shown in a table view
///
/// Implementations return [`Value::Null`] for fields they do not carry.
pub trait Fields {
	/// Returns the value of the named field
	fn field(&self, name: &str) -> Value;
}

impl Fields for Record {
	fn field(&self, name: &str) -> Value {
		self.get(name).cloned().unwrap_or_default()
	}
}

impl<T: Fields + ?Sized> Fields for &T {
	fn field(&self, name: &str) -> Value {
		(**self).field(name)
	}
}

/// Parses a JSON array of objects into records
///
/// # Example
///
/// ```rust
/// use folio_tables::record::{load_records, Fields, Value};
///
/// let records = load_records(r#"[{"name": "Chad", "id": 1}, {"name": null}]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].field("id"), Value::Number(1.0));
/// assert_eq!(records[1].field("name"), Value::Null);
/// ```
#[cfg(feature = "json")]
pub fn load_records(json: &str) -> crate::Result<Vec<Record>> {
	let records: Vec<Record> = serde_json::from_str(json)?;
	tracing::debug!(records = records.len(), "loaded records from JSON");
	Ok(records)
}

/// Parses a JSON array of objects from a reader
#[cfg(feature = "json")]
pub fn load_records_from_reader<R: std::io::Read>(reader: R) -> crate::Result<Vec<Record>> {
	let records: Vec<Record> = serde_json::from_reader(reader)?;
	tracing::debug!(records = records.len(), "loaded records from reader");
	Ok(records)
}
