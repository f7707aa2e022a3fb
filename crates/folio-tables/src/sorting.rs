//! Sorting functionality for tables

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::record::Value;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[serde(rename = "asc")]
	Ascending,
	/// Descending order
	#[serde(rename = "desc")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for positive values and `Descending` for negative values
	/// (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ascending => f.write_str("asc"),
			Self::Descending => f.write_str("desc"),
		}
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Ascending),
			"desc" | "descending" => Ok(Self::Descending),
			other => Err(TableError::InvalidConfiguration(format!(
				"unknown sort direction: {}",
				other
			))),
		}
	}
}

/// The active sort of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	/// Field the view is sorted by
	pub field: String,
	/// Sort direction
	pub direction: SortDirection,
}

/// Comparison key derived from a field value
///
/// Orders empty values (absent, null or empty text) first, then numbers,
/// then non-empty text. Numbers compare with [`f64::total_cmp`] and text
/// compares byte-wise, so the order is total.
#[derive(Debug, Clone)]
pub enum SortKey {
	/// Absent, null or empty text
	Empty,
	/// Numeric value
	Number(f64),
	/// Non-empty text
	Text(String),
}

impl SortKey {
	fn rank(&self) -> u8 {
		match self {
			Self::Empty => 0,
			Self::Number(_) => 1,
			Self::Text(_) => 2,
		}
	}
}

impl From<Value> for SortKey {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Empty,
			Value::Text(text) if text.is_empty() => Self::Empty,
			Value::Text(text) => Self::Text(text),
			Value::Number(number) => Self::Number(number),
		}
	}
}

impl Ord for SortKey {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Number(a), Self::Number(b)) => a.total_cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

impl PartialOrd for SortKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for SortKey {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for SortKey {}
