//! Country records as served by the countries endpoint

use serde::{Deserialize, Serialize};

use crate::field::{FieldOption, FieldOptions};
use crate::record::{Fields, Value};

/// A country row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
	/// Numeric identifier
	pub id: i64,
	/// Country name
	pub name: String,
	/// ISO 3166-1 alpha-3 code
	pub iso3: String,
	/// ISO 3166-1 alpha-2 code
	pub iso2: String,
	/// International dialling code
	pub phone_code: String,
	/// Capital city
	pub capital: String,
	/// Currency code
	pub currency: String,
	/// Name in the native language
	#[serde(default)]
	pub native: Option<String>,
	/// Flag emoji
	#[serde(default)]
	pub emoji: Option<String>,
	/// Flag emoji as code points
	#[serde(default, rename = "emojiU")]
	pub emoji_u: Option<String>,
}

impl Fields for Country {
	fn field(&self, name: &str) -> Value {
		match name {
			"id" => Value::from(self.id),
			"name" => Value::from(self.name.as_str()),
			"iso3" => Value::from(self.iso3.as_str()),
			"iso2" => Value::from(self.iso2.as_str()),
			"phone_code" => Value::from(self.phone_code.as_str()),
			"capital" => Value::from(self.capital.as_str()),
			"currency" => Value::from(self.currency.as_str()),
			"native" => Value::from(self.native.clone()),
			"emoji" => Value::from(self.emoji.clone()),
			"emojiU" => Value::from(self.emoji_u.clone()),
			_ => Value::Null,
		}
	}
}

/// The columns of the countries table, in display order, with header labels
pub fn country_fields() -> FieldOptions {
	FieldOptions::new()
		.with(FieldOption::new("name", "Country"))
		.with(FieldOption::new("capital", "Capital"))
		.with(FieldOption::new("iso2", "Code"))
		.with(FieldOption::new("currency", "Currency"))
		.with(FieldOption::new("phone_code", "Phone Code"))
}

/// The fields offered by the search selector, labelled for that selector
///
/// Same fields as [`country_fields`], but `iso2` reads "Country Code" where
/// the table header only says "Code".
pub fn country_search_fields() -> FieldOptions {
	country_fields().with(FieldOption::new("iso2", "Country Code"))
}

/// Parses the countries endpoint's JSON array
#[cfg(feature = "json")]
pub fn load_countries(json: &str) -> crate::Result<Vec<Country>> {
	let countries: Vec<Country> = serde_json::from_str(json)?;
	tracing::debug!(countries = countries.len(), "loaded countries");
	Ok(countries)
}
