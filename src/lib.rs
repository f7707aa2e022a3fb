//! # Folio
//!
//! Paginated, searchable and sortable table views over record datasets.
//!
//! Folio keeps the state behind a data table such as a list of countries:
//! the rows matching the current search, their order, the visible page and
//! a compact page-number index. Rendering and fetching stay with the
//! caller; Folio consumes a dataset once it is available and answers with
//! the rows and navigation entries to show.
//!
//! ## Feature Flags
//!
//! - `tables` (default) - The pagination engine, records and country rows
//! - `conf` (default) - Layered settings (defaults, TOML file, environment)
//!
//! ## Quick Example
//!
//! ```rust
//! use folio::conf::TableSettings;
//! use folio::tables::{Record, Value};
//!
//! let rows: Vec<Record> = ["Chad", "Benin", "Mali"]
//!     .into_iter()
//!     .map(|name| Record::from([("name".to_string(), Value::from(name))]))
//!     .collect();
//!
//! let settings = TableSettings {
//!     sort: Some("-name".to_string()),
//!     ..TableSettings::default()
//! };
//! let engine = folio::engine_from_settings(rows, &settings).unwrap();
//! assert_eq!(engine.current_slice()[0]["name"], Value::from("Mali"));
//! ```

#![warn(missing_docs)]

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "tables")]
pub mod tables;

#[cfg(all(feature = "tables", feature = "conf"))]
use folio_conf::TableSettings;
#[cfg(all(feature = "tables", feature = "conf"))]
use folio_tables::{Fields, PageWindow, PaginationEngine, SortDirection};

/// Builds an engine over `data` configured by `settings`
///
/// Applies the page size, start page, page window and the optional initial
/// sort (`"name"` ascending, `"-name"` descending).
///
/// # Errors
///
/// Returns [`folio_tables::TableError::InvalidConfiguration`] if the page
/// size is zero.
#[cfg(all(feature = "tables", feature = "conf"))]
pub fn engine_from_settings<R: Fields>(
	data: Vec<R>,
	settings: &TableSettings,
) -> folio_tables::Result<PaginationEngine<R>> {
	let mut builder = PaginationEngine::builder(data)
		.start_page(settings.start_from)
		.page_size(settings.page_size)
		.page_window(PageWindow::new(settings.on_each_side, settings.on_ends));

	if let Some(sort) = settings.sort_param() {
		let (direction, field) = SortDirection::parse_from_query(sort);
		builder = builder.sort(field, direction);
	}

	builder.build()
}

/// Searches the configured default search field for `query`
#[cfg(all(feature = "tables", feature = "conf"))]
pub fn search_default_field<R: Fields>(
	engine: &mut PaginationEngine<R>,
	settings: &TableSettings,
	query: &str,
) {
	engine.search(&settings.search_field, query);
}
