//! Paginated, searchable and sortable record views for Folio
//!
//! This crate holds the state behind a data table: which rows survive the
//! current search, in which order they are shown, which page is visible and
//! how the page-number navigation collapses for large page counts. It knows
//! nothing about markup or fetching; a presentation layer feeds it a dataset
//! once and then drives it with user actions.
//!
//! # Features
//!
//! - **Pagination**: fixed-size page windows with clamped navigation
//! - **Page index**: page numbers with single-ellipsis collapsing per side
//! - **Search**: case-insensitive substring match on a chosen field
//! - **Sorting**: stable ascending/descending sort on a chosen field
//! - **Records**: generic [`Record`] rows or any type implementing [`Fields`]
//! - **JSON**: dataset loading with `serde_json` (requires `json` feature)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Dataset] --> B[PaginationEngine]
//!     B --> C[Filter / Search]
//!     B --> D[Sort]
//!     B --> E[Pagination]
//!     E --> F[Current slice]
//!     E --> G[Page index]
//!     H[FieldOptions] -.validates.-> C
//!     H -.validates.-> D
//! ```
//!
//! # Example
//!
//! ```rust
//! use folio_tables::{PaginationEngine, Record, SortDirection, Value};
//!
//! let rows: Vec<Record> = ["Chad", "Benin", "Mali"]
//!     .into_iter()
//!     .map(|name| Record::from([("name".to_string(), Value::from(name))]))
//!     .collect();
//!
//! let mut engine = PaginationEngine::new(rows, 1, 10).unwrap();
//! engine.apply_sort("name", SortDirection::Descending);
//!
//! let names: Vec<String> = engine
//!     .current_slice()
//!     .iter()
//!     .map(|row| row["name"].as_text())
//!     .collect();
//! assert_eq!(names, vec!["Mali", "Chad", "Benin"]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod countries;
pub mod engine;
pub mod error;
pub mod field;
pub mod filtering;
pub mod page_index;
pub mod pagination;
pub mod record;
pub mod sorting;

// Re-exports for convenience
pub use countries::{Country, country_fields, country_search_fields};
#[cfg(feature = "json")]
pub use countries::load_countries;
pub use engine::{DEFAULT_PAGE_SIZE, PageView, PaginationEngine, PaginationEngineBuilder};
pub use error::{Result, TableError};
pub use field::{FieldOption, FieldOptions};
pub use filtering::SearchQuery;
pub use page_index::{PageEntry, PageWindow, page_index};
pub use pagination::Pagination;
#[cfg(feature = "json")]
pub use record::{load_records, load_records_from_reader};
pub use record::{Fields, Record, Value};
pub use sorting::{SortConfig, SortDirection, SortKey};
