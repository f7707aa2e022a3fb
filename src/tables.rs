//! Table views module.
//!
//! Pagination, search and sort state for record datasets.
//!
//! # Examples
//!
//! ```rust
//! use folio::tables::{PaginationEngine, Record};
//!
//! let engine = PaginationEngine::new(Vec::<Record>::new(), 1, 10).unwrap();
//! assert!(engine.page_index().is_empty());
//! ```

#[cfg(feature = "tables")]
pub use folio_tables::*;
