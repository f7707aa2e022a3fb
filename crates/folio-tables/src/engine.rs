//! Pagination, search and sort state for a single dataset
//!
//! [`PaginationEngine`] owns a dataset and a view over it. The view is a
//! list of positions into the dataset, so filtering and sorting only ever
//! produce a new ordering and never touch the rows themselves.
//!
//! ```text
//! dataset ──filter──▶ view ──sort──▶ view ──paginate──▶ current slice + page index
//! ```
//!
//! Filtering always returns to page 1; sorting keeps the current page.

use std::cmp::Reverse;

use serde::Serialize;

use crate::error::{Result, TableError};
use crate::field::FieldOptions;
use crate::filtering::SearchQuery;
use crate::page_index::{PageEntry, PageWindow, elided_page_index};
use crate::pagination::Pagination;
use crate::record::Fields;
use crate::sorting::{SortConfig, SortDirection, SortKey};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Paginated, searchable, sortable view over a dataset
///
/// # Example
///
/// ```rust
/// use folio_tables::{PaginationEngine, Record, Value};
///
/// let rows: Vec<Record> = (1..=25)
///     .map(|i| Record::from([("id".to_string(), Value::from(i))]))
///     .collect();
///
/// let mut engine = PaginationEngine::new(rows, 1, 10).unwrap();
/// assert_eq!(engine.page_count(), 3);
/// assert_eq!(engine.current_slice().len(), 10);
///
/// engine.next_page();
/// engine.next_page();
/// assert_eq!(engine.current_page(), 3);
/// assert_eq!(engine.current_slice().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct PaginationEngine<R> {
	data: Vec<R>,
	view: Vec<usize>,
	pagination: Pagination,
	window: PageWindow,
	sort: Option<SortConfig>,
}

impl<R: Fields> PaginationEngine<R> {
	/// Creates an engine showing `start_page` of `data`
	///
	/// A start page outside `[1, page_count]` falls back to page 1.
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidConfiguration`] if `page_size` is zero.
	pub fn new(data: Vec<R>, start_page: usize, page_size: usize) -> Result<Self> {
		Self::builder(data)
			.start_page(start_page)
			.page_size(page_size)
			.build()
	}

	/// Starts building an engine over `data`
	pub fn builder(data: Vec<R>) -> PaginationEngineBuilder<R> {
		PaginationEngineBuilder::new(data)
	}

	/// Returns the rows of the current page
	///
	/// Empty when the view is empty.
	pub fn current_slice(&self) -> Vec<&R> {
		self.view[self.pagination.start_index()..self.pagination.end_index()]
			.iter()
			.map(|&position| &self.data[position])
			.collect()
	}

	/// Returns the page index for the current page
	///
	/// Computed on each call from the current state.
	pub fn page_index(&self) -> Vec<PageEntry> {
		elided_page_index(
			self.pagination.current_page,
			self.pagination.total_pages(),
			self.window,
		)
	}

	/// Jumps to page `page`, clamped to the valid range
	///
	/// Returns `false` without doing anything when `page` is already the
	/// current page.
	pub fn go_to_page(&mut self, page: usize) -> bool {
		if page == self.pagination.current_page {
			return false;
		}
		let previous = self.pagination.current_page;
		self.pagination.set_page(page);
		tracing::trace!(
			requested = page,
			from = previous,
			to = self.pagination.current_page,
			"go to page"
		);
		previous != self.pagination.current_page
	}

	/// Moves to the previous page; stays on page 1
	pub fn prev_page(&mut self) -> bool {
		let moved = self.pagination.prev_page();
		tracing::trace!(page = self.pagination.current_page, moved, "previous page");
		moved
	}

	/// Moves to the next page; stays on the last page
	pub fn next_page(&mut self) -> bool {
		let moved = self.pagination.next_page();
		tracing::trace!(page = self.pagination.current_page, moved, "next page");
		moved
	}

	/// Replaces the view with the rows matching `predicate`
	///
	/// Rows keep their original relative order, so any active sort is
	/// dropped. Always returns to page 1.
	pub fn apply_filter<P>(&mut self, mut predicate: P)
	where
		P: FnMut(&R) -> bool,
	{
		self.view = self
			.data
			.iter()
			.enumerate()
			.filter(|(_, row)| predicate(row))
			.map(|(position, _)| position)
			.collect();
		self.sort = None;
		self.pagination.reset(self.view.len());
		tracing::debug!(
			matched = self.view.len(),
			total = self.data.len(),
			pages = self.pagination.total_pages(),
			"filter applied"
		);
	}

	/// Shows every row again, in original order
	pub fn clear_filter(&mut self) {
		self.apply_filter(|_| true);
	}

	/// Filters with a case-insensitive substring search on `field`
	pub fn search(&mut self, field: &str, query: &str) {
		let search = SearchQuery::new(field, query);
		tracing::debug!(field, query = search.query(), "search");
		self.apply_filter(|row| search.matches(row));
	}

	/// Like [`PaginationEngine::search`], but only for searchable options
	///
	/// # Errors
	///
	/// Returns an error if `field` is unknown or not searchable; the view is
	/// left unchanged.
	pub fn search_by(&mut self, options: &FieldOptions, field: &str, query: &str) -> Result<()> {
		options.searchable(field)?;
		self.search(field, query);
		Ok(())
	}

	/// Sorts the view by `field`
	///
	/// The sort is stable, so rows comparing equal keep their previous
	/// relative order. The current page and page count are unchanged.
	pub fn apply_sort(&mut self, field: &str, direction: SortDirection) {
		let data = &self.data;
		let key = |position: &usize| SortKey::from(data[*position].field(field));

		let mut view = self.view.clone();
		match direction {
			SortDirection::Ascending => view.sort_by_cached_key(key),
			SortDirection::Descending => view.sort_by_cached_key(|position| Reverse(key(position))),
		}
		self.view = view;
		self.sort = Some(SortConfig {
			field: field.to_string(),
			direction,
		});
		tracing::debug!(field, %direction, page = self.pagination.current_page, "sort applied");
	}

	/// Like [`PaginationEngine::apply_sort`], but only for sortable options
	///
	/// # Errors
	///
	/// Returns an error if `field` is unknown or not sortable; the view is
	/// left unchanged.
	pub fn apply_sort_by(
		&mut self,
		options: &FieldOptions,
		field: &str,
		direction: SortDirection,
	) -> Result<()> {
		options.sortable(field)?;
		self.apply_sort(field, direction);
		Ok(())
	}

	/// Returns a snapshot of the current page for rendering
	pub fn page_view(&self) -> PageView<'_, R> {
		PageView {
			rows: self.current_slice(),
			pages: self.page_index(),
			current_page: self.current_page(),
			page_count: self.page_count(),
			total: self.filtered_count(),
			has_previous: self.has_previous(),
			has_next: self.has_next(),
		}
	}
}

impl<R> PaginationEngine<R> {
	/// Returns the current page number (1-indexed)
	pub fn current_page(&self) -> usize {
		self.pagination.current_page
	}

	/// Returns the number of pages in the view; 0 when it is empty
	pub fn page_count(&self) -> usize {
		self.pagination.total_pages()
	}

	/// Returns the page size
	pub fn page_size(&self) -> usize {
		self.pagination.per_page
	}

	/// Returns the page window used for the page index
	pub fn page_window(&self) -> PageWindow {
		self.window
	}

	/// Returns the number of rows in the dataset
	pub fn total_records(&self) -> usize {
		self.data.len()
	}

	/// Returns the number of rows in the current view
	pub fn filtered_count(&self) -> usize {
		self.view.len()
	}

	/// Returns the active sort, if any
	pub fn current_sort(&self) -> Option<&SortConfig> {
		self.sort.as_ref()
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.pagination.has_next()
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.pagination.has_previous()
	}

	/// Iterates the whole current view in order
	pub fn rows(&self) -> impl Iterator<Item = &R> + '_ {
		self.view.iter().map(|&position| &self.data[position])
	}

	/// Returns the underlying dataset, in original order
	pub fn dataset(&self) -> &[R] {
		&self.data
	}
}

/// Builder for [`PaginationEngine`]
#[derive(Debug)]
pub struct PaginationEngineBuilder<R> {
	data: Vec<R>,
	start_page: usize,
	page_size: usize,
	window: PageWindow,
	sort: Option<SortConfig>,
}

impl<R: Fields> PaginationEngineBuilder<R> {
	fn new(data: Vec<R>) -> Self {
		Self {
			data,
			start_page: 1,
			page_size: DEFAULT_PAGE_SIZE,
			window: PageWindow::default(),
			sort: None,
		}
	}

	/// Sets the page shown first
	pub fn start_page(mut self, start_page: usize) -> Self {
		self.start_page = start_page;
		self
	}

	/// Sets the number of rows per page
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Sets how many pages the page index keeps visible
	pub fn page_window(mut self, window: PageWindow) -> Self {
		self.window = window;
		self
	}

	/// Sorts the view once built
	pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
		self.sort = Some(SortConfig {
			field: field.into(),
			direction,
		});
		self
	}

	/// Builds the engine
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidConfiguration`] if the page size is zero.
	pub fn build(self) -> Result<PaginationEngine<R>> {
		if self.page_size == 0 {
			return Err(TableError::InvalidConfiguration(
				"page size must be greater than zero".to_string(),
			));
		}

		let total = self.data.len();
		let mut pagination = Pagination::new(self.page_size, total);
		if (1..=pagination.total_pages()).contains(&self.start_page) {
			pagination.current_page = self.start_page;
		}

		let mut engine = PaginationEngine {
			view: (0..total).collect(),
			data: self.data,
			pagination,
			window: self.window,
			sort: None,
		};
		tracing::debug!(
			records = total,
			page_size = engine.pagination.per_page,
			pages = engine.pagination.total_pages(),
			page = engine.pagination.current_page,
			"pagination engine created"
		);

		if let Some(sort) = self.sort {
			engine.apply_sort(&sort.field, sort.direction);
		}
		Ok(engine)
	}
}

/// Rendering snapshot of the current page
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a, R> {
	/// Rows of the current page
	pub rows: Vec<&'a R>,
	/// Page index with ellipsis entries
	pub pages: Vec<PageEntry>,
	/// Current page number
	pub current_page: usize,
	/// Number of pages
	pub page_count: usize,
	/// Number of rows in the view
	pub total: usize,
	/// Whether a previous page exists
	pub has_previous: bool,
	/// Whether a next page exists
	pub has_next: bool,
}
