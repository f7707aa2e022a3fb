//! Pagination functionality for tables

use serde::{Deserialize, Serialize};

/// Page bookkeeping for a view of `total_items` rows
///
/// Pages are 1-indexed. With no items there are no pages and
/// `current_page` stays at 1 with an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	/// Number of items per page
	pub per_page: usize,
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of items
	pub total_items: usize,
}

impl Pagination {
	/// Creates a new pagination configuration
	///
	/// # Arguments
	///
	/// * `per_page` - Number of items per page
	/// * `total_items` - Number of items being paginated
	pub fn new(per_page: usize, total_items: usize) -> Self {
		Self {
			per_page,
			current_page: 1,
			total_items,
		}
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.total_items == 0 || self.per_page == 0 {
			0
		} else {
			self.total_items.div_ceil(self.per_page)
		}
	}

	/// Returns the start index for the current page (0-indexed)
	pub fn start_index(&self) -> usize {
		(self.current_page.saturating_sub(1) * self.per_page).min(self.total_items)
	}

	/// Returns the end index for the current page (exclusive, 0-indexed)
	pub fn end_index(&self) -> usize {
		(self.start_index() + self.per_page).min(self.total_items)
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Moves to the next page if available
	pub fn next_page(&mut self) -> bool {
		if self.has_next() {
			self.current_page += 1;
			true
		} else {
			false
		}
	}

	/// Moves to the previous page if available
	pub fn prev_page(&mut self) -> bool {
		if self.has_previous() {
			self.current_page -= 1;
			true
		} else {
			false
		}
	}

	/// Sets the current page, clamped to `[1, max(total_pages, 1)]`
	pub fn set_page(&mut self, page: usize) {
		self.current_page = page.max(1).min(self.total_pages().max(1));
	}

	/// Replaces the item count and returns to the first page
	pub fn reset(&mut self, total_items: usize) {
		self.total_items = total_items;
		self.current_page = 1;
	}
}
