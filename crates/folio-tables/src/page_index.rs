//! Compact page-number index with ellipsis collapsing
//!
//! The index always shows the first and last pages and the current page
//! with its neighbours. Each run of hidden pages on either side of the
//! current page collapses into a single ellipsis entry.
//!
//! ```text
//! 10 pages, current 5:  1 … 4 [5] 6 … 10
//! ```

use serde::{Deserialize, Serialize};

/// One entry of a page index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
	/// Page number; for an ellipsis, the first page of the collapsed run
	pub number: usize,
	/// Whether this is the current page
	pub is_current: bool,
	/// Whether this entry stands for a collapsed run of pages
	pub is_ellipsis: bool,
}

impl PageEntry {
	/// Creates a regular page entry
	pub fn page(number: usize, is_current: bool) -> Self {
		Self {
			number,
			is_current,
			is_ellipsis: false,
		}
	}

	/// Creates an ellipsis entry standing for the run starting at `number`
	pub fn ellipsis(number: usize) -> Self {
		Self {
			number,
			is_current: false,
			is_ellipsis: true,
		}
	}
}

/// How many pages stay visible around the current page and at the ends
///
/// Both counts are at least 1: the first page, the last page and the
/// current page's neighbours are always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
	/// Pages shown on each side of the current page
	pub on_each_side: usize,
	/// Pages shown at the start and at the end
	pub on_ends: usize,
}

impl PageWindow {
	/// Creates a window; zero counts are raised to 1
	pub fn new(on_each_side: usize, on_ends: usize) -> Self {
		Self {
			on_each_side: on_each_side.max(1),
			on_ends: on_ends.max(1),
		}
	}

	fn is_visible(&self, page: usize, current: usize, page_count: usize) -> bool {
		let on_ends = self.on_ends.max(1);
		page <= on_ends
			|| page > page_count.saturating_sub(on_ends)
			|| page.abs_diff(current) <= self.on_each_side.max(1)
	}
}

impl Default for PageWindow {
	fn default() -> Self {
		Self::new(1, 1)
	}
}

/// Builds the page index with the default window (one neighbour, one end page)
///
/// # Example
///
/// ```rust
/// use folio_tables::page_index::page_index;
///
/// let pages: Vec<String> = page_index(5, 10)
///     .iter()
///     .map(|entry| if entry.is_ellipsis { "…".to_string() } else { entry.number.to_string() })
///     .collect();
/// assert_eq!(pages, vec!["1", "…", "4", "5", "6", "…", "10"]);
/// ```
pub fn page_index(current: usize, page_count: usize) -> Vec<PageEntry> {
	elided_page_index(current, page_count, PageWindow::default())
}

/// Builds the page index for `page_count` pages around `current`
///
/// Returns an empty index when there are no pages.
pub fn elided_page_index(current: usize, page_count: usize, window: PageWindow) -> Vec<PageEntry> {
	let mut entries = Vec::new();
	let mut left_elided = false;
	let mut right_elided = false;

	for page in 1..=page_count {
		if page == current {
			entries.push(PageEntry::page(page, true));
		} else if window.is_visible(page, current, page_count) {
			entries.push(PageEntry::page(page, false));
		} else if page < current && !left_elided {
			left_elided = true;
			entries.push(PageEntry::ellipsis(page));
		} else if page > current && !right_elided {
			right_elided = true;
			entries.push(PageEntry::ellipsis(page));
		}
	}

	entries
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	/// Renders an index as e.g. `1 … 4 [5] 6 … 10`
	fn render(entries: &[PageEntry]) -> String {
		entries
			.iter()
			.map(|entry| match (entry.is_ellipsis, entry.is_current) {
				(true, _) => "…".to_string(),
				(false, true) => format!("[{}]", entry.number),
				(false, false) => entry.number.to_string(),
			})
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[rstest]
	#[case(1, 0, "")]
	#[case(1, 1, "[1]")]
	#[case(1, 3, "[1] 2 3")]
	#[case(3, 3, "1 2 [3]")]
	#[case(5, 10, "1 … 4 [5] 6 … 10")]
	#[case(1, 10, "[1] 2 … 10")]
	#[case(10, 10, "1 … 9 [10]")]
	#[case(3, 10, "1 2 [3] 4 … 10")]
	#[case(4, 10, "1 … 3 [4] 5 … 10")]
	#[case(8, 10, "1 … 7 [8] 9 10")]
	fn test_default_window(#[case] current: usize, #[case] pages: usize, #[case] expected: &str) {
		assert_eq!(render(&page_index(current, pages)), expected);
	}

	#[test]
	fn test_ellipsis_carries_first_hidden_page() {
		let entries = page_index(5, 10);
		let ellipses: Vec<usize> = entries
			.iter()
			.filter(|entry| entry.is_ellipsis)
			.map(|entry| entry.number)
			.collect();
		assert_eq!(ellipses, vec![2, 7]);
		assert!(entries.iter().filter(|entry| entry.is_ellipsis).all(|entry| !entry.is_current));
	}

	#[test]
	fn test_wider_window() {
		// 50 pages, three neighbours, two end pages
		let entries = elided_page_index(8, 50, PageWindow::new(3, 2));
		assert_eq!(render(&entries), "1 2 … 5 6 7 [8] 9 10 11 … 49 50");
	}

	#[rstest]
	#[case(PageWindow::new(0, 0))]
	#[case(PageWindow { on_each_side: 0, on_ends: 0 })]
	fn test_zero_window_keeps_ends_and_neighbours(#[case] window: PageWindow) {
		let entries = elided_page_index(5, 10, window);
		assert_eq!(render(&entries), "1 … 4 [5] 6 … 10");
	}

	#[test]
	fn test_new_raises_zero_counts() {
		assert_eq!(PageWindow::new(0, 0), PageWindow::default());
		assert_eq!(PageWindow::new(0, 3), PageWindow::new(1, 3));
	}

	#[test]
	fn test_wide_window_shows_everything() {
		let entries = elided_page_index(4, 7, PageWindow::new(3, 2));
		assert_eq!(render(&entries), "1 2 3 [4] 5 6 7");
	}
}
