use serde::Serialize;

use crate::Article;

/// Articles shown per page, matching the original collection viewer.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Current page cursor plus the fixed page size.
///
/// The cursor is 1-based and always stays within
/// `[1, max(1, ceil(filtered_len / page_size))]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first page. Called whenever the filter criteria change.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves the cursor to `page`, clamped into `[1, total_pages]`.
    /// Requests already out of bounds land on the nearest valid page, so
    /// prev on page 1 and next on the last page leave the cursor unchanged.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    pub fn prev(&mut self, total_pages: usize) {
        self.go_to(self.current_page.saturating_sub(1), total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to(self.current_page + 1, total_pages);
    }

    pub fn last(&mut self, total_pages: usize) {
        self.go_to(total_pages, total_pages);
    }
}

/// One renderable page of the filtered set plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub items: Vec<Article>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Pages needed for `len` items, never less than one: the empty result set
/// is a displayable "Page 1/1", not an error.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices the page addressed by `state` out of `filtered`.
///
/// A stale cursor left over from a filter change that shrank the result set
/// is clamped before slicing rather than allowed to read past the end.
pub fn paginate(filtered: &[Article], state: &PageState) -> Page {
    let total_pages = total_pages(filtered.len(), state.page_size());
    let current_page = state.current_page().clamp(1, total_pages);
    let start = (current_page - 1) * state.page_size();
    let end = (start + state.page_size()).min(filtered.len());
    let items = if start < filtered.len() {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items,
        current_page,
        total_pages,
        total_items: filtered.len(),
    }
}
