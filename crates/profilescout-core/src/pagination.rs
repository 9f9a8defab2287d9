// Client-side paging over the sorted repository collection
use std::num::NonZeroUsize;
use std::ops::Range;

/// Sizes offered by the page-size selector
pub const PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 15, 20];

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// Which slice of the collection is on screen
///
/// `index` always sits inside `[0, max_page_index]` for the row count it was
/// last clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    index: usize,
    size: NonZeroUsize,
}

impl PageWindow {
    pub fn new(size: NonZeroUsize) -> Self {
        Self { index: 0, size }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> NonZeroUsize {
        self.size
    }

    /// Pages needed for `total_rows`; an empty table still shows one page
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.size.get()).max(1)
    }

    pub fn max_page_index(&self, total_rows: usize) -> usize {
        self.page_count(total_rows) - 1
    }

    pub fn clamp(&mut self, total_rows: usize) {
        self.index = self.index.min(self.max_page_index(total_rows));
    }

    pub fn goto(&mut self, index: isize, total_rows: usize) {
        self.index = usize::try_from(index).unwrap_or(0);
        self.clamp(total_rows);
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    /// Change the size, keeping the current first row on screen
    pub fn resize(&mut self, size: NonZeroUsize, total_rows: usize) {
        let first_row = self.index * self.size.get();
        self.size = size;
        self.index = first_row / size.get();
        self.clamp(total_rows);
    }

    /// Row range of the current page, already cut to `total_rows`
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = (self.index * self.size.get()).min(total_rows);
        let end = (start + self.size.get()).min(total_rows);
        start..end
    }

    pub fn summary(&self, total_rows: usize) -> PaginationSummary {
        let max_index = self.max_page_index(total_rows);
        PaginationSummary {
            index: self.index,
            size: self.size.get(),
            page_count: self.page_count(total_rows),
            total_rows,
            can_previous_page: self.index > 0,
            can_next_page: self.index < max_index,
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// What the pager widget needs to draw itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary {
    pub index: usize,
    pub size: usize,
    pub page_count: usize,
    pub total_rows: usize,
    pub can_previous_page: bool,
    pub can_next_page: bool,
}

/// Next entry of the page-size selector, wrapping around
pub fn next_page_size(current: NonZeroUsize) -> NonZeroUsize {
    let next = PAGE_SIZE_CHOICES
        .iter()
        .copied()
        .find(|&size| size > current.get())
        .unwrap_or(PAGE_SIZE_CHOICES[0]);
    NonZeroUsize::new(next).unwrap_or(DEFAULT_PAGE_SIZE)
}
