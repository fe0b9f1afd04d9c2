//! Page navigation over an already filtered sequence.

use serde::Serialize;

/// Page links shown before and after the current page, and at both edges.
const LEFT_EDGE: usize = 2;
const LEFT_CURRENT: usize = 2;
const RIGHT_CURRENT: usize = 4;
const RIGHT_EDGE: usize = 2;

/// Builds the compact list of page links; `None` marks a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Sliding 1-indexed window over `data`.
///
/// All navigation clamps into `1..=total_pages`; there is no error path. An
/// empty sequence still has one (empty) page.
#[derive(Clone, Debug)]
pub struct Paginator<T> {
    data: Vec<T>,
    items_per_page: usize,
    current_page: usize,
}

impl<T> Paginator<T> {
    /// Starts on page 1. A page size of zero is treated as one.
    pub fn new(data: Vec<T>, items_per_page: usize) -> Self {
        Self {
            data,
            items_per_page: items_per_page.max(1),
            current_page: 1,
        }
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.data.len()
    }

    pub fn total_pages(&self) -> usize {
        self.data.len().div_ceil(self.items_per_page).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Replaces the underlying sequence, pulling the current page back onto
    /// the last existing page when the new data is shorter.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.current_page = self.current_page.min(self.total_pages());
    }

    /// Records of the current page; shorter than a full page on the last one.
    pub fn page_items(&self) -> &[T] {
        let start = (self.current_page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.data.len());
        self.data.get(start..end).unwrap_or(&[])
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn go_to_next(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    pub fn go_to_previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Every page in order.
    pub fn pages(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.items_per_page)
    }

    /// Consumes the paginator keeping only the current page.
    pub fn into_paginated(self) -> Paginated<T> {
        let page = self.current_page;
        let total_pages = self.total_pages();
        let total_items = self.total_items();
        let start = (page - 1) * self.items_per_page;
        let items = self
            .data
            .into_iter()
            .skip(start)
            .take(self.items_per_page)
            .collect();

        Paginated::new(items, page, total_pages, total_items)
    }
}

/// Render-ready snapshot of one page.
#[derive(Clone, Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    /// `total_items` counts every record across pages, not just `items`.
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_items: usize,
    ) -> Self {
        let total_pages = total_pages.max(1);
        let current_page = current_page.clamp(1, total_pages);

        let pages = get_pages(
            total_pages,
            current_page,
            LEFT_EDGE,
            LEFT_CURRENT,
            RIGHT_CURRENT,
            RIGHT_EDGE,
        );

        Self {
            total_items,
            items,
            pages,
            page: current_page,
            total_pages,
            has_next: current_page < total_pages,
            has_previous: current_page > 1,
        }
    }

    /// Maps the items while keeping the navigation state.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
