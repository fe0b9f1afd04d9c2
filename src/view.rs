//! Filterable, paginated projection over a record list.
//!
//! The view owns the source records and the criteria; the filtered sequence
//! is recomputed after every change and the paginator re-clamped, so the
//! current page never points past the end of the results.

use crate::filter::{CategoryFilter, Filterable, RecordFilter, SearchTerm, category_options};
use crate::pagination::{Paginated, Paginator};

pub struct ListView<R: Filterable> {
    records: Vec<R>,
    filter: RecordFilter<R::Category>,
    /// Indices into `records` of the filtered sequence.
    paginator: Paginator<usize>,
}

impl<R: Filterable> ListView<R> {
    pub fn new(records: Vec<R>, items_per_page: usize) -> Self {
        let filter = RecordFilter::default();
        let matching = matching_indices(&records, &filter);
        Self {
            records,
            filter,
            paginator: Paginator::new(matching, items_per_page),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn search(&self) -> &SearchTerm {
        &self.filter.search
    }

    pub fn category(&self) -> &CategoryFilter<R::Category> {
        &self.filter.category
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = SearchTerm::new(term);
        self.refresh();
    }

    pub fn set_category(&mut self, category: CategoryFilter<R::Category>) {
        self.filter.category = category;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter = RecordFilter::default();
        self.refresh();
    }

    /// Swaps the source sequence, e.g. after a create or delete.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.refresh();
    }

    /// Applies `update` to the first record matching `predicate`.
    pub fn update_record<P, F>(&mut self, predicate: P, update: F) -> bool
    where
        P: Fn(&R) -> bool,
        F: FnOnce(&mut R),
    {
        let Some(record) = self.records.iter_mut().find(|r| predicate(r)) else {
            return false;
        };
        update(record);
        self.refresh();
        true
    }

    pub fn filtered_len(&self) -> usize {
        self.paginator.total_items()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn has_next(&self) -> bool {
        self.paginator.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.paginator.has_previous()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to_page(page);
    }

    pub fn go_to_next(&mut self) {
        self.paginator.go_to_next();
    }

    pub fn go_to_previous(&mut self) {
        self.paginator.go_to_previous();
    }

    /// Records on the current page, in display order.
    pub fn page_items(&self) -> Vec<&R> {
        self.paginator
            .page_items()
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Category values present in the source, for the filter dropdown.
    pub fn category_options(&self) -> Vec<R::Category> {
        category_options(&self.records)
    }

    /// Snapshot of the current page with cloned records.
    pub fn to_paginated(&self) -> Paginated<R>
    where
        R: Clone,
    {
        self.paginator
            .clone()
            .into_paginated()
            .map(|index| self.records[index].clone())
    }

    fn refresh(&mut self) {
        let matching = matching_indices(&self.records, &self.filter);
        self.paginator.set_data(matching);
    }
}

fn matching_indices<R: Filterable>(records: &[R], filter: &RecordFilter<R::Category>) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(*record))
        .map(|(index, _)| index)
        .collect()
}
