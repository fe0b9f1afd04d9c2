//! Search and category filtering shared by every record list.
//!
//! A record is kept when the free-text term is found (case-insensitively) in
//! any of its searchable fields AND its category equals the selected one.
//! Both criteria are optional; an inactive criterion matches everything.

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

/// Text value that disables the category filter, besides the empty string.
pub const ALL_CATEGORIES: &str = "all";

/// Records exposing the string fields matched by the free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Records that can be narrowed by an exact-match categorical field.
pub trait Filterable: Searchable {
    type Category: Clone + PartialEq + Display;

    fn category(&self) -> &Self::Category;
}

/// Lower-cased, trimmed search term. Empty means "match everything".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: &str) -> Self {
        Self(term.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when any field contains the term.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Selected category, or no restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, value: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn selected(&self) -> Option<&C> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(selected) => Some(selected),
        }
    }
}

impl<C: FromStr> CategoryFilter<C> {
    /// Parses a filter value coming from user input.
    ///
    /// `None`, the empty string and `all` (any case) disable the filter.
    pub fn parse(raw: Option<&str>) -> Result<Self, C::Err> {
        match raw.map(str::trim) {
            None => Ok(CategoryFilter::All),
            Some(value) if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) => {
                Ok(CategoryFilter::All)
            }
            Some(value) => value.parse().map(CategoryFilter::Only),
        }
    }
}

/// Combined search and category criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordFilter<C> {
    pub search: SearchTerm,
    pub category: CategoryFilter<C>,
}

impl<C> Default for RecordFilter<C> {
    fn default() -> Self {
        Self {
            search: SearchTerm::default(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Clone + PartialEq + Display> RecordFilter<C> {
    pub fn new(search: &str, category: CategoryFilter<C>) -> Self {
        Self {
            search: SearchTerm::new(search),
            category,
        }
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = SearchTerm::new(term);
        self
    }

    pub fn category(mut self, category: C) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all()
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Filterable<Category = C>,
    {
        self.search.matches_any(record.search_fields()) && self.category.matches(record.category())
    }

    /// Returns the matching records in their original order.
    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Filterable<Category = C>,
    {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

/// Distinct category values in first-seen order, skipping blank ones.
pub fn category_options<R: Filterable>(records: &[R]) -> Vec<R::Category> {
    let mut options: Vec<R::Category> = Vec::new();
    for record in records {
        let value = record.category();
        if value.to_string().trim().is_empty() || options.contains(value) {
            continue;
        }
        options.push(value.clone());
    }
    options
}
