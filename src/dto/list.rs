use serde::{Deserialize, Serialize};

use crate::domain::status::Status;
use crate::pagination::Paginated;
use crate::status_selector::{StatusBadge, StatusSelector};

/// Query parameters accepted by every list service.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Selected category label; empty or `all` disables the filter.
    pub status: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

/// Data required to render one filtered, paginated table.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    pub items: Paginated<T>,
    /// Search query echoed back when present.
    pub search_query: Option<String>,
    /// Label of the selected category, `None` for all.
    pub status_filter: Option<String>,
    /// Category values present in the unfiltered list.
    pub status_options: Vec<String>,
}

impl<T> ListPageData<T> {
    pub fn map_items<U, F>(self, f: F) -> ListPageData<U>
    where
        F: FnMut(T) -> U,
    {
        ListPageData {
            items: self.items.map(f),
            search_query: self.search_query,
            status_filter: self.status_filter,
            status_options: self.status_options,
        }
    }
}

/// Table row carrying the record with its rendered status.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRow<T> {
    pub record: T,
    pub badge: StatusBadge,
    /// Whether the "complete process" action is shown.
    pub can_complete: bool,
}

impl<T> StatusRow<T> {
    pub fn new<S: Status>(record: T, status: S) -> Self {
        let selector = StatusSelector::new(status);
        Self {
            record,
            badge: selector.badge(),
            can_complete: selector.can_complete(),
        }
    }
}
