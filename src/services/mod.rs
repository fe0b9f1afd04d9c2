//! Business operations exposed to presentation layers.
//!
//! Services are free functions generic over the repository traits they need,
//! so they run unchanged against [`crate::repository::InMemoryRepository`] or
//! the mockall-generated repository in tests.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::dto::list::{ListPageData, ListQuery};
use crate::filter::{CategoryFilter, Filterable};
use crate::repository::errors::RepositoryError;
use crate::view::ListView;

pub mod breeding;
pub mod dashboard;
pub mod financial;
pub mod health;
pub mod livestock;
pub mod production;
pub mod reports;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Repository(other),
        }
    }
}

/// Filters and paginates `records` according to `query`.
///
/// An unknown category label is reported as a form error rather than
/// silently widening the filter.
pub(crate) fn build_list_page<R>(
    records: Vec<R>,
    query: ListQuery,
    items_per_page: usize,
) -> ServiceResult<ListPageData<R>>
where
    R: Filterable + Clone,
    R::Category: FromStr,
    <R::Category as FromStr>::Err: Display,
{
    let category = CategoryFilter::parse(query.status.as_deref()).map_err(|err| {
        log::error!("Failed to parse category filter: {err}");
        ServiceError::Form(format!("unknown filter value: {err}"))
    })?;

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut view = ListView::new(records, items_per_page);
    if let Some(term) = &search_query {
        view.set_search(term);
    }
    view.set_category(category);
    view.go_to_page(query.page.unwrap_or(1));

    Ok(ListPageData {
        items: view.to_paginated(),
        search_query,
        status_filter: view.category().selected().map(ToString::to_string),
        status_options: view
            .category_options()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::AnimalStatus;
    use crate::repository::seed::sample_store;

    #[test]
    fn not_found_is_lifted() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConstraintViolation("dup".into())),
            ServiceError::Repository(_)
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::Conflict("closed".into())),
            ServiceError::Conflict(message) if message == "closed"
        ));
    }

    #[test]
    fn list_page_applies_all_criteria() {
        let animals = sample_store().animals;
        let page = build_list_page(
            animals,
            ListQuery::default().search("holstein").status("Active").page(9),
            2,
        )
        .unwrap();

        // COW001, COW004, COW008, COW012
        assert_eq!(page.items.total_items, 4);
        assert_eq!(page.items.page, 2);
        assert_eq!(page.items.items.len(), 2);
        assert!(
            page.items
                .items
                .iter()
                .all(|a| a.status == AnimalStatus::Active)
        );
        assert_eq!(page.status_filter.as_deref(), Some("Active"));
        assert_eq!(page.search_query.as_deref(), Some("holstein"));
        assert_eq!(
            page.status_options,
            vec!["Active", "Sick", "Quarantine", "Sold"]
        );
    }

    #[test]
    fn all_sentinel_disables_category() {
        let animals = sample_store().animals;
        let page = build_list_page(animals, ListQuery::default().status("ALL"), 100).unwrap();
        assert_eq!(page.items.total_items, 12);
        assert_eq!(page.status_filter, None);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let animals = sample_store().animals;
        let result = build_list_page(animals, ListQuery::default().status("Missing"), 10);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
