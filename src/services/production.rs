//! Milk yield and feed log operations.

use crate::domain::production::{FeedRecord, MilkRecord};
use crate::domain::types::{AnimalTag, FeedRecordId};
use crate::dto::list::{ListPageData, ListQuery, StatusRow};
use crate::forms::parse_date;
use crate::forms::production::{AddFeedForm, AddFeedPayload, AddMilkRecordForm};
use crate::models::config::DashboardConfig;
use crate::repository::{ProductionReader, ProductionWriter};
use crate::services::{ServiceError, ServiceResult, build_list_page};

/// Milk records in logging order, filtered by quality grade.
pub fn list_milk_records<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<MilkRecord>>>
where
    R: ProductionReader + ?Sized,
{
    let records = repo.list_milk_records().map_err(|err| {
        log::error!("Failed to list milk records: {err}");
        err
    })?;
    let page = build_list_page(records, query, config.items_per_page)?;
    Ok(page.map_items(|r| {
        let quality = r.quality;
        StatusRow::new(r, quality)
    }))
}

/// Logs a daily yield; a second entry for the same animal and day is rejected.
pub fn add_milk_record<R>(repo: &R, form: AddMilkRecordForm) -> ServiceResult<MilkRecord>
where
    R: ProductionWriter + ?Sized,
{
    let record = MilkRecord::try_from(form).map_err(|err| {
        log::error!("Failed to validate milk record form: {err}");
        ServiceError::from(err)
    })?;

    let record = repo.create_milk_record(&record).map_err(|err| {
        log::error!("Failed to add a milk record: {err}");
        err
    })?;

    log::info!(
        "Logged {} L for {} on {}",
        record.total_l(),
        record.animal_tag,
        record.date
    );
    Ok(record)
}

pub fn delete_milk_record<R>(repo: &R, animal_tag: &str, date: &str) -> ServiceResult<()>
where
    R: ProductionWriter + ?Sized,
{
    let animal_tag = AnimalTag::new(animal_tag)?;
    let date = parse_date(date)?;
    repo.delete_milk_record(&animal_tag, date).map_err(|err| {
        log::error!("Failed to delete milk record {animal_tag}@{date}: {err}");
        err
    })?;
    Ok(())
}

pub fn list_feed_records<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<FeedRecord>>
where
    R: ProductionReader + ?Sized,
{
    let records = repo.list_feed_records().map_err(|err| {
        log::error!("Failed to list feed records: {err}");
        err
    })?;

    build_list_page(records, query, config.items_per_page)
}

pub fn add_feed_record<R>(repo: &R, form: AddFeedForm) -> ServiceResult<FeedRecord>
where
    R: ProductionWriter + ?Sized,
{
    let payload = AddFeedPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate feed form: {err}");
        ServiceError::from(err)
    })?;

    let record = repo
        .create_feed_record(&payload.into_domain())
        .map_err(|err| {
            log::error!("Failed to add a feed record: {err}");
            err
        })?;

    log::info!("Logged feed purchase {} ({})", record.id, record.feed_type);
    Ok(record)
}

pub fn delete_feed_record<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: ProductionWriter + ?Sized,
{
    let id = FeedRecordId::new(id)?;
    repo.delete_feed_record(&id).map_err(|err| {
        log::error!("Failed to delete feed record {id}: {err}");
        err
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::repository::seed::sample_store;

    #[test]
    fn milk_list_keeps_logging_order_and_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_milk_records()
            .returning(|| Ok(sample_store().milk_records));

        let page = list_milk_records(
            &repo,
            &DashboardConfig::default(),
            ListQuery::default().status("A"),
        )
        .unwrap();

        let dates: Vec<_> = page
            .items
            .items
            .iter()
            .map(|row| row.record.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-05-27", "2024-05-28"]);
        assert_eq!(page.items.items[0].badge.label, "A");
    }

    #[test]
    fn milk_list_without_criteria_matches_store_order() {
        let stored = sample_store().milk_records;
        let expected: Vec<_> = stored
            .iter()
            .map(|r| format!("{}@{}", r.animal_tag, r.date))
            .collect();

        let mut repo = MockRepository::new();
        repo.expect_list_milk_records()
            .returning(move || Ok(stored.clone()));

        let page =
            list_milk_records(&repo, &DashboardConfig::default(), ListQuery::default()).unwrap();
        let listed: Vec<_> = page
            .items
            .items
            .iter()
            .map(|row| format!("{}@{}", row.record.animal_tag, row.record.date))
            .collect();
        assert_eq!(listed, expected);
        assert_eq!(listed[0], "COW001@2024-05-27");
    }

    #[test]
    fn duplicate_milk_entry_surfaces_constraint() {
        let mut repo = MockRepository::new();
        repo.expect_create_milk_record()
            .returning(|_| Err(RepositoryError::ConstraintViolation("duplicate".into())));

        let form = AddMilkRecordForm {
            animal_tag: "COW001".into(),
            animal_name: "Bella".into(),
            date: "2024-05-28".into(),
            morning_l: 12.5,
            evening_l: 11.2,
            quality: "A".into(),
        };
        assert!(matches!(
            add_milk_record(&repo, form),
            Err(ServiceError::Repository(RepositoryError::ConstraintViolation(_)))
        ));
    }

    #[test]
    fn feed_list_filters_by_type() {
        let mut repo = MockRepository::new();
        repo.expect_list_feed_records()
            .returning(|| Ok(sample_store().feed_records));

        let page = list_feed_records(
            &repo,
            &DashboardConfig::default(),
            ListQuery::default().status("Silage"),
        )
        .unwrap();
        assert_eq!(page.items.total_items, 1);
        assert_eq!(page.status_options, vec!["Hay", "Concentrate", "Silage"]);
    }
}
