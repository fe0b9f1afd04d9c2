//! Breeding and birth record operations.

use crate::domain::breeding::{BirthRecord, BreedingConfirmation, BreedingRecord};
use crate::domain::status::{BirthStatus, BreedingStatus, Status};
use crate::domain::types::{BreedingRecordId, CalfTag};
use crate::dto::list::{ListPageData, ListQuery, StatusRow};
use crate::forms::breeding::{
    AddBirthForm, AddBirthPayload, AddBreedingForm, AddBreedingPayload, ConfirmBreedingForm,
};
use crate::models::config::DashboardConfig;
use crate::repository::{BreedingReader, BreedingWriter};
use crate::services::{ServiceError, ServiceResult, build_list_page};

pub fn list_breeding_records<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<BreedingRecord>>>
where
    R: BreedingReader + ?Sized,
{
    let records = repo.list_breeding_records().map_err(|err| {
        log::error!("Failed to list breeding records: {err}");
        err
    })?;

    let page = build_list_page(records, query, config.items_per_page)?;
    Ok(page.map_items(|r| {
        let status = r.status;
        StatusRow::new(r, status)
    }))
}

pub fn add_breeding_record<R>(repo: &R, form: AddBreedingForm) -> ServiceResult<BreedingRecord>
where
    R: BreedingWriter + ?Sized,
{
    let payload = AddBreedingPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate breeding form: {err}");
        ServiceError::from(err)
    })?;

    let record = repo
        .create_breeding_record(&payload.into_domain())
        .map_err(|err| {
            log::error!("Failed to add a breeding record: {err}");
            err
        })?;

    log::info!(
        "Recorded breeding {} for {}, calving expected {}",
        record.id,
        record.female_tag,
        record.expected_calving
    );
    Ok(record)
}

pub fn change_breeding_status<R>(
    repo: &R,
    id: &str,
    status: &str,
) -> ServiceResult<BreedingRecord>
where
    R: BreedingWriter + ?Sized,
{
    let id = BreedingRecordId::new(id)?;
    let status: BreedingStatus = status.parse()?;

    repo.update_breeding_status(&id, status).map_err(|err| {
        log::error!("Failed to update breeding record {id}: {err}");
        err.into()
    })
}

/// Applies the pregnancy check result to an open breeding record.
pub fn complete_breeding<R>(
    repo: &R,
    id: &str,
    form: ConfirmBreedingForm,
) -> ServiceResult<BreedingRecord>
where
    R: BreedingReader + BreedingWriter + ?Sized,
{
    let id = BreedingRecordId::new(id)?;
    let current = repo
        .get_breeding_record(&id)?
        .ok_or(ServiceError::NotFound)?;
    if !current.status.is_completable() {
        log::error!("Breeding record {id} cannot be completed from {}", current.status);
        return Err(ServiceError::Conflict(format!(
            "breeding record {id} is {}",
            current.status
        )));
    }

    let confirmation = BreedingConfirmation::try_from(form).map_err(|err| {
        log::error!("Failed to validate breeding confirmation: {err}");
        ServiceError::from(err)
    })?;
    if let Some(calving) = confirmation
        .expected_calving
        .filter(|date| *date <= current.breeding_date)
    {
        log::error!("Breeding record {id}: calving {calving} precedes breeding");
        return Err(ServiceError::Form(format!(
            "expected calving {calving} must follow breeding date {}",
            current.breeding_date
        )));
    }

    let record = repo
        .complete_breeding_record(&id, &confirmation)
        .map_err(|err| {
            log::error!("Failed to complete breeding record {id}: {err}");
            err
        })?;

    log::info!("Breeding record {id} closed as {}", record.status);
    Ok(record)
}

pub fn delete_breeding_record<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: BreedingWriter + ?Sized,
{
    let id = BreedingRecordId::new(id)?;
    repo.delete_breeding_record(&id).map_err(|err| {
        log::error!("Failed to delete breeding record {id}: {err}");
        err
    })?;
    Ok(())
}

pub fn list_birth_records<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<BirthRecord>>>
where
    R: BreedingReader + ?Sized,
{
    let records = repo.list_birth_records().map_err(|err| {
        log::error!("Failed to list birth records: {err}");
        err
    })?;

    let page = build_list_page(records, query, config.items_per_page)?;
    Ok(page.map_items(|r| {
        let status = r.status;
        StatusRow::new(r, status)
    }))
}

pub fn add_birth_record<R>(repo: &R, form: AddBirthForm) -> ServiceResult<BirthRecord>
where
    R: BreedingWriter + ?Sized,
{
    let payload = AddBirthPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate birth form: {err}");
        ServiceError::from(err)
    })?;

    let record = repo
        .create_birth_record(&payload.into_domain())
        .map_err(|err| {
            log::error!("Failed to add a birth record: {err}");
            err
        })?;

    log::info!("Registered calf {} of {}", record.calf_tag, record.mother_tag);
    Ok(record)
}

pub fn change_birth_status<R>(repo: &R, calf_tag: &str, status: &str) -> ServiceResult<BirthRecord>
where
    R: BreedingWriter + ?Sized,
{
    let calf_tag = CalfTag::new(calf_tag)?;
    let status: BirthStatus = status.parse()?;

    repo.update_birth_status(&calf_tag, status).map_err(|err| {
        log::error!("Failed to update calf {calf_tag}: {err}");
        err.into()
    })
}

pub fn delete_birth_record<R>(repo: &R, calf_tag: &str) -> ServiceResult<()>
where
    R: BreedingWriter + ?Sized,
{
    let calf_tag = CalfTag::new(calf_tag)?;
    repo.delete_birth_record(&calf_tag).map_err(|err| {
        log::error!("Failed to delete calf {calf_tag}: {err}");
        err
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::{AnimalName, AnimalTag, BreedingMethod, SireId};
    use crate::repository::mock::MockRepository;

    fn record(status: BreedingStatus) -> BreedingRecord {
        BreedingRecord {
            id: BreedingRecordId::new("BRD001").unwrap(),
            female_tag: AnimalTag::new("COW001").unwrap(),
            female_name: AnimalName::new("Bella").unwrap(),
            male_id: SireId::new("BULL001").unwrap(),
            male_name: AnimalName::new("Thunder").unwrap(),
            method: BreedingMethod::Natural,
            breeding_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            expected_calving: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            status,
            confirmation: None,
        }
    }

    fn confirm_form(outcome: &str) -> ConfirmBreedingForm {
        ConfirmBreedingForm {
            confirmation_date: "2024-05-15".into(),
            method: "Ultrasound".into(),
            expected_calving: None,
            veterinarian: Some("Dr. Johnson".into()),
            outcome: outcome.into(),
            notes: None,
        }
    }

    #[test]
    fn confirmed_record_cannot_be_completed_again() {
        let mut repo = MockRepository::new();
        repo.expect_get_breeding_record()
            .returning(|_| Ok(Some(record(BreedingStatus::Confirmed))));
        repo.expect_complete_breeding_record().never();

        let result = complete_breeding(&repo, "BRD001", confirm_form("Failed"));
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn pregnant_record_takes_chosen_outcome() {
        let mut repo = MockRepository::new();
        repo.expect_get_breeding_record()
            .returning(|_| Ok(Some(record(BreedingStatus::Pregnant))));
        repo.expect_complete_breeding_record()
            .withf(|_, confirmation| confirmation.outcome == BreedingStatus::Failed)
            .returning(|_, confirmation| {
                let mut r = record(BreedingStatus::Pregnant);
                r.complete(confirmation.clone());
                Ok(r)
            });

        let result = complete_breeding(&repo, "BRD001", confirm_form("Failed")).unwrap();
        assert_eq!(result.status, BreedingStatus::Failed);
        assert!(!result.is_expecting());
    }

    #[test]
    fn calving_before_breeding_date_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_breeding_record()
            .returning(|_| Ok(Some(record(BreedingStatus::Pregnant))));
        repo.expect_complete_breeding_record().never();

        let mut form = confirm_form("Confirmed");
        form.expected_calving = Some("2024-03-01".into());
        let result = complete_breeding(&repo, "BRD001", form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn invalid_outcome_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_breeding_record()
            .returning(|_| Ok(Some(record(BreedingStatus::Breeding))));

        let result = complete_breeding(&repo, "BRD001", confirm_form("Breeding"));
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
