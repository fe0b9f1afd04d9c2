//! Vaccination schedule and treatment operations.

use crate::domain::health::{HealthRecord, TreatmentCompletion};
use crate::domain::status::{HealthStatus, Status, VaccinationStatus};
use crate::domain::types::{HealthRecordId, VaccinationId};
use crate::domain::vaccination::{Vaccination, VaccinationCompletion};
use crate::dto::list::{ListPageData, ListQuery, StatusRow};
use crate::forms::health::{
    AddHealthRecordForm, AddHealthRecordPayload, AddVaccinationForm, AddVaccinationPayload,
    CompleteTreatmentForm, CompleteVaccinationForm,
};
use crate::models::config::DashboardConfig;
use crate::repository::{
    HealthRecordReader, HealthRecordWriter, VaccinationReader, VaccinationWriter,
};
use crate::services::{ServiceError, ServiceResult, build_list_page};

pub fn list_vaccinations<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<Vaccination>>>
where
    R: VaccinationReader + ?Sized,
{
    let vaccinations = repo.list_vaccinations().map_err(|err| {
        log::error!("Failed to list vaccinations: {err}");
        err
    })?;

    let page = build_list_page(vaccinations, query, config.items_per_page)?;
    Ok(page.map_items(|v| {
        let status = v.status;
        StatusRow::new(v, status)
    }))
}

pub fn add_vaccination<R>(repo: &R, form: AddVaccinationForm) -> ServiceResult<Vaccination>
where
    R: VaccinationWriter + ?Sized,
{
    let payload = AddVaccinationPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate vaccination form: {err}");
        ServiceError::from(err)
    })?;

    let vaccination = repo
        .create_vaccination(&payload.into_domain())
        .map_err(|err| {
            log::error!("Failed to schedule a vaccination: {err}");
            err
        })?;

    log::info!(
        "Scheduled {} for {} on {}",
        vaccination.vaccine,
        vaccination.animal_tag,
        vaccination.due_date
    );
    Ok(vaccination)
}

pub fn change_vaccination_status<R>(repo: &R, id: &str, status: &str) -> ServiceResult<Vaccination>
where
    R: VaccinationWriter + ?Sized,
{
    let id = VaccinationId::new(id)?;
    let status: VaccinationStatus = status.parse()?;

    repo.update_vaccination_status(&id, status)
        .map_err(|err| {
            log::error!("Failed to update vaccination {id}: {err}");
            err.into()
        })
}

/// Records the administered vaccination.
///
/// Only scheduled, due or overdue entries can be completed.
pub fn complete_vaccination<R>(
    repo: &R,
    id: &str,
    form: CompleteVaccinationForm,
) -> ServiceResult<Vaccination>
where
    R: VaccinationReader + VaccinationWriter + ?Sized,
{
    let id = VaccinationId::new(id)?;
    let current = repo.get_vaccination(&id)?.ok_or(ServiceError::NotFound)?;
    if !current.status.is_completable() {
        log::error!("Vaccination {id} cannot be completed from {}", current.status);
        return Err(ServiceError::Conflict(format!(
            "vaccination {id} is {}",
            current.status
        )));
    }

    let completion = VaccinationCompletion::try_from(form).map_err(|err| {
        log::error!("Failed to validate vaccination completion: {err}");
        ServiceError::from(err)
    })?;

    let vaccination = repo.complete_vaccination(&id, &completion).map_err(|err| {
        log::error!("Failed to complete vaccination {id}: {err}");
        err
    })?;

    log::info!("Vaccination {id} completed by {}", completion.veterinarian);
    Ok(vaccination)
}

pub fn delete_vaccination<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: VaccinationWriter + ?Sized,
{
    let id = VaccinationId::new(id)?;
    repo.delete_vaccination(&id).map_err(|err| {
        log::error!("Failed to delete vaccination {id}: {err}");
        err
    })?;
    Ok(())
}

pub fn list_health_records<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<HealthRecord>>>
where
    R: HealthRecordReader + ?Sized,
{
    let records = repo.list_health_records().map_err(|err| {
        log::error!("Failed to list health records: {err}");
        err
    })?;

    let page = build_list_page(records, query, config.items_per_page)?;
    Ok(page.map_items(|r| {
        let status = r.status;
        StatusRow::new(r, status)
    }))
}

pub fn add_health_record<R>(repo: &R, form: AddHealthRecordForm) -> ServiceResult<HealthRecord>
where
    R: HealthRecordWriter + ?Sized,
{
    let payload = AddHealthRecordPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate health record form: {err}");
        ServiceError::from(err)
    })?;

    let record = repo
        .create_health_record(&payload.into_domain())
        .map_err(|err| {
            log::error!("Failed to add a health record: {err}");
            err
        })?;

    log::info!("Opened treatment {} for {}", record.id, record.animal_tag);
    Ok(record)
}

pub fn change_health_status<R>(repo: &R, id: &str, status: &str) -> ServiceResult<HealthRecord>
where
    R: HealthRecordWriter + ?Sized,
{
    let id = HealthRecordId::new(id)?;
    let status: HealthStatus = status.parse()?;

    repo.update_health_status(&id, status).map_err(|err| {
        log::error!("Failed to update health record {id}: {err}");
        err.into()
    })
}

/// Closes an active treatment with the chosen outcome.
pub fn complete_treatment<R>(
    repo: &R,
    id: &str,
    form: CompleteTreatmentForm,
) -> ServiceResult<HealthRecord>
where
    R: HealthRecordReader + HealthRecordWriter + ?Sized,
{
    let id = HealthRecordId::new(id)?;
    let current = repo.get_health_record(&id)?.ok_or(ServiceError::NotFound)?;
    if !current.status.is_completable() {
        log::error!("Health record {id} cannot be completed from {}", current.status);
        return Err(ServiceError::Conflict(format!(
            "health record {id} is {}",
            current.status
        )));
    }

    let completion = TreatmentCompletion::try_from(form).map_err(|err| {
        log::error!("Failed to validate treatment completion: {err}");
        ServiceError::from(err)
    })?;

    let record = repo.complete_health_record(&id, &completion).map_err(|err| {
        log::error!("Failed to complete health record {id}: {err}");
        err
    })?;

    log::info!("Health record {id} closed as {}", record.status);
    Ok(record)
}

pub fn delete_health_record<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: HealthRecordWriter + ?Sized,
{
    let id = HealthRecordId::new(id)?;
    repo.delete_health_record(&id).map_err(|err| {
        log::error!("Failed to delete health record {id}: {err}");
        err
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::{AnimalName, AnimalTag, VaccineName};
    use crate::repository::mock::MockRepository;

    fn vaccination(status: VaccinationStatus) -> Vaccination {
        Vaccination {
            id: VaccinationId::new("VAC001").unwrap(),
            animal_tag: AnimalTag::new("COW001").unwrap(),
            animal_name: AnimalName::new("Bella").unwrap(),
            vaccine: VaccineName::new("FMD Vaccine").unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            last_vaccinated: None,
            status,
            completion: None,
        }
    }

    fn completion_form() -> CompleteVaccinationForm {
        CompleteVaccinationForm {
            completion_date: "2024-06-14".into(),
            veterinarian: "Dr. Smith".into(),
            batch_number: None,
            next_due_date: None,
            reaction: Some("Mild".into()),
            notes: None,
        }
    }

    #[test]
    fn completing_finished_vaccination_conflicts() {
        let mut repo = MockRepository::new();
        repo.expect_get_vaccination()
            .returning(|_| Ok(Some(vaccination(VaccinationStatus::Completed))));
        repo.expect_complete_vaccination().never();

        let result = complete_vaccination(&repo, "VAC001", completion_form());
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn completing_due_vaccination_persists_completion() {
        let mut repo = MockRepository::new();
        repo.expect_get_vaccination()
            .returning(|_| Ok(Some(vaccination(VaccinationStatus::Due))));
        repo.expect_complete_vaccination()
            .times(1)
            .returning(|_, completion| {
                let mut v = vaccination(VaccinationStatus::Due);
                v.complete(completion.clone());
                Ok(v)
            });

        let result = complete_vaccination(&repo, "VAC001", completion_form()).unwrap();
        assert_eq!(result.status, VaccinationStatus::Completed);
        assert_eq!(
            result.last_vaccinated,
            NaiveDate::from_ymd_opt(2024, 6, 14)
        );
    }

    #[test]
    fn completing_missing_vaccination_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_vaccination().returning(|_| Ok(None));

        let result = complete_vaccination(&repo, "VAC404", completion_form());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn status_change_rejects_malformed_id() {
        let repo = MockRepository::new();
        let result = change_vaccination_status(&repo, "VACX", "Due");
        assert!(matches!(result, Err(ServiceError::TypeConstraint(_))));
    }
}
