//! Animal inventory operations.

use crate::domain::animal::Animal;
use crate::domain::status::AnimalStatus;
use crate::domain::types::AnimalTag;
use crate::dto::list::{ListPageData, ListQuery, StatusRow};
use crate::forms::livestock::{AddAnimalForm, AddAnimalPayload};
use crate::models::config::DashboardConfig;
use crate::repository::{AnimalReader, AnimalWriter};
use crate::services::{ServiceError, ServiceResult, build_list_page};

/// Loads the filtered, paginated animal table.
pub fn list_animals<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<Animal>>>
where
    R: AnimalReader + ?Sized,
{
    let animals = repo.list_animals().map_err(|err| {
        log::error!("Failed to list animals: {err}");
        err
    })?;

    let page = build_list_page(animals, query, config.items_per_page)?;
    Ok(page.map_items(|animal| {
        let status = animal.status;
        StatusRow::new(animal, status)
    }))
}

pub fn get_animal<R>(repo: &R, tag: &str) -> ServiceResult<Animal>
where
    R: AnimalReader + ?Sized,
{
    let tag = AnimalTag::new(tag)?;
    repo.get_animal(&tag)?.ok_or(ServiceError::NotFound)
}

/// Validates the form and registers the animal under the next free tag.
pub fn add_animal<R>(repo: &R, form: AddAnimalForm) -> ServiceResult<Animal>
where
    R: AnimalWriter + ?Sized,
{
    let payload = AddAnimalPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate animal form: {err}");
        ServiceError::from(err)
    })?;

    let animal = repo.create_animal(&payload.into_domain()).map_err(|err| {
        log::error!("Failed to add an animal: {err}");
        err
    })?;

    log::info!("Registered animal {} ({})", animal.tag, animal.name);
    Ok(animal)
}

pub fn change_animal_status<R>(repo: &R, tag: &str, status: &str) -> ServiceResult<Animal>
where
    R: AnimalWriter + ?Sized,
{
    let tag = AnimalTag::new(tag)?;
    let status: AnimalStatus = status.parse()?;

    let animal = repo.update_animal_status(&tag, status).map_err(|err| {
        log::error!("Failed to update status of animal {tag}: {err}");
        err
    })?;

    log::info!("Animal {tag} is now {status}");
    Ok(animal)
}

pub fn delete_animal<R>(repo: &R, tag: &str) -> ServiceResult<()>
where
    R: AnimalWriter + ?Sized,
{
    let tag = AnimalTag::new(tag)?;
    repo.delete_animal(&tag).map_err(|err| {
        log::error!("Failed to delete animal {tag}: {err}");
        err
    })?;
    Ok(())
}
