//! In-memory implementation of the vaccination schedule store.

use crate::domain::status::VaccinationStatus;
use crate::domain::types::VaccinationId;
use crate::domain::vaccination::{NewVaccination, Vaccination, VaccinationCompletion};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    InMemoryRepository, VaccinationReader, VaccinationWriter, ensure_completable, remove_where,
    try_update_where, update_where,
};

impl VaccinationReader for InMemoryRepository {
    fn list_vaccinations(&self) -> RepositoryResult<Vec<Vaccination>> {
        Ok(self.read()?.vaccinations.clone())
    }

    fn get_vaccination(&self, id: &VaccinationId) -> RepositoryResult<Option<Vaccination>> {
        let store = self.read()?;
        Ok(store.vaccinations.iter().find(|v| &v.id == id).cloned())
    }
}

impl VaccinationWriter for InMemoryRepository {
    fn create_vaccination(
        &self,
        new_vaccination: &NewVaccination,
    ) -> RepositoryResult<Vaccination> {
        let mut store = self.write()?;
        let id = VaccinationId::next_after(store.vaccinations.iter().map(|v| &v.id))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let vaccination = new_vaccination.clone().into_vaccination(id);
        store.vaccinations.push(vaccination.clone());
        Ok(vaccination)
    }

    fn update_vaccination_status(
        &self,
        id: &VaccinationId,
        status: VaccinationStatus,
    ) -> RepositoryResult<Vaccination> {
        let mut store = self.write()?;
        update_where(&mut store.vaccinations, |v| &v.id == id, |v| v.status = status)
    }

    fn complete_vaccination(
        &self,
        id: &VaccinationId,
        completion: &VaccinationCompletion,
    ) -> RepositoryResult<Vaccination> {
        let mut store = self.write()?;
        try_update_where(
            &mut store.vaccinations,
            |v| &v.id == id,
            |v| {
                ensure_completable("vaccination", id, v.status)?;
                v.complete(completion.clone());
                Ok(())
            },
        )
    }

    fn delete_vaccination(&self, id: &VaccinationId) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.vaccinations, |v| &v.id == id)?;
        Ok(())
    }
}
