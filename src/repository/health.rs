//! In-memory implementation of the treatment record store.

use crate::domain::health::{HealthRecord, NewHealthRecord, TreatmentCompletion};
use crate::domain::status::HealthStatus;
use crate::domain::types::HealthRecordId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    HealthRecordReader, HealthRecordWriter, InMemoryRepository, ensure_completable, remove_where,
    try_update_where, update_where,
};

impl HealthRecordReader for InMemoryRepository {
    fn list_health_records(&self) -> RepositoryResult<Vec<HealthRecord>> {
        Ok(self.read()?.health_records.clone())
    }

    fn get_health_record(&self, id: &HealthRecordId) -> RepositoryResult<Option<HealthRecord>> {
        let store = self.read()?;
        Ok(store.health_records.iter().find(|r| &r.id == id).cloned())
    }
}

impl HealthRecordWriter for InMemoryRepository {
    fn create_health_record(
        &self,
        new_record: &NewHealthRecord,
    ) -> RepositoryResult<HealthRecord> {
        let mut store = self.write()?;
        let id = HealthRecordId::next_after(store.health_records.iter().map(|r| &r.id))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let record = new_record.clone().into_record(id);
        store.health_records.push(record.clone());
        Ok(record)
    }

    fn update_health_status(
        &self,
        id: &HealthRecordId,
        status: HealthStatus,
    ) -> RepositoryResult<HealthRecord> {
        let mut store = self.write()?;
        update_where(&mut store.health_records, |r| &r.id == id, |r| r.status = status)
    }

    fn complete_health_record(
        &self,
        id: &HealthRecordId,
        completion: &TreatmentCompletion,
    ) -> RepositoryResult<HealthRecord> {
        let mut store = self.write()?;
        try_update_where(
            &mut store.health_records,
            |r| &r.id == id,
            |r| {
                ensure_completable("health record", id, r.status)?;
                r.complete(completion.clone());
                Ok(())
            },
        )
    }

    fn delete_health_record(&self, id: &HealthRecordId) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.health_records, |r| &r.id == id)?;
        Ok(())
    }
}
