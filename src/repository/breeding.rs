//! In-memory implementation of breeding and birth records.

use crate::domain::breeding::{
    BirthRecord, BreedingConfirmation, BreedingRecord, NewBirthRecord, NewBreedingRecord,
};
use crate::domain::status::{BirthStatus, BreedingStatus};
use crate::domain::types::{BreedingRecordId, CalfTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    BreedingReader, BreedingWriter, InMemoryRepository, ensure_completable, remove_where,
    try_update_where, update_where,
};

impl BreedingReader for InMemoryRepository {
    fn list_breeding_records(&self) -> RepositoryResult<Vec<BreedingRecord>> {
        Ok(self.read()?.breeding_records.clone())
    }

    fn get_breeding_record(
        &self,
        id: &BreedingRecordId,
    ) -> RepositoryResult<Option<BreedingRecord>> {
        let store = self.read()?;
        Ok(store.breeding_records.iter().find(|r| &r.id == id).cloned())
    }

    fn list_birth_records(&self) -> RepositoryResult<Vec<BirthRecord>> {
        Ok(self.read()?.birth_records.clone())
    }
}

impl BreedingWriter for InMemoryRepository {
    fn create_breeding_record(
        &self,
        new_record: &NewBreedingRecord,
    ) -> RepositoryResult<BreedingRecord> {
        let mut store = self.write()?;
        let id = BreedingRecordId::next_after(store.breeding_records.iter().map(|r| &r.id))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let record = new_record.clone().into_record(id);
        store.breeding_records.push(record.clone());
        Ok(record)
    }

    fn update_breeding_status(
        &self,
        id: &BreedingRecordId,
        status: BreedingStatus,
    ) -> RepositoryResult<BreedingRecord> {
        let mut store = self.write()?;
        update_where(&mut store.breeding_records, |r| &r.id == id, |r| r.status = status)
    }

    fn complete_breeding_record(
        &self,
        id: &BreedingRecordId,
        confirmation: &BreedingConfirmation,
    ) -> RepositoryResult<BreedingRecord> {
        let mut store = self.write()?;
        try_update_where(
            &mut store.breeding_records,
            |r| &r.id == id,
            |r| {
                ensure_completable("breeding record", id, r.status)?;
                r.complete(confirmation.clone());
                Ok(())
            },
        )
    }

    fn delete_breeding_record(&self, id: &BreedingRecordId) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.breeding_records, |r| &r.id == id)?;
        Ok(())
    }

    fn create_birth_record(&self, new_record: &NewBirthRecord) -> RepositoryResult<BirthRecord> {
        let mut store = self.write()?;
        let calf_tag = CalfTag::next_after(store.birth_records.iter().map(|r| &r.calf_tag))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let record = new_record.clone().into_record(calf_tag);
        store.birth_records.push(record.clone());
        Ok(record)
    }

    fn update_birth_status(
        &self,
        calf_tag: &CalfTag,
        status: BirthStatus,
    ) -> RepositoryResult<BirthRecord> {
        let mut store = self.write()?;
        update_where(
            &mut store.birth_records,
            |r| &r.calf_tag == calf_tag,
            |r| r.status = status,
        )
    }

    fn delete_birth_record(&self, calf_tag: &CalfTag) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.birth_records, |r| &r.calf_tag == calf_tag)?;
        Ok(())
    }
}
