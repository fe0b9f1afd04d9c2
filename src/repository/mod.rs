//! Data access seams for every record kind.
//!
//! Services are generic over the reader/writer traits below so they work the
//! same against the in-memory store, a future database backend, or mocks.

use std::fmt::Display;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::domain::animal::{Animal, NewAnimal};
use crate::domain::breeding::{
    BirthRecord, BreedingConfirmation, BreedingRecord, NewBirthRecord, NewBreedingRecord,
};
use crate::domain::health::{HealthRecord, NewHealthRecord, TreatmentCompletion};
use crate::domain::production::{FeedRecord, MilkRecord, NewFeedRecord};
use crate::domain::status::{
    AnimalStatus, BirthStatus, BreedingStatus, HealthStatus, Status, VaccinationStatus,
};
use crate::domain::transaction::{NewTransaction, Transaction};
use crate::domain::types::{
    AnimalTag, BreedingRecordId, CalfTag, FeedRecordId, HealthRecordId, TransactionId,
    VaccinationId,
};
use crate::domain::vaccination::{NewVaccination, Vaccination, VaccinationCompletion};
use crate::repository::errors::RepositoryResult;

pub mod animal;
pub mod breeding;
pub mod errors;
pub mod health;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod production;
pub mod seed;
pub mod transaction;
pub mod vaccination;

/// Records held by [`InMemoryRepository`], in insertion order.
#[derive(Debug, Default, Clone)]
pub struct FarmStore {
    pub animals: Vec<Animal>,
    pub vaccinations: Vec<Vaccination>,
    pub health_records: Vec<HealthRecord>,
    pub breeding_records: Vec<BreedingRecord>,
    pub birth_records: Vec<BirthRecord>,
    pub milk_records: Vec<MilkRecord>,
    pub feed_records: Vec<FeedRecord>,
    pub transactions: Vec<Transaction>,
}

/// Process-local store shared by clones of the handle.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<FarmStore>>,
}

impl InMemoryRepository {
    pub fn new(store: FarmStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Store pre-filled with the demo herd and ledger.
    pub fn with_sample_data() -> Self {
        Self::new(seed::sample_store())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, FarmStore>> {
        Ok(self.store.read()?)
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, FarmStore>> {
        Ok(self.store.write()?)
    }
}

pub trait AnimalReader {
    fn list_animals(&self) -> RepositoryResult<Vec<Animal>>;
    fn get_animal(&self, tag: &AnimalTag) -> RepositoryResult<Option<Animal>>;
}

pub trait AnimalWriter {
    fn create_animal(&self, new_animal: &NewAnimal) -> RepositoryResult<Animal>;
    fn update_animal_status(
        &self,
        tag: &AnimalTag,
        status: AnimalStatus,
    ) -> RepositoryResult<Animal>;
    fn delete_animal(&self, tag: &AnimalTag) -> RepositoryResult<()>;
}

pub trait VaccinationReader {
    fn list_vaccinations(&self) -> RepositoryResult<Vec<Vaccination>>;
    fn get_vaccination(&self, id: &VaccinationId) -> RepositoryResult<Option<Vaccination>>;
}

pub trait VaccinationWriter {
    fn create_vaccination(&self, new_vaccination: &NewVaccination)
    -> RepositoryResult<Vaccination>;
    fn update_vaccination_status(
        &self,
        id: &VaccinationId,
        status: VaccinationStatus,
    ) -> RepositoryResult<Vaccination>;
    fn complete_vaccination(
        &self,
        id: &VaccinationId,
        completion: &VaccinationCompletion,
    ) -> RepositoryResult<Vaccination>;
    fn delete_vaccination(&self, id: &VaccinationId) -> RepositoryResult<()>;
}

pub trait HealthRecordReader {
    fn list_health_records(&self) -> RepositoryResult<Vec<HealthRecord>>;
    fn get_health_record(&self, id: &HealthRecordId) -> RepositoryResult<Option<HealthRecord>>;
}

pub trait HealthRecordWriter {
    fn create_health_record(&self, new_record: &NewHealthRecord)
    -> RepositoryResult<HealthRecord>;
    fn update_health_status(
        &self,
        id: &HealthRecordId,
        status: HealthStatus,
    ) -> RepositoryResult<HealthRecord>;
    fn complete_health_record(
        &self,
        id: &HealthRecordId,
        completion: &TreatmentCompletion,
    ) -> RepositoryResult<HealthRecord>;
    fn delete_health_record(&self, id: &HealthRecordId) -> RepositoryResult<()>;
}

pub trait BreedingReader {
    fn list_breeding_records(&self) -> RepositoryResult<Vec<BreedingRecord>>;
    fn get_breeding_record(&self, id: &BreedingRecordId)
    -> RepositoryResult<Option<BreedingRecord>>;
    fn list_birth_records(&self) -> RepositoryResult<Vec<BirthRecord>>;
}

pub trait BreedingWriter {
    fn create_breeding_record(
        &self,
        new_record: &NewBreedingRecord,
    ) -> RepositoryResult<BreedingRecord>;
    fn update_breeding_status(
        &self,
        id: &BreedingRecordId,
        status: BreedingStatus,
    ) -> RepositoryResult<BreedingRecord>;
    fn complete_breeding_record(
        &self,
        id: &BreedingRecordId,
        confirmation: &BreedingConfirmation,
    ) -> RepositoryResult<BreedingRecord>;
    fn delete_breeding_record(&self, id: &BreedingRecordId) -> RepositoryResult<()>;
    fn create_birth_record(&self, new_record: &NewBirthRecord) -> RepositoryResult<BirthRecord>;
    fn update_birth_status(
        &self,
        calf_tag: &CalfTag,
        status: BirthStatus,
    ) -> RepositoryResult<BirthRecord>;
    fn delete_birth_record(&self, calf_tag: &CalfTag) -> RepositoryResult<()>;
}

pub trait ProductionReader {
    fn list_milk_records(&self) -> RepositoryResult<Vec<MilkRecord>>;
    fn list_feed_records(&self) -> RepositoryResult<Vec<FeedRecord>>;
}

pub trait ProductionWriter {
    fn create_milk_record(&self, record: &MilkRecord) -> RepositoryResult<MilkRecord>;
    fn delete_milk_record(&self, animal_tag: &AnimalTag, date: NaiveDate)
    -> RepositoryResult<()>;
    fn create_feed_record(&self, new_record: &NewFeedRecord) -> RepositoryResult<FeedRecord>;
    fn delete_feed_record(&self, id: &FeedRecordId) -> RepositoryResult<()>;
}

pub trait TransactionReader {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
    fn get_transaction(&self, id: &TransactionId) -> RepositoryResult<Option<Transaction>>;
}

pub trait TransactionWriter {
    fn create_transaction(&self, new_transaction: &NewTransaction)
    -> RepositoryResult<Transaction>;
    fn delete_transaction(&self, id: &TransactionId) -> RepositoryResult<()>;
}

/// Removes the first element matching `predicate`, or reports `NotFound`.
fn remove_where<T, P>(items: &mut Vec<T>, predicate: P) -> RepositoryResult<T>
where
    P: Fn(&T) -> bool,
{
    let index = items
        .iter()
        .position(predicate)
        .ok_or(errors::RepositoryError::NotFound)?;
    Ok(items.remove(index))
}

/// Applies `update` to the first element matching `predicate` and returns a copy.
fn update_where<T, P, F>(items: &mut [T], predicate: P, update: F) -> RepositoryResult<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    F: FnOnce(&mut T),
{
    try_update_where(items, predicate, |item| {
        update(item);
        Ok(())
    })
}

/// Like [`update_where`], but `update` may refuse the change, leaving the
/// element untouched.
fn try_update_where<T, P, F>(items: &mut [T], predicate: P, update: F) -> RepositoryResult<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
    F: FnOnce(&mut T) -> RepositoryResult<()>,
{
    let item = items
        .iter_mut()
        .find(|item| predicate(item))
        .ok_or(errors::RepositoryError::NotFound)?;
    update(item)?;
    Ok(item.clone())
}

/// Rejects completing a record whose status no longer allows it.
fn ensure_completable<S: Status>(
    kind: &str,
    id: &impl Display,
    status: S,
) -> RepositoryResult<()> {
    if status.is_completable() {
        Ok(())
    } else {
        Err(errors::RepositoryError::Conflict(format!(
            "{kind} {id} is {}",
            status.label()
        )))
    }
}
