//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDate;
use mockall::mock;

use crate::domain::animal::{Animal, NewAnimal};
use crate::domain::breeding::{
    BirthRecord, BreedingConfirmation, BreedingRecord, NewBirthRecord, NewBreedingRecord,
};
use crate::domain::health::{HealthRecord, NewHealthRecord, TreatmentCompletion};
use crate::domain::production::{FeedRecord, MilkRecord, NewFeedRecord};
use crate::domain::status::{
    AnimalStatus, BirthStatus, BreedingStatus, HealthStatus, VaccinationStatus,
};
use crate::domain::transaction::{NewTransaction, Transaction};
use crate::domain::types::{
    AnimalTag, BreedingRecordId, CalfTag, FeedRecordId, HealthRecordId, TransactionId,
    VaccinationId,
};
use crate::domain::vaccination::{NewVaccination, Vaccination, VaccinationCompletion};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AnimalReader, AnimalWriter, BreedingReader, BreedingWriter, HealthRecordReader,
    HealthRecordWriter, ProductionReader, ProductionWriter, TransactionReader, TransactionWriter,
    VaccinationReader, VaccinationWriter,
};

mock! {
    pub Repository {}

    impl AnimalReader for Repository {
        fn list_animals(&self) -> RepositoryResult<Vec<Animal>>;
        fn get_animal(&self, tag: &AnimalTag) -> RepositoryResult<Option<Animal>>;
    }

    impl AnimalWriter for Repository {
        fn create_animal(&self, new_animal: &NewAnimal) -> RepositoryResult<Animal>;
        fn update_animal_status(
            &self,
            tag: &AnimalTag,
            status: AnimalStatus,
        ) -> RepositoryResult<Animal>;
        fn delete_animal(&self, tag: &AnimalTag) -> RepositoryResult<()>;
    }

    impl VaccinationReader for Repository {
        fn list_vaccinations(&self) -> RepositoryResult<Vec<Vaccination>>;
        fn get_vaccination(&self, id: &VaccinationId) -> RepositoryResult<Option<Vaccination>>;
    }

    impl VaccinationWriter for Repository {
        fn create_vaccination(
            &self,
            new_vaccination: &NewVaccination,
        ) -> RepositoryResult<Vaccination>;
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

    impl HealthRecordReader for Repository {
        fn list_health_records(&self) -> RepositoryResult<Vec<HealthRecord>>;
        fn get_health_record(&self, id: &HealthRecordId) -> RepositoryResult<Option<HealthRecord>>;
    }

    impl HealthRecordWriter for Repository {
        fn create_health_record(
            &self,
            new_record: &NewHealthRecord,
        ) -> RepositoryResult<HealthRecord>;
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

    impl BreedingReader for Repository {
        fn list_breeding_records(&self) -> RepositoryResult<Vec<BreedingRecord>>;
        fn get_breeding_record(
            &self,
            id: &BreedingRecordId,
        ) -> RepositoryResult<Option<BreedingRecord>>;
        fn list_birth_records(&self) -> RepositoryResult<Vec<BirthRecord>>;
    }

    impl BreedingWriter for Repository {
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

    impl ProductionReader for Repository {
        fn list_milk_records(&self) -> RepositoryResult<Vec<MilkRecord>>;
        fn list_feed_records(&self) -> RepositoryResult<Vec<FeedRecord>>;
    }

    impl ProductionWriter for Repository {
        fn create_milk_record(&self, record: &MilkRecord) -> RepositoryResult<MilkRecord>;
        fn delete_milk_record(
            &self,
            animal_tag: &AnimalTag,
            date: NaiveDate,
        ) -> RepositoryResult<()>;
        fn create_feed_record(&self, new_record: &NewFeedRecord) -> RepositoryResult<FeedRecord>;
        fn delete_feed_record(&self, id: &FeedRecordId) -> RepositoryResult<()>;
    }

    impl TransactionReader for Repository {
        fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
        fn get_transaction(&self, id: &TransactionId) -> RepositoryResult<Option<Transaction>>;
    }

    impl TransactionWriter for Repository {
        fn create_transaction(
            &self,
            new_transaction: &NewTransaction,
        ) -> RepositoryResult<Transaction>;
        fn delete_transaction(&self, id: &TransactionId) -> RepositoryResult<()>;
    }
}
