//! In-memory implementation of milk and feed logs.

use chrono::NaiveDate;

use crate::domain::production::{FeedRecord, MilkRecord, NewFeedRecord};
use crate::domain::types::{AnimalTag, FeedRecordId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{InMemoryRepository, ProductionReader, ProductionWriter, remove_where};

impl ProductionReader for InMemoryRepository {
    fn list_milk_records(&self) -> RepositoryResult<Vec<MilkRecord>> {
        Ok(self.read()?.milk_records.clone())
    }

    fn list_feed_records(&self) -> RepositoryResult<Vec<FeedRecord>> {
        Ok(self.read()?.feed_records.clone())
    }
}

impl ProductionWriter for InMemoryRepository {
    fn create_milk_record(&self, record: &MilkRecord) -> RepositoryResult<MilkRecord> {
        let mut store = self.write()?;
        if store
            .milk_records
            .iter()
            .any(|r| r.same_entry(&record.animal_tag, record.date))
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "milk already recorded for {} on {}",
                record.animal_tag, record.date
            )));
        }
        store.milk_records.push(record.clone());
        Ok(record.clone())
    }

    fn delete_milk_record(&self, animal_tag: &AnimalTag, date: NaiveDate) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.milk_records, |r| r.same_entry(animal_tag, date))?;
        Ok(())
    }

    fn create_feed_record(&self, new_record: &NewFeedRecord) -> RepositoryResult<FeedRecord> {
        let mut store = self.write()?;
        let id = FeedRecordId::next_after(store.feed_records.iter().map(|r| &r.id))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let record = new_record.clone().into_record(id);
        store.feed_records.push(record.clone());
        Ok(record)
    }

    fn delete_feed_record(&self, id: &FeedRecordId) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.feed_records, |r| &r.id == id)?;
        Ok(())
    }
}
