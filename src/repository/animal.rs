//! In-memory implementation of the livestock inventory store.

use crate::domain::animal::{Animal, NewAnimal};
use crate::domain::status::AnimalStatus;
use crate::domain::types::AnimalTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AnimalReader, AnimalWriter, InMemoryRepository, remove_where, update_where};

impl AnimalReader for InMemoryRepository {
    fn list_animals(&self) -> RepositoryResult<Vec<Animal>> {
        Ok(self.read()?.animals.clone())
    }

    fn get_animal(&self, tag: &AnimalTag) -> RepositoryResult<Option<Animal>> {
        let store = self.read()?;
        Ok(store.animals.iter().find(|a| &a.tag == tag).cloned())
    }
}

impl AnimalWriter for InMemoryRepository {
    fn create_animal(&self, new_animal: &NewAnimal) -> RepositoryResult<Animal> {
        let mut store = self.write()?;
        let tag = AnimalTag::next_after(store.animals.iter().map(|a| &a.tag))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let animal = new_animal.clone().into_animal(tag);
        store.animals.push(animal.clone());
        log::debug!("Registered animal {}", animal.tag);
        Ok(animal)
    }

    fn update_animal_status(
        &self,
        tag: &AnimalTag,
        status: AnimalStatus,
    ) -> RepositoryResult<Animal> {
        let mut store = self.write()?;
        update_where(&mut store.animals, |a| &a.tag == tag, |a| a.status = status)
    }

    fn delete_animal(&self, tag: &AnimalTag) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.animals, |a| &a.tag == tag)?;
        Ok(())
    }
}
