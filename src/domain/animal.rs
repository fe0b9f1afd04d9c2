use serde::{Deserialize, Serialize};

use crate::domain::status::AnimalStatus;
use crate::domain::types::{AnimalName, AnimalTag, Amount, BreedName, Gender, LocationName};
use crate::filter::{Filterable, Searchable};

/// Animal registered in the livestock inventory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    pub tag: AnimalTag,
    pub name: AnimalName,
    pub breed: BreedName,
    pub age_years: u32,
    pub gender: Gender,
    pub weight_kg: Amount,
    pub status: AnimalStatus,
    pub location: LocationName,
}

/// Animal awaiting registration; the repository assigns the tag.
#[derive(Clone, Debug, Deserialize)]
pub struct NewAnimal {
    pub name: AnimalName,
    pub breed: BreedName,
    pub age_years: u32,
    pub gender: Gender,
    pub weight_kg: Amount,
    pub status: AnimalStatus,
    pub location: LocationName,
}

impl NewAnimal {
    #[must_use]
    pub fn into_animal(self, tag: AnimalTag) -> Animal {
        Animal {
            tag,
            name: self.name,
            breed: self.breed,
            age_years: self.age_years,
            gender: self.gender,
            weight_kg: self.weight_kg,
            status: self.status,
            location: self.location,
        }
    }
}

impl Searchable for Animal {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.tag.as_str(),
            self.name.as_str(),
            self.breed.as_str(),
            self.location.as_str(),
        ]
    }
}

impl Filterable for Animal {
    type Category = AnimalStatus;

    fn category(&self) -> &AnimalStatus {
        &self.status
    }
}
