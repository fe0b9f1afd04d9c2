use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status::VaccinationStatus;
use crate::domain::types::{
    AnimalName, AnimalTag, Notes, VaccinationId, VaccineName, VaccineReaction, VeterinarianName,
};
use crate::filter::{Filterable, Searchable};

/// Scheduled or administered vaccination for one animal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vaccination {
    pub id: VaccinationId,
    pub animal_tag: AnimalTag,
    pub animal_name: AnimalName,
    pub vaccine: VaccineName,
    pub due_date: NaiveDate,
    pub last_vaccinated: Option<NaiveDate>,
    pub status: VaccinationStatus,
    /// Filled in once the completion workflow ran.
    pub completion: Option<VaccinationCompletion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewVaccination {
    pub animal_tag: AnimalTag,
    pub animal_name: AnimalName,
    pub vaccine: VaccineName,
    pub due_date: NaiveDate,
    pub last_vaccinated: Option<NaiveDate>,
    pub status: VaccinationStatus,
}

impl NewVaccination {
    #[must_use]
    pub fn into_vaccination(self, id: VaccinationId) -> Vaccination {
        Vaccination {
            id,
            animal_tag: self.animal_tag,
            animal_name: self.animal_name,
            vaccine: self.vaccine,
            due_date: self.due_date,
            last_vaccinated: self.last_vaccinated,
            status: self.status,
            completion: None,
        }
    }
}

/// Details captured when a vaccination is administered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VaccinationCompletion {
    pub completion_date: NaiveDate,
    pub veterinarian: VeterinarianName,
    pub batch_number: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub reaction: VaccineReaction,
    pub notes: Notes,
}

impl Vaccination {
    /// Marks the vaccination as administered.
    pub fn complete(&mut self, completion: VaccinationCompletion) {
        self.last_vaccinated = Some(completion.completion_date);
        self.status = VaccinationStatus::Completed;
        self.completion = Some(completion);
    }

    /// Days left until the due date, negative once it has passed.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

impl Searchable for Vaccination {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.animal_tag.as_str(),
            self.animal_name.as_str(),
            self.vaccine.as_str(),
        ]
    }
}

impl Filterable for Vaccination {
    type Category = VaccinationStatus;

    fn category(&self) -> &VaccinationStatus {
        &self.status
    }
}
