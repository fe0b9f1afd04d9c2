use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status::{BirthStatus, BreedingStatus};
use crate::domain::types::{
    Amount, AnimalName, AnimalTag, BreedingMethod, BreedingRecordId, CalfTag, ConfirmationMethod,
    Gender, Notes, SireId, VeterinarianName,
};
use crate::filter::{Filterable, Searchable};

/// Mating or insemination of a female and its follow-up.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BreedingRecord {
    pub id: BreedingRecordId,
    pub female_tag: AnimalTag,
    pub female_name: AnimalName,
    /// Bull tag or semen straw code; not necessarily part of the herd.
    pub male_id: SireId,
    pub male_name: AnimalName,
    pub method: BreedingMethod,
    pub breeding_date: NaiveDate,
    pub expected_calving: NaiveDate,
    pub status: BreedingStatus,
    pub confirmation: Option<BreedingConfirmation>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBreedingRecord {
    pub female_tag: AnimalTag,
    pub female_name: AnimalName,
    pub male_id: SireId,
    pub male_name: AnimalName,
    pub method: BreedingMethod,
    pub breeding_date: NaiveDate,
    pub expected_calving: Option<NaiveDate>,
}

/// Cattle gestation used when no calving date is supplied.
pub const GESTATION_DAYS: u64 = 283;

impl NewBreedingRecord {
    #[must_use]
    pub fn into_record(self, id: BreedingRecordId) -> BreedingRecord {
        let expected_calving = self.expected_calving.unwrap_or_else(|| {
            self.breeding_date
                .checked_add_days(chrono::Days::new(GESTATION_DAYS))
                .unwrap_or(self.breeding_date)
        });
        BreedingRecord {
            id,
            female_tag: self.female_tag,
            female_name: self.female_name,
            male_id: self.male_id,
            male_name: self.male_name,
            method: self.method,
            breeding_date: self.breeding_date,
            expected_calving,
            status: BreedingStatus::Breeding,
            confirmation: None,
        }
    }
}

/// Result of the pregnancy check closing a breeding attempt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BreedingConfirmation {
    pub confirmation_date: NaiveDate,
    pub method: ConfirmationMethod,
    pub expected_calving: Option<NaiveDate>,
    pub veterinarian: Option<VeterinarianName>,
    pub outcome: BreedingStatus,
    pub notes: Notes,
}

impl BreedingRecord {
    pub fn complete(&mut self, confirmation: BreedingConfirmation) {
        if let Some(date) = confirmation.expected_calving {
            self.expected_calving = date;
        }
        self.status = confirmation.outcome;
        self.confirmation = Some(confirmation);
    }

    /// Whether a calf is still expected from this record.
    pub fn is_expecting(&self) -> bool {
        matches!(
            self.status,
            BreedingStatus::Pregnant | BreedingStatus::Confirmed
        )
    }

    /// Stage of the gestation in whole months since breeding.
    pub fn gestation_months(&self, today: NaiveDate) -> i64 {
        (today - self.breeding_date).num_days().max(0) / 30
    }
}

impl Searchable for BreedingRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.female_tag.as_str(),
            self.female_name.as_str(),
            self.male_name.as_str(),
        ]
    }
}

impl Filterable for BreedingRecord {
    type Category = BreedingStatus;

    fn category(&self) -> &BreedingStatus {
        &self.status
    }
}

/// Calf registered at birth.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BirthRecord {
    pub calf_tag: CalfTag,
    pub calf_name: AnimalName,
    pub mother_tag: AnimalTag,
    pub mother_name: AnimalName,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub weight_kg: Amount,
    pub status: BirthStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBirthRecord {
    pub calf_name: AnimalName,
    pub mother_tag: AnimalTag,
    pub mother_name: AnimalName,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub weight_kg: Amount,
    pub status: BirthStatus,
}

impl NewBirthRecord {
    #[must_use]
    pub fn into_record(self, calf_tag: CalfTag) -> BirthRecord {
        BirthRecord {
            calf_tag,
            calf_name: self.calf_name,
            mother_tag: self.mother_tag,
            mother_name: self.mother_name,
            birth_date: self.birth_date,
            gender: self.gender,
            weight_kg: self.weight_kg,
            status: self.status,
        }
    }
}

impl Searchable for BirthRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.mother_tag.as_str(),
            self.mother_name.as_str(),
            self.calf_tag.as_str(),
            self.calf_name.as_str(),
        ]
    }
}

impl Filterable for BirthRecord {
    type Category = BirthStatus;

    fn category(&self) -> &BirthStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_record(expected: Option<NaiveDate>) -> NewBreedingRecord {
        NewBreedingRecord {
            female_tag: AnimalTag::new("COW001").unwrap(),
            female_name: AnimalName::new("Bella").unwrap(),
            male_id: SireId::new("BULL001").unwrap(),
            male_name: AnimalName::new("Thunder").unwrap(),
            method: BreedingMethod::Natural,
            breeding_date: date(2024, 3, 15),
            expected_calving: expected,
        }
    }

    #[test]
    fn expected_calving_defaults_to_gestation() {
        let record = new_record(None).into_record(BreedingRecordId::from_number(1));
        assert_eq!(record.expected_calving, date(2024, 12, 23));
        assert_eq!(record.status, BreedingStatus::Breeding);
    }

    #[test]
    fn completion_applies_outcome_and_calving_date() {
        let mut record =
            new_record(Some(date(2024, 12, 15))).into_record(BreedingRecordId::from_number(1));
        record.complete(BreedingConfirmation {
            confirmation_date: date(2024, 5, 15),
            method: ConfirmationMethod::Ultrasound,
            expected_calving: Some(date(2024, 12, 20)),
            veterinarian: None,
            outcome: BreedingStatus::Confirmed,
            notes: Notes::default(),
        });
        assert_eq!(record.status, BreedingStatus::Confirmed);
        assert_eq!(record.expected_calving, date(2024, 12, 20));
        assert!(record.is_expecting());
        assert_eq!(record.gestation_months(date(2024, 5, 20)), 2);
    }
}
