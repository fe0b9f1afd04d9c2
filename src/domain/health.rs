use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status::HealthStatus;
use crate::domain::types::{
    AnimalName, AnimalTag, ConditionName, HealthRecordId, Notes, Severity, VeterinarianName,
};
use crate::filter::{Filterable, Searchable};

/// Diagnosed condition and its treatment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    pub id: HealthRecordId,
    pub animal_tag: AnimalTag,
    pub animal_name: AnimalName,
    pub condition: ConditionName,
    pub severity: Option<Severity>,
    pub treatment: String,
    pub vet: VeterinarianName,
    pub date: NaiveDate,
    pub status: HealthStatus,
    pub completion: Option<TreatmentCompletion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewHealthRecord {
    pub animal_tag: AnimalTag,
    pub animal_name: AnimalName,
    pub condition: ConditionName,
    pub severity: Option<Severity>,
    pub treatment: String,
    pub vet: VeterinarianName,
    pub date: NaiveDate,
}

impl NewHealthRecord {
    /// New records always start under treatment.
    #[must_use]
    pub fn into_record(self, id: HealthRecordId) -> HealthRecord {
        HealthRecord {
            id,
            animal_tag: self.animal_tag,
            animal_name: self.animal_name,
            condition: self.condition,
            severity: self.severity,
            treatment: self.treatment,
            vet: self.vet,
            date: self.date,
            status: HealthStatus::UnderTreatment,
            completion: None,
        }
    }
}

/// Details captured when a treatment is closed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TreatmentCompletion {
    pub treatment_date: NaiveDate,
    pub veterinarian: VeterinarianName,
    pub treatment: String,
    pub medication: Option<String>,
    pub dosage: Option<String>,
    pub outcome: HealthStatus,
    pub follow_up_date: Option<NaiveDate>,
    pub notes: Notes,
}

impl HealthRecord {
    pub fn complete(&mut self, completion: TreatmentCompletion) {
        self.status = completion.outcome;
        self.treatment = completion.treatment.clone();
        self.completion = Some(completion);
    }
}

impl Searchable for HealthRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.animal_tag.as_str(),
            self.animal_name.as_str(),
            self.condition.as_str(),
            self.vet.as_str(),
        ]
    }
}

impl Filterable for HealthRecord {
    type Category = HealthStatus;

    fn category(&self) -> &HealthStatus {
        &self.status
    }
}
