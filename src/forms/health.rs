//! Forms for vaccinations and treatments.

use serde::Deserialize;
use validator::Validate;

use crate::domain::health::{NewHealthRecord, TreatmentCompletion};
use crate::domain::status::{HealthStatus, Status, VaccinationStatus};
use crate::domain::types::{
    AnimalName, AnimalTag, ConditionName, Notes, Severity, VaccineName, VaccineReaction,
    VeterinarianName,
};
use crate::domain::vaccination::{NewVaccination, VaccinationCompletion};
use crate::forms::{FormError, optional_text, parse_date, parse_optional_date};

#[derive(Debug, Deserialize, Validate)]
/// Form data for scheduling a vaccination.
pub struct AddVaccinationForm {
    pub animal_tag: String,
    #[validate(length(min = 1, max = 64))]
    pub animal_name: String,
    #[validate(length(min = 1, max = 128))]
    pub vaccine: String,
    pub due_date: String,
    #[serde(default)]
    pub last_vaccinated: Option<String>,
    /// Defaults to `Scheduled` when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

pub struct AddVaccinationPayload {
    pub vaccination: NewVaccination,
}

impl TryFrom<AddVaccinationForm> for AddVaccinationPayload {
    type Error = FormError;

    fn try_from(form: AddVaccinationForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let status = match form.status.as_deref().map(str::trim) {
            None | Some("") => VaccinationStatus::Scheduled,
            Some(value) => value
                .parse()
                .map_err(|_| FormError::InvalidStatus(value.to_string()))?,
        };

        Ok(Self {
            vaccination: NewVaccination {
                animal_tag: AnimalTag::new(form.animal_tag)
                    .map_err(|_| FormError::InvalidRecordId)?,
                animal_name: AnimalName::new(form.animal_name)
                    .map_err(|_| FormError::InvalidName)?,
                vaccine: VaccineName::new(form.vaccine).map_err(|_| FormError::InvalidName)?,
                due_date: parse_date(&form.due_date)?,
                last_vaccinated: parse_optional_date(form.last_vaccinated.as_deref())?,
                status,
            },
        })
    }
}

impl AddVaccinationPayload {
    pub fn into_domain(self) -> NewVaccination {
        self.vaccination
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data submitted from the vaccination completion dialog.
pub struct CompleteVaccinationForm {
    pub completion_date: String,
    #[validate(length(min = 1, max = 128))]
    pub veterinarian: String,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub next_due_date: Option<String>,
    /// `None`, `Mild`, `Moderate` or `Severe`; defaults to `None`.
    #[serde(default)]
    pub reaction: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl TryFrom<CompleteVaccinationForm> for VaccinationCompletion {
    type Error = FormError;

    fn try_from(form: CompleteVaccinationForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let reaction = match optional_text(form.reaction) {
            None => VaccineReaction::NoReaction,
            Some(value) => value
                .parse()
                .map_err(|_| FormError::InvalidOption(value.clone()))?,
        };

        Ok(Self {
            completion_date: parse_date(&form.completion_date)?,
            veterinarian: VeterinarianName::new(form.veterinarian)
                .map_err(|_| FormError::InvalidName)?,
            batch_number: optional_text(form.batch_number),
            next_due_date: parse_optional_date(form.next_due_date.as_deref())?,
            reaction,
            notes: Notes::new(form.notes.unwrap_or_default()),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for opening a treatment record.
pub struct AddHealthRecordForm {
    pub animal_tag: String,
    #[validate(length(min = 1, max = 64))]
    pub animal_name: String,
    #[validate(length(min = 1, max = 128))]
    pub condition: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[validate(length(max = 500))]
    pub treatment: String,
    #[validate(length(min = 1, max = 128))]
    pub vet: String,
    pub date: String,
}

pub struct AddHealthRecordPayload {
    pub record: NewHealthRecord,
}

impl TryFrom<AddHealthRecordForm> for AddHealthRecordPayload {
    type Error = FormError;

    fn try_from(form: AddHealthRecordForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let severity = optional_text(form.severity)
            .map(|value| {
                value
                    .parse::<Severity>()
                    .map_err(|_| FormError::InvalidOption(value.clone()))
            })
            .transpose()?;

        Ok(Self {
            record: NewHealthRecord {
                animal_tag: AnimalTag::new(form.animal_tag)
                    .map_err(|_| FormError::InvalidRecordId)?,
                animal_name: AnimalName::new(form.animal_name)
                    .map_err(|_| FormError::InvalidName)?,
                condition: ConditionName::new(form.condition)
                    .map_err(|_| FormError::InvalidName)?,
                severity,
                treatment: form.treatment.trim().to_string(),
                vet: VeterinarianName::new(form.vet).map_err(|_| FormError::InvalidName)?,
                date: parse_date(&form.date)?,
            },
        })
    }
}

impl AddHealthRecordPayload {
    pub fn into_domain(self) -> NewHealthRecord {
        self.record
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data submitted from the treatment completion dialog.
pub struct CompleteTreatmentForm {
    pub treatment_date: String,
    #[validate(length(min = 1, max = 128))]
    pub veterinarian: String,
    #[validate(length(min = 1, max = 500))]
    pub treatment: String,
    #[serde(default)]
    pub medication: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    /// Any status other than `Under Treatment`.
    pub outcome: String,
    #[serde(default)]
    pub follow_up_date: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl TryFrom<CompleteTreatmentForm> for TreatmentCompletion {
    type Error = FormError;

    fn try_from(form: CompleteTreatmentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let outcome: HealthStatus = form
            .outcome
            .parse()
            .map_err(|_| FormError::InvalidStatus(form.outcome.clone()))?;
        if outcome.is_completable() {
            return Err(FormError::InvalidStatus(form.outcome));
        }

        Ok(Self {
            treatment_date: parse_date(&form.treatment_date)?,
            veterinarian: VeterinarianName::new(form.veterinarian)
                .map_err(|_| FormError::InvalidName)?,
            treatment: form.treatment.trim().to_string(),
            medication: optional_text(form.medication),
            dosage: optional_text(form.dosage),
            outcome,
            follow_up_date: parse_optional_date(form.follow_up_date.as_deref())?,
            notes: Notes::new(form.notes.unwrap_or_default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion_form(outcome: &str) -> CompleteTreatmentForm {
        CompleteTreatmentForm {
            treatment_date: "2024-05-25".into(),
            veterinarian: "Dr. Smith".into(),
            treatment: "Antibiotics".into(),
            medication: Some("Penicillin".into()),
            dosage: Some(" ".into()),
            outcome: outcome.into(),
            follow_up_date: None,
            notes: Some("<script>alert(1)</script>Recovering well".into()),
        }
    }

    #[test]
    fn vaccination_defaults_to_scheduled() {
        let form = AddVaccinationForm {
            animal_tag: "cow001".into(),
            animal_name: "Bella".into(),
            vaccine: "FMD Vaccine".into(),
            due_date: "2024-06-15".into(),
            last_vaccinated: Some(String::new()),
            status: None,
        };
        let new = AddVaccinationPayload::try_from(form).unwrap().into_domain();
        assert_eq!(new.animal_tag.as_str(), "COW001");
        assert_eq!(new.status, VaccinationStatus::Scheduled);
        assert_eq!(new.last_vaccinated, None);
    }

    #[test]
    fn vaccination_completion_defaults_reaction() {
        let form = CompleteVaccinationForm {
            completion_date: "2024-06-14".into(),
            veterinarian: "Dr. Smith".into(),
            batch_number: Some("LOT-42".into()),
            next_due_date: Some("2024-12-14".into()),
            reaction: None,
            notes: None,
        };
        let completion = VaccinationCompletion::try_from(form).unwrap();
        assert_eq!(completion.reaction, VaccineReaction::NoReaction);
        assert_eq!(completion.batch_number.as_deref(), Some("LOT-42"));
        assert!(completion.notes.is_empty());
    }

    #[test]
    fn treatment_completion_sanitizes_notes() {
        let completion = TreatmentCompletion::try_from(completion_form("Recovered")).unwrap();
        assert_eq!(completion.outcome, HealthStatus::Recovered);
        assert_eq!(completion.dosage, None);
        assert_eq!(completion.notes.as_str(), "Recovering well");
    }

    #[test]
    fn treatment_outcome_cannot_stay_under_treatment() {
        assert!(matches!(
            TreatmentCompletion::try_from(completion_form("Under Treatment")),
            Err(FormError::InvalidStatus(_))
        ));
        assert!(matches!(
            TreatmentCompletion::try_from(completion_form("Healed")),
            Err(FormError::InvalidStatus(_))
        ));
    }

    #[test]
    fn health_record_rejects_bad_tag() {
        let form = AddHealthRecordForm {
            animal_tag: "BULL1".into(),
            animal_name: "Daisy".into(),
            condition: "Mastitis".into(),
            severity: Some("severe".into()),
            treatment: "Antibiotics".into(),
            vet: "Dr. Smith".into(),
            date: "2024-05-20".into(),
        };
        assert!(matches!(
            AddHealthRecordPayload::try_from(form),
            Err(FormError::InvalidRecordId)
        ));
    }
}
