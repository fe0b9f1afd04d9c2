//! Forms for breeding records and births.

use serde::Deserialize;
use validator::Validate;

use crate::domain::breeding::{BreedingConfirmation, NewBirthRecord, NewBreedingRecord};
use crate::domain::status::{BirthStatus, BreedingStatus};
use crate::domain::types::{
    Amount, AnimalName, AnimalTag, BreedingMethod, ConfirmationMethod, Gender, Notes, SireId,
    VeterinarianName,
};
use crate::forms::{FormError, optional_text, parse_date, parse_optional_date};

#[derive(Debug, Deserialize, Validate)]
/// Form data for recording a mating or insemination.
pub struct AddBreedingForm {
    pub female_tag: String,
    #[validate(length(min = 1, max = 64))]
    pub female_name: String,
    /// Bull tag or semen code.
    #[validate(length(min = 1, max = 64))]
    pub male_id: String,
    #[validate(length(min = 1, max = 64))]
    pub male_name: String,
    /// `Natural` or `AI`.
    pub method: String,
    pub breeding_date: String,
    #[serde(default)]
    pub expected_calving: Option<String>,
}

pub struct AddBreedingPayload {
    pub female_tag: AnimalTag,
    pub female_name: AnimalName,
    pub male_id: SireId,
    pub male_name: AnimalName,
    pub method: BreedingMethod,
    pub breeding_date: chrono::NaiveDate,
    pub expected_calving: Option<chrono::NaiveDate>,
}

impl TryFrom<AddBreedingForm> for AddBreedingPayload {
    type Error = FormError;

    fn try_from(form: AddBreedingForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let breeding_date = parse_date(&form.breeding_date)?;
        let expected_calving = parse_optional_date(form.expected_calving.as_deref())?;
        if expected_calving.is_some_and(|date| date <= breeding_date) {
            return Err(FormError::InvalidDate(
                form.expected_calving.unwrap_or_default(),
            ));
        }

        Ok(Self {
            female_tag: AnimalTag::new(form.female_tag).map_err(|_| FormError::InvalidRecordId)?,
            female_name: AnimalName::new(form.female_name).map_err(|_| FormError::InvalidName)?,
            male_id: SireId::new(form.male_id.to_uppercase())
                .map_err(|_| FormError::InvalidName)?,
            male_name: AnimalName::new(form.male_name).map_err(|_| FormError::InvalidName)?,
            method: form
                .method
                .parse()
                .map_err(|_| FormError::InvalidOption(form.method.clone()))?,
            breeding_date,
            expected_calving,
        })
    }
}

impl AddBreedingPayload {
    pub fn into_domain(self) -> NewBreedingRecord {
        NewBreedingRecord {
            female_tag: self.female_tag,
            female_name: self.female_name,
            male_id: self.male_id,
            male_name: self.male_name,
            method: self.method,
            breeding_date: self.breeding_date,
            expected_calving: self.expected_calving,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data submitted from the pregnancy confirmation dialog.
pub struct ConfirmBreedingForm {
    pub confirmation_date: String,
    /// `Ultrasound`, `Physical Exam`, `Blood Test` or `Visual`.
    pub method: String,
    #[serde(default)]
    pub expected_calving: Option<String>,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub veterinarian: Option<String>,
    pub outcome: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl TryFrom<ConfirmBreedingForm> for BreedingConfirmation {
    type Error = FormError;

    fn try_from(form: ConfirmBreedingForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let outcome: BreedingStatus = form
            .outcome
            .parse()
            .map_err(|_| FormError::InvalidStatus(form.outcome.clone()))?;
        if outcome == BreedingStatus::Breeding {
            return Err(FormError::InvalidStatus(form.outcome));
        }

        let method: ConfirmationMethod = form
            .method
            .parse()
            .map_err(|_| FormError::InvalidOption(form.method.clone()))?;

        let veterinarian = optional_text(form.veterinarian)
            .map(VeterinarianName::new)
            .transpose()
            .map_err(|_| FormError::InvalidName)?;

        Ok(Self {
            confirmation_date: parse_date(&form.confirmation_date)?,
            method,
            expected_calving: parse_optional_date(form.expected_calving.as_deref())?,
            veterinarian,
            outcome,
            notes: Notes::new(form.notes.unwrap_or_default()),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for registering a newborn calf.
pub struct AddBirthForm {
    #[validate(length(min = 1, max = 64))]
    pub calf_name: String,
    pub mother_tag: String,
    #[validate(length(min = 1, max = 64))]
    pub mother_name: String,
    pub birth_date: String,
    pub gender: String,
    #[validate(range(min = 0.0, max = 150.0))]
    pub weight_kg: f64,
    /// Defaults to `Healthy` when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

pub struct AddBirthPayload {
    pub record: NewBirthRecord,
}

impl TryFrom<AddBirthForm> for AddBirthPayload {
    type Error = FormError;

    fn try_from(form: AddBirthForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let status = match optional_text(form.status) {
            None => BirthStatus::Healthy,
            Some(value) => value
                .parse()
                .map_err(|_| FormError::InvalidStatus(value.clone()))?,
        };

        Ok(Self {
            record: NewBirthRecord {
                calf_name: AnimalName::new(form.calf_name).map_err(|_| FormError::InvalidName)?,
                mother_tag: AnimalTag::new(form.mother_tag)
                    .map_err(|_| FormError::InvalidRecordId)?,
                mother_name: AnimalName::new(form.mother_name)
                    .map_err(|_| FormError::InvalidName)?,
                birth_date: parse_date(&form.birth_date)?,
                gender: form
                    .gender
                    .parse::<Gender>()
                    .map_err(|_| FormError::InvalidOption(form.gender.clone()))?,
                weight_kg: Amount::new(form.weight_kg).map_err(|_| FormError::InvalidAmount)?,
                status,
            },
        })
    }
}

impl AddBirthPayload {
    pub fn into_domain(self) -> NewBirthRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breeding_form() -> AddBreedingForm {
        AddBreedingForm {
            female_tag: "COW001".into(),
            female_name: "Bella".into(),
            male_id: "bull001".into(),
            male_name: "Thunder".into(),
            method: "AI".into(),
            breeding_date: "2024-03-15".into(),
            expected_calving: None,
        }
    }

    #[test]
    fn breeding_form_converts() {
        let new = AddBreedingPayload::try_from(breeding_form())
            .unwrap()
            .into_domain();
        assert_eq!(new.method, BreedingMethod::ArtificialInsemination);
        assert_eq!(new.male_id.as_str(), "BULL001");
        assert_eq!(new.expected_calving, None);
    }

    #[test]
    fn calving_before_breeding_is_rejected() {
        let mut form = breeding_form();
        form.expected_calving = Some("2024-01-01".into());
        assert!(matches!(
            AddBreedingPayload::try_from(form),
            Err(FormError::InvalidDate(d)) if d == "2024-01-01"
        ));
    }

    #[test]
    fn blank_sire_is_rejected() {
        let mut form = breeding_form();
        form.male_id = "   ".into();
        assert!(matches!(
            AddBreedingPayload::try_from(form),
            Err(FormError::InvalidName)
        ));
    }

    #[test]
    fn confirmation_requires_closing_outcome() {
        let form = ConfirmBreedingForm {
            confirmation_date: "2024-05-15".into(),
            method: "Physical Exam".into(),
            expected_calving: None,
            veterinarian: Some("  ".into()),
            outcome: "Breeding".into(),
            notes: None,
        };
        assert!(matches!(
            BreedingConfirmation::try_from(form),
            Err(FormError::InvalidStatus(_))
        ));
    }

    #[test]
    fn confirmation_converts() {
        let form = ConfirmBreedingForm {
            confirmation_date: "2024-05-15".into(),
            method: "blood test".into(),
            expected_calving: Some("2024-12-20".into()),
            veterinarian: None,
            outcome: "Confirmed".into(),
            notes: None,
        };
        let confirmation = BreedingConfirmation::try_from(form).unwrap();
        assert_eq!(confirmation.method, ConfirmationMethod::BloodTest);
        assert_eq!(confirmation.outcome, BreedingStatus::Confirmed);
        assert!(confirmation.veterinarian.is_none());
    }

    #[test]
    fn birth_defaults_to_healthy() {
        let form = AddBirthForm {
            calf_name: "Little Belle".into(),
            mother_tag: "COW002".into(),
            mother_name: "Daisy".into(),
            birth_date: "2024-02-15".into(),
            gender: "Female".into(),
            weight_kg: 35.0,
            status: None,
        };
        let new = AddBirthPayload::try_from(form).unwrap().into_domain();
        assert_eq!(new.status, BirthStatus::Healthy);
        assert_eq!(new.weight_kg.get(), 35.0);
    }
}
