//! Forms for registering animals.

use serde::Deserialize;
use validator::Validate;

use crate::domain::animal::NewAnimal;
use crate::domain::status::AnimalStatus;
use crate::domain::types::{Amount, AnimalName, BreedName, Gender, LocationName};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data for adding an animal to the inventory.
pub struct AddAnimalForm {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub breed: String,
    #[validate(range(max = 40))]
    pub age_years: u32,
    pub gender: String,
    #[validate(range(min = 0.0, max = 2000.0))]
    pub weight_kg: f64,
    /// Defaults to `Active` when omitted.
    #[serde(default)]
    pub status: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub location: String,
}

/// Validated animal registration.
pub struct AddAnimalPayload {
    pub name: AnimalName,
    pub breed: BreedName,
    pub age_years: u32,
    pub gender: Gender,
    pub weight_kg: Amount,
    pub status: AnimalStatus,
    pub location: LocationName,
}

impl TryFrom<AddAnimalForm> for AddAnimalPayload {
    type Error = FormError;

    fn try_from(form: AddAnimalForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let status = match form.status.as_deref().map(str::trim) {
            None | Some("") => AnimalStatus::Active,
            Some(value) => value
                .parse()
                .map_err(|_| FormError::InvalidStatus(value.to_string()))?,
        };

        Ok(Self {
            name: AnimalName::new(form.name).map_err(|_| FormError::InvalidName)?,
            breed: BreedName::new(form.breed).map_err(|_| FormError::InvalidName)?,
            age_years: form.age_years,
            gender: form
                .gender
                .parse()
                .map_err(|_| FormError::InvalidOption(form.gender.clone()))?,
            weight_kg: Amount::new(form.weight_kg).map_err(|_| FormError::InvalidAmount)?,
            status,
            location: LocationName::new(form.location).map_err(|_| FormError::InvalidName)?,
        })
    }
}

impl AddAnimalPayload {
    pub fn into_domain(self) -> NewAnimal {
        NewAnimal {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddAnimalForm {
        AddAnimalForm {
            name: " Bella ".into(),
            breed: "Holstein".into(),
            age_years: 3,
            gender: "female".into(),
            weight_kg: 650.0,
            status: None,
            location: "Pen A1".into(),
        }
    }

    #[test]
    fn converts_valid_form() {
        let new_animal = AddAnimalPayload::try_from(form()).unwrap().into_domain();
        assert_eq!(new_animal.name.as_str(), "Bella");
        assert_eq!(new_animal.gender, Gender::Female);
        assert_eq!(new_animal.status, AnimalStatus::Active);
    }

    #[test]
    fn rejects_empty_name() {
        let mut form = form();
        form.name = String::new();
        assert!(matches!(
            AddAnimalPayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_unknown_status() {
        let mut form = form();
        form.status = Some("Lost".into());
        assert!(matches!(
            AddAnimalPayload::try_from(form),
            Err(FormError::InvalidStatus(s)) if s == "Lost"
        ));
    }

    #[test]
    fn rejects_unknown_gender() {
        let mut form = form();
        form.gender = "Unknown".into();
        assert!(matches!(
            AddAnimalPayload::try_from(form),
            Err(FormError::InvalidOption(_))
        ));
    }
}
