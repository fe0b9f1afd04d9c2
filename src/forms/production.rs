//! Forms for milk yields and feed purchases.

use serde::Deserialize;
use validator::Validate;

use crate::domain::production::{MilkRecord, NewFeedRecord};
use crate::domain::status::MilkQuality;
use crate::domain::types::{Amount, AnimalName, AnimalTag, FeedType, Notes};
use crate::forms::{FormError, parse_date};

#[derive(Debug, Deserialize, Validate)]
/// Form data for logging one animal's daily milk yield.
pub struct AddMilkRecordForm {
    pub animal_tag: String,
    #[validate(length(min = 1, max = 64))]
    pub animal_name: String,
    pub date: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub morning_l: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub evening_l: f64,
    /// `A+`, `A`, `B` or `C`.
    pub quality: String,
}

impl TryFrom<AddMilkRecordForm> for MilkRecord {
    type Error = FormError;

    fn try_from(form: AddMilkRecordForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            animal_tag: AnimalTag::new(form.animal_tag).map_err(|_| FormError::InvalidRecordId)?,
            animal_name: AnimalName::new(form.animal_name).map_err(|_| FormError::InvalidName)?,
            date: parse_date(&form.date)?,
            morning_l: Amount::new(form.morning_l).map_err(|_| FormError::InvalidAmount)?,
            evening_l: Amount::new(form.evening_l).map_err(|_| FormError::InvalidAmount)?,
            quality: form
                .quality
                .parse::<MilkQuality>()
                .map_err(|_| FormError::InvalidStatus(form.quality.clone()))?,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for logging a feed purchase.
pub struct AddFeedForm {
    pub date: String,
    #[validate(length(min = 1, max = 64))]
    pub feed_type: String,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity_kg: f64,
    #[validate(range(min = 0.0))]
    pub cost: f64,
    #[validate(length(max = 128))]
    pub supplier: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

pub struct AddFeedPayload {
    pub record: NewFeedRecord,
}

impl TryFrom<AddFeedForm> for AddFeedPayload {
    type Error = FormError;

    fn try_from(form: AddFeedForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            record: NewFeedRecord {
                date: parse_date(&form.date)?,
                feed_type: FeedType::new(form.feed_type).map_err(|_| FormError::InvalidName)?,
                quantity_kg: Amount::new(form.quantity_kg).map_err(|_| FormError::InvalidAmount)?,
                cost: Amount::new(form.cost).map_err(|_| FormError::InvalidAmount)?,
                supplier: form.supplier.trim().to_string(),
                notes: Notes::new(form.notes.unwrap_or_default()),
            },
        })
    }
}

impl AddFeedPayload {
    pub fn into_domain(self) -> NewFeedRecord {
        self.record
    }
}
