use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status::MilkQuality;
use crate::domain::types::{Amount, AnimalName, AnimalTag, FeedRecordId, FeedType, Notes};
use crate::filter::{Filterable, Searchable};

/// Daily milk yield of one animal, in litres.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MilkRecord {
    pub animal_tag: AnimalTag,
    pub animal_name: AnimalName,
    pub date: NaiveDate,
    pub morning_l: Amount,
    pub evening_l: Amount,
    pub quality: MilkQuality,
}

impl MilkRecord {
    pub fn total_l(&self) -> Amount {
        self.morning_l + self.evening_l
    }

    /// Animal and day identify a milk record.
    pub fn same_entry(&self, animal_tag: &AnimalTag, date: NaiveDate) -> bool {
        &self.animal_tag == animal_tag && self.date == date
    }
}

impl Searchable for MilkRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.animal_tag.as_str(), self.animal_name.as_str()]
    }
}

impl Filterable for MilkRecord {
    type Category = MilkQuality;

    fn category(&self) -> &MilkQuality {
        &self.quality
    }
}

/// Feed purchase or delivery.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FeedRecord {
    pub id: FeedRecordId,
    pub date: NaiveDate,
    pub feed_type: FeedType,
    pub quantity_kg: Amount,
    pub cost: Amount,
    pub supplier: String,
    pub notes: Notes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFeedRecord {
    pub date: NaiveDate,
    pub feed_type: FeedType,
    pub quantity_kg: Amount,
    pub cost: Amount,
    pub supplier: String,
    pub notes: Notes,
}

impl NewFeedRecord {
    #[must_use]
    pub fn into_record(self, id: FeedRecordId) -> FeedRecord {
        FeedRecord {
            id,
            date: self.date,
            feed_type: self.feed_type,
            quantity_kg: self.quantity_kg,
            cost: self.cost,
            supplier: self.supplier,
            notes: self.notes,
        }
    }
}

impl Searchable for FeedRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.feed_type.as_str(), self.supplier.as_str()]
    }
}

impl Filterable for FeedRecord {
    type Category = FeedType;

    fn category(&self) -> &FeedType {
        &self.feed_type
    }
}
