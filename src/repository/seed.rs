//! Demo records loaded into the in-memory store.
//!
//! Constructors below only see literal values known to satisfy the value
//! object constraints, so any failure falls back to skipping the record.

use chrono::NaiveDate;

use crate::domain::animal::Animal;
use crate::domain::breeding::{BirthRecord, BreedingRecord};
use crate::domain::health::HealthRecord;
use crate::domain::production::{FeedRecord, MilkRecord};
use crate::domain::status::{
    AnimalStatus, BirthStatus, BreedingStatus, HealthStatus, MilkQuality, TransactionKind,
    VaccinationStatus,
};
use crate::domain::transaction::Transaction;
use crate::domain::types::{
    Amount, AnimalName, AnimalTag, BreedName, BreedingMethod, BreedingRecordId, CalfTag,
    CategoryName, ConditionName, FeedRecordId, FeedType, Gender, HealthRecordId, LocationName,
    Notes, Severity, SireId, TransactionId, TypeConstraintError, VaccinationId, VaccineName,
    VeterinarianName,
};
use crate::domain::vaccination::Vaccination;
use crate::repository::FarmStore;

type SeedResult<T> = Result<T, TypeConstraintError>;

fn date(y: i32, m: u32, d: u32) -> SeedResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| TypeConstraintError::InvalidValue(format!("{y}-{m}-{d}")))
}

/// Builds the sample store, logging and dropping any record that fails to build.
pub fn sample_store() -> FarmStore {
    FarmStore {
        animals: collect("animal", animals()),
        vaccinations: collect("vaccination", vaccinations()),
        health_records: collect("health record", health_records()),
        breeding_records: collect("breeding record", breeding_records()),
        birth_records: collect("birth record", birth_records()),
        milk_records: collect("milk record", milk_records()),
        feed_records: collect("feed record", feed_records()),
        transactions: collect("transaction", transactions()),
    }
}

fn collect<T>(kind: &str, items: Vec<SeedResult<T>>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Ok(item) => Some(item),
            Err(err) => {
                log::error!("Skipping sample {kind}: {err}");
                None
            }
        })
        .collect()
}

fn animal(
    tag: &str,
    name: &str,
    breed: &str,
    age_years: u32,
    gender: Gender,
    weight_kg: f64,
    status: AnimalStatus,
    location: &str,
) -> SeedResult<Animal> {
    Ok(Animal {
        tag: AnimalTag::new(tag)?,
        name: AnimalName::new(name)?,
        breed: BreedName::new(breed)?,
        age_years,
        gender,
        weight_kg: Amount::new(weight_kg)?,
        status,
        location: LocationName::new(location)?,
    })
}

fn animals() -> Vec<SeedResult<Animal>> {
    use AnimalStatus::*;
    use Gender::*;

    vec![
        animal("COW001", "Bella", "Holstein", 3, Female, 650.0, Active, "Pen A1"),
        animal("COW002", "Thunder", "Angus", 5, Male, 800.0, Active, "Pen B2"),
        animal("COW003", "Daisy", "Jersey", 2, Female, 450.0, Sick, "Isolation"),
        animal("COW004", "Moo", "Holstein", 4, Female, 620.0, Active, "Pen A2"),
        animal("COW005", "Luna", "Guernsey", 3, Female, 540.0, Active, "Pen A1"),
        animal("COW006", "Rosie", "Jersey", 6, Female, 470.0, Active, "Pen A3"),
        animal("COW007", "Duke", "Hereford", 4, Male, 870.0, Quarantine, "Quarantine Barn"),
        animal("COW008", "Clover", "Holstein", 2, Female, 560.0, Active, "Pen A2"),
        animal("COW009", "Pepper", "Angus", 1, Female, 380.0, Active, "Pen C1"),
        animal("COW010", "Maple", "Brown Swiss", 5, Female, 640.0, Sold, "Sold"),
        animal("COW011", "Buttercup", "Jersey", 3, Female, 455.0, Active, "Pen A3"),
        animal("COW012", "Hazel", "Holstein", 7, Female, 690.0, Active, "Pen A1"),
    ]
}

fn vaccinations() -> Vec<SeedResult<Vaccination>> {
    let entry = |id: &str,
                 tag: &str,
                 name: &str,
                 vaccine: &str,
                 due: SeedResult<NaiveDate>,
                 last: SeedResult<NaiveDate>,
                 status: VaccinationStatus|
     -> SeedResult<Vaccination> {
        Ok(Vaccination {
            id: VaccinationId::new(id)?,
            animal_tag: AnimalTag::new(tag)?,
            animal_name: AnimalName::new(name)?,
            vaccine: VaccineName::new(vaccine)?,
            due_date: due?,
            last_vaccinated: Some(last?),
            status,
            completion: None,
        })
    };

    vec![
        entry(
            "VAC001",
            "COW001",
            "Bella",
            "FMD Vaccine",
            date(2024, 6, 15),
            date(2024, 3, 15),
            VaccinationStatus::Due,
        ),
        entry(
            "VAC002",
            "COW002",
            "Thunder",
            "Brucellosis",
            date(2024, 6, 20),
            date(2023, 12, 20),
            VaccinationStatus::Overdue,
        ),
        entry(
            "VAC003",
            "COW003",
            "Daisy",
            "Anthrax",
            date(2024, 7, 1),
            date(2024, 1, 1),
            VaccinationStatus::Scheduled,
        ),
    ]
}

fn health_records() -> Vec<SeedResult<HealthRecord>> {
    let entry = |id: &str,
                 tag: &str,
                 name: &str,
                 condition: &str,
                 treatment: &str,
                 vet: &str,
                 on: SeedResult<NaiveDate>,
                 status: HealthStatus|
     -> SeedResult<HealthRecord> {
        Ok(HealthRecord {
            id: HealthRecordId::new(id)?,
            animal_tag: AnimalTag::new(tag)?,
            animal_name: AnimalName::new(name)?,
            condition: ConditionName::new(condition)?,
            severity: Some(Severity::Moderate),
            treatment: treatment.to_string(),
            vet: VeterinarianName::new(vet)?,
            date: on?,
            status,
            completion: None,
        })
    };

    vec![
        entry(
            "HEALTH001",
            "COW003",
            "Daisy",
            "Mastitis",
            "Antibiotics",
            "Dr. Smith",
            date(2024, 5, 20),
            HealthStatus::UnderTreatment,
        ),
        entry(
            "HEALTH002",
            "COW004",
            "Moo",
            "Hoof Rot",
            "Topical Treatment",
            "Dr. Johnson",
            date(2024, 5, 18),
            HealthStatus::Recovered,
        ),
    ]
}

fn breeding_records() -> Vec<SeedResult<BreedingRecord>> {
    let entry = |id: &str,
                 female: (&str, &str),
                 male: (&str, &str),
                 method: BreedingMethod,
                 bred: SeedResult<NaiveDate>,
                 calving: SeedResult<NaiveDate>,
                 status: BreedingStatus|
     -> SeedResult<BreedingRecord> {
        Ok(BreedingRecord {
            id: BreedingRecordId::new(id)?,
            female_tag: AnimalTag::new(female.0)?,
            female_name: AnimalName::new(female.1)?,
            male_id: SireId::new(male.0)?,
            male_name: AnimalName::new(male.1)?,
            method,
            breeding_date: bred?,
            expected_calving: calving?,
            status,
            confirmation: None,
        })
    };

    vec![
        entry(
            "BRD001",
            ("COW001", "Bella"),
            ("BULL001", "Thunder"),
            BreedingMethod::Natural,
            date(2024, 3, 15),
            date(2024, 12, 15),
            BreedingStatus::Pregnant,
        ),
        entry(
            "BRD002",
            ("COW005", "Luna"),
            ("AI-001", "AI Service"),
            BreedingMethod::ArtificialInsemination,
            date(2024, 4, 20),
            date(2025, 1, 20),
            BreedingStatus::Confirmed,
        ),
    ]
}

fn birth_records() -> Vec<SeedResult<BirthRecord>> {
    let entry = |calf: (&str, &str),
                 mother: (&str, &str),
                 born: SeedResult<NaiveDate>,
                 gender: Gender,
                 weight_kg: f64|
     -> SeedResult<BirthRecord> {
        Ok(BirthRecord {
            calf_tag: CalfTag::new(calf.0)?,
            calf_name: AnimalName::new(calf.1)?,
            mother_tag: AnimalTag::new(mother.0)?,
            mother_name: AnimalName::new(mother.1)?,
            birth_date: born?,
            gender,
            weight_kg: Amount::new(weight_kg)?,
            status: BirthStatus::Healthy,
        })
    };

    vec![
        entry(
            ("CALF001", "Little Belle"),
            ("COW002", "Daisy"),
            date(2024, 2, 15),
            Gender::Female,
            35.0,
        ),
        entry(
            ("CALF002", "Max"),
            ("COW003", "Rosie"),
            date(2024, 1, 28),
            Gender::Male,
            42.0,
        ),
    ]
}

fn milk_records() -> Vec<SeedResult<MilkRecord>> {
    let entry = |tag: &str,
                 name: &str,
                 on: SeedResult<NaiveDate>,
                 morning: f64,
                 evening: f64,
                 quality: MilkQuality|
     -> SeedResult<MilkRecord> {
        Ok(MilkRecord {
            animal_tag: AnimalTag::new(tag)?,
            animal_name: AnimalName::new(name)?,
            date: on?,
            morning_l: Amount::new(morning)?,
            evening_l: Amount::new(evening)?,
            quality,
        })
    };

    vec![
        entry("COW001", "Bella", date(2024, 5, 27), 12.1, 11.0, MilkQuality::A),
        entry("COW001", "Bella", date(2024, 5, 28), 12.5, 11.2, MilkQuality::A),
        entry("COW005", "Luna", date(2024, 5, 28), 15.8, 14.1, MilkQuality::APlus),
        entry("COW003", "Daisy", date(2024, 5, 28), 8.3, 7.9, MilkQuality::B),
    ]
}

fn feed_records() -> Vec<SeedResult<FeedRecord>> {
    let entry = |id: &str,
                 on: SeedResult<NaiveDate>,
                 feed_type: &str,
                 quantity_kg: f64,
                 cost: f64,
                 supplier: &str|
     -> SeedResult<FeedRecord> {
        Ok(FeedRecord {
            id: FeedRecordId::new(id)?,
            date: on?,
            feed_type: FeedType::new(feed_type)?,
            quantity_kg: Amount::new(quantity_kg)?,
            cost: Amount::new(cost)?,
            supplier: supplier.to_string(),
            notes: Notes::default(),
        })
    };

    vec![
        entry("FEED001", date(2024, 5, 28), "Hay", 250.0, 125.0, "Green Valley Farm"),
        entry("FEED002", date(2024, 5, 28), "Concentrate", 100.0, 180.0, "Feed Master Ltd"),
        entry("FEED003", date(2024, 5, 27), "Silage", 300.0, 90.0, "Local Co-op"),
    ]
}

fn transactions() -> Vec<SeedResult<Transaction>> {
    let entry = |id: &str,
                 kind: TransactionKind,
                 category: &str,
                 amount: f64,
                 on: SeedResult<NaiveDate>,
                 description: &str|
     -> SeedResult<Transaction> {
        Ok(Transaction {
            id: TransactionId::new(id)?,
            kind,
            category: CategoryName::new(category)?,
            amount: Amount::new(amount)?,
            date: on?,
            description: Notes::new(description),
        })
    };

    use TransactionKind::*;

    vec![
        entry("TXN001", Income, "Milk Sales", 875.0, date(2024, 5, 28), "Daily milk collection - Dairy Co-op"),
        entry("TXN002", Expense, "Feed", 395.0, date(2024, 5, 28), "Hay and concentrate purchase"),
        entry("TXN003", Income, "Animal Sales", 2500.0, date(2024, 5, 27), "Bull calf sale to neighbor farm"),
        entry("TXN004", Expense, "Veterinary", 150.0, date(2024, 5, 26), "Vaccination and health check"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_record_is_valid() {
        assert_eq!(animals().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(vaccinations().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(health_records().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(breeding_records().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(birth_records().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(milk_records().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(feed_records().iter().filter(|a| a.is_err()).count(), 0);
        assert_eq!(transactions().iter().filter(|a| a.is_err()).count(), 0);
    }

    #[test]
    fn sample_store_has_twelve_animals() {
        let store = sample_store();
        assert_eq!(store.animals.len(), 12);
        assert_eq!(store.transactions.len(), 4);
    }
}
