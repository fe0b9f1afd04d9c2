//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use pushkind_farm::domain::animal::NewAnimal;
use pushkind_farm::domain::status::AnimalStatus;
use pushkind_farm::domain::types::{Amount, AnimalName, BreedName, Gender, LocationName};
use pushkind_farm::forms::livestock::AddAnimalForm;
use pushkind_farm::models::config::DashboardConfig;
use pushkind_farm::repository::InMemoryRepository;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_repo() -> InMemoryRepository {
    InMemoryRepository::with_sample_data()
}

pub fn config(items_per_page: usize) -> DashboardConfig {
    DashboardConfig {
        items_per_page,
        ..DashboardConfig::default()
    }
}

pub fn new_animal(name: &str, status: AnimalStatus) -> NewAnimal {
    NewAnimal {
        name: AnimalName::new(name).unwrap(),
        breed: BreedName::new("Holstein").unwrap(),
        age_years: 3,
        gender: Gender::Female,
        weight_kg: Amount::new(600.0).unwrap(),
        status,
        location: LocationName::new("Pen A1").unwrap(),
    }
}

pub fn animal_form(name: &str) -> AddAnimalForm {
    AddAnimalForm {
        name: name.to_string(),
        breed: "Jersey".to_string(),
        age_years: 2,
        gender: "Female".to_string(),
        weight_kg: 430.0,
        status: None,
        location: "Pen A3".to_string(),
    }
}
