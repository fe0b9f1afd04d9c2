use serde::Serialize;

use crate::domain::types::{AnimalName, AnimalTag, CategoryName};

/// Headline figures shown on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_animals: usize,
    pub active_animals: usize,
    pub sick_animals: usize,
    pub quarantined_animals: usize,
    pub sold_animals: usize,
    /// Share of the herd with status `Active`, in whole percent.
    pub healthy_percent: u32,
    /// Total litres on the most recent day with milk records.
    pub latest_milk_l: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
}

/// One slice of the expense breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub category: CategoryName,
    pub amount: f64,
    /// Rounded share of all expenses.
    pub percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Urgent,
    Scheduled,
    Health,
    Breeding,
}

/// Reminder shown in the alerts panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub description: String,
    /// Label of the suggested follow-up button.
    pub action: &'static str,
}

/// Milk yield of one animal across its records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionSummaryRow {
    pub animal_tag: AnimalTag,
    pub animal_name: AnimalName,
    pub records: usize,
    pub total_l: f64,
    pub average_l: f64,
}
