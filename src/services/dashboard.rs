//! Overview figures, expense breakdown, alerts and production summary.

use chrono::{Days, NaiveDate};

use crate::domain::status::{
    AnimalStatus, HealthStatus, Status, TransactionKind, VaccinationStatus,
};
use crate::domain::transaction::Transaction;
use crate::domain::types::CategoryName;
use crate::dto::dashboard::{Alert, AlertKind, DashboardStats, ExpenseShare, ProductionSummaryRow};
use crate::models::config::DashboardConfig;
use crate::repository::{
    AnimalReader, BreedingReader, HealthRecordReader, ProductionReader, TransactionReader,
    VaccinationReader,
};
use crate::services::ServiceResult;

/// Rounds `part / total` to a whole percent; zero when `total` is zero.
fn percent(part: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (part / total * 100.0).round() as u32
}

fn sum_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount.get())
        .sum()
}

pub fn dashboard_stats<R>(repo: &R) -> ServiceResult<DashboardStats>
where
    R: AnimalReader + ProductionReader + TransactionReader + ?Sized,
{
    let animals = repo.list_animals().map_err(|err| {
        log::error!("Failed to load animals for stats: {err}");
        err
    })?;
    let milk = repo.list_milk_records().map_err(|err| {
        log::error!("Failed to load milk records for stats: {err}");
        err
    })?;
    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to load transactions for stats: {err}");
        err
    })?;

    let count = |status: AnimalStatus| animals.iter().filter(|a| a.status == status).count();
    let active_animals = count(AnimalStatus::Active);

    let latest_milk_l = milk
        .iter()
        .map(|r| r.date)
        .max()
        .map(|latest| {
            milk.iter()
                .filter(|r| r.date == latest)
                .map(|r| r.total_l().get())
                .sum::<f64>()
        })
        .unwrap_or(0.0);

    let total_income = sum_kind(&transactions, TransactionKind::Income);
    let total_expenses = sum_kind(&transactions, TransactionKind::Expense);

    Ok(DashboardStats {
        total_animals: animals.len(),
        active_animals,
        sick_animals: count(AnimalStatus::Sick),
        quarantined_animals: count(AnimalStatus::Quarantine),
        sold_animals: count(AnimalStatus::Sold),
        healthy_percent: percent(active_animals as f64, animals.len() as f64),
        latest_milk_l,
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
    })
}

/// Expenses grouped by category, largest first.
pub fn expense_breakdown<R>(repo: &R) -> ServiceResult<Vec<ExpenseShare>>
where
    R: TransactionReader + ?Sized,
{
    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to load transactions for breakdown: {err}");
        err
    })?;

    let mut totals: Vec<(CategoryName, f64)> = Vec::new();
    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        match totals.iter_mut().find(|(category, _)| category == &t.category) {
            Some((_, amount)) => *amount += t.amount.get(),
            None => totals.push((t.category.clone(), t.amount.get())),
        }
    }

    let total: f64 = totals.iter().map(|(_, amount)| amount).sum();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(totals
        .into_iter()
        .map(|(category, amount)| ExpenseShare {
            category,
            amount,
            percent: percent(amount, total),
        })
        .collect())
}

/// Builds the alerts panel for `today`.
///
/// Sick or quarantined animals and overdue vaccinations are urgent; due
/// vaccinations and expected calvings are reported when they fall within
/// `alert_window_days`.
pub fn alerts<R>(repo: &R, config: &DashboardConfig, today: NaiveDate) -> ServiceResult<Vec<Alert>>
where
    R: AnimalReader + VaccinationReader + HealthRecordReader + BreedingReader + ?Sized,
{
    let animals = repo.list_animals().map_err(|err| {
        log::error!("Failed to load animals for alerts: {err}");
        err
    })?;
    let vaccinations = repo.list_vaccinations().map_err(|err| {
        log::error!("Failed to load vaccinations for alerts: {err}");
        err
    })?;
    let health_records = repo.list_health_records().map_err(|err| {
        log::error!("Failed to load health records for alerts: {err}");
        err
    })?;
    let breeding_records = repo.list_breeding_records().map_err(|err| {
        log::error!("Failed to load breeding records for alerts: {err}");
        err
    })?;

    let horizon = today
        .checked_add_days(Days::new(u64::from(config.alert_window_days)))
        .unwrap_or(today);
    let mut alerts = Vec::new();

    for animal in &animals {
        let title = match animal.status {
            AnimalStatus::Sick => "Sick Animal Alert",
            AnimalStatus::Quarantine => "Quarantine Alert",
            _ => continue,
        };
        alerts.push(Alert {
            kind: AlertKind::Urgent,
            title: title.to_string(),
            description: format!("{} ({}) in {}", animal.name, animal.tag, animal.location),
            action: "Contact Vet",
        });
    }

    for v in &vaccinations {
        let overdue = v.status == VaccinationStatus::Overdue
            || (v.status.is_completable() && v.due_date < today);
        if overdue {
            alerts.push(Alert {
                kind: AlertKind::Urgent,
                title: "Vaccination Overdue".to_string(),
                description: format!("{} for {} was due {}", v.vaccine, v.animal_name, v.due_date),
                action: "Vaccinate",
            });
        } else if v.status.is_completable() && v.due_date <= horizon {
            alerts.push(Alert {
                kind: AlertKind::Scheduled,
                title: "Vaccination Due".to_string(),
                description: format!(
                    "{} for {} due in {} days",
                    v.vaccine,
                    v.animal_name,
                    v.days_until_due(today)
                ),
                action: "Schedule",
            });
        }
    }

    for record in health_records
        .iter()
        .filter(|r| r.status == HealthStatus::UnderTreatment)
    {
        alerts.push(Alert {
            kind: AlertKind::Health,
            title: "Active Treatment".to_string(),
            description: format!(
                "{} ({}) treated for {} by {}",
                record.animal_name, record.animal_tag, record.condition, record.vet
            ),
            action: "Review",
        });
    }

    for record in breeding_records.iter().filter(|r| r.is_expecting()) {
        if record.expected_calving >= today && record.expected_calving <= horizon {
            alerts.push(Alert {
                kind: AlertKind::Breeding,
                title: "Calving Expected".to_string(),
                description: format!(
                    "{} ({}) due to calve on {}",
                    record.female_name, record.female_tag, record.expected_calving
                ),
                action: "Prepare Pen",
            });
        }
    }

    Ok(alerts)
}

/// Total and average milk per animal, in first-seen order.
pub fn production_summary<R>(repo: &R) -> ServiceResult<Vec<ProductionSummaryRow>>
where
    R: ProductionReader + ?Sized,
{
    let records = repo.list_milk_records().map_err(|err| {
        log::error!("Failed to load milk records for summary: {err}");
        err
    })?;

    let mut rows: Vec<ProductionSummaryRow> = Vec::new();
    for record in &records {
        let litres = record.total_l().get();
        match rows.iter_mut().find(|row| row.animal_tag == record.animal_tag) {
            Some(row) => {
                row.records += 1;
                row.total_l += litres;
            }
            None => rows.push(ProductionSummaryRow {
                animal_tag: record.animal_tag.clone(),
                animal_name: record.animal_name.clone(),
                records: 1,
                total_l: litres,
                average_l: 0.0,
            }),
        }
    }
    for row in &mut rows {
        row.average_l = row.total_l / row.records as f64;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stats_from_sample_data() {
        let repo = InMemoryRepository::with_sample_data();
        let stats = dashboard_stats(&repo).unwrap();

        assert_eq!(stats.total_animals, 12);
        assert_eq!(stats.active_animals, 9);
        assert_eq!(stats.sick_animals, 1);
        assert_eq!(stats.quarantined_animals, 1);
        assert_eq!(stats.sold_animals, 1);
        assert_eq!(stats.healthy_percent, 75);
        assert!((stats.latest_milk_l - 69.8).abs() < 1e-9);
        assert_eq!(stats.total_income, 3375.0);
        assert_eq!(stats.total_expenses, 545.0);
        assert_eq!(stats.net_balance, 2830.0);
    }

    #[test]
    fn breakdown_is_sorted_and_sums_to_hundred() {
        let repo = InMemoryRepository::with_sample_data();
        let shares = expense_breakdown(&repo).unwrap();

        let categories: Vec<_> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Feed", "Veterinary"]);
        assert_eq!(shares[0].percent, 72);
        assert_eq!(shares[1].percent, 28);
        let sum: u32 = shares.iter().map(|s| s.percent).sum();
        assert!((99..=101).contains(&sum));
    }

    #[test]
    fn breakdown_without_expenses_is_empty() {
        let repo = InMemoryRepository::default();
        assert!(expense_breakdown(&repo).unwrap().is_empty());
    }

    #[test]
    fn alerts_respect_window() {
        let repo = InMemoryRepository::with_sample_data();
        let config = DashboardConfig::default();
        let alerts = alerts(&repo, &config, date(2024, 6, 10)).unwrap();

        let count = |kind: AlertKind| alerts.iter().filter(|a| a.kind == kind).count();
        // Daisy sick, Duke quarantined, Thunder's brucellosis overdue.
        assert_eq!(count(AlertKind::Urgent), 3);
        // VAC001 due on 06-15; VAC003 on 07-01 is outside the week.
        assert_eq!(count(AlertKind::Scheduled), 1);
        assert_eq!(count(AlertKind::Health), 1);
        assert_eq!(count(AlertKind::Breeding), 0);
    }

    #[test]
    fn calving_alert_within_window() {
        let repo = InMemoryRepository::with_sample_data();
        let config = DashboardConfig {
            alert_window_days: 30,
            ..DashboardConfig::default()
        };
        let alerts = alerts(&repo, &config, date(2024, 12, 1)).unwrap();
        let calvings: Vec<_> = alerts
            .iter()
            .filter(|a| a.kind == AlertKind::Breeding)
            .collect();
        assert_eq!(calvings.len(), 1);
        assert!(calvings[0].description.contains("Bella"));
    }

    #[test]
    fn summary_averages_per_animal() {
        let repo = InMemoryRepository::with_sample_data();
        let rows = production_summary(&repo).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].animal_tag.as_str(), "COW001");
        assert_eq!(rows[0].records, 2);
        assert!((rows[0].total_l - 46.8).abs() < 1e-9);
        assert!((rows[0].average_l - 23.4).abs() < 1e-9);
    }
}
