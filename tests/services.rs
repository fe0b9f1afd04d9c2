use pushkind_farm::domain::status::{AnimalStatus, HealthStatus, VaccinationStatus};
use pushkind_farm::dto::list::ListQuery;
use pushkind_farm::forms::financial::AddTransactionForm;
use pushkind_farm::forms::health::{CompleteTreatmentForm, CompleteVaccinationForm};
use pushkind_farm::services::{ServiceError, dashboard, financial, health, livestock, reports};

mod common;

#[test]
fn test_animal_list_paginates_and_clamps() {
    let repo = common::sample_repo();
    let config = common::config(5);

    let page = livestock::list_animals(&repo, &config, ListQuery::default().page(5)).unwrap();
    assert_eq!(page.items.total_pages, 3);
    assert_eq!(page.items.page, 3);
    assert_eq!(page.items.items.len(), 2);
    assert_eq!(page.items.pages, vec![Some(1), Some(2), Some(3)]);

    let page = livestock::list_animals(&repo, &config, ListQuery::default().page(0)).unwrap();
    assert_eq!(page.items.page, 1);
    assert!(!page.items.has_previous);
}

#[test]
fn test_search_matches_partial_names() {
    let repo = common::sample_repo();
    let config = common::config(10);

    for term in ["bella", "BELL", " bell "] {
        let page = livestock::list_animals(&repo, &config, ListQuery::default().search(term))
            .unwrap();
        assert_eq!(page.items.total_items, 1, "term {term:?}");
        assert_eq!(page.items.items[0].record.name.as_str(), "Bella");
    }

    let page =
        livestock::list_animals(&repo, &config, ListQuery::default().search("bellax")).unwrap();
    assert_eq!(page.items.total_items, 0);
    assert_eq!(page.items.total_pages, 1);
}

#[test]
fn test_added_animal_appears_in_filtered_list() {
    let repo = common::sample_repo();
    let config = common::config(10);

    let animal = livestock::add_animal(&repo, common::animal_form("Willow")).unwrap();
    assert_eq!(animal.tag.as_str(), "COW013");

    livestock::change_animal_status(&repo, "COW013", "Sick").unwrap();

    let page =
        livestock::list_animals(&repo, &config, ListQuery::default().status("Sick")).unwrap();
    let tags: Vec<_> = page
        .items
        .items
        .iter()
        .map(|row| row.record.tag.as_str())
        .collect();
    assert_eq!(tags, vec!["COW003", "COW013"]);
    assert!(
        page.items
            .items
            .iter()
            .all(|row| row.record.status == AnimalStatus::Sick)
    );
}

#[test]
fn test_vaccination_completion_flow() {
    let repo = common::sample_repo();
    let config = common::config(10);

    let page = health::list_vaccinations(&repo, &config, ListQuery::default()).unwrap();
    assert!(page.items.items.iter().all(|row| row.can_complete));

    let form = || CompleteVaccinationForm {
        completion_date: "2024-06-20".into(),
        veterinarian: "Dr. Smith".into(),
        batch_number: Some("LOT-1".into()),
        next_due_date: Some("2025-06-20".into()),
        reaction: Some("None".into()),
        notes: None,
    };

    let done = health::complete_vaccination(&repo, "VAC002", form()).unwrap();
    assert_eq!(done.status, VaccinationStatus::Completed);

    let again = health::complete_vaccination(&repo, "VAC002", form());
    assert!(matches!(again, Err(ServiceError::Conflict(_))));

    let page = health::list_vaccinations(&repo, &config, ListQuery::default().status("Completed"))
        .unwrap();
    assert_eq!(page.items.total_items, 1);
    assert!(!page.items.items[0].can_complete);
    assert_eq!(page.items.items[0].badge.label, "Completed");
}

#[test]
fn test_treatment_completion_flow() {
    let repo = common::sample_repo();

    let form = |outcome: &str| CompleteTreatmentForm {
        treatment_date: "2024-05-30".into(),
        veterinarian: "Dr. Smith".into(),
        treatment: "Antibiotics course".into(),
        medication: None,
        dosage: None,
        outcome: outcome.into(),
        follow_up_date: Some("2024-06-10".into()),
        notes: None,
    };

    let recovered = health::complete_treatment(&repo, "HEALTH002", form("Recovered"));
    assert!(matches!(recovered, Err(ServiceError::Conflict(_))));

    let record = health::complete_treatment(&repo, "HEALTH001", form("Monitoring")).unwrap();
    assert_eq!(record.status, HealthStatus::Monitoring);
    assert_eq!(record.treatment, "Antibiotics course");
}

#[test]
fn test_unknown_status_is_rejected() {
    let repo = common::sample_repo();
    assert!(matches!(
        health::change_vaccination_status(&repo, "VAC001", "Pending"),
        Err(ServiceError::TypeConstraint(_))
    ));
    assert!(matches!(
        livestock::list_animals(&repo, &common::config(10), ListQuery::default().status("Lost")),
        Err(ServiceError::Form(_))
    ));
}

#[test]
fn test_new_expense_moves_breakdown_and_export() {
    let repo = common::sample_repo();

    financial::add_transaction(
        &repo,
        AddTransactionForm {
            kind: "Expense".into(),
            category: "Equipment".into(),
            amount: 405.0,
            date: "2024-05-29".into(),
            description: "Milking machine repair, parts".into(),
        },
    )
    .unwrap();

    let shares = dashboard::expense_breakdown(&repo).unwrap();
    assert_eq!(shares[0].category.as_str(), "Equipment");
    assert_eq!(shares[0].percent, 43);
    assert_eq!(shares[1].category.as_str(), "Feed");
    assert_eq!(shares[1].percent, 42);

    let stats = dashboard::dashboard_stats(&repo).unwrap();
    assert_eq!(stats.total_expenses, 950.0);
    assert_eq!(stats.net_balance, 2425.0);

    let csv = reports::export_transactions_csv(&repo).unwrap();
    let last = csv.lines().last().unwrap();
    assert_eq!(
        last,
        "TXN005,2024-05-29,Expense,Equipment,405.00,\"Milking machine repair, parts\""
    );
}
