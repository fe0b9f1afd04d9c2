//! Ledger operations.

use crate::domain::transaction::Transaction;
use crate::domain::types::TransactionId;
use crate::dto::list::{ListPageData, ListQuery, StatusRow};
use crate::forms::financial::{AddTransactionForm, AddTransactionPayload};
use crate::models::config::DashboardConfig;
use crate::repository::{TransactionReader, TransactionWriter};
use crate::services::{ServiceError, ServiceResult, build_list_page};

/// Transactions in booking order, filtered by income/expense.
pub fn list_transactions<R>(
    repo: &R,
    config: &DashboardConfig,
    query: ListQuery,
) -> ServiceResult<ListPageData<StatusRow<Transaction>>>
where
    R: TransactionReader + ?Sized,
{
    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to list transactions: {err}");
        err
    })?;
    let page = build_list_page(transactions, query, config.items_per_page)?;
    Ok(page.map_items(|t| {
        let kind = t.kind;
        StatusRow::new(t, kind)
    }))
}

pub fn add_transaction<R>(repo: &R, form: AddTransactionForm) -> ServiceResult<Transaction>
where
    R: TransactionWriter + ?Sized,
{
    let payload = AddTransactionPayload::try_from(form).map_err(|err| {
        log::error!("Failed to validate transaction form: {err}");
        ServiceError::from(err)
    })?;

    let transaction = repo
        .create_transaction(&payload.into_domain())
        .map_err(|err| {
            log::error!("Failed to add a transaction: {err}");
            err
        })?;

    log::info!(
        "Booked {} {} {} ({})",
        transaction.id,
        transaction.kind,
        transaction.amount,
        transaction.category
    );
    Ok(transaction)
}

pub fn delete_transaction<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: TransactionWriter + ?Sized,
{
    let id = TransactionId::new(id)?;
    repo.delete_transaction(&id).map_err(|err| {
        log::error!("Failed to delete transaction {id}: {err}");
        err
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::TransactionKind;
    use crate::repository::mock::MockRepository;
    use crate::repository::seed::sample_store;

    #[test]
    fn expense_filter_keeps_order() {
        let mut repo = MockRepository::new();
        repo.expect_list_transactions()
            .returning(|| Ok(sample_store().transactions));

        let page = list_transactions(
            &repo,
            &DashboardConfig::default(),
            ListQuery::default().status("Expense"),
        )
        .unwrap();

        let ids: Vec<_> = page
            .items
            .items
            .iter()
            .map(|row| row.record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["TXN002", "TXN004"]);
        assert!(
            page.items
                .items
                .iter()
                .all(|row| row.record.kind == TransactionKind::Expense)
        );
    }

    #[test]
    fn ledger_without_criteria_matches_store_order() {
        let mut repo = MockRepository::new();
        repo.expect_list_transactions().returning(|| {
            let mut transactions = sample_store().transactions;
            transactions.reverse();
            Ok(transactions)
        });

        let page =
            list_transactions(&repo, &DashboardConfig::default(), ListQuery::default()).unwrap();
        let ids: Vec<_> = page
            .items
            .items
            .iter()
            .map(|row| row.record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["TXN004", "TXN003", "TXN002", "TXN001"]);
    }

    #[test]
    fn search_matches_description() {
        let mut repo = MockRepository::new();
        repo.expect_list_transactions()
            .returning(|| Ok(sample_store().transactions));

        let page = list_transactions(
            &repo,
            &DashboardConfig::default(),
            ListQuery::default().search("CO-OP"),
        )
        .unwrap();
        assert_eq!(page.items.total_items, 1);
        assert_eq!(page.items.items[0].record.id.as_str(), "TXN001");
    }
}
