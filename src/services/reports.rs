//! Report exports.

use serde::Serialize;

use crate::domain::status::Status;
use crate::domain::transaction::Transaction;
use crate::repository::TransactionReader;
use crate::services::{ServiceError, ServiceResult};

/// One CSV row of the ledger export.
#[derive(Serialize)]
struct TransactionRow<'a> {
    id: &'a str,
    date: String,
    #[serde(rename = "type")]
    kind: &'static str,
    category: &'a str,
    amount: String,
    description: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            id: t.id.as_str(),
            date: t.date.to_string(),
            kind: t.kind.label(),
            category: t.category.as_str(),
            amount: t.amount.to_string(),
            description: t.description.as_str(),
        }
    }
}

/// Renders the ledger as CSV with a header row, in date order.
pub fn export_transactions_csv<R>(repo: &R) -> ServiceResult<String>
where
    R: TransactionReader + ?Sized,
{
    let mut transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to load transactions for export: {err}");
        err
    })?;
    transactions.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    let mut writer = csv::Writer::from_writer(Vec::new());
    for transaction in &transactions {
        writer
            .serialize(TransactionRow::from(transaction))
            .map_err(|err| {
                log::error!("Failed to write transaction {}: {err}", transaction.id);
                ServiceError::Internal(err.to_string())
            })?;
    }

    let bytes = writer.into_inner().map_err(|err| {
        log::error!("Failed to flush transaction export: {err}");
        ServiceError::Internal(err.to_string())
    })?;
    let csv = String::from_utf8(bytes).map_err(|err| ServiceError::Internal(err.to_string()))?;

    log::info!("Exported {} transactions", transactions.len());
    Ok(csv)
}
