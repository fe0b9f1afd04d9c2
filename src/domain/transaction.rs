use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::status::TransactionKind;
use crate::domain::types::{Amount, CategoryName, Notes, TransactionId};
use crate::filter::{Filterable, Searchable};

/// Income or expense booked in the farm ledger.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub category: CategoryName,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: Notes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: CategoryName,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: Notes,
}

impl NewTransaction {
    #[must_use]
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

impl Transaction {
    /// Amount with its sign: positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount.get(),
            TransactionKind::Expense => -self.amount.get(),
        }
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.category.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Filterable for Transaction {
    type Category = TransactionKind;

    fn category(&self) -> &TransactionKind {
        &self.kind
    }
}
