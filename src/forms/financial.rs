//! Forms for the farm ledger.

use serde::Deserialize;
use validator::Validate;

use crate::domain::status::TransactionKind;
use crate::domain::transaction::NewTransaction;
use crate::domain::types::{Amount, CategoryName, Notes};
use crate::forms::{FormError, parse_date};

#[derive(Debug, Deserialize, Validate)]
/// Form data for booking an income or expense.
pub struct AddTransactionForm {
    /// `Income` or `Expense`.
    pub kind: String,
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    pub date: String,
    #[validate(length(max = 500))]
    pub description: String,
}

pub struct AddTransactionPayload {
    pub transaction: NewTransaction,
}

impl TryFrom<AddTransactionForm> for AddTransactionPayload {
    type Error = FormError;

    fn try_from(form: AddTransactionForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            transaction: NewTransaction {
                kind: form
                    .kind
                    .parse::<TransactionKind>()
                    .map_err(|_| FormError::InvalidStatus(form.kind.clone()))?,
                category: CategoryName::new(form.category).map_err(|_| FormError::InvalidName)?,
                amount: Amount::new(form.amount).map_err(|_| FormError::InvalidAmount)?,
                date: parse_date(&form.date)?,
                description: Notes::new(form.description),
            },
        })
    }
}

impl AddTransactionPayload {
    pub fn into_domain(self) -> NewTransaction {
        self.transaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: &str, amount: f64) -> AddTransactionForm {
        AddTransactionForm {
            kind: kind.into(),
            category: "Veterinary".into(),
            amount,
            date: "2024-05-26".into(),
            description: "Vaccination and health check".into(),
        }
    }

    #[test]
    fn converts_expense() {
        let new = AddTransactionPayload::try_from(form("Expense", 150.0))
            .unwrap()
            .into_domain();
        assert_eq!(new.kind, TransactionKind::Expense);
        assert_eq!(new.amount.get(), 150.0);
    }

    #[test]
    fn rejects_zero_amount() {
        assert!(matches!(
            AddTransactionPayload::try_from(form("Income", 0.0)),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn kind_is_matched_exactly() {
        assert!(matches!(
            AddTransactionPayload::try_from(form("income", 10.0)),
            Err(FormError::InvalidStatus(_))
        ));
    }
}
