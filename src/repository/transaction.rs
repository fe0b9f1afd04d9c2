//! In-memory implementation of the financial ledger.

use crate::domain::transaction::{NewTransaction, Transaction};
use crate::domain::types::TransactionId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{InMemoryRepository, TransactionReader, TransactionWriter, remove_where};

impl TransactionReader for InMemoryRepository {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>> {
        Ok(self.read()?.transactions.clone())
    }

    fn get_transaction(&self, id: &TransactionId) -> RepositoryResult<Option<Transaction>> {
        let store = self.read()?;
        Ok(store.transactions.iter().find(|t| &t.id == id).cloned())
    }
}

impl TransactionWriter for InMemoryRepository {
    fn create_transaction(
        &self,
        new_transaction: &NewTransaction,
    ) -> RepositoryResult<Transaction> {
        let mut store = self.write()?;
        let id = TransactionId::next_after(store.transactions.iter().map(|t| &t.id))
            .map_err(|err| RepositoryError::ConstraintViolation(err.to_string()))?;
        let transaction = new_transaction.clone().into_transaction(id);
        store.transactions.push(transaction.clone());
        log::debug!("Booked transaction {}", transaction.id);
        Ok(transaction)
    }

    fn delete_transaction(&self, id: &TransactionId) -> RepositoryResult<()> {
        let mut store = self.write()?;
        remove_where(&mut store.transactions, |t| &t.id == id)?;
        Ok(())
    }
}
