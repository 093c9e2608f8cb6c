//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{ConflictError, DomainError};

use super::trait_::AccountRepository;

/// Mock account repository for testing
///
/// Enforces the same uniqueness and version rules as the MySQL
/// implementation so service tests exercise realistic failures.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.mobile_number == mobile_number)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        // Enforce the unique indexes the real table carries
        if accounts.values().any(|a| a.email == account.email) {
            return Err(ConflictError::EmailTaken.into());
        }
        if accounts
            .values()
            .any(|a| a.mobile_number == account.mobile_number)
        {
            return Err(ConflictError::MobileTaken.into());
        }
        if accounts.values().any(|a| a.username == account.username) {
            return Err(ConflictError::UsernameTaken.into());
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let stored = accounts
            .get(&account.id)
            .ok_or_else(DomainError::user_not_found)?;

        // Stale version means a concurrent request replaced the record
        if stored.version != account.version {
            return Err(ConflictError::ConcurrentUpdate.into());
        }

        // Unique fields may change on overwrite; exclude the record itself
        if accounts
            .values()
            .any(|a| a.id != account.id && a.email == account.email)
        {
            return Err(ConflictError::EmailTaken.into());
        }
        if accounts
            .values()
            .any(|a| a.id != account.id && a.mobile_number == account.mobile_number)
        {
            return Err(ConflictError::MobileTaken.into());
        }
        if accounts
            .values()
            .any(|a| a.id != account.id && a.username == account.username)
        {
            return Err(ConflictError::UsernameTaken.into());
        }

        let mut updated = account;
        updated.version += 1;
        accounts.insert(updated.id, updated.clone());
        Ok(updated)
    }
}
