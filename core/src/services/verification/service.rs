//! Main verification service implementation

use std::sync::Arc;
use tracing;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;

/// Verification service applying emailed codes to accounts
pub struct VerificationService<A: AccountRepository> {
    /// Repository for account lookup and persistence
    accounts: Arc<A>,
}

impl<A: AccountRepository> VerificationService<A> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account repository implementation
    pub fn new(accounts: Arc<A>) -> Self {
        Self { accounts }
    }

    /// Verify an account using the code from its verification email
    ///
    /// This method:
    /// 1. Looks up the account by username
    /// 2. Applies the state transition on the entity, which enforces the
    ///    failure order: already verified, then code mismatch, then expiry
    /// 3. Persists the verified account, clearing the stored code
    ///
    /// # Arguments
    ///
    /// * `username` - Username the code was issued for
    /// * `code` - The submitted six-digit code
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The verified account
    /// * `Err(DomainError::NotFound)` - No account under the username
    /// * `Err(DomainError::Verification)` - The transition was rejected
    pub async fn verify_account(&self, username: &str, code: &str) -> DomainResult<Account> {
        let username = username.trim().to_lowercase();

        let mut account = self
            .accounts
            .find_by_username(&username)
            .await?
            .ok_or_else(DomainError::user_not_found)?;

        if let Err(rejection) = account.confirm_verification(code) {
            tracing::warn!(
                account_id = %account.id,
                event = "verification_rejected",
                reason = %rejection,
                "Verification attempt rejected"
            );
            return Err(rejection.into());
        }

        let saved = self.accounts.update(account).await?;

        tracing::info!(
            account_id = %saved.id,
            event = "account_verified",
            "Account verified successfully"
        );

        Ok(saved)
    }
}
