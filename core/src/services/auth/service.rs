//! Main authentication service implementation

use std::sync::Arc;
use tracing;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::SigninOutcome;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password;
use crate::services::session::SessionService;

/// Authentication service for credential signin
pub struct AuthService<A: AccountRepository> {
    /// Repository for resolving identifiers to accounts
    accounts: Arc<A>,
    /// Issuer for the session token handed back on success
    sessions: Arc<SessionService>,
}

impl<A: AccountRepository> AuthService<A> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account repository implementation
    /// * `sessions` - Session token service
    pub fn new(accounts: Arc<A>, sessions: Arc<SessionService>) -> Self {
        Self { accounts, sessions }
    }

    /// Sign in with an identifier and password
    ///
    /// The identifier may be an email address or a mobile number; email is
    /// tried first. The password is checked before the verification state,
    /// so a wrong password never reveals whether the account still awaits
    /// verification.
    ///
    /// # Arguments
    ///
    /// * `identifier` - Email address or mobile number
    /// * `password` - Plaintext password from the request
    ///
    /// # Returns
    ///
    /// * `Ok(SigninOutcome)` - Account id plus the issued session token
    /// * `Err(DomainError::NotFound)` - No account under the identifier
    /// * `Err(DomainError::Auth(InvalidPassword))` - Password mismatch
    /// * `Err(DomainError::Auth(AccountNotVerified))` - Account still pending
    pub async fn sign_in(&self, identifier: &str, password: &str) -> DomainResult<SigninOutcome> {
        let account = self.resolve_identifier(identifier).await?;

        if !password::verify_password(password, &account.password_hash)? {
            tracing::warn!(
                account_id = %account.id,
                event = "signin_rejected",
                reason = "invalid_password",
                "Signin rejected"
            );
            return Err(AuthError::InvalidPassword.into());
        }

        if !account.is_verified() {
            tracing::warn!(
                account_id = %account.id,
                event = "signin_rejected",
                reason = "not_verified",
                "Signin rejected"
            );
            return Err(AuthError::AccountNotVerified.into());
        }

        let token = self.sessions.issue(account.id)?;

        tracing::info!(
            account_id = %account.id,
            event = "signin_success",
            "Signin successful"
        );

        Ok(SigninOutcome::new(
            account.id,
            token,
            self.sessions.token_expiry_seconds(),
        ))
    }

    /// Resolve an identifier to an account, trying email before mobile
    async fn resolve_identifier(&self, identifier: &str) -> DomainResult<Account> {
        let identifier = identifier.trim();
        let as_email = identifier.to_lowercase();

        if let Some(account) = self.accounts.find_by_email(&as_email).await? {
            return Ok(account);
        }

        self.accounts
            .find_by_mobile(identifier)
            .await?
            .ok_or_else(DomainError::user_not_found)
    }
}
