//! Main registration service implementation

use std::sync::Arc;
use tracing;

use crate::domain::entities::account::{Account, AccountProfile};
use crate::domain::entities::verification_code::VerificationCode;
use crate::domain::value_objects::RegistrationOutcome;
use crate::errors::{ConflictError, DependencyError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password;

use super::traits::{AvatarStoreTrait, EmailServiceTrait};
use super::types::NewSignup;

/// Configuration for the registration service
#[derive(Debug, Clone)]
pub struct RegistrationServiceConfig {
    /// Media store folder avatars are uploaded into
    pub avatar_folder: String,
    /// Placeholder avatar URL that must never be deleted
    pub default_avatar_url: String,
}

impl Default for RegistrationServiceConfig {
    fn default() -> Self {
        Self {
            avatar_folder: "VibeBox/Avatar".to_string(),
            default_avatar_url: vb_shared::config::DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

/// Registration service for the signup workflow
pub struct RegistrationService<A, M, S>
where
    A: AccountRepository,
    M: EmailServiceTrait,
    S: AvatarStoreTrait,
{
    /// Repository for account lookup and persistence
    accounts: Arc<A>,
    /// Provider for the verification email
    email_service: Arc<M>,
    /// Media store for avatar images
    avatar_store: Arc<S>,
    /// Service configuration
    config: RegistrationServiceConfig,
}

impl<A, M, S> RegistrationService<A, M, S>
where
    A: AccountRepository,
    M: EmailServiceTrait,
    S: AvatarStoreTrait,
{
    /// Create a new registration service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account repository implementation
    /// * `email_service` - Email provider implementation
    /// * `avatar_store` - Media store implementation
    /// * `config` - Service configuration
    pub fn new(
        accounts: Arc<A>,
        email_service: Arc<M>,
        avatar_store: Arc<S>,
        config: RegistrationServiceConfig,
    ) -> Self {
        Self {
            accounts,
            email_service,
            avatar_store,
            config,
        }
    }

    /// Register a new account or overwrite an unverified one
    ///
    /// This method:
    /// 1. Normalizes identity fields and reconciles the submission against
    ///    existing accounts by email and by mobile number
    /// 2. Rejects the signup when either identity belongs to a verified
    ///    account
    /// 3. Uploads the avatar before any database write; an upload failure
    ///    aborts the whole signup
    /// 4. Hashes the password and generates a fresh verification code
    /// 5. Creates a new record, or overwrites the unverified match in place
    ///    while keeping its id
    /// 6. Dispatches the verification email once the record is durable; a
    ///    dispatch failure fails the request but the record remains
    ///
    /// # Arguments
    ///
    /// * `signup` - The validated signup submission
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationOutcome)` - Account id and whether an existing
    ///   record was overwritten
    /// * `Err(DomainError::Conflict)` - An identity is already taken
    /// * `Err(DomainError::Dependency)` - Avatar upload or email dispatch
    ///   failed
    pub async fn register(&self, signup: NewSignup) -> DomainResult<RegistrationOutcome> {
        let email = signup.email.trim().to_lowercase();
        let username = signup.username.trim().to_lowercase();
        let mobile_number = signup.mobile_number.trim().to_string();

        // Reconcile against both unique identities independently
        let email_match = self.accounts.find_by_email(&email).await?;
        let mobile_match = self.accounts.find_by_mobile(&mobile_number).await?;

        if let Some(existing) = &email_match {
            if existing.is_verified() {
                return Err(ConflictError::EmailTaken.into());
            }
        }
        if let Some(existing) = &mobile_match {
            if existing.is_verified() {
                return Err(ConflictError::MobileTaken.into());
            }
        }

        // Any remaining match is unverified and may be overwritten; the
        // email match takes precedence when both exist
        let target = email_match.or(mobile_match);

        // Upload the avatar before any database write so a storage failure
        // leaves no record behind
        let avatar_url = self
            .avatar_store
            .upload(&signup.avatar, &self.config.avatar_folder)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "avatar_upload_failed",
                    "Avatar upload failed, aborting signup"
                );
                DependencyError::AvatarUpload(e)
            })?;

        let password_hash = password::hash_password(&signup.password)?;
        let code = VerificationCode::new();
        let code_value = code.code.clone();

        let profile = AccountProfile {
            email,
            mobile_number,
            username,
            first_name: signup.first_name.trim().to_string(),
            last_name: signup.last_name.trim().to_string(),
            date_of_birth: signup.date_of_birth,
            gender: signup.gender,
            avatar_url,
            password_hash,
        };

        let (account, outcome) = match target {
            Some(mut existing) => {
                let replaced_avatar = existing.avatar_url.clone();
                existing.overwrite_with(profile, code);

                let saved = self.accounts.update(existing).await?;

                // The replaced avatar is unreachable now; removal is
                // best-effort and never fails the signup
                if replaced_avatar != self.config.default_avatar_url
                    && replaced_avatar != saved.avatar_url
                {
                    if let Err(e) = self.avatar_store.delete(&replaced_avatar).await {
                        tracing::warn!(
                            account_id = %saved.id,
                            error = %e,
                            event = "avatar_delete_failed",
                            "Failed to remove replaced avatar"
                        );
                    }
                }

                let outcome = RegistrationOutcome::overwritten(saved.id);
                (saved, outcome)
            }
            None => {
                let saved = self.accounts.create(Account::new(profile, code)).await?;
                let outcome = RegistrationOutcome::created(saved.id);
                (saved, outcome)
            }
        };

        // Dispatch only after the record is durable; a failure here leaves
        // the unverified record in place for a later attempt
        self.email_service
            .send_verification_email(&account.email, &account.username, &code_value, &signup.verify_url)
            .await
            .map_err(|e| {
                tracing::error!(
                    account_id = %account.id,
                    error = %e,
                    event = "verification_email_failed",
                    "Verification email dispatch failed"
                );
                DependencyError::EmailDispatch(e)
            })?;

        tracing::info!(
            account_id = %account.id,
            overwrote_existing = outcome.overwrote_existing,
            event = "signup_completed",
            "Signup completed"
        );

        Ok(outcome)
    }
}
