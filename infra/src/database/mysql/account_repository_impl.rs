//! MySQL implementation of the AccountRepository trait.
//!
//! This module provides the concrete implementation of account persistence
//! using MySQL with SQLx. Uniqueness is enforced by the table's unique
//! indexes and surfaced as domain conflicts; updates are guarded by the
//! record version so concurrent signups cannot silently overwrite each
//! other.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vb_core::domain::entities::account::{Account, Gender, VerificationStatus};
use vb_core::domain::entities::verification_code::VerificationCode;
use vb_core::errors::{ConflictError, DomainError};
use vb_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;

        let gender_str: String = row
            .try_get("gender")
            .map_err(|e| DomainError::Database(format!("Failed to get gender: {}", e)))?;
        let gender: Gender = gender_str
            .parse()
            .map_err(|e| DomainError::Database(format!("Invalid gender value: {}", e)))?;

        let is_verified: bool = row
            .try_get("is_verified")
            .map_err(|e| DomainError::Database(format!("Failed to get is_verified: {}", e)))?;
        let code: Option<String> = row
            .try_get("verification_code")
            .map_err(|e| DomainError::Database(format!("Failed to get verification_code: {}", e)))?;
        let expiry: Option<DateTime<Utc>> = row.try_get("verification_code_expiry").map_err(|e| {
            DomainError::Database(format!("Failed to get verification_code_expiry: {}", e))
        })?;

        // An unverified row must carry its code and expiry together
        let verification = if is_verified {
            VerificationStatus::Verified
        } else {
            match (code, expiry) {
                (Some(code), Some(expiry)) => {
                    VerificationStatus::Pending(VerificationCode::from_parts(code, expiry))
                }
                _ => {
                    return Err(DomainError::Database(format!(
                        "Unverified account {} is missing its verification code",
                        id
                    )))
                }
            }
        };

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            mobile_number: row
                .try_get("mobile_number")
                .map_err(|e| DomainError::Database(format!("Failed to get mobile_number: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Database(format!("Failed to get username: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::Database(format!("Failed to get last_name: {}", e)))?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| DomainError::Database(format!("Failed to get date_of_birth: {}", e)))?,
            gender,
            avatar_url: row
                .try_get("avatar_url")
                .map_err(|e| DomainError::Database(format!("Failed to get avatar_url: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("Failed to get password_hash: {}", e)))?,
            verification,
            version: row
                .try_get("version")
                .map_err(|e| DomainError::Database(format!("Failed to get version: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Map a duplicate-key message to the conflicting identity
    fn conflict_for_duplicate(message: &str) -> Option<ConflictError> {
        if message.contains("uq_accounts_email") {
            Some(ConflictError::EmailTaken)
        } else if message.contains("uq_accounts_mobile_number") {
            Some(ConflictError::MobileTaken)
        } else if message.contains("uq_accounts_username") {
            Some(ConflictError::UsernameTaken)
        } else {
            None
        }
    }

    /// Translate a write failure, surfacing unique-index hits as conflicts
    fn translate_write_error(err: sqlx::Error, context: &str) -> DomainError {
        if let sqlx::Error::Database(db_err) = &err {
            // SQLSTATE 23000 covers integrity constraint violations
            if db_err.code().as_deref() == Some("23000") {
                if let Some(conflict) = Self::conflict_for_duplicate(db_err.message()) {
                    return conflict.into();
                }
            }
        }
        DomainError::Database(format!("{}: {}", context, err))
    }

    async fn find_one(
        &self,
        query: &str,
        bind: &str,
    ) -> Result<Option<Account>, DomainError> {
        let result = sqlx::query(query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, email, mobile_number, username, first_name, last_name,
           date_of_birth, gender, avatar_url, password_hash,
           is_verified, verification_code, verification_code_expiry,
           version, created_at, updated_at
    FROM accounts
"#;

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, email).await
    }

    async fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE mobile_number = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, mobile_number).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE username = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, username).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, &id.to_string()).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, mobile_number, username, first_name, last_name,
                date_of_birth, gender, avatar_url, password_hash,
                is_verified, verification_code, verification_code_expiry,
                version, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let pending = account.pending_code();

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.mobile_number)
            .bind(&account.username)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.date_of_birth)
            .bind(account.gender.as_str())
            .bind(&account.avatar_url)
            .bind(&account.password_hash)
            .bind(account.is_verified())
            .bind(pending.map(|c| c.code.clone()))
            .bind(pending.map(|c| c.expires_at))
            .bind(account.version)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::translate_write_error(e, "Failed to create account"))?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        // The version in the WHERE clause makes this a compare-and-set:
        // nothing is written when another request bumped the row first
        let query = r#"
            UPDATE accounts SET
                email = ?,
                mobile_number = ?,
                username = ?,
                first_name = ?,
                last_name = ?,
                date_of_birth = ?,
                gender = ?,
                avatar_url = ?,
                password_hash = ?,
                is_verified = ?,
                verification_code = ?,
                verification_code_expiry = ?,
                version = version + 1,
                updated_at = ?
            WHERE id = ? AND version = ?
        "#;

        let pending = account.pending_code();

        let result = sqlx::query(query)
            .bind(&account.email)
            .bind(&account.mobile_number)
            .bind(&account.username)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(account.date_of_birth)
            .bind(account.gender.as_str())
            .bind(&account.avatar_url)
            .bind(&account.password_hash)
            .bind(account.is_verified())
            .bind(pending.map(|c| c.code.clone()))
            .bind(pending.map(|c| c.expires_at))
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .bind(account.version)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::translate_write_error(e, "Failed to update account"))?;

        if result.rows_affected() == 0 {
            // Distinguish a vanished row from a lost version race
            let exists_query = "SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?) AS account_exists";
            let row = sqlx::query(exists_query)
                .bind(account.id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::Database(format!("Failed to check account existence: {}", e))
                })?;
            let exists: i8 = row
                .try_get("account_exists")
                .map_err(|e| DomainError::Database(format!("Failed to get existence result: {}", e)))?;

            if exists == 1 {
                return Err(ConflictError::ConcurrentUpdate.into());
            }
            return Err(DomainError::user_not_found());
        }

        let mut updated = account;
        updated.version += 1;
        Ok(updated)
    }
}
