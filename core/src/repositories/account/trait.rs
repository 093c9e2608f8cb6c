//! Account repository trait defining the interface for account persistence.
//!
//! This module defines the repository pattern interface for Account entities.
//! The trait is async-first and uses Result types for proper error handling,
//! keeping the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual database operations. Identity lookups
/// take pre-normalized values: the caller lowercases email and username
/// before querying.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use vb_core::repositories::AccountRepository;
/// use vb_core::domain::entities::account::Account;
/// use vb_core::errors::DomainError;
///
/// struct MySqlAccountRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl AccountRepository for MySqlAccountRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #     async fn find_by_mobile(&self, _mobile_number: &str) -> Result<Option<Account>, DomainError> { todo!() }
/// #     async fn find_by_username(&self, _username: &str) -> Result<Option<Account>, DomainError> { todo!() }
/// #     async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> { todo!() }
/// #     async fn create(&self, _account: Account) -> Result<Account, DomainError> { todo!() }
/// #     async fn update(&self, _account: Account) -> Result<Account, DomainError> { todo!() }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its email address
    ///
    /// # Arguments
    /// * `email` - Lowercased email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered under the email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its mobile number
    ///
    /// # Arguments
    /// * `mobile_number` - Ten-digit mobile number
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered under the number
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_mobile(&self, mobile_number: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its username
    ///
    /// # Arguments
    /// * `username` - Lowercased username
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the username
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use vb_core::repositories::AccountRepository;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_username("alice").await? {
    ///     Some(account) => println!("Account found: {:?}", account.id),
    ///     None => println!("Account not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the account
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Arguments
    /// * `account` - The Account entity to persist
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Conflict)` - A unique field is already taken
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account, guarded by its version
    ///
    /// The write only applies when the stored version still matches
    /// `account.version`; the stored version is then incremented. A stale
    /// version means another request replaced the record in between.
    ///
    /// # Arguments
    /// * `account` - The Account entity carrying the version it was read at
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account with its version incremented
    /// * `Err(DomainError::Conflict(ConcurrentUpdate))` - Version was stale
    /// * `Err(DomainError::NotFound)` - No account with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use vb_core::repositories::AccountRepository;
    /// # use vb_core::domain::entities::account::Account;
    /// # async fn example(repo: &impl AccountRepository, mut account: Account) -> Result<(), Box<dyn std::error::Error>> {
    /// account.confirm_verification("483921")?;
    /// let saved = repo.update(account).await?;
    /// println!("Now at version {}", saved.version);
    /// # Ok(())
    /// # }
    /// ```
    async fn update(&self, account: Account) -> Result<Account, DomainError>;
}
