use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AuthenticateCommand;
use crate::account::models::Identifier;
use crate::account::models::RegisterCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account from validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing identifier and secret
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `AlreadyExists` - Identifier is already taken
    /// * `Hash` - Secret hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Verify credentials against the stored account.
    ///
    /// # Arguments
    /// * `command` - Validated command containing identifier and secret
    ///
    /// # Returns
    /// The matched account entity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Identifier unknown or secret mismatch
    ///   (deliberately the same error either way)
    /// * `Hash` - Stored hash is malformed
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, command: AuthenticateCommand) -> Result<Account, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account to storage.
    ///
    /// The store's uniqueness constraint on the identifier is the
    /// authoritative duplicate signal.
    ///
    /// # Arguments
    /// * `account` - Account entity to create
    ///
    /// # Errors
    /// * `AlreadyExists` - Identifier is already taken
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by identifier (exact match).
    ///
    /// # Arguments
    /// * `identifier` - Identifier to search for
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Account>, AccountError>;
}
