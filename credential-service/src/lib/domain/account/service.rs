use std::sync::Arc;

use async_trait::async_trait;
use hashing::SecretHasher;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AuthenticateCommand;
use crate::account::models::RegisterCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct CredentialService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    hasher: SecretHasher,
}

impl<R> CredentialService<R>
where
    R: AccountRepository,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            hasher: SecretHasher::new(),
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for CredentialService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        // Pre-check is a convenience only: two concurrent registrations can
        // both pass it, and the store's uniqueness constraint settles the
        // race inside `create`.
        if self
            .repository
            .find_by_identifier(&command.identifier)
            .await?
            .is_some()
        {
            return Err(AccountError::AlreadyExists(command.identifier.to_string()));
        }

        let secret_hash = self.hasher.hash(&command.secret)?;

        let account = Account {
            identifier: command.identifier,
            secret_hash,
        };

        self.repository.create(account).await
    }

    async fn authenticate(&self, command: AuthenticateCommand) -> Result<Account, AccountError> {
        let account = self
            .repository
            .find_by_identifier(&command.identifier)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let is_valid = self.hasher.verify(&command.secret, &account.secret_hash)?;

        if !is_valid {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }
}
