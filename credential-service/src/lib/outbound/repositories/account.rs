use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::Identifier;
use crate::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn account_from_row(row: PgRow) -> Result<Account, AccountError> {
        let identifier: String = row
            .try_get("identifier")
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;
        let secret_hash: String = row
            .try_get("secret_hash")
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(Account {
            identifier: Identifier::new(identifier)?,
            secret_hash,
        })
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (identifier, secret_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(account.identifier.as_str())
        .bind(&account.secret_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The primary key on identifier is the authoritative duplicate
            // signal; the service-level pre-check is only an optimization.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountError::AlreadyExists(account.identifier.to_string());
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT identifier, secret_hash
            FROM accounts
            WHERE identifier = $1
            "#,
        )
        .bind(identifier.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(Self::account_from_row).transpose()
    }
}
