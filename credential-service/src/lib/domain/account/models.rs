use std::fmt;

use crate::account::errors::IdentifierError;

/// Account aggregate entity.
///
/// A stored identifier plus the hash of its secret. Created by
/// registration, read by authentication, never updated or deleted.
#[derive(Debug, Clone)]
pub struct Account {
    pub identifier: Identifier,
    pub secret_hash: String,
}

/// Account identifier value type
///
/// Case-sensitive, compared by exact match. The only constraint is
/// presence: an empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create a new validated identifier.
    ///
    /// # Arguments
    /// * `identifier` - Raw identifier string
    ///
    /// # Errors
    /// * `Empty` - Identifier is the empty string
    pub fn new(identifier: String) -> Result<Self, IdentifierError> {
        if identifier.is_empty() {
            Err(IdentifierError::Empty)
        } else {
            Ok(Self(identifier))
        }
    }

    /// Get identifier as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub identifier: Identifier,
    pub secret: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `identifier` - Validated account identifier
    /// * `secret` - Plain text secret (will be hashed by the service)
    pub fn new(identifier: Identifier, secret: String) -> Self {
        Self { identifier, secret }
    }
}

/// Command to authenticate against an existing account
#[derive(Debug)]
pub struct AuthenticateCommand {
    pub identifier: Identifier,
    pub secret: String,
}

impl AuthenticateCommand {
    /// Construct a new authenticate command.
    ///
    /// # Arguments
    /// * `identifier` - Validated account identifier
    /// * `secret` - Plain text secret to verify
    pub fn new(identifier: Identifier, secret: String) -> Self {
        Self { identifier, secret }
    }
}
