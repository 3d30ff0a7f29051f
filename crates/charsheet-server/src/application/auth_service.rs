//! Authentication Application Service
//!
//! Exchanges user credentials for a bearer token.

use std::sync::Arc;

use charsheet::{DomainError, UserDirectory};

use crate::adapters::{HmacTokenService, IssuedToken};

pub struct AuthService {
    users: Arc<dyn UserDirectory>,
    tokens: Arc<HmacTokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserDirectory>, tokens: Arc<HmacTokenService>) -> Self {
        Self { users, tokens }
    }

    /// `Ok(None)` when the credentials do not match a user
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<IssuedToken>, DomainError> {
        match self.users.authenticate(email, password).await? {
            Some(user) => {
                tracing::info!("Issued token for user {}", user);
                Ok(Some(self.tokens.issue(&user)))
            }
            None => {
                tracing::warn!("Failed authentication attempt");
                Ok(None)
            }
        }
    }
}
