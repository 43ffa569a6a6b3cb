use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::TestAttempt,
    models::dto::request::AdminLoginRequest,
    repositories::AttemptRepository,
};

/// Dashboard-facing operations: the credential gate plus read access to
/// the attempt log. Question and user administration live on their own
/// services.
pub struct AdminService {
    admin_username: String,
    admin_password: SecretString,
    attempts: Arc<dyn AttemptRepository>,
}

impl AdminService {
    pub fn new(
        admin_username: String,
        admin_password: SecretString,
        attempts: Arc<dyn AttemptRepository>,
    ) -> Self {
        Self {
            admin_username,
            admin_password,
            attempts,
        }
    }

    pub fn login(&self, request: &AdminLoginRequest) -> AppResult<()> {
        request.validate()?;

        if request.username != self.admin_username
            || request.password != self.admin_password.expose_secret()
        {
            return Err(AppError::InvalidCredentials);
        }
        Ok(())
    }

    pub async fn list_attempts(&self) -> AppResult<Vec<TestAttempt>> {
        self.attempts.find_all().await
    }

    pub async fn count_attempts(&self) -> AppResult<u64> {
        self.attempts.count().await
    }
}
