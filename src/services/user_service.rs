use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::domain::User,
    models::dto::request::{LoginRequest, RegisterRequest},
    models::dto::response::UserDto,
    repositories::UserRepository,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserDto> {
        request.validate()?;

        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateResource(
                "Username already exists".to_string(),
            ));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateResource(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = password::hash_password(&request.password)?;
        let user = User::new(&request.username, &request.email, password_hash);
        let user = self.users.insert(user).await?;

        log::info!("registered user {}", user.username);
        Ok(UserDto::from(user))
    }

    /// Missing user and wrong password fail identically so the response
    /// does not leak which usernames exist.
    pub async fn login(&self, request: LoginRequest) -> AppResult<UserDto> {
        request.validate()?;

        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(UserDto::from(user))
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserDto>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn count_users(&self) -> AppResult<u64> {
        self.users.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user_repository::MockUserRepository;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "priya".to_string(),
            email: "priya@example.com".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn register_hashes_the_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert().times(1).returning(|user| {
            assert_ne!(user.password_hash, "secret123");
            assert!(user.password_hash.starts_with("$argon2"));
            Ok(user)
        });

        let service = UserService::new(Arc::new(repo));
        let dto = service
            .register(register_request())
            .await
            .expect("registration should work");

        assert_eq!(dto.username, "priya");
    }

    #[tokio::test]
    async fn register_rejects_taken_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| {
            Ok(Some(User::new(
                "priya",
                "other@example.com",
                "hash".to_string(),
            )))
        });
        repo.expect_insert().never();

        let service = UserService::new(Arc::new(repo));
        let result = service.register(register_request()).await;

        assert!(matches!(result, Err(AppError::DuplicateResource(_))));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_find_by_email().returning(|_| {
            Ok(Some(User::new(
                "someone",
                "priya@example.com",
                "hash".to_string(),
            )))
        });
        repo.expect_insert().never();

        let service = UserService::new(Arc::new(repo));
        let result = service.register(register_request()).await;

        assert!(matches!(result, Err(AppError::DuplicateResource(_))));
    }

    #[tokio::test]
    async fn login_round_trip_and_wrong_password() {
        let hash = password::hash_password("secret123").unwrap();
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(move |username| {
            if username == "priya" {
                let mut user = User::new("priya", "priya@example.com", hash.clone());
                user.id = "user-1".to_string();
                Ok(Some(user))
            } else {
                Ok(None)
            }
        });

        let service = UserService::new(Arc::new(repo));

        let dto = service
            .login(LoginRequest {
                username: "priya".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .expect("login should work");
        assert_eq!(dto.id, "user-1");

        let wrong_password = service
            .login(LoginRequest {
                username: "priya".to_string(),
                password: "nope-nope".to_string(),
            })
            .await;
        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));

        let unknown_user = service
            .login(LoginRequest {
                username: "ghost".to_string(),
                password: "secret123".to_string(),
            })
            .await;
        assert!(matches!(unknown_user, Err(AppError::InvalidCredentials)));
    }
}
