use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserListQuery;
use crate::domain::user::models::Username;
use crate::user::errors::PasswordError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn hash(&self, password: &str) -> Result<String, UserError> {
        self.authenticator
            .hash_password(password)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()).into())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.hash(command.password.expose())?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(User, AuthenticationResult), UserError> {
        let username = Username::new(username.to_string())
            .map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let claims = self.authenticator.claims_for(
            user.id.0,
            user.username.as_str(),
            user.email.as_str(),
        );

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => {
                    UserError::Unknown(format!("Password verification failed: {}", err))
                }
                AuthenticationError::JwtError(err) => {
                    UserError::Unknown(format!("Token generation failed: {}", err))
                }
            })?;

        if !user.is_active {
            tracing::warn!(user_id = %user.id, "Login attempt on disabled account");
            return Err(UserError::AccountDisabled);
        }

        Ok((user, result))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn list_users(&self, query: UserListQuery) -> Result<(Vec<User>, u64), UserError> {
        let users = self.repository.list(query.skip, query.limit).await?;
        let total = self.repository.count().await?;
        Ok((users, total))
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.hash(new_password.expose())?;
        }

        if let Some(is_active) = command.is_active {
            user.is_active = is_active;
        }

        user.updated_at = Some(Utc::now());

        self.repository.update(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
