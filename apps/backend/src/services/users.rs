use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::users::{NewUser, User, UserRepo};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub user_id: i32,
    pub name: String,
    pub role: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            user_id: user.user_id,
            name: user.name,
            role: user.role,
        }
    }
}

pub fn user_not_found(user_id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::User, format!("User with ID {user_id} not found."))
}

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<UserDto>, DomainError> {
        let users = self.repo.get_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserDto>, DomainError> {
        Ok(self.repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    pub async fn create(&self, user: NewUser) -> Result<UserDto, DomainError> {
        let created = self.repo.create(user).await?;
        info!(user_id = created.user_id, "User created");
        Ok(created.into())
    }

    pub async fn update(&self, user: User) -> Result<UserDto, DomainError> {
        if !self.repo.exists(user.user_id).await? {
            return Err(user_not_found(user.user_id));
        }
        let updated = self.repo.update(user).await?;
        info!(user_id = updated.user_id, "User updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, user_id: i32) -> Result<bool, DomainError> {
        self.repo.delete(user_id).await
    }
}
