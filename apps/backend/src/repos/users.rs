use async_trait::async_trait;

use super::require_text;
use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub name: String,
    pub role: String,
}

/// A user before the store assigns its id
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub role: String,
}

impl NewUser {
    pub fn new(name: &str, role: &str) -> Result<Self, DomainError> {
        require_text(name, "User name is required.")?;
        require_text(role, "User role is required.")?;
        Ok(Self {
            name: name.to_string(),
            role: role.to_string(),
        })
    }

    pub fn with_id(self, user_id: i32) -> User {
        User {
            user_id,
            name: self.name,
            role: self.role,
        }
    }
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, DomainError>;
    async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, DomainError>;
    /// Insert and return the user with its generated id.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
    async fn update(&self, user: User) -> Result<User, DomainError>;
    async fn delete(&self, user_id: i32) -> Result<bool, DomainError>;
    async fn exists(&self, user_id: i32) -> Result<bool, DomainError>;
}
