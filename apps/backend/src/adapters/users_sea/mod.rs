//! SeaORM adapter for the user repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};

use super::routine::{fetch_scalar, rows_call, scalar_call};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::users::{NewUser, User, UserRepo};

pub mod dto;

use dto::UserRow;

#[derive(Debug, Clone)]
pub struct UserRepoSea {
    db: Arc<DatabaseConnection>,
}

impl UserRepoSea {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepo for UserRepoSea {
    async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = UserRow::find_by_statement(rows_call("sp_get_all_users", vec![]))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, DomainError> {
        let row = UserRow::find_by_statement(rows_call("sp_get_user_by_id", vec![user_id.into()]))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(row.map(User::from))
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let user_id: i32 = fetch_scalar(
            &self.db,
            "sp_create_user",
            vec![user.name.clone().into(), user.role.clone().into()],
        )
        .await?;
        Ok(user.with_id(user_id))
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.db
            .execute(scalar_call(
                "sp_update_user",
                vec![
                    user.user_id.into(),
                    user.name.clone().into(),
                    user.role.clone().into(),
                ],
            ))
            .await
            .map_err(map_db_err)?;
        Ok(user)
    }

    async fn delete(&self, user_id: i32) -> Result<bool, DomainError> {
        let affected: i64 = fetch_scalar(&self.db, "sp_delete_user", vec![user_id.into()]).await?;
        Ok(affected > 0)
    }

    async fn exists(&self, user_id: i32) -> Result<bool, DomainError> {
        fetch_scalar(&self.db, "sp_user_exists", vec![user_id.into()]).await
    }
}
