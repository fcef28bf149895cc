//! SeaORM adapter for user-ship assignments.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, FromQueryResult};

use super::routine::{fetch_scalar, rows_call};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;
use crate::repos::assignments::{UserShipAssignment, UserShipAssignmentRepo};

pub mod dto;

use dto::AssignmentRow;

#[derive(Debug, Clone)]
pub struct UserShipAssignmentRepoSea {
    db: Arc<DatabaseConnection>,
}

impl UserShipAssignmentRepoSea {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserShipAssignmentRepo for UserShipAssignmentRepoSea {
    async fn assign(
        &self,
        user_id: i32,
        ship_code: &str,
    ) -> Result<UserShipAssignment, DomainError> {
        let stmt = rows_call(
            "sp_assign_ship_to_user",
            vec![user_id.into(), ship_code.into()],
        );
        AssignmentRow::find_by_statement(stmt)
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .map(UserShipAssignment::from)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::Other("EmptyResult".into()),
                    "Failed to assign ship to user.",
                )
            })
    }

    async fn unassign(&self, user_id: i32, ship_code: &str) -> Result<bool, DomainError> {
        let affected: i64 = fetch_scalar(
            &self.db,
            "sp_unassign_ship_from_user",
            vec![user_id.into(), ship_code.into()],
        )
        .await?;
        Ok(affected > 0)
    }

    async fn list(
        &self,
        user_id: Option<i32>,
        ship_code: Option<&str>,
    ) -> Result<Vec<UserShipAssignment>, DomainError> {
        let stmt = rows_call(
            "sp_get_user_ship_assignments",
            vec![user_id.into(), ship_code.map(str::to_string).into()],
        );
        let rows = AssignmentRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(UserShipAssignment::from).collect())
    }
}
