use std::sync::Arc;

use tracing::info;

use crate::errors::domain::DomainError;
use crate::repos::assignments::{
    validate_assignment_key, UserShipAssignment, UserShipAssignmentRepo,
};

#[derive(Clone)]
pub struct UserShipAssignmentService {
    repo: Arc<dyn UserShipAssignmentRepo>,
}

impl UserShipAssignmentService {
    pub fn new(repo: Arc<dyn UserShipAssignmentRepo>) -> Self {
        Self { repo }
    }

    pub async fn assign(
        &self,
        user_id: i32,
        ship_code: &str,
    ) -> Result<UserShipAssignment, DomainError> {
        validate_assignment_key(user_id, ship_code)?;
        let assignment = self.repo.assign(user_id, ship_code).await?;
        info!(user_id, ship_code = %ship_code, "Ship assigned to user");
        Ok(assignment)
    }

    pub async fn unassign(&self, user_id: i32, ship_code: &str) -> Result<bool, DomainError> {
        validate_assignment_key(user_id, ship_code)?;
        let removed = self.repo.unassign(user_id, ship_code).await?;
        if removed {
            info!(user_id, ship_code = %ship_code, "Ship unassigned from user");
        }
        Ok(removed)
    }

    pub async fn list(
        &self,
        user_id: Option<i32>,
        ship_code: Option<&str>,
    ) -> Result<Vec<UserShipAssignment>, DomainError> {
        self.repo.list(user_id, ship_code).await
    }
}
