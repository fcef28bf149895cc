use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::errors::domain::DomainError;

/// A ship assigned to a user, joined with both sides for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserShipAssignment {
    pub user_id: i32,
    pub ship_code: String,
    #[serde(with = "time::serde::rfc3339")]
    pub assigned_date: OffsetDateTime,
    pub user_name: String,
    pub user_role: String,
    pub ship_name: String,
    pub fiscal_year: String,
    pub ship_status: String,
}

/// Validate the `{userId, shipCode}` pair used by assign and unassign.
pub fn validate_assignment_key(user_id: i32, ship_code: &str) -> Result<(), DomainError> {
    if user_id <= 0 {
        return Err(DomainError::validation("Valid UserId is required."));
    }
    if ship_code.trim().is_empty() {
        return Err(DomainError::validation("ShipCode is required."));
    }
    Ok(())
}

#[async_trait]
pub trait UserShipAssignmentRepo: Send + Sync {
    async fn assign(&self, user_id: i32, ship_code: &str)
        -> Result<UserShipAssignment, DomainError>;
    /// `false` when there was no such assignment.
    async fn unassign(&self, user_id: i32, ship_code: &str) -> Result<bool, DomainError>;
    /// Both filters optional; `None` means "any".
    async fn list(
        &self,
        user_id: Option<i32>,
        ship_code: Option<&str>,
    ) -> Result<Vec<UserShipAssignment>, DomainError>;
}
