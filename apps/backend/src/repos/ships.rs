use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipStatus {
    Active,
    Inactive,
}

impl ShipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipStatus::Active => "Active",
            ShipStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ShipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `Active` / `Inactive`.
impl FromStr for ShipStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(ShipStatus::Active),
            "Inactive" => Ok(ShipStatus::Inactive),
            _ => Err(DomainError::validation(
                "Status must be 'Active' or 'Inactive'.",
            )),
        }
    }
}

/// Ship domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub code: String,
    pub name: String,
    pub fiscal_year: String,
    pub status: ShipStatus,
}

impl Ship {
    /// Build a ship from raw request fields, checking each in order.
    pub fn from_parts(
        code: &str,
        name: &str,
        fiscal_year: &str,
        status: &str,
    ) -> Result<Self, DomainError> {
        require_text(code, "Ship code is required.")?;
        require_text(name, "Ship name is required.")?;
        require_text(fiscal_year, "Fiscal year is required.")?;
        require_text(status, "Ship status is required.")?;
        let status = status.parse::<ShipStatus>().map_err(|_| {
            DomainError::validation("Ship status must be 'Active' or 'Inactive'.")
        })?;

        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            fiscal_year: fiscal_year.to_string(),
            status,
        })
    }
}

#[async_trait]
pub trait ShipRepo: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Ship>, DomainError>;
    async fn get_by_code(&self, code: &str) -> Result<Option<Ship>, DomainError>;
    async fn create(&self, ship: Ship) -> Result<Ship, DomainError>;
    async fn update(&self, ship: Ship) -> Result<Ship, DomainError>;
    /// `false` when no ship had that code.
    async fn delete(&self, code: &str) -> Result<bool, DomainError>;
    async fn exists(&self, code: &str) -> Result<bool, DomainError>;
    async fn get_by_status(&self, status: ShipStatus) -> Result<Vec<Ship>, DomainError>;
    async fn get_by_user(&self, user_id: i32) -> Result<Vec<Ship>, DomainError>;
}
