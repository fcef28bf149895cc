use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::ships::{Ship, ShipRepo, ShipStatus};

/// Wire shape of a ship; also the create/update request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipDto {
    pub code: String,
    pub name: String,
    pub fiscal_year: String,
    pub status: String,
}

impl From<Ship> for ShipDto {
    fn from(ship: Ship) -> Self {
        ShipDto {
            code: ship.code,
            name: ship.name,
            fiscal_year: ship.fiscal_year,
            status: ship.status.to_string(),
        }
    }
}

pub fn ship_not_found(code: &str) -> DomainError {
    DomainError::not_found(NotFoundKind::Ship, format!("Ship with code {code} not found."))
}

#[derive(Clone)]
pub struct ShipService {
    repo: Arc<dyn ShipRepo>,
}

impl ShipService {
    pub fn new(repo: Arc<dyn ShipRepo>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<ShipDto>, DomainError> {
        let ships = self.repo.get_all().await?;
        Ok(ships.into_iter().map(ShipDto::from).collect())
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<ShipDto>, DomainError> {
        Ok(self.repo.get_by_code(code).await?.map(ShipDto::from))
    }

    pub async fn create(&self, ship: Ship) -> Result<ShipDto, DomainError> {
        let created = self.repo.create(ship).await?;
        info!(ship_code = %created.code, "Ship created");
        Ok(created.into())
    }

    /// Update an existing ship; missing ships are reported, not created.
    pub async fn update(&self, ship: Ship) -> Result<ShipDto, DomainError> {
        if !self.repo.exists(&ship.code).await? {
            return Err(ship_not_found(&ship.code));
        }
        let updated = self.repo.update(ship).await?;
        info!(ship_code = %updated.code, "Ship updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, code: &str) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(code).await?;
        if deleted {
            info!(ship_code = %code, "Ship deleted");
        }
        Ok(deleted)
    }

    pub async fn get_by_status(&self, status: ShipStatus) -> Result<Vec<ShipDto>, DomainError> {
        let ships = self.repo.get_by_status(status).await?;
        Ok(ships.into_iter().map(ShipDto::from).collect())
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ShipDto>, DomainError> {
        let ships = self.repo.get_by_user(user_id).await?;
        Ok(ships.into_iter().map(ShipDto::from).collect())
    }
}
