//! SeaORM adapter for the ship repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};

use super::routine::{fetch_scalar, rows_call, scalar_call};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::ships::{Ship, ShipRepo, ShipStatus};

pub mod dto;

use dto::ShipRow;

#[derive(Debug, Clone)]
pub struct ShipRepoSea {
    db: Arc<DatabaseConnection>,
}

impl ShipRepoSea {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn ships(
        &self,
        routine: &str,
        args: Vec<sea_orm::Value>,
    ) -> Result<Vec<Ship>, DomainError> {
        ShipRow::find_by_statement(rows_call(routine, args))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(Ship::try_from)
            .collect()
    }

    async fn write(&self, routine: &str, ship: &Ship) -> Result<(), DomainError> {
        self.db
            .execute(scalar_call(
                routine,
                vec![
                    ship.code.clone().into(),
                    ship.name.clone().into(),
                    ship.fiscal_year.clone().into(),
                    ship.status.as_str().into(),
                ],
            ))
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

#[async_trait]
impl ShipRepo for ShipRepoSea {
    async fn get_all(&self) -> Result<Vec<Ship>, DomainError> {
        self.ships("sp_get_all_ships", vec![]).await
    }

    async fn get_by_code(&self, code: &str) -> Result<Option<Ship>, DomainError> {
        ShipRow::find_by_statement(rows_call("sp_get_ship_by_code", vec![code.into()]))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?
            .map(Ship::try_from)
            .transpose()
    }

    async fn create(&self, ship: Ship) -> Result<Ship, DomainError> {
        self.write("sp_create_ship", &ship).await?;
        Ok(ship)
    }

    async fn update(&self, ship: Ship) -> Result<Ship, DomainError> {
        self.write("sp_update_ship", &ship).await?;
        Ok(ship)
    }

    async fn delete(&self, code: &str) -> Result<bool, DomainError> {
        let affected: i64 = fetch_scalar(&self.db, "sp_delete_ship", vec![code.into()]).await?;
        Ok(affected > 0)
    }

    async fn exists(&self, code: &str) -> Result<bool, DomainError> {
        fetch_scalar(&self.db, "sp_ship_exists", vec![code.into()]).await
    }

    async fn get_by_status(&self, status: ShipStatus) -> Result<Vec<Ship>, DomainError> {
        self.ships("sp_get_ships_by_status", vec![status.as_str().into()])
            .await
    }

    async fn get_by_user(&self, user_id: i32) -> Result<Vec<Ship>, DomainError> {
        self.ships("sp_get_ships_by_user", vec![user_id.into()]).await
    }
}
