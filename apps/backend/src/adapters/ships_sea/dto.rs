//! Row shapes returned by the ship routines.

use sea_orm::FromQueryResult;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::ships::{Ship, ShipStatus};

#[derive(Debug, Clone, FromQueryResult)]
pub struct ShipRow {
    pub code: String,
    pub name: String,
    pub fiscal_year: String,
    pub status: String,
}

impl TryFrom<ShipRow> for Ship {
    type Error = DomainError;

    fn try_from(row: ShipRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<ShipStatus>().map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Ship {} has unknown status '{}'", row.code, row.status),
            )
        })?;
        Ok(Ship {
            code: row.code,
            name: row.name,
            fiscal_year: row.fiscal_year,
            status,
        })
    }
}
