use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, FromQueryResult};

use super::routine::rows_call;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::financial_reports::{
    FinancialReportLine, FinancialReportRepo, FinancialReportRequest,
};

pub mod dto;

use dto::FinancialReportRow;

#[derive(Debug, Clone)]
pub struct FinancialReportRepoSea {
    db: Arc<DatabaseConnection>,
}

impl FinancialReportRepoSea {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FinancialReportRepo for FinancialReportRepoSea {
    async fn get_financial_report(
        &self,
        request: &FinancialReportRequest,
    ) -> Result<Vec<FinancialReportLine>, DomainError> {
        let stmt = rows_call(
            "sp_get_financial_report",
            vec![request.ship_code.clone().into(), request.account_period.into()],
        );
        let rows = FinancialReportRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(FinancialReportLine::from).collect())
    }
}
