use async_trait::async_trait;
use serde::Serialize;
use time::Date;

use super::require_text;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialReportRequest {
    pub ship_code: String,
    pub account_period: Date,
}

impl FinancialReportRequest {
    pub fn new(ship_code: &str, account_period: Date) -> Result<Self, DomainError> {
        require_text(ship_code, "ShipCode cannot be empty.")?;
        Ok(Self {
            ship_code: ship_code.to_string(),
            account_period,
        })
    }
}

/// One chart-of-accounts line. Amounts are absent when the store has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReportLine {
    pub coa_description: String,
    pub account_number: String,
    pub actual: Option<f64>,
    pub budget: Option<f64>,
    pub variance: Option<f64>,
    pub actual_ytd: Option<f64>,
    pub budget_ytd: Option<f64>,
    pub variance_ytd: Option<f64>,
}

#[async_trait]
pub trait FinancialReportRepo: Send + Sync {
    async fn get_financial_report(
        &self,
        request: &FinancialReportRequest,
    ) -> Result<Vec<FinancialReportLine>, DomainError>;
}
