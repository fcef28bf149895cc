use sea_orm::FromQueryResult;

use crate::repos::financial_reports::FinancialReportLine;

/// Amounts are `double precision` in the routine's result set.
#[derive(Debug, Clone, FromQueryResult)]
pub struct FinancialReportRow {
    pub coa_description: String,
    pub account_number: String,
    pub actual: Option<f64>,
    pub budget: Option<f64>,
    pub variance: Option<f64>,
    pub actual_ytd: Option<f64>,
    pub budget_ytd: Option<f64>,
    pub variance_ytd: Option<f64>,
}

impl From<FinancialReportRow> for FinancialReportLine {
    fn from(row: FinancialReportRow) -> Self {
        FinancialReportLine {
            coa_description: row.coa_description,
            account_number: row.account_number,
            actual: row.actual,
            budget: row.budget,
            variance: row.variance,
            actual_ytd: row.actual_ytd,
            budget_ytd: row.budget_ytd,
            variance_ytd: row.variance_ytd,
        }
    }
}
