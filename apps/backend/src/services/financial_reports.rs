use std::sync::Arc;

use crate::errors::domain::DomainError;
use crate::repos::financial_reports::{
    FinancialReportLine, FinancialReportRepo, FinancialReportRequest,
};

#[derive(Clone)]
pub struct FinancialReportService {
    repo: Arc<dyn FinancialReportRepo>,
}

impl FinancialReportService {
    pub fn new(repo: Arc<dyn FinancialReportRepo>) -> Self {
        Self { repo }
    }

    pub async fn get_financial_report(
        &self,
        request: &FinancialReportRequest,
    ) -> Result<Vec<FinancialReportLine>, DomainError> {
        self.repo.get_financial_report(request).await
    }
}
