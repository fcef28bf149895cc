use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::credentials::CredentialStore;
use crate::config::app::AppConfig;
use crate::services::assignments::UserShipAssignmentService;
use crate::services::crew::CrewService;
use crate::services::financial_reports::FinancialReportService;
use crate::services::ships::ShipService;
use crate::services::users::UserService;

/// One service per entity family, shared by all workers.
#[derive(Clone)]
pub struct Services {
    pub ships: ShipService,
    pub users: UserService,
    pub crew: CrewService,
    pub financial_reports: FinancialReportService,
    pub assignments: UserShipAssignmentService,
}

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when repositories are injected directly)
    db: Option<Arc<DatabaseConnection>>,
    /// Token signing settings
    pub security: SecurityConfig,
    pub config: Arc<AppConfig>,
    pub credentials: Arc<dyn CredentialStore>,
    pub services: Services,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        db: Option<Arc<DatabaseConnection>>,
        security: SecurityConfig,
        config: AppConfig,
        credentials: Arc<dyn CredentialStore>,
        services: Services,
    ) -> Self {
        Self {
            db,
            security,
            config: Arc::new(config),
            credentials,
            services,
            started_at: Instant::now(),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_deref()
    }
}
