use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::adapters::{
    CrewRepoSea, FinancialReportRepoSea, ShipRepoSea, UserRepoSea, UserShipAssignmentRepoSea,
};
use crate::auth::credentials::{CredentialStore, StaticCredentialStore};
use crate::config::app::AppConfig;
use crate::error::AppError;
use crate::repos::{
    CrewRepo, FinancialReportRepo, ShipRepo, UserRepo, UserShipAssignmentRepo,
};
use crate::services::{
    CrewService, FinancialReportService, ShipService, UserService, UserShipAssignmentService,
};
use crate::state::app_state::{AppState, Services};
use crate::state::security_config::SecurityConfig;

/// The persistence seams behind every service.
#[derive(Clone)]
pub struct Repositories {
    pub ships: Arc<dyn ShipRepo>,
    pub users: Arc<dyn UserRepo>,
    pub crew: Arc<dyn CrewRepo>,
    pub financial_reports: Arc<dyn FinancialReportRepo>,
    pub assignments: Arc<dyn UserShipAssignmentRepo>,
}

impl Repositories {
    /// SeaORM adapters sharing one connection pool.
    pub fn sea(db: &Arc<DatabaseConnection>) -> Self {
        Self {
            ships: Arc::new(ShipRepoSea::new(Arc::clone(db))),
            users: Arc::new(UserRepoSea::new(Arc::clone(db))),
            crew: Arc::new(CrewRepoSea::new(Arc::clone(db))),
            financial_reports: Arc::new(FinancialReportRepoSea::new(Arc::clone(db))),
            assignments: Arc::new(UserShipAssignmentRepoSea::new(Arc::clone(db))),
        }
    }

    fn into_services(self) -> Services {
        Services {
            ships: ShipService::new(self.ships),
            users: UserService::new(self.users),
            crew: CrewService::new(self.crew),
            financial_reports: FinancialReportService::new(self.financial_reports),
            assignments: UserShipAssignmentService::new(self.assignments),
        }
    }
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: Option<AppConfig>,
    security: Option<SecurityConfig>,
    db: Option<Arc<DatabaseConnection>>,
    credentials: Option<Arc<dyn CredentialStore>>,
    repositories: Option<Repositories>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            security: None,
            db: None,
            credentials: None,
            repositories: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_db(mut self, db: DatabaseConnection) -> Self {
        self.db = Some(Arc::new(db));
        self
    }

    /// Overrides the signing settings derived from the config.
    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = Some(security);
        self
    }

    pub fn with_credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    /// Injected repositories take precedence over adapters built from the connection.
    pub fn with_repositories(mut self, repositories: Repositories) -> Self {
        self.repositories = Some(repositories);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let config = self.config.unwrap_or_else(AppConfig::for_tests);
        let security = self
            .security
            .unwrap_or_else(|| SecurityConfig::from_config(&config));

        let repositories = match (self.repositories, self.db.as_ref()) {
            (Some(repositories), _) => repositories,
            (None, Some(db)) => Repositories::sea(db),
            (None, None) => {
                return Err(AppError::config(
                    "Either a database connection or repositories must be provided",
                ))
            }
        };

        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(StaticCredentialStore::builtin()));

        Ok(AppState::new(
            self.db,
            security,
            config,
            credentials,
            repositories.into_services(),
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
