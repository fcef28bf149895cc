//! SeaORM adapter for crew listings and history.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, FromQueryResult};

use super::routine::rows_call;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;
use crate::repos::crew::{CrewListEntry, CrewListRequest, CrewMemberHistoryEntry, CrewRepo};

pub mod dto;

use dto::{CrewListRow, CrewMemberHistoryRow};

#[derive(Debug, Clone)]
pub struct CrewRepoSea {
    db: Arc<DatabaseConnection>,
}

impl CrewRepoSea {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrewRepo for CrewRepoSea {
    async fn get_crew_list(
        &self,
        request: &CrewListRequest,
    ) -> Result<Vec<CrewListEntry>, DomainError> {
        let stmt = rows_call(
            "sp_get_crew_list",
            vec![
                request.ship_code.clone().into(),
                request.page_number.into(),
                request.page_size.into(),
                request.sort_column.clone().into(),
                request.sort_direction.as_str().into(),
                request.search_term.clone().into(),
            ],
        );
        let rows = CrewListRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(CrewListEntry::from).collect())
    }

    async fn get_crew_member_history(
        &self,
        crew_member_id: &str,
    ) -> Result<Vec<CrewMemberHistoryEntry>, DomainError> {
        let stmt = rows_call("sp_get_crew_member_history", vec![crew_member_id.into()]);
        let rows = CrewMemberHistoryRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(CrewMemberHistoryEntry::from).collect())
    }
}
