use std::sync::Arc;

use tracing::debug;

use crate::errors::domain::DomainError;
use crate::repos::crew::{CrewListEntry, CrewListRequest, CrewMemberHistoryEntry, CrewRepo};

#[derive(Clone)]
pub struct CrewService {
    repo: Arc<dyn CrewRepo>,
}

impl CrewService {
    pub fn new(repo: Arc<dyn CrewRepo>) -> Self {
        Self { repo }
    }

    pub async fn get_crew_list(
        &self,
        request: &CrewListRequest,
    ) -> Result<Vec<CrewListEntry>, DomainError> {
        debug!(
            ship_code = %request.ship_code,
            page = request.page_number,
            page_size = request.page_size,
            "Fetching crew list"
        );
        self.repo.get_crew_list(request).await
    }

    pub async fn get_crew_member_history(
        &self,
        crew_member_id: &str,
    ) -> Result<Vec<CrewMemberHistoryEntry>, DomainError> {
        self.repo.get_crew_member_history(crew_member_id).await
    }
}
