use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use time::Date;

use super::require_text;
use crate::errors::domain::DomainError;

pub const DEFAULT_PAGE_NUMBER: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;
pub const DEFAULT_SORT_COLUMN: &str = "RankOrder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(DomainError::validation(
                "Sort direction must be 'ASC' or 'DESC'.",
            )),
        }
    }
}

/// Paged, sorted, optionally filtered crew listing for one ship.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewListRequest {
    pub ship_code: String,
    pub page_number: i32,
    pub page_size: i32,
    pub sort_column: String,
    pub sort_direction: SortDirection,
    pub search_term: Option<String>,
}

impl CrewListRequest {
    /// Validate raw query values. Checks run in order: ship code, page
    /// number, page size, sort direction.
    pub fn new(
        ship_code: &str,
        page_number: i32,
        page_size: i32,
        sort_column: &str,
        sort_direction: &str,
        search_term: Option<&str>,
    ) -> Result<Self, DomainError> {
        require_text(ship_code, "Ship code is required.")?;
        if page_number < 1 {
            return Err(DomainError::validation(
                "Page number must be greater than 0.",
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(DomainError::validation(
                "Page size must be between 1 and 100.",
            ));
        }
        let sort_direction = sort_direction.parse()?;

        Ok(Self {
            ship_code: ship_code.to_string(),
            page_number,
            page_size,
            sort_column: sort_column.to_string(),
            sort_direction,
            search_term: search_term
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string),
        })
    }

    pub fn for_ship(ship_code: &str) -> Result<Self, DomainError> {
        Self::new(
            ship_code,
            DEFAULT_PAGE_NUMBER,
            DEFAULT_PAGE_SIZE,
            DEFAULT_SORT_COLUMN,
            SortDirection::default().as_str(),
            None,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewListEntry {
    pub rank_name: String,
    pub crew_member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub nationality: String,
    /// Pre-formatted by the store
    pub sign_on_date: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMemberHistoryEntry {
    pub crew_member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub nationality: String,
    pub ship_code: String,
    pub ship_name: String,
    pub rank_name: String,
    pub sign_on_date: Date,
    pub sign_off_date: Option<Date>,
    pub end_of_contract_date: Date,
    pub status: String,
}

#[async_trait]
pub trait CrewRepo: Send + Sync {
    async fn get_crew_list(
        &self,
        request: &CrewListRequest,
    ) -> Result<Vec<CrewListEntry>, DomainError>;
    async fn get_crew_member_history(
        &self,
        crew_member_id: &str,
    ) -> Result<Vec<CrewMemberHistoryEntry>, DomainError>;
}
