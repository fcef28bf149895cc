use sea_orm::FromQueryResult;
use time::Date;

use crate::repos::crew::{CrewListEntry, CrewMemberHistoryEntry};

#[derive(Debug, Clone, FromQueryResult)]
pub struct CrewListRow {
    pub rank_name: String,
    pub crew_member_id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub nationality: String,
    pub sign_on_date: String,
    pub status: String,
}

impl From<CrewListRow> for CrewListEntry {
    fn from(row: CrewListRow) -> Self {
        CrewListEntry {
            rank_name: row.rank_name,
            crew_member_id: row.crew_member_id,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            nationality: row.nationality,
            sign_on_date: row.sign_on_date,
            status: row.status,
        }
    }
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct CrewMemberHistoryRow {
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

impl From<CrewMemberHistoryRow> for CrewMemberHistoryEntry {
    fn from(row: CrewMemberHistoryRow) -> Self {
        CrewMemberHistoryEntry {
            crew_member_id: row.crew_member_id,
            first_name: row.first_name,
            last_name: row.last_name,
            birth_date: row.birth_date,
            nationality: row.nationality,
            ship_code: row.ship_code,
            ship_name: row.ship_name,
            rank_name: row.rank_name,
            sign_on_date: row.sign_on_date,
            sign_off_date: row.sign_off_date,
            end_of_contract_date: row.end_of_contract_date,
            status: row.status,
        }
    }
}
