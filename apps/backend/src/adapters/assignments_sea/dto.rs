use sea_orm::FromQueryResult;
use time::OffsetDateTime;

use crate::repos::assignments::UserShipAssignment;

#[derive(Debug, Clone, FromQueryResult)]
pub struct AssignmentRow {
    pub user_id: i32,
    pub ship_code: String,
    pub assigned_date: OffsetDateTime,
    pub user_name: String,
    pub user_role: String,
    pub ship_name: String,
    pub fiscal_year: String,
    pub ship_status: String,
}

impl From<AssignmentRow> for UserShipAssignment {
    fn from(row: AssignmentRow) -> Self {
        UserShipAssignment {
            user_id: row.user_id,
            ship_code: row.ship_code,
            assigned_date: row.assigned_date,
            user_name: row.user_name,
            user_role: row.user_role,
            ship_name: row.ship_name,
            fiscal_year: row.fiscal_year,
            ship_status: row.ship_status,
        }
    }
}
