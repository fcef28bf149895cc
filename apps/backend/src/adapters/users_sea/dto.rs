//! Row shapes returned by the user routines.

use sea_orm::FromQueryResult;

use crate::repos::users::User;

#[derive(Debug, Clone, FromQueryResult)]
pub struct UserRow {
    pub user_id: i32,
    pub name: String,
    pub role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            user_id: row.user_id,
            name: row.name,
            role: row.role,
        }
    }
}
