//! Statement builders for stored-routine calls.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement, TryGetable, Value};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

/// Column alias used for scalar routine results.
pub(crate) const SCALAR_COLUMN: &str = "value";

fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT * FROM routine($1, ...)` for set-returning routines.
pub(crate) fn rows_call(routine: &str, args: Vec<Value>) -> Statement {
    let sql = format!("SELECT * FROM {routine}({})", placeholders(args.len()));
    Statement::from_sql_and_values(DbBackend::Postgres, sql, args)
}

/// `SELECT routine($1, ...) AS value` for scalar routines.
pub(crate) fn scalar_call(routine: &str, args: Vec<Value>) -> Statement {
    let sql = format!(
        "SELECT {routine}({}) AS {SCALAR_COLUMN}",
        placeholders(args.len())
    );
    Statement::from_sql_and_values(DbBackend::Postgres, sql, args)
}

/// Run a scalar routine and read its single value.
pub(crate) async fn fetch_scalar<T: TryGetable>(
    db: &DatabaseConnection,
    routine: &str,
    args: Vec<Value>,
) -> Result<T, DomainError> {
    let row = db
        .query_one(scalar_call(routine, args))
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("{routine} returned no row"),
            )
        })?;
    row.try_get::<T>("", SCALAR_COLUMN).map_err(map_db_err)
}
