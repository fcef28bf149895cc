//! SeaORM -> DomainError translation.
//!
//! Adapters convert `sea_orm::DbErr` here; higher layers map `DomainError`
//! to `AppError`. The driver's message is kept as the infra detail, which a
//! 500 body echoes in its `error` field. Log lines carry it redacted.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError`, classifying by kind.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let correlation_id = trace_ctx::correlation_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(what) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                format!("Record not found: {what}"),
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(correlation_id = %correlation_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, error_msg);
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::Json(_) => {
            error!(correlation_id = %correlation_id, raw_error = %Redacted(&error_msg), "Row did not match expected shape");
            return DomainError::infra(InfraErrorKind::DataCorruption, error_msg);
        }
        _ => {}
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(correlation_id = %correlation_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, error_msg);
    }

    error!(correlation_id = %correlation_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), error_msg)
}
