//! Repository traits and domain models.
//!
//! One `#[async_trait]` trait per entity family. The SeaORM implementations
//! live in `crate::adapters`; tests substitute in-memory fakes.

pub mod assignments;
pub mod crew;
pub mod financial_reports;
pub mod ships;
pub mod users;

pub use assignments::{UserShipAssignment, UserShipAssignmentRepo};
pub use crew::{CrewListEntry, CrewListRequest, CrewMemberHistoryEntry, CrewRepo, SortDirection};
pub use financial_reports::{FinancialReportLine, FinancialReportRepo, FinancialReportRequest};
pub use ships::{Ship, ShipRepo, ShipStatus};
pub use users::{NewUser, User, UserRepo};

use crate::errors::domain::DomainError;

/// Reject blank required text fields with `message`.
pub(crate) fn require_text(value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::validation(message))
    } else {
        Ok(())
    }
}
