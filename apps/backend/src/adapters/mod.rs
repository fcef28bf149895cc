//! SeaORM implementations of the repository traits.
//!
//! Every operation is a single stored-routine call against Postgres. The
//! routines themselves are owned by the database schema, not this crate.

pub mod assignments_sea;
pub mod crew_sea;
pub mod financial_reports_sea;
pub mod ships_sea;
pub mod users_sea;

mod routine;

pub use assignments_sea::UserShipAssignmentRepoSea;
pub use crew_sea::CrewRepoSea;
pub use financial_reports_sea::FinancialReportRepoSea;
pub use ships_sea::ShipRepoSea;
pub use users_sea::UserRepoSea;
