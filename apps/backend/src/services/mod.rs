pub mod assignments;
pub mod crew;
pub mod financial_reports;
pub mod ships;
pub mod users;

pub use assignments::UserShipAssignmentService;
pub use crew::CrewService;
pub use financial_reports::FinancialReportService;
pub use ships::{ShipDto, ShipService};
pub use users::{UserDto, UserService};
