//! Crew and financial report services pass requests through unchanged.

use ships_backend::errors::domain::DomainError;
use ships_backend::repos::{CrewListRequest, FinancialReportRequest, SortDirection};
use ships_backend::services::{CrewService, FinancialReportService};
use time::macros::date;

use crate::support::Fakes;

#[tokio::test]
async fn crew_list_forwards_the_request() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    fakes.crew.add_entry("CM001", "Berg");

    let request = CrewListRequest::new("SHIP01", 3, 50, "LastName", "DESC", Some("  "))?;
    let crew = CrewService::new(fakes.crew.clone())
        .get_crew_list(&request)
        .await?;

    assert_eq!(crew.len(), 1);
    let seen = fakes.crew.last_request().expect("request recorded");
    assert_eq!(seen.sort_direction, SortDirection::Desc);
    assert_eq!(seen.search_term, None);
    assert_eq!(seen, request);
    Ok(())
}

#[tokio::test]
async fn unknown_crew_member_has_empty_history() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    let history = CrewService::new(fakes.crew.clone())
        .get_crew_member_history("CM404")
        .await?;
    assert!(history.is_empty());
    Ok(())
}

#[tokio::test]
async fn financial_report_forwards_ship_and_period() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    fakes.reports.add_line("5100", Some(900.0));
    fakes.reports.add_line("5200", None);

    let request = FinancialReportRequest::new("SHIP01", date!(2024 - 02 - 01))?;
    let lines = FinancialReportService::new(fakes.reports.clone())
        .get_financial_report(&request)
        .await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].variance, Some(-100.0));
    assert_eq!(lines[1].variance, None);
    assert_eq!(fakes.reports.last_request(), Some(request));
    Ok(())
}
