use std::collections::BTreeMap;
use std::sync::Arc;

use sea_orm::{DatabaseBackend, MockDatabase, Value};
use ships_backend::adapters::CrewRepoSea;
use ships_backend::errors::domain::DomainError;
use ships_backend::repos::{CrewListRequest, CrewRepo};
use time::macros::date;
use time::Date;

use super::{call, transaction_log};

fn crew_row(id: &str, last_name: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("rank_name", Value::from("Master")),
        ("crew_member_id", Value::from(id)),
        ("first_name", Value::from("Lena")),
        ("last_name", Value::from(last_name)),
        ("age", Value::from(44i32)),
        ("nationality", Value::from("NO")),
        ("sign_on_date", Value::from("2024-03-01")),
        ("status", Value::from("Onboard")),
    ])
}

#[tokio::test]
async fn crew_list_sends_every_argument_in_order() -> Result<(), DomainError> {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![crew_row("CM001", "Berg"), crew_row("CM002", "Dahl")]])
            .append_query_results([vec![crew_row("CM003", "Holm")]])
            .into_connection(),
    );
    let repo = CrewRepoSea::new(db.clone());

    let request = CrewListRequest::new("SHIP01", 2, 25, "LastName", "DESC", Some("berg"))?;
    let crew = repo.get_crew_list(&request).await?;
    assert_eq!(crew.len(), 2);
    assert_eq!(crew[0].last_name, "Berg");
    assert_eq!(crew[0].age, 44);

    repo.get_crew_list(&CrewListRequest::for_ship("SHIP02")?).await?;

    drop(repo);
    assert_eq!(
        transaction_log(db),
        [
            call(
                "SELECT * FROM sp_get_crew_list($1, $2, $3, $4, $5, $6)",
                vec![
                    "SHIP01".into(),
                    2i32.into(),
                    25i32.into(),
                    "LastName".into(),
                    "DESC".into(),
                    Some("berg".to_string()).into(),
                ]
            ),
            call(
                "SELECT * FROM sp_get_crew_list($1, $2, $3, $4, $5, $6)",
                vec![
                    "SHIP02".into(),
                    1i32.into(),
                    10i32.into(),
                    "RankOrder".into(),
                    "ASC".into(),
                    Option::<String>::None.into(),
                ]
            ),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn history_maps_dates_and_open_contracts() -> Result<(), DomainError> {
    let row = |ship: &str, sign_off: Option<Date>| {
        BTreeMap::from([
            ("crew_member_id", Value::from("CM001")),
            ("first_name", Value::from("Lena")),
            ("last_name", Value::from("Berg")),
            ("birth_date", Value::from(date!(1980 - 05 - 17))),
            ("nationality", Value::from("NO")),
            ("ship_code", Value::from(ship)),
            ("ship_name", Value::from("Aurora")),
            ("rank_name", Value::from("Master")),
            ("sign_on_date", Value::from(date!(2023 - 01 - 10))),
            ("sign_off_date", Value::from(sign_off)),
            ("end_of_contract_date", Value::from(date!(2023 - 07 - 10))),
            ("status", Value::from("Completed")),
        ])
    };
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row("SHIP01", Some(date!(2023 - 07 - 01))),
                row("SHIP02", None),
            ]])
            .into_connection(),
    );

    let history = CrewRepoSea::new(db.clone())
        .get_crew_member_history("CM001")
        .await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].sign_off_date, Some(date!(2023 - 07 - 01)));
    assert_eq!(history[1].sign_off_date, None);
    assert_eq!(history[1].birth_date, date!(1980 - 05 - 17));
    assert_eq!(
        transaction_log(db),
        [call(
            "SELECT * FROM sp_get_crew_member_history($1)",
            vec!["CM001".into()]
        )]
    );
    Ok(())
}
