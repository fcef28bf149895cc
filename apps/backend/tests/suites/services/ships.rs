use ships_backend::errors::domain::{DomainError, NotFoundKind};
use ships_backend::repos::{Ship, ShipStatus};
use ships_backend::services::ShipService;

use crate::support::Fakes;

fn service(fakes: &Fakes) -> ShipService {
    ShipService::new(fakes.ships.clone())
}

#[tokio::test]
async fn create_then_read_back_as_dto() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    let ships = service(&fakes);

    let created = ships
        .create(Ship::from_parts("SHIP07", "Halcyon", "0124", "Inactive")?)
        .await?;
    assert_eq!(created.status, "Inactive");

    let fetched = ships.get_by_code("SHIP07").await?;
    assert_eq!(fetched, Some(created));
    assert!(ships.get_by_code("SHIP08").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn update_of_missing_ship_is_not_found_and_writes_nothing() -> Result<(), DomainError> {
    let fakes = Fakes::default();

    let err = service(&fakes)
        .update(Ship::from_parts("GHOST", "Nobody", "0112", "Active")?)
        .await
        .unwrap_err();

    match err {
        DomainError::NotFound(NotFoundKind::Ship, detail) => {
            assert_eq!(detail, "Ship with code GHOST not found.")
        }
        other => panic!("expected ship not found, got {other:?}"),
    }
    assert!(fakes.ships.get("GHOST").is_none());
    Ok(())
}

#[tokio::test]
async fn update_replaces_existing_fields() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    fakes.ships.insert("SHIP01", "Aurora", ShipStatus::Active);

    let updated = service(&fakes)
        .update(Ship::from_parts("SHIP01", "Aurora II", "0125", "Inactive")?)
        .await?;

    assert_eq!(updated.name, "Aurora II");
    assert_eq!(fakes.ships.get("SHIP01").map(|s| s.status), Some(ShipStatus::Inactive));
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_anything_went() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    fakes.ships.insert("SHIP01", "Aurora", ShipStatus::Active);
    let ships = service(&fakes);

    assert!(ships.delete("SHIP01").await?);
    assert!(!ships.delete("SHIP01").await?);
    Ok(())
}

#[tokio::test]
async fn filters_by_status_and_owner() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    fakes.ships.insert("SHIP01", "Aurora", ShipStatus::Active);
    fakes.ships.insert("SHIP02", "Borealis", ShipStatus::Inactive);
    fakes.ships.insert("SHIP03", "Cassini", ShipStatus::Active);
    fakes.ships.own(5, "SHIP02");
    let ships = service(&fakes);

    let active: Vec<String> = ships
        .get_by_status(ShipStatus::Active)
        .await?
        .into_iter()
        .map(|s| s.code)
        .collect();
    assert_eq!(active, ["SHIP01", "SHIP03"]);

    let owned = ships.get_by_user(5).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].code, "SHIP02");
    assert!(ships.get_by_user(6).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn store_failures_pass_through() {
    let fakes = Fakes::failing();
    let err = service(&fakes).get_all().await.unwrap_err();
    assert!(matches!(err, DomainError::Infra(..)));
}
