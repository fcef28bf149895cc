use proptest::prelude::*;
use ships_backend::errors::domain::DomainError;
use ships_backend::services::UserShipAssignmentService;

use crate::support::Fakes;

fn service(fakes: &Fakes) -> UserShipAssignmentService {
    UserShipAssignmentService::new(fakes.assignments.clone())
}

fn validation_message(err: DomainError) -> String {
    match err {
        DomainError::Validation(message) => message,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn assign_list_unassign() -> Result<(), DomainError> {
    let fakes = Fakes::default();
    let assignments = service(&fakes);

    assignments.assign(1, "SHIP01").await?;
    assignments.assign(1, "SHIP02").await?;
    assignments.assign(2, "SHIP01").await?;

    assert_eq!(assignments.list(None, None).await?.len(), 3);
    assert_eq!(assignments.list(Some(1), None).await?.len(), 2);
    assert_eq!(assignments.list(None, Some("SHIP01")).await?.len(), 2);
    assert_eq!(assignments.list(Some(2), Some("SHIP02")).await?.len(), 0);

    assert!(assignments.unassign(1, "SHIP02").await?);
    assert!(!assignments.unassign(1, "SHIP02").await?);
    assert_eq!(fakes.assignments.len(), 2);
    Ok(())
}

#[tokio::test]
async fn user_id_is_checked_before_ship_code() {
    let fakes = Fakes::default();
    let assignments = service(&fakes);

    let err = assignments.assign(0, "").await.unwrap_err();
    assert_eq!(validation_message(err), "Valid UserId is required.");

    let err = assignments.unassign(3, "  ").await.unwrap_err();
    assert_eq!(validation_message(err), "ShipCode is required.");

    assert_eq!(fakes.assignments.len(), 0);
}

proptest! {
    #[test]
    fn non_positive_user_ids_never_reach_the_store(user_id in i32::MIN..=0, code in "[A-Z0-9]{1,8}") {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let fakes = Fakes::default();
        let result = runtime.block_on(service(&fakes).assign(user_id, &code));
        prop_assert!(matches!(result, Err(DomainError::Validation(_))));
        prop_assert_eq!(fakes.assignments.len(), 0);
    }
}
