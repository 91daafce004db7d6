//! Integration tests for the vehicle domain over in-memory stores

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{CarId, ClaimId, PolicyId};
use domain_claims::{Claim, ClaimError, ClaimsPort, ClaimValidation};
use domain_policy::InsurancePolicy;
use domain_vehicle::{aggregate_history, sort_history, HistoryEvent, HistoryEventKind, VehicleError};
use test_utils::{
    assert_history_counts, assert_history_sorted, claim_strategy, policy_strategy, ClaimBuilder,
    PolicyBuilder, TestFleet,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Listing
// ============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_list_cars_includes_owner_details() {
        let fleet = TestFleet::reference().await;
        let cars = fleet.service().list_cars().await.unwrap();

        assert_eq!(cars.len(), 3);
        assert_eq!(cars[0].car.vin, "VIN12345");
        assert_eq!(cars[0].owner_name, "Ana Pop");
        assert_eq!(cars[0].owner_email.as_deref(), Some("ana.pop@example.com"));
        assert_eq!(cars[2].owner_email, None);
    }

    #[tokio::test]
    async fn test_empty_fleet() {
        let fleet = TestFleet::empty();
        assert!(fleet.service().list_cars().await.unwrap().is_empty());
    }
}

// ============================================================================
// Validity
// ============================================================================

mod validity {
    use super::*;

    #[tokio::test]
    async fn test_validity_for_reference_fleet() {
        let service = TestFleet::reference().await.service();

        assert!(service.is_insurance_valid(CarId::new(1), date(2024, 6, 1)).await.unwrap());
        assert!(service.is_insurance_valid(CarId::new(1), date(2040, 6, 1)).await.unwrap());
        assert!(!service.is_insurance_valid(CarId::new(1), date(2023, 6, 1)).await.unwrap());
        assert!(!service.is_insurance_valid(CarId::new(2), date(2024, 10, 1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_car_without_policies_is_not_insured() {
        let service = TestFleet::reference().await.service();

        let valid = service.is_insurance_valid(CarId::new(3), date(2024, 6, 1)).await.unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_unknown_car_is_an_error_not_false() {
        let service = TestFleet::reference().await.service();

        let err = service
            .is_insurance_valid(CarId::new(999), date(2024, 6, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, VehicleError::CarNotFound(id) if id == CarId::new(999)));
    }
}

// ============================================================================
// Claim filing
// ============================================================================

mod filing {
    use super::*;

    #[tokio::test]
    async fn test_filing_adds_exactly_one_claim() {
        let fleet = TestFleet::reference().await;
        let service = fleet.service();

        let claim = service
            .file_claim(CarId::new(1), date(2024, 3, 15), "Rear bumper", dec!(1250.50))
            .await
            .unwrap();

        assert_eq!(claim.car_id, CarId::new(1));
        assert_eq!(claim.description, "Rear bumper");
        assert_eq!(claim.amount, dec!(1250.50));
        assert_eq!(fleet.claims.len().await, 1);

        let stored = fleet.claims.list_claims_for_car(CarId::new(1)).await.unwrap();
        assert_eq!(stored, vec![claim]);
    }

    #[tokio::test]
    async fn test_filed_claim_appears_in_history() {
        let fleet = TestFleet::reference().await;
        let service = fleet.service();

        let claim = service
            .file_claim(CarId::new(2), date(2024, 5, 2), "Windshield", dec!(300))
            .await
            .unwrap();
        let history = service.get_car_history(CarId::new(2)).await.unwrap();

        assert_history_counts(&history, 1, 1);
        assert!(history.iter().any(|event| matches!(
            event,
            HistoryEvent::Claim(c) if c.claim_id == claim.id && c.amount == dec!(300)
        )));
    }

    #[tokio::test]
    async fn test_filing_on_unknown_car_persists_nothing() {
        let fleet = TestFleet::reference().await;

        let err = fleet
            .service()
            .file_claim(CarId::new(999), date(2024, 3, 15), "Ghost", dec!(10))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(fleet.claims.is_empty().await);
    }

    #[tokio::test]
    async fn test_strict_validation_rejects_blank_description() {
        let fleet = TestFleet::reference().await;

        let err = fleet
            .service()
            .file_claim(CarId::new(1), date(2024, 3, 15), "   ", dec!(10))
            .await
            .unwrap_err();

        assert!(matches!(err, VehicleError::InvalidClaim(ClaimError::EmptyDescription)));
        assert!(fleet.claims.is_empty().await);
    }

    #[tokio::test]
    async fn test_zero_amount_is_accepted() {
        let fleet = TestFleet::reference().await;

        let claim = fleet
            .service()
            .file_claim(CarId::new(1), date(2024, 3, 15), "Inspection", dec!(0))
            .await
            .unwrap();
        assert_eq!(claim.amount, dec!(0));
    }

    #[tokio::test]
    async fn test_permissive_validation() {
        let fleet = TestFleet::reference().await;
        let service = fleet.service().with_claim_validation(ClaimValidation::Permissive);

        service
            .file_claim(CarId::new(1), date(2024, 3, 15), "", dec!(-1))
            .await
            .unwrap();
        assert_eq!(fleet.claims.len().await, 1);
    }
}

// ============================================================================
// History
// ============================================================================

mod history {
    use super::*;

    #[tokio::test]
    async fn test_history_is_sorted_and_complete() {
        let fleet = TestFleet::reference().await;
        let service = fleet.service();

        for (day, amount) in [(date(2025, 2, 1), dec!(100)), (date(2024, 2, 1), dec!(200))] {
            service
                .file_claim(CarId::new(1), day, "Scratch", amount)
                .await
                .unwrap();
        }

        let history = service.get_car_history(CarId::new(1)).await.unwrap();

        assert_history_counts(&history, 2, 2);
        assert_history_sorted(&history);
        let dates: Vec<NaiveDate> = history.iter().map(HistoryEvent::sort_date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 2, 1), date(2025, 1, 1), date(2025, 2, 1)]
        );
    }

    #[tokio::test]
    async fn test_history_is_idempotent() {
        let fleet = TestFleet::reference().await;
        let service = fleet.service();
        service
            .file_claim(CarId::new(1), date(2024, 1, 1), "Same day", dec!(5))
            .await
            .unwrap();

        let first = service.get_car_history(CarId::new(1)).await.unwrap();
        let second = service.get_car_history(CarId::new(1)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_same_day_policy_precedes_claim() {
        let fleet = TestFleet::reference().await;
        let service = fleet.service();
        service
            .file_claim(CarId::new(1), date(2024, 1, 1), "New year mishap", dec!(50))
            .await
            .unwrap();

        let history = service.get_car_history(CarId::new(1)).await.unwrap();
        assert_eq!(history[0].kind(), HistoryEventKind::Policy);
        assert_eq!(history[1].kind(), HistoryEventKind::Claim);
    }

    #[tokio::test]
    async fn test_empty_history_for_car_without_records() {
        let service = TestFleet::reference().await.service();
        assert!(service.get_car_history(CarId::new(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_of_unknown_car() {
        let service = TestFleet::reference().await.service();
        let err = service.get_car_history(CarId::new(404)).await.unwrap_err();
        assert_eq!(err.to_string(), "Car 404 not found");
    }

    #[test]
    fn test_aggregate_with_builders() {
        let policies = vec![
            PolicyBuilder::new(2).starting(date(2024, 6, 1)).build(),
            PolicyBuilder::new(1).build(),
        ];
        let claims = vec![ClaimBuilder::new().on(date(2024, 3, 1)).build(1)];

        let history = aggregate_history(policies, claims);
        let ids: Vec<(HistoryEventKind, i64)> =
            history.iter().map(|e| (e.kind(), e.record_id())).collect();

        assert_eq!(
            ids,
            vec![
                (HistoryEventKind::Policy, 1),
                (HistoryEventKind::Claim, 1),
                (HistoryEventKind::Policy, 2),
            ]
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_history_has_all_records_in_order(
        policies in prop::collection::vec(policy_strategy(CarId::new(1)), 0..10),
        claims in prop::collection::vec(claim_strategy(CarId::new(1)), 0..10),
    ) {
        let (policy_count, claim_count) = (policies.len(), claims.len());
        let history = aggregate_history(policies, claims);

        prop_assert_eq!(history.len(), policy_count + claim_count);
        assert_history_counts(&history, policy_count, claim_count);
        assert_history_sorted(&history);
    }

    #[test]
    fn prop_sorting_is_stable_under_reordering(
        policies in prop::collection::vec(policy_strategy(CarId::new(1)), 0..10),
        claims in prop::collection::vec(claim_strategy(CarId::new(1)), 0..10),
    ) {
        // Record ids are unique per kind in a real store
        let policies = policies
            .into_iter()
            .enumerate()
            .map(|(i, p)| InsurancePolicy { id: PolicyId::new(i as i64 + 1), ..p })
            .collect();
        let claims = claims
            .into_iter()
            .enumerate()
            .map(|(i, c)| Claim { id: ClaimId::new(i as i64 + 1), ..c })
            .collect();

        let history = aggregate_history(policies, claims);
        let mut reversed = history.clone();
        reversed.reverse();
        sort_history(&mut reversed);

        prop_assert_eq!(history, reversed);
    }
}
