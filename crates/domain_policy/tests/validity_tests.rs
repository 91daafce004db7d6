//! Tests for insurance validity over a car's policies

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::CarId;
use domain_policy::{is_covered, validity::covering_policies, InsurancePolicy};
use test_utils::{policy_strategy, DateFixtures, FleetFixtures, PolicyBuilder};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn policies_for(car_id: i64) -> Vec<InsurancePolicy> {
    FleetFixtures::policies()
        .into_iter()
        .filter(|policy| policy.car_id == CarId::new(car_id))
        .collect()
}

// ============================================================================
// Boundaries
// ============================================================================

mod boundaries {
    use super::*;

    #[test]
    fn test_start_and_end_dates_are_covered() {
        let policies = vec![PolicyBuilder::new(1).build()];

        assert!(is_covered(&policies, DateFixtures::policy_start()));
        assert!(is_covered(&policies, DateFixtures::policy_end()));
        assert!(is_covered(&policies, DateFixtures::mid_year()));
    }

    #[test]
    fn test_days_outside_are_not_covered() {
        let policies = vec![PolicyBuilder::new(1).build()];

        assert!(!is_covered(&policies, DateFixtures::before_policy()));
        assert!(!is_covered(&policies, DateFixtures::after_policy()));
    }

    #[test]
    fn test_single_day_policy() {
        let day = date(2024, 2, 29);
        let policies = vec![PolicyBuilder::new(1).starting(day).ending(day).build()];

        assert!(is_covered(&policies, day));
        assert!(!is_covered(&policies, date(2024, 2, 28)));
        assert!(!is_covered(&policies, date(2024, 3, 1)));
    }

    #[test]
    fn test_open_ended_policy_covers_far_future() {
        let policies = vec![PolicyBuilder::new(1).open_ended().build()];

        assert!(is_covered(&policies, date(2099, 12, 31)));
        assert!(is_covered(&policies, NaiveDate::MAX));
        assert!(!is_covered(&policies, DateFixtures::before_policy()));
    }
}

// ============================================================================
// Policy sets
// ============================================================================

mod policy_sets {
    use super::*;

    #[test]
    fn test_no_policies_means_not_covered() {
        let none: Vec<InsurancePolicy> = Vec::new();
        assert!(!is_covered(&none, DateFixtures::mid_year()));
    }

    #[test]
    fn test_gap_between_policies() {
        let policies = vec![
            PolicyBuilder::new(1).ending(date(2024, 5, 31)).build(),
            PolicyBuilder::new(2)
                .starting(date(2024, 7, 1))
                .ending(date(2024, 12, 31))
                .build(),
        ];

        assert!(is_covered(&policies, date(2024, 5, 31)));
        assert!(!is_covered(&policies, date(2024, 6, 15)));
        assert!(is_covered(&policies, date(2024, 7, 1)));
    }

    #[test]
    fn test_overlapping_policies() {
        let policies = vec![
            PolicyBuilder::new(1).build(),
            PolicyBuilder::new(2)
                .starting(date(2024, 6, 1))
                .ending(date(2025, 5, 31))
                .provider("Groupama")
                .build(),
        ];

        assert!(is_covered(&policies, date(2024, 6, 15)));
        assert_eq!(covering_policies(&policies, date(2024, 6, 15)).len(), 2);
        assert_eq!(covering_policies(&policies, date(2025, 3, 1)).len(), 1);
    }

    #[test]
    fn test_reference_fleet() {
        let car_one = policies_for(1);
        let car_two = policies_for(2);
        let car_three = policies_for(3);

        assert!(is_covered(&car_one, date(2024, 6, 1)));
        assert!(is_covered(&car_one, date(2030, 1, 1)));
        assert!(is_covered(&car_two, date(2024, 9, 30)));
        assert!(!is_covered(&car_two, date(2024, 10, 1)));
        assert!(!is_covered(&car_three, date(2024, 6, 1)));
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_covered_iff_some_window_contains(
        policies in prop::collection::vec(policy_strategy(CarId::new(1)), 0..8),
        offset in 0i64..20_000,
    ) {
        let day = date(2000, 1, 1) + chrono::Duration::days(offset);
        let expected = policies.iter().any(|p| {
            p.start_date <= day && p.end_date.map_or(true, |end| day <= end)
        });

        prop_assert_eq!(is_covered(&policies, day), expected);
    }

    #[test]
    fn prop_order_does_not_matter(
        mut policies in prop::collection::vec(policy_strategy(CarId::new(1)), 0..8),
        offset in 0i64..20_000,
    ) {
        let day = date(2000, 1, 1) + chrono::Duration::days(offset);
        let forward = is_covered(&policies, day);
        policies.reverse();

        prop_assert_eq!(forward, is_covered(&policies, day));
    }
}
