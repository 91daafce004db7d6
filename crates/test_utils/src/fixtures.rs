//! Pre-built Test Fixtures
//!
//! Ready-to-use dates, owners, cars and policies. The reference fleet
//! mirrors the seed data of a fresh installation: two owners, three cars and
//! a mix of bounded and open-ended policies.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{CarId, OwnerId, PolicyId};
use domain_policy::InsurancePolicy;
use domain_vehicle::{Car, Owner};

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2024)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Mid-year date for containment tests
    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Day before the standard policy starts
    pub fn before_policy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }

    /// Day after the standard policy ends
    pub fn after_policy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Midnight after the standard policy ends, when it counts as expired
    pub fn expiration_moment() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// Standard claim date
    pub fn claim_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }
}

/// Fixture for owners, cars and policies
pub struct FleetFixtures;

impl FleetFixtures {
    pub fn owners() -> Vec<Owner> {
        vec![
            Owner {
                id: OwnerId::new(1),
                name: "Ana Pop".to_string(),
                email: Some("ana.pop@example.com".to_string()),
            },
            Owner {
                id: OwnerId::new(2),
                name: "Bogdan Ionescu".to_string(),
                email: None,
            },
        ]
    }

    pub fn cars() -> Vec<Car> {
        vec![
            Car {
                id: CarId::new(1),
                vin: "VIN12345".to_string(),
                make: Some("Dacia".to_string()),
                model: Some("Logan".to_string()),
                year_of_manufacture: 2018,
                owner_id: OwnerId::new(1),
            },
            Car {
                id: CarId::new(2),
                vin: "VIN67890".to_string(),
                make: Some("VW".to_string()),
                model: Some("Golf".to_string()),
                year_of_manufacture: 2021,
                owner_id: OwnerId::new(2),
            },
            Car {
                id: CarId::new(3),
                vin: "VIN54321".to_string(),
                make: None,
                model: None,
                year_of_manufacture: 2015,
                owner_id: OwnerId::new(2),
            },
        ]
    }

    /// Car 1 holds a 2024 policy and an open-ended one from 2025; car 2 holds
    /// a single 2024 policy; car 3 has none.
    pub fn policies() -> Vec<InsurancePolicy> {
        vec![
            InsurancePolicy {
                id: PolicyId::new(1),
                car_id: CarId::new(1),
                start_date: DateFixtures::policy_start(),
                end_date: Some(DateFixtures::policy_end()),
                provider: "Allianz".to_string(),
            },
            InsurancePolicy {
                id: PolicyId::new(2),
                car_id: CarId::new(1),
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end_date: None,
                provider: "Groupama".to_string(),
            },
            InsurancePolicy {
                id: PolicyId::new(3),
                car_id: CarId::new(2),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end_date: Some(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()),
                provider: "Allianz".to_string(),
            },
        ]
    }
}
