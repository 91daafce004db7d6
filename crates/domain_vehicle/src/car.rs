//! Cars and owners

use serde::{Deserialize, Serialize};

use core_kernel::{CarId, OwnerId};

/// A registered car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    /// Vehicle identification number
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: OwnerId,
}

/// The person a car is registered to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub email: Option<String>,
}

/// A car joined with its owner's contact details, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSummary {
    pub car: Car,
    pub owner_name: String,
    pub owner_email: Option<String>,
}

impl CarSummary {
    /// Joins `car` with `owner`
    pub fn new(car: Car, owner: &Owner) -> Self {
        Self {
            car,
            owner_name: owner.name.clone(),
            owner_email: owner.email.clone(),
        }
    }
}
