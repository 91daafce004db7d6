//! Insurance policy record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, CoverageWindow, PolicyId};

/// An insurance policy covering a single car
///
/// A car may hold several policies at once, and their windows may overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Unique identifier
    pub id: PolicyId,
    /// The insured car
    pub car_id: CarId,
    /// First covered date
    pub start_date: NaiveDate,
    /// Last covered date, None for an open-ended policy
    pub end_date: Option<NaiveDate>,
    /// Insurer name
    pub provider: String,
}

impl InsurancePolicy {
    /// The coverage window of this policy
    ///
    /// Built without validation: a stored policy whose end precedes its start
    /// simply covers nothing.
    pub fn window(&self) -> CoverageWindow {
        CoverageWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Returns true if this policy covers `date`
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.window().contains(date)
    }

    /// Returns true if the policy has no end date
    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }
}
