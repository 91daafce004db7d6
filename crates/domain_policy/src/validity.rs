//! Date validity evaluation
//!
//! A car is insured on a date when any one of its policies covers that date.
//! Overlapping policies are allowed and do not change the answer.

use chrono::NaiveDate;

use crate::policy::InsurancePolicy;

/// Returns true if at least one policy covers `date`
///
/// An empty policy set yields `false`. Whether the car exists is the
/// caller's concern.
pub fn is_covered<'a, I>(policies: I, date: NaiveDate) -> bool
where
    I: IntoIterator<Item = &'a InsurancePolicy>,
{
    policies.into_iter().any(|policy| policy.covers(date))
}

/// Returns the policies that cover `date`
pub fn covering_policies<'a, I>(policies: I, date: NaiveDate) -> Vec<&'a InsurancePolicy>
where
    I: IntoIterator<Item = &'a InsurancePolicy>,
{
    policies
        .into_iter()
        .filter(|policy| policy.covers(date))
        .collect()
}
