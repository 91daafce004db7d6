//! Claims Domain
//!
//! Claim records filed against cars, the validation applied when filing,
//! and the store port used to read and append them.

pub mod claim;
pub mod error;
pub mod ports;
pub mod validation;

pub use claim::{Claim, NewClaim};
pub use error::ClaimError;
pub use ports::ClaimsPort;
pub use validation::ClaimValidation;
