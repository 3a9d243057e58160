//! Data models for the contract proposal generator.
//!
//! This module contains the contract terms record and the types it is made of.

mod period;
mod terms;

pub use period::CalculationPeriod;
pub use terms::{ContractConditions, ContractTerms, PaymentStep};
