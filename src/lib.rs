//! Contract proposal generator
//!
//! This crate renders the terms of an employment contract proposal (entry
//! bonus, salary, payment schedule, requested conditions and grievances) into
//! a fixed-layout Italian text document.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod proposal;
pub mod render;
pub mod telemetry;
