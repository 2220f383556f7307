//! Vital-sign screening domain logic.
//!
//! Pure functions and types only: no I/O, no async, no shared state. The
//! HTTP layer in `vitalcheck-api` builds a [`vitals::VitalsInput`] from the
//! request and hands it to the evaluator.

pub mod blood_pressure;
pub mod error;
pub mod vitals;
