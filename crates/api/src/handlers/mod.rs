//! Request handlers.
//!
//! Handlers turn raw request data into typed core inputs, call into
//! `vitalcheck_core`, and shape the response.

pub mod check;
