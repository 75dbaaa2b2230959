//! Base types and error handling.
//!
//! - [`ImpersonateError`](error::ImpersonateError): the single error type of the crate

pub mod error;
