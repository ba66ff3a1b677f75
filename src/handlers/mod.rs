//! HTTP handlers for the customers resource.

pub mod customer;
pub use customer::*;
