//! Route builders. Each takes the state explicitly and returns a ready router.

mod customer;
pub use customer::customer_routes;
