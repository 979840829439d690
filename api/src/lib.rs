//! HTTP layer of the management API.
//!
//! Thin glue over axum: routes marshal arguments, emit one log line, and
//! delegate to the `services` crate. Authorization is enforced by a guard
//! middleware applied uniformly to the `/management` route group.

pub mod auth;
pub mod response;
pub mod routes;
