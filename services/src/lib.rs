//! Business logic for the management API.
//!
//! The HTTP layer delegates every operation to [`management::ManagementService`];
//! validation, persistence and uniqueness enforcement all live here.

pub mod error;
pub mod management;
