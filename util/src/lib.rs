//! Shared configuration and application state for the management API.

pub mod config;
pub mod state;
