//! Integration test utilities for the referral links API
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API backed by a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
