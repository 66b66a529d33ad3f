//! Shared fixtures for the integration suites
//!
//! Each suite compiles this module independently, so helpers unused by one
//! suite are expected.
#![allow(dead_code)]

/// Seeded users and token helpers
pub mod auth_helpers;

/// In-memory database with the production schema
pub mod database;
