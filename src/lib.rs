//! Roster - An in-memory activity signup service
//!
//! Roster keeps a catalog of school activities, each with a capacity and a
//! participant roster, and exposes it over a small HTTP API:
//! - List activities with their current rosters
//! - Sign a student up for an activity
//! - Unregister a student from an activity

pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod seed;
pub mod types;

pub use error::{Error, Result};
