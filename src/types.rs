//! Core types for roster

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single extracurricular activity with a capacity and a roster.
///
/// The activity name is the key of the surrounding catalog map rather than a
/// field, which matches the wire shape: `GET /activities` returns a JSON
/// object keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Participant emails in signup order. An email appears at most once.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

/// The full activity catalog, keyed by activity name.
///
/// A BTreeMap keeps listings deterministic.
pub type Catalog = BTreeMap<String, Activity>;
