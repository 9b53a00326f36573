//! Activity registry
//!
//! The registry owns the activity catalog and is the only place rosters
//! mutate. Handlers receive it through [`crate::api::AppState`] rather than
//! reaching for global state, and a single `RwLock` covers each mutation, so
//! the capacity check and the roster append happen atomically.

use tokio::sync::RwLock;

use crate::types::{Activity, Catalog};
use crate::{Error, Result};

/// In-memory store of activities and their rosters.
pub struct ActivityRegistry {
    catalog: RwLock<Catalog>,
}

impl ActivityRegistry {
    /// Create a registry seeded with the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Create a registry seeded with the default school catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(crate::seed::default_catalog())
    }

    /// Snapshot of the full catalog, including current rosters.
    pub async fn list(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    /// Number of activities in the catalog.
    pub async fn activity_count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Current state of a single activity.
    pub async fn get(&self, name: &str) -> Result<Activity> {
        let catalog = self.catalog.read().await;
        catalog
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ActivityNotFound(name.to_string()))
    }

    /// Sign a student up for an activity.
    ///
    /// Returns the roster size after the signup. Duplicate signups and
    /// signups against a full activity are rejected without mutating state.
    pub async fn signup(&self, name: &str, email: &str) -> Result<usize> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog
            .get_mut(name)
            .ok_or_else(|| Error::ActivityNotFound(name.to_string()))?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(Error::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if activity.is_full() {
            return Err(Error::ActivityFull {
                activity: name.to_string(),
                capacity: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = %name,
            %email,
            roster = activity.participants.len(),
            capacity = activity.max_participants,
            "Student signed up"
        );

        Ok(activity.participants.len())
    }

    /// Remove a student from an activity's roster.
    ///
    /// Returns the roster size after the removal. Unregistering an email
    /// that is not on the roster is rejected without mutating state.
    pub async fn unregister(&self, name: &str, email: &str) -> Result<usize> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog
            .get_mut(name)
            .ok_or_else(|| Error::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| Error::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::info!(
            activity = %name,
            %email,
            roster = activity.participants.len(),
            "Student unregistered"
        );

        Ok(activity.participants.len())
    }
}
