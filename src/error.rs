//! Error types for roster

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, capacity: usize },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}
