use thiserror::Error;

use crate::models::ParticipantEmail;

/// Reasons a roster operation is rejected. The registry is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("{email} is already signed up for this activity")]
    AlreadySignedUp { email: ParticipantEmail },

    #[error("{email} is not registered for this activity")]
    NotRegistered { email: ParticipantEmail },

    /// Only raised under `CapacityPolicy::Enforced`.
    #[error("{activity} is full ({max_participants} participants)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}
