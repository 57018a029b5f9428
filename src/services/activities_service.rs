use serde::Serialize;
use tracing::{info, warn};

use crate::config::CapacityPolicy;
use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::{ActivitiesSnapshot, ParticipantEmail};

/// Confirmation returned by a successful roster change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupReceipt {
    pub message: String,
}

pub fn list_activities(store: &ActivityStore) -> ActivitiesSnapshot {
    store.snapshot()
}

/// Appends `email` to the roster of `activity_name`.
///
/// Checks run in order: activity exists, email not already present, then
/// capacity if `policy` enforces it.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: ParticipantEmail,
    policy: CapacityPolicy,
) -> Result<SignupReceipt, ActivityError> {
    let result = store
        .with_activity_mut(activity_name, |activity| {
            if activity.is_signed_up(&email) {
                return Err(ActivityError::AlreadySignedUp {
                    email: email.clone(),
                });
            }
            if policy == CapacityPolicy::Enforced && activity.is_full() {
                return Err(ActivityError::ActivityFull {
                    activity: activity.name.clone(),
                    max_participants: activity.max_participants,
                });
            }
            activity.participants.push(email.clone());
            Ok(activity.participants.len())
        })
        .unwrap_or(Err(ActivityError::NotFound));

    match result {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
            Ok(SignupReceipt {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

/// Removes `email` from the roster of `activity_name`, keeping the order of
/// the remaining entries.
pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: ParticipantEmail,
) -> Result<SignupReceipt, ActivityError> {
    let result = store
        .with_activity_mut(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| *p == email) else {
                return Err(ActivityError::NotRegistered {
                    email: email.clone(),
                });
            };
            activity.participants.remove(pos);
            Ok(activity.participants.len())
        })
        .unwrap_or(Err(ActivityError::NotFound));

    match result {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "unregister accepted");
            Ok(SignupReceipt {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
