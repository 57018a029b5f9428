pub mod activities;
pub mod participant;
pub mod seed;

pub use activities::{ActivitiesSnapshot, Activity};
pub use participant::ParticipantEmail;
