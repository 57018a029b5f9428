use serde::ser::{Serialize, SerializeMap, Serializer};

use super::ParticipantEmail;

/// An extracurricular activity and its roster.
///
/// `participants` keeps signup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<ParticipantEmail>,
}

impl Activity {
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().copied().map(ParticipantEmail::from).collect(),
        }
    }

    pub fn is_signed_up(&self, email: &ParticipantEmail) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

// Wire shape of a single activity; the name is the key of the enclosing map.
#[derive(serde::Serialize)]
struct ActivityBody<'a> {
    description: &'a str,
    schedule: &'a str,
    max_participants: u32,
    participants: &'a [ParticipantEmail],
}

/// Point-in-time copy of the registry, in registry order.
///
/// Serializes as `{ "<name>": { description, schedule, max_participants, participants } }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivitiesSnapshot {
    pub activities: Vec<Activity>,
}

impl ActivitiesSnapshot {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for ActivitiesSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(
                &activity.name,
                &ActivityBody {
                    description: &activity.description,
                    schedule: &activity.schedule,
                    max_participants: activity.max_participants,
                    participants: &activity.participants,
                },
            )?;
        }
        map.end()
    }
}
