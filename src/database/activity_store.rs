use parking_lot::RwLock;

use crate::models::{seed, ActivitiesSnapshot, Activity};

/// In-memory activity registry.
///
/// Built once at startup and shared through router state. Nothing is
/// persisted, so a restart goes back to the seed list.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityStore {
    /// Duplicate names keep only the first occurrence.
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut unique: Vec<Activity> = Vec::with_capacity(activities.len());
        for activity in activities {
            if unique.iter().all(|a| a.name != activity.name) {
                unique.push(activity);
            }
        }
        Self {
            activities: RwLock::new(unique),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn snapshot(&self) -> ActivitiesSnapshot {
        ActivitiesSnapshot {
            activities: self.activities.read().clone(),
        }
    }

    pub fn find(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// Runs `f` against the named activity while holding the write lock.
    ///
    /// The whole check-then-mutate sequence of a caller happens inside `f`,
    /// so two writers on the same activity are serialized. Returns `None`
    /// when no activity has that exact (case-sensitive) name.
    pub fn with_activity_mut<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let mut activities = self.activities.write();
        activities.iter_mut().find(|a| a.name == name).map(f)
    }
}
