//! In-memory holder for the user's current schedule.
//!
//! The engine's mutators assume single-writer access; [`ScheduleStore`]
//! is the serialization point. Readers clone a consistent snapshot, and
//! every mutation runs inside one write-lock hold, so concurrent readers
//! never observe a half-applied edit.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::schedule::{Schedule, ScheduleSuggestion};

/// Cheaply cloneable handle to the current schedule.
#[derive(Clone, Default)]
pub struct ScheduleStore {
    current: Arc<RwLock<Option<Schedule>>>,
}

impl ScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Whether a schedule is currently held.
    pub fn has_schedule(&self) -> bool {
        self.current.read().is_some()
    }

    /// Snapshot of the current schedule, if any.
    pub fn current(&self) -> Option<Schedule> {
        self.current.read().clone()
    }

    /// Replace the current schedule wholesale, returning the previous
    /// one. This is the reset/re-import path.
    pub fn replace(&self, schedule: Schedule) -> Option<Schedule> {
        log::info!(
            "replacing current schedule with '{}' ({} subjects)",
            schedule.name,
            schedule.subjects.len()
        );
        self.current.write().replace(schedule)
    }

    /// Accept a pending suggestion as the current schedule.
    pub fn accept_suggestion(&self, suggestion: ScheduleSuggestion) -> Option<Schedule> {
        self.replace(Schedule::from(suggestion))
    }

    /// Drop the current schedule.
    pub fn clear(&self) -> Option<Schedule> {
        log::info!("clearing current schedule");
        self.current.write().take()
    }

    /// Read through the current schedule without cloning it. Returns
    /// `None` when the store is empty.
    pub fn with_current<R>(&self, f: impl FnOnce(&Schedule) -> R) -> Option<R> {
        self.current.read().as_ref().map(f)
    }

    /// Mutate the current schedule. The write lock is held for the whole
    /// closure, serializing this mutation against every other reader and
    /// writer. Returns `None` when the store is empty.
    pub fn with_current_mut<R>(&self, f: impl FnOnce(&mut Schedule) -> R) -> Option<R> {
        self.current.write().as_mut().map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::ScheduleStore;
    use crate::models::schedule::{Schedule, ScheduleSuggestion};
    use crate::models::subject::Subject;
    use crate::models::time::{DayOfWeek, Placement, SlotRange, Week};
    use crate::provider::ScheduleProvider;

    fn sample_schedule(name: &str) -> Schedule {
        Schedule {
            name: name.to_string(),
            checksum: String::new(),
            subjects: vec![Subject::new(
                Placement::new(Week::Odd, DayOfWeek::Monday, SlotRange::new(0, 2).unwrap()),
                "CHEM",
            )],
            subject_classes: vec![],
            time_range: SlotRange::full_day(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            repetitions: 5,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = ScheduleStore::new();
        assert!(!store.has_schedule());
        assert!(store.current().is_none());
        assert!(store.with_current(|s| s.subjects.len()).is_none());
        assert!(store.with_current_mut(|s| s.sort_classes()).is_none());
    }

    #[test]
    fn test_replace_returns_previous() {
        let store = ScheduleStore::new();
        assert!(store.replace(sample_schedule("first")).is_none());

        let previous = store.replace(sample_schedule("second")).unwrap();
        assert_eq!(previous.name, "first");
        assert_eq!(store.current().unwrap().name, "second");
    }

    #[test]
    fn test_clear_takes_schedule() {
        let store = ScheduleStore::new();
        store.replace(sample_schedule("only"));
        let taken = store.clear().unwrap();
        assert_eq!(taken.name, "only");
        assert!(!store.has_schedule());
    }

    #[test]
    fn test_mutation_is_visible_to_snapshot() {
        let store = ScheduleStore::new();
        store.replace(sample_schedule("mut"));

        store.with_current_mut(|schedule| {
            schedule.subjects[0].resolve("Chemistry", None);
        });

        let snapshot = store.current().unwrap();
        assert!(snapshot.subjects[0].is_resolved());
    }

    #[test]
    fn test_accept_suggestion_promotes() {
        let store = ScheduleStore::new();
        let suggestion = ScheduleSuggestion::new(
            "scan",
            vec![],
            vec![],
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            5,
        )
        .unwrap();

        store.accept_suggestion(suggestion);
        assert_eq!(store.current().unwrap().name, "scan");
    }

    #[test]
    fn test_clones_share_state() {
        let store = ScheduleStore::new();
        let clone = store.clone();
        store.replace(sample_schedule("shared"));
        assert!(clone.has_schedule());
    }
}
