//! Public API surface for the schedule engine.
//!
//! This file consolidates the identifier types and re-exports the model,
//! provider and service types the UI and storage layers consume.

pub use crate::models::schedule::{parse_schedule_json_str, Schedule, ScheduleSuggestion};
pub use crate::models::subject::{Subject, SubjectClass};
pub use crate::models::time::{DayOfWeek, Placement, SlotRange, Week, MAX_DAY_SLOTS};
pub use crate::provider::{LoadProgress, ScheduleProvider};
pub use crate::services::palette::{color_for, color_for_with, SubjectColor};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject class identifier.
///
/// Stable for the life of the class; subjects reference their class by
/// this id through the snapshot they carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubjectClassId(pub Uuid);

impl SubjectClassId {
    pub fn new(value: Uuid) -> Self {
        SubjectClassId(value)
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        SubjectClassId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SubjectClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SubjectClassId> for Uuid {
    fn from(id: SubjectClassId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::SubjectClassId;
    use uuid::Uuid;

    #[test]
    fn test_subject_class_id_new() {
        let raw = Uuid::new_v4();
        let id = SubjectClassId::new(raw);
        assert_eq!(id.value(), raw);
    }

    #[test]
    fn test_subject_class_id_generate_is_unique() {
        let a = SubjectClassId::generate();
        let b = SubjectClassId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_subject_class_id_display() {
        let raw = Uuid::new_v4();
        let id = SubjectClassId::new(raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn test_subject_class_id_hash() {
        use std::collections::HashSet;

        let id = SubjectClassId::generate();
        let mut set = HashSet::new();
        set.insert(id);
        set.insert(SubjectClassId::generate());
        set.insert(id); // Duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_subject_class_id_into_uuid() {
        let raw = Uuid::new_v4();
        let id = SubjectClassId::new(raw);
        let back: Uuid = id.into();
        assert_eq!(back, raw);
    }
}
