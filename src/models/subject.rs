//! Subjects and their classes.
//!
//! A [`Subject`] is a single timetable entry: a placement in the
//! two-week cycle plus the raw name it was ingested with. Display data
//! (readable name and a [`SubjectClass`] snapshot) arrives later from the
//! external resolver. A [`SubjectClass`] groups entries that share a
//! teacher, venue and color; the registry on the schedule owns the
//! canonical values and subjects carry copies, synchronized explicitly
//! through [`ScheduleProvider::update_class`](crate::provider::ScheduleProvider::update_class).

use serde::{Deserialize, Serialize};

use crate::api::SubjectClassId;
use crate::models::time::Placement;
use crate::services::palette::SubjectColor;

/// Class metadata shared by a group of subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectClass {
    /// Stable identity; snapshot consistency is keyed on this.
    pub id: SubjectClassId,
    /// Display name of the class.
    pub name: String,
    /// Teaching staff, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    /// Room or venue, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Palette color used when rendering the class.
    pub color: SubjectColor,
}

impl SubjectClass {
    /// Create a class with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        teacher: Option<String>,
        venue: Option<String>,
        color: SubjectColor,
    ) -> Self {
        Self {
            id: SubjectClassId::generate(),
            name: name.into(),
            teacher,
            venue,
            color,
        }
    }
}

/// A single timetable entry.
///
/// Subjects are created unresolved (`display_name == None`) at ingestion
/// and transition to resolved exactly once, when the external resolver
/// supplies display data. They are never deleted individually; only
/// their class association can be cleared or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Where the subject sits in the two-week cycle.
    pub placement: Placement,
    /// Name as received from the raw source, unprocessed.
    pub raw_name: String,
    /// Readable name; presence of a value signals "resolved".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Snapshot of the class this subject belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_class: Option<SubjectClass>,
}

impl Subject {
    /// Create an unresolved subject.
    pub fn new(placement: Placement, raw_name: impl Into<String>) -> Self {
        Self {
            placement,
            raw_name: raw_name.into(),
            display_name: None,
            display_class: None,
        }
    }

    /// Whether the resolver has supplied display data for this subject.
    pub fn is_resolved(&self) -> bool {
        self.display_name.is_some()
    }

    /// Apply resolution data. Both fields are replaced wholesale so a
    /// concurrent reader never observes a torn value. Resolution is
    /// one-way and happens at most once; a repeat call is a logged no-op.
    pub fn resolve(&mut self, display_name: impl Into<String>, class: Option<SubjectClass>) {
        if self.display_name.is_some() {
            log::warn!(
                "subject '{}' is already resolved, ignoring repeat resolution",
                self.raw_name
            );
            return;
        }
        self.display_name = Some(display_name.into());
        self.display_class = class;
    }
}
