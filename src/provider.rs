//! Shared interface over confirmed schedules and pending suggestions.
//!
//! [`Schedule`](crate::models::Schedule) and
//! [`ScheduleSuggestion`](crate::models::ScheduleSuggestion) expose the
//! same timetable surface; the provided methods on [`ScheduleProvider`]
//! implement the queries, progress classification and class mutations
//! over that surface once.
//!
//! The mutators (`sort_classes`, `update_class`, `delete_class`,
//! `trim_unused_classes`) assume single-writer access per provider
//! instance; callers that share a provider across threads must serialize
//! writes externally, e.g. through
//! [`ScheduleStore`](crate::services::store::ScheduleStore).

use std::collections::HashSet;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::api::SubjectClassId;
use crate::models::subject::{Subject, SubjectClass};
use crate::models::time::{DayOfWeek, SlotRange};

/// How much of a schedule's subjects have been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadProgress {
    /// No subject has display data yet (including the empty schedule).
    Unloaded,
    /// Some, but not all, subjects have display data.
    Loading,
    /// Every subject has display data.
    Loaded,
}

/// Common surface of a confirmed schedule and a pending suggestion.
pub trait ScheduleProvider {
    /// The timetable entries, in their ingestion order until sorted.
    fn subjects(&self) -> &[Subject];
    fn subjects_mut(&mut self) -> &mut Vec<Subject>;

    /// The registry of classes referenced by the subjects.
    fn subject_classes(&self) -> &[SubjectClass];
    fn subject_classes_mut(&mut self) -> &mut Vec<SubjectClass>;

    /// Slot interval enclosing every subject. May be loose.
    fn time_range(&self) -> SlotRange;

    /// First day of week 1.
    fn start_date(&self) -> chrono::NaiveDate;

    /// Number of two-week cycles the timetable runs for.
    fn repetitions(&self) -> usize;

    /// The number of resolved subjects.
    fn loaded_subjects(&self) -> usize {
        self.subjects().iter().filter(|s| s.is_resolved()).count()
    }

    /// Ternary load classification. The empty schedule is `Unloaded`.
    fn load_progress(&self) -> LoadProgress {
        let loaded = self.loaded_subjects();
        if loaded == 0 {
            return LoadProgress::Unloaded;
        }
        if loaded == self.subjects().len() {
            return LoadProgress::Loaded;
        }
        LoadProgress::Loading
    }

    /// The fraction of resolved subjects, in `[0, 1]`. Returns 0.0 for
    /// the empty schedule rather than dividing by zero.
    fn load_amount(&self) -> f64 {
        let total = self.subjects().len();
        if total == 0 {
            return 0.0;
        }
        self.loaded_subjects() as f64 / total as f64
    }

    /// Subjects that resolved but could not be associated with a class.
    /// A data-quality signal for the UI, not a fault.
    fn invalid_suggestions(&self) -> usize {
        self.subjects()
            .iter()
            .filter(|s| s.is_resolved() && s.display_class.is_none())
            .count()
    }

    /// Subjects on `day` whose week parity matches the 1-based `week_no`,
    /// in their current order.
    fn subjects_matching(&self, day: DayOfWeek, week_no: u32) -> Vec<&Subject> {
        self.subjects()
            .iter()
            .filter(|subject| {
                subject.placement.day == day && subject.placement.week.matches(week_no)
            })
            .collect()
    }

    /// The 1-based week number containing `date`, or `None` outside the
    /// schedule's active span of `repetitions` two-week cycles.
    fn week_number(&self, date: chrono::NaiveDate) -> Option<u32> {
        let days = (date - self.start_date()).num_days();
        if days < 0 {
            return None;
        }
        let week = (days / 7) as usize + 1;
        if week > self.repetitions() * 2 {
            return None;
        }
        Some(week as u32)
    }

    /// The lessons for a calendar date: empty on weekends and outside
    /// the schedule's active span.
    fn subjects_for_date(&self, date: chrono::NaiveDate) -> Vec<&Subject> {
        let Some(week_no) = self.week_number(date) else {
            return Vec::new();
        };
        let Some(day) = DayOfWeek::from_weekday(date.weekday()) else {
            return Vec::new();
        };
        self.subjects_matching(day, week_no)
    }

    /// Sort subjects by week, then day, then start slot. The sort is
    /// stable: entries equal on all three keys keep their relative order.
    fn sort_classes(&mut self) {
        self.subjects_mut().sort_by(|first, second| {
            first
                .placement
                .week
                .cmp(&second.placement.week)
                .then(first.placement.day.cmp(&second.placement.day))
                .then(
                    first
                        .placement
                        .slots
                        .lower()
                        .cmp(&second.placement.slots.lower()),
                )
        });
    }

    /// Replace the registry entry matching `class.id` and refresh the
    /// snapshot on every subject referencing it. A missing registry
    /// entry means the class was already removed; that is a no-op.
    fn update_class(&mut self, class: &SubjectClass) {
        let Some(index) = self
            .subject_classes()
            .iter()
            .position(|existing| existing.id == class.id)
        else {
            log::debug!("update_class: class {} not in registry, ignoring", class.id);
            return;
        };

        self.subject_classes_mut()[index] = class.clone();
        for subject in self.subjects_mut().iter_mut() {
            if subject.display_class.as_ref().map(|c| c.id) == Some(class.id) {
                subject.display_class = Some(class.clone());
            }
        }
    }

    /// Remove a class from the registry and clear the snapshot on every
    /// subject that pointed to it. Never leaves dangling references.
    fn delete_class(&mut self, class: &SubjectClass) {
        self.subject_classes_mut()
            .retain(|existing| existing.id != class.id);
        for subject in self.subjects_mut().iter_mut() {
            if subject.display_class.as_ref().map(|c| c.id) == Some(class.id) {
                subject.display_class = None;
            }
        }
        log::debug!("deleted class {} ('{}')", class.id, class.name);
    }

    /// Drop registry entries no subject references any more. Idempotent;
    /// safe to call at any time, typically after bulk edits.
    fn trim_unused_classes(&mut self) {
        let referenced: HashSet<SubjectClassId> = self
            .subjects()
            .iter()
            .filter_map(|subject| subject.display_class.as_ref().map(|c| c.id))
            .collect();
        self.subject_classes_mut()
            .retain(|class| referenced.contains(&class.id));
    }
}

macro_rules! impl_schedule_provider {
    ($ty:ty) => {
        impl ScheduleProvider for $ty {
            fn subjects(&self) -> &[Subject] {
                &self.subjects
            }

            fn subjects_mut(&mut self) -> &mut Vec<Subject> {
                &mut self.subjects
            }

            fn subject_classes(&self) -> &[SubjectClass] {
                &self.subject_classes
            }

            fn subject_classes_mut(&mut self) -> &mut Vec<SubjectClass> {
                &mut self.subject_classes
            }

            fn time_range(&self) -> SlotRange {
                self.time_range
            }

            fn start_date(&self) -> chrono::NaiveDate {
                self.start_date
            }

            fn repetitions(&self) -> usize {
                self.repetitions
            }
        }
    };
}

impl_schedule_provider!(crate::models::Schedule);
impl_schedule_provider!(crate::models::ScheduleSuggestion);
