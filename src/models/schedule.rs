//! Schedule records and raw-schedule ingestion.
//!
//! A raw schedule document is an ordered list of entries, each naming a
//! week parity, a weekday, a slot interval and the raw subject name as
//! received. Parsing validates the slot-range invariants up front; past
//! this point the engine assumes they hold unconditionally. A SHA-256
//! checksum of the source document is recorded so the external diffing
//! layer can detect re-imports.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::ScheduleError;
use crate::models::subject::{Subject, SubjectClass};
use crate::models::time::{DayOfWeek, Placement, SlotRange, Week};

/// A confirmed personal timetable.
///
/// `time_range` always encloses the union of every subject's slot range;
/// it may be loose. `start_date` and `repetitions` are external inputs,
/// fixed at construction — the engine never resizes them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Schedule name (may be empty for unnamed imports).
    #[serde(default)]
    pub name: String,
    /// SHA-256 checksum of the source document, hex-encoded.
    #[serde(default)]
    pub checksum: String,
    /// Ordered timetable entries.
    pub subjects: Vec<Subject>,
    /// Registry of classes referenced by the subjects.
    #[serde(default)]
    pub subject_classes: Vec<SubjectClass>,
    /// Slot interval covering every subject in the schedule.
    pub time_range: SlotRange,
    /// First day of week 1.
    pub start_date: chrono::NaiveDate,
    /// Number of two-week cycles the schedule runs for.
    pub repetitions: usize,
}

/// A pending schedule awaiting user confirmation.
///
/// Carries the same timetable data as a [`Schedule`] plus a label for
/// where the raw entries came from. Accepting a suggestion promotes it
/// wholesale via `Schedule::from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSuggestion {
    /// Where the raw timetable was obtained (e.g. a scan or an import).
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub checksum: String,
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub subject_classes: Vec<SubjectClass>,
    pub time_range: SlotRange,
    pub start_date: chrono::NaiveDate,
    pub repetitions: usize,
}

impl ScheduleSuggestion {
    /// Build a suggestion from already-constructed subjects, inferring
    /// the enclosing time range.
    pub fn new(
        source: impl Into<String>,
        subjects: Vec<Subject>,
        subject_classes: Vec<SubjectClass>,
        start_date: chrono::NaiveDate,
        repetitions: usize,
    ) -> Result<Self, ScheduleError> {
        if repetitions == 0 {
            return Err(ScheduleError::ZeroRepetitions);
        }
        let time_range = infer_time_range(&subjects);
        Ok(Self {
            source: source.into(),
            checksum: String::new(),
            subjects,
            subject_classes,
            time_range,
            start_date,
            repetitions,
        })
    }
}

impl From<ScheduleSuggestion> for Schedule {
    /// Promote an accepted suggestion, carrying all timetable data over.
    fn from(suggestion: ScheduleSuggestion) -> Self {
        log::info!(
            "promoting schedule suggestion from '{}' with {} subjects",
            suggestion.source,
            suggestion.subjects.len()
        );
        Schedule {
            name: suggestion.source,
            checksum: suggestion.checksum,
            subjects: suggestion.subjects,
            subject_classes: suggestion.subject_classes,
            time_range: suggestion.time_range,
            start_date: suggestion.start_date,
            repetitions: suggestion.repetitions,
        }
    }
}

#[derive(serde::Deserialize)]
struct ScheduleInput {
    #[serde(default)]
    name: String,
    #[serde(default)]
    checksum: String,
    start_date: chrono::NaiveDate,
    repetitions: Option<usize>,
    #[serde(default)]
    entries: Vec<EntryInput>,
}

#[derive(serde::Deserialize)]
struct EntryInput {
    week: Week,
    day: DayOfWeek,
    slots: SlotBoundsInput,
    raw_name: String,
}

#[derive(serde::Deserialize)]
struct SlotBoundsInput {
    lower: u8,
    upper: u8,
}

fn validate_input_schedule(schedule_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(schedule_json).context("Invalid schedule JSON")?;
    let has_entries = value
        .as_object()
        .and_then(|obj| obj.get("entries"))
        .is_some();
    if !has_entries {
        return Err(ScheduleError::MissingEntries.into());
    }
    Ok(())
}

/// Parse a raw schedule document into an unresolved [`Schedule`].
///
/// Every entry is validated against the slot-range invariants and all
/// subjects start unresolved. When the document omits `repetitions`, the
/// default from `config` applies. The overall time range is inferred as
/// the smallest interval enclosing every entry, falling back to the full
/// day for an empty entry list.
///
/// # Arguments
///
/// * `schedule_json` - Raw schedule JSON (snake_case field names)
/// * `config` - Optional engine configuration supplying boundary defaults
///
/// # Returns
///
/// A fully constructed `Schedule` with inferred time range and computed
/// checksum.
pub fn parse_schedule_json_str(
    schedule_json: &str,
    config: Option<&EngineConfig>,
) -> Result<Schedule> {
    validate_input_schedule(schedule_json)?;

    let input: ScheduleInput = serde_json::from_str(schedule_json)
        .context("Failed to deserialize schedule JSON using Serde")?;

    let repetitions = match input.repetitions {
        Some(0) => return Err(ScheduleError::ZeroRepetitions.into()),
        Some(n) => n,
        None => config
            .map(|c| c.default_repetitions)
            .unwrap_or_else(|| EngineConfig::default().default_repetitions),
    };

    let subjects = input
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let slots = SlotRange::new(entry.slots.lower, entry.slots.upper)
                .with_context(|| format!("Invalid slot range in entry {}", index))?;
            Ok(Subject::new(
                Placement::new(entry.week, entry.day, slots),
                entry.raw_name,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let time_range = infer_time_range(&subjects);

    let checksum = if input.checksum.is_empty() {
        compute_source_checksum(schedule_json)
    } else {
        input.checksum
    };

    log::debug!(
        "parsed schedule '{}': {} entries, {} repetitions",
        input.name,
        subjects.len(),
        repetitions
    );

    Ok(Schedule {
        name: input.name,
        checksum,
        subjects,
        subject_classes: Vec::new(),
        time_range,
        start_date: input.start_date,
        repetitions,
    })
}

fn infer_time_range(subjects: &[Subject]) -> SlotRange {
    subjects
        .iter()
        .map(|subject| subject.placement.slots)
        .reduce(|acc, slots| acc.union(&slots))
        .unwrap_or_else(SlotRange::full_day)
}

/// Compute a checksum for the raw schedule document.
fn compute_source_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

// ============================================================================
// Tests
// ============================================================================
