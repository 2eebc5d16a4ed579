//! Application of asynchronous resolution updates.
//!
//! The external resolver works through raw subject entries over time and
//! in arbitrary order. This service drains its updates from a channel
//! and applies each one to the stored schedule as a single atomic
//! field-set under the store's write lock. Updates that cannot be
//! applied (index out of range, subject already resolved) are logged and
//! skipped; resolution failure is the resolver's concern, not the
//! engine's.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::models::subject::SubjectClass;
use crate::provider::ScheduleProvider;
use crate::services::store::ScheduleStore;

/// Display data for one subject, addressed by its stable position in
/// the subject list. Subjects are never deleted individually, so the
/// index stays valid for the lifetime of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionUpdate {
    pub index: usize,
    pub display_name: String,
    #[serde(default)]
    pub class: Option<SubjectClass>,
}

/// Drain `rx` and apply every update to the schedule held by `store`.
///
/// Designed to be spawned alongside the resolver task. Runs until the
/// channel closes and returns the number of updates applied. Progress
/// is logged per update so the UI layer can surface load state.
pub async fn apply_resolutions(
    store: ScheduleStore,
    mut rx: mpsc::Receiver<ResolutionUpdate>,
) -> usize {
    let mut applied = 0usize;

    while let Some(update) = rx.recv().await {
        let outcome = store.with_current_mut(|schedule| {
            match schedule.subjects.get_mut(update.index) {
                None => {
                    log::warn!(
                        "resolution for index {} is out of range ({} subjects), skipping",
                        update.index,
                        schedule.subjects.len()
                    );
                    false
                }
                Some(subject) if subject.is_resolved() => {
                    log::debug!(
                        "subject {} already resolved, skipping update '{}'",
                        update.index,
                        update.display_name
                    );
                    false
                }
                Some(subject) => {
                    subject.resolve(update.display_name, update.class);
                    true
                }
            }
        });

        match outcome {
            Some(true) => {
                applied += 1;
                if let Some((loaded, total)) =
                    store.with_current(|s| (s.loaded_subjects(), s.subjects.len()))
                {
                    log::debug!("resolved {}/{} subjects", loaded, total);
                }
            }
            Some(false) => {}
            None => log::warn!("resolution update received with no schedule in store"),
        }
    }

    log::info!("resolution channel closed, {} updates applied", applied);
    applied
}

#[cfg(test)]
mod tests {
    use super::{apply_resolutions, ResolutionUpdate};
    use crate::models::schedule::Schedule;
    use crate::models::subject::{Subject, SubjectClass};
    use crate::models::time::{DayOfWeek, Placement, SlotRange, Week};
    use crate::provider::{LoadProgress, ScheduleProvider};
    use crate::services::palette::SubjectColor;
    use crate::services::store::ScheduleStore;
    use tokio::sync::mpsc;

    fn schedule_with_subjects(count: usize) -> Schedule {
        let subjects = (0..count)
            .map(|i| {
                Subject::new(
                    Placement::new(
                        Week::Odd,
                        DayOfWeek::Monday,
                        SlotRange::new(i as u8 * 2, i as u8 * 2 + 2).unwrap(),
                    ),
                    format!("RAW{}", i),
                )
            })
            .collect();
        Schedule {
            name: "test".to_string(),
            checksum: String::new(),
            subjects,
            subject_classes: vec![],
            time_range: SlotRange::full_day(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            repetitions: 5,
        }
    }

    #[tokio::test]
    async fn test_applies_updates_in_any_order() {
        let store = ScheduleStore::new();
        store.replace(schedule_with_subjects(3));

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(apply_resolutions(store.clone(), rx));

        for index in [2, 0, 1] {
            tx.send(ResolutionUpdate {
                index,
                display_name: format!("Subject {}", index),
                class: None,
            })
            .await
            .unwrap();
        }
        drop(tx);

        let applied = worker.await.unwrap();
        assert_eq!(applied, 3);

        let schedule = store.current().unwrap();
        assert_eq!(schedule.load_progress(), LoadProgress::Loaded);
        assert_eq!(schedule.subjects[2].display_name.as_deref(), Some("Subject 2"));
    }

    #[tokio::test]
    async fn test_skips_out_of_range_and_duplicates() {
        let store = ScheduleStore::new();
        store.replace(schedule_with_subjects(1));

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(apply_resolutions(store.clone(), rx));

        let class = SubjectClass::new("Chemistry", None, None, SubjectColor::Red);
        tx.send(ResolutionUpdate {
            index: 0,
            display_name: "Chemistry".to_string(),
            class: Some(class),
        })
        .await
        .unwrap();
        // Duplicate for an already-resolved subject.
        tx.send(ResolutionUpdate {
            index: 0,
            display_name: "Biology".to_string(),
            class: None,
        })
        .await
        .unwrap();
        // Index past the end of the subject list.
        tx.send(ResolutionUpdate {
            index: 9,
            display_name: "Ghost".to_string(),
            class: None,
        })
        .await
        .unwrap();
        drop(tx);

        let applied = worker.await.unwrap();
        assert_eq!(applied, 1);

        let schedule = store.current().unwrap();
        assert_eq!(schedule.subjects[0].display_name.as_deref(), Some("Chemistry"));
    }

    #[tokio::test]
    async fn test_empty_store_applies_nothing() {
        let store = ScheduleStore::new();
        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(apply_resolutions(store.clone(), rx));

        tx.send(ResolutionUpdate {
            index: 0,
            display_name: "Nowhere".to_string(),
            class: None,
        })
        .await
        .unwrap();
        drop(tx);

        assert_eq!(worker.await.unwrap(), 0);
    }
}
