//! Service layer on top of the timetable models.
//!
//! Services cover the concerns around the core records: color
//! classification of subject names, the shared schedule store that
//! serializes mutations, and the async application of resolver updates.

pub mod palette;

pub mod resolver;

pub mod store;

pub use palette::{color_for, color_for_with, SubjectColor};
pub use resolver::{apply_resolutions, ResolutionUpdate};
pub use store::ScheduleStore;
