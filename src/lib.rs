//! # Announcer Schedule Engine
//!
//! Personal-timetable engine for a school-announcement app.
//!
//! This crate maintains a recurring two-week-cycle class timetable built
//! from partially resolved subject entries: subjects are ingested with
//! only their placement and raw name, and an external resolver supplies
//! display data over time. The engine keeps the normalized set of
//! subject classes consistent as they are edited, sorts and queries the
//! timetable by week, day and time, classifies subject names into a
//! display palette, and tracks how much of the schedule has finished
//! loading.
//!
//! ## Features
//!
//! - **Ingestion**: Parse raw schedule documents from JSON with up-front
//!   slot-range validation
//! - **Queries**: Day/week lookups, calendar-date lessons, stable
//!   week/day/time sorting
//! - **Class registry**: Update, delete and trim subject classes with
//!   snapshot consistency across subjects
//! - **Progress**: Ternary load classification and load fraction over the
//!   partially resolved collection
//! - **Color classification**: Alias-table palette lookup with exact
//!   matching for short aliases
//!
//! ## Architecture
//!
//! - [`api`]: Identifier types and the consolidated public surface
//! - [`models`]: Time primitives, subjects, schedules and ingestion
//! - [`provider`]: The shared interface over schedules and suggestions
//! - [`services`]: Palette classification, the schedule store and the
//!   resolution worker
//! - [`config`]: Injected boundary configuration
//!
//! Everything here is synchronous and runs on the caller's thread except
//! [`services::resolver`], which applies externally produced resolution
//! updates. Mutating operations on one schedule assume a single writer;
//! [`services::store::ScheduleStore`] provides that serialization.

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod provider;

pub mod services;
