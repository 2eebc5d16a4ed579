//! Primitive time values for the two-week timetable cycle.
//!
//! A schedule repeats an Odd/Even pair of weeks; within a week, lessons
//! sit on a weekday and occupy a half-open interval of integer time
//! slots counted from the start of the school day.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Number of time slots in a school day.
///
/// Slots are twenty-minute blocks indexed from 0 at the start of the
/// day; every [`SlotRange`] must fit within `0..MAX_DAY_SLOTS`.
pub const MAX_DAY_SLOTS: u8 = 40;

/// Week parity in the two-week cycle. Week numbering is 1-based, so the
/// first timetable week is [`Week::Odd`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Week {
    Odd,
    Even,
}

impl Week {
    /// True if `week_no`'s parity equals this week.
    pub fn matches(&self, week_no: u32) -> bool {
        match self {
            Week::Odd => week_no % 2 == 1,
            Week::Even => week_no % 2 == 0,
        }
    }

    /// The week containing the given 1-based week number.
    pub fn of(week_no: u32) -> Self {
        if week_no % 2 == 1 {
            Week::Odd
        } else {
            Week::Even
        }
    }
}

/// School days, ordered by declaration. The derived `Ord` is the sort
/// key used when ordering subjects within a week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// All school days in order.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Convert from a calendar weekday. Weekends carry no lessons.
    pub fn from_weekday(weekday: chrono::Weekday) -> Option<Self> {
        match weekday {
            chrono::Weekday::Mon => Some(DayOfWeek::Monday),
            chrono::Weekday::Tue => Some(DayOfWeek::Tuesday),
            chrono::Weekday::Wed => Some(DayOfWeek::Wednesday),
            chrono::Weekday::Thu => Some(DayOfWeek::Thursday),
            chrono::Weekday::Fri => Some(DayOfWeek::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }
}

/// Half-open interval `[lower, upper)` of time slots within one day.
///
/// The constructor enforces `lower < upper` and `upper <= MAX_DAY_SLOTS`;
/// the rest of the engine assumes both hold unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRange {
    lower: u8,
    upper: u8,
}

impl SlotRange {
    /// Create a validated slot range.
    pub fn new(lower: u8, upper: u8) -> ScheduleResult<Self> {
        if lower >= upper {
            return Err(ScheduleError::InvalidSlotRange { lower, upper });
        }
        if upper > MAX_DAY_SLOTS {
            return Err(ScheduleError::SlotRangeOutOfDay {
                lower,
                upper,
                max: MAX_DAY_SLOTS,
            });
        }
        Ok(Self { lower, upper })
    }

    /// The whole school day.
    pub fn full_day() -> Self {
        Self {
            lower: 0,
            upper: MAX_DAY_SLOTS,
        }
    }

    /// First slot covered by the range.
    pub fn lower(&self) -> u8 {
        self.lower
    }

    /// First slot past the end of the range.
    pub fn upper(&self) -> u8 {
        self.upper
    }

    /// Number of slots covered.
    pub fn len(&self) -> u8 {
        self.upper - self.lower
    }

    /// A validated `SlotRange` is never empty; kept for the `len`/`is_empty`
    /// convention.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if a slot lies inside the range (inclusive start, exclusive end).
    pub fn contains(&self, slot: u8) -> bool {
        self.lower <= slot && slot < self.upper
    }

    /// Check if this range fully encloses another.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Check if this range overlaps another.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }

    /// Smallest range enclosing both. Used when inferring a schedule's
    /// overall time range, which is allowed to be loose.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }
}

/// Where a subject sits in the two-week cycle: week parity, weekday and
/// the slot interval it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub week: Week,
    pub day: DayOfWeek,
    pub slots: SlotRange,
}

impl Placement {
    pub fn new(week: Week, day: DayOfWeek, slots: SlotRange) -> Self {
        Self { week, day, slots }
    }
}
