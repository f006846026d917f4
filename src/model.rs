use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fractional hours since midnight, the engine's only time unit.
pub type Hours = f64;

/// Half-open interval `[start, end)` in fractional hours.
///
/// Unlike a validated range type, degenerate spans (zero or negative
/// width) are legal here: malformed upstream data degrades to them and
/// the overlap test stays well defined (a zero-width span only overlaps
/// spans it sits strictly inside).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourSpan {
    pub start: Hours,
    pub end: Hours,
}

impl HourSpan {
    pub fn new(start: Hours, end: Hours) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> Hours {
        self.end - self.start
    }

    /// Half-open overlap test: touching endpoints do NOT overlap, so
    /// back-to-back classes never collide.
    pub fn overlaps(&self, other: &HourSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Day-of-week token.
///
/// The seven weekdays carry the fixed three-letter tokens the grid is
/// keyed on. Anything else the upstream feed sends survives as the
/// uppercased first three characters of the raw name (see
/// `engine::normalize_day`), so unknown days still group consistently
/// instead of being dropped.
///
/// Ordering is MON..SUN first, then fallback tokens lexicographically;
/// that is the column order of the rendered week. Serializes as the
/// bare token so day-keyed maps stay plain JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
    Other(String),
}

impl Day {
    /// The rendered week, in column order.
    pub const WEEK: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
            Day::Sat => "SAT",
            Day::Sun => "SUN",
            Day::Other(token) => token,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Day> for String {
    fn from(day: Day) -> String {
        day.as_str().to_string()
    }
}

/// Token round-trip only: full day names are the wire layer's problem
/// (`engine::normalize_day`), not serde's.
impl From<String> for Day {
    fn from(token: String) -> Day {
        match token.as_str() {
            "MON" => Day::Mon,
            "TUE" => Day::Tue,
            "WED" => Day::Wed,
            "THU" => Day::Thu,
            "FRI" => Day::Fri,
            "SAT" => Day::Sat,
            "SUN" => Day::Sun,
            _ => Day::Other(token),
        }
    }
}

/// Whose schedule a block belongs to. Rendering maps these to the stripe
/// colors of the comparison view: the viewer is green, the first compared
/// person blue, the second pink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerColor {
    Green,
    Blue,
    Pink,
}

impl OwnerColor {
    /// Conventional color for the n-th person on screen (0 = the viewer).
    /// Slots beyond the two comparison slots reuse pink.
    pub fn for_slot(slot: usize) -> OwnerColor {
        match slot {
            0 => OwnerColor::Green,
            1 => OwnerColor::Blue,
            _ => OwnerColor::Pink,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerColor::Green => "green",
            OwnerColor::Blue => "blue",
            OwnerColor::Pink => "pink",
        }
    }
}

impl fmt::Display for OwnerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-person 0-2 course rating, shown as a dot on that person's stripes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    NotLikely,
    Maybe,
    Likely,
}

impl Preference {
    /// Maps the wire's numeric score. Anything outside 0-2 is None; the
    /// boundary logs the drop.
    pub fn from_score(score: u8) -> Option<Preference> {
        match score {
            0 => Some(Preference::NotLikely),
            1 => Some(Preference::Maybe),
            2 => Some(Preference::Likely),
            _ => None,
        }
    }

    pub fn score(&self) -> u8 {
        match self {
            Preference::NotLikely => 0,
            Preference::Maybe => 1,
            Preference::Likely => 2,
        }
    }
}

/// One meeting pattern: which days, and the raw "HH:MM" wall times.
///
/// Times stay wire strings on purpose: conversion to hours happens at
/// projection, so a malformed time degrades to a zero-ish block there
/// instead of failing the fetch that delivered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub days: Vec<Day>,
    pub start_time: String,
    pub end_time: String,
}

/// One concrete meeting (e.g. one lecture section) on one person's
/// schedule. `owner_preference` is present only for the viewer's own
/// events or an explicitly compared person's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    pub event_id: String,
    pub course_name: String,
    pub section_type: String,
    pub times: TimeSlot,
    pub owner_preference: Option<Preference>,
}

/// One (event, day) cell for one owner, the unit the merger consumes.
///
/// Recomputed fresh on every layout pass and never mutated. The id is a
/// derived composite so identical inputs always produce identical ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomicBlock {
    pub id: String,
    pub course_name: String,
    pub section_type: String,
    pub event_id: String,
    pub day: Day,
    pub start_hours: Hours,
    pub duration_hours: Hours,
    pub color: OwnerColor,
    pub preference: Option<Preference>,
}

impl AtomicBlock {
    pub fn span(&self) -> HourSpan {
        HourSpan::new(self.start_hours, self.start_hours + self.duration_hours)
    }

    /// The merge key: same course name, same day, and exactly equal start
    /// and duration. Overlap is not enough; sections one minute apart
    /// stay separate. Exact f64 equality is sound here because every
    /// value comes from the same integer `h + m/60` parse.
    pub fn same_section_slot(&self, other: &AtomicBlock) -> bool {
        self.course_name == other.course_name
            && self.day == other.day
            && self.start_hours == other.start_hours
            && self.duration_hours == other.duration_hours
    }
}

/// One owner's contribution to a merged block: their color plus the
/// preference dot drawn on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stripe {
    pub color: OwnerColor,
    pub preference: Option<Preference>,
}

/// One or more atomic blocks sharing an exact merge key, collapsed into a
/// single visual unit with one stripe per distinct owner color.
///
/// Stripe order is first-seen order in the day's input; a color appearing
/// twice in one group keeps only its first preference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedBlock {
    /// Composite of the constituent atomic ids, joined with `+`.
    pub id: String,
    pub course_name: String,
    pub section_type: String,
    pub event_id: String,
    pub day: Day,
    pub start_hours: Hours,
    pub duration_hours: Hours,
    pub stripes: Vec<Stripe>,
}

impl MergedBlock {
    pub fn span(&self) -> HourSpan {
        HourSpan::new(self.start_hours, self.start_hours + self.duration_hours)
    }

    pub fn colors(&self) -> impl Iterator<Item = OwnerColor> + '_ {
        self.stripes.iter().map(|s| s.color)
    }
}

/// A merged block plus horizontal placement for collision-free rendering.
/// Placement is pure geometry; it never feeds back into merge identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutBlock {
    pub block: MergedBlock,
    /// 0-based column within the overlap group.
    pub column_index: usize,
    /// Column count of the overlap group this block landed in.
    pub total_columns: usize,
}

/// One person's fetched schedule tagged with their on-screen color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSchedule {
    pub events: Vec<EventInfo>,
    pub color: OwnerColor,
}

/// Laid-out blocks per day, iterated in `Day` order (MON..SUN, then any
/// fallback tokens).
pub type WeekLayout = BTreeMap<Day, Vec<LaidOutBlock>>;
