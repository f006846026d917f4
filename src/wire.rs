use serde::Deserialize;
use tracing::{debug, warn};

use crate::engine;
use crate::model::{Day, EventInfo, Preference, TimeSlot};

// ── Wire shapes ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    event_id: String,
    course_name: String,
    section_type: String,
    times: RawTimeSlot,
    // i64, not u8: a sentinel like -1 or an oversized score must reach
    // the drop path below instead of failing the whole payload.
    #[serde(default)]
    owner_preference: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeSlot {
    days: Vec<String>,
    start_time: String,
    end_time: String,
}

// ── Errors ────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum WireError {
    Json(serde_json::Error),
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::Json(e) => write!(f, "schedule payload: {e}"),
        }
    }
}

impl std::error::Error for WireError {}

impl From<serde_json::Error> for WireError {
    fn from(e: serde_json::Error) -> Self {
        WireError::Json(e)
    }
}

// ── Parsing ───────────────────────────────────────────────────────

/// Parses one person's schedule payload (a JSON array of events) into
/// typed events. The engine only ever sees the output of this step;
/// nothing downstream sniffs response shapes.
///
/// Shape problems fail the whole payload; data-quality problems inside
/// a well-shaped payload degrade instead. Suspicious time strings keep
/// their raw form (conversion tolerates them later), unknown day names
/// keep a fallback token, and out-of-range preference scores are
/// dropped. Each degradation is logged and counted here, once, so the
/// engine itself can stay silent.
pub fn parse_schedule(raw: &str) -> Result<Vec<EventInfo>, WireError> {
    let raw_events: Vec<RawEvent> = serde_json::from_str(raw)?;
    let events: Vec<EventInfo> = raw_events.into_iter().map(typed_event).collect();
    debug!("parsed schedule payload: {} events", events.len());
    Ok(events)
}

fn typed_event(raw: RawEvent) -> EventInfo {
    for time in [&raw.times.start_time, &raw.times.end_time] {
        if !engine::is_well_formed_time(time) {
            warn!(
                "event {}: suspicious time {time:?}, will degrade at projection",
                raw.event_id
            );
            metrics::counter!(crate::observability::MALFORMED_TIMES_TOTAL).increment(1);
        }
    }

    let days: Vec<Day> = raw
        .times
        .days
        .iter()
        .map(|name| {
            let day = engine::normalize_day(name);
            if let Day::Other(token) = &day {
                warn!("event {}: unknown day {name:?}, keeping token {token:?}", raw.event_id);
                metrics::counter!(crate::observability::UNKNOWN_DAYS_TOTAL).increment(1);
            }
            day
        })
        .collect();

    let owner_preference = raw.owner_preference.and_then(|score| {
        let preference = u8::try_from(score).ok().and_then(Preference::from_score);
        if preference.is_none() {
            warn!("event {}: preference score {score} out of range, dropping", raw.event_id);
            metrics::counter!(crate::observability::DROPPED_PREFERENCES_TOTAL).increment(1);
        }
        preference
    });

    EventInfo {
        event_id: raw.event_id,
        course_name: raw.course_name,
        section_type: raw.section_type,
        times: TimeSlot {
            days,
            start_time: raw.times.start_time,
            end_time: raw.times.end_time,
        },
        owner_preference,
    }
}
