// ── Engine metrics ──────────────────────────────────────────────

/// Counter: full week-layout passes computed.
pub const LAYOUT_PASSES_TOTAL: &str = "weekgrid_layout_passes_total";

/// Histogram: merged blocks produced per day per pass.
pub const MERGED_BLOCKS_PER_DAY: &str = "weekgrid_merged_blocks_per_day";

// ── Ingest data-quality metrics ─────────────────────────────────

/// Counter: time strings that needed the zero-fallback parse.
pub const MALFORMED_TIMES_TOTAL: &str = "weekgrid_malformed_times_total";

/// Counter: day names outside the known week.
pub const UNKNOWN_DAYS_TOTAL: &str = "weekgrid_unknown_days_total";

/// Counter: preference scores outside 0-2, dropped at ingest.
pub const DROPPED_PREFERENCES_TOTAL: &str = "weekgrid_dropped_preferences_total";

// ── Cache metrics ───────────────────────────────────────────────

/// Gauge: usernames with a cached schedule.
pub const CACHED_PROFILES: &str = "weekgrid_cached_profiles";
