mod clock;
mod freetime;
mod layout;
mod merge;
mod project;

pub use clock::{duration_hours, is_well_formed_time, normalize_day, time_to_hours};
pub use freetime::{free_windows, merge_spans, subtract_spans};
pub use layout::layout_day;
pub use merge::merge_day_blocks;
pub use project::project_blocks;

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{AtomicBlock, Day, PersonSchedule, WeekLayout};

// ── Week composition ────────────────────────────────────────────────────

/// Full pipeline for the comparison view: project every person's
/// events, bucket the blocks by day, merge duplicates, lay out
/// columns.
///
/// Schedule order is color precedence: person 0's blocks enter each
/// day's list before person 1's, so stripe order and merge seeds
/// follow the on-screen person order. Days nobody has class on are
/// absent from the result, and the whole pass is a pure function of
/// its input, so re-running it on unchanged schedules reproduces the
/// previous layout exactly.
pub fn compute_week_layout(schedules: &[PersonSchedule]) -> WeekLayout {
    let mut by_day: BTreeMap<Day, Vec<AtomicBlock>> = BTreeMap::new();
    for schedule in schedules {
        for block in project_blocks(&schedule.events, schedule.color) {
            by_day.entry(block.day.clone()).or_default().push(block);
        }
    }

    let mut week = WeekLayout::new();
    let mut block_count = 0usize;
    for (day, blocks) in by_day {
        let merged = merge_day_blocks(&blocks);
        metrics::histogram!(crate::observability::MERGED_BLOCKS_PER_DAY)
            .record(merged.len() as f64);
        block_count += merged.len();
        week.insert(day, layout_day(merged));
    }

    metrics::counter!(crate::observability::LAYOUT_PASSES_TOTAL).increment(1);
    debug!(
        "laid out {block_count} blocks over {} days for {} schedules",
        week.len(),
        schedules.len()
    );
    week
}
