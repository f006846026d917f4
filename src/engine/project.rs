use crate::engine::clock;
use crate::model::{AtomicBlock, EventInfo, OwnerColor};

/// Projects every event onto its days: one block per (event, day)
/// pair, each carrying the owner's color and preference. Output order
/// is input order (events, then days within an event); the merge and
/// layout passes both key their tie-breaks off that order.
///
/// Block ids are derived, not generated: the same event, day, and color
/// always produce the same id, so repeated layout passes over unchanged
/// input are byte-identical.
pub fn project_blocks(events: &[EventInfo], color: OwnerColor) -> Vec<AtomicBlock> {
    let mut blocks = Vec::new();
    for event in events {
        let start_hours = clock::time_to_hours(&event.times.start_time);
        let duration_hours =
            clock::duration_hours(&event.times.start_time, &event.times.end_time);
        for day in &event.times.days {
            blocks.push(AtomicBlock {
                id: format!("{}-{}-{}", event.event_id, day, color),
                course_name: event.course_name.clone(),
                section_type: event.section_type.clone(),
                event_id: event.event_id.clone(),
                day: day.clone(),
                start_hours,
                duration_hours,
                color,
                preference: event.owner_preference,
            });
        }
    }
    blocks
}
