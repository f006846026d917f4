use crate::model::{AtomicBlock, MergedBlock, Stripe};

// ── Merge pass ──────────────────────────────────────────────────────────

/// Collapses one day's duplicate blocks, so a section shared by
/// several people shows as one block with a stripe per person. The
/// merge key is exact (course name, day, start, duration) equality,
/// never overlap: near-identical sections a minute apart are a real
/// conflict and must stay visible as two blocks.
///
/// Groups by first occurrence: output order is the input order of each
/// group's first member, and stripes within a group follow first-seen
/// color order. A color contributing twice keeps only its first
/// preference. The merged id is the member ids joined with `+`, so it
/// is as deterministic as the inputs.
pub fn merge_day_blocks(blocks: &[AtomicBlock]) -> Vec<MergedBlock> {
    let mut merged: Vec<MergedBlock> = Vec::with_capacity(blocks.len());
    let mut processed = vec![false; blocks.len()];

    for i in 0..blocks.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let seed = &blocks[i];

        let mut ids = vec![seed.id.as_str()];
        let mut stripes = vec![Stripe {
            color: seed.color,
            preference: seed.preference,
        }];

        for j in (i + 1)..blocks.len() {
            if processed[j] || !seed.same_section_slot(&blocks[j]) {
                continue;
            }
            processed[j] = true;
            ids.push(blocks[j].id.as_str());
            if !stripes.iter().any(|s| s.color == blocks[j].color) {
                stripes.push(Stripe {
                    color: blocks[j].color,
                    preference: blocks[j].preference,
                });
            }
        }

        merged.push(MergedBlock {
            id: ids.join("+"),
            course_name: seed.course_name.clone(),
            section_type: seed.section_type.clone(),
            event_id: seed.event_id.clone(),
            day: seed.day.clone(),
            start_hours: seed.start_hours,
            duration_hours: seed.duration_hours,
            stripes,
        });
    }

    merged
}
