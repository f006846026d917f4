use crate::model::{LaidOutBlock, MergedBlock};

// ── Greedy sweep ────────────────────────────────────────────────────────

/// Assigns columns so one day's overlapping blocks render side by
/// side. Sorts by start (stable, so ties keep input order), sweeps
/// once growing an active group, and flushes a group whenever the
/// next block overlaps none of its members. Columns are assigned per
/// group in sort order, `total_columns` is the group size.
///
/// The sweep is not an interval-graph coloring: a chain A-B-C where A
/// and C never meet still lands in one group of three columns. That
/// over-width is accepted; callers depend on the pass staying a single
/// deterministic linear scan. Degenerate blocks sweep through like the
/// rest, and an empty day yields an empty layout.
pub fn layout_day(blocks: Vec<MergedBlock>) -> Vec<LaidOutBlock> {
    let mut sorted = blocks;
    sorted.sort_by(|a, b| a.start_hours.total_cmp(&b.start_hours));

    let mut out = Vec::with_capacity(sorted.len());
    let mut group: Vec<MergedBlock> = Vec::new();

    for block in sorted {
        // Membership is overlap with ANY current member, not just the
        // latest: a short block can sit inside an earlier long one.
        let span = block.span();
        if !group.is_empty() && !group.iter().any(|member| member.span().overlaps(&span)) {
            flush_group(&mut group, &mut out);
        }
        group.push(block);
    }
    flush_group(&mut group, &mut out);

    out
}

fn flush_group(group: &mut Vec<MergedBlock>, out: &mut Vec<LaidOutBlock>) {
    let total_columns = group.len();
    for (column_index, block) in group.drain(..).enumerate() {
        out.push(LaidOutBlock {
            block,
            column_index,
            total_columns,
        });
    }
}
