use crate::model::{Hours, HourSpan, MergedBlock};

/// Folds sorted spans into disjoint ones. Adjacent spans (end == next
/// start) fuse too: a 10-11 class followed by an 11-12 class is one
/// busy stretch, not two.
pub fn merge_spans(sorted: &[HourSpan]) -> Vec<HourSpan> {
    let mut merged: Vec<HourSpan> = Vec::new();
    for &span in sorted {
        if let Some(last) = merged.last_mut()
            && span.start <= last.end
        {
            last.end = last.end.max(span.end);
            continue;
        }
        merged.push(span);
    }
    merged
}

/// Removes `busy` from `base`. Both inputs sorted by start, `busy`
/// disjoint; output keeps only positive-width remainders.
pub fn subtract_spans(base: &[HourSpan], busy: &[HourSpan]) -> Vec<HourSpan> {
    let mut result = Vec::new();
    let mut bi = 0;

    for &window in base {
        let mut cursor = window.start;

        while bi < busy.len() && busy[bi].end <= cursor {
            bi += 1;
        }

        let mut j = bi;
        while j < busy.len() && busy[j].start < window.end {
            let b = &busy[j];
            if b.start > cursor {
                result.push(HourSpan::new(cursor, b.start));
            }
            cursor = cursor.max(b.end);
            j += 1;
        }

        if cursor < window.end {
            result.push(HourSpan::new(cursor, window.end));
        }
    }

    result
}

/// Free gaps within `window` once every block's span is subtracted:
/// the comparison view's "when are we all free?" answer for one day's
/// merged blocks.
///
/// Blocks are clamped to the window first and degenerate ones skipped,
/// so malformed schedule data narrows nothing. `min_width` drops gaps
/// too short to be worth proposing (e.g. the 10 minutes between
/// back-to-back lectures).
pub fn free_windows(
    blocks: &[MergedBlock],
    window: HourSpan,
    min_width: Option<Hours>,
) -> Vec<HourSpan> {
    let mut busy: Vec<HourSpan> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let span = block.span();
        let clamped = HourSpan::new(span.start.max(window.start), span.end.min(window.end));
        if clamped.width() > 0.0 {
            busy.push(clamped);
        }
    }
    busy.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut free = subtract_spans(&[window], &merge_spans(&busy));
    if let Some(min) = min_width {
        free.retain(|s| s.width() >= min);
    }
    free
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Day, OwnerColor, Stripe};

    fn busy_block(start: Hours, duration: Hours) -> MergedBlock {
        MergedBlock {
            id: format!("b{start}"),
            course_name: "6.0001".to_string(),
            section_type: "Lecture".to_string(),
            event_id: "ev".to_string(),
            day: Day::Mon,
            start_hours: start,
            duration_hours: duration,
            stripes: vec![Stripe {
                color: OwnerColor::Green,
                preference: None,
            }],
        }
    }

    fn spans(pairs: &[(Hours, Hours)]) -> Vec<HourSpan> {
        pairs.iter().map(|&(s, e)| HourSpan::new(s, e)).collect()
    }

    // ── merge_spans ───────────────────────────────────────

    #[test]
    fn merge_folds_overlap_and_adjacency() {
        let merged = merge_spans(&spans(&[(9.0, 11.0), (10.0, 12.0), (12.0, 13.0), (15.0, 16.0)]));
        assert_eq!(merged, spans(&[(9.0, 13.0), (15.0, 16.0)]));
    }

    #[test]
    fn merge_keeps_disjoint_apart() {
        let merged = merge_spans(&spans(&[(9.0, 10.0), (11.0, 12.0)]));
        assert_eq!(merged, spans(&[(9.0, 10.0), (11.0, 12.0)]));
    }

    // ── subtract_spans ────────────────────────────────────

    #[test]
    fn subtract_punches_middle() {
        let free = subtract_spans(&spans(&[(9.0, 17.0)]), &spans(&[(12.0, 13.0)]));
        assert_eq!(free, spans(&[(9.0, 12.0), (13.0, 17.0)]));
    }

    #[test]
    fn subtract_swallows_covered_window() {
        let free = subtract_spans(&spans(&[(10.0, 11.0)]), &spans(&[(9.0, 12.0)]));
        assert!(free.is_empty());
    }

    #[test]
    fn subtract_trims_edges() {
        let free = subtract_spans(&spans(&[(9.0, 17.0)]), &spans(&[(8.0, 10.0), (16.0, 18.0)]));
        assert_eq!(free, spans(&[(10.0, 16.0)]));
    }

    // ── free_windows ──────────────────────────────────────

    #[test]
    fn free_day_is_the_whole_window() {
        let window = HourSpan::new(8.0, 18.0);
        assert_eq!(free_windows(&[], window, None), vec![window]);
    }

    #[test]
    fn classes_carve_the_window() {
        let blocks = vec![busy_block(10.0, 1.0), busy_block(14.0, 1.5)];
        let free = free_windows(&blocks, HourSpan::new(8.0, 18.0), None);
        assert_eq!(free, spans(&[(8.0, 10.0), (11.0, 14.0), (15.5, 18.0)]));
    }

    #[test]
    fn min_width_drops_slivers() {
        // 15-minute gap between back-to-back-ish classes
        let blocks = vec![busy_block(10.0, 1.0), busy_block(11.25, 1.0)];
        let free = free_windows(&blocks, HourSpan::new(10.0, 13.0), Some(0.5));
        assert_eq!(free, spans(&[(12.25, 13.0)]));
    }

    #[test]
    fn blocks_outside_the_window_are_ignored() {
        let blocks = vec![busy_block(6.0, 1.0), busy_block(20.0, 2.0)];
        let window = HourSpan::new(9.0, 17.0);
        assert_eq!(free_windows(&blocks, window, None), vec![window]);
    }

    #[test]
    fn degenerate_blocks_cost_no_time() {
        let blocks = vec![busy_block(10.0, 0.0), busy_block(12.0, -1.0)];
        let window = HourSpan::new(9.0, 17.0);
        assert_eq!(free_windows(&blocks, window, None), vec![window]);
    }

    #[test]
    fn fully_booked_day_has_no_gaps() {
        let blocks = vec![busy_block(8.0, 10.0)];
        assert!(free_windows(&blocks, HourSpan::new(9.0, 17.0), None).is_empty());
    }
}
