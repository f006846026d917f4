use crate::model::{Day, Hours};

// ── Wall times ──────────────────────────────────────────────────────────

/// "HH:MM" to fractional hours since midnight. "10:30" -> 10.5.
///
/// Hour and minute are the first two `:`-separated fields, each
/// trimmed and parsed independently; a field that fails to parse
/// counts as 0, a missing minute field means 0, and fields past the
/// minute ("10:30:00") are ignored. Out-of-range values ("9:60") pass
/// through arithmetically (-> 10.0), matching clock carry.
pub fn time_to_hours(raw: &str) -> Hours {
    let mut parts = raw.split(':');
    let hour = parse_component(parts.next().unwrap_or(""));
    let minute = parse_component(parts.next().unwrap_or("0"));
    hour as Hours + minute as Hours / 60.0
}

fn parse_component(part: &str) -> i64 {
    part.trim().parse::<i64>().unwrap_or(0)
}

/// Width of `[start, end)` in hours. Negative when the feed claims an
/// event ends before it starts; callers keep such blocks, they just
/// render degenerate.
pub fn duration_hours(start: &str, end: &str) -> Hours {
    time_to_hours(end) - time_to_hours(start)
}

/// Whether `raw` is an in-range clock time that `time_to_hours` needs
/// no fallback for. The ingest boundary uses this to log data-quality
/// warnings; conversion itself never rejects anything.
pub fn is_well_formed_time(raw: &str) -> bool {
    let mut parts = raw.splitn(2, ':');
    let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
        return false;
    };
    let (Ok(hour), Ok(minute)) = (hour.trim().parse::<i64>(), minute.trim().parse::<i64>())
    else {
        return false;
    };
    (0..24).contains(&hour) && (0..60).contains(&minute)
}

// ── Day names ───────────────────────────────────────────────────────────

/// Normalizes a raw day name to its grid token.
///
/// Case-insensitive: full names, three-letter forms, and anything in
/// between all land on the weekday ("monday", "Mon", "MONDAY" -> MON).
/// A name that matches no weekday keeps its uppercased first three
/// characters as a fallback token, so repeated occurrences of the same
/// unknown name still group into one column.
pub fn normalize_day(raw: &str) -> Day {
    let token: String = raw.trim().chars().take(3).collect::<String>().to_uppercase();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_times() {
        assert_eq!(time_to_hours("10:30"), 10.5);
        assert_eq!(time_to_hours("00:00"), 0.0);
        assert_eq!(time_to_hours("23:45"), 23.75);
        assert_eq!(time_to_hours("9:15"), 9.25);
    }

    #[test]
    fn tolerates_whitespace() {
        assert_eq!(time_to_hours(" 10 : 30 "), 10.5);
    }

    #[test]
    fn malformed_components_fold_to_zero() {
        assert_eq!(time_to_hours("abc"), 0.0);
        assert_eq!(time_to_hours("abc:30"), 0.5);
        assert_eq!(time_to_hours("10:xx"), 10.0);
        assert_eq!(time_to_hours(""), 0.0);
    }

    #[test]
    fn missing_minutes_mean_zero() {
        assert_eq!(time_to_hours("10"), 10.0);
    }

    #[test]
    fn out_of_range_minutes_carry() {
        assert_eq!(time_to_hours("9:60"), 10.0);
        assert_eq!(time_to_hours("9:90"), 10.5);
    }

    #[test]
    fn fields_past_the_minute_are_ignored() {
        assert_eq!(time_to_hours("10:30:00"), 10.5);
        assert_eq!(time_to_hours("10:30:59"), 10.5);
    }

    #[test]
    fn durations() {
        assert_eq!(duration_hours("10:00", "11:30"), 1.5);
        assert_eq!(duration_hours("10:00", "10:00"), 0.0);
        assert_eq!(duration_hours("11:00", "10:00"), -1.0);
    }

    #[test]
    fn duration_matches_parsed_endpoints() {
        // The merger compares these with exact equality, so the
        // identity must hold bit for bit.
        let d = duration_hours("09:05", "10:35");
        assert_eq!(time_to_hours("09:05") + d, time_to_hours("10:35"));
    }

    #[test]
    fn well_formed_accepts_clock_times() {
        assert!(is_well_formed_time("10:30"));
        assert!(is_well_formed_time("0:00"));
        assert!(is_well_formed_time("23:59"));
        assert!(is_well_formed_time(" 9 : 05 "));
    }

    #[test]
    fn well_formed_rejects_fallback_cases() {
        assert!(!is_well_formed_time("10"));
        assert!(!is_well_formed_time("9:60"));
        assert!(!is_well_formed_time("24:00"));
        assert!(!is_well_formed_time("abc:30"));
        assert!(!is_well_formed_time("10:30:00"));
        assert!(!is_well_formed_time(""));
    }

    #[test]
    fn weekday_names_normalize() {
        assert_eq!(normalize_day("Monday"), Day::Mon);
        assert_eq!(normalize_day("monday"), Day::Mon);
        assert_eq!(normalize_day("MON"), Day::Mon);
        assert_eq!(normalize_day("tuesday"), Day::Tue);
        assert_eq!(normalize_day("Thursday"), Day::Thu);
        assert_eq!(normalize_day("sun"), Day::Sun);
    }

    #[test]
    fn unknown_names_keep_a_stable_token() {
        assert_eq!(normalize_day("Funday"), Day::Other("FUN".into()));
        assert_eq!(normalize_day("funday"), Day::Other("FUN".into()));
        assert_eq!(normalize_day("xy"), Day::Other("XY".into()));
    }

    #[test]
    fn surrounding_space_is_trimmed() {
        assert_eq!(normalize_day("  friday  "), Day::Fri);
    }
}
