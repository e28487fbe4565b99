use chrono::NaiveTime;

/// Stamp for a new entry: the clock as `HH:MM:SS`, or the user's text verbatim.
pub fn resolve_timestamp(use_current_time: bool, manual_text: &str, now: NaiveTime) -> String {
    if use_current_time {
        now.format("%H:%M:%S").to_string()
    } else {
        manual_text.to_string()
    }
}
