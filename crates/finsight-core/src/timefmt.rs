//! Relative-time formatting for video publish dates.

use chrono::{DateTime, Utc};

const CASCADE: &[(i64, &str)] = &[
    (31_536_000, "year"),
    (2_592_000, "month"),
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
];

/// "2 days ago"-style formatting with a fixed threshold cascade.
/// Sub-minute and future timestamps render as "Just now".
pub fn time_ago(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published).num_seconds();

    for (threshold, unit) in CASCADE {
        let interval = seconds / threshold;
        if interval >= 1 {
            let plural = if interval > 1 { "s" } else { "" };
            return format!("{interval} {unit}{plural} ago");
        }
    }

    "Just now".to_string()
}
