use chrono::Duration;

/// Formats an uptime duration as `1d 2h 3m 4s`.
///
/// Leading zero units are omitted, so a fresh process reads `42s` rather than
/// `0d 0h 0m 42s`. Negative durations (clock adjustments) format as `0s`.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.num_seconds().max(0);
    let (days, hours, minutes, seconds) = (
        total / 86_400,
        total % 86_400 / 3_600,
        total % 3_600 / 60,
        total % 60,
    );

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_only() {
        assert_eq!(format_uptime(Duration::seconds(42)), "42s");
    }

    #[test]
    fn keeps_inner_zero_units() {
        assert_eq!(format_uptime(Duration::seconds(3_600 + 5)), "1h 0m 5s");
    }

    #[test]
    fn formats_days() {
        let uptime = Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
        assert_eq!(format_uptime(uptime), "2d 3h 4m 5s");
    }

    #[test]
    fn clamps_negative_durations() {
        assert_eq!(format_uptime(Duration::seconds(-10)), "0s");
    }
}
