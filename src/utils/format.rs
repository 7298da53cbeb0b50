use chrono::{Datelike, NaiveDate, NaiveDateTime};
use unicode_width::UnicodeWidthStr;

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// "Today at 14:03", "Yesterday at 09:12", or a short date for older stamps.
pub fn format_relative(dt: NaiveDateTime, today: NaiveDate) -> String {
    let day = dt.date();
    if day == today {
        format!("Today at {}", dt.format("%H:%M"))
    } else if Some(day) == today.pred_opt() {
        format!("Yesterday at {}", dt.format("%H:%M"))
    } else if day.year() == today.year() {
        dt.format("%b %-d").to_string()
    } else {
        dt.format("%b %-d, %Y").to_string()
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn bar_handles_empty_total() {
        assert_eq!(progress_bar(0, 0, 4), "░░░░");
        assert_eq!(progress_bar(2, 4, 4), "██░░");
        assert_eq!(progress_bar(9, 4, 4), "████");
    }

    #[test]
    fn relative_dates() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let noon = today.and_hms_opt(12, 5, 0).unwrap();
        assert_eq!(format_relative(noon, today), "Today at 12:05");
        let yesterday = (today - Duration::days(1)).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(format_relative(yesterday, today), "Yesterday at 09:00");
        let old = NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_relative(old, today), "Mar 5, 2025");
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate("Two Sum", 10), "Two Sum");
        assert_eq!(truncate("Longest Substring", 8), "Longest…");
    }
}
