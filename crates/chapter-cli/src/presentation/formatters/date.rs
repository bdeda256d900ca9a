use chrono::NaiveDate;

/// "January 15, 2024"
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jan 15, 2024"
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Day distance from `reference` as a label ("Today", "In 3 days", "2 weeks ago").
///
/// Beyond 30 days either way the short date is shown instead.
pub fn format_relative_date(date: NaiveDate, reference: NaiveDate) -> String {
    let days = (date - reference).num_days();

    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        2..=7 => format!("In {} days", days),
        -7..=-2 => format!("{} days ago", -days),
        8..=30 => format!("In {} weeks", weeks_rounded_up(days)),
        -30..=-8 => format!("{} weeks ago", weeks_rounded_up(-days)),
        _ => format_date_short(date),
    }
}

fn weeks_rounded_up(days: i64) -> i64 {
    (days + 6) / 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_long_and_short_formats() {
        assert_eq!(format_date_long(day("2024-01-15")), "January 15, 2024");
        assert_eq!(format_date_short(day("2024-01-15")), "Jan 15, 2024");
        assert_eq!(format_date_short(day("2024-03-05")), "Mar 5, 2024");
    }

    #[test]
    fn test_relative_near_days() {
        let reference = day("2025-03-15");
        assert_eq!(format_relative_date(day("2025-03-15"), reference), "Today");
        assert_eq!(format_relative_date(day("2025-03-16"), reference), "Tomorrow");
        assert_eq!(format_relative_date(day("2025-03-14"), reference), "Yesterday");
        assert_eq!(format_relative_date(day("2025-03-22"), reference), "In 7 days");
        assert_eq!(format_relative_date(day("2025-03-12"), reference), "3 days ago");
    }

    #[test]
    fn test_relative_weeks_round_up() {
        let reference = day("2025-03-15");
        assert_eq!(format_relative_date(day("2025-03-23"), reference), "In 2 weeks");
        assert_eq!(format_relative_date(day("2025-04-14"), reference), "In 5 weeks");
        assert_eq!(format_relative_date(day("2025-03-05"), reference), "2 weeks ago");
    }

    #[test]
    fn test_relative_falls_back_to_short_date() {
        let reference = day("2025-03-15");
        assert_eq!(format_relative_date(day("2025-04-15"), reference), "Apr 15, 2025");
        assert_eq!(format_relative_date(day("2024-03-15"), reference), "Mar 15, 2024");
    }
}
