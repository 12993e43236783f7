use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// `HH : MM : SS`, each field zero-padded to two digits. Hours are not capped,
/// so very long totals simply widen the first field.
pub fn format_time(seconds: u64) -> String {
    format!(
        "{:02} : {:02} : {:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Wall-clock time of day, e.g. `14:03:27`.
pub fn format_clock(dt: OffsetDateTime) -> String {
    dt.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| "--:--:--".to_string())
}

pub fn now_local(offset: UtcOffset) -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_time(3661), "01 : 01 : 01");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_time(0), "00 : 00 : 00");
    }

    #[test]
    fn minutes_and_seconds_wrap() {
        assert_eq!(format_time(3599), "00 : 59 : 59");
        assert_eq!(format_time(86_399), "23 : 59 : 59");
    }

    #[test]
    fn hours_are_not_capped() {
        assert_eq!(format_time(359_999), "99 : 59 : 59");
        assert_eq!(format_time(360_000), "100 : 00 : 00");
    }

    #[test]
    fn clock_uses_24_hour_time() {
        assert_eq!(format_clock(datetime!(2024-03-01 21:05:09 UTC)), "21:05:09");
    }
}
