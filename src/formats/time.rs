use crate::{error::TimeError, model::Time};

/// Parses `HH:MM:SS[,fraction]` (or `.` before the fraction). The fraction is
/// discarded. Minutes and seconds are taken as written, even past 59.
pub fn parse_timestamp(s: &str) -> Result<Time, TimeError> {
    let t = s.trim();

    let hms = match t.split_once([',', '.']) {
        Some((whole, _fraction)) => whole,
        None => t,
    };

    let parts: Vec<&str> = hms.split(':').collect();
    if parts.len() != 3 {
        return Err(TimeError::Unrecognized(t.to_string()));
    }

    let hours = parse_component(parts[0], "hours", t)?;
    let minutes = parse_component(parts[1], "minutes", t)?;
    let seconds = parse_component(parts[2], "seconds", t)?;

    Ok(Time::from_hms(hours, minutes, seconds))
}

fn parse_component(part: &str, field: &'static str, input: &str) -> Result<u32, TimeError> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeError::BadComponent {
            field,
            input: input.to_string(),
        });
    }
    part.parse().map_err(|_| TimeError::BadComponent {
        field,
        input: input.to_string(),
    })
}

/// Parses a `<start> --> <end>` line.
pub fn parse_time_range_arrow(line: &str) -> Result<(Time, Time), TimeError> {
    let (a, b) = line
        .split_once("-->")
        .ok_or_else(|| TimeError::MissingArrow(line.to_string()))?;
    let start = parse_timestamp(a)?;
    let end = parse_timestamp(b)?;
    Ok((start, end))
}

/// Formats components as `HH:MM:SS`, each padded to two digits.
pub fn format_hms(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_truncated_not_rounded() {
        let t = parse_timestamp("00:00:03,999").unwrap();
        assert_eq!(t.to_string(), "00:00:03");

        let t = parse_timestamp("01:02:03.500").unwrap();
        assert_eq!(t.total_seconds(), 3723);
    }

    #[test]
    fn accepts_timestamp_without_fraction() {
        let t = parse_timestamp(" 10:59:01 ").unwrap();
        assert_eq!(t.to_string(), "10:59:01");
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(matches!(
            parse_timestamp("00:01"),
            Err(TimeError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_timestamp("aa:00:01,000"),
            Err(TimeError::BadComponent { field: "hours", .. })
        ));
        assert!(parse_timestamp("-1:00:00").is_err());
    }

    #[test]
    fn keeps_components_past_fifty_nine() {
        let t = parse_timestamp("00:00:60,000").unwrap();
        assert_eq!(t.to_string(), "00:00:60");

        let t = parse_timestamp("00:75:99").unwrap();
        assert_eq!(t.to_string(), "00:75:99");
    }

    #[test]
    fn single_digit_hours_are_padded() {
        let t = parse_timestamp("0:00:01,000").unwrap();
        assert_eq!(t.to_string(), "00:00:01");
    }

    #[test]
    fn parses_arrow_range() {
        let (start, end) = parse_time_range_arrow("00:00:01,000 --> 00:00:03,250").unwrap();
        assert_eq!(start.to_string(), "00:00:01");
        assert_eq!(end.to_string(), "00:00:03");
    }

    #[test]
    fn range_without_arrow_is_an_error() {
        assert_eq!(
            parse_time_range_arrow("00:00:01,000 00:00:03,000"),
            Err(TimeError::MissingArrow("00:00:01,000 00:00:03,000".to_string()))
        );
    }

    #[test]
    fn formats_long_hours() {
        assert_eq!(format_hms(0, 0, 0), "00:00:00");
        assert_eq!(format_hms(100, 1, 1), "100:01:01");
    }
}
