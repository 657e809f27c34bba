//! `M:SS` duration text parsing and rendering

/// Keep only the characters accepted by the duration field (digits and `:`)
pub fn filter_duration_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':')
        .collect()
}

/// Parse `M:SS` or `SS` into total seconds.
///
/// Splits on the first colon. Any segment that does not parse counts as 0,
/// so this never fails.
pub fn parse_duration(text: &str) -> u64 {
    let text = filter_duration_input(text);

    match text.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes = parse_segment(minutes);
            let seconds = parse_segment(seconds);
            minutes.saturating_mul(60).saturating_add(seconds)
        }
        None => parse_segment(&text),
    }
}

fn parse_segment(segment: &str) -> u64 {
    segment.parse().unwrap_or(0)
}

/// Render total seconds as `M:SS`
pub fn render_duration(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(parse_duration("3:05"), 185);
        assert_eq!(parse_duration("10:00"), 600);
        assert_eq!(parse_duration("0:45"), 45);
    }

    #[test]
    fn parses_bare_seconds() {
        assert_eq!(parse_duration("45"), 45);
        assert_eq!(parse_duration("90"), 90);
    }

    #[test]
    fn unparsable_segments_default_to_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration(":30"), 30);
        assert_eq!(parse_duration("2:"), 120);
        // Everything after the first colon is one segment
        assert_eq!(parse_duration("1:2:3"), 60);
    }

    #[test]
    fn filters_non_digit_characters() {
        assert_eq!(filter_duration_input("3m:05s"), "3:05");
        assert_eq!(filter_duration_input(" 1 2 "), "12");
        assert_eq!(parse_duration("-5"), 5);
        assert_eq!(parse_duration("abc"), 0);
    }

    #[test]
    fn renders_zero_padded_seconds() {
        assert_eq!(render_duration(185), "3:05");
        assert_eq!(render_duration(45), "0:45");
        assert_eq!(render_duration(0), "0:00");
        assert_eq!(render_duration(3600), "60:00");
    }

    #[test]
    fn render_then_parse_is_stable() {
        for text in ["3:05", "0:45", "5:00", "12:59"] {
            assert_eq!(render_duration(parse_duration(text)), text);
        }
        assert_eq!(render_duration(parse_duration("45")), "0:45");
        assert_eq!(render_duration(parse_duration("0:75")), "1:15");
    }
}
