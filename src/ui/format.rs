/// Render milliseconds as `H:MM:SS.t` (tenths truncated) or `H:MM:SS`.
/// Hours are not wrapped.
pub fn format_time(ms: u64, show_tenths: bool) -> String {
    let tenths = (ms % 1000) / 100;
    let secs = (ms / 1000) % 60;
    let mins = (ms / 60_000) % 60;
    let hours = ms / 3_600_000;
    if show_tenths {
        format!("{}:{:02}:{:02}.{}", hours, mins, secs, tenths)
    } else {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0, true), "0:00:00.0");
        assert_eq!(format_time(999, true), "0:00:00.9");
        assert_eq!(format_time(61_250, true), "0:01:01.2");
        assert_eq!(format_time(3_599_999, true), "0:59:59.9");
        assert_eq!(format_time(3_600_000, false), "1:00:00");
        assert_eq!(format_time(100 * 3_600_000 + 5_000, false), "100:00:05");
    }
}
