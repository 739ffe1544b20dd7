use time::Duration;
use time::OffsetDateTime;
use time::UtcOffset;

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SECOND;

pub trait TimeExt {
    /// Render as `YYYY-MM-DD HH:MM:SS[.ffffff]+00:00`.
    fn to_utc_string(&self) -> String;
}

impl TimeExt for OffsetDateTime {
    /// Render the instant in UTC, the way it appears in reports.
    ///
    /// Microseconds are only printed when non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pod_ready_ext::TimeExt as _;
    /// use time::macros::datetime;
    ///
    /// let ready = datetime!(2024-01-01 0:00:05 UTC);
    /// assert_eq!(ready.to_utc_string(), "2024-01-01 00:00:05+00:00");
    /// ```
    fn to_utc_string(&self) -> String {
        let utc = self.to_offset(UtcOffset::UTC);
        let mut text = format!(
            "{} {:02}:{:02}:{:02}",
            utc.date(),
            utc.hour(),
            utc.minute(),
            utc.second()
        );
        let micros = utc.microsecond();
        if micros != 0 {
            text.push_str(&format!(".{micros:06}"));
        }
        text.push_str("+00:00");
        text
    }
}

pub trait DurationExt {
    /// Render as `[D day[s], ]H:MM:SS[.ffffff]`.
    fn to_clock_string(&self) -> String;
}

impl DurationExt for Duration {
    /// Negative durations borrow whole days, so minus four seconds is
    /// `-1 day, 23:59:56`.
    fn to_clock_string(&self) -> String {
        let total = self.whole_microseconds();
        let days = total.div_euclid(MICROS_PER_DAY);
        let rest = total.rem_euclid(MICROS_PER_DAY);

        let micros = rest % MICROS_PER_SECOND;
        let seconds = rest / MICROS_PER_SECOND;
        let (hours, minutes, seconds) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);

        let days = match days {
            0 => String::new(),
            1 | -1 => format!("{days} day, "),
            _ => format!("{days} days, "),
        };
        let fraction = match micros {
            0 => String::new(),
            _ => format!(".{micros:06}"),
        };
        format!("{days}{hours}:{minutes:02}:{seconds:02}{fraction}")
    }
}
