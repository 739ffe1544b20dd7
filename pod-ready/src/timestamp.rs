use time::Date;
use time::Duration;
use time::OffsetDateTime;
use time::PrimitiveDateTime;
use time::macros::format_description;

#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("invalid timestamp {value:?}: {source}")]
    Parse {
        value: String,
        source: time::error::Parse,
    },
    #[error("invalid fractional seconds in timestamp {value:?}")]
    Fraction { value: String },
}

/// Parse a condition `lastTransitionTime` as a UTC instant.
///
/// Trailing `Z` markers are stripped and the remainder is read as a naive
/// date-time (`T` or space separated, optional fractional seconds, or a
/// bare date meaning midnight). A numeric offset, if any, is dropped and
/// the wall-clock time is taken as UTC. Sub-microsecond digits are
/// truncated.
pub fn parse_transition_time(text: &str) -> Result<OffsetDateTime, TimestampError> {
    let value = strip_offset(text.trim_end_matches('Z'));
    let (wall, fraction) = match value.split_once('.') {
        Some((wall, fraction)) => (wall, Some(fraction)),
        None => (value, None),
    };

    let parse_error = |source| TimestampError::Parse {
        value: text.to_string(),
        source,
    };

    let datetime = if wall.len() == 10 && fraction.is_none() {
        Date::parse(wall, format_description!("[year]-[month]-[day]"))
            .map(Date::midnight)
            .map_err(parse_error)?
    } else {
        PrimitiveDateTime::parse(
            wall,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
        .or_else(|_| {
            PrimitiveDateTime::parse(
                wall,
                format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
            )
        })
        .map_err(parse_error)?
    };

    let micros = match fraction {
        Some(digits) => fraction_micros(digits).ok_or_else(|| TimestampError::Fraction {
            value: text.to_string(),
        })?,
        None => 0,
    };

    Ok((datetime + Duration::microseconds(micros)).assume_utc())
}

// The date part itself contains '-', so only look past it.
fn strip_offset(value: &str) -> &str {
    value
        .get(10..)
        .and_then(|time| time.find(['+', '-']))
        .map_or(value, |at| &value[..10 + at])
}

fn fraction_micros(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(6)
        .try_fold(0_i64, |acc, digit| {
            acc.checked_mul(10)?
                .checked_add(i64::from(digit - b'0'))
        })
}
