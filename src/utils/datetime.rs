//! Due-date helpers: phrase parsing and day-granular humanized
//! formatting (e.g. "today", "tomorrow", "in 12 days").

use chrono::{DateTime, Datelike, Duration, Local, Utc, Weekday};

/// A due phrase that matched none of the accepted forms.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid due phrase: {0:?}")]
pub struct DueParseError(pub String);

/// Parses a free-form due phrase into a timestamp.
///
/// An empty phrase and `today` resolve to now; `tom` and `tomorrow`
/// resolve to now plus a day. Anything else fails.
pub fn parse_due_phrase(s: &str) -> Result<DateTime<Utc>, DueParseError> {
    // TODO: accept offsets like +2d and weekday phrases
    match s.trim() {
        "" | "today" => Ok(Utc::now()),
        "tom" | "tomorrow" => Ok(Utc::now() + Duration::hours(24)),
        other => Err(DueParseError(other.to_string())),
    }
}

/// Renders a timestamp as a day-granular phrase relative to the local
/// date: "yesterday"/"today"/"tomorrow", weekday names within a week,
/// day counts within a month, the plain date beyond that.
#[must_use]
pub fn format_relative(ts: DateTime<Utc>) -> String {
    let local = ts.with_timezone(&Local);
    let today = Local::now().date_naive();
    let days = (local.date_naive() - today).num_days();

    match days {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        2..=7 => format!("next {}", weekday_name(local.weekday())),
        -7..=-2 => format!("last {}", weekday_name(local.weekday())),
        8..=30 => format!("in {days} days"),
        -30..=-8 => format!("{} days ago", -days),
        _ => {
            if local.year() == today.year() {
                local.format("%b %d").to_string()
            } else {
                local.format("%b %d, %Y").to_string()
            }
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
