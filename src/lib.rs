//! Find durations and clock times written in mixed Dutch and English free
//! text.
//!
//! [`find_duration`] locates the first relative duration in a text, written as
//! any subset of years, weeks, days, hours, minutes and seconds in that order,
//! with either language's unit words ("2 days 3 hours", "1 jaar, 2 weken en
//! 3 dagen", "5m"). Years normalize to 365 days and weeks to 7.
//!
//! ```
//! use chrono::Duration;
//! use datumvinder::find_duration;
//!
//! let duration = find_duration("remind me in 2 days 3 hours").unwrap();
//! assert_eq!(duration, Duration::days(2) + Duration::hours(3));
//! ```
//!
//! [`find_first_time`] locates the first clock time ("at 14:30", "om 9",
//! "1430") and anchors it to a caller-supplied "now": today if that time is
//! still upcoming, otherwise tomorrow. The caller passes "now" explicitly, so
//! results are deterministic and keep the caller's timezone.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use datumvinder::find_first_time;
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
//! let time = find_first_time("ik kom om 23 uur", now).unwrap();
//! assert_eq!(time, Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap());
//! ```
//!
//! The stricter [`find_first_time_strict`] refuses hour-only matches unless an
//! hour word follows, and skips date fragments like "12-05".
//!
//! For absolute calendar dates this crate only supplies vocabulary:
//! [`bilingual_parser_config`] returns the skip-word, weekday, month and unit
//! tables a generic external date parser (the [`CalendarParser`] seam) needs
//! to read both languages.

mod clock;
mod duration;
mod errors;
mod parser_info;
mod scanner;
pub mod vocabulary;

pub use clock::{
	find_first_clock, find_first_clock_strict, find_first_time, find_first_time_strict,
	ParsedClockTime,
};
pub use duration::{find_duration, find_parsed_duration, ParsedDuration};
pub use errors::ExtractError;
pub use parser_info::{bilingual_parser_config, BilingualParserConfig, CalendarParser};

#[cfg(test)]
mod tests {
	use chrono::{TimeZone, Timelike, Utc};

	use super::*;

	/// Rendering an extracted duration back to text and extracting again lands
	/// on the same value.
	#[test]
	fn duration_extraction_round_trips_through_text() {
		let duration = find_duration("1 jaar 2 weken").unwrap();
		let rendered = format!(
			"{} days {} hours {} minutes {} seconds",
			duration.num_days(),
			duration.num_hours() % 24,
			duration.num_minutes() % 60,
			duration.num_seconds() % 60,
		);
		assert_eq!(find_duration(&rendered), Ok(duration));
	}

	#[test]
	fn time_extraction_round_trips_through_text() {
		let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
		let time = find_first_time("at 14:30", now).unwrap();
		let rendered = format!("om {}", time.format("%H:%M:%S"));
		assert_eq!(find_first_time(&rendered, now), Ok(time));
	}

	#[test]
	fn loose_and_strict_report_the_same_fields() {
		let loose = find_first_clock("at 12:30").unwrap();
		let strict = find_first_clock_strict("at 12:30").unwrap();
		assert_eq!(loose, strict);
	}

	#[test]
	fn extractors_are_independent() {
		// The same message yields a duration to one extractor and a clock
		// time to the other; callers pick one.
		let text = "5 min";
		assert_eq!(
			find_duration(text),
			Ok(chrono::Duration::minutes(5))
		);
		let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
		assert_eq!(find_first_time(text, now).unwrap().hour(), 5);
	}
}
