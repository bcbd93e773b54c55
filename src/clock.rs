//! Finding a clock time like "at 14:30" or "om 9" and anchoring it to the
//! caller's "now": today if the time is still upcoming, otherwise tomorrow.

use chrono::{DateTime, Duration, TimeZone, Timelike};
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use crate::errors::ExtractError;
use crate::vocabulary;

/// Permissive pattern: optional marker word, 1-2 digit hour, optional 2-digit
/// minute and second. The colons are themselves optional, so "1430" reads as
/// 14:30. The digit groups are `[0-9]` rather than `\d`: other scripts' digits
/// would match `\d` but not survive the numeric conversion.
static LOOSE_CLOCK: Lazy<Regex> = Lazy::new(|| {
	let markers = vocabulary::length_sorted_alternation(vocabulary::CLOCK_MARKERS);
	RegexBuilder::new(&format!(
		r"(?:(?:{markers})\s?)?(?P<hour>[0-9]{{1,2}})(?::?(?:(?P<minute>[0-9]{{2}})(?::?(?P<second>[0-9]{{2}}))?)?)"
	))
	.case_insensitive(true)
	.build()
	.unwrap()
});

/// Conservative pattern: the hour must be followed by either ":" + minute or an
/// hour word ("uur", "h", ...), so a bare number is not mistaken for a time.
/// Candidates followed by "-" or "/" are rejected separately in
/// [`search_strict`], to skip date fragments like "12-05" or "3/4".
static STRICT_CLOCK: Lazy<Regex> = Lazy::new(|| {
	let markers = vocabulary::length_sorted_alternation(vocabulary::CLOCK_MARKERS);
	let hour_words = vocabulary::length_sorted_alternation(vocabulary::HOUR_WORDS);
	RegexBuilder::new(&format!(
		r"(?:(?:{markers})\s?)?(?P<hour>[0-9]{{1,2}})(?::?(?P<minute>[0-9]{{2}})|\s?(?:{hour_words}))"
	))
	.case_insensitive(true)
	.build()
	.unwrap()
});

/// The raw fields of one matched clock time. Only syntax is checked here: the
/// patterns allow any two-digit hour/minute/second, and range checking happens
/// when the fields are put onto a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedClockTime {
	pub hour: u32,
	pub minute: u32,
	pub second: u32,
}

/// Finds the first clock time in the text with the loose pattern and returns
/// its raw fields. Minute and second default to 0 when absent.
pub fn find_first_clock(text: &str) -> Result<ParsedClockTime, ExtractError> {
	LOOSE_CLOCK
		.captures(text)
		.map(|captures| clock_from_captures(&captures))
		.ok_or(ExtractError::TimeNotFound)
}

/// Like [`find_first_clock`], but with the strict pattern.
pub fn find_first_clock_strict(text: &str) -> Result<ParsedClockTime, ExtractError> {
	search_strict(text)
		.map(|captures| clock_from_captures(&captures))
		.ok_or(ExtractError::TimeNotFound)
}

/// Finds the first clock time in the text and returns the next moment that
/// clock reads that time, relative to `now`: on `now`'s date if the time has
/// not passed yet, otherwise one day later. Sub-second precision is zeroed and
/// the result stays in `now`'s timezone.
///
/// Fields the pattern allows but the calendar does not (like hour 37) are
/// rejected with [`ExtractError::InvalidClockValue`].
pub fn find_first_time<Tz: TimeZone>(
	text: &str,
	now: DateTime<Tz>,
) -> Result<DateTime<Tz>, ExtractError> {
	next_occurrence(now, find_first_clock(text)?)
}

/// Like [`find_first_time`], but with the strict pattern, for callers that
/// would rather miss a terse time than misread a date fragment.
pub fn find_first_time_strict<Tz: TimeZone>(
	text: &str,
	now: DateTime<Tz>,
) -> Result<DateTime<Tz>, ExtractError> {
	next_occurrence(now, find_first_clock_strict(text)?)
}

/// The strict search. The regex crate has no lookahead, so the trailing
/// "not followed by - or /" check happens here: a rejected candidate restarts
/// the search one byte past its start, which also covers overlapping matches
/// inside the rejected span. A rejection never retries a shorter candidate at
/// the same start, so "3 uur-x" finds nothing rather than reading "3 u" out of
/// it; anything glued to a date-like tail is skipped whole.
fn search_strict(text: &str) -> Option<Captures<'_>> {
	let mut start = 0;
	while let Some(found) = STRICT_CLOCK.find_at(text, start) {
		if !date_fragment_follows(text, found.end()) {
			return STRICT_CLOCK.captures_at(text, found.start());
		}
		start = found.start() + 1;
	}
	None
}

fn date_fragment_follows(text: &str, end: usize) -> bool {
	matches!(text[end..].chars().next(), Some('-' | '/'))
}

fn clock_from_captures(captures: &Captures) -> ParsedClockTime {
	ParsedClockTime {
		hour: field(captures, "hour"),
		minute: field(captures, "minute"),
		second: field(captures, "second"),
	}
}

/// Reads a named group as a number, 0 when the group did not participate. The
/// groups capture at most two ASCII digits, so the conversion itself cannot
/// fail.
fn field(captures: &Captures, name: &str) -> u32 {
	captures
		.name(name)
		.and_then(|found| found.as_str().parse().ok())
		.unwrap_or(0)
}

fn next_occurrence<Tz: TimeZone>(
	now: DateTime<Tz>,
	clock: ParsedClockTime,
) -> Result<DateTime<Tz>, ExtractError> {
	let candidate = now
		.with_hour(clock.hour)
		.and_then(|time| time.with_minute(clock.minute))
		.and_then(|time| time.with_second(clock.second))
		.and_then(|time| time.with_nanosecond(0))
		.ok_or(ExtractError::InvalidClockValue(
			clock.hour,
			clock.minute,
			clock.second,
		))?;
	if candidate < now {
		candidate
			.checked_add_signed(Duration::days(1))
			.ok_or(ExtractError::DateOutOfRange)
	} else {
		Ok(candidate)
	}
}
