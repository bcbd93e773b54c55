//! Finding a relative duration written in mixed Dutch/English units, like
//! "2 days 3 hours" or "1 jaar, 2 weken en 3 dagen".

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::errors::ExtractError;
use crate::scanner::Scanner;
use crate::vocabulary;

/// Anchored matchers for the unit words, largest unit first, compiled once.
static UNIT_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
	vocabulary::UNIT_WORDS
		.iter()
		.map(|words| vocabulary::compile_unit_words(words))
		.collect()
});

/// Matches any run of separator tokens, including the empty run.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
	RegexBuilder::new(&format!(
		"^(?:{})*",
		vocabulary::SEPARATOR_PATTERNS.join("|")
	))
	.case_insensitive(true)
	.build()
	.unwrap()
});

/// The unit counts read from one duration phrase. Units that were absent from
/// the text are 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedDuration {
	pub years: i64,
	pub weeks: i64,
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
}

impl ParsedDuration {
	/// Folds the counts into a [`Duration`], normalizing years to 365 days and
	/// weeks to 7 days.
	pub fn normalized(&self) -> Result<Duration, ExtractError> {
		let days = self
			.years
			.checked_mul(365)
			.and_then(|days| self.weeks.checked_mul(7)?.checked_add(days))
			.and_then(|days| days.checked_add(self.days))
			.ok_or(ExtractError::NumberOutOfRange)?;
		let seconds = days
			.checked_mul(24)
			.and_then(|hours| hours.checked_add(self.hours))
			.and_then(|hours| hours.checked_mul(60))
			.and_then(|minutes| minutes.checked_add(self.minutes))
			.and_then(|minutes| minutes.checked_mul(60))
			.and_then(|seconds| seconds.checked_add(self.seconds))
			.ok_or(ExtractError::NumberOutOfRange)?;
		Duration::try_seconds(seconds).ok_or(ExtractError::NumberOutOfRange)
	}
}

/// Finds the first readable duration in the text.
///
/// Unit groups may appear in any subset, but only in descending unit order
/// (years, weeks, days, hours, minutes, seconds); anything after an
/// out-of-order unit is left unmatched. A number with no recognized unit word
/// after it never matches.
pub fn find_duration(text: &str) -> Result<Duration, ExtractError> {
	find_parsed_duration(text).and_then(|parsed| parsed.normalized())
}

/// Like [`find_duration`], but exposes the per-unit counts before they are
/// normalized into a single value.
pub fn find_parsed_duration(text: &str) -> Result<ParsedDuration, ExtractError> {
	let mut scanner = Scanner::from_str(text);
	loop {
		if let Some(parsed) = match_units(&scanner)? {
			return Ok(parsed);
		}
		if !scanner.advance_char() {
			return Err(ExtractError::DurationNotFound);
		}
	}
}

/// Attempts the six unit groups, in order, at the scanner's position. Each
/// group is `<digits> <whitespace>* <unit word> <separators>*`; a group that
/// does not match is skipped and the next unit is tried at the same spot.
fn match_units(scanner: &Scanner) -> Result<Option<ParsedDuration>, ExtractError> {
	let mut cursor = scanner.clone();
	let mut counts = [0_i64; 6];
	let mut matched_any = false;
	for (count, matcher) in counts.iter_mut().zip(UNIT_MATCHERS.iter()) {
		let mut attempt = cursor.clone();
		let Some(digits) = attempt.parse_digits() else {
			continue;
		};
		attempt.skip_whitespace();
		if !attempt.parse_regex(matcher) {
			continue;
		}
		attempt.parse_regex(&SEPARATORS);
		*count = digits
			.parse()
			.map_err(|_| ExtractError::NumberOutOfRange)?;
		matched_any = true;
		cursor = attempt;
	}
	if !matched_any {
		return Ok(None);
	}
	let [years, weeks, days, hours, minutes, seconds] = counts;
	Ok(Some(ParsedDuration {
		years,
		weeks,
		days,
		hours,
		minutes,
		seconds,
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn english_days_and_hours() {
		assert_eq!(
			find_duration("2 days 3 hours"),
			Ok(Duration::days(2) + Duration::hours(3))
		);
	}

	#[test]
	fn dutch_years_and_weeks_normalize_to_days() {
		assert_eq!(find_duration("1 jaar 2 weken"), Ok(Duration::days(379)));
	}

	#[test]
	fn bare_abbreviation_without_space() {
		assert_eq!(find_duration("5m"), Ok(Duration::minutes(5)));
	}

	#[test]
	fn longer_unit_words_win_over_their_prefixes() {
		assert_eq!(
			find_parsed_duration("3 min"),
			Ok(ParsedDuration {
				minutes: 3,
				..ParsedDuration::default()
			})
		);
	}

	#[test]
	fn mixed_separators_and_languages() {
		assert_eq!(
			find_parsed_duration("1 week, 2 dagen en 5 uur"),
			Ok(ParsedDuration {
				weeks: 1,
				days: 2,
				hours: 5,
				..ParsedDuration::default()
			})
		);
	}

	#[test]
	fn duration_embedded_in_a_sentence() {
		assert_eq!(
			find_duration("stuur me over 10 minuten een bericht"),
			Ok(Duration::minutes(10))
		);
	}

	#[test]
	fn units_after_an_out_of_order_unit_are_ignored() {
		assert_eq!(
			find_parsed_duration("3 hours 2 days"),
			Ok(ParsedDuration {
				hours: 3,
				..ParsedDuration::default()
			})
		);
	}

	#[test]
	fn number_without_unit_word_does_not_match() {
		assert_eq!(
			find_duration("I have 4 apples"),
			Err(ExtractError::DurationNotFound)
		);
	}

	#[test]
	fn text_without_digits_does_not_match() {
		assert_eq!(
			find_duration("no duration here"),
			Err(ExtractError::DurationNotFound)
		);
	}

	#[test]
	fn empty_text_does_not_match() {
		assert_eq!(find_duration(""), Err(ExtractError::DurationNotFound));
	}

	#[test]
	fn uppercase_units_match() {
		assert_eq!(find_duration("2 DAYS"), Ok(Duration::days(2)));
	}

	#[test]
	fn oversized_number_with_unit_overflows() {
		assert_eq!(
			find_duration("99999999999999999999 days"),
			Err(ExtractError::NumberOutOfRange)
		);
	}

	#[test]
	fn oversized_number_without_unit_is_just_absent() {
		assert_eq!(
			find_duration("99999999999999999999 apples"),
			Err(ExtractError::DurationNotFound)
		);
	}

	#[test]
	fn normalization_overflow_is_reported() {
		let parsed = ParsedDuration {
			years: i64::MAX / 400,
			..ParsedDuration::default()
		};
		assert_eq!(parsed.normalized(), Err(ExtractError::NumberOutOfRange));
	}

	#[test]
	fn all_six_units_in_order() {
		assert_eq!(
			find_parsed_duration("1y 2w 3d 4h 5m 6s"),
			Ok(ParsedDuration {
				years: 1,
				weeks: 2,
				days: 3,
				hours: 4,
				minutes: 5,
				seconds: 6,
			})
		);
	}
}
