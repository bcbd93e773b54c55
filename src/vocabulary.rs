//! Word tables for the units, separators and marker words the extractors
//! recognize, in Dutch and English.

use std::cmp::Reverse;

use regex::{Regex, RegexBuilder};

pub const YEAR_WORDS: &[&str] = &["y", "j", "jaar", "jaren", "years", "year"];
pub const WEEK_WORDS: &[&str] = &["w", "weeks", "week", "weken"];
pub const DAY_WORDS: &[&str] = &["d", "dag", "dagen", "day", "days"];
pub const HOUR_WORDS: &[&str] = &["h", "hr", "hrs", "hours", "hour", "u", "uur", "uren"];
pub const MINUTE_WORDS: &[&str] = &["m", "min", "mins", "minute", "minutes", "minuten", "minuut"];
pub const SECOND_WORDS: &[&str] = &["s", "sec", "secs", "second", "seconds", "seconden"];

/// The six unit word sets in the only order the duration extractor accepts
/// them: years, weeks, days, hours, minutes, seconds.
pub(crate) const UNIT_WORDS: [&[&str]; 6] = [
	YEAR_WORDS,
	WEEK_WORDS,
	DAY_WORDS,
	HOUR_WORDS,
	MINUTE_WORDS,
	SECOND_WORDS,
];

/// Tokens that may sit between one unit group and the next. These are regex
/// fragments, not plain words.
pub const SEPARATOR_PATTERNS: &[&str] = &[r"\s", ",", "en", "and", "&"];

/// Words that introduce a relative duration ("in 5 minuten", "over 2 dagen").
/// Not consumed by the extractors, but useful for callers deciding whether a
/// message asks for a relative or an absolute time.
pub const DURATION_MARKERS: &[&str] = &["in", "over", "na"];

/// Words that may precede a clock time ("om 9", "at 14:30").
pub const CLOCK_MARKERS: &[&str] = &["om", "at"];

/// Joins words into a regex alternation, longest word first.
///
/// Alternation picks the first branch that matches, so without the sort a
/// short word like "m" would pre-empt "min" and leave "in" dangling.
pub(crate) fn length_sorted_alternation(words: &[&str]) -> String {
	let mut sorted = words.to_vec();
	sorted.sort_by_key(|word| Reverse(word.len()));
	sorted.join("|")
}

/// Compiles an anchored, case-insensitive matcher for one unit's words.
pub(crate) fn compile_unit_words(words: &[&str]) -> Regex {
	RegexBuilder::new(&format!("^(?:{})", length_sorted_alternation(words)))
		.case_insensitive(true)
		.build()
		.unwrap()
}
