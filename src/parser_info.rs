//! Configuration tables for an external generic calendar-date parser, so that
//! it understands mixed Dutch/English absolute dates ("woensdag 3 januari",
//! "January 3rd"). This crate never parses calendar dates itself.

use chrono::NaiveDateTime;

/// Vocabulary handed to a [`CalendarParser`]: filler words to skip, weekday and
/// month aliases in both languages, and the names of the hour/minute/second
/// units.
pub struct BilingualParserConfig {
	/// Tokens the parser may skip over without meaning.
	pub jump: &'static [&'static str],
	/// Alias groups for the seven weekdays, Monday first.
	pub weekdays: [&'static [&'static str]; 7],
	/// Alias groups for the twelve months, January first.
	pub months: [&'static [&'static str]; 12],
	/// Alias groups for the hour, minute and second units, in that order.
	pub hms: [&'static [&'static str]; 3],
	/// Words that tie a day to a month, as in "3rd of January".
	pub pertain: &'static [&'static str],
}

/// The external collaborator seam: a generic calendar-date parser that accepts
/// the bilingual configuration. Implementations live outside this crate.
pub trait CalendarParser {
	/// Parse an absolute calendar date out of the text, or fail.
	fn parse_date(&self, text: &str, config: &BilingualParserConfig) -> Option<NaiveDateTime>;
}

/// The Dutch/English configuration, built once for the process.
pub fn bilingual_parser_config() -> &'static BilingualParserConfig {
	&BILINGUAL
}

static BILINGUAL: BilingualParserConfig = BilingualParserConfig {
	jump: &[
		" ", ".", ",", ";", "-", "/", "'", "at", "on", "and", "ad", "m", "t", "of", "st", "nd",
		"rd", "th", "op", "en", "de", "ste", "van",
	],
	weekdays: [
		&["Mon", "Monday", "Ma", "Maa", "Maandag"],
		&["Tue", "Tuesday", "Di", "Din", "Dinsdag"],
		&["Wed", "Wednesday", "Wo", "Woe", "Woensdag"],
		&["Thu", "Thursday", "Do", "Don", "Donderdag"],
		&["Fri", "Friday", "Vr", "Vri", "Vrijdag"],
		&["Sat", "Saturday", "Za", "Zat", "Zaterdag"],
		&["Sun", "Sunday", "Zo", "Zon", "Zondag"],
	],
	months: [
		&["Jan", "January", "Januari"],
		&["Feb", "February", "Februari"],
		&["Mar", "March", "Maart"],
		&["Apr", "April"],
		&["May", "May", "Mei"],
		&["Jun", "June", "Juni"],
		&["Jul", "July", "Juli"],
		&["Aug", "August", "Augustus"],
		&["Sep", "Sept", "September"],
		&["Oct", "October", "Oktober"],
		&["Nov", "November"],
		&["Dec", "December"],
	],
	hms: [
		&["h", "hour", "hours", "uur", "uren", "u"],
		&["m", "minute", "minutes", "minuut", "minuten", "min", "mins"],
		&["s", "second", "seconds", "sec", "seconden", "secondes", "secs"],
	],
	pertain: &["of"],
};
