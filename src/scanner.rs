use regex::Regex;

/// A cheaply cloneable cursor over the input text. Cloning before a
/// speculative parse and discarding the clone on failure is the backtracking
/// mechanism.
#[derive(Clone)]
pub(crate) struct Scanner<'l> {
	rest: &'l str,
}

impl<'l> Scanner<'l> {
	pub(crate) fn from_str(text: &'l str) -> Self {
		Self { rest: text }
	}
	/// Consume a match of an anchored (`^`) regex at the cursor.
	pub(crate) fn parse_regex(&mut self, regex: &Regex) -> bool {
		if let Some(found) = regex.find(self.rest) {
			self.rest = &self.rest[found.end()..];
			true
		} else {
			false
		}
	}
	/// Consume a run of ASCII digits, returning it unparsed.
	///
	/// Conversion to a number is deferred until a unit word has committed, so
	/// an oversized number with no unit after it is a non-match rather than an
	/// overflow error.
	pub(crate) fn parse_digits(&mut self) -> Option<&'l str> {
		let end = self
			.rest
			.bytes()
			.take_while(u8::is_ascii_digit)
			.count();
		if end == 0 {
			return None;
		}
		let digits = &self.rest[..end];
		self.rest = &self.rest[end..];
		Some(digits)
	}
	pub(crate) fn skip_whitespace(&mut self) {
		self.rest = self.rest.trim_start();
	}
	/// Step over one character, for restarting a scan at the next position.
	/// Returns false at the end of the input.
	pub(crate) fn advance_char(&mut self) -> bool {
		let mut chars = self.rest.chars();
		if chars.next().is_some() {
			self.rest = chars.as_str();
			true
		} else {
			false
		}
	}
}
