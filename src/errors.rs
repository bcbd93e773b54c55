/// An error extracting a duration or clock time from text.
///
/// Note that `NumberOutOfRange` only appears when a digit run is actually attached to a recognized unit word. A huge number with no unit word after it simply does not match, like any other unitless number.
///
/// This is marked non-exhaustive to allow narrowing down error types in the future without that breaking the API so much.
#[non_exhaustive]
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ExtractError {
	#[error("Could not find a duration anywhere in the text")]
	DurationNotFound,
	#[error("Could not find a clock time anywhere in the text")]
	TimeNotFound,
	#[error("Clock time {0:02}:{1:02}:{2:02} does not exist on the given date")]
	InvalidClockValue(u32, u32, u32),
	#[error("Some operation overflowed or some number conversion failed")]
	NumberOutOfRange,
	#[error("Rolling the clock time over to the next day put the date out of range")]
	DateOutOfRange,
}
