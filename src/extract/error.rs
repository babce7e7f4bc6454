use std::fmt::{self, Display};

use crate::source::Line;


/// A directive line that does not follow the `#C[:<n>] <payload>` grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub line: Line,
	/// The offending line, without its line terminator.
	pub text: Box<str>,
}


impl Error {
	pub fn malformed(line: Line, text: &str) -> Self {
		Self { line, text: text.into() }
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - malformed fragment directive: {:?}", self.line, self.text)
	}
}


impl std::error::Error for Error {}
