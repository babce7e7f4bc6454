use std::fmt::{self, Display};

use crate::{source::Line, translate};


/// A recording that cannot be grouped into synthesis units.
#[derive(Debug)]
pub enum Error {
	/// A fragment could not be translated.
	Translation {
		line: Line,
		error: translate::Error,
	},
	/// Two visits of the same fragment see different frame layouts. The resumed function
	/// would address the wrong slots.
	FrameMismatch {
		function: Box<str>,
		line: Line,
	},
	/// Two different segments claim the same resume position.
	ConflictingTag {
		function: Box<str>,
		tag: u32,
		first: Line,
		second: Line,
	},
}


impl Error {
	pub fn translation(line: Line, error: translate::Error) -> Self {
		Self::Translation { line, error }
	}


	pub fn frame_mismatch(function: &str, line: Line) -> Self {
		Self::FrameMismatch { function: function.into(), line }
	}


	pub fn conflicting_tag(function: &str, tag: u32, first: Line, second: Line) -> Self {
		Self::ConflictingTag { function: function.into(), tag, first, second }
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Translation { line, error } => write!(f, "{} - {}", line, error),

			Self::FrameMismatch { function, line } => write!(
				f,
				"{} - fragment re-entered with a different frame layout ({})",
				line,
				function
			),

			Self::ConflictingTag { function, tag, first, second } => write!(
				f,
				"{} - resume position {} already used by {} ({})",
				second,
				tag,
				first,
				function
			),
		}
	}
}


impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Translation { error, .. } => Some(error),
			_ => None,
		}
	}
}
