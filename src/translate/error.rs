use std::fmt::{self, Display};

use intaglio::SymbolOverflowError;


/// An identifier table failure while translating a fragment.
#[derive(Debug)]
pub enum Error {
	/// The identifier table ran out of ids.
	Overflow(SymbolOverflowError),
	/// A field name resolved to two different ids.
	IdentifierMismatch {
		name: Box<str>,
		first: u32,
		second: u32,
	},
}


impl Error {
	pub fn identifier_mismatch(name: &str, first: u32, second: u32) -> Self {
		Self::IdentifierMismatch { name: name.into(), first, second }
	}
}


impl From<SymbolOverflowError> for Error {
	fn from(error: SymbolOverflowError) -> Self {
		Self::Overflow(error)
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Overflow(error) => write!(f, "identifier table overflow: {}", error),

			Self::IdentifierMismatch { name, first, second } => write!(
				f,
				"field '@{}' resolved to both id {} and id {}",
				name,
				first,
				second
			),
		}
	}
}


impl std::error::Error for Error {}
