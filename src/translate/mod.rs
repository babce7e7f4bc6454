mod cursor;
mod error;
mod spans;
#[cfg(test)]
mod tests;

use regex::{Captures, Regex};

use crate::symbol::{self, Symbol};
pub use error::Error;
pub use spans::{Span, Spans};


/// A sigil followed by an identifier: `$name` for globals, `@name` for fields.
const REFERENCE: &str = r"([$@])(\w+)\b";

/// The reserved word that makes a fragment fetch the current receiver.
const RECEIVER: &str = r"\bself\b";


/// Rewrites sigil references in native fragments into accessor macros.
#[derive(Debug)]
pub struct Translator {
	reference: Regex,
	receiver: Regex,
}


impl Translator {
	pub fn new() -> Self {
		Self {
			reference: Regex::new(REFERENCE).expect("invalid reference regex"),
			receiver: Regex::new(RECEIVER).expect("invalid receiver regex"),
		}
	}


	/// Translate a fragment. Globals become dynamic lookups by name, and fields become
	/// lookups through a storage slot whose id is taken from the identifier table.
	/// Literals and comments are copied untouched.
	pub fn translate(&self, text: &str, identifiers: &mut symbol::Interner) -> Result<String, Error> {
		let mut output = String::with_capacity(text.len());

		for span in Spans::from(text) {
			match span {
				Span::Code(code) => self.translate_code(code, identifiers, &mut output)?,
				other => output.push_str(other.as_str()),
			}
		}

		Ok(output)
	}


	/// Whether translated text uses the current receiver.
	pub fn uses_receiver(&self, text: &str) -> bool {
		Spans::from(text).any(
			|span| matches!(span, Span::Code(code) if self.receiver.is_match(code))
		)
	}


	fn translate_code(
		&self,
		code: &str,
		identifiers: &mut symbol::Interner,
		output: &mut String,
	) -> Result<(), Error> {
		let mut last = 0;

		for captures in self.reference.captures_iter(code) {
			let (whole, sigil, name) = match Self::reference_parts(&captures) {
				Some(parts) => parts,
				None => continue,
			};

			output.push_str(&code[last .. whole.start()]);

			if sigil == "$" {
				output.push_str(&format!("SPLICE_GVAR({})", name));
			} else {
				let symbol = Self::bind(name, identifiers)?;
				output.push_str(&format!("SPLICE_IVAR({})", symbol.id()));
			}

			last = whole.end();
		}

		output.push_str(&code[last ..]);

		Ok(())
	}


	fn reference_parts<'t>(captures: &Captures<'t>) -> Option<(regex::Match<'t>, &'t str, &'t str)> {
		let whole = captures.get(0)?;
		let sigil = captures.get(1)?;
		let name = captures.get(2)?;

		Some((whole, sigil.as_str(), name.as_str()))
	}


	/// Bind a field name to its id. The first occurrence of a name decides its id.
	fn bind(name: &str, identifiers: &mut symbol::Interner) -> Result<Symbol, Error> {
		let known = identifiers.get(name);
		let symbol = identifiers.get_or_intern(name)?;

		match known {
			Some(known) if known != symbol => Err(
				Error::identifier_mismatch(name, known.id(), symbol.id())
			),

			_ => Ok(symbol),
		}
	}
}


impl Default for Translator {
	fn default() -> Self {
		Self::new()
	}
}
