use super::cursor::Cursor;


/// A span of native fragment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
	/// A string or character literal, including its quotes.
	Quoted(&'a str),
	/// A block or line comment, including its delimiters.
	Comment(&'a str),
	/// Everything else.
	Code(&'a str),
}


impl<'a> Span<'a> {
	pub fn as_str(&self) -> &'a str {
		match self {
			Self::Quoted(text) | Self::Comment(text) | Self::Code(text) => text,
		}
	}
}


/// Split native text into quoted, comment and code spans.
/// Unterminated literals and comments extend to the end of the text.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
	cursor: Cursor<'a>,
}


impl<'a> Spans<'a> {
	fn quoted(&mut self, quote: u8) {
		self.cursor.step();

		loop {
			match self.cursor.peek() {
				None => break,

				Some(b'\\') => {
					self.cursor.step();
					self.cursor.step();
				}

				Some(c) if c == quote => {
					self.cursor.step();
					break;
				}

				Some(_) => self.cursor.step(),
			}
		}
	}


	fn comment(&mut self) {
		self.cursor.step();

		if self.cursor.peek() == Some(b'/') {
			// Line comment, up to the newline.
			while !matches!(self.cursor.peek(), None | Some(b'\n')) {
				self.cursor.step();
			}
		} else {
			// Block comment.
			self.cursor.step();

			loop {
				match (self.cursor.peek(), self.cursor.peek_at(1)) {
					(None, _) => break,

					(Some(b'*'), Some(b'/')) => {
						self.cursor.step();
						self.cursor.step();
						break;
					}

					_ => self.cursor.step(),
				}
			}
		}
	}


	fn code(&mut self) {
		loop {
			self.cursor.step();

			if self.cursor.is_eof() || self.cursor.at_quote() || self.cursor.at_comment() {
				break;
			}
		}
	}
}


impl<'a> Iterator for Spans<'a> {
	type Item = Span<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let start = self.cursor.offset();

		match self.cursor.peek()? {
			quote @ b'"' | quote @ b'\'' => {
				self.quoted(quote);
				Some(Span::Quoted(self.cursor.since(start)))
			}

			_ if self.cursor.at_comment() => {
				self.comment();
				Some(Span::Comment(self.cursor.since(start)))
			}

			_ => {
				self.code();
				Some(Span::Code(self.cursor.since(start)))
			}
		}
	}
}


impl<'a> From<&'a str> for Spans<'a> {
	fn from(input: &'a str) -> Self {
		Self { cursor: Cursor::from(input) }
	}
}
