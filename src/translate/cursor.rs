/// A cursor for fragment text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a str,
	offset: usize,
}


impl<'a> Cursor<'a> {
	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	pub fn peek(&self) -> Option<u8> {
		self.peek_at(0)
	}


	/// Peek at the given distance from the current offset.
	pub fn peek_at(&self, distance: usize) -> Option<u8> {
		self.input
			.as_bytes()
			.get(self.offset + distance)
			.copied()
	}


	/// Whether the cursor is at the start of a block or line comment.
	pub fn at_comment(&self) -> bool {
		self.peek() == Some(b'/') && matches!(self.peek_at(1), Some(b'*') | Some(b'/'))
	}


	/// Whether the cursor is at an opening quote.
	pub fn at_quote(&self) -> bool {
		matches!(self.peek(), Some(b'"') | Some(b'\''))
	}


	/// The input from the given offset up to the cursor.
	/// Offsets handed out by the cursor are always at character boundaries, because the
	/// cursor only stops after ASCII delimiters or at the end of the input.
	pub fn since(&self, start: usize) -> &'a str {
		&self.input[start .. self.offset]
	}


	pub fn step(&mut self) {
		if !self.is_eof() {
			self.offset += 1;
		}
	}
}


impl<'a> From<&'a str> for Cursor<'a> {
	fn from(input: &'a str) -> Self {
		Self { input, offset: 0 }
	}
}
