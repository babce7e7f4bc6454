/// A Display-like trait that takes an additional context when formatting.
/// This gives access to the identifier table or the script name when emitting native
/// source.
pub trait Display<'a> {
	/// The format context.
	type Context: 'a;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result;
}


impl<'a, T> Display<'a> for &T
where
	T: Display<'a>,
{
	type Context = T::Context;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		(*self).fmt(f, context)
	}
}


/// An adapter to use std::fmt::Display with the contextual Display.
#[derive(Debug)]
pub struct Show<T, C>(pub T, pub C);


impl<'a, T, C> std::fmt::Display for Show<T, C>
where
	T: Display<'a, Context = C>,
	C: Copy,
{
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		self.0.fmt(f, self.1)
	}
}


/// A ToString-like trait that takes an additional context when formatting.
#[cfg(test)]
pub trait FmtString<'a> {
	/// The format context.
	type Context: 'a;

	fn fmt_string(&self, context: Self::Context) -> String;
}


#[cfg(test)]
impl<'a, T> FmtString<'a> for T
where
	T: Display<'a>,
	T::Context: Copy,
{
	type Context = T::Context;

	fn fmt_string(&self, context: Self::Context) -> String {
		use std::fmt::Write;

		let mut string = String::new();
		write!(string, "{}", Show(self, context))
			.expect("a Display implementation returned an error unexpectedly");
		string
	}
}


/// An indentation level of emitted native source, one tab per level.
#[derive(Debug, Default, Copy, Clone)]
pub struct Indentation(pub u8);


impl std::fmt::Display for Indentation {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		use std::fmt::Write;

		for _ in 0 .. self.0 {
			f.write_char('\t')?;
		}

		Ok(())
	}
}


/// Text quoted as a C string literal.
#[derive(Debug, Clone, Copy)]
pub struct CLiteral<'a>(pub &'a str);


impl<'a> std::fmt::Display for CLiteral<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		use std::fmt::Write;

		f.write_char('"')?;

		for byte in self.0.bytes() {
			match byte {
				b'"' => f.write_str("\\\"")?,
				b'\\' => f.write_str("\\\\")?,
				b'\n' => f.write_str("\\n")?,
				b'\t' => f.write_str("\\t")?,
				// Octal escapes never absorb the following characters, unlike hex ones.
				b if b < 0x20 || b >= 0x7f => write!(f, "\\{:03o}", b)?,
				b => f.write_char(b as char)?,
			}
		}

		f.write_char('"')
	}
}


/// Format a sequence of items with a separator.
pub fn sep_by<T, I, F, S>(
	mut iter: I,
	f: &mut std::fmt::Formatter,
	mut format: F,
	separator: S,
) -> std::fmt::Result
where
	I: Iterator<Item = T>,
	F: FnMut(T, &mut std::fmt::Formatter) -> std::fmt::Result,
	S: std::fmt::Display,
{
	if let Some(item) = iter.next() {
		format(item, f)?;
	}

	for item in iter {
		separator.fmt(f)?;
		format(item, f)?;
	}

	Ok(())
}
