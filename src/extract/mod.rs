mod error;
mod literal;

use regex::Regex;

use crate::source::Line;
pub use error::Error;


/// Lines that look like a fragment directive. Anything else that starts with `#C`, like
/// `#Comment`, is an ordinary comment.
const DIRECTIVE_START: &str = r"^[ \t]*#C(?:$|[\s:])";

/// A well formed directive: indentation, optional annotation and a non empty payload.
const DIRECTIVE: &str = r"^([ \t]*)#C(?::(\d+))?[ \t]+(\S.*?)\s*$";

/// The line that starts the trailing data section of a script.
const END_MARKER: &str = "__END__";


/// A native fragment extracted from the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	/// The line of the first directive in the run.
	pub line: Line,
	/// The numeric annotation, 0 for ordinary directives.
	pub priority: u32,
	/// The payloads of the run, one per line.
	pub text: String,
}


/// The script with every directive run replaced by a marker call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
	pub text: String,
	pub fragments: Vec<Fragment>,
}


/// A parsed directive line.
#[derive(Debug)]
struct Directive<'a> {
	indent: &'a str,
	priority: u32,
	payload: &'a str,
}


/// A sequence of consecutive directive lines with the same priority.
#[derive(Debug)]
struct Run<'a> {
	line: Line,
	indent: &'a str,
	priority: u32,
	payloads: Vec<&'a str>,
	/// The line terminator of the last line in the run.
	terminator: &'a str,
}


impl<'a> Run<'a> {
	/// Write the marker call for the run. The call spans as many lines as the run did, so
	/// that host line numbers stay valid after the call.
	fn flush(self, marker: &str, output: &mut Preprocessed) {
		let out = &mut output.text;

		out.push_str(self.indent);
		out.push_str(marker);
		out.push('(');

		for (ix, payload) in self.payloads.iter().enumerate() {
			if ix == 0 {
				literal::quote(payload, out);
			} else {
				out.push_str("\\\n");
				literal::quote(&format!("\n{}", payload), out);
			}
		}

		out.push_str(&format!(", {})", self.priority));
		out.push_str(self.terminator);

		output.fragments.push(
			Fragment {
				line: self.line,
				priority: self.priority,
				text: self.payloads.join("\n"),
			}
		);
	}
}


/// Scanner for directive lines.
#[derive(Debug)]
struct Scanner {
	start: Regex,
	directive: Regex,
}


impl Scanner {
	fn new() -> Self {
		Self {
			start: Regex::new(DIRECTIVE_START).expect("invalid directive regex"),
			directive: Regex::new(DIRECTIVE).expect("invalid directive regex"),
		}
	}


	/// Parse a line without its terminator.
	/// Returns None for ordinary lines, and an error for malformed directives.
	fn scan<'a>(&self, line: Line, content: &'a str) -> Result<Option<Directive<'a>>, Error> {
		if !self.start.is_match(content) {
			return Ok(None);
		}

		let captures = self.directive
			.captures(content)
			.ok_or_else(|| Error::malformed(line, content))?;

		let priority = match captures.get(2) {
			None => 0,
			Some(annotation) => annotation
				.as_str()
				.parse()
				.map_err(|_| Error::malformed(line, content))?,
		};

		match (captures.get(1), captures.get(3)) {
			(Some(indent), Some(payload)) => Ok(
				Some(
					Directive {
						indent: indent.as_str(),
						priority,
						payload: payload.as_str(),
					}
				)
			),

			_ => Err(Error::malformed(line, content)),
		}
	}
}


/// Split a line into its content and its terminator.
fn split_terminator(line: &str) -> (&str, &str) {
	if let Some(content) = line.strip_suffix("\r\n") {
		(content, "\r\n")
	} else if let Some(content) = line.strip_suffix('\n') {
		(content, "\n")
	} else {
		(line, "")
	}
}


/// Drop the data section, starting at the first `__END__` line.
fn strip_data_section(source: &str) -> &str {
	let mut offset = 0;

	for line in source.split_inclusive('\n') {
		let (content, _) = split_terminator(line);

		if content == END_MARKER {
			return &source[.. offset];
		}

		offset += line.len();
	}

	source
}


/// Replace every run of directive lines by a single call to the marker intrinsic.
/// The marker receives the payloads as a string literal, and the run priority.
pub fn preprocess(source: &str, marker: &str) -> Result<Preprocessed, Error> {
	let scanner = Scanner::new();
	let source = strip_data_section(source);

	let mut output = Preprocessed {
		text: String::with_capacity(source.len()),
		fragments: Vec::new(),
	};
	let mut run: Option<Run> = None;

	for (ix, line) in source.split_inclusive('\n').enumerate() {
		let line_number = Line(ix as u32 + 1);
		let (content, terminator) = split_terminator(line);

		match scanner.scan(line_number, content)? {
			Some(directive) => match run.as_mut() {
				Some(current) if current.priority == directive.priority => {
					current.payloads.push(directive.payload);
					current.terminator = terminator;
				}

				_ => {
					if let Some(previous) = run.take() {
						previous.flush(marker, &mut output);
					}

					run = Some(
						Run {
							line: line_number,
							indent: directive.indent,
							priority: directive.priority,
							payloads: vec![directive.payload],
							terminator,
						}
					);
				}
			},

			None => {
				if let Some(previous) = run.take() {
					previous.flush(marker, &mut output);
				}

				output.text.push_str(line);
			}
		}
	}

	if let Some(previous) = run.take() {
		previous.flush(marker, &mut output);
	}

	Ok(output)
}
