mod error;

use std::collections::HashMap;

use crate::{
	host::{BlockVar, FragmentId, LocalVar, Occurrence},
	source::Line,
	symbol,
	translate::Translator,
};
pub use error::Error;


/// One visit of a fragment, with its text already translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
	pub line: Line,
	pub body: String,
	/// The bytecode offset where the interpreter resumes, if the segment is re-entrant.
	pub resume: Option<u32>,
}


/// A group of occurrences compiled into a single native function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
	/// The generated function name.
	pub name: Box<str>,
	pub fragment: FragmentId,
	pub locals: Vec<LocalVar>,
	pub blocks: Vec<BlockVar>,
	/// Segments in recording order. Tags are unique among them.
	pub segments: Vec<Segment>,
}


impl Unit {
	/// Whether the function must dispatch on the saved position. This depends only on
	/// the presence of tags, never on the number of recorded segments.
	pub fn is_resumable(&self) -> bool {
		self.segments
			.iter()
			.any(|segment| segment.resume.is_some())
	}


	fn open(name: String, occurrence: Occurrence, body: String) -> Self {
		Self {
			name: name.into(),
			fragment: occurrence.fragment,
			locals: occurrence.locals,
			blocks: occurrence.blocks,
			segments: vec![
				Segment {
					line: occurrence.line,
					body,
					resume: occurrence.resume,
				}
			],
		}
	}


	/// Add another visit of the same fragment.
	fn join(&mut self, occurrence: Occurrence, body: String) -> Result<(), Error> {
		if self.locals != occurrence.locals || self.blocks != occurrence.blocks {
			return Err(Error::frame_mismatch(&self.name, occurrence.line));
		}

		let existing = self.segments
			.iter()
			.find(|segment| segment.resume.is_some() && segment.resume == occurrence.resume);

		match existing {
			// The same position recorded twice.
			Some(segment) if segment.body == body => Ok(()),

			Some(segment) => Err(
				Error::conflicting_tag(
					&self.name,
					occurrence.resume.unwrap_or_default(),
					segment.line,
					occurrence.line,
				)
			),

			None => {
				self.segments.push(
					Segment {
						line: occurrence.line,
						body,
						resume: occurrence.resume,
					}
				);

				Ok(())
			}
		}
	}
}


/// The grouped occurrences of a recording.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correlation {
	/// Units in discovery order.
	pub units: Vec<Unit>,
	/// For each recorded occurrence, in recording order, the index of its unit. The host
	/// binds marker calls to native functions by this position.
	pub dispatch: Vec<usize>,
}


impl Correlation {
	/// The dispatch table as function names.
	pub fn dispatch_names(&self) -> impl Iterator<Item = &str> {
		self.dispatch
			.iter()
			.map(move |&ix| &*self.units[ix].name)
	}
}


/// Group recorded occurrences into synthesis units.
/// Tagged occurrences sharing a fragment and an enclosing unit are visits of the same
/// re-entrant fragment, and become one unit. Untagged occurrences are units of their own.
/// Function names are assigned sequentially, in discovery order.
pub fn correlate<I>(
	occurrences: I,
	translator: &Translator,
	identifiers: &mut symbol::Interner,
) -> Result<Correlation, Error>
where
	I: IntoIterator<Item = Occurrence>,
{
	let mut correlation = Correlation::default();
	let mut keys: HashMap<(FragmentId, u64), usize> = HashMap::new();

	for occurrence in occurrences {
		let body = translator
			.translate(&occurrence.text, identifiers)
			.map_err(|error| Error::translation(occurrence.line, error))?;

		let key = (occurrence.fragment, occurrence.unit);
		let tagged = occurrence.resume.is_some();

		let ix = match keys.get(&key) {
			Some(&ix) if tagged => {
				correlation.units[ix].join(occurrence, body)?;
				ix
			}

			_ => {
				let ix = correlation.units.len();
				let name = format!("splice_func_{}", ix + 1);

				correlation.units.push(Unit::open(name, occurrence, body));

				if tagged {
					keys.insert(key, ix);
				}

				ix
			}
		};

		correlation.dispatch.push(ix);
	}

	Ok(correlation)
}
