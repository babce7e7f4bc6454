pub mod util;

use crate::{
	extract::Fragment,
	host::{self, FragmentId, HostCompiler, LocalVar, Occurrence, Recording},
	source::{Line, Script},
};


/// An occurrence in a frame with a single local `a` at slot 3.
pub fn occurrence(fragment: u64, unit: u64, line: u32, text: &str, resume: Option<u32>) -> Occurrence {
	Occurrence {
		locals: vec![LocalVar { name: "a".into(), slot: 3 }],
		blocks: Vec::new(),
		line: Line(line),
		text: text.into(),
		fragment: FragmentId::Site(fragment),
		unit,
		resume,
	}
}


/// A host compiler that replays extracted fragments instead of compiling.
/// Each fragment is recorded once, in the top level unit. Annotated fragments are
/// replayed as visits of a single re-entrant site, tagged with their annotation.
#[derive(Debug, Default)]
pub struct ReplayHost {
	pub recording: Recording,
	/// The scripts received, in order.
	pub received: Vec<Script>,
}


impl ReplayHost {
	pub fn new(fragments: &[Fragment]) -> Self {
		let occurrences = fragments
			.iter()
			.enumerate()
			.map(
				|(ix, fragment)| {
					let (site, resume) = match fragment.priority {
						0 => (ix as u64 + 1, None),
						tag => (0, Some(tag)),
					};

					occurrence(site, 1, fragment.line.0, &fragment.text, resume)
				}
			)
			.collect();

		Self {
			recording: Recording { occurrences, ..Recording::default() },
			received: Vec::new(),
		}
	}
}


impl HostCompiler for ReplayHost {
	fn record(&mut self, script: &Script) -> Result<Recording, host::Error> {
		self.received.push(script.clone());
		Ok(self.recording.clone())
	}
}
