use crate::{correlate::Segment, source::Line};


/// A resume point of a re-entrant fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
	/// The interpreter position that selects this case.
	pub label: u32,
	pub line: Line,
	pub body: String,
}


/// The state machine of a re-entrant fragment.
/// The state is the interpreter's saved position, which lives in the interpreter frame.
/// Each call dispatches on it, runs the selected case, stores the position of the next
/// case and returns to the interpreter, which calls the function again later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumePlan {
	cases: Vec<Case>,
}


impl ResumePlan {
	/// Build the plan from the tagged segments of a unit, in recording order.
	pub fn new(segments: &[Segment]) -> Self {
		let cases = segments
			.iter()
			.filter_map(
				|segment| segment.resume.map(
					|label| Case {
						label,
						line: segment.line,
						body: segment.body.clone(),
					}
				)
			)
			.collect();

		Self { cases }
	}


	pub fn cases(&self) -> &[Case] {
		&self.cases
	}


	pub fn labels(&self) -> impl Iterator<Item = u32> + '_ {
		self.cases.iter().map(|case| case.label)
	}


	/// The position stored after running the case for `label`: the next case in
	/// recording order, wrapping around. None if the label is unknown.
	pub fn advance(&self, label: u32) -> Option<u32> {
		let ix = self.cases
			.iter()
			.position(|case| case.label == label)?;

		let next = &self.cases[(ix + 1) % self.cases.len()];

		Some(next.label)
	}
}
