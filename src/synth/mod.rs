pub mod fmt;
mod frame;
mod plan;

use crate::{
	correlate::{Segment, Unit},
	translate::Translator,
};
pub use frame::{bindings, Binding};
pub use plan::{Case, ResumePlan};


/// The calling convention of a generated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
	/// Called by the interpreter in place of the marker call.
	Insn,
	/// Called as the body of a native block.
	BlockCall,
}


impl Signature {
	/// The parameter names of the generated function. No variable macro takes one of these.
	pub fn parameters(self) -> &'static [&'static str] {
		match self {
			Self::Insn => &[fmt::FRAME],
			Self::BlockCall => &["arg", "tval", "argc", "argv", "blockarg", fmt::FRAME],
		}
	}
}


/// The body of a generated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
	/// Runs its single segment and returns.
	Simple(Segment),
	/// Dispatches on the saved interpreter position.
	Resumable(ResumePlan),
}


/// A native function synthesized from a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFunction {
	pub name: Box<str>,
	pub signature: Signature,
	/// Variable macros, defined before the function and undefined after it.
	pub bindings: Vec<Binding>,
	/// Whether the body uses the current receiver.
	pub receiver: bool,
	pub body: Body,
}


impl NativeFunction {
	pub fn is_resumable(&self) -> bool {
		matches!(self.body, Body::Resumable(_))
	}
}


/// Synthesize the native function for a unit.
/// Panics if the unit has no segments, which never happens for correlated units.
pub fn synthesize(unit: &Unit, translator: &Translator) -> NativeFunction {
	let signature =
		if unit.fragment.is_block() {
			Signature::BlockCall
		} else {
			Signature::Insn
		};

	let receiver = unit.segments
		.iter()
		.any(|segment| translator.uses_receiver(&segment.body));

	let body =
		if unit.is_resumable() {
			Body::Resumable(ResumePlan::new(&unit.segments))
		} else {
			Body::Simple(
				unit.segments
					.first()
					.cloned()
					.expect("unit without segments")
			)
		};

	NativeFunction {
		name: unit.name.clone(),
		signature,
		bindings: bindings(&unit.locals, &unit.blocks)
			.into_iter()
			.filter(|binding| !signature.parameters().contains(&&*binding.name))
			.collect(),
		receiver,
		body,
	}
}
