use std::{
	collections::HashMap,
	fmt::{self, Display},
};

use crate::host::{BlockVar, LocalVar};


/// Where a variable lives, relative to the interpreter frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSlot {
	/// A slot below the frame's local variable base.
	Local { slot: u32 },
	/// A slot below the block pointer reached after walking `level` parent links.
	Block { level: u32, slot: u32 },
}


/// The accessor expression for the slot. The address arithmetic is done by the
/// prelude, in `splice_dvar_ptr` and `SPLICE_LVAR`.
impl Display for FrameSlot {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Local { slot } => write!(f, "SPLICE_LVAR({})", slot),
			Self::Block { level, slot } => write!(f, "SPLICE_DVAR({}, {})", level, slot),
		}
	}
}


/// A script variable made visible to native code under its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
	pub name: Box<str>,
	pub slot: FrameSlot,
}


impl Binding {
	/// The indirect macro, which stays usable when the bare name is shadowed.
	pub fn indirect_name(&self) -> String {
		format!("SPLICE_VAR__{}", self.name)
	}
}


/// Whether a variable name can be used as a macro name.
/// Symbolic and internal names are left to the host's own resolution.
pub fn is_macro_name(name: &str) -> bool {
	let mut chars = name.chars();

	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => chars.all(
			|c| c.is_ascii_alphanumeric() || c == '_'
		),

		_ => false,
	}
}


/// Compute the bindings visible to a fragment.
/// Block variables come first, outer to inner, followed by locals. When a name is bound
/// more than once, only the innermost binding is kept, so no macro is ever redefined.
pub fn bindings(locals: &[LocalVar], blocks: &[BlockVar]) -> Vec<Binding> {
	let mut outer_first: Vec<&BlockVar> = blocks.iter().collect();
	// Stable, so the host order is kept within a level.
	outer_first.sort_by(|a, b| b.level.cmp(&a.level));

	let candidates: Vec<Binding> = outer_first
		.into_iter()
		.map(
			|var| Binding {
				name: var.name.clone(),
				slot: FrameSlot::Block { level: var.level, slot: var.slot },
			}
		)
		.chain(
			locals
				.iter()
				.map(
					|var| Binding {
						name: var.name.clone(),
						slot: FrameSlot::Local { slot: var.slot },
					}
				)
		)
		.filter(|binding| is_macro_name(&binding.name))
		.collect();

	let mut innermost: HashMap<&str, usize> = HashMap::new();
	for (ix, binding) in candidates.iter().enumerate() {
		innermost.insert(&binding.name, ix);
	}

	candidates
		.iter()
		.enumerate()
		.filter(|(ix, binding)| innermost.get(&*binding.name) == Some(ix))
		.map(|(_, binding)| binding.clone())
		.collect()
}
