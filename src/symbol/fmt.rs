use std::fmt::Display as _;

use super::{Interner, Symbol};
use crate::fmt::Display;


/// The name of the static storage slot backing a symbol.
impl<'a> Display<'a> for Symbol {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match context.resolve(*self) {
			Some(name) => write!(f, "splice_id_{} /* @{} */", self.id(), name),
			None => "<invalid symbol>".fmt(f),
		}
	}
}
