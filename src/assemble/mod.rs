mod fmt;
#[cfg(test)]
mod tests;

use crate::{host::HostProtocol, symbol, synth::NativeFunction};


/// The default prelude: frame mirrors, accessor macros and the frame walking routine.
pub const PRELUDE: &str = include_str!("prelude.h");

/// Bytes of embedded script per row of the byte-array literal.
pub const BYTES_PER_ROW: usize = 10;


/// The generated native source of a module.
/// Formatting is deterministic: the same parts always produce the same text.
#[derive(Debug)]
pub struct Artifact<'a> {
	/// The module name, which names the init routine and the registry key.
	pub module: &'a str,
	/// The script name, as reported to the host compiler at load time.
	pub source_name: &'a str,
	pub prelude: &'a str,
	pub protocol: &'a HostProtocol,
	/// Host declaration snippets, emitted after the prelude.
	pub declarations: &'a [String],
	/// Host initialization snippets, each run in its own block.
	pub initializers: &'a [String],
	pub identifiers: &'a symbol::Interner,
	/// Functions in discovery order.
	pub functions: &'a [NativeFunction],
	/// One function name per recorded occurrence, in recording order.
	pub dispatch: Vec<&'a str>,
	/// The preprocessed script, compiled again by the init routine.
	pub script: &'a str,
}


impl<'a> Artifact<'a> {
	/// The name of the init routine the host looks up when loading the module.
	pub fn init_name(&self) -> String {
		format!("Init_{}", self.module)
	}
}
