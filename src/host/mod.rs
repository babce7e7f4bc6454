mod error;
mod ruby;

use serde::Deserialize;

use crate::source::{Line, Script};
pub use error::Error;
pub use ruby::RubyHost;
#[cfg(test)]
pub use ruby::INTERPRETER_VAR;


/// The mode option value that makes the host compiler record fragment occurrences.
pub const RECORDING_MODE: u32 = 1;

/// The mode option value that makes the host compiler bind marker calls to native
/// functions.
pub const EXECUTION_MODE: u32 = 2;


/// Names shared with the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProtocol {
	/// The marker intrinsic that carries fragment text.
	pub marker: String,
	/// The compile option selecting the recording or execution mode.
	pub mode_key: String,
	/// The compile option carrying the native function table.
	pub funcptrs_key: String,
	/// The constant holding compiled units, keyed by module name.
	pub registry: String,
}


impl Default for HostProtocol {
	fn default() -> Self {
		Self {
			marker: "__Ccont__".into(),
			mode_key: "ricsin_mode".into(),
			funcptrs_key: "ricsin_funcptrs".into(),
			registry: "SPLICE_ISEQMAP".into(),
		}
	}
}


/// A local variable, addressed from the frame's local variable base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(String, u32)")]
pub struct LocalVar {
	pub name: Box<str>,
	pub slot: u32,
}


impl From<(String, u32)> for LocalVar {
	fn from((name, slot): (String, u32)) -> Self {
		Self { name: name.into(), slot }
	}
}


/// A variable of an enclosing block, addressed by walking `level` parent block links
/// from the frame's block pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(String, u32, u32)")]
pub struct BlockVar {
	pub name: Box<str>,
	pub level: u32,
	pub slot: u32,
}


impl From<(String, u32, u32)> for BlockVar {
	fn from((name, level, slot): (String, u32, u32)) -> Self {
		Self { name: name.into(), level, slot }
	}
}


/// Marker for fragments compiled as native block bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum BlockMarker {
	#[serde(rename = "ifunc")]
	Ifunc,
}


/// The identity of a marker call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum FragmentId {
	/// An ordinary call site.
	Site(u64),
	/// A marker compiled as the body of a native block.
	Block(BlockMarker),
}


impl FragmentId {
	pub fn is_block(&self) -> bool {
		matches!(self, Self::Block(_))
	}
}


/// One marker call seen by the host compiler in recording mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Occurrence {
	/// The local variable table of the enclosing method or script.
	pub locals: Vec<LocalVar>,
	/// The variables of enclosing blocks, outer to inner.
	#[serde(default)]
	pub blocks: Vec<BlockVar>,
	pub line: Line,
	/// The raw fragment text.
	pub text: String,
	pub fragment: FragmentId,
	/// The compiled unit (method, block, iterator body) containing the call.
	pub unit: u64,
	/// The bytecode offset where execution resumes after the call, when the host may
	/// re-enter the fragment.
	#[serde(default)]
	pub resume: Option<u32>,
}


/// Everything the host compiler recorded for a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Recording {
	/// Declarations to place before the generated functions.
	#[serde(default)]
	pub declarations: Vec<String>,
	/// Statements to run in the module initializer.
	#[serde(default)]
	pub initializers: Vec<String>,
	/// Marker calls, in compile order.
	pub occurrences: Vec<Occurrence>,
}


/// The host compiler, driven in recording mode.
pub trait HostCompiler {
	/// Compile the preprocessed script, recording one occurrence per marker call.
	fn record(&mut self, script: &Script) -> Result<Recording, Error>;
}


impl<H> HostCompiler for &mut H
where
	H: HostCompiler + ?Sized,
{
	fn record(&mut self, script: &Script) -> Result<Recording, Error> {
		(**self).record(script)
	}
}
