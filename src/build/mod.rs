mod error;
mod layout;
mod mkmf;

use std::path::PathBuf;

pub use error::Error;
pub use layout::Layout;
pub use mkmf::Mkmf;


/// A request to compile the generated source into a loadable module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildJob {
	/// The directory holding the generated source, where the build runs.
	pub directory: PathBuf,
	/// The module name, which is also the stem of the generated source.
	pub module: String,
}


impl BuildJob {
	pub fn new(layout: &Layout) -> Self {
		Self {
			directory: layout.directory().to_owned(),
			module: layout.module().to_owned(),
		}
	}


	/// The single object file the module is linked from.
	pub fn object_name(&self) -> String {
		format!("{}.o", self.module)
	}
}


/// An external build tool-chain.
pub trait Toolchain {
	/// Build the module, returning the path of the loadable file.
	fn build(&self, job: &BuildJob) -> Result<PathBuf, Error>;
}


/// Quote text as a single quoted host string.
fn quote(text: &str) -> String {
	let mut quoted = String::with_capacity(text.len() + 2);

	quoted.push('\'');
	for c in text.chars() {
		if c == '\'' || c == '\\' {
			quoted.push('\\');
		}
		quoted.push(c);
	}
	quoted.push('\'');

	quoted
}


/// The host script that loads a built module and runs its registered unit.
/// When the stub is run directly, `$0` reports the original script name.
/// The stub shares the module's stem, so the require names the extension explicitly;
/// the host maps `.so` to the platform's loadable extension.
pub fn loader_stub(module: &str, script_name: &str, registry: &str) -> String {
	format!(
		"require_relative {library}\n\
		 $0 = {script} if $0 == __FILE__\n\
		 ::{registry}[{module}].eval\n",
		library = quote(&format!("{}.so", module)),
		module = quote(module),
		script = quote(script_name),
		registry = registry,
	)
}
