mod error;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::{
	assemble::{self, Artifact},
	correlate::{self, Correlation},
	extract::{self, Preprocessed},
	host::{HostCompiler, HostProtocol, Recording},
	source::Script,
	symbol,
	synth::{self, NativeFunction},
	translate::Translator,
};
pub use error::Error;


/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct Options {
	/// The module name.
	pub module: String,
	pub prelude: Cow<'static, str>,
	pub protocol: HostProtocol,
}


impl Options {
	/// Options with the default prelude and host protocol.
	pub fn new<S>(module: S) -> Self
	where
		S: Into<String>,
	{
		Self {
			module: module.into(),
			prelude: Cow::Borrowed(assemble::PRELUDE),
			protocol: HostProtocol::default(),
		}
	}
}


/// The state of a generation run. The identifier table lives here, and grows while
/// fragments are translated.
#[derive(Debug)]
pub struct Context<'a> {
	pub options: &'a Options,
	pub identifiers: symbol::Interner,
	pub translator: Translator,
}


impl<'a> Context<'a> {
	pub fn new(options: &'a Options) -> Self {
		Self {
			options,
			identifiers: symbol::Interner::new(),
			translator: Translator::new(),
		}
	}


	/// Group the recorded occurrences, translating their fragments.
	pub fn correlate(&mut self, recording: &Recording) -> Result<Correlation, correlate::Error> {
		correlate::correlate(
			recording.occurrences.iter().cloned(),
			&self.translator,
			&mut self.identifiers,
		)
	}


	/// Synthesize one native function per unit, in discovery order.
	pub fn synthesize(&self, correlation: &Correlation) -> Vec<NativeFunction> {
		correlation.units
			.iter()
			.map(|unit| synth::synthesize(unit, &self.translator))
			.collect()
	}


	/// Assemble the native source of the module.
	pub fn assemble(
		&self,
		script: &Script,
		recording: &Recording,
		correlation: &Correlation,
		functions: &[NativeFunction],
	) -> String {
		let artifact = Artifact {
			module: &self.options.module,
			source_name: script.file_name(),
			prelude: &self.options.prelude,
			protocol: &self.options.protocol,
			declarations: &recording.declarations,
			initializers: &recording.initializers,
			identifiers: &self.identifiers,
			functions,
			dispatch: correlation.dispatch_names().collect(),
			script: &script.contents,
		};

		artifact.to_string()
	}
}


/// The products of a generation run.
#[derive(Debug)]
pub struct Output {
	pub preprocessed: Preprocessed,
	pub recording: Recording,
	pub correlation: Correlation,
	pub functions: Vec<NativeFunction>,
	/// The number of field identifiers referenced by fragments.
	pub identifiers: usize,
	/// The generated native source.
	pub csource: String,
}


/// Run the whole pipeline on a script. Nothing is written: the caller decides what to do
/// with the output, after every pass has succeeded.
pub fn generate<H>(script: &Script, options: &Options, mut host: H) -> Result<Output, Error>
where
	H: HostCompiler,
{
	let mut context = Context::new(options);

	let preprocessed = extract::preprocess(&script.contents, &options.protocol.marker)?;
	let compiled = Script::new(script.path.clone(), preprocessed.text.clone());

	let recording = host.record(&compiled)?;
	let correlation = context.correlate(&recording)?;
	let functions = context.synthesize(&correlation);
	let csource = context.assemble(&compiled, &recording, &correlation, &functions);

	Ok(
		Output {
			preprocessed,
			recording,
			correlation,
			functions,
			identifiers: context.identifiers.len(),
			csource,
		}
	)
}
