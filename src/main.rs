mod args;
mod assemble;
mod build;
mod correlate;
mod extract;
mod fmt;
mod generate;
mod host;
mod source;
mod symbol;
mod synth;
mod term;
mod translate;
#[cfg(test)]
mod tests;

use std::{
	borrow::Cow,
	path::{Path, PathBuf},
	process,
};

use args::{Args, Command};
use build::{BuildJob, Layout, Mkmf, Toolchain};
use generate::{Error, Options};
use host::RubyHost;
use source::Script;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			term::error(error);
			1
		}
	};

	process::exit(exit_code)
}


fn read_prelude(path: Option<&Path>) -> Result<Cow<'static, str>, Error> {
	match path {
		Some(path) => std::fs::read_to_string(path)
			.map(Cow::Owned)
			.map_err(|error| Error::io(path, error)),

		None => Ok(Cow::Borrowed(assemble::PRELUDE)),
	}
}


fn write(path: &Path, contents: &str, verbose: bool) -> Result<(), Error> {
	std::fs::write(path, contents).map_err(|error| Error::io(path, error))?;
	term::note(verbose, format_args!("wrote {}", path.display()));
	Ok(())
}


fn run(args: Args) -> Result<i32, Error> {
	let verbose = args.verbose;

	let script = Script::from_path(args.script.as_path())
		.map_err(|error| Error::io(&args.script, error))?;

	let directory = args.directory
		.clone()
		.or_else(|| args.script.parent().map(Path::to_owned))
		.filter(|directory| !directory.as_os_str().is_empty())
		.unwrap_or_else(|| PathBuf::from("."));

	let layout = Layout::new(directory, script.stem(), &args.suffix);
	let mut options = Options::new(layout.module());
	options.prelude = read_prelude(args.prelude.as_deref())?;
	let protocol = options.protocol.clone();

	let interpreter = args.ruby
		.clone()
		.unwrap_or_else(RubyHost::default_interpreter);
	let mut host = RubyHost::new(interpreter, protocol.clone());

	// ----------------------------------------------------------------------------------------
	let output = generate::generate(&script, &options, &mut host)?;

	for fragment in &output.preprocessed.fragments {
		term::note(
			verbose,
			format_args!("fragment at {} (annotation {})", fragment.line, fragment.priority),
		);
	}

	for function in &output.functions {
		let shape = if function.is_resumable() { "resumable" } else { "simple" };
		term::note(verbose, format_args!("{}: {} function", function.name, shape));
	}

	term::note(
		verbose,
		format_args!(
			"{} call sites, {} field identifiers, {} host snippets",
			output.correlation.dispatch.len(),
			output.identifiers,
			output.recording.declarations.len() + output.recording.initializers.len(),
		),
	);

	// ----------------------------------------------------------------------------------------
	if args.save_script {
		write(&layout.preprocessed(), &output.preprocessed.text, verbose)?;
	}

	write(&layout.c_source(), &output.csource, verbose)?;

	if args.no_build {
		return Ok(0);
	}

	let module = Mkmf::new(host.interpreter()).build(&BuildJob::new(&layout))?;
	term::done(verbose, format_args!("built {}", module.display()));

	let stub = build::loader_stub(layout.module(), script.file_name(), &protocol.registry);
	write(&layout.stub(), &stub, verbose)?;

	// ----------------------------------------------------------------------------------------
	if args.run {
		let interpreter = host.interpreter();
		let status = process::Command::new(interpreter)
			.arg(layout.stub())
			.status()
			.map_err(|error| Error::io(interpreter, error))?;

		return Ok(status.code().unwrap_or(1));
	}

	Ok(0)
}
