use std::{ffi::OsString, path::PathBuf};

use clap::{clap_app, crate_authors, crate_version, crate_description};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The script to compile.
	pub script: PathBuf,
	/// Output directory. Defaults to the script's directory.
	pub directory: Option<PathBuf>,
	/// Appended to the module name.
	pub suffix: String,
	/// Run the loader stub after building.
	pub run: bool,
	/// Write the preprocessed script.
	pub save_script: bool,
	/// Stop after writing the native source.
	pub no_build: bool,
	/// Replacement for the default prelude.
	pub prelude: Option<PathBuf>,
	/// The host interpreter.
	pub ruby: Option<PathBuf>,
	pub verbose: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		splice =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg directory: -C --directory +takes_value "Output directory")
			(@arg suffix: -s --suffix +takes_value "Module name suffix")
			(@arg run: -r --run "Run the generated module after building")
			(@arg save_script: --("save-script") "Write the preprocessed script")
			(@arg no_build: --("no-build") "Only write the native source")
			(@arg prelude: --prelude +takes_value "Replace the native prelude with a file")
			(@arg ruby: --ruby +takes_value "Host interpreter")
			(@arg verbose: -v --verbose "Report progress")
			(@arg script: +required "The script to compile")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					script: matches.value_of_os("script").map(PathBuf::from).unwrap_or_default(),
					directory: matches.value_of_os("directory").map(PathBuf::from),
					suffix: matches.value_of("suffix").unwrap_or_default().to_owned(),
					run: matches.is_present("run"),
					save_script: matches.is_present("save_script"),
					no_build: matches.is_present("no_build"),
					prelude: matches.value_of_os("prelude").map(PathBuf::from),
					ruby: matches.value_of_os("ruby").map(PathBuf::from),
					verbose: matches.is_present("verbose"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
