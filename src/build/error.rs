use std::{
	fmt::{self, Display},
	io,
	path::Path,
	process::ExitStatus,
};


/// A failure of the external build tool-chain.
#[derive(Debug)]
pub enum Error {
	/// A build tool could not be started.
	Spawn {
		program: Box<Path>,
		error: io::Error,
	},
	/// A build step exited unsuccessfully. The output is kept verbatim.
	Failed {
		step: &'static str,
		status: ExitStatus,
		output: Box<str>,
	},
	/// The host did not report the module file extension.
	MissingExtension,
}


impl Error {
	pub fn spawn(program: &Path, error: io::Error) -> Self {
		Self::Spawn { program: program.into(), error }
	}


	/// A failed step, carrying both output streams of the tool.
	pub fn failed(step: &'static str, status: ExitStatus, stdout: &[u8], stderr: &[u8]) -> Self {
		let mut output = String::from_utf8_lossy(stdout).into_owned();
		output.push_str(&String::from_utf8_lossy(stderr));

		Self::Failed { step, status, output: output.into() }
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Spawn { program, error } => write!(
				f,
				"failed to start {}: {}",
				program.display(),
				error
			),

			Self::Failed { step, status, output } => write!(
				f,
				"{} failed ({}):\n{}",
				step,
				status,
				output
			),

			Self::MissingExtension => "host reported no extension module suffix".fmt(f),
		}
	}
}


impl std::error::Error for Error {}
