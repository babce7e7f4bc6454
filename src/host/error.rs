use std::{
	fmt::{self, Display},
	io,
	path::Path,
	process::ExitStatus,
};


/// A failure of the host compiler in recording mode.
#[derive(Debug)]
pub enum Error {
	/// The host interpreter could not be started.
	Spawn {
		interpreter: Box<Path>,
		error: io::Error,
	},
	/// Communication with the host interpreter failed.
	Io(io::Error),
	/// The host compiler rejected the script.
	Failed {
		status: ExitStatus,
		stderr: Box<str>,
	},
	/// The recording could not be decoded.
	Protocol(serde_json::Error),
}


impl Error {
	pub fn spawn(interpreter: &Path, error: io::Error) -> Self {
		Self::Spawn { interpreter: interpreter.into(), error }
	}


	pub fn failed(status: ExitStatus, stderr: &[u8]) -> Self {
		Self::Failed {
			status,
			stderr: String::from_utf8_lossy(stderr).into(),
		}
	}
}


impl From<io::Error> for Error {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Self::Protocol(error)
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Spawn { interpreter, error } => write!(
				f,
				"failed to start host interpreter {}: {}",
				interpreter.display(),
				error
			),

			Self::Io(error) => write!(f, "host interpreter i/o error: {}", error),

			Self::Failed { status, stderr } => write!(
				f,
				"host compiler failed ({}):\n{}",
				status,
				stderr.trim_end()
			),

			Self::Protocol(error) => write!(f, "invalid recording from host compiler: {}", error),
		}
	}
}


impl std::error::Error for Error {}
