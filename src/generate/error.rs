use std::{
	fmt::{self, Display},
	io,
	path::Path,
};

use crate::{build, correlate, extract, host};


/// Any failure that aborts a run.
#[derive(Debug)]
pub enum Error {
	Extract(extract::Error),
	Host(host::Error),
	Correlate(correlate::Error),
	Build(build::Error),
	/// Reading the script or writing a generated file failed.
	Io {
		path: Box<Path>,
		error: io::Error,
	},
}


impl Error {
	pub fn io(path: &Path, error: io::Error) -> Self {
		Self::Io { path: path.into(), error }
	}
}


impl From<extract::Error> for Error {
	fn from(error: extract::Error) -> Self {
		Self::Extract(error)
	}
}


impl From<host::Error> for Error {
	fn from(error: host::Error) -> Self {
		Self::Host(error)
	}
}


impl From<correlate::Error> for Error {
	fn from(error: correlate::Error) -> Self {
		Self::Correlate(error)
	}
}


impl From<build::Error> for Error {
	fn from(error: build::Error) -> Self {
		Self::Build(error)
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Extract(error) => write!(f, "malformed fragment: {}", error),
			Self::Host(error) => error.fmt(f),
			Self::Correlate(error) => error.fmt(f),
			Self::Build(error) => write!(f, "build failed: {}", error),
			Self::Io { path, error } => write!(f, "{}: {}", path.display(), error),
		}
	}
}


impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Extract(error) => Some(error),
			Self::Host(error) => Some(error),
			Self::Correlate(error) => Some(error),
			Self::Build(error) => Some(error),
			Self::Io { error, .. } => Some(error),
		}
	}
}
