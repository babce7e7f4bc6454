use std::{
	ffi::OsString,
	io::Write,
	path::{Path, PathBuf},
	process::{Command, Stdio},
};

use super::{Error, HostCompiler, HostProtocol, Recording, RECORDING_MODE};
use crate::source::Script;


/// The driver that runs inside the host interpreter.
const DRIVER: &str = include_str!("record.rb");

/// Environment variable overriding the host interpreter.
pub const INTERPRETER_VAR: &str = "SPLICE_RUBY";


/// The host compiler, reached through a host interpreter subprocess.
#[derive(Debug, Clone)]
pub struct RubyHost {
	interpreter: PathBuf,
	protocol: HostProtocol,
}


impl RubyHost {
	pub fn new<P>(interpreter: P, protocol: HostProtocol) -> Self
	where
		P: Into<PathBuf>,
	{
		Self { interpreter: interpreter.into(), protocol }
	}


	/// Use the interpreter named by `SPLICE_RUBY`, or `ruby` from the search path.
	#[cfg(test)]
	pub fn from_env(protocol: HostProtocol) -> Self {
		Self::new(Self::default_interpreter(), protocol)
	}


	pub fn default_interpreter() -> PathBuf {
		std::env::var_os(INTERPRETER_VAR)
			.filter(|value| !value.is_empty())
			.unwrap_or_else(|| OsString::from("ruby"))
			.into()
	}


	pub fn interpreter(&self) -> &Path {
		&self.interpreter
	}


	fn command(&self, script: &Script) -> Command {
		let mut command = Command::new(&self.interpreter);

		command
			.arg("-e")
			.arg(DRIVER)
			.arg("--")
			.arg(script.file_name())
			.arg(&self.protocol.mode_key)
			.arg(RECORDING_MODE.to_string())
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped());

		command
	}
}


impl HostCompiler for RubyHost {
	fn record(&mut self, script: &Script) -> Result<Recording, Error> {
		let mut child = self
			.command(script)
			.spawn()
			.map_err(|error| Error::spawn(&self.interpreter, error))?;

		// The driver reads the whole script before producing any output.
		let written = match child.stdin.take() {
			Some(mut stdin) => stdin.write_all(script.contents.as_bytes()),
			None => Ok(()),
		};

		let output = child.wait_with_output()?;

		// The driver's exit status takes precedence over a failed write.
		if !output.status.success() {
			return Err(Error::failed(output.status, &output.stderr));
		}

		written?;

		let recording = serde_json::from_slice(&output.stdout)?;

		Ok(recording)
	}
}
