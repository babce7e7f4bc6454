use std::{
	ffi::OsStr,
	path::{Path, PathBuf},
	process::{Command, Output},
};

use super::{BuildJob, Error, Toolchain};
use crate::fmt::CLiteral;


/// The host's extension build tool-chain: `mkmf` generates a makefile, `make` runs it.
#[derive(Debug, Clone)]
pub struct Mkmf {
	interpreter: PathBuf,
	make: PathBuf,
}


impl Mkmf {
	pub fn new<P>(interpreter: P) -> Self
	where
		P: Into<PathBuf>,
	{
		Self {
			interpreter: interpreter.into(),
			make: PathBuf::from("make"),
		}
	}


	/// Run a tool in the job directory, failing on a non-zero exit.
	fn run<I, S>(
		&self,
		step: &'static str,
		program: &Path,
		args: I,
		directory: &Path,
	) -> Result<Output, Error>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<OsStr>,
	{
		let output = Command::new(program)
			.args(args)
			.current_dir(directory)
			.output()
			.map_err(|error| Error::spawn(program, error))?;

		if output.status.success() {
			Ok(output)
		} else {
			Err(Error::failed(step, output.status, &output.stdout, &output.stderr))
		}
	}


	fn configure(&self, job: &BuildJob) -> Result<(), Error> {
		if job.directory.join("extconf.rb").is_file() {
			self.run("extconf.rb", &self.interpreter, &["extconf.rb"], &job.directory)?;
		} else {
			let script = format!(
				"$objs = [{}]; create_makefile({})",
				CLiteral(&job.object_name()),
				CLiteral(&job.module),
			);

			self.run(
				"mkmf",
				&self.interpreter,
				&["-r", "mkmf", "-e", script.as_str()],
				&job.directory,
			)?;
		}

		Ok(())
	}


	/// The file extension of loadable modules on this host.
	fn extension(&self, job: &BuildJob) -> Result<String, Error> {
		let output = self.run(
			"rbconfig",
			&self.interpreter,
			&["-r", "rbconfig", "-e", "print RbConfig::CONFIG['DLEXT']"],
			&job.directory,
		)?;

		let extension = String::from_utf8_lossy(&output.stdout)
			.trim()
			.to_owned();

		if extension.is_empty() {
			Err(Error::MissingExtension)
		} else {
			Ok(extension)
		}
	}
}


impl Toolchain for Mkmf {
	fn build(&self, job: &BuildJob) -> Result<PathBuf, Error> {
		self.configure(job)?;
		self.run("make", &self.make, std::iter::empty::<&str>(), &job.directory)?;

		let extension = self.extension(job)?;

		Ok(job.directory.join(format!("{}.{}", job.module, extension)))
	}
}
