use std::path::{Path, PathBuf};


/// Where the generated files of a script go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
	directory: PathBuf,
	module: String,
}


impl Layout {
	/// The module is named after the script stem and the suffix. Characters that cannot
	/// appear in an init routine name are replaced by underscores.
	pub fn new<P>(directory: P, stem: &str, suffix: &str) -> Self
	where
		P: Into<PathBuf>,
	{
		let module = format!("splice_{}{}", stem, suffix)
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
			.collect();

		Self { directory: directory.into(), module }
	}


	pub fn directory(&self) -> &Path {
		&self.directory
	}


	pub fn module(&self) -> &str {
		&self.module
	}


	/// The generated native source.
	pub fn c_source(&self) -> PathBuf {
		self.file("c")
	}


	/// The loader stub.
	pub fn stub(&self) -> PathBuf {
		self.file("rb")
	}


	/// The saved preprocessed script.
	pub fn preprocessed(&self) -> PathBuf {
		self.file("pre.rb")
	}


	fn file(&self, extension: &str) -> PathBuf {
		self.directory.join(format!("{}.{}", self.module, extension))
	}
}
