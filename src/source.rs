use std::{
	fmt::{self, Display},
	fs::File,
	io,
	path::Path,
};

use serde::Deserialize;


/// A script to be spliced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	/// The script contents.
	pub contents: String,
}


impl Script {
	/// Load the script from a file path.
	pub fn from_path<P>(path: P) -> io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the script from a std::io::Read.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	/// Scripts must be valid UTF-8.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: io::Read,
	{
		let path = path.into();
		let mut contents = String::with_capacity(512); // Expect a few characters.
		reader.read_to_string(&mut contents)?;

		Ok(Self { path, contents })
	}


	/// Create a script from in-memory text.
	pub fn new<P, S>(path: P, contents: S) -> Self
	where
		P: Into<Box<Path>>,
		S: Into<String>,
	{
		Self { path: path.into(), contents: contents.into() }
	}


	/// The file name reported to the host compiler, without directories.
	pub fn file_name(&self) -> &str {
		self.path
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or("<script>")
	}


	/// The file name without its extension, used to derive module names.
	pub fn stem(&self) -> &str {
		self.path
			.file_stem()
			.and_then(|name| name.to_str())
			.unwrap_or("script")
	}
}


/// A line in the script. Lines are counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Line(pub u32);


impl Display for Line {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "line {}", self.0)
	}
}
