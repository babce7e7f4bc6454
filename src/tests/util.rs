use std::{
	io,
	fs::{self, File},
	path::{Path, PathBuf},
};


/// Run a test for every file under a directory, relative to the crate root.
/// Files are visited in name order, so failures are reproducible.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, test: &mut F) -> io::Result<()>
	where
		F: FnMut(&Path, File) -> io::Result<()>,
	{
		let mut entries = fs::read_dir(dir)?
			.map(|entry| entry.map(|entry| entry.path()))
			.collect::<io::Result<Vec<_>>>()?;
		entries.sort();

		for path in entries {
			if path.is_dir() {
				run(&path, test)?;
			} else {
				let file = File::open(&path)?;
				test(&path, file)?;
			}
		}

		Ok(())
	}

	run(&dir, &mut test)
}
