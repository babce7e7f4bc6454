pub mod color;

use std::fmt::Display;


/// Report a fatal error on stderr.
pub fn error<T>(message: T)
where
	T: Display,
{
	eprintln!("{}: {}", color::Fg(color::Red, "Error"), message);
}


/// Report progress on stderr, when running verbosely.
pub fn note<T>(verbose: bool, message: T)
where
	T: Display,
{
	if verbose {
		eprintln!("{}: {}", color::Fg(color::Yellow, "note"), message);
	}
}


/// Report a successful step on stderr, when running verbosely.
pub fn done<T>(verbose: bool, message: T)
where
	T: Display,
{
	if verbose {
		eprintln!("{}: {}", color::Fg(color::Green, "done"), message);
	}
}
