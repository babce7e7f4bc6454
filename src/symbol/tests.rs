use super::*;

use crate::fmt::FmtString;


#[test]
fn test_ids_are_sequential() {
	let mut interner = Interner::new();

	let foo = interner.get_or_intern("foo").unwrap();
	let bar = interner.get_or_intern("bar").unwrap();

	assert_eq!(foo.id(), 0);
	assert_eq!(bar.id(), 1);
	assert_eq!(interner.len(), 2);
}


#[test]
fn test_first_occurrence_wins() {
	let mut interner = Interner::new();

	let first = interner.get_or_intern("count").unwrap();
	interner.get_or_intern("other").unwrap();
	let second = interner.get_or_intern("count").unwrap();

	assert_eq!(first, second);
	assert_eq!(interner.get("count"), Some(first));
	assert_eq!(interner.len(), 2);
}


#[test]
fn test_iter_in_id_order() {
	let mut interner = Interner::new();

	for name in &["z", "a", "m", "a"] {
		interner.get_or_intern(name).unwrap();
	}

	let entries: Vec<(u32, &str)> = interner
		.iter()
		.map(|(symbol, name)| (symbol.id(), name))
		.collect();

	assert_eq!(entries, vec![(0, "z"), (1, "a"), (2, "m")]);
}


#[test]
fn test_show_storage_slot() {
	let mut interner = Interner::new();
	let symbol = interner.get_or_intern("width").unwrap();

	assert_eq!(symbol.fmt_string(&interner), "splice_id_0 /* @width */");
	assert_eq!(interner.get("height"), None);
}
