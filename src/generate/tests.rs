use std::{io, path::Path};

use assert_matches::assert_matches;

use super::*;
use crate::tests::{self, ReplayHost};


fn run(script: &Script) -> (Result<Output, Error>, ReplayHost) {
	let options = Options::new("splice_test");
	let preprocessed = extract::preprocess(&script.contents, &options.protocol.marker)
		.unwrap_or_else(|error| panic!("{}", error));

	let mut host = ReplayHost::new(&preprocessed.fragments);
	let result = generate(script, &options, &mut host);

	(result, host)
}


fn run_ok(script: &Script) -> Output {
	match run(script).0 {
		Ok(output) => output,
		Err(error) => panic!("{}: {}", script.path.display(), error),
	}
}


#[test]
fn test_zero_fragments() {
	let script = Script::new(Path::new("plain.rb"), "puts 1\n");
	let (result, host) = run(&script);
	let output = result.unwrap_or_else(|error| panic!("{}", error));

	assert!(output.functions.is_empty());
	assert!(output.correlation.dispatch.is_empty());
	assert_eq!(output.preprocessed.text, script.contents);
	assert!(output.csource.contains("rb_str_new(splice_script, 7);"));
	assert!(output.csource.contains("splice_functions[] = { 0 };"));

	assert_matches!(&host.received[..], [received] => assert_eq!(received.contents, script.contents));
}


#[test]
fn test_field_reference() {
	let script = Script::new(Path::new("x.rb"), "#C @x + 1\n");
	let output = run_ok(&script);

	assert_eq!(output.identifiers, 1);
	assert_eq!(output.csource.matches("static ID splice_id_0 /* @x */;").count(), 1);
	assert_eq!(output.csource.matches("splice_id_0 = rb_intern(\"@x\");").count(), 1);
	assert!(output.csource.contains("\nSPLICE_IVAR(0) + 1\n"));
	assert!(output.csource.contains("FUNC_FASTCALL(splice_func_1)"));
}


#[test]
fn test_resumable_unit() {
	let script = Script::new(
		Path::new("loop.rb"),
		"loop do\n  #C:10 step_a\n  #C:14 step_b\nend\n",
	);
	let output = run_ok(&script);

	assert_eq!(output.functions.len(), 1);
	assert!(output.functions[0].is_resumable());
	assert_eq!(output.correlation.dispatch, vec![0, 0]);

	let csource = &output.csource;
	assert_eq!(csource.matches("switch (SPLICE_GET_PC())").count(), 1);
	assert!(csource.contains("splice_label_10:;\nstep_a;\n\tSPLICE_SET_PC(14); return Qnil;\n"));
	assert!(csource.contains("splice_label_14:;\nstep_b;\n\tSPLICE_SET_PC(10); return Qnil;\n"));
}


#[test]
fn test_embeds_preprocessed_script() {
	let script = Script::new(Path::new("x.rb"), "#C 1;\n");
	let output = run_ok(&script);

	let length = format!("rb_str_new(splice_script, {});", output.preprocessed.text.len());
	assert!(output.csource.contains(&length));
	assert!(output.preprocessed.text.starts_with("__Ccont__(\"1;\", 0)"));
}


#[test]
fn test_malformed_fragment() {
	let options = Options::new("splice_test");
	let script = Script::new(Path::new("bad.rb"), "#C\n");

	let result = generate(&script, &options, ReplayHost::default());

	assert_matches!(result, Err(Error::Extract(_)));
}


#[test]
fn test_conflicting_tags() {
	let script = Script::new(Path::new("bad.rb"), "#C:4 a\nx\n#C:4 b\n");

	assert_matches!(run(&script).0, Err(Error::Correlate(correlate::Error::ConflictingTag { tag: 4, .. })));
}


#[test]
fn test_custom_prelude() {
	let mut options = Options::new("splice_test");
	options.prelude = Cow::Owned("#include \"mine.h\"\n".to_owned());

	let script = Script::new(Path::new("x.rb"), "p 1\n");
	let output = generate(&script, &options, ReplayHost::default())
		.unwrap_or_else(|error| panic!("{}", error));

	assert!(output.csource.starts_with("/* generated by splice from x.rb */\n#include \"mine.h\"\n"));
	assert!(!output.csource.contains("SPLICE_H"));
}


#[test]
fn test_scripts() -> io::Result<()> {
	tests::util::test_dir(
		"src/tests/data",
		|path, file| {
			let script = Script::from_reader(path, file)?;

			let first = run_ok(&script);
			let second = run_ok(&script);

			// Deterministic output.
			assert_eq!(first.csource, second.csource, "{}", path.display());

			assert_eq!(first.correlation.dispatch.len(), first.preprocessed.fragments.len());
			assert_eq!(
				first.preprocessed.text.lines().count(),
				script.contents.lines().take_while(|line| *line != "__END__").count(),
			);

			for function in &first.functions {
				let header = format!("FUNC_FASTCALL({})", function.name);
				assert_eq!(first.csource.matches(&header).count(), 1, "{}", path.display());
			}

			Ok(())
		}
	)
}
