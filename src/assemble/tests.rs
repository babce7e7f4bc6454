use super::*;
use crate::{
	correlate,
	fmt::CLiteral,
	synth::{self, NativeFunction},
	tests::occurrence,
	translate::Translator,
};


const PRELUDE_STUB: &str = "/* prelude */";


fn artifact<'a>(
	script: &'a str,
	protocol: &'a HostProtocol,
	identifiers: &'a symbol::Interner,
	functions: &'a [NativeFunction],
	dispatch: Vec<&'a str>,
) -> Artifact<'a> {
	Artifact {
		module: "splice_test",
		source_name: "test.rb",
		prelude: PRELUDE_STUB,
		protocol,
		declarations: &[],
		initializers: &[],
		identifiers,
		functions,
		dispatch,
		script,
	}
}


#[test]
fn test_empty_module() {
	let protocol = HostProtocol::default();
	let identifiers = symbol::Interner::new();
	let output = artifact("", &protocol, &identifiers, &[], Vec::new()).to_string();

	assert!(output.starts_with("/* generated by splice from test.rb */\n/* prelude */\n"));
	assert!(output.contains("\tstatic const char splice_script[] = { 0 };\n"));
	assert!(output.contains("\tVALUE src = rb_str_new(splice_script, 0);\n"));
	assert!(output.contains("\tstatic const rb_insn_func_t splice_functions[] = { 0 };\n"));
	assert!(!output.contains("static ID"));
	assert!(!output.contains("FUNC_FASTCALL"));
	assert!(output.ends_with("}\n"));
}


#[test]
fn test_init_routine() {
	let protocol = HostProtocol::default();
	let identifiers = symbol::Interner::new();
	let output = artifact("p 1\n", &protocol, &identifiers, &[], Vec::new()).to_string();

	let expected = concat!(
		"\nvoid\n",
		"Init_splice_test(void)\n",
		"{\n",
		"\tstatic const char splice_script[] = {\n",
		"\t\t0x70, 0x20, 0x31, 0x0a,\n",
		"\t};\n",
		"\n",
		"\tVALUE src = rb_str_new(splice_script, 4);\n",
		"\tVALUE file = rb_str_new2(\"test.rb\");\n",
		"\tVALUE line = INT2FIX(1);\n",
		"\tVALUE opt = rb_hash_new();\n",
		"\tVALUE map;\n",
		"\tVALUE iseq;\n",
		"\n",
		"\tstatic const rb_insn_func_t splice_functions[] = { 0 };\n",
		"\n",
		"\trb_hash_aset(opt, ID2SYM(rb_intern(\"ricsin_mode\")), INT2FIX(2));\n",
		"\trb_hash_aset(opt, ID2SYM(rb_intern(\"ricsin_funcptrs\")), (VALUE)splice_functions | 0x01);\n",
		"\tiseq = rb_iseq_compile_with_option(src, file, line, opt);\n",
		"\n",
		"\tif (rb_const_defined(rb_cObject, rb_intern(\"SPLICE_ISEQMAP\"))) {\n",
		"\t\tmap = rb_const_get(rb_cObject, rb_intern(\"SPLICE_ISEQMAP\"));\n",
		"\t}\n",
		"\telse {\n",
		"\t\tmap = rb_hash_new();\n",
		"\t\trb_const_set(rb_cObject, rb_intern(\"SPLICE_ISEQMAP\"), map);\n",
		"\t}\n",
		"\trb_hash_aset(map, rb_str_new2(\"splice_test\"), iseq);\n",
		"}\n",
	);

	assert!(output.ends_with(expected), "{}", output);
}


#[test]
fn test_byte_rows() {
	let protocol = HostProtocol::default();
	let identifiers = symbol::Interner::new();
	let script = "abcdefghijkl";
	let output = artifact(script, &protocol, &identifiers, &[], Vec::new()).to_string();

	assert!(
		output.contains(
			concat!(
				"\t\t0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a,\n",
				"\t\t0x6b, 0x6c,\n",
				"\t};\n",
			)
		)
	);
	assert!(output.contains("rb_str_new(splice_script, 12);"));
}


#[test]
fn test_field_storage() {
	let translator = Translator::new();
	let mut identifiers = symbol::Interner::new();
	let correlation = correlate::correlate(
		vec![occurrence(1, 1, 1, "@x + 1", None)],
		&translator,
		&mut identifiers,
	)
	.unwrap_or_else(|error| panic!("{}", error));

	let functions: Vec<NativeFunction> = correlation.units
		.iter()
		.map(|unit| synth::synthesize(unit, &translator))
		.collect();

	let protocol = HostProtocol::default();
	let output = artifact(
		"",
		&protocol,
		&identifiers,
		&functions,
		correlation.dispatch_names().collect(),
	)
	.to_string();

	assert_eq!(output.matches("static ID splice_id_0 /* @x */;\n").count(), 1);
	assert_eq!(output.matches("splice_id_0 = rb_intern(\"@x\");\n").count(), 1);
	assert!(output.contains("\nSPLICE_IVAR(0) + 1\n"));
	assert!(output.contains("splice_functions[] = {\n\t\tsplice_func_1,\n\t};\n"));
}


#[test]
fn test_host_snippets() {
	let protocol = HostProtocol::default();
	let identifiers = symbol::Interner::new();
	let declarations = vec!["static int counter;".to_owned()];
	let initializers = vec!["counter = 0;".to_owned(), "rb_require(\"set\");".to_owned()];

	let mut artifact = artifact("", &protocol, &identifiers, &[], Vec::new());
	artifact.declarations = &declarations;
	artifact.initializers = &initializers;
	let output = artifact.to_string();

	assert!(output.contains("/* prelude */\n\nstatic int counter;\n"));
	assert!(output.contains("\tVALUE iseq;\n\n\t{ counter = 0; }\n\t{ rb_require(\"set\"); }\n"));
}


#[test]
fn test_c_literal() {
	assert_eq!(CLiteral("plain.rb").to_string(), "\"plain.rb\"");
	assert_eq!(CLiteral("a\"b\\c\n").to_string(), "\"a\\\"b\\\\c\\n\"");
	assert_eq!(CLiteral("\x01é").to_string(), "\"\\001\\303\\251\"");
}


#[test]
fn test_prelude_defines_accessors() {
	for name in &["SPLICE_LVAR", "SPLICE_DVAR", "SPLICE_IVAR", "SPLICE_GVAR", "SPLICE_GET_PC", "SPLICE_SET_PC", "SPLICE_UNREACHABLE", "SPLICE_SELF"] {
		assert!(PRELUDE.contains(&format!("#define {}(", name)), "missing {}", name);
	}
}
