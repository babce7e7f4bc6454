use super::*;

use assert_matches::assert_matches;


fn translate(text: &str, identifiers: &mut symbol::Interner) -> String {
	Translator::new()
		.translate(text, identifiers)
		.unwrap_or_else(|error| panic!("{}", error))
}


#[test]
fn test_field_reference() {
	let mut identifiers = symbol::Interner::new();
	let output = translate("@x + 1", &mut identifiers);

	assert_eq!(output, "SPLICE_IVAR(0) + 1");
	assert_eq!(identifiers.len(), 1);
	assert_matches!(identifiers.get("x"), Some(symbol) => assert_eq!(symbol.id(), 0));
}


#[test]
fn test_global_reference() {
	let mut identifiers = symbol::Interner::new();
	let output = translate("rb_p($stdout); $count", &mut identifiers);

	assert_eq!(output, "rb_p(SPLICE_GVAR(stdout)); SPLICE_GVAR(count)");
	assert!(identifiers.is_empty());
}


#[test]
fn test_same_field_same_id() {
	let mut identifiers = symbol::Interner::new();
	let first = translate("@a = @b;", &mut identifiers);
	let second = translate("@b + @a + @c", &mut identifiers);

	assert_eq!(first, "SPLICE_IVAR(0) = SPLICE_IVAR(1);");
	assert_eq!(second, "SPLICE_IVAR(1) + SPLICE_IVAR(0) + SPLICE_IVAR(2)");
	assert_eq!(identifiers.len(), 3);
}


#[test]
fn test_literals_and_comments_untouched() {
	let mut identifiers = symbol::Interner::new();
	let input = concat!(
		"printf(\"@x is %d, $y\\\" @z\", @x); /* @w $v */\n",
		"char c = '@'; // @u\n",
		"$g;",
	);
	let output = translate(input, &mut identifiers);

	let expected = concat!(
		"printf(\"@x is %d, $y\\\" @z\", SPLICE_IVAR(0)); /* @w $v */\n",
		"char c = '@'; // @u\n",
		"SPLICE_GVAR(g);",
	);

	assert_eq!(output, expected);
	assert_eq!(identifiers.len(), 1);
}


#[test]
fn test_text_without_references_is_identical() {
	let mut identifiers = symbol::Interner::new();
	let inputs = [
		"",
		"a / b; /* unterminated",
		"x = \"unterminated @y",
		"for (i = 0; i < n; i++) { sum += i * 2 / 3; }",
		"\"é\" /* ü */ 'ß'",
	];

	for input in inputs.iter() {
		assert_eq!(&translate(input, &mut identifiers), input);
	}

	assert!(identifiers.is_empty());
}


#[test]
fn test_spans() {
	let spans: Vec<Span> = Spans::from("a \"b\\\"\" /* c */ d // e\nf").collect();

	assert_eq!(
		spans,
		vec![
			Span::Code("a "),
			Span::Quoted("\"b\\\"\""),
			Span::Code(" "),
			Span::Comment("/* c */"),
			Span::Code(" d "),
			Span::Comment("// e"),
			Span::Code("\nf"),
		]
	);
}


#[test]
fn test_uses_receiver() {
	let translator = Translator::new();

	assert!(translator.uses_receiver("rb_funcall(self, id, 0);"));
	assert!(!translator.uses_receiver("myself = 1;"));
	assert!(!translator.uses_receiver("/* self */ \"self\""));
}
