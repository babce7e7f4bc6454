/// Write text as a double-quoted host string literal.
/// Interpolation is disabled by escaping every `#`, and control characters are written
/// as escape sequences so the literal always fits in a single line.
pub fn quote(text: &str, out: &mut String) {
	out.push('"');

	for c in text.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'#' => out.push_str("\\#"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\x1b' => out.push_str("\\e"),
			c if c.is_ascii_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
			c => out.push(c),
		}
	}

	out.push('"');
}
