use std::fmt::{self, Display};

use super::{Artifact, BYTES_PER_ROW};
use crate::{
	fmt::{sep_by, CLiteral, Indentation, Show},
	synth,
};


const INDENT: Indentation = Indentation(1);
const NESTED: Indentation = Indentation(2);


/// The script bytes as rows of a byte-array initializer.
struct ByteRows<'a>(&'a [u8]);


impl<'a> Display for ByteRows<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.0.is_empty() {
			return "{ 0 }".fmt(f);
		}

		"{\n".fmt(f)?;

		for row in self.0.chunks(BYTES_PER_ROW) {
			write!(f, "{}", NESTED)?;
			sep_by(
				row.iter(),
				f,
				|byte, f| write!(f, "0x{:02x},", byte),
				" ",
			)?;
			"\n".fmt(f)?;
		}

		write!(f, "{}}}", INDENT)
	}
}


/// The dispatch table initializer.
struct FunctionTable<'a, 'b>(&'b [&'a str]);


impl<'a, 'b> Display for FunctionTable<'a, 'b> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.0.is_empty() {
			return "{ 0 }".fmt(f);
		}

		"{\n".fmt(f)?;

		for name in self.0 {
			writeln!(f, "{}{},", NESTED, name)?;
		}

		write!(f, "{}}}", INDENT)
	}
}


impl<'a> Artifact<'a> {
	fn fmt_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "/* generated by splice from {} */", self.source_name)?;

		self.prelude.fmt(f)?;
		if !self.prelude.ends_with('\n') {
			"\n".fmt(f)?;
		}

		if !self.declarations.is_empty() {
			"\n".fmt(f)?;
			for declaration in self.declarations {
				writeln!(f, "{}", declaration)?;
			}
		}

		if !self.identifiers.is_empty() {
			"\n".fmt(f)?;
			for (symbol, _) in self.identifiers.iter() {
				writeln!(f, "static ID {};", Show(symbol, self.identifiers))?;
			}
		}

		Ok(())
	}


	fn fmt_functions(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let context = synth::fmt::Context::from(self.source_name);

		for function in self.functions {
			"\n".fmt(f)?;
			Show(function, context).fmt(f)?;
		}

		Ok(())
	}


	fn fmt_init(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let script = self.script.as_bytes();
		let protocol = self.protocol;

		"\nvoid\n".fmt(f)?;
		writeln!(f, "{}(void)", self.init_name())?;
		"{\n".fmt(f)?;

		writeln!(f, "{}static const char splice_script[] = {};", INDENT, ByteRows(script))?;
		"\n".fmt(f)?;

		writeln!(f, "{}VALUE src = rb_str_new(splice_script, {});", INDENT, script.len())?;
		writeln!(f, "{}VALUE file = rb_str_new2({});", INDENT, CLiteral(self.source_name))?;
		writeln!(f, "{}VALUE line = INT2FIX(1);", INDENT)?;
		writeln!(f, "{}VALUE opt = rb_hash_new();", INDENT)?;
		writeln!(f, "{}VALUE map;", INDENT)?;
		writeln!(f, "{}VALUE iseq;", INDENT)?;

		if !self.initializers.is_empty() {
			"\n".fmt(f)?;
			for initializer in self.initializers {
				writeln!(f, "{}{{ {} }}", INDENT, initializer)?;
			}
		}

		if !self.identifiers.is_empty() {
			"\n".fmt(f)?;
			for (symbol, name) in self.identifiers.iter() {
				writeln!(
					f,
					"{}splice_id_{} = rb_intern({});",
					INDENT,
					symbol.id(),
					CLiteral(&format!("@{}", name)),
				)?;
			}
		}

		"\n".fmt(f)?;
		writeln!(
			f,
			"{}static const rb_insn_func_t splice_functions[] = {};",
			INDENT,
			FunctionTable(&self.dispatch),
		)?;

		"\n".fmt(f)?;
		writeln!(
			f,
			"{}rb_hash_aset(opt, ID2SYM(rb_intern({})), INT2FIX({}));",
			INDENT,
			CLiteral(&protocol.mode_key),
			crate::host::EXECUTION_MODE,
		)?;
		writeln!(
			f,
			"{}rb_hash_aset(opt, ID2SYM(rb_intern({})), (VALUE)splice_functions | 0x01);",
			INDENT,
			CLiteral(&protocol.funcptrs_key),
		)?;
		writeln!(f, "{}iseq = rb_iseq_compile_with_option(src, file, line, opt);", INDENT)?;

		"\n".fmt(f)?;
		let registry = CLiteral(&protocol.registry);
		writeln!(f, "{}if (rb_const_defined(rb_cObject, rb_intern({}))) {{", INDENT, registry)?;
		writeln!(f, "{}map = rb_const_get(rb_cObject, rb_intern({}));", NESTED, registry)?;
		writeln!(f, "{}}}", INDENT)?;
		writeln!(f, "{}else {{", INDENT)?;
		writeln!(f, "{}map = rb_hash_new();", NESTED)?;
		writeln!(f, "{}rb_const_set(rb_cObject, rb_intern({}), map);", NESTED, registry)?;
		writeln!(f, "{}}}", INDENT)?;
		writeln!(f, "{}rb_hash_aset(map, rb_str_new2({}), iseq);", INDENT, CLiteral(self.module))?;

		"}\n".fmt(f)
	}
}


impl<'a> Display for Artifact<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.fmt_header(f)?;
		self.fmt_functions(f)?;
		self.fmt_init(f)
	}
}
