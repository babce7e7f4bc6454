use std::fmt::Display as _;

use super::{Binding, Body, Case, NativeFunction, ResumePlan, Signature};
use crate::{
	correlate::Segment,
	fmt::{Display, Indentation},
	source::Line,
};


/// The frame parameter name used by the prelude macros.
pub const FRAME: &str = "splice_cfp";

const INDENT: Indentation = Indentation(1);


/// Context for emitting functions.
#[derive(Debug, Copy, Clone)]
pub struct Context<'a> {
	/// The script name used in line comments.
	pub source: &'a str,
}


impl<'a> From<&'a str> for Context<'a> {
	fn from(source: &'a str) -> Self {
		Self { source }
	}
}


fn line_comment(f: &mut std::fmt::Formatter, line: Line, context: Context) -> std::fmt::Result {
	writeln!(f, "/* #line {} \"{}\" */", line.0, context.source)
}


fn define(f: &mut std::fmt::Formatter, binding: &Binding) -> std::fmt::Result {
	let indirect = binding.indirect_name();

	writeln!(f, "#define {} {}", binding.name, indirect)?;
	writeln!(f, "#define {} {}", indirect, binding.slot)
}


fn undefine(f: &mut std::fmt::Formatter, binding: &Binding) -> std::fmt::Result {
	writeln!(f, "#undef {}", binding.name)?;
	writeln!(f, "#undef {}", binding.indirect_name())
}


impl Signature {
	fn header(self, f: &mut std::fmt::Formatter, name: &str) -> std::fmt::Result {
		"static VALUE\n".fmt(f)?;

		match self {
			Self::Insn => writeln!(f, "FUNC_FASTCALL({})(rb_control_frame_t *{})", name, FRAME),

			Self::BlockCall => writeln!(
				f,
				"{}(VALUE arg, VALUE tval, int argc, VALUE *argv, VALUE blockarg, rb_control_frame_t *{})",
				name,
				FRAME
			),
		}
	}
}


impl<'a> Display<'a> for Segment {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		writeln!(f, "{}{{", INDENT)?;
		line_comment(f, self.line, context)?;
		writeln!(f, "{}", self.body)?;
		writeln!(f, "{}}}", INDENT)
	}
}


impl<'a> Display<'a> for Case {
	type Context = (Context<'a>, u32);

	/// The context carries the position stored after the case runs.
	fn fmt(&self, f: &mut std::fmt::Formatter, (context, next): Self::Context) -> std::fmt::Result {
		line_comment(f, self.line, context)?;
		writeln!(f, "splice_label_{}:;", self.label)?;
		writeln!(f, "{};", self.body)?;
		writeln!(f, "{}SPLICE_SET_PC({}); return Qnil;", INDENT, next)
	}
}


impl<'a> Display<'a> for ResumePlan {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		writeln!(f, "{}switch (SPLICE_GET_PC()) {{", INDENT)?;

		for label in self.labels() {
			writeln!(f, "{}case {}: goto splice_label_{};", INDENT, label, label)?;
		}

		writeln!(f, "{}default: SPLICE_UNREACHABLE(SPLICE_GET_PC());", INDENT)?;
		writeln!(f, "{}}}", INDENT)?;

		writeln!(f, "{}{{", INDENT)?;

		for case in self.cases() {
			// Every label of the plan has a successor.
			let next = self.advance(case.label).unwrap_or(case.label);
			case.fmt(f, (context, next))?;
		}

		writeln!(f, "{}}}", INDENT)
	}
}


impl<'a> Display<'a> for NativeFunction {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		for binding in &self.bindings {
			define(f, binding)?;
		}

		self.signature.header(f, &self.name)?;
		"{\n".fmt(f)?;

		if self.receiver {
			writeln!(f, "{}const VALUE self = SPLICE_SELF();", INDENT)?;
		}

		match &self.body {
			Body::Simple(segment) => segment.fmt(f, context)?,
			Body::Resumable(plan) => plan.fmt(f, context)?,
		}

		writeln!(f, "{}return Qnil;", INDENT)?;
		"}\n".fmt(f)?;

		for binding in &self.bindings {
			undefine(f, binding)?;
		}

		Ok(())
	}
}
