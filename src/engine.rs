use crate::error::EngineError;
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc_minifier::{CompressOptions, Minifier as Compressor, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;
use regex::Regex;

/// Hint the driver passes for every input, whatever its extension.
pub const JAVASCRIPT_MIME: &str = "application/javascript";

const JAVASCRIPT_MIME_PATTERN: &str = r"^(application|text)/(x-)?(java|ecma)script$";

pub trait Minifier {
	fn minify(&self, source: &[u8], output: &mut Vec<u8>) -> Result<(), EngineError>;
}

/// JavaScript minifier that compresses and strips whitespace and comments
/// but never renames an identifier.
#[derive(Debug, Default)]
pub struct JsMinifier;

impl JsMinifier {
	fn options() -> MinifierOptions {
		MinifierOptions {
			mangle: None,
			compress: Some(CompressOptions::default()),
		}
	}
}

impl Minifier for JsMinifier {
	fn minify(&self, source: &[u8], output: &mut Vec<u8>) -> Result<(), EngineError> {
		let code = std::str::from_utf8(source)?;
		let allocator = Allocator::default();
		// plain script, so top-level bindings stay globals
		let mut parsed = Parser::new(&allocator, code, SourceType::cjs()).parse();

		if parsed.panicked || !parsed.errors.is_empty() {
			let message = parsed.errors
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join("; ");
			return Err(EngineError::Syntax(message));
		}

		let minified = Compressor::new(Self::options()).build(&allocator, &mut parsed.program);

		let codegen = Codegen::new()
			.with_options(CodegenOptions {
				source_map_path: None,
				minify: true,
				comments: CommentOptions::disabled(),
				..CodegenOptions::default()
			})
			.with_scoping(minified.scoping)
			.build(&parsed.program);

		output.extend_from_slice(codegen.code.as_bytes());

		Ok(())
	}
}

/// Minifiers keyed by mimetype pattern. The first matching pattern wins.
#[derive(Default)]
pub struct Registry {
	entries: Vec<(Regex, Box<dyn Minifier>)>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn javascript() -> Result<Self, regex::Error> {
		let mut registry = Self::new();
		registry.add_regexp(Regex::new(JAVASCRIPT_MIME_PATTERN)?, JsMinifier);

		Ok(registry)
	}

	pub fn add_regexp(&mut self, pattern: Regex, minifier: impl Minifier + 'static) {
		self.entries.push((pattern, Box::new(minifier)));
	}

	pub fn minify(&self, mime: &str, source: &[u8], output: &mut Vec<u8>) -> Result<(), EngineError> {
		let (_, minifier) = self.entries
			.iter()
			.find(|(pattern, _)| pattern.is_match(mime))
			.ok_or_else(|| EngineError::Unsupported(mime.to_string()))?;

		minifier.minify(source, output)
	}
}
