use std::io;
use std::path::PathBuf;

/// Failures of a single run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("read config file {} failed", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("parse config file {} failed", .path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("open input file {} failed", .path.display())]
	Open {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("create output {} failed", .path.display())]
	Create {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("minify {} => {} failed", .input.display(), .output.display())]
	Minify {
		input: PathBuf,
		output: PathBuf,
		#[source]
		source: EngineError,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
	#[error("no minifier registered for mimetype `{0}`")]
	Unsupported(String),

	#[error("syntax error: {0}")]
	Syntax(String),

	#[error("source is not valid UTF-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	#[error(transparent)]
	Io(#[from] io::Error),
}
