use crate::paths;
use std::path::PathBuf;
use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct Config {
	/// Input files, processed in this order
	#[serde(default, deserialize_with = "null_as_empty")]
	pub files: Vec<String>,
}

impl Config {
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

#[cfg(test)]
impl Config {
	pub fn new<S: Into<String>>(files: impl IntoIterator<Item = S>) -> Self {
		Self {
			files: files.into_iter().map(Into::into).collect(),
		}
	}
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One input file and the sibling it gets minified into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileJob {
	pub input: PathBuf,
	pub output: PathBuf,
}

impl FileJob {
	pub fn new(input: &str) -> Self {
		Self {
			input: PathBuf::from(input),
			output: PathBuf::from(paths::min_path(input)),
		}
	}
}
