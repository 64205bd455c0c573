use crate::error::Error;
use crate::types::Config;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Reads the config as JSON, whatever the file is called.
pub async fn load(path: &Path) -> Result<Config, Error> {
	let contents = tokio::fs::read(path).await.map_err(|source| Error::Read {
		path: path.to_path_buf(),
		source,
	})?;

	parse(&contents).map_err(|source| Error::Parse {
		path: path.to_path_buf(),
		source,
	})
}

pub fn parse(contents: &[u8]) -> Result<Config, serde_json::Error> {
	// a bare `null` document decodes to nothing, like an empty object
	let config: Option<Config> = serde_json::from_slice(contents)?;
	Ok(config.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn json(text: &str) -> Result<Config, serde_json::Error> {
		parse(text.as_bytes())
	}

	#[test]
	fn reads_files_in_order() {
		let config = json(r#"{"files": ["path/to/a.js", "path/to/b.js"]}"#).unwrap();

		assert_eq!(config.files, vec!["path/to/a.js", "path/to/b.js"]);
	}

	#[test]
	fn ignores_unknown_keys() {
		let config = json(r#"{"output": "dist", "files": ["x.js"], "minify": {"css": true}}"#).unwrap();

		assert_eq!(config, Config::new(["x.js"]));
	}

	#[test]
	fn missing_or_null_files_is_empty() {
		assert!(json("{}").unwrap().is_empty());
		assert!(json(r#"{"files": null}"#).unwrap().is_empty());
		assert!(json(r#"{"files": []}"#).unwrap().is_empty());
		assert!(json("null").unwrap().is_empty());
	}

	#[test]
	fn rejects_malformed_json() {
		assert!(json("{\"files\": [\"a.js\"").is_err());
		assert!(json("files = [\"a.js\"]").is_err());
		assert!(parse(&[0xff, 0xfe]).is_err());
	}

	#[test]
	fn rejects_wrong_shape() {
		assert!(json(r#"{"files": "a.js"}"#).is_err());
		assert!(json(r#"{"files": ["a.js", 3]}"#).is_err());
		assert!(json(r#""a.js""#).is_err());
	}

	#[tokio::test]
	async fn load_reports_unreadable_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");

		let err = load(&path).await.unwrap_err();

		assert!(matches!(err, Error::Read { path: ref p, .. } if *p == path));
	}

	#[tokio::test]
	async fn load_reports_malformed_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.json");
		std::fs::write(&path, "{ not json").unwrap();

		let err = load(&path).await.unwrap_err();

		assert!(matches!(err, Error::Parse { path: ref p, .. } if *p == path));
	}

	#[tokio::test]
	async fn load_decodes_json_regardless_of_extension() {
		let dir = tempfile::tempdir().unwrap();

		for name in ["build.toml", "minify.conf", "config"] {
			let path = dir.path().join(name);
			std::fs::write(&path, r#"{"files": ["x.js"]}"#).unwrap();

			assert_eq!(load(&path).await.unwrap(), Config::new(["x.js"]), "{name}");
		}
	}
}
