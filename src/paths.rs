use std::path::is_separator;

/// An input path broken into the pieces the output name is built from.
#[derive(Debug, Eq, PartialEq)]
pub struct SplitPath<'a> {
	/// Cleaned directory, `.` when the path has none
	pub dir: String,
	/// Final segment without its extension
	pub name: &'a str,
	/// Last dot-delimited suffix of the final segment, dot included
	pub ext: &'a str,
}

pub fn split(path: &str) -> SplitPath<'_> {
	let dir = match path.rfind(is_separator) {
		Some(i) => clean(&path[..=i]),
		None => ".".to_string(),
	};

	let base = base(path);
	let ext = base.rfind('.').map_or("", |i| &base[i..]);
	let name = &base[..base.len() - ext.len()];

	SplitPath { dir, name, ext }
}

/// `<dir>/<name>-min<ext>` for the given input path.
///
/// A bare file name still gets an explicit `./` prefix.
pub fn min_path(path: &str) -> String {
	let SplitPath { dir, name, ext } = split(path);

	if dir.ends_with('/') {
		format!("{dir}{name}-min{ext}")
	} else {
		format!("{dir}/{name}-min{ext}")
	}
}

fn base(path: &str) -> &str {
	if path.is_empty() {
		return ".";
	}

	let trimmed = path.trim_end_matches(is_separator);

	if trimmed.is_empty() {
		return "/";
	}

	match trimmed.rfind(is_separator) {
		Some(i) => &trimmed[i + 1..],
		None => trimmed,
	}
}

// lexical only, never touches the filesystem
fn clean(path: &str) -> String {
	let rooted = path.starts_with(is_separator);
	let mut parts: Vec<&str> = Vec::new();

	for part in path.split(is_separator) {
		match part {
			"" | "." => {}
			".." => match parts.last() {
				Some(&last) if last != ".." => {
					parts.pop();
				}
				_ if rooted => {}
				_ => parts.push(".."),
			},
			_ => parts.push(part),
		}
	}

	let joined = parts.join("/");

	if rooted {
		format!("/{joined}")
	} else if joined.is_empty() {
		".".to_string()
	} else {
		joined
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn derives_sibling_in_same_directory() {
		assert_eq!(min_path("a/b.js"), "a/b-min.js");
		assert_eq!(min_path("web/webkit/src/lift.js"), "web/webkit/src/lift-min.js");
	}

	#[test]
	fn bare_name_gets_dot_directory() {
		assert_eq!(min_path("b.js"), "./b-min.js");
	}

	#[test]
	fn missing_extension_has_no_trailing_dot() {
		assert_eq!(min_path("a/b"), "a/b-min");
		assert_eq!(min_path("Makefile"), "./Makefile-min");
	}

	#[test]
	fn only_last_extension_is_split_off() {
		assert_eq!(min_path("vendor/jquery.ui.js"), "vendor/jquery.ui-min.js");
		assert_eq!(min_path("a.d/b"), "a.d/b-min");
	}

	#[test]
	fn dotfile_is_all_extension() {
		let split = split(".eslintrc");

		assert_eq!(split.name, "");
		assert_eq!(split.ext, ".eslintrc");
		assert_eq!(min_path(".eslintrc"), "./-min.eslintrc");
	}

	#[test]
	fn directory_is_cleaned() {
		assert_eq!(min_path("./a//./b.js"), "a/b-min.js");
		assert_eq!(min_path("a/../b.js"), "./b-min.js");
		assert_eq!(min_path("../lib/x.js"), "../lib/x-min.js");
	}

	#[test]
	fn absolute_paths_stay_absolute() {
		assert_eq!(min_path("/srv/www/app.js"), "/srv/www/app-min.js");
		assert_eq!(min_path("/app.js"), "/app-min.js");
		assert_eq!(min_path("/../app.js"), "/app-min.js");
	}

	#[test]
	fn split_exposes_all_parts() {
		assert_eq!(split("static/js/main.js"), SplitPath {
			dir: "static/js".to_string(),
			name: "main",
			ext: ".js",
		});
	}
}
