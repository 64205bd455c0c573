mod config;
mod driver;
mod engine;
mod error;
mod paths;
mod types;

use std::ffi::OsString;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use color_print::*;
use colored::Colorize;

/// Long flags that may also be spelled with a single dash, e.g. `-config app.json`.
const SINGLE_DASH_FLAGS: &[&str] = &["config", "help", "version"];

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
	/// Path to configuration file
	#[arg(long, value_name = "PATH", default_value = config::DEFAULT_CONFIG_PATH)]
	config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let cli = Cli::parse_from(normalize_args(std::env::args_os()));

	if let Err(err) = run(cli).await {
		ceprintln!("<r!><s>Error:</></> {:#}", err);
		std::process::exit(1); // general error
	}
}

async fn run(cli: Cli) -> Result<()> {
	let config = config::load(&cli.config).await?;

	cprintln!("<b!>Using config:</> <w><s>{}</></>", cli.config.display());

	if config.is_empty() {
		cprintln!("<y>Nothing to minify in</> {}", cli.config.display());
		return Ok(());
	}

	let registry = engine::Registry::javascript().context("build minifier registry")?;
	let summary = driver::run(&config, &registry).await?;

	println!(
		"{} {} file(s), {} -> {} bytes",
		"Done:".bright_green().bold(),
		summary.files,
		summary.bytes_in,
		summary.bytes_out
	);

	Ok(())
}

/// Rewrites `-config` / `-config=x` style arguments into their `--` form.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
	let mut args = args.into_iter();
	let mut normalized: Vec<OsString> = args.next().into_iter().collect();
	let mut escaped = false;

	for arg in args {
		if escaped {
			normalized.push(arg);
			continue;
		}

		let rewritten = arg.to_str().and_then(|s| {
			let flag = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
			let name = flag.split_once('=').map_or(flag, |(name, _)| name);
			SINGLE_DASH_FLAGS.contains(&name).then(|| OsString::from(format!("-{s}")))
		});

		escaped = arg == "--";
		normalized.push(rewritten.unwrap_or(arg));
	}

	normalized
}
