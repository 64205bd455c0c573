use crate::engine::{Registry, JAVASCRIPT_MIME};
use crate::error::{EngineError, Error};
use crate::types::{Config, FileJob};
use color_print::*;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct JobReport {
	pub bytes_in: u64,
	pub bytes_out: u64,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
	pub files: usize,
	pub bytes_in: u64,
	pub bytes_out: u64,
}

impl Summary {
	fn add(&mut self, report: JobReport) {
		self.files += 1;
		self.bytes_in += report.bytes_in;
		self.bytes_out += report.bytes_out;
	}
}

/// Minify every configured file in order, stopping at the first failure.
///
/// Outputs written before a failure are left on disk.
pub async fn run(config: &Config, registry: &Registry) -> Result<Summary, Error> {
	let mut summary = Summary::default();

	for input in &config.files {
		let job = FileJob::new(input);
		let report = process(&job, registry).await?;

		cprintln!(
			"<g>Minified</> {} <s>=></> {} ({} -> {} bytes)",
			job.input.display(),
			job.output.display(),
			report.bytes_in,
			report.bytes_out
		);

		summary.add(report);
	}

	Ok(summary)
}

pub async fn process(job: &FileJob, registry: &Registry) -> Result<JobReport, Error> {
	let mut input = File::open(&job.input).await.map_err(|source| Error::Open {
		path: job.input.clone(),
		source,
	})?;

	let mut output = File::create(&job.output).await.map_err(|source| Error::Create {
		path: job.output.clone(),
		source,
	})?;

	let minify_error = |source: EngineError| Error::Minify {
		input: job.input.clone(),
		output: job.output.clone(),
		source,
	};

	let mut source = Vec::new();
	input.read_to_end(&mut source).await.map_err(|e| minify_error(e.into()))?;

	let mut minified = Vec::with_capacity(source.len());
	registry.minify(JAVASCRIPT_MIME, &source, &mut minified).map_err(minify_error)?;

	output.write_all(&minified).await.map_err(|e| minify_error(e.into()))?;
	output.flush().await.map_err(|e| minify_error(e.into()))?;

	Ok(JobReport {
		bytes_in: source.len() as u64,
		bytes_out: minified.len() as u64,
	})
}
