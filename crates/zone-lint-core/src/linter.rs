//! Batch validation of zone-tagged files.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::info;

use crate::context::RunContext;
use crate::engine::{FileFindings, RuleEngine};
use crate::types::LintReport;

/// Errors that can occur while running a batch.
#[derive(Debug, thiserror::Error)]
pub enum LinterError {
    /// The worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A file to validate and the zone it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Zone name used to bucket its violations.
    pub zone: String,
}

impl SourceFile {
    /// Creates a new source file record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, zone: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            zone: zone.into(),
        }
    }
}

/// Validates independent files on a bounded worker pool.
pub struct Linter<'a> {
    engine: &'a RuleEngine,
    jobs: Option<usize>,
}

impl<'a> Linter<'a> {
    /// Creates a linter over an initialized engine.
    #[must_use]
    pub fn new(engine: &'a RuleEngine) -> Self {
        Self { engine, jobs: None }
    }

    /// Sets the worker count; `None` or `0` means available parallelism.
    #[must_use]
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|&n| n > 0);
        self
    }

    /// Validates every file and assembles the per-zone report.
    ///
    /// Violations appear in input order regardless of scheduling. Every
    /// listed zone gets a bucket, even when it has no violations.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created.
    pub fn run(&self, files: &[SourceFile]) -> Result<LintReport, LinterError> {
        info!("Validating {} files", files.len());

        let run = RunContext::new();
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            builder = builder.num_threads(jobs);
        }
        let pool = builder.build()?;

        let findings: Vec<FileFindings> = pool.install(|| {
            files
                .par_iter()
                .map(|file| self.engine.inspect_file(&file.path))
                .collect()
        });

        // Directory plug-ins report each directory once per run; finishing in
        // input order makes the first listed file own the report.
        let mut report = LintReport::new();
        for (file, findings) in files.iter().zip(findings) {
            let violations = self.engine.finish_file(&file.path, findings, &run);
            report.extend_zone(&file.zone, violations);
        }
        report.files_checked = files.len();

        info!(
            "Validation complete: {} violations in {} files",
            report.total(),
            report.files_checked
        );
        Ok(report)
    }
}
