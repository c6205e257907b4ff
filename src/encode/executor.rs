use std::path::PathBuf;

use crate::encode::job::JobDescriptor;
use crate::foundation::error::ReelResult;

/// Runs a compiled job and reports where the result was written.
///
/// Implementations own everything after compilation: spawning the encoder, supervising it, and
/// surfacing its failure.
pub trait JobExecutor {
    /// Execute `job`, returning the output path on success.
    fn execute(&mut self, job: &JobDescriptor) -> ReelResult<PathBuf>;
}

/// In-memory executor for tests and dry runs: records jobs without running anything.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    jobs: Vec<JobDescriptor>,
}

impl RecordingExecutor {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs received so far, in call order.
    pub fn jobs(&self) -> &[JobDescriptor] {
        &self.jobs
    }
}

impl JobExecutor for RecordingExecutor {
    fn execute(&mut self, job: &JobDescriptor) -> ReelResult<PathBuf> {
        self.jobs.push(job.clone());
        Ok(job.output_path.clone())
    }
}
