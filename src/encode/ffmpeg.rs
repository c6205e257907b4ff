use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::encode::executor::JobExecutor;
use crate::encode::job::JobDescriptor;
use crate::foundation::error::{ReelError, ReelResult};

/// Options for [`FfmpegExecutor`].
#[derive(Clone, Debug)]
pub struct FfmpegExecutorOpts {
    /// Program to invoke.
    pub program: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
}

impl Default for FfmpegExecutorOpts {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffmpeg"),
            overwrite: true,
        }
    }
}

/// Executor that runs the system `ffmpeg` with the job's arguments and waits for it.
#[derive(Clone, Debug, Default)]
pub struct FfmpegExecutor {
    opts: FfmpegExecutorOpts,
}

impl FfmpegExecutor {
    /// Create an executor with `opts`.
    pub fn new(opts: FfmpegExecutorOpts) -> Self {
        Self { opts }
    }

    /// Full argument list passed to the program, including the global flags.
    pub fn command_args(&self, job: &JobDescriptor) -> Vec<String> {
        let mut args = vec![
            if self.opts.overwrite { "-y" } else { "-n" }.to_owned(),
            "-loglevel".to_owned(),
            "error".to_owned(),
        ];
        args.extend(job.to_args());
        args
    }
}

impl JobExecutor for FfmpegExecutor {
    #[tracing::instrument(skip_all, fields(out = %job.output_path.display()))]
    fn execute(&mut self, job: &JobDescriptor) -> ReelResult<PathBuf> {
        if !is_program_on_path(&self.opts.program) {
            return Err(ReelError::execution(format!(
                "'{}' is required for rendering, but was not found",
                self.opts.program.display()
            )));
        }
        if !self.opts.overwrite && job.output_path.exists() {
            return Err(ReelError::validation(format!(
                "output file '{}' already exists",
                job.output_path.display()
            )));
        }
        ensure_parent_dir(&job.output_path)?;

        let mut child = Command::new(&self.opts.program)
            .args(self.command_args(job))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ReelError::execution(format!(
                    "failed to spawn '{}': {e}",
                    self.opts.program.display()
                ))
            })?;

        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| ReelError::execution("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || -> std::io::Result<Vec<u8>> {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        let status = child.wait().map_err(|e| {
            ReelError::execution(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = stderr_drain
            .join()
            .map_err(|_| ReelError::execution("ffmpeg stderr drain thread panicked"))?
            .map_err(|e| ReelError::execution(format!("ffmpeg stderr read failed: {e}")))?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(ReelError::execution(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        tracing::info!(duration_s = job.duration_s, "render finished");
        Ok(job.output_path.clone())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ReelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn is_program_on_path(program: &Path) -> bool {
    Command::new(program)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
