//! Encoder jobs and the executors that run them.

/// Execution seam between the compiler and whatever runs the encoder.
pub mod executor;
/// `ffmpeg`-based executor (system binary on `PATH`).
pub mod ffmpeg;
/// Compiled job descriptor and its argument serialization.
pub mod job;
