//! reelgraph compiles still-image slideshows into encoder jobs.
//!
//! Given an ordered list of images and three style options (transition kind, transition
//! duration, aspect ratio), the compiler produces a [`JobDescriptor`]: looped-still input
//! declarations, an ffmpeg-compatible filter graph, output mapping, and fixed encoder parameters.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: aspect ratio -> canvas [`Dimensions`]; `P` and `D` -> [`Timeline`]
//! 2. **Normalize**: one scale/crop/setsar/format node per image (`[i:v] ... [v{i}]`)
//! 3. **Chain**: a [`TransitionStrategy`] threads the normalized streams through `N - 1` blends
//! 4. **Assemble**: inputs, graph, mapping and encoder parameters become a [`JobDescriptor`]
//! 5. **Execute** (optional): a [`JobExecutor`] such as [`FfmpegExecutor`] runs the job
//!
//! Compilation is pure and deterministic; the filter graph is held as structured nodes and only
//! turned into `filter_complex` text at the very end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod effects;
mod encode;
mod foundation;
mod graph;
mod settings;

pub use compile::assembler::{SlideshowCompiler, assemble};
pub use compile::dimensions::{resolve_dimensions, resolve_dimensions_str};
pub use compile::fingerprint::{JobFingerprint, fingerprint_job};
pub use compile::sources::{BLEND_PIX_FMT, normalize_source, normalize_sources, normalized_label};
pub use compile::timeline::Timeline;
pub use effects::transitions::{ChainParams, TransitionStrategy};
pub use encode::executor::{JobExecutor, RecordingExecutor};
pub use encode::ffmpeg::{FfmpegExecutor, FfmpegExecutorOpts, ensure_parent_dir};
pub use encode::job::{AudioMapping, InputClause, JobDescriptor, OUTPUT_VIDEO_PAD};
pub use foundation::core::{Dimensions, fmt_secs};
pub use foundation::error::{ReelError, ReelResult};
pub use graph::filter_graph::FilterGraph;
pub use graph::node::{
    FadeDirection, FilterNode, FilterOp, NodeRole, PadRef, StreamKind, XfadeTransition,
};
pub use settings::config::{CompileConfig, DEFAULT_PHOTO_DURATION_S, EncoderParams, FadeOffsetMode};
pub use settings::model::{
    AspectRatio, ImageInput, MediaSource, Settings, SlideshowRequest, TransitionKind,
};
