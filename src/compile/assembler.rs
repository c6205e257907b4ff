use std::path::Path;

use crate::compile::dimensions::resolve_dimensions;
use crate::compile::sources::{normalize_sources, normalized_label};
use crate::compile::timeline::Timeline;
use crate::effects::transitions::{ChainParams, TransitionStrategy};
use crate::encode::job::{AudioMapping, InputClause, JobDescriptor, OUTPUT_VIDEO_PAD};
use crate::foundation::core::Dimensions;
use crate::foundation::error::{ReelError, ReelResult};
use crate::graph::filter_graph::FilterGraph;
use crate::settings::config::CompileConfig;
use crate::settings::model::{ImageInput, MediaSource, Settings, SlideshowRequest};

/// Compiles ordered stills plus style settings into a [`JobDescriptor`].
///
/// The compiler is pure: it performs no IO, holds no state between calls, and yields identical
/// descriptors for identical inputs.
#[derive(Clone, Debug, Default)]
pub struct SlideshowCompiler {
    cfg: CompileConfig,
}

impl SlideshowCompiler {
    /// Create a compiler after validating `cfg`.
    pub fn new(cfg: CompileConfig) -> ReelResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// The configuration in use.
    pub fn config(&self) -> &CompileConfig {
        &self.cfg
    }

    /// Compile a [`SlideshowRequest`].
    pub fn compile_request(&self, req: &SlideshowRequest) -> ReelResult<JobDescriptor> {
        self.assemble(
            &req.images,
            req.audio.as_deref(),
            &req.settings,
            &req.output,
        )
    }

    /// Build the job for `images` (in playback order) with an optional soundtrack.
    #[tracing::instrument(skip_all, fields(images = images.len(), kind = settings.transition_kind.as_str()))]
    pub fn assemble(
        &self,
        images: &[ImageInput],
        audio: Option<&Path>,
        settings: &Settings,
        output: &Path,
    ) -> ReelResult<JobDescriptor> {
        if images.is_empty() {
            return Err(ReelError::InvalidInputCount);
        }
        if output.as_os_str().is_empty() {
            return Err(ReelError::validation("output path must be non-empty"));
        }
        for (index, img) in images.iter().enumerate() {
            require_utf8_path(&img.path, &format!("image {index}"))?;
        }
        if let Some(path) = audio {
            require_utf8_path(path, "audio")?;
        }
        require_utf8_path(output, "output")?;

        let canvas = resolve_dimensions(settings.aspect_ratio);
        let timeline = Timeline::new(self.cfg.photo_duration_s, settings.transition_duration)?;
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            window_s = timeline.window(),
            "resolved canvas and timeline"
        );

        let sources = media_sources(images, &timeline);
        warn_on_upscale(images, canvas);

        let input_count = sources.len() + usize::from(audio.is_some());
        let mut graph = FilterGraph::new(input_count);
        for node in normalize_sources(&sources, canvas) {
            graph.push(node)?;
        }

        let labels: Vec<String> = sources.iter().map(|s| normalized_label(s.index)).collect();
        let strategy = TransitionStrategy::for_kind(settings.transition_kind, self.cfg.fade_offsets);
        let duration_s = strategy.stream_duration(&timeline, sources.len());
        strategy.build(
            &ChainParams {
                sources: &labels,
                timeline: &timeline,
                output_pad: OUTPUT_VIDEO_PAD,
                output_pix_fmt: &self.cfg.encoder.pix_fmt,
            },
            &mut graph,
        )?;
        graph.validate(OUTPUT_VIDEO_PAD)?;
        tracing::debug!(
            nodes = graph.nodes().len(),
            offsets = ?timeline.offsets(sources.len()),
            "filter graph assembled"
        );

        let mut inputs: Vec<InputClause> = sources
            .iter()
            .map(|s| InputClause::LoopedStill {
                path: s.path.clone(),
                hold_s: s.display_window_s,
            })
            .collect();
        let audio_map = audio.map(|path| {
            inputs.push(InputClause::Audio {
                path: path.to_path_buf(),
            });
            AudioMapping {
                input_index: sources.len(),
            }
        });

        Ok(JobDescriptor {
            inputs,
            graph,
            video_pad: OUTPUT_VIDEO_PAD.to_owned(),
            audio: audio_map,
            encoder: self.cfg.encoder.clone(),
            output_path: output.to_path_buf(),
            dimensions: canvas,
            duration_s,
        })
    }
}

/// Compile with the default configuration.
pub fn assemble(
    images: &[ImageInput],
    audio: Option<&Path>,
    settings: &Settings,
    output: &Path,
) -> ReelResult<JobDescriptor> {
    SlideshowCompiler::default().assemble(images, audio, settings, output)
}

fn media_sources(images: &[ImageInput], timeline: &Timeline) -> Vec<MediaSource> {
    images
        .iter()
        .enumerate()
        .map(|(index, img)| MediaSource {
            index,
            path: img.path.clone(),
            display_window_s: timeline.window(),
        })
        .collect()
}

// Arguments are passed to the encoder as UTF-8 text; a lossy conversion would name another file.
fn require_utf8_path(path: &Path, what: &str) -> ReelResult<()> {
    match path.to_str() {
        Some(_) => Ok(()),
        None => Err(ReelError::validation(format!(
            "{what} path is not valid UTF-8: {}",
            path.display()
        ))),
    }
}

// Cover-scaling enlarges the image when either side is below the canvas.
fn needs_upscale(width: u32, height: u32, canvas: Dimensions) -> bool {
    width < canvas.width || height < canvas.height
}

fn warn_on_upscale(images: &[ImageInput], canvas: Dimensions) {
    for (index, img) in images.iter().enumerate() {
        if let (Some(w), Some(h)) = (img.width, img.height)
            && needs_upscale(w, h, canvas)
        {
            tracing::warn!(
                index,
                path = %img.path.display(),
                width = w,
                height = h,
                "image is smaller than the canvas and will be upscaled"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/assembler.rs"]
mod tests;
