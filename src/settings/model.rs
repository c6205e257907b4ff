use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{ReelError, ReelResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Visual style used to blend consecutive images.
///
/// Parsing is lenient: any selector outside the closed set resolves to [`TransitionKind::Dissolve`].
pub enum TransitionKind {
    /// Per-image fade-in, fade blends, and a final fade-out.
    Fade,
    /// Cross-dissolve between consecutive images.
    #[default]
    Dissolve,
    /// Next image slides in from the right, pushing left.
    SlideLeft,
    /// Next image slides in from the left, pushing right.
    SlideRight,
    /// Zoom-in blend.
    Zoom,
}

impl TransitionKind {
    /// Every supported kind, in selector order.
    pub const ALL: [TransitionKind; 5] = [
        Self::Fade,
        Self::Dissolve,
        Self::SlideLeft,
        Self::SlideRight,
        Self::Zoom,
    ];

    /// Parse a selector, falling back to dissolve for unknown values.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "fade" => Self::Fade,
            "dissolve" => Self::Dissolve,
            "slide_left" | "slideleft" => Self::SlideLeft,
            "slide_right" | "slideright" => Self::SlideRight,
            "zoom" | "zoomin" => Self::Zoom,
            other => {
                tracing::warn!(selector = other, "unknown transition kind, using dissolve");
                Self::Dissolve
            }
        }
    }

    /// Canonical selector string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Dissolve => "dissolve",
            Self::SlideLeft => "slide_left",
            Self::SlideRight => "slide_right",
            Self::Zoom => "zoom",
        }
    }
}

impl From<String> for TransitionKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TransitionKind> for String {
    fn from(k: TransitionKind) -> Self {
        k.as_str().to_owned()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
/// Target aspect-ratio selector.
///
/// Unknown selectors resolve to [`AspectRatio::Landscape16x9`].
pub enum AspectRatio {
    /// `9:16` portrait.
    Portrait9x16,
    /// `16:9` landscape.
    #[default]
    Landscape16x9,
    /// `1:1` square.
    Square1x1,
    /// `4:5` portrait (social feed).
    Portrait4x5,
}

impl AspectRatio {
    /// Every supported ratio, in selector order.
    pub const ALL: [AspectRatio; 4] = [
        Self::Portrait9x16,
        Self::Landscape16x9,
        Self::Square1x1,
        Self::Portrait4x5,
    ];

    /// Parse a selector, falling back to 16:9 for unknown values.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "9:16" => Self::Portrait9x16,
            "16:9" => Self::Landscape16x9,
            "1:1" => Self::Square1x1,
            "4:5" => Self::Portrait4x5,
            other => {
                tracing::warn!(selector = other, "unknown aspect ratio, using 16:9");
                Self::Landscape16x9
            }
        }
    }

    /// Canonical selector string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait9x16 => "9:16",
            Self::Landscape16x9 => "16:9",
            Self::Square1x1 => "1:1",
            Self::Portrait4x5 => "4:5",
        }
    }
}

impl From<String> for AspectRatio {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<AspectRatio> for String {
    fn from(r: AspectRatio) -> Self {
        r.as_str().to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// User-facing style options for one slideshow.
pub struct Settings {
    /// Blend style between consecutive images.
    #[serde(default, alias = "transition")]
    pub transition_kind: TransitionKind,
    /// Blend length in seconds (must be > 0).
    #[serde(default = "default_transition_duration", alias = "duration")]
    pub transition_duration: f64,
    /// Output canvas aspect ratio.
    #[serde(default, alias = "aspectRatio")]
    pub aspect_ratio: AspectRatio,
}

fn default_transition_duration() -> f64 {
    0.8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_kind: TransitionKind::Dissolve,
            transition_duration: default_transition_duration(),
            aspect_ratio: AspectRatio::Landscape16x9,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One selected still image, as handed over by the photo picker.
pub struct ImageInput {
    /// Image file path.
    pub path: PathBuf,
    /// Source pixel width, when known.
    #[serde(default)]
    pub width: Option<u32>,
    /// Source pixel height, when known.
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageInput {
    /// An image with unknown pixel dimensions.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: None,
            height: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Image source placed on the timeline.
///
/// `index` is the position in the ordered input (and the encoder input number).
pub struct MediaSource {
    /// 0-based position in the sequence.
    pub index: usize,
    /// Image file path.
    pub path: PathBuf,
    /// Seconds the looped still is held for (`P + D`).
    pub display_window_s: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete compile request: ordered images, optional soundtrack, style settings, destination.
pub struct SlideshowRequest {
    /// Ordered images; order is playback order.
    pub images: Vec<ImageInput>,
    /// Optional soundtrack muxed alongside the video.
    #[serde(default)]
    pub audio: Option<PathBuf>,
    /// Style settings.
    #[serde(default)]
    pub settings: Settings,
    /// Output video path.
    pub output: PathBuf,
}

impl SlideshowRequest {
    /// Parse a request from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse slideshow request JSON: {e}")))
    }

    /// Parse a request from a JSON file on disk.
    ///
    /// Relative image/audio/output paths are kept as written; they are resolved by whatever runs
    /// the encoder.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open slideshow request '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/model.rs"]
mod tests;
