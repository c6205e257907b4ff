use std::fmt;

use crate::foundation::core::{Dimensions, fmt_secs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Stream type selected from an encoder input.
pub enum StreamKind {
    /// `v` stream specifier.
    Video,
    /// `a` stream specifier.
    Audio,
}

impl StreamKind {
    fn specifier(self) -> &'static str {
        match self {
            Self::Video => "v",
            Self::Audio => "a",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Reference to a stream entering or leaving a filter node.
pub enum PadRef {
    /// A stream of encoder input `input`, rendered `[input:v]`.
    Source {
        /// Encoder input number.
        input: usize,
        /// Stream type.
        stream: StreamKind,
    },
    /// The output of another node, rendered `[name]`.
    Label(String),
}

impl PadRef {
    /// Video stream of encoder input `input`.
    pub fn source_video(input: usize) -> Self {
        Self::Source {
            input,
            stream: StreamKind::Video,
        }
    }

    /// Named link pad.
    pub fn label(name: impl Into<String>) -> Self {
        Self::Label(name.into())
    }

    /// Link name, if this is a [`PadRef::Label`].
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(s) => Some(s),
            Self::Source { .. } => None,
        }
    }
}

impl fmt::Display for PadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source { input, stream } => write!(f, "[{input}:{}]", stream.specifier()),
            Self::Label(name) => write!(f, "[{name}]"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Direction of a `fade` filter.
pub enum FadeDirection {
    /// Fade in from black.
    In,
    /// Fade out to black.
    Out,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// `xfade` transition names used by the blend strategies.
pub enum XfadeTransition {
    /// `fade`
    Fade,
    /// `dissolve`
    Dissolve,
    /// `slideleft`
    SlideLeft,
    /// `slideright`
    SlideRight,
    /// `zoomin`
    ZoomIn,
}

impl XfadeTransition {
    /// Name understood by the `xfade` filter.
    pub fn ffmpeg_name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Dissolve => "dissolve",
            Self::SlideLeft => "slideleft",
            Self::SlideRight => "slideright",
            Self::ZoomIn => "zoomin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
/// One filter applied inside a node.
pub enum FilterOp {
    /// Scale to cover `size` while preserving aspect ratio (`force_original_aspect_ratio=increase`).
    ScaleCover {
        /// Canvas to cover.
        size: Dimensions,
    },
    /// Center-crop to exactly `size`.
    Crop {
        /// Crop size.
        size: Dimensions,
    },
    /// Force square sample aspect ratio.
    SetSarSquare,
    /// Convert pixel format.
    Format {
        /// ffmpeg pixel format name.
        pix_fmt: String,
    },
    /// Fade from/to black.
    Fade {
        /// In or out.
        direction: FadeDirection,
        /// Start time in seconds.
        start_s: f64,
        /// Fade length in seconds.
        duration_s: f64,
    },
    /// Time-offset blend of two inputs.
    Xfade {
        /// Blend style.
        transition: XfadeTransition,
        /// Blend length in seconds.
        duration_s: f64,
        /// Blend start on the first input's timeline, in seconds.
        offset_s: f64,
    },
}

impl FilterOp {
    /// Number of input pads this filter consumes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Xfade { .. } => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleCover { size } => write!(
                f,
                "scale={}:force_original_aspect_ratio=increase",
                size.colon_pair()
            ),
            Self::Crop { size } => write!(f, "crop={}", size.colon_pair()),
            Self::SetSarSquare => f.write_str("setsar=1"),
            Self::Format { pix_fmt } => write!(f, "format={pix_fmt}"),
            Self::Fade {
                direction,
                start_s,
                duration_s,
            } => {
                let t = match direction {
                    FadeDirection::In => "in",
                    FadeDirection::Out => "out",
                };
                write!(
                    f,
                    "fade=t={t}:st={}:d={}",
                    fmt_secs(*start_s),
                    fmt_secs(*duration_s)
                )
            }
            Self::Xfade {
                transition,
                duration_s,
                offset_s,
            } => write!(
                f,
                "xfade=transition={}:duration={}:offset={}",
                transition.ffmpeg_name(),
                fmt_secs(*duration_s),
                fmt_secs(*offset_s)
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// What a node contributes to the slideshow.
pub enum NodeRole {
    /// Per-source scale/crop/format normalization.
    Normalize,
    /// Per-source entrance effect (fade-in).
    Entrance,
    /// Binary blend between consecutive sources.
    Transition,
    /// Final formatting feeding the terminal video pad.
    Output,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A node of the filter graph: a filter chain with ordered input and output pads.
pub struct FilterNode {
    /// Unique node name.
    pub label: String,
    /// Role in the slideshow graph.
    pub role: NodeRole,
    /// Filters applied in order (`,`-joined when serialized).
    pub ops: Vec<FilterOp>,
    /// Ordered input pads.
    pub inputs: Vec<PadRef>,
    /// Ordered output link names.
    pub outputs: Vec<String>,
}

impl FilterNode {
    /// Single-output node.
    pub fn new(
        label: impl Into<String>,
        role: NodeRole,
        inputs: Vec<PadRef>,
        ops: Vec<FilterOp>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            role,
            ops,
            inputs,
            outputs: vec![output.into()],
        }
    }

    /// The `[in]...op,op[out]` statement for `filter_complex`.
    pub fn statement(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pad in &self.inputs {
            write!(f, "{pad}")?;
        }
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{op}")?;
        }
        for out in &self.outputs {
            write!(f, "[{out}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/node.rs"]
mod tests;
