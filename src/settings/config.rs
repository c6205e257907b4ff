use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::require_positive_secs;
use crate::foundation::error::{ReelError, ReelResult};

/// Base display duration `P` of every still, in seconds.
pub const DEFAULT_PHOTO_DURATION_S: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the fade strategy places its pairwise blends on the timeline.
pub enum FadeOffsetMode {
    /// Blend `i` starts at `P * (i + 1)`, like every other strategy.
    #[default]
    Accumulate,
    /// Every blend starts at `P`, and the exit fade starts at `P`.
    ///
    /// Reproduces an older behavior that stacks all fade blends at the same instant; only useful
    /// for byte-compatibility with jobs produced that way.
    Constant,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Fixed encoder parameters appended after the output mapping.
pub struct EncoderParams {
    /// Video codec (`-c:v`).
    pub video_codec: String,
    /// Encoder preset (`-preset`).
    pub preset: String,
    /// Constant rate factor (`-crf`).
    pub crf: u8,
    /// Output pixel format (`-pix_fmt`).
    pub pix_fmt: String,
    /// Audio codec (`-c:a`), only used when a soundtrack is present.
    pub audio_codec: String,
    /// Audio bitrate (`-b:a`), only used when a soundtrack is present.
    pub audio_bitrate: String,
}

impl Default for EncoderParams {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_owned(),
            preset: "medium".to_owned(),
            crf: 23,
            pix_fmt: "yuv420p".to_owned(),
            audio_codec: "aac".to_owned(),
            audio_bitrate: "192k".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Immutable compiler configuration.
///
/// Holds the values that are constants for an end user but that tests and integrators may want to
/// vary: the per-image display duration, encoder parameters, and the fade offset policy.
pub struct CompileConfig {
    /// Base display duration `P` in seconds.
    pub photo_duration_s: f64,
    /// Encoder parameters.
    pub encoder: EncoderParams,
    /// Fade strategy offset policy.
    pub fade_offsets: FadeOffsetMode,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            photo_duration_s: DEFAULT_PHOTO_DURATION_S,
            encoder: EncoderParams::default(),
            fade_offsets: FadeOffsetMode::Accumulate,
        }
    }
}

impl CompileConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse compile config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open compile config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> ReelResult<()> {
        require_positive_secs("photo_duration_s", self.photo_duration_s)?;
        let enc = &self.encoder;
        for (name, v) in [
            ("encoder.video_codec", &enc.video_codec),
            ("encoder.preset", &enc.preset),
            ("encoder.pix_fmt", &enc.pix_fmt),
            ("encoder.audio_codec", &enc.audio_codec),
            ("encoder.audio_bitrate", &enc.audio_bitrate),
        ] {
            if v.trim().is_empty() {
                return Err(ReelError::validation(format!("{name} must be non-empty")));
            }
        }
        if enc.crf > 51 {
            return Err(ReelError::validation("encoder.crf must be in 0..=51"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/config.rs"]
mod tests;
