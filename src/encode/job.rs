use std::path::PathBuf;

use crate::foundation::core::{Dimensions, fmt_secs};
use crate::graph::filter_graph::FilterGraph;
use crate::settings::config::EncoderParams;

/// Terminal video pad of every compiled graph.
pub const OUTPUT_VIDEO_PAD: &str = "outv";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One encoder input declaration.
pub enum InputClause {
    /// Still image looped for `hold_s` seconds (`-loop 1 -t <hold_s> -i <path>`).
    LoopedStill {
        /// Image path.
        path: PathBuf,
        /// Seconds the still is held for.
        hold_s: f64,
    },
    /// Soundtrack file (`-i <path>`).
    Audio {
        /// Audio path.
        path: PathBuf,
    },
}

impl InputClause {
    fn push_args(&self, args: &mut Vec<String>) {
        match self {
            Self::LoopedStill { path, hold_s } => {
                args.extend([
                    "-loop".to_owned(),
                    "1".to_owned(),
                    "-t".to_owned(),
                    fmt_secs(*hold_s),
                    "-i".to_owned(),
                ]);
                args.push(path.to_string_lossy().into_owned());
            }
            Self::Audio { path } => {
                args.push("-i".to_owned());
                args.push(path.to_string_lossy().into_owned());
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Audio stream mapping; present only when a soundtrack input was declared.
pub struct AudioMapping {
    /// Encoder input number of the soundtrack.
    pub input_index: usize,
}

/// Fully specified encoder job: inputs, filter graph, output mapping, and encoder parameters.
///
/// Produced by [`crate::SlideshowCompiler`]; consumed by a [`crate::JobExecutor`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct JobDescriptor {
    /// Input declarations in encoder input order (stills first, then the optional soundtrack).
    pub inputs: Vec<InputClause>,
    /// The filter graph.
    pub graph: FilterGraph,
    /// Terminal video pad mapped to the output.
    pub video_pad: String,
    /// Audio mapping, when a soundtrack is present.
    pub audio: Option<AudioMapping>,
    /// Fixed encoder parameters.
    pub encoder: EncoderParams,
    /// Destination file.
    pub output_path: PathBuf,
    /// Output canvas.
    pub dimensions: Dimensions,
    /// Length of the composed video stream in seconds.
    pub duration_s: f64,
}

impl JobDescriptor {
    /// Encoder argument vector (without the program name), one element per argument.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for input in &self.inputs {
            input.push_args(&mut args);
        }
        args.push("-filter_complex".to_owned());
        args.push(self.graph.to_filter_complex());
        args.push("-map".to_owned());
        args.push(format!("[{}]", self.video_pad));
        if let Some(audio) = self.audio {
            args.push("-map".to_owned());
            args.push(format!("{}:a", audio.input_index));
        }

        let enc = &self.encoder;
        args.extend([
            "-c:v".to_owned(),
            enc.video_codec.clone(),
            "-preset".to_owned(),
            enc.preset.clone(),
            "-crf".to_owned(),
            enc.crf.to_string(),
            "-pix_fmt".to_owned(),
            enc.pix_fmt.clone(),
        ]);
        if self.audio.is_some() {
            args.extend([
                "-c:a".to_owned(),
                enc.audio_codec.clone(),
                "-b:a".to_owned(),
                enc.audio_bitrate.clone(),
                "-shortest".to_owned(),
            ]);
        }
        args.push(self.output_path.to_string_lossy().into_owned());
        args
    }

    /// The arguments as one shell-safe line.
    pub fn to_command_line(&self) -> String {
        self.to_args()
            .iter()
            .map(|a| shell_quote(a))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `true` when a soundtrack is muxed.
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Number of still-image inputs.
    pub fn still_count(&self) -> usize {
        self.inputs
            .iter()
            .filter(|i| matches!(i, InputClause::LoopedStill { .. }))
            .count()
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-_.,/:=+@%".contains(&b));
    if plain {
        return arg.to_owned();
    }
    // Nothing expands inside single quotes, `!` included; an embedded quote becomes '\''.
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/job.rs"]
mod tests;
