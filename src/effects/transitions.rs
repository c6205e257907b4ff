use crate::compile::timeline::Timeline;
use crate::foundation::error::{ReelError, ReelResult};
use crate::graph::filter_graph::FilterGraph;
use crate::graph::node::{FadeDirection, FilterNode, FilterOp, NodeRole, PadRef, XfadeTransition};
use crate::settings::config::FadeOffsetMode;
use crate::settings::model::TransitionKind;

/// How consecutive normalized sources are chained into one stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStrategy {
    /// Plain `xfade` chain; `chain_prefix` names the intermediate links (`b0`, `s0`, ...).
    Blend {
        /// `xfade` transition name.
        xfade: XfadeTransition,
        /// Prefix of intermediate chain links.
        chain_prefix: &'static str,
    },
    /// Fade-in per source, `fade` blends, and a final fade-out.
    Fade {
        /// Blend offset policy.
        offsets: FadeOffsetMode,
    },
}

/// Inputs shared by every strategy.
#[derive(Clone, Copy, Debug)]
pub struct ChainParams<'a> {
    /// Normalized source links, in playback order.
    pub sources: &'a [String],
    /// Display/transition timing.
    pub timeline: &'a Timeline,
    /// Name of the terminal video pad.
    pub output_pad: &'a str,
    /// Pixel format written by the output node.
    pub output_pix_fmt: &'a str,
}

impl TransitionStrategy {
    /// Strategy for a transition kind.
    pub fn for_kind(kind: TransitionKind, fade_offsets: FadeOffsetMode) -> Self {
        match kind {
            TransitionKind::Dissolve => Self::Blend {
                xfade: XfadeTransition::Dissolve,
                chain_prefix: "b",
            },
            TransitionKind::SlideLeft => Self::Blend {
                xfade: XfadeTransition::SlideLeft,
                chain_prefix: "s",
            },
            TransitionKind::SlideRight => Self::Blend {
                xfade: XfadeTransition::SlideRight,
                chain_prefix: "s",
            },
            TransitionKind::Zoom => Self::Blend {
                xfade: XfadeTransition::ZoomIn,
                chain_prefix: "z",
            },
            TransitionKind::Fade => Self::Fade {
                offsets: fade_offsets,
            },
        }
    }

    /// Length in seconds of the stream the chain produces for `n >= 1` sources.
    ///
    /// With constant fade offsets every blend restarts at `P`, so the stream never grows past the
    /// second source.
    pub fn stream_duration(self, timeline: &Timeline, n: usize) -> f64 {
        match self {
            Self::Fade {
                offsets: FadeOffsetMode::Constant,
            } => timeline.total_duration(n.min(2)),
            Self::Blend { .. }
            | Self::Fade {
                offsets: FadeOffsetMode::Accumulate,
            } => timeline.total_duration(n),
        }
    }

    /// Append the chain for `p.sources` to `graph`, ending in `p.output_pad`.
    ///
    /// A single source is never blended: it feeds the output node directly for every strategy.
    pub fn build(self, p: &ChainParams<'_>, graph: &mut FilterGraph) -> ReelResult<()> {
        match p.sources {
            [] => Err(ReelError::InvalidInputCount),
            [only] => push_output(graph, p, only, Vec::new()),
            _ => match self {
                Self::Blend {
                    xfade,
                    chain_prefix,
                } => build_blend_chain(graph, p, xfade, chain_prefix),
                Self::Fade { offsets } => build_fade_chain(graph, p, offsets),
            },
        }
    }
}

fn xfade_node(i: usize, a: &str, b: &str, op: FilterOp, out: String) -> FilterNode {
    FilterNode::new(
        format!("xfade{i}"),
        NodeRole::Transition,
        vec![PadRef::label(a), PadRef::label(b)],
        vec![op],
        out,
    )
}

// Chains pairwise blends left to right; returns the last chain link.
fn push_xfade_chain(
    graph: &mut FilterGraph,
    inputs: &[String],
    prefix: &str,
    duration_s: f64,
    transition: XfadeTransition,
    offset: impl Fn(usize) -> f64,
) -> ReelResult<String> {
    let mut prev = inputs[0].clone();
    for (i, next) in inputs[1..].iter().enumerate() {
        let out = format!("{prefix}{i}");
        let op = FilterOp::Xfade {
            transition,
            duration_s,
            offset_s: offset(i),
        };
        graph.push(xfade_node(i, &prev, next, op, out.clone()))?;
        prev = out;
    }
    Ok(prev)
}

fn push_output(
    graph: &mut FilterGraph,
    p: &ChainParams<'_>,
    input: &str,
    mut ops: Vec<FilterOp>,
) -> ReelResult<()> {
    ops.push(FilterOp::Format {
        pix_fmt: p.output_pix_fmt.to_owned(),
    });
    graph.push(FilterNode::new(
        "output",
        NodeRole::Output,
        vec![PadRef::label(input)],
        ops,
        p.output_pad,
    ))
}

fn build_blend_chain(
    graph: &mut FilterGraph,
    p: &ChainParams<'_>,
    xfade: XfadeTransition,
    prefix: &str,
) -> ReelResult<()> {
    let t = p.timeline;
    let last = push_xfade_chain(
        graph,
        p.sources,
        prefix,
        t.transition_duration(),
        xfade,
        |i| t.offset(i),
    )?;
    push_output(graph, p, &last, Vec::new())
}

fn build_fade_chain(
    graph: &mut FilterGraph,
    p: &ChainParams<'_>,
    mode: FadeOffsetMode,
) -> ReelResult<()> {
    let t = p.timeline;
    let d = t.transition_duration();

    let mut faded = Vec::with_capacity(p.sources.len());
    for (i, src) in p.sources.iter().enumerate() {
        let out = format!("f{i}");
        graph.push(FilterNode::new(
            format!("fadein{i}"),
            NodeRole::Entrance,
            vec![PadRef::label(src)],
            vec![FilterOp::Fade {
                direction: FadeDirection::In,
                start_s: 0.0,
                duration_s: d,
            }],
            out.clone(),
        ))?;
        faded.push(out);
    }

    let (last, fade_out_start) = match mode {
        FadeOffsetMode::Accumulate => {
            let last = push_xfade_chain(graph, &faded, "x", d, XfadeTransition::Fade, |i| {
                t.offset(i)
            })?;
            // Exit fade ends with the stream: total length P * n + D, minus D.
            (last, t.photo_duration() * faded.len() as f64)
        }
        FadeOffsetMode::Constant => {
            tracing::warn!("fade blends use a constant offset; later images overlap the first blend");
            let p_s = t.photo_duration();
            let last = push_xfade_chain(graph, &faded, "x", d, XfadeTransition::Fade, |_| p_s)?;
            (last, p_s)
        }
    };

    push_output(
        graph,
        p,
        &last,
        vec![FilterOp::Fade {
            direction: FadeDirection::Out,
            start_s: fade_out_start,
            duration_s: d,
        }],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
