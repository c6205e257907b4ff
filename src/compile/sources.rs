use crate::foundation::core::Dimensions;
use crate::graph::node::{FilterNode, FilterOp, NodeRole, PadRef};
use crate::settings::model::MediaSource;

/// Pixel format of normalized sources; `xfade`/`fade` need the alpha plane.
pub const BLEND_PIX_FMT: &str = "yuva420p";

/// Link name of the normalized stream for source `i`.
pub fn normalized_label(i: usize) -> String {
    format!("v{i}")
}

/// Normalization node for one source: cover-scale, crop to the canvas, square pixels, alpha format.
pub fn normalize_source(source: &MediaSource, canvas: Dimensions) -> FilterNode {
    FilterNode::new(
        format!("norm{}", source.index),
        NodeRole::Normalize,
        vec![PadRef::source_video(source.index)],
        vec![
            FilterOp::ScaleCover { size: canvas },
            FilterOp::Crop { size: canvas },
            FilterOp::SetSarSquare,
            FilterOp::Format {
                pix_fmt: BLEND_PIX_FMT.to_owned(),
            },
        ],
        normalized_label(source.index),
    )
}

/// Normalization nodes for every source, in source order.
pub fn normalize_sources(sources: &[MediaSource], canvas: Dimensions) -> Vec<FilterNode> {
    sources
        .iter()
        .map(|s| normalize_source(s, canvas))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compile/sources.rs"]
mod tests;
