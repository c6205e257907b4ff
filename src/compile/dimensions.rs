use crate::foundation::core::Dimensions;
use crate::settings::model::AspectRatio;

/// Fixed canvas size for an aspect-ratio selector.
pub fn resolve_dimensions(ratio: AspectRatio) -> Dimensions {
    let (width, height) = match ratio {
        AspectRatio::Portrait9x16 => (1080, 1920),
        AspectRatio::Landscape16x9 => (1920, 1080),
        AspectRatio::Square1x1 => (1080, 1080),
        AspectRatio::Portrait4x5 => (1080, 1350),
    };
    Dimensions { width, height }
}

/// Canvas size for a raw selector string; unknown selectors get the 16:9 canvas.
pub fn resolve_dimensions_str(selector: &str) -> Dimensions {
    resolve_dimensions(AspectRatio::parse(selector))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/dimensions.rs"]
mod tests;
