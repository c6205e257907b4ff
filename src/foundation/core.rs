use crate::foundation::error::{ReelError, ReelResult};

/// Target canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a canvas size, rejecting zero or odd extents (yuv420p needs even sizes).
    pub fn new(width: u32, height: u32) -> ReelResult<Self> {
        if width == 0 || height == 0 {
            return Err(ReelError::validation("dimensions must be non-zero"));
        }
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(ReelError::validation(
                "dimensions must be even (required for yuv420p output)",
            ));
        }
        Ok(Self { width, height })
    }

    /// `W:H` form used by `scale`/`crop` arguments.
    pub fn colon_pair(self) -> String {
        format!("{}:{}", self.width, self.height)
    }
}

/// Render a duration/offset in seconds the way ffmpeg arguments expect it.
///
/// Uses the shortest decimal that round-trips (`2`, `0.8`, `2.8`), so equal inputs always yield
/// identical text.
pub fn fmt_secs(v: f64) -> String {
    // Normalize -0.0 so it never leaks into argument text.
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

/// Reject non-finite or non-positive seconds values.
pub(crate) fn require_positive_secs(name: &str, v: f64) -> ReelResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ReelError::validation(format!(
            "{name} must be finite and > 0 (got {v})"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
