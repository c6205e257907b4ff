use crate::foundation::core::require_positive_secs;
use crate::foundation::error::{ReelError, ReelResult};

/// Timeline arithmetic for a sequence of equally-held stills.
///
/// Every still is held for `P + D` seconds; the blend between still `i` and `i + 1` starts at
/// `P * (i + 1)`, which is where the running `xfade` output reaches `D` seconds before its end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    photo_duration_s: f64,
    transition_duration_s: f64,
}

impl Timeline {
    /// Build a timeline from the base display duration `P` and the transition duration `D`.
    pub fn new(photo_duration_s: f64, transition_duration_s: f64) -> ReelResult<Self> {
        if !transition_duration_s.is_finite() || transition_duration_s <= 0.0 {
            return Err(ReelError::InvalidTransitionDuration(transition_duration_s));
        }
        require_positive_secs("photo duration", photo_duration_s)?;
        Ok(Self {
            photo_duration_s,
            transition_duration_s,
        })
    }

    /// Base display duration `P`.
    pub fn photo_duration(&self) -> f64 {
        self.photo_duration_s
    }

    /// Transition duration `D`.
    pub fn transition_duration(&self) -> f64 {
        self.transition_duration_s
    }

    /// On-screen window of each still, `P + D`.
    pub fn window(&self) -> f64 {
        self.photo_duration_s + self.transition_duration_s
    }

    /// Start of the blend between still `i` and still `i + 1`.
    pub fn offset(&self, i: usize) -> f64 {
        self.photo_duration_s * (i as f64 + 1.0)
    }

    /// All `n - 1` blend offsets for `n` stills.
    pub fn offsets(&self, n: usize) -> Vec<f64> {
        (0..n.saturating_sub(1)).map(|i| self.offset(i)).collect()
    }

    /// Length of the composed video for `n >= 1` stills, `P * n + D`.
    pub fn total_duration(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        self.photo_duration_s * n as f64 + self.transition_duration_s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/timeline.rs"]
mod tests;
