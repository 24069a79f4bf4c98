//! Auto-fit: picks the largest bio font size that still fits its box.
//!
//! # Search
//! 1. Clamp the starting size into `[MIN, MAX]`.
//! 2. Shrink by `STEP_PX` while the text overflows and the size is above `MIN`.
//! 3. Grow by `STEP_PX` while more than `SLACK_PX` of the box is unused and the
//!    size is below `MAX`. A growth step that would overflow is not taken.
//!
//! Each phase stops after `MAX_ITERATIONS` measurements, so an inconsistent
//! measurer (sub-pixel oscillation) cannot loop forever. Hitting the cap is not
//! an error; the last size tried is kept.

use serde::{Deserialize, Serialize};

use crate::fit::measure::TextMeasurer;

/// Readability floor for bio text, whatever the card width.
pub const MIN_FONT_FLOOR_PX: f32 = 11.0;
pub const MIN_FONT_RATIO: f32 = 0.036;
pub const MAX_FONT_RATIO: f32 = 0.053;
/// Starting size when the caller has none: the stylesheet's `cw * 0.043`.
pub const DEFAULT_FONT_RATIO: f32 = 0.043;
pub const DEFAULT_CARD_WIDTH_PX: f32 = 260.0;

pub const STEP_PX: f32 = 0.5;
pub const SLACK_PX: f32 = 10.0;
pub const MAX_ITERATIONS: u32 = 120;

/// Font-size bounds derived from the card base width `cw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitBounds {
    pub min_px: f32,
    pub max_px: f32,
}

impl FitBounds {
    pub fn for_card_width(card_width_px: f32) -> Self {
        Self {
            min_px: MIN_FONT_FLOOR_PX.max(card_width_px * MIN_FONT_RATIO),
            max_px: card_width_px * MAX_FONT_RATIO,
        }
    }

    /// `max(MIN, min(MAX, size))`. Resolves to `MIN` when the bounds cross.
    pub fn clamp(&self, size: f32) -> f32 {
        size.min(self.max_px).max(self.min_px)
    }
}

pub fn default_font_px(card_width_px: f32) -> f32 {
    card_width_px * DEFAULT_FONT_RATIO
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOutcome {
    pub font_px: f32,
    /// Measured height at `font_px`.
    pub height_px: f32,
    /// Measurements taken after the initial one.
    pub steps: u32,
    /// True if either phase stopped on the iteration cap.
    pub hit_cap: bool,
}

/// A text block to fit. Either half may be missing, in which case fitting is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitTarget<'a> {
    pub text: Option<&'a str>,
    pub container_height_px: Option<f32>,
    /// Currently applied size; defaults to `default_font_px(cw)`.
    pub initial_font_px: Option<f32>,
}

/// Fits `target` inside a card of base width `card_width_px`.
///
/// Returns `None` without measuring anything if the text or its container is absent.
pub fn fit_block<M: TextMeasurer + ?Sized>(
    measurer: &M,
    target: &FitTarget<'_>,
    card_width_px: f32,
) -> Option<FitOutcome> {
    let text = target.text?;
    let container_height_px = target.container_height_px?;
    let initial = target
        .initial_font_px
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or_else(|| default_font_px(card_width_px));

    Some(auto_fit(
        measurer,
        text,
        container_height_px,
        initial,
        FitBounds::for_card_width(card_width_px),
    ))
}

/// Runs the bounded shrink-then-grow search for `text` in a box `container_height_px` tall.
pub fn auto_fit<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    container_height_px: f32,
    initial_font_px: f32,
    bounds: FitBounds,
) -> FitOutcome {
    let mut size = bounds.clamp(initial_font_px);
    let mut height = measurer.measure(text, size);
    let mut steps = 0u32;
    let mut hit_cap = false;

    let mut guard = MAX_ITERATIONS;
    while height > container_height_px && size > bounds.min_px {
        if guard == 0 {
            hit_cap = true;
            break;
        }
        guard -= 1;
        size = (size - STEP_PX).max(bounds.min_px);
        height = measurer.measure(text, size);
        steps += 1;
    }

    let mut guard = MAX_ITERATIONS;
    while container_height_px - height > SLACK_PX && size < bounds.max_px {
        if guard == 0 {
            hit_cap = true;
            break;
        }
        guard -= 1;
        let candidate = (size + STEP_PX).min(bounds.max_px);
        let candidate_height = measurer.measure(text, candidate);
        steps += 1;
        if candidate_height > container_height_px {
            break;
        }
        size = candidate;
        height = candidate_height;
    }

    FitOutcome {
        font_px: size,
        height_px: height,
        steps,
        hit_cap,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
