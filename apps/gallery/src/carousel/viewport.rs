use serde::{Deserialize, Serialize};

/// Medium breakpoint: two cards visible from this width on.
pub const MEDIUM_MIN_WIDTH_PX: u32 = 768;
/// Wide breakpoint: three cards visible from this width on.
pub const WIDE_MIN_WIDTH_PX: u32 = 1280;

/// Cursor movement per navigation, tied to how many cards the viewport shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    One,
    Two,
    Three,
}

impl Step {
    pub fn for_width(width_px: u32) -> Self {
        if width_px >= WIDE_MIN_WIDTH_PX {
            Step::Three
        } else if width_px >= MEDIUM_MIN_WIDTH_PX {
            Step::Two
        } else {
            Step::One
        }
    }

    pub fn get(self) -> usize {
        match self {
            Step::One => 1,
            Step::Two => 2,
            Step::Three => 3,
        }
    }

    /// Whether the card at `slot` of a window is shown at this step.
    /// Slot 0 is always shown, slot 1 from the medium breakpoint, slot 2 from the wide one.
    pub fn shows_slot(self, slot: usize) -> bool {
        slot < self.get()
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Three
    }
}
