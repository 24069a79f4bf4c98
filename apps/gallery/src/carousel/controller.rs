//! Per-session carousel state: the session order, the cursor, the active step,
//! the show-all toggle and the slide currently being animated.
//!
//! One controller is built per viewer session and mutated only through `&mut self`
//! by the session owner, so no two navigations ever interleave.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::carousel::order::{advance, retreat, shuffle_once, window_at, SessionOrder, PAGE_SIZE};
use crate::carousel::viewport::Step;
use crate::models::ExhibitorRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Paged carousel over the session order.
    Carousel,
    /// Every exhibitor at once, in session order.
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide {0} has not finished yet")]
    TransitionInFlight(Uuid),

    #[error("navigation is unavailable while all exhibitors are shown")]
    NotInCarousel,
}

/// A slide that has moved the cursor and is waiting for its animation to end.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: Uuid,
    direction: Direction,
}

/// Result of starting a slide: the page to animate in and the id to report back.
#[derive(Debug, Clone, Serialize)]
pub struct SlideStart {
    pub transition_id: Uuid,
    pub direction: Direction,
    pub cursor: usize,
    pub page: Vec<ExhibitorRecord>,
}

#[derive(Debug)]
pub struct CarouselController {
    order: SessionOrder,
    cursor: usize,
    step: Step,
    mode: ViewMode,
    in_flight: Option<InFlight>,
}

impl CarouselController {
    /// Draws the session order once and starts at the first window.
    pub fn new<R: Rng + ?Sized>(records: &[ExhibitorRecord], step: Step, rng: &mut R) -> Self {
        Self::from_order(shuffle_once(records, rng), step)
    }

    pub fn from_order(order: SessionOrder, step: Step) -> Self {
        Self {
            order,
            cursor: 0,
            step,
            mode: ViewMode::Carousel,
            in_flight: None,
        }
    }

    pub fn order(&self) -> &SessionOrder {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn in_flight(&self) -> Option<Uuid> {
        self.in_flight.map(|f| f.id)
    }

    /// The full logical window at the cursor (always `PAGE_SIZE` records unless the order is empty).
    pub fn page(&self) -> Vec<ExhibitorRecord> {
        window_at(&self.order, self.cursor, PAGE_SIZE)
    }

    /// Records actually on screen: the visible slots of the window, or the whole order.
    pub fn visible(&self) -> Vec<ExhibitorRecord> {
        match self.mode {
            ViewMode::All => self.order.records().to_vec(),
            ViewMode::Carousel => self
                .page()
                .into_iter()
                .enumerate()
                .filter(|(slot, _)| self.step.shows_slot(*slot))
                .map(|(_, record)| record)
                .collect(),
        }
    }

    /// Moves the cursor by the active step and marks the slide as in flight.
    ///
    /// Refused while a previous slide is still animating or while all exhibitors are shown.
    pub fn begin_slide(&mut self, direction: Direction) -> Result<SlideStart, CarouselError> {
        if self.mode != ViewMode::Carousel {
            return Err(CarouselError::NotInCarousel);
        }
        if let Some(current) = self.in_flight {
            return Err(CarouselError::TransitionInFlight(current.id));
        }

        let len = self.order.len();
        let step = self.step.get();
        self.cursor = match direction {
            Direction::Next => advance(self.cursor, step, len),
            Direction::Prev => retreat(self.cursor, step, len),
        };

        let id = Uuid::new_v4();
        self.in_flight = Some(InFlight { id, direction });
        debug!(transition_id = %id, ?direction, cursor = self.cursor, step, "slide started");

        Ok(SlideStart {
            transition_id: id,
            direction,
            cursor: self.cursor,
            page: self.page(),
        })
    }

    /// Clears the in-flight slide. Returns false if `id` is not the current slide.
    pub fn finish_slide(&mut self, id: Uuid) -> bool {
        match self.in_flight {
            Some(current) if current.id == id => {
                debug!(transition_id = %id, direction = ?current.direction, "slide finished");
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    /// Flips between the carousel and the show-all grid. Both use the same session order.
    pub fn toggle_all(&mut self) -> ViewMode {
        self.mode = match self.mode {
            ViewMode::Carousel => ViewMode::All,
            ViewMode::All => ViewMode::Carousel,
        };
        self.mode
    }
}
