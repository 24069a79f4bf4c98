//! A viewer session: one carousel controller plus the fit state of its cards.
//!
//! Sessions are shared as `Arc<tokio::sync::Mutex<Session>>`. Every mutation
//! happens under that lock, so navigations, transition completions and debounced
//! re-fits of the same session never interleave.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::carousel::{
    CarouselController, CarouselError, Direction, SlideStart, Step, TransitionOutcome,
    TransitionSignal, ViewMode,
};
use crate::feed::PhotoResolver;
use crate::fit::auto_fit::default_font_px;
use crate::fit::{fit_block, Debouncer, FitBounds, FitTarget, MetricMeasurer};
use crate::models::ExhibitorKey;
use crate::sessions::view::{card_view, SessionView};

pub type SharedSession = Arc<Mutex<Session>>;

/// Card geometry the bio fit is computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitProfile {
    pub card_width_px: f32,
    pub bio_box_height_px: f32,
}

impl FitProfile {
    /// Size used for a card that has not been fitted yet.
    pub fn unfitted_font_px(&self) -> f32 {
        FitBounds::for_card_width(self.card_width_px).clamp(default_font_px(self.card_width_px))
    }
}

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    controller: CarouselController,
    fit: FitProfile,
    bio_sizes: HashMap<ExhibitorKey, f32>,
    pending: Option<TransitionSignal>,
    refit_debouncer: Option<Debouncer>,
}

impl Session {
    pub fn new(id: Uuid, controller: CarouselController, fit: FitProfile) -> Self {
        let now = Utc::now();
        let mut session = Self {
            id,
            created_at: now,
            last_seen: now,
            controller,
            fit,
            bio_sizes: HashMap::new(),
            pending: None,
            refit_debouncer: None,
        };
        session.refit();
        session
    }

    /// Builds a shared session whose resize re-fits are debounced by `quiet`.
    ///
    /// The debounce task only holds a weak reference, so dropping the last
    /// `SharedSession` also ends the task.
    pub fn spawn_shared(
        id: Uuid,
        controller: CarouselController,
        fit: FitProfile,
        quiet: Duration,
    ) -> SharedSession {
        Arc::new_cyclic(|weak: &Weak<Mutex<Session>>| {
            let weak = weak.clone();
            let debouncer = Debouncer::spawn(quiet, move || {
                let weak = weak.clone();
                async move {
                    if let Some(shared) = weak.upgrade() {
                        let mut session = shared.lock().await;
                        let fitted = session.refit();
                        debug!(session_id = %session.id, fitted, "debounced re-fit");
                    }
                }
            });
            let mut session = Session::new(id, controller, fit);
            session.refit_debouncer = Some(debouncer);
            Mutex::new(session)
        })
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        (now - self.last_seen).to_std().unwrap_or(Duration::ZERO)
    }

    /// Fits the bio of every record currently on screen. Returns how many were fitted.
    pub fn refit(&mut self) -> usize {
        let measurer = MetricMeasurer::for_card(self.fit.card_width_px);
        let mut fitted = 0;
        for record in self.controller.visible() {
            let target = FitTarget {
                text: Some(&record.bio),
                container_height_px: Some(self.fit.bio_box_height_px),
                initial_font_px: self.bio_sizes.get(&record.number).copied(),
            };
            if let Some(outcome) = fit_block(&measurer, &target, self.fit.card_width_px) {
                self.bio_sizes.insert(record.number, outcome.font_px);
                fitted += 1;
            }
        }
        fitted
    }

    pub fn bio_font_px(&self, key: ExhibitorKey) -> f32 {
        self.bio_sizes
            .get(&key)
            .copied()
            .unwrap_or_else(|| self.fit.unfitted_font_px())
    }

    /// Starts a slide and fits the incoming page.
    pub fn begin_slide(&mut self, direction: Direction) -> Result<SlideStart, CarouselError> {
        let start = self.controller.begin_slide(direction)?;
        self.refit();
        Ok(start)
    }

    pub fn arm_transition(&mut self, signal: TransitionSignal) {
        self.pending = Some(signal);
    }

    /// Handles the view layer's "animation ended" report for slide `id`.
    /// Returns false if `id` is not the slide in flight (late or duplicate report).
    pub fn complete_transition(&mut self, id: Uuid) -> bool {
        match self.pending.take() {
            Some(signal) if signal.id() == id => {
                signal.complete();
                self.controller.finish_slide(id)
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Called by the waiter once slide `id` settled, however it ended.
    pub fn settle_transition(&mut self, id: Uuid, outcome: TransitionOutcome) {
        if self.pending.as_ref().is_some_and(|s| s.id() == id) {
            self.pending = None;
        }
        if self.controller.finish_slide(id) {
            debug!(session_id = %self.id, transition_id = %id, ?outcome, "slide settled");
        }
    }

    pub fn toggle_all(&mut self) -> ViewMode {
        let mode = self.controller.toggle_all();
        self.refit();
        mode
    }

    /// Applies a resize notification. The re-fit is debounced when a debouncer is attached.
    pub fn set_viewport(&mut self, width_px: u32, card_width_px: Option<f32>) -> Step {
        let step = Step::for_width(width_px);
        self.controller.set_step(step);
        if let Some(cw) = card_width_px {
            self.fit.card_width_px = cw;
        }
        if let Some(debouncer) = &self.refit_debouncer {
            debouncer.trigger();
        } else {
            self.refit();
        }
        step
    }

    pub fn view(&self, photos: &PhotoResolver) -> SessionView {
        let controller = &self.controller;
        let cards = match controller.mode() {
            ViewMode::Carousel => controller
                .page()
                .iter()
                .enumerate()
                .map(|(slot, record)| {
                    card_view(
                        slot,
                        record,
                        controller.step().shows_slot(slot),
                        self.bio_font_px(record.number),
                        photos,
                    )
                })
                .collect(),
            ViewMode::All => controller
                .order()
                .records()
                .iter()
                .enumerate()
                .map(|(slot, record)| {
                    card_view(slot, record, true, self.bio_font_px(record.number), photos)
                })
                .collect(),
        };

        SessionView {
            session_id: self.id,
            created_at: self.created_at,
            mode: controller.mode(),
            step: controller.step(),
            cursor: controller.cursor(),
            total: controller.order().len(),
            card_width_px: self.fit.card_width_px,
            transition_in_flight: controller.in_flight(),
            cards,
        }
    }
}
