use crate::config::{AnimationSettings, GestureSettings, OverlaySettings, Settings};
use crate::core::decider::{decide, SwipeDecision};
use crate::core::overlay::{overlay_style, OverlayStyle};
use crate::core::sequencer::{CardTransform, CommitEffect, CommitSequencer, RevertSequencer};
use crate::core::tracker::{GestureState, GestureTracker};
use crate::models::Profile;
use crate::store::DeckStore;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Where the session is in the swipe lifecycle
///
/// Gesture input is only accepted in `Idle` (start) and `Dragging`
/// (update/release). Both animating phases reject new touches outright, which
/// is what makes a double commit structurally impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    AnimatingCommit,
    AnimatingRevert,
}

/// Errors surfaced to the gesture-recognition layer
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("gesture rejected: session is in {phase:?}, not idle")]
    GestureRejected { phase: SwipePhase },
    #[error("no active gesture: session is in {phase:?}")]
    NoActiveGesture { phase: SwipePhase },
}

/// One user's swipe session: the deck, the live gesture, and the animation
/// in flight
///
/// The hosting screen owns a session, feeds it gesture events and frame
/// ticks, and reads back the card transform, opacity, overlay, and store
/// state each frame. No global state; tests construct isolated sessions.
#[derive(Debug)]
pub struct SwipeSession {
    id: Uuid,
    screen_width: f64,
    gesture_cfg: GestureSettings,
    animation_cfg: AnimationSettings,
    overlay_cfg: OverlaySettings,
    store: DeckStore,
    tracker: GestureTracker,
    phase: SwipePhase,
    commit: Option<CommitSequencer>,
    revert: Option<RevertSequencer>,
}

impl SwipeSession {
    pub fn new(settings: &Settings) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, screen_width = settings.screen.width, "swipe session created");
        Self {
            id,
            screen_width: settings.screen.width,
            gesture_cfg: settings.gesture.clone(),
            animation_cfg: settings.animation.clone(),
            overlay_cfg: settings.overlay.clone(),
            store: DeckStore::new(),
            tracker: GestureTracker::new(&settings.gesture, settings.screen.width),
            phase: SwipePhase::Idle,
            commit: None,
            revert: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Replace the deck, as on screen mount
    pub fn load_deck(&mut self, profiles: Vec<Profile>) {
        self.store.set_deck(profiles);
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// A new touch landed on the top card
    ///
    /// Rejected outside `Idle`: a touch arriving while a commit or revert
    /// animation is still playing is dropped, not queued.
    pub fn gesture_start(&mut self) -> Result<(), SessionError> {
        if self.phase != SwipePhase::Idle {
            debug!(session_id = %self.id, phase = ?self.phase, "gesture rejected");
            return Err(SessionError::GestureRejected { phase: self.phase });
        }
        self.tracker.reset();
        self.phase = SwipePhase::Dragging;
        Ok(())
    }

    /// One drag sample: translation relative to the touch-down point
    pub fn gesture_update(&mut self, dx: f64, dy: f64) -> Result<GestureState, SessionError> {
        if self.phase != SwipePhase::Dragging {
            return Err(SessionError::NoActiveGesture { phase: self.phase });
        }
        Ok(self.tracker.update(dx, dy))
    }

    /// The touch lifted; decide the gesture from its final displacement
    pub fn gesture_release(&mut self) -> Result<SwipeDecision, SessionError> {
        if self.phase != SwipePhase::Dragging {
            return Err(SessionError::NoActiveGesture { phase: self.phase });
        }
        let released_at = self.tracker.state();
        let decision = decide(released_at.dx, self.tracker.threshold());

        match decision {
            SwipeDecision::Committed(direction) => {
                info!(
                    session_id = %self.id,
                    %direction,
                    dx = released_at.dx,
                    index = self.store.current_index(),
                    "swipe committed"
                );
                self.commit = Some(CommitSequencer::new(
                    direction,
                    released_at,
                    &self.gesture_cfg,
                    &self.animation_cfg,
                    self.screen_width,
                ));
                self.phase = SwipePhase::AnimatingCommit;
            }
            SwipeDecision::Reverted => {
                debug!(session_id = %self.id, dx = released_at.dx, "swipe reverted");
                self.revert = Some(RevertSequencer::new(released_at, &self.animation_cfg));
                self.phase = SwipePhase::AnimatingRevert;
            }
        }
        Ok(decision)
    }

    /// Advance the active animation by one frame
    ///
    /// The deck mutation for a committed swipe happens in here, on the frame
    /// the sequencer reports its fade-out complete, and only on that frame.
    pub fn tick(&mut self, dt_ms: f64) {
        match self.phase {
            SwipePhase::AnimatingCommit => {
                let effect = self.commit.as_mut().and_then(|s| s.advance(dt_ms));
                if let Some(CommitEffect::ApplyMutation(direction)) = effect {
                    self.store.apply_commit(direction);
                    self.tracker.reset();
                    info!(
                        session_id = %self.id,
                        index = self.store.current_index(),
                        matches = self.store.matches().len(),
                        "deck advanced"
                    );
                }
                if self.commit.as_ref().is_some_and(|s| s.is_finished()) {
                    self.commit = None;
                    self.phase = SwipePhase::Idle;
                }
            }
            SwipePhase::AnimatingRevert => {
                let settled = self
                    .revert
                    .as_mut()
                    .map(|s| s.advance(dt_ms))
                    .unwrap_or(true);
                if settled {
                    self.revert = None;
                    self.tracker.reset();
                    self.phase = SwipePhase::Idle;
                }
            }
            SwipePhase::Idle | SwipePhase::Dragging => {}
        }
    }

    /// Transform of the currently rendered top card
    pub fn card_transform(&self) -> CardTransform {
        match self.phase {
            SwipePhase::Dragging => {
                let state = self.tracker.state();
                CardTransform {
                    x: state.dx,
                    y: state.dy,
                    rotation_deg: state.rotation_deg,
                }
            }
            SwipePhase::AnimatingCommit => self
                .commit
                .as_ref()
                .map(|s| s.transform())
                .unwrap_or_else(CardTransform::neutral),
            SwipePhase::AnimatingRevert => self
                .revert
                .as_ref()
                .map(|s| s.transform())
                .unwrap_or_else(CardTransform::neutral),
            SwipePhase::Idle => CardTransform::neutral(),
        }
    }

    /// Opacity of the top card (1.0 except during a commit's fades)
    pub fn card_opacity(&self) -> f64 {
        match self.phase {
            SwipePhase::AnimatingCommit => self.commit.as_ref().map(|s| s.opacity()).unwrap_or(1.0),
            _ => 1.0,
        }
    }

    /// Live direction signal, whichever component currently owns it
    pub fn direction_signal(&self) -> f64 {
        match self.phase {
            SwipePhase::Dragging => self.tracker.state().direction,
            SwipePhase::AnimatingCommit => self
                .commit
                .as_ref()
                .map(|s| s.direction_signal())
                .unwrap_or(0.0),
            SwipePhase::AnimatingRevert => self
                .revert
                .as_ref()
                .map(|s| s.direction_signal())
                .unwrap_or(0.0),
            SwipePhase::Idle => 0.0,
        }
    }

    /// Overlay tint for the current frame, a pure projection of the signal
    pub fn overlay(&self) -> OverlayStyle {
        overlay_style(self.direction_signal(), &self.overlay_cfg)
    }

    /// Run the animation clock until the session is idle again
    ///
    /// Convenience for scripted drivers and tests; the interactive screen
    /// ticks per frame instead.
    pub fn run_until_idle(&mut self, frame_ms: f64) {
        while self.phase != SwipePhase::Idle {
            self.tick(frame_ms);
        }
    }
}
