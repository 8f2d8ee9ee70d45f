use crate::config::{AnimationSettings, GestureSettings};
use crate::core::decider::exit_targets;
use crate::core::motion::{Spring, Timed};
use crate::core::tracker::GestureState;
use crate::models::SwipeDirection;

/// Transform applied to the top card for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
}

impl CardTransform {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Effect the session must apply when the sequencer reaches its commit point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitEffect {
    /// Mutate the deck store now: record the match (right swipes), advance
    ApplyMutation(SwipeDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitStage {
    /// Card exiting, opacity ramping to 0; store untouched
    FadingOut,
    /// Store mutated, offsets neutral, new card ramping back to opaque
    FadingIn,
    Done,
}

/// Orchestrates a committed swipe's visual-to-state handoff
///
/// Ordering contract: the exit motion and fade-out run together; the store
/// mutation is emitted exactly once, strictly after the fade-out finishes;
/// offsets are neutral from that same frame on, so the newly current card
/// never inherits the old gesture's transform; the fade-in then restores
/// opacity. `advance` keeps returning `None` after the mutation has been
/// emitted, whatever else happens to the underlying timers.
#[derive(Debug, Clone)]
pub struct CommitSequencer {
    direction: SwipeDirection,
    x: Spring,
    y: Spring,
    rotation: Spring,
    signal: Timed,
    fade: Timed,
    stage: CommitStage,
    mutation_emitted: bool,
    fade_in_ms: u64,
}

impl CommitSequencer {
    pub fn new(
        direction: SwipeDirection,
        released_at: GestureState,
        gesture: &GestureSettings,
        animation: &AnimationSettings,
        screen_width: f64,
    ) -> Self {
        let targets = exit_targets(direction, gesture, screen_width);
        let stiffness = animation.spring_stiffness;
        let damping = animation.spring_damping;
        Self {
            direction,
            x: Spring::new(released_at.dx, targets.x, stiffness, damping),
            y: Spring::new(released_at.dy, targets.y, stiffness, damping),
            rotation: Spring::new(released_at.rotation_deg, targets.rotation_deg, stiffness, damping),
            signal: Timed::new(released_at.direction, targets.direction, animation.direction_settle_ms),
            fade: Timed::new(1.0, 0.0, animation.fade_out_ms),
            stage: CommitStage::FadingOut,
            mutation_emitted: false,
            fade_in_ms: animation.fade_in_ms,
        }
    }

    /// Step one frame. Emits the store mutation at most once, on the frame
    /// the fade-out completes.
    pub fn advance(&mut self, dt_ms: f64) -> Option<CommitEffect> {
        match self.stage {
            CommitStage::FadingOut => {
                self.x.advance(dt_ms);
                self.y.advance(dt_ms);
                self.rotation.advance(dt_ms);
                self.signal.advance(dt_ms);
                let fade_done = self.fade.advance(dt_ms);

                if fade_done && !self.mutation_emitted {
                    self.mutation_emitted = true;
                    self.stage = CommitStage::FadingIn;
                    self.fade = Timed::new(0.0, 1.0, self.fade_in_ms);
                    return Some(CommitEffect::ApplyMutation(self.direction));
                }
                None
            }
            CommitStage::FadingIn => {
                if self.fade.advance(dt_ms) {
                    self.stage = CommitStage::Done;
                }
                None
            }
            CommitStage::Done => None,
        }
    }

    /// Transform for the currently rendered card
    ///
    /// Neutral from the mutation frame onward: the exiting card is invisible
    /// by then and the next card must start centered.
    pub fn transform(&self) -> CardTransform {
        match self.stage {
            CommitStage::FadingOut => CardTransform {
                x: self.x.position(),
                y: self.y.position(),
                rotation_deg: self.rotation.position(),
            },
            _ => CardTransform::neutral(),
        }
    }

    pub fn opacity(&self) -> f64 {
        self.fade.value()
    }

    /// Direction signal, held at saturation while the old card exits
    pub fn direction_signal(&self) -> f64 {
        match self.stage {
            CommitStage::FadingOut => self.signal.value(),
            _ => 0.0,
        }
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn is_finished(&self) -> bool {
        self.stage == CommitStage::Done
    }
}

/// Springs a below-threshold gesture back to center
///
/// No store mutation ever happens here; the gesture state is simply walked
/// back to neutral and discarded.
#[derive(Debug, Clone)]
pub struct RevertSequencer {
    x: Spring,
    y: Spring,
    rotation: Spring,
    signal: Timed,
}

impl RevertSequencer {
    pub fn new(released_at: GestureState, animation: &AnimationSettings) -> Self {
        let stiffness = animation.spring_stiffness;
        let damping = animation.spring_damping;
        Self {
            x: Spring::new(released_at.dx, 0.0, stiffness, damping),
            y: Spring::new(released_at.dy, 0.0, stiffness, damping),
            rotation: Spring::new(released_at.rotation_deg, 0.0, stiffness, damping),
            signal: Timed::new(released_at.direction, 0.0, animation.direction_settle_ms),
        }
    }

    /// Step one frame. Returns true once everything has settled at center.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let x_done = self.x.advance(dt_ms);
        let y_done = self.y.advance(dt_ms);
        let rotation_done = self.rotation.advance(dt_ms);
        let signal_done = self.signal.advance(dt_ms);
        x_done && y_done && rotation_done && signal_done
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform {
            x: self.x.position(),
            y: self.y.position(),
            rotation_deg: self.rotation.position(),
        }
    }

    pub fn direction_signal(&self) -> f64 {
        self.signal.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn released_right() -> GestureState {
        GestureState {
            dx: 200.0,
            dy: -12.0,
            rotation_deg: 6.15,
            direction: 1.0,
        }
    }

    fn run_to_mutation(seq: &mut CommitSequencer) -> (CommitEffect, u32) {
        let mut frames = 0;
        loop {
            frames += 1;
            assert!(frames < 1000, "mutation never emitted");
            if let Some(effect) = seq.advance(FRAME_MS) {
                return (effect, frames);
            }
        }
    }

    #[test]
    fn test_mutation_only_after_fade_out() {
        let animation = AnimationSettings::default();
        let mut seq = CommitSequencer::new(
            SwipeDirection::Right,
            released_right(),
            &GestureSettings::default(),
            &animation,
            390.0,
        );

        let (effect, frames) = run_to_mutation(&mut seq);
        assert_eq!(effect, CommitEffect::ApplyMutation(SwipeDirection::Right));
        // 300ms fade at 16ms frames: not before frame 19
        assert!(frames >= (animation.fade_out_ms as f64 / FRAME_MS) as u32);
        assert_eq!(seq.opacity(), 0.0);
    }

    #[test]
    fn test_mutation_emitted_exactly_once() {
        let mut seq = CommitSequencer::new(
            SwipeDirection::Left,
            GestureState {
                dx: -200.0,
                dy: 0.0,
                rotation_deg: -6.15,
                direction: -1.0,
            },
            &GestureSettings::default(),
            &AnimationSettings::default(),
            390.0,
        );

        run_to_mutation(&mut seq);
        // Keep stepping well past every timer
        for _ in 0..200 {
            assert_eq!(seq.advance(FRAME_MS), None);
        }
        assert!(seq.is_finished());
    }

    #[test]
    fn test_offsets_neutral_after_mutation() {
        let mut seq = CommitSequencer::new(
            SwipeDirection::Right,
            released_right(),
            &GestureSettings::default(),
            &AnimationSettings::default(),
            390.0,
        );

        assert_ne!(seq.transform(), CardTransform::neutral());
        run_to_mutation(&mut seq);
        assert_eq!(seq.transform(), CardTransform::neutral());
        assert_eq!(seq.direction_signal(), 0.0);
    }

    #[test]
    fn test_fade_in_restores_opacity() {
        let mut seq = CommitSequencer::new(
            SwipeDirection::Right,
            released_right(),
            &GestureSettings::default(),
            &AnimationSettings::default(),
            390.0,
        );

        run_to_mutation(&mut seq);
        while !seq.is_finished() {
            seq.advance(FRAME_MS);
        }
        assert_eq!(seq.opacity(), 1.0);
    }

    #[test]
    fn test_exit_moves_past_screen_edge() {
        let mut seq = CommitSequencer::new(
            SwipeDirection::Right,
            released_right(),
            &GestureSettings::default(),
            &AnimationSettings::default(),
            390.0,
        );

        let mut max_x: f64 = 0.0;
        // Springs keep running through the fade-out window
        for _ in 0..19 {
            seq.advance(FRAME_MS);
            max_x = max_x.max(seq.transform().x);
        }
        assert!(max_x > released_right().dx);
    }

    #[test]
    fn test_revert_settles_at_center() {
        let mut revert = RevertSequencer::new(
            GestureState {
                dx: 90.0,
                dy: 30.0,
                rotation_deg: 2.7,
                direction: 0.77,
            },
            &AnimationSettings::default(),
        );

        let mut frames = 0;
        while !revert.advance(FRAME_MS) {
            frames += 1;
            assert!(frames < 1000, "revert failed to settle");
        }
        assert_eq!(revert.transform(), CardTransform::neutral());
        assert_eq!(revert.direction_signal(), 0.0);
    }
}
