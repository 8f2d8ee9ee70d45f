// Swipe core exports
pub mod decider;
pub mod motion;
pub mod overlay;
pub mod sequencer;
pub mod session;
pub mod tracker;

pub use decider::{decide, exit_targets, ExitTargets, SwipeDecision};
pub use overlay::{overlay_style, OverlayStyle, Rgba};
pub use sequencer::{CardTransform, CommitEffect, CommitSequencer, RevertSequencer};
pub use session::{SessionError, SwipePhase, SwipeSession};
pub use tracker::{direction_signal, GestureState, GestureTracker};
