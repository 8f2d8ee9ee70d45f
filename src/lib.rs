//! Roomly Swipe - swipe interaction core for the Roomly roommate-matching app
//!
//! This library implements the card-swipe state machine behind the matching
//! screen: deck and match bookkeeping, gesture tracking, the threshold commit
//! decision, and the animation sequencing that hands a committed swipe's
//! visuals over to the state mutation. Rendering and gesture recognition stay
//! in the hosting screen; this crate is headless and stepped by frame ticks.

pub mod config;
pub mod core;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use core::{
    decide, direction_signal, overlay_style, CardTransform, GestureState, OverlayStyle,
    SessionError, SwipeDecision, SwipePhase, SwipeSession,
};
pub use models::{MatchRecord, Profile, SwipeDirection};
pub use store::DeckStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let signal = direction_signal(58.5, 117.0);
        assert!(signal > 0.0 && signal < 1.0);
        assert_eq!(decide(200.0, 117.0), SwipeDecision::Committed(SwipeDirection::Right));
    }
}
