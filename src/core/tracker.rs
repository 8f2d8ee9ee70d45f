use crate::config::GestureSettings;

/// Live transform of the top card during an active drag
///
/// Rebuilt from scratch for every gesture; nothing here survives a release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// Horizontal translation in screen points
    pub dx: f64,
    /// Vertical translation in screen points
    pub dy: f64,
    /// Derived card rotation in degrees
    pub rotation_deg: f64,
    /// Normalized swipe lean in [-1, 1]
    pub direction: f64,
}

impl GestureState {
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Normalized direction signal for a horizontal displacement
///
/// `dx / threshold`, saturating at +/-1. Purely a function of the current
/// displacement: reversing the drag walks the signal back toward 0.
#[inline]
pub fn direction_signal(dx: f64, threshold: f64) -> f64 {
    if dx > 0.0 {
        (dx / threshold).min(1.0)
    } else if dx < 0.0 {
        (dx / threshold).max(-1.0)
    } else {
        0.0
    }
}

/// Converts raw drag samples into card transform state
///
/// Each delivered sample fully determines the output; there is no history or
/// hysteresis. The tracker never touches the deck store.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    screen_width: f64,
    threshold: f64,
    rotation_factor_deg: f64,
    state: GestureState,
}

impl GestureTracker {
    pub fn new(gesture: &GestureSettings, screen_width: f64) -> Self {
        Self {
            screen_width,
            threshold: gesture.threshold(screen_width),
            rotation_factor_deg: gesture.rotation_factor_deg,
            state: GestureState::neutral(),
        }
    }

    /// Absorb one drag sample and return the derived state
    pub fn update(&mut self, dx: f64, dy: f64) -> GestureState {
        self.state = GestureState {
            dx,
            dy,
            // Subtle rotation, proportional to horizontal traversal
            rotation_deg: (dx / self.screen_width) * self.rotation_factor_deg,
            direction: direction_signal(dx, self.threshold),
        };
        self.state
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Commit threshold in screen points
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Drop the gesture state so the next card starts neutral
    pub fn reset(&mut self) {
        self.state = GestureState::neutral();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 117.0; // 0.3 * 390

    #[test]
    fn test_signal_zero_at_rest() {
        assert_eq!(direction_signal(0.0, THRESHOLD), 0.0);
    }

    #[test]
    fn test_signal_linear_inside_threshold() {
        assert!((direction_signal(58.5, THRESHOLD) - 0.5).abs() < 1e-12);
        assert!((direction_signal(-58.5, THRESHOLD) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_signal_saturates_at_unity() {
        assert_eq!(direction_signal(THRESHOLD * 4.0, THRESHOLD), 1.0);
        assert_eq!(direction_signal(-THRESHOLD * 4.0, THRESHOLD), -1.0);
        // Exactly at the threshold the signal reaches but does not exceed 1
        assert_eq!(direction_signal(THRESHOLD, THRESHOLD), 1.0);
        assert_eq!(direction_signal(-THRESHOLD, THRESHOLD), -1.0);
    }

    #[test]
    fn test_signal_monotonic_within_threshold() {
        let mut last = -1.0;
        let mut dx = -THRESHOLD;
        while dx <= THRESHOLD {
            let signal = direction_signal(dx, THRESHOLD);
            assert!(signal >= last, "signal regressed at dx={}", dx);
            assert!((-1.0..=1.0).contains(&signal));
            last = signal;
            dx += 1.0;
        }
    }

    #[test]
    fn test_tracker_rotation_proportional_to_dx() {
        let mut tracker = GestureTracker::new(&GestureSettings::default(), 390.0);

        let state = tracker.update(195.0, 10.0);
        assert_eq!(state.dx, 195.0);
        assert_eq!(state.dy, 10.0);
        // Half the screen at 12 degrees full traversal
        assert!((state.rotation_deg - 6.0).abs() < 1e-12);
        assert_eq!(state.direction, 1.0);
    }

    #[test]
    fn test_tracker_signal_follows_reversal() {
        let mut tracker = GestureTracker::new(&GestureSettings::default(), 390.0);

        tracker.update(100.0, 0.0);
        assert!(tracker.state().direction > 0.0);

        // User drags back toward center mid-gesture
        let state = tracker.update(20.0, 0.0);
        assert!(state.direction < 0.2);
        assert!(state.direction > 0.0);

        let state = tracker.update(-30.0, 0.0);
        assert!(state.direction < 0.0);
    }

    #[test]
    fn test_reset_returns_to_neutral() {
        let mut tracker = GestureTracker::new(&GestureSettings::default(), 390.0);
        tracker.update(200.0, -40.0);
        tracker.reset();
        assert_eq!(tracker.state(), GestureState::neutral());
    }
}
