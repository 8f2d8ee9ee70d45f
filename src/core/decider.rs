use crate::config::GestureSettings;
use crate::models::SwipeDirection;

/// Outcome of a gesture at release time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// The drag crossed the threshold; the card exits in `direction`
    Committed(SwipeDirection),
    /// The drag fell short; the card springs back to center
    Reverted,
}

impl SwipeDecision {
    pub fn is_committed(&self) -> bool {
        matches!(self, SwipeDecision::Committed(_))
    }
}

/// Decide a gesture from its final horizontal displacement
///
/// Evaluated once per gesture, at release, against the displacement at that
/// instant. Strictly greater-than: a drag ending exactly at the threshold
/// reverts.
#[inline]
pub fn decide(dx: f64, threshold: f64) -> SwipeDecision {
    if dx.abs() > threshold {
        SwipeDecision::Committed(SwipeDirection::from_dx(dx))
    } else {
        SwipeDecision::Reverted
    }
}

/// Animation targets for a committed card's exit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTargets {
    /// Horizontal target, well past the screen edge
    pub x: f64,
    /// Vertical offset returns to 0 on the way out
    pub y: f64,
    pub rotation_deg: f64,
    /// Saturated direction signal, +/-1
    pub direction: f64,
}

/// Exit targets for a committed swipe
///
/// Horizontal target is `sign * screen_width * exit_distance_factor`, the
/// rotation settles at `sign * commit_rotation_deg`, and the direction signal
/// is driven to full saturation so the overlay completes its transition.
pub fn exit_targets(
    direction: SwipeDirection,
    gesture: &GestureSettings,
    screen_width: f64,
) -> ExitTargets {
    let sign = direction.sign();
    ExitTargets {
        x: sign * screen_width * gesture.exit_distance_factor,
        y: 0.0,
        rotation_deg: sign * gesture.commit_rotation_deg,
        direction: sign,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 117.0;

    #[test]
    fn test_commit_past_threshold() {
        assert_eq!(
            decide(THRESHOLD + 0.1, THRESHOLD),
            SwipeDecision::Committed(SwipeDirection::Right)
        );
        assert_eq!(
            decide(-THRESHOLD - 0.1, THRESHOLD),
            SwipeDecision::Committed(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_revert_inside_threshold() {
        assert_eq!(decide(0.0, THRESHOLD), SwipeDecision::Reverted);
        assert_eq!(decide(THRESHOLD / 2.0, THRESHOLD), SwipeDecision::Reverted);
        assert_eq!(decide(-THRESHOLD / 2.0, THRESHOLD), SwipeDecision::Reverted);
    }

    #[test]
    fn test_exact_threshold_reverts() {
        // Ties favor reverting, both sides
        assert_eq!(decide(THRESHOLD, THRESHOLD), SwipeDecision::Reverted);
        assert_eq!(decide(-THRESHOLD, THRESHOLD), SwipeDecision::Reverted);
    }

    #[test]
    fn test_exit_targets_right() {
        let targets = exit_targets(SwipeDirection::Right, &GestureSettings::default(), 390.0);
        assert_eq!(targets.x, 585.0); // 390 * 1.5
        assert_eq!(targets.y, 0.0);
        assert_eq!(targets.rotation_deg, 25.0);
        assert_eq!(targets.direction, 1.0);
    }

    #[test]
    fn test_exit_targets_left() {
        let targets = exit_targets(SwipeDirection::Left, &GestureSettings::default(), 390.0);
        assert_eq!(targets.x, -585.0);
        assert_eq!(targets.rotation_deg, -25.0);
        assert_eq!(targets.direction, -1.0);
    }
}
