//! Headless animation primitives driven by explicit frame ticks
//!
//! The session steps these with `tick(dt_ms)`; there is no animation runtime
//! underneath. Springs carry the card transform, `Timed` carries opacity and
//! the direction signal.

/// Distance from target below which a spring may come to rest
const REST_DISTANCE: f64 = 0.5;
/// Speed (units/sec) below which a spring may come to rest
const REST_SPEED: f64 = 0.5;

/// A damped spring toward a fixed target
///
/// Semi-implicit Euler with unit mass: matches the feel of the mobile
/// runtime's `withSpring` at stiffness 100 / damping 15.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    settled: bool,
}

impl Spring {
    pub fn new(position: f64, target: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            stiffness,
            damping,
            settled: false,
        }
    }

    /// Step the spring by `dt_ms`. Returns true once settled.
    ///
    /// Settling snaps the position exactly onto the target so downstream
    /// state never inherits a residual fraction of a point.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if self.settled {
            return true;
        }
        let dt = dt_ms / 1000.0;
        let accel = self.stiffness * (self.target - self.position) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        if (self.target - self.position).abs() < REST_DISTANCE && self.velocity.abs() < REST_SPEED {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
        self.settled
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// A fixed-duration linear ramp between two values
#[derive(Debug, Clone, Copy)]
pub struct Timed {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl Timed {
    pub fn new(from: f64, to: f64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f64,
            elapsed_ms: 0.0,
        }
    }

    /// Step by `dt_ms`. Returns true once the full duration has elapsed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        self.is_finished()
    }

    pub fn value(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = self.elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}
