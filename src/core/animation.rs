//! # Animation
//!
//! Time-based tweens for the description panels.
//!
//! The core never reads a clock. Every call takes `now`, the elapsed time
//! since the screen was mounted, and the TUI loop supplies it each frame.
//!
//! ```text
//! Tween { from, to, started_at, duration, easing }
//!
//!   value(now) = from + (to - from) * easing(t)
//!   t          = clamp((now - started_at) / duration, 0, 1)
//! ```
//!
//! Retargeting captures `value(now)` as the new `from`, so an in-flight
//! panel changes direction without snapping back to 0.

use std::time::Duration;

/// Default length of a panel transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(320);

/// Easing curve applied to normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`: fast start, gentle landing, never overshoots.
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Map `t` in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween resting at `value` with nothing in flight.
    pub fn settled(value: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Current value at `now`.
    pub fn value(&self, now: Duration) -> f32 {
        if self.duration.is_zero() || self.from == self.to {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_running(&self, now: Duration) -> bool {
        self.from != self.to && now.saturating_sub(self.started_at) < self.duration
    }

    /// Point the tween at `to`, continuing from wherever it is at `now`.
    ///
    /// A tween already heading to `to` is left alone so repeated selection
    /// of the same card does not stretch its transition.
    pub fn retarget(&mut self, to: f32, now: Duration) {
        if self.to == to && self.is_running(now) {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.started_at = now;
    }
}

/// Clamped linear mapping of `value` from `input` onto `output`.
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in_lo, in_hi) = input;
    if in_hi == in_lo {
        return output.0;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * t
}
