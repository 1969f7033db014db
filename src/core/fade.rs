use crate::constants::{FADE_DELAY_MS, FADE_DURATION_MS};
use std::time::Duration;

/// Fade timing for committed strokes.
///
/// - `delay`: how long a stroke is held at full opacity after commit
/// - `duration`: length of the linear ramp from 1 to 0 that follows
///
/// A stroke whose age reaches `delay + duration` is expired and gets evicted
/// on the next update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeParams {
    pub delay: Duration,
    pub duration: Duration,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(FADE_DELAY_MS),
            duration: Duration::from_millis(FADE_DURATION_MS),
        }
    }
}

impl FadeParams {
    pub fn from_millis(delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Total lifetime of a stroke, hold plus ramp.
    #[inline]
    pub fn lifetime(&self) -> Duration {
        self.delay + self.duration
    }

    #[inline]
    pub fn is_expired(&self, age: Duration) -> bool {
        if self.duration.is_zero() {
            // hard cut: the stroke is still fully visible at exactly `delay`
            return age > self.delay;
        }
        age >= self.lifetime()
    }

    /// Opacity in `[0, 1]` for a stroke of the given age.
    ///
    /// With a zero `duration` the ramp collapses into a hard cut at `delay`.
    pub fn opacity(&self, age: Duration) -> f32 {
        if age <= self.delay {
            return 1.0;
        }
        if self.is_expired(age) {
            return 0.0;
        }
        let into_ramp = (age - self.delay).as_secs_f64();
        let ramp = self.duration.as_secs_f64();
        (1.0 - into_ramp / ramp).clamp(0.0, 1.0) as f32
    }
}

/// Age of something created at `created_at` as seen at `now`.
///
/// Saturates at zero when `now` is behind the creation time.
#[inline]
pub fn age_at(created_at: Duration, now: Duration) -> Duration {
    now.saturating_sub(created_at)
}
