//! Runtime playback settings
//!
//! The speed control is a slider value: higher means faster. The tick
//! interval is `1000 - value` milliseconds, so the slider range
//! `0..=990` maps to intervals from one second down to 10 ms.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest slider value (slowest playback)
pub const MIN_SPEED: u32 = 0;

/// Highest slider value (fastest playback)
pub const MAX_SPEED: u32 = 990;

/// Default slider value (300 ms per step)
pub const DEFAULT_SPEED: u32 = 700;

/// Slider increment used by faster/slower controls
pub const SPEED_STEP: u32 = 100;

/// Playback speed as a slider value in `MIN_SPEED..=MAX_SPEED`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaybackSpeed(u32);

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

impl PlaybackSpeed {
    /// Create a speed, clamping to the slider range
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    /// Slider value
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Time between automatic advances
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 - self.0.min(MAX_SPEED)))
    }

    /// One slider step faster
    pub fn faster(&self) -> Self {
        Self::new(self.0.saturating_add(SPEED_STEP))
    }

    /// One slider step slower
    pub fn slower(&self) -> Self {
        Self::new(self.0.saturating_sub(SPEED_STEP))
    }

    /// Check if the value is inside the slider range
    pub fn is_valid(value: u32) -> bool {
        (MIN_SPEED..=MAX_SPEED).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval_is_inverse() {
        assert_eq!(PlaybackSpeed::new(0).tick_interval(), Duration::from_millis(1000));
        assert_eq!(PlaybackSpeed::new(700).tick_interval(), Duration::from_millis(300));
        assert_eq!(PlaybackSpeed::new(990).tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(PlaybackSpeed::new(5000).value(), MAX_SPEED);
        assert_eq!(PlaybackSpeed::new(950).faster().value(), MAX_SPEED);
        assert_eq!(PlaybackSpeed::new(50).slower().value(), MIN_SPEED);
        assert!(!PlaybackSpeed::is_valid(991));
    }

    #[test]
    fn test_default() {
        assert_eq!(PlaybackSpeed::default().value(), DEFAULT_SPEED);
    }
}
