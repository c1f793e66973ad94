use crate::constants::*;
use crate::core::device::DeviceProfile;
use std::time::Duration;

/// Runtime effect settings. Defaults come from `constants.rs`; the device
/// profile can scale them down.
#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub pointer_throttle: Duration,
    pub trail_throttle: Duration,
    pub pointer_idle: Duration,
    pub trail_capacity: usize,
    pub trail_lifetime: Duration,
    pub smooth_scroll_ms: f64,
    pub reveal_threshold: f64,
    pub easter_egg_duration: Duration,
    pub copy_feedback: Duration,
    pub scroll_parallax: bool,
    pub particles: bool,
    pub low_memory: bool,
    pub low_bandwidth: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            pointer_throttle: Duration::from_millis(POINTER_THROTTLE_MS),
            trail_throttle: Duration::from_millis(TRAIL_THROTTLE_MS),
            pointer_idle: Duration::from_millis(POINTER_IDLE_MS),
            trail_capacity: TRAIL_MAX_NODES,
            trail_lifetime: Duration::from_millis(TRAIL_LIFETIME_MS as u64),
            smooth_scroll_ms: SMOOTH_SCROLL_MS,
            reveal_threshold: REVEAL_RATIO_THRESHOLD,
            easter_egg_duration: Duration::from_millis(EASTER_EGG_MS as u64),
            copy_feedback: Duration::from_millis(COPY_FEEDBACK_MS as u64),
            scroll_parallax: true,
            particles: true,
            low_memory: false,
            low_bandwidth: false,
        }
    }
}

impl FxConfig {
    pub fn for_profile(profile: &DeviceProfile) -> Self {
        let mut cfg = Self::default();
        cfg.low_memory = profile.is_low_memory();
        cfg.low_bandwidth = profile.is_low_bandwidth();
        if cfg.low_memory {
            cfg.scroll_parallax = false;
        }
        cfg
    }

    /// Key/value rows for the diagnostics stats table.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Events throttled",
                format!(
                    "pointer {}ms, trail {}ms, scroll per frame",
                    self.pointer_throttle.as_millis(),
                    self.trail_throttle.as_millis()
                ),
            ),
            ("Trail capacity", self.trail_capacity.to_string()),
            ("Reveal threshold", format!("{:.2}", self.reveal_threshold)),
            ("Scroll parallax", on_off(self.scroll_parallax).to_string()),
            ("Particles", on_off(self.particles).to_string()),
            ("Low memory device", self.low_memory.to_string()),
            ("Low bandwidth", self.low_bandwidth.to_string()),
        ]
    }
}

#[inline]
fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}
