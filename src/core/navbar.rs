use crate::constants::{NAVBAR_HIDE_AFTER_PX, NAVBAR_SCROLL_NOISE_PX, NAVBAR_SOLID_AFTER_PX};

/// Background treatment, chosen from the absolute scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Translucent,
    Solid,
}

impl NavbarStyle {
    pub fn background(self) -> &'static str {
        match self {
            NavbarStyle::Translucent => "rgba(10, 10, 10, 0.8)",
            NavbarStyle::Solid => "rgba(10, 10, 10, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarStyle::Translucent => "0 8px 32px rgba(0, 0, 0, 0.3)",
            NavbarStyle::Solid => "0 8px 32px rgba(0, 0, 0, 0.5), 0 0 20px rgba(139, 0, 0, 0.1)",
        }
    }

    pub fn backdrop_filter(self) -> &'static str {
        "blur(20px) saturate(180%)"
    }
}

/// Show/hide state, chosen from scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarVisibility {
    Shown,
    Hidden,
}

impl NavbarVisibility {
    pub fn transform(self) -> &'static str {
        match self {
            NavbarVisibility::Shown => "translateY(0)",
            NavbarVisibility::Hidden => "translateY(-100%)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarUpdate {
    pub style: NavbarStyle,
    /// `None` when the scroll delta was below the noise threshold; the
    /// current transform must be left alone.
    pub visibility: Option<NavbarVisibility>,
}

/// Dual-threshold navbar policy. Retains the last sampled scroll offset.
#[derive(Clone, Debug)]
pub struct NavbarController {
    last_scroll: f64,
    solid_after: f64,
    hide_after: f64,
    noise: f64,
}

impl Default for NavbarController {
    fn default() -> Self {
        Self::with_thresholds(NAVBAR_SOLID_AFTER_PX, NAVBAR_HIDE_AFTER_PX, NAVBAR_SCROLL_NOISE_PX)
    }
}

impl NavbarController {
    pub fn with_thresholds(solid_after: f64, hide_after: f64, noise: f64) -> Self {
        Self {
            last_scroll: 0.0,
            solid_after,
            hide_after,
            noise,
        }
    }

    #[inline]
    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    pub fn update(&mut self, scroll: f64) -> NavbarUpdate {
        let style = if scroll > self.solid_after {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        };
        let visibility = if (scroll - self.last_scroll).abs() > self.noise {
            if scroll > self.last_scroll && scroll > self.hide_after {
                Some(NavbarVisibility::Hidden)
            } else {
                Some(NavbarVisibility::Shown)
            }
        } else {
            None
        };
        self.last_scroll = scroll;
        NavbarUpdate { style, visibility }
    }
}
