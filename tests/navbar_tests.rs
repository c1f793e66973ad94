// Host-side tests for the navbar scroll policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod navbar {
        include!("../src/core/navbar.rs");
    }
}

use crate::core::navbar::*;

#[test]
fn style_follows_absolute_position() {
    let mut nav = NavbarController::default();
    assert_eq!(nav.update(50.0).style, NavbarStyle::Translucent);
    assert_eq!(nav.update(100.0).style, NavbarStyle::Translucent);
    assert_eq!(nav.update(101.0).style, NavbarStyle::Solid);
    assert_eq!(nav.update(20.0).style, NavbarStyle::Translucent);
}

#[test]
fn scrolling_down_past_hide_threshold_hides() {
    let mut nav = NavbarController::default();
    nav.update(150.0);
    let u = nav.update(250.0);
    assert_eq!(u.visibility, Some(NavbarVisibility::Hidden));
    assert_eq!(u.style, NavbarStyle::Solid);
}

#[test]
fn scrolling_down_above_hide_threshold_shows() {
    let mut nav = NavbarController::default();
    nav.update(50.0);
    assert_eq!(nav.update(180.0).visibility, Some(NavbarVisibility::Shown));
}

#[test]
fn scrolling_up_always_shows() {
    let mut nav = NavbarController::default();
    nav.update(1000.0);
    assert_eq!(nav.update(900.0).visibility, Some(NavbarVisibility::Shown));
}

#[test]
fn small_deltas_leave_visibility_alone() {
    let mut nav = NavbarController::default();
    nav.update(500.0);
    let u = nav.update(504.0);
    assert_eq!(u.visibility, None);
    assert_eq!(u.style, NavbarStyle::Solid);
    // Exactly the noise threshold is still noise.
    assert_eq!(nav.update(509.0).visibility, None);
}

#[test]
fn last_scroll_tracks_every_sample() {
    let mut nav = NavbarController::default();
    nav.update(300.0);
    nav.update(302.0);
    assert_eq!(nav.last_scroll(), 302.0);
    // 302 -> 310 is a real move down past 200.
    assert_eq!(nav.update(310.0).visibility, Some(NavbarVisibility::Hidden));
}

#[test]
fn custom_thresholds() {
    let mut nav = NavbarController::with_thresholds(10.0, 20.0, 1.0);
    assert_eq!(nav.update(11.0).style, NavbarStyle::Solid);
    assert_eq!(nav.update(25.0).visibility, Some(NavbarVisibility::Hidden));
}

#[test]
fn css_values() {
    assert_eq!(NavbarVisibility::Hidden.transform(), "translateY(-100%)");
    assert_eq!(NavbarVisibility::Shown.transform(), "translateY(0)");
    assert_ne!(
        NavbarStyle::Solid.background(),
        NavbarStyle::Translucent.background()
    );
    assert_eq!(
        NavbarStyle::Solid.backdrop_filter(),
        NavbarStyle::Translucent.backdrop_filter()
    );
}
