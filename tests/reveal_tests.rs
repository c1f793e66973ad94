// Host-side tests for the reveal-on-scroll state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::reveal::*;

#[test]
fn reveals_once_when_ratio_exceeds_threshold() {
    let mut t = RevealTracker::default();
    assert!(t.observe(1));
    assert!(!t.on_intersection(1, true, 0.05));
    assert!(t.on_intersection(1, true, 0.3));
    assert!(t.is_revealed(1));
    // Later intersections, including scroll-out and back, are ignored.
    assert!(!t.on_intersection(1, false, 0.0));
    assert!(!t.on_intersection(1, true, 1.0));
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn ratio_at_threshold_is_not_enough() {
    let mut t = RevealTracker::with_threshold(0.1);
    t.observe(4);
    assert!(!t.on_intersection(4, true, 0.1));
    assert!(t.on_intersection(4, true, 0.11));
}

#[test]
fn not_intersecting_never_reveals() {
    let mut t = RevealTracker::default();
    t.observe(2);
    assert!(!t.on_intersection(2, false, 0.9));
    assert_eq!(t.pending_count(), 1);
}

#[test]
fn unknown_elements_are_ignored() {
    let mut t = RevealTracker::default();
    assert!(!t.on_intersection(99, true, 1.0));
    assert_eq!(t.revealed_count(), 0);
}

#[test]
fn observe_twice_and_after_reveal() {
    let mut t = RevealTracker::default();
    assert!(t.observe(1));
    assert!(!t.observe(1));
    t.on_intersection(1, true, 0.5);
    assert!(!t.observe(1));
}

#[test]
fn reset_returns_revealed_to_pending() {
    let mut t = RevealTracker::default();
    for id in 0..4 {
        t.observe(id);
    }
    t.on_intersection(3, true, 0.5);
    t.on_intersection(1, true, 0.5);
    assert_eq!(t.reset(), vec![1, 3]);
    assert_eq!(t.revealed_count(), 0);
    assert_eq!(t.pending_count(), 4);
    assert!(t.on_intersection(3, true, 0.5));
}

#[test]
fn classify_by_class_list() {
    assert_eq!(
        RevealCategory::classify(["card", "team-card"]),
        Some(RevealCategory::TeamCard)
    );
    assert_eq!(
        RevealCategory::classify(["timeline-item", "left"]),
        Some(RevealCategory::TimelineItem)
    );
    assert_eq!(
        RevealCategory::classify(["resource-card"]),
        Some(RevealCategory::ResourceCard)
    );
    assert_eq!(
        RevealCategory::classify(["section-title"]),
        Some(RevealCategory::SectionTitle)
    );
    assert_eq!(RevealCategory::classify(["hero"]), None);
}

#[test]
fn classify_prefers_card_over_title() {
    assert_eq!(
        RevealCategory::classify(["section-title", "resource-card", "team-card"]),
        Some(RevealCategory::TeamCard)
    );
}

#[test]
fn stagger_is_capped() {
    assert_eq!(stagger_delay_sec(0), 0.0);
    assert!((stagger_delay_sec(3) - 0.3).abs() < 1e-12);
    assert_eq!(stagger_delay_sec(8), 0.8);
    assert_eq!(stagger_delay_sec(50), 0.8);
    assert!(hidden_transition(50).ends_with(" 0.8s"));
}
