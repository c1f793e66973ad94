// Host-side tests for per-frame update coalescing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod frame {
    include!("../src/core/frame.rs");
}

use frame::*;

#[test]
fn first_request_needs_a_frame() {
    let mut gates = FrameGates::default();
    assert!(gates.request(UpdateKind::Navbar));
    assert!(gates.is_pending(UpdateKind::Navbar));
}

#[test]
fn repeated_requests_coalesce_until_complete() {
    let mut gates = FrameGates::default();
    assert!(gates.request(UpdateKind::ScrollParallax));
    for _ in 0..10 {
        assert!(!gates.request(UpdateKind::ScrollParallax));
    }
    gates.complete(UpdateKind::ScrollParallax);
    assert!(!gates.is_pending(UpdateKind::ScrollParallax));
    assert!(gates.request(UpdateKind::ScrollParallax));
}

#[test]
fn kinds_are_gated_independently() {
    let mut gates = FrameGates::default();
    for kind in UpdateKind::ALL {
        assert!(gates.request(kind), "{:?}", kind);
    }
    gates.complete(UpdateKind::Timeline);
    assert!(gates.request(UpdateKind::Timeline));
    assert!(!gates.request(UpdateKind::CursorParallax));
}

#[test]
fn frame_slot_tracks_outstanding_handle() {
    let mut slot: FrameSlot<i32> = FrameSlot::default();
    assert!(!slot.is_armed());
    slot.arm(7);
    assert!(slot.is_armed());
    assert_eq!(slot.cancel(), Some(7));
    assert!(!slot.is_armed());
    assert_eq!(slot.cancel(), None);
}

#[test]
fn frame_slot_clear_after_run() {
    let mut slot = FrameSlot::default();
    slot.arm(3u32);
    slot.clear();
    assert!(!slot.is_armed());
    assert_eq!(slot.cancel(), None);
}
