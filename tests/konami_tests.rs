// Host-side tests for the key-sequence detector.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod konami {
        include!("../src/core/konami.rs");
    }
}

use crate::constants::KONAMI_SEQUENCE;
use crate::core::konami::*;

fn feed(detector: &mut KonamiDetector, keys: &[u32]) -> usize {
    keys.iter().filter(|k| detector.push(**k)).count()
}

#[test]
fn full_sequence_triggers_once() {
    let mut d = KonamiDetector::default();
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 1);
    assert!(d.is_active());
}

#[test]
fn prefix_noise_is_ignored() {
    let mut d = KonamiDetector::default();
    let mut keys = vec![13, 65, 38];
    keys.extend_from_slice(&KONAMI_SEQUENCE);
    assert_eq!(feed(&mut d, &keys), 1);
}

#[test]
fn wrong_key_inside_sequence_does_not_trigger() {
    let mut d = KonamiDetector::default();
    let mut keys = KONAMI_SEQUENCE.to_vec();
    keys[4] = 32;
    assert_eq!(feed(&mut d, &keys), 0);
    assert!(!d.is_active());
}

#[test]
fn repeat_while_active_is_blocked() {
    let mut d = KonamiDetector::default();
    feed(&mut d, &KONAMI_SEQUENCE);
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 0);
    d.deactivate();
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 1);
}

#[test]
fn manual_activation_respects_active_flag() {
    let mut d = KonamiDetector::default();
    assert!(d.activate());
    assert!(!d.activate());
    assert_eq!(feed(&mut d, &KONAMI_SEQUENCE), 0);
}

#[test]
fn custom_sequence() {
    static SEQ: [u32; 2] = [1, 2];
    let mut d = KonamiDetector::with_sequence(&SEQ);
    assert!(!d.push(2));
    assert!(!d.push(1));
    assert!(d.push(2));
}

#[test]
fn empty_sequence_never_matches() {
    let mut d = KonamiDetector::with_sequence(&[]);
    assert_eq!(feed(&mut d, &[1, 2, 3]), 0);
}
