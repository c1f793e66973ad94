use crate::constants::KONAMI_SEQUENCE;
use std::collections::VecDeque;

/// Sliding-window matcher for the secret key sequence, with an active flag
/// that blocks re-triggering until the effect is reverted.
#[derive(Debug, Clone)]
pub struct KonamiDetector {
    target: &'static [u32],
    buffer: VecDeque<u32>,
    active: bool,
}

impl Default for KonamiDetector {
    fn default() -> Self {
        Self::with_sequence(&KONAMI_SEQUENCE)
    }
}

impl KonamiDetector {
    pub fn with_sequence(target: &'static [u32]) -> Self {
        Self {
            target,
            buffer: VecDeque::with_capacity(target.len() + 1),
            active: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one key code. Returns `true` when the effect must start now.
    pub fn push(&mut self, key_code: u32) -> bool {
        if self.target.is_empty() {
            return false;
        }
        self.buffer.push_back(key_code);
        while self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }
        let matched = self.buffer.len() == self.target.len()
            && self.buffer.iter().zip(self.target).all(|(a, b)| a == b);
        matched && self.activate()
    }

    /// Manual trigger. `false` when already active.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
