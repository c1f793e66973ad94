use crate::constants::{REVEAL_RATIO_THRESHOLD, REVEAL_STAGGER_MAX_SEC, REVEAL_STAGGER_SEC};
use fnv::FnvHashSet;

pub const REVEAL_SELECTOR: &str = ".team-card, .timeline-item, .resource-card, .section-title";
pub const REVEALED_CLASS: &str = "animate-in";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px) scale(0.95)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0) scale(1)";

/// Which micro-animation follows the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCategory {
    TeamCard,
    TimelineItem,
    ResourceCard,
    SectionTitle,
}

impl RevealCategory {
    /// First matching class wins, in card / timeline / resource / title order.
    pub fn classify<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut found: Option<Self> = None;
        for class in classes {
            let cat = match class {
                "team-card" => Self::TeamCard,
                "timeline-item" => Self::TimelineItem,
                "resource-card" => Self::ResourceCard,
                "section-title" => Self::SectionTitle,
                _ => continue,
            };
            found = Some(match found {
                Some(prev) if prev.rank() <= cat.rank() => prev,
                _ => cat,
            });
        }
        found
    }

    fn rank(self) -> u8 {
        match self {
            Self::TeamCard => 0,
            Self::TimelineItem => 1,
            Self::ResourceCard => 2,
            Self::SectionTitle => 3,
        }
    }
}

/// Staggered transition delay for the `index`-th observed element.
#[inline]
pub fn stagger_delay_sec(index: usize) -> f64 {
    (index as f64 * REVEAL_STAGGER_SEC).min(REVEAL_STAGGER_MAX_SEC)
}

pub fn hidden_transition(index: usize) -> String {
    format!(
        "all 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94) {}s",
        stagger_delay_sec(index)
    )
}

/// Per-element `pending -> revealed` state machine. Elements are keyed by the
/// id the page assigns when it starts observing them.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    pending: FnvHashSet<u32>,
    revealed: FnvHashSet<u32>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::with_threshold(REVEAL_RATIO_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            pending: FnvHashSet::default(),
            revealed: FnvHashSet::default(),
        }
    }

    /// Start observing `id`. Returns `false` if it is already tracked.
    pub fn observe(&mut self, id: u32) -> bool {
        if self.revealed.contains(&id) {
            return false;
        }
        self.pending.insert(id)
    }

    /// Intersection report. Returns `true` exactly once per element: the
    /// caller must then apply the final style and stop observing it.
    pub fn on_intersection(&mut self, id: u32, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio <= self.threshold {
            return false;
        }
        if !self.pending.remove(&id) {
            return false;
        }
        self.revealed.insert(id);
        true
    }

    #[inline]
    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Return every revealed element to pending. The caller re-hides and
    /// re-observes the returned ids.
    pub fn reset(&mut self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.revealed.drain().collect();
        ids.sort_unstable();
        self.pending.extend(ids.iter().copied());
        ids
    }
}
