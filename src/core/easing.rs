/// Cubic ease-in-out on normalized progress. Input is clamped to \[0, 1\].
#[inline]
pub fn ease_in_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// One sampled step of a smooth scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    pub offset: f64,
    pub done: bool,
}

/// Viewport scroll animation from a start offset to a target over a fixed
/// duration. Driven by refresh timestamps (milliseconds); the first sample
/// anchors the start time.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl SmoothScroll {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms,
            started_at: None,
        }
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    pub fn sample(&mut self, timestamp_ms: f64) -> ScrollStep {
        let t0 = *self.started_at.get_or_insert(timestamp_ms);
        let progress = if self.duration_ms > 0.0 {
            ((timestamp_ms - t0) / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        ScrollStep {
            offset: self.start + self.distance * ease_in_out_cubic(progress),
            done: progress >= 1.0,
        }
    }
}

/// Single-writer guard for smooth scrolls: starting a new animation retires
/// the one in flight.
#[derive(Debug, Default, Clone)]
pub struct ScrollArbiter {
    generation: u64,
}

impl ScrollArbiter {
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    #[inline]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
