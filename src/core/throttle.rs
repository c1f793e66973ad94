use instant::Instant;
use std::time::Duration;

/// Outcome of feeding one call into a [`Throttle`].
#[derive(Clone, Debug, PartialEq)]
pub enum Throttled<A> {
    /// Quiet period elapsed: run the handler now with these arguments.
    Fire(A),
    /// Arm a timer for `delay`, then call [`Throttle::flush`] with `ticket`.
    Schedule { delay: Duration, ticket: u64 },
    /// A trailing call is already armed; it will deliver these arguments instead.
    Coalesced,
}

/// Outcome of a trailing timer reaching [`Throttle::flush`].
#[derive(Clone, Debug, PartialEq)]
pub enum Flushed<A> {
    /// Interval elapsed: run the handler with the latest arguments.
    Fire(A),
    /// The timer woke before the interval ended; arm it again for `delay`
    /// with the same ticket.
    Rearm(Duration),
    /// Superseded by a leading call or nothing left to deliver.
    Stale,
}

/// Whole milliseconds for a timer that must not wake before `delay`.
#[inline]
pub fn ceil_millis(delay: Duration) -> u64 {
    let micros = delay.as_micros();
    let ms = micros / 1000 + u128::from(micros % 1000 != 0);
    ms.min(u64::MAX as u128) as u64
}

/// Leading + trailing edge rate limiter.
///
/// The first call of a quiet period fires immediately. Calls arriving inside
/// the interval are folded into a single trailing call which always carries
/// the arguments of the most recent call.
#[derive(Debug)]
pub struct Throttle<A> {
    interval: Duration,
    previous: Option<Instant>,
    pending: Option<A>,
    armed: Option<u64>,
    next_ticket: u64,
}

impl<A> Throttle<A> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            previous: None,
            pending: None,
            armed: None,
            next_ticket: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn call(&mut self, now: Instant, args: A) -> Throttled<A> {
        let remaining = match self.previous {
            // A clock that went backwards counts as a fresh quiet period.
            Some(prev) if now >= prev => self.interval.checked_sub(now.duration_since(prev)),
            _ => None,
        };
        match remaining {
            None | Some(Duration::ZERO) => {
                // Leading edge supersedes any armed trailing call.
                self.armed = None;
                self.pending = None;
                self.previous = Some(now);
                Throttled::Fire(args)
            }
            Some(delay) => {
                self.pending = Some(args);
                if self.armed.is_some() {
                    return Throttled::Coalesced;
                }
                self.next_ticket += 1;
                self.armed = Some(self.next_ticket);
                Throttled::Schedule {
                    delay,
                    ticket: self.next_ticket,
                }
            }
        }
    }

    /// Timer callback for a trailing call. Delivers the latest arguments if
    /// `ticket` is still the armed one and a full interval has passed since
    /// the previous execution.
    pub fn flush(&mut self, now: Instant, ticket: u64) -> Flushed<A> {
        if self.armed != Some(ticket) {
            return Flushed::Stale;
        }
        if let Some(prev) = self.previous {
            if now >= prev {
                let elapsed = now.duration_since(prev);
                if elapsed < self.interval {
                    return Flushed::Rearm(self.interval - elapsed);
                }
            }
        }
        self.armed = None;
        match self.pending.take() {
            Some(args) => {
                self.previous = Some(now);
                Flushed::Fire(args)
            }
            None => Flushed::Stale,
        }
    }

    #[inline]
    pub fn has_trailing(&self) -> bool {
        self.armed.is_some()
    }
}

/// Trailing-only delay coalescer.
///
/// Every `trigger` invalidates the tokens handed out before it, so only the
/// timer armed by the last trigger observes `is_current == true`.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    pub fn trigger(&mut self) -> (u64, Duration) {
        self.generation += 1;
        (self.generation, self.delay)
    }

    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}
