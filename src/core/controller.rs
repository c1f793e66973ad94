// Page controller: owns every piece of transient effect state and turns
// input events, timer expiries and frame callbacks into `Command`s for the
// platform layer to apply.

use crate::core::config::FxConfig;
use crate::core::frame::{FrameGates, UpdateKind};
use crate::core::input::{InputEvent, InputKind, InputSource};
use crate::core::konami::KonamiDetector;
use crate::core::navbar::{NavbarController, NavbarUpdate};
use crate::core::parallax::CursorPosition;
use crate::core::reveal::RevealTracker;
use crate::core::throttle::{Debounce, Flushed, Throttle, Throttled};
use crate::core::trail::TrailPool;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    PointerTrailing(u64),
    TrailTrailing(u64),
    PointerIdle(u64),
    TrailExpired(u64),
    EasterEggEnd,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Schedule a refresh callback that calls [`PageState::run_frame`].
    RequestFrame(UpdateKind),
    /// Arm a one-shot timer that calls [`PageState::on_timer`].
    ArmTimer { timer: Timer, delay: Duration },
    PaintCursorParallax(CursorPosition),
    PaintNavbar(NavbarUpdate),
    PaintScrollParallax { offset: f64 },
    /// Measure the timeline and update its fill.
    PaintTimeline,
    SpawnTrail { id: u64, client_x: f64, client_y: f64 },
    /// Detach a trail node. A node that is already gone is a no-op.
    RemoveTrail { id: u64 },
    StartEasterEgg,
    EndEasterEgg,
}

pub trait CommandSink {
    fn apply(&self, command: Command);
}

pub fn drive(sink: &dyn CommandSink, commands: Vec<Command>) {
    for command in commands {
        sink.apply(command);
    }
}

pub struct PageState {
    config: FxConfig,
    viewport: (f64, f64),
    cursor: CursorPosition,
    pointer_moving: bool,
    scroll: f64,
    gates: FrameGates,
    pointer_throttle: Throttle<(f64, f64)>,
    trail_throttle: Throttle<(f64, f64)>,
    pointer_idle: Debounce,
    trails: TrailPool<u64>,
    next_trail: u64,
    navbar: NavbarController,
    konami: KonamiDetector,
    reveal: RevealTracker,
}

impl PageState {
    pub fn new(config: FxConfig, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            viewport: (viewport_w, viewport_h),
            cursor: CursorPosition::CENTER,
            pointer_moving: false,
            scroll: 0.0,
            gates: FrameGates::default(),
            pointer_throttle: Throttle::new(config.pointer_throttle),
            trail_throttle: Throttle::new(config.trail_throttle),
            pointer_idle: Debounce::new(config.pointer_idle),
            trails: TrailPool::new(config.trail_capacity),
            next_trail: 0,
            navbar: NavbarController::default(),
            konami: KonamiDetector::default(),
            reveal: RevealTracker::with_threshold(config.reveal_threshold),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    #[inline]
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    #[inline]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    #[inline]
    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    #[inline]
    pub fn is_pointer_moving(&self) -> bool {
        self.pointer_moving
    }

    #[inline]
    pub fn live_trails(&self) -> usize {
        self.trails.len()
    }

    #[inline]
    pub fn easter_egg_active(&self) -> bool {
        self.konami.is_active()
    }

    #[inline]
    pub fn particles_enabled(&self) -> bool {
        self.config.particles
    }

    pub fn reveal(&mut self) -> &mut RevealTracker {
        &mut self.reveal
    }

    pub fn handle(&mut self, event: &InputEvent, now: Instant) -> Vec<Command> {
        let mut out = Vec::new();
        match *event {
            InputEvent::PointerMove { client_x, client_y } => {
                match self.pointer_throttle.call(now, (client_x, client_y)) {
                    Throttled::Fire((x, y)) => self.apply_pointer(x, y, &mut out),
                    Throttled::Schedule { delay, ticket } => out.push(Command::ArmTimer {
                        timer: Timer::PointerTrailing(ticket),
                        delay,
                    }),
                    Throttled::Coalesced => {}
                }
                if self.config.particles {
                    match self.trail_throttle.call(now, (client_x, client_y)) {
                        Throttled::Fire((x, y)) => self.spawn_trail(x, y, &mut out),
                        Throttled::Schedule { delay, ticket } => out.push(Command::ArmTimer {
                            timer: Timer::TrailTrailing(ticket),
                            delay,
                        }),
                        Throttled::Coalesced => {}
                    }
                }
            }
            InputEvent::Scroll { offset } => {
                self.scroll = offset;
                self.request(UpdateKind::Navbar, &mut out);
                if self.config.scroll_parallax {
                    self.request(UpdateKind::ScrollParallax, &mut out);
                }
                self.request(UpdateKind::Timeline, &mut out);
            }
            InputEvent::KeyDown { key_code } => {
                if self.konami.push(key_code) {
                    log::info!("[konami] sequence matched");
                    self.start_easter_egg(&mut out);
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = (width, height);
            }
        }
        out
    }

    pub fn on_timer(&mut self, timer: Timer, now: Instant) -> Vec<Command> {
        let mut out = Vec::new();
        match timer {
            Timer::PointerTrailing(ticket) => match self.pointer_throttle.flush(now, ticket) {
                Flushed::Fire((x, y)) => self.apply_pointer(x, y, &mut out),
                Flushed::Rearm(delay) => out.push(Command::ArmTimer { timer, delay }),
                Flushed::Stale => {}
            },
            Timer::TrailTrailing(ticket) => match self.trail_throttle.flush(now, ticket) {
                Flushed::Fire((x, y)) if self.config.particles => {
                    self.spawn_trail(x, y, &mut out)
                }
                Flushed::Rearm(delay) => out.push(Command::ArmTimer { timer, delay }),
                _ => {}
            },
            Timer::PointerIdle(token) => {
                if self.pointer_idle.is_current(token) {
                    self.pointer_moving = false;
                }
            }
            Timer::TrailExpired(id) => {
                if self.trails.expire(&id).is_some() {
                    out.push(Command::RemoveTrail { id });
                }
            }
            Timer::EasterEggEnd => {
                if self.konami.is_active() {
                    self.konami.deactivate();
                    out.push(Command::EndEasterEgg);
                }
            }
        }
        out
    }

    /// Refresh callback for `kind`. Reads the latest state, not the state at
    /// request time.
    pub fn run_frame(&mut self, kind: UpdateKind) -> Vec<Command> {
        self.gates.complete(kind);
        let command = match kind {
            UpdateKind::CursorParallax => Command::PaintCursorParallax(self.cursor),
            UpdateKind::Navbar => Command::PaintNavbar(self.navbar.update(self.scroll)),
            UpdateKind::ScrollParallax => {
                if !self.config.scroll_parallax {
                    return Vec::new();
                }
                Command::PaintScrollParallax {
                    offset: self.scroll,
                }
            }
            UpdateKind::Timeline => Command::PaintTimeline,
        };
        vec![command]
    }

    /// Manual easter-egg trigger. Empty when the effect is already running.
    pub fn trigger_easter_egg(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        if self.konami.activate() {
            self.start_easter_egg(&mut out);
        }
        out
    }

    /// Toggle decorative particles; disabling detaches every live trail.
    pub fn set_particles(&mut self, enabled: bool) -> Vec<Command> {
        self.config.particles = enabled;
        if enabled {
            return Vec::new();
        }
        self.trails
            .drain()
            .into_iter()
            .map(|id| Command::RemoveTrail { id })
            .collect()
    }

    fn request(&mut self, kind: UpdateKind, out: &mut Vec<Command>) {
        if self.gates.request(kind) {
            out.push(Command::RequestFrame(kind));
        }
    }

    fn apply_pointer(&mut self, client_x: f64, client_y: f64, out: &mut Vec<Command>) {
        let (w, h) = self.viewport;
        self.cursor = CursorPosition::from_client(client_x, client_y, w, h);
        self.pointer_moving = true;
        let (token, delay) = self.pointer_idle.trigger();
        out.push(Command::ArmTimer {
            timer: Timer::PointerIdle(token),
            delay,
        });
        self.request(UpdateKind::CursorParallax, out);
    }

    fn spawn_trail(&mut self, client_x: f64, client_y: f64, out: &mut Vec<Command>) {
        self.next_trail += 1;
        let id = self.next_trail;
        if let Some(evicted) = self.trails.push(id) {
            out.push(Command::RemoveTrail { id: evicted });
        }
        out.push(Command::SpawnTrail {
            id,
            client_x,
            client_y,
        });
        out.push(Command::ArmTimer {
            timer: Timer::TrailExpired(id),
            delay: self.config.trail_lifetime,
        });
    }

    fn start_easter_egg(&mut self, out: &mut Vec<Command>) {
        out.push(Command::StartEasterEgg);
        out.push(Command::ArmTimer {
            timer: Timer::EasterEggEnd,
            delay: self.config.easter_egg_duration,
        });
    }
}

/// Subscribe the controller to every input kind on `source`.
pub fn attach<S: InputSource>(
    state: &Rc<RefCell<PageState>>,
    source: &mut S,
    sink: Rc<dyn CommandSink>,
    clock: Rc<dyn Fn() -> Instant>,
) {
    for kind in [
        InputKind::PointerMove,
        InputKind::Scroll,
        InputKind::KeyDown,
        InputKind::Resize,
    ] {
        let state = state.clone();
        let sink = sink.clone();
        let clock = clock.clone();
        source.subscribe(
            kind,
            Box::new(move |event| {
                let commands = state.borrow_mut().handle(event, clock());
                drive(sink.as_ref(), commands);
            }),
        );
    }
}
