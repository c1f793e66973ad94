// Host-side tests for the page controller: event handling, timers and frames.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod controller {
        include!("../src/core/controller.rs");
    }
    pub mod device {
        include!("../src/core/device.rs");
    }
    pub mod frame {
        include!("../src/core/frame.rs");
    }
    pub mod input {
        include!("../src/core/input.rs");
    }
    pub mod konami {
        include!("../src/core/konami.rs");
    }
    pub mod navbar {
        include!("../src/core/navbar.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod throttle {
        include!("../src/core/throttle.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use crate::constants::KONAMI_SEQUENCE;
use crate::core::config::FxConfig;
use crate::core::controller::*;
use crate::core::device::DeviceProfile;
use crate::core::frame::UpdateKind;
use crate::core::input::{InputEvent, ScriptedInput};
use crate::core::navbar::NavbarVisibility;
use crate::core::parallax::CursorPosition;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn page() -> PageState {
    PageState::new(FxConfig::default(), 1000.0, 800.0)
}

fn pointer(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove {
        client_x: x,
        client_y: y,
    }
}

fn frame_requests(cmds: &[Command], kind: UpdateKind) -> usize {
    cmds.iter()
        .filter(|c| **c == Command::RequestFrame(kind))
        .count()
}

fn spawned(cmds: &[Command]) -> Vec<u64> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::SpawnTrail { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

fn removed(cmds: &[Command]) -> Vec<u64> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::RemoveTrail { id } => Some(*id),
            _ => None,
        })
        .collect()
}

fn idle_timer(cmds: &[Command]) -> Option<Timer> {
    armed(cmds)
        .into_iter()
        .find(|t| matches!(t, Timer::PointerIdle(_)))
}

fn armed(cmds: &[Command]) -> Vec<Timer> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::ArmTimer { timer, .. } => Some(*timer),
            _ => None,
        })
        .collect()
}

#[test]
fn pointer_burst_paints_latest_position_once() {
    let mut page = page();
    let t0 = Instant::now();
    let mut cmds = Vec::new();
    cmds.extend(page.handle(&pointer(100.0, 100.0), t0));
    cmds.extend(page.handle(&pointer(300.0, 200.0), t0 + ms(5)));
    cmds.extend(page.handle(&pointer(500.0, 400.0), t0 + ms(10)));
    assert_eq!(frame_requests(&cmds, UpdateKind::CursorParallax), 1);

    let trailing = armed(&cmds)
        .into_iter()
        .find_map(|t| match t {
            Timer::PointerTrailing(ticket) => Some(ticket),
            _ => None,
        })
        .unwrap_or(0);
    let more = page.on_timer(Timer::PointerTrailing(trailing), t0 + ms(16));
    // Frame is still outstanding, so no second request.
    assert_eq!(frame_requests(&more, UpdateKind::CursorParallax), 0);

    let painted = page.run_frame(UpdateKind::CursorParallax);
    assert_eq!(
        painted,
        vec![Command::PaintCursorParallax(CursorPosition { x: 0.5, y: 0.5 })]
    );
}

#[test]
fn scroll_burst_requests_one_frame_per_kind() {
    let mut page = page();
    let t0 = Instant::now();
    let mut cmds = Vec::new();
    for i in 1..=10 {
        cmds.extend(page.handle(&InputEvent::Scroll { offset: i as f64 * 30.0 }, t0));
    }
    for kind in [
        UpdateKind::Navbar,
        UpdateKind::ScrollParallax,
        UpdateKind::Timeline,
    ] {
        assert_eq!(frame_requests(&cmds, kind), 1, "{:?}", kind);
    }
    assert_eq!(
        page.run_frame(UpdateKind::ScrollParallax),
        vec![Command::PaintScrollParallax { offset: 300.0 }]
    );
    // Completed gates re-arm on the next scroll.
    let next = page.handle(&InputEvent::Scroll { offset: 310.0 }, t0);
    assert_eq!(frame_requests(&next, UpdateKind::ScrollParallax), 1);
    assert_eq!(frame_requests(&next, UpdateKind::Navbar), 0);
}

#[test]
fn navbar_frame_hides_after_scrolling_down() {
    let mut page = page();
    let t0 = Instant::now();
    page.handle(&InputEvent::Scroll { offset: 400.0 }, t0);
    match page.run_frame(UpdateKind::Navbar).as_slice() {
        [Command::PaintNavbar(update)] => {
            assert_eq!(update.visibility, Some(NavbarVisibility::Hidden))
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn low_memory_skips_scroll_parallax() {
    let profile = DeviceProfile {
        memory_gb: Some(2.0),
        connection: None,
    };
    let mut page = PageState::new(FxConfig::for_profile(&profile), 1000.0, 800.0);
    let cmds = page.handle(&InputEvent::Scroll { offset: 50.0 }, Instant::now());
    assert_eq!(frame_requests(&cmds, UpdateKind::ScrollParallax), 0);
    assert_eq!(frame_requests(&cmds, UpdateKind::Navbar), 1);
    assert!(page.run_frame(UpdateKind::ScrollParallax).is_empty());
}

#[test]
fn trail_pool_is_bounded_and_evicts_oldest() {
    let mut page = page();
    let t0 = Instant::now();
    let mut cmds = Vec::new();
    for i in 0..7u64 {
        cmds.extend(page.handle(&pointer(i as f64, 0.0), t0 + ms(i * 60)));
        assert!(page.live_trails() <= 5);
    }
    assert_eq!(spawned(&cmds), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(removed(&cmds), vec![1, 2]);
    assert_eq!(page.live_trails(), 5);
}

#[test]
fn trail_expiry_removes_once() {
    let mut page = page();
    let t0 = Instant::now();
    let cmds = page.handle(&pointer(10.0, 10.0), t0);
    assert!(armed(&cmds).contains(&Timer::TrailExpired(1)));
    assert_eq!(
        page.on_timer(Timer::TrailExpired(1), t0 + ms(800)),
        vec![Command::RemoveTrail { id: 1 }]
    );
    assert!(page.on_timer(Timer::TrailExpired(1), t0 + ms(900)).is_empty());
    assert_eq!(page.live_trails(), 0);
}

#[test]
fn expiry_after_eviction_is_noop() {
    let mut page = PageState::new(
        FxConfig {
            trail_capacity: 1,
            ..FxConfig::default()
        },
        1000.0,
        800.0,
    );
    let t0 = Instant::now();
    page.handle(&pointer(1.0, 1.0), t0);
    let cmds = page.handle(&pointer(2.0, 2.0), t0 + ms(60));
    assert_eq!(removed(&cmds), vec![1]);
    assert!(page.on_timer(Timer::TrailExpired(1), t0 + ms(800)).is_empty());
}

#[test]
fn trailing_trail_spawn_uses_latest_pointer() {
    let mut page = page();
    let t0 = Instant::now();
    page.handle(&pointer(0.0, 0.0), t0);
    let cmds = page.handle(&pointer(40.0, 40.0), t0 + ms(20));
    page.handle(&pointer(90.0, 70.0), t0 + ms(30));
    let ticket = armed(&cmds)
        .into_iter()
        .find_map(|t| match t {
            Timer::TrailTrailing(ticket) => Some(ticket),
            _ => None,
        })
        .unwrap_or(0);
    let out = page.on_timer(Timer::TrailTrailing(ticket), t0 + ms(50));
    assert!(out.contains(&Command::SpawnTrail {
        id: 2,
        client_x: 90.0,
        client_y: 70.0
    }));
}

#[test]
fn pointer_moving_clears_after_idle() {
    let mut page = page();
    let t0 = Instant::now();
    let first = idle_timer(&page.handle(&pointer(1.0, 1.0), t0));
    let second = idle_timer(&page.handle(&pointer(2.0, 2.0), t0 + ms(20)));
    assert!(page.is_pointer_moving());

    // The first idle timer was superseded by the second move.
    if let Some(stale) = first {
        page.on_timer(stale, t0 + ms(150));
    }
    assert!(page.is_pointer_moving());

    if let Some(current) = second {
        page.on_timer(current, t0 + ms(170));
    }
    assert!(!page.is_pointer_moving());
}

#[test]
fn konami_starts_and_reverts_easter_egg() {
    let mut page = page();
    let t0 = Instant::now();
    let mut cmds = Vec::new();
    for code in KONAMI_SEQUENCE {
        cmds.extend(page.handle(&InputEvent::KeyDown { key_code: code }, t0));
    }
    assert!(cmds.contains(&Command::StartEasterEgg));
    assert!(cmds.contains(&Command::ArmTimer {
        timer: Timer::EasterEggEnd,
        delay: ms(8000)
    }));
    assert!(page.easter_egg_active());

    // Typing it again while active does nothing.
    let mut again = Vec::new();
    for code in KONAMI_SEQUENCE {
        again.extend(page.handle(&InputEvent::KeyDown { key_code: code }, t0));
    }
    assert!(!again.contains(&Command::StartEasterEgg));

    assert_eq!(
        page.on_timer(Timer::EasterEggEnd, t0 + ms(8000)),
        vec![Command::EndEasterEgg]
    );
    assert!(!page.easter_egg_active());
    assert!(page.on_timer(Timer::EasterEggEnd, t0 + ms(9000)).is_empty());
}

#[test]
fn manual_easter_egg_trigger() {
    let mut page = page();
    assert_eq!(page.trigger_easter_egg().len(), 2);
    assert!(page.trigger_easter_egg().is_empty());
}

#[test]
fn disabling_particles_detaches_trails() {
    let mut page = page();
    let t0 = Instant::now();
    page.handle(&pointer(1.0, 1.0), t0);
    page.handle(&pointer(2.0, 2.0), t0 + ms(60));
    let cmds = page.set_particles(false);
    assert_eq!(removed(&cmds), vec![1, 2]);
    assert_eq!(page.live_trails(), 0);

    let later = page.handle(&pointer(3.0, 3.0), t0 + ms(200));
    assert!(spawned(&later).is_empty());
    assert!(page.set_particles(true).is_empty());
    assert!(page.particles_enabled());
}

#[test]
fn particle_toggle_shows_in_stats_summary() {
    let mut page = page();
    page.set_particles(false);
    let rows = page.config().summary();
    assert!(rows.iter().any(|(k, v)| *k == "Particles" && v == "OFF"));
    page.set_particles(true);
    let rows = page.config().summary();
    assert!(rows.iter().any(|(k, v)| *k == "Particles" && v == "ON"));
}

#[test]
fn early_pointer_trailing_timer_is_rearmed() {
    let mut page = page();
    let t0 = Instant::now();
    page.handle(&pointer(100.0, 100.0), t0);
    let cmds = page.handle(&pointer(500.0, 400.0), t0 + Duration::from_micros(500));
    let timer = armed(&cmds)
        .into_iter()
        .find(|t| matches!(t, Timer::PointerTrailing(_)))
        .unwrap_or(Timer::PointerTrailing(0));

    let early = page.on_timer(timer, t0 + ms(15));
    assert_eq!(
        early,
        vec![Command::ArmTimer {
            timer,
            delay: ms(1)
        }]
    );
    assert_eq!(page.cursor(), CursorPosition { x: 0.1, y: 0.125 });

    page.on_timer(timer, t0 + ms(16));
    assert_eq!(page.cursor(), CursorPosition { x: 0.5, y: 0.5 });
}

#[test]
fn resize_updates_normalization() {
    let mut page = page();
    page.handle(
        &InputEvent::Resize {
            width: 200.0,
            height: 100.0,
        },
        Instant::now(),
    );
    assert_eq!(page.viewport(), (200.0, 100.0));
    page.handle(&pointer(50.0, 25.0), Instant::now());
    assert_eq!(page.cursor(), CursorPosition { x: 0.25, y: 0.25 });
}

#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<Command>>,
}

impl CommandSink for Recorder {
    fn apply(&self, command: Command) {
        self.seen.borrow_mut().push(command);
    }
}

#[test]
fn attach_routes_scripted_events_to_sink() {
    let state = Rc::new(RefCell::new(page()));
    let recorder = Rc::new(Recorder::default());
    let sink: Rc<dyn CommandSink> = recorder.clone();
    let t0 = Instant::now();
    let now = Rc::new(Cell::new(t0));
    let clock_now = now.clone();
    let clock: Rc<dyn Fn() -> Instant> = Rc::new(move || clock_now.get());

    let mut input = ScriptedInput::new();
    attach(&state, &mut input, sink, clock);
    assert_eq!(input.handler_count(), 4);

    assert_eq!(input.emit(&InputEvent::Scroll { offset: 120.0 }), 1);
    now.set(t0 + ms(100));
    input.emit(&pointer(10.0, 10.0));

    let seen = recorder.seen.borrow();
    assert_eq!(frame_requests(&seen, UpdateKind::Navbar), 1);
    assert_eq!(spawned(&seen), vec![1]);
    assert_eq!(state.borrow().scroll_offset(), 120.0);
}
