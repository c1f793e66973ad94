use crate::constants::{EASTER_EGG_FILTER, EASTER_EGG_SPAWN_INTERVAL_MS};
use crate::core::controller::{drive, Command, CommandSink, PageState, Timer};
use crate::core::frame::UpdateKind;
use crate::core::navbar::NavbarUpdate;
use crate::core::parallax::{self, CursorPosition};
use crate::core::particles;
use crate::dom::{self, DomCache};
use crate::emitter;
use crate::timers;
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use web_sys as web;

/// Applies controller commands to the live document.
pub struct DomSink {
    me: Weak<DomSink>,
    state: Rc<RefCell<PageState>>,
    cache: Rc<RefCell<DomCache>>,
    trails: RefCell<FnvHashMap<u64, web::HtmlElement>>,
}

impl DomSink {
    pub fn new(state: Rc<RefCell<PageState>>, cache: Rc<RefCell<DomCache>>) -> Rc<Self> {
        Rc::new_cyclic(|me| DomSink {
            me: me.clone(),
            state,
            cache,
            trails: RefCell::new(FnvHashMap::default()),
        })
    }

    pub fn live_trail_nodes(&self) -> usize {
        self.trails.borrow().len()
    }

    fn schedule_frame(&self, kind: UpdateKind) {
        let Some(me) = self.me.upgrade() else {
            return;
        };
        timers::request_frame(move |_ts| {
            let commands = me.state.borrow_mut().run_frame(kind);
            drive(me.as_ref(), commands);
        });
    }

    fn arm_timer(&self, timer: Timer, delay: Duration) {
        let Some(me) = self.me.upgrade() else {
            return;
        };
        timers::set_timeout(timers::millis(delay), move || {
            let commands = me.state.borrow_mut().on_timer(timer, Instant::now());
            drive(me.as_ref(), commands);
        });
    }

    fn paint_cursor_parallax(&self, cursor: CursorPosition) {
        for el in self.cache.borrow().cursor_parallax.iter() {
            if !dom::is_rendered(el) {
                continue;
            }
            let speed = parallax::parse_speed(el.get_attribute("data-speed").as_deref());
            let (x, y) = parallax::cursor_offset(cursor, speed);
            dom::set_style(el, "transform", &parallax::translate3d(x, y));
        }
    }

    fn paint_navbar(&self, update: NavbarUpdate) {
        let cache = self.cache.borrow();
        let Some(navbar) = cache.navbar.as_ref() else {
            return;
        };
        dom::set_style(navbar, "background", update.style.background());
        dom::set_style(navbar, "box-shadow", update.style.box_shadow());
        dom::set_style(navbar, "backdrop-filter", update.style.backdrop_filter());
        if let Some(visibility) = update.visibility {
            dom::set_style(navbar, "transform", visibility.transform());
        }
    }

    fn paint_scroll_parallax(&self, offset: f64) {
        let (_, viewport_h) = dom::viewport_size();
        for el in self.cache.borrow().parallax_elements.iter() {
            if !dom::is_rendered(el) || !dom::rect(el).overlaps_viewport(viewport_h) {
                continue;
            }
            let speed = parallax::parse_speed(el.get_attribute("data-parallax").as_deref());
            let y = parallax::scroll_offset(offset, speed);
            dom::set_style(el, "transform", &parallax::translate3d(0.0, y));
        }
    }

    fn paint_timeline(&self) {
        let cache = self.cache.borrow();
        let (Some(timeline), Some(progress)) =
            (cache.timeline.as_ref(), cache.timeline_progress.as_ref())
        else {
            return;
        };
        let (_, viewport_h) = dom::viewport_size();
        if let Some(fill) = parallax::timeline_progress(dom::rect(timeline), viewport_h) {
            dom::set_style(progress, "height", &format!("{}%", fill * 100.0));
        }
    }

    fn spawn_trail(&self, id: u64, client_x: f64, client_y: f64) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        if let Some(el) = emitter::create(&document, &body, &particles::trail(client_x, client_y)) {
            self.trails.borrow_mut().insert(id, el);
        }
    }

    fn remove_trail(&self, id: u64) {
        if let Some(el) = self.trails.borrow_mut().remove(&id) {
            dom::detach(&el);
        }
    }

    fn start_easter_egg(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        _ = body.class_list().add_1("easter-egg-active");
        dom::set_style(&body, "filter", EASTER_EGG_FILTER);

        let (w, h) = dom::viewport_size();
        let count = particles::easter_egg_particle_count(w);
        for i in 0..count {
            let doc = document.clone();
            timers::set_timeout((i as u32 * EASTER_EGG_SPAWN_INTERVAL_MS) as i32, move || {
                let spec = particles::easter_egg(&mut rand::thread_rng(), w, h);
                emitter::emit(&doc, &spec);
            });
        }
        log::info!("[konami] easter egg active, particles={}", count);
    }

    fn end_easter_egg(&self) {
        if let Some(body) = dom::body() {
            _ = body.style().remove_property("filter");
            _ = body.class_list().remove_1("easter-egg-active");
        }
        log::info!("[konami] easter egg reverted");
    }
}

impl CommandSink for DomSink {
    fn apply(&self, command: Command) {
        match command {
            Command::RequestFrame(kind) => self.schedule_frame(kind),
            Command::ArmTimer { timer, delay } => self.arm_timer(timer, delay),
            Command::PaintCursorParallax(cursor) => self.paint_cursor_parallax(cursor),
            Command::PaintNavbar(update) => self.paint_navbar(update),
            Command::PaintScrollParallax { offset } => self.paint_scroll_parallax(offset),
            Command::PaintTimeline => self.paint_timeline(),
            Command::SpawnTrail {
                id,
                client_x,
                client_y,
            } => self.spawn_trail(id, client_x, client_y),
            Command::RemoveTrail { id } => self.remove_trail(id),
            Command::StartEasterEgg => self.start_easter_egg(),
            Command::EndEasterEgg => self.end_easter_egg(),
        }
    }
}
