use crate::core::controller::{drive, PageState};
use crate::core::device::DeviceProfile;
use crate::dom::{self, DomCache};
use crate::effects::DomSink;
use crate::reveal::RevealWiring;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

const PARTICLE_SELECTOR: &str = ".hero-particles, .floating-orbs, .interactive-particle";

/// Developer handle returned by `mount()`; lets the console poke at the
/// running effects.
#[wasm_bindgen]
pub struct Diagnostics {
    state: Rc<RefCell<PageState>>,
    sink: Rc<DomSink>,
    cache: Rc<RefCell<DomCache>>,
    reveal: Option<RevealWiring>,
    profile: DeviceProfile,
}

impl Diagnostics {
    pub(crate) fn new(
        state: Rc<RefCell<PageState>>,
        sink: Rc<DomSink>,
        cache: Rc<RefCell<DomCache>>,
        reveal: Option<RevealWiring>,
        profile: DeviceProfile,
    ) -> Self {
        Self {
            state,
            sink,
            cache,
            reveal,
            profile,
        }
    }
}

#[wasm_bindgen]
impl Diagnostics {
    /// Flip `fallback-mode` on `<body>`. Returns whether animations are on.
    #[wasm_bindgen(js_name = toggleAnimations)]
    pub fn toggle_animations(&self) -> bool {
        let Some(body) = dom::body() else {
            return true;
        };
        let fallback = body.class_list().toggle("fallback-mode").unwrap_or(false);
        log::info!("[diag] animations {}", if fallback { "OFF" } else { "ON" });
        !fallback
    }

    /// Show or hide every decorative particle. Returns whether they are on.
    #[wasm_bindgen(js_name = toggleParticles)]
    pub fn toggle_particles(&self) -> bool {
        let enabled = !self.state.borrow().particles_enabled();
        let commands = self.state.borrow_mut().set_particles(enabled);
        drive(self.sink.as_ref(), commands);
        if let Some(document) = dom::window_document() {
            let display = if enabled { "" } else { "none" };
            for el in dom::query_all(&document, PARTICLE_SELECTOR) {
                dom::set_style(&el, "display", display);
            }
        }
        log::info!("[diag] particles {}", if enabled { "ON" } else { "OFF" });
        enabled
    }

    /// Hide every revealed element again so scrolling replays the reveals.
    #[wasm_bindgen(js_name = resetScrollAnimations)]
    pub fn reset_scroll_animations(&self) -> usize {
        let count = self.reveal.as_ref().map(|r| r.reset()).unwrap_or(0);
        log::info!("[diag] {} scroll animations reset", count);
        count
    }

    #[wasm_bindgen(js_name = showPerformanceStats)]
    pub fn show_performance_stats(&self) {
        let revealed = self.state.borrow_mut().reveal().revealed_count();
        let table = js_sys::Object::new();
        let row = |key: &str, value: String| {
            _ = js_sys::Reflect::set(&table, &key.into(), &value.into());
        };
        let state = self.state.borrow();
        for (key, value) in state.config().summary() {
            row(key, value);
        }
        row("Live trails", state.live_trails().to_string());
        row("Revealed", revealed.to_string());
        row("Trail nodes", self.sink.live_trail_nodes().to_string());
        row(
            "Memory",
            self.profile
                .memory_gb
                .map(|gb| format!("{}GB", gb))
                .unwrap_or_else(|| "n/a".to_string()),
        );
        row(
            "Connection",
            self.profile
                .connection
                .clone()
                .unwrap_or_else(|| "n/a".to_string()),
        );
        web::console::table_1(&table);
        log::info!(
            "[diag] scroll={:.0} cursor=({:.2}, {:.2})",
            state.scroll_offset(),
            state.cursor().x,
            state.cursor().y
        );
    }

    #[wasm_bindgen(js_name = testEasterEgg)]
    pub fn test_easter_egg(&self) -> bool {
        let commands = self.state.borrow_mut().trigger_easter_egg();
        let started = !commands.is_empty();
        drive(self.sink.as_ref(), commands);
        started
    }

    /// Drop and re-query the cached element handles.
    #[wasm_bindgen(js_name = clearCache)]
    pub fn clear_cache(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let mut cache = self.cache.borrow_mut();
        cache.clear();
        *cache = DomCache::load(&document);
        log::info!("[diag] DOM cache reloaded");
    }
}
