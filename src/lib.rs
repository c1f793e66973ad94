#![cfg(target_arch = "wasm32")]
use crate::core::config::FxConfig;
use crate::core::controller::{self, CommandSink, PageState};
use crate::core::easing::ScrollArbiter;
use crate::diagnostics::Diagnostics;
use crate::dom::DomCache;
use crate::effects::DomSink;
use crate::events::WindowInput;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod ambient;
mod assets;
mod clipboard;
mod constants;
mod core;
mod diagnostics;
mod dom;
mod effects;
mod emitter;
mod error;
mod events;
mod navigation;
mod reveal;
mod timers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx loaded");
    Ok(())
}

/// Wire every page effect. Call once the document is parsed; a second call
/// is rejected.
#[wasm_bindgen]
pub fn mount() -> Result<Diagnostics, JsValue> {
    static MOUNTED: AtomicBool = AtomicBool::new(false);
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return Err(JsValue::from_str("site-fx already mounted"));
    }
    init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&e.to_string())
    })
}

fn init() -> anyhow::Result<Diagnostics> {
    let window = web::window().ok_or(error::FxError::NoWindow)?;
    let document = window.document().ok_or(error::FxError::NoDocument)?;

    let profile = assets::detect_profile(&window);
    if let Some(body) = document.body() {
        assets::apply_profile_classes(&body, &profile);
    }
    let config = FxConfig::for_profile(&profile);
    log::info!(
        "[init] scroll_parallax={} low_bandwidth={}",
        config.scroll_parallax,
        config.low_bandwidth
    );

    let cache = Rc::new(RefCell::new(DomCache::load(&document)));
    let (width, height) = dom::viewport_size();
    let state = Rc::new(RefCell::new(PageState::new(config.clone(), width, height)));
    let sink = DomSink::new(state.clone(), cache.clone());

    let mut input = WindowInput::new(window.clone(), document.clone());
    let clock: Rc<dyn Fn() -> Instant> = Rc::new(Instant::now);
    let dyn_sink: Rc<dyn CommandSink> = sink.clone();
    controller::attach(&state, &mut input, dyn_sink, clock);

    let reveal = reveal::wire(&document, state.clone());

    let arbiter = Rc::new(RefCell::new(ScrollArbiter::default()));
    navigation::wire_menu(&document);
    events::scroll::wire_anchor_links(
        &document,
        cache.borrow().navbar.clone(),
        arbiter,
        config.smooth_scroll_ms,
    );

    events::pointer::wire_tilt(&cache.borrow().tilt_elements);
    events::pointer::wire_title_hover(&document);
    events::pointer::wire_morphing_cards(&document);

    clipboard::wire(&document, config.copy_feedback);

    ambient::hero_particles(
        &document,
        cache.borrow().hero_particles.as_ref(),
        config.low_bandwidth,
    );
    ambient::floating_orbs(&document);
    ambient::timeline_markers(&document);

    assets::lazy_images(&document);
    assets::preload_critical(&document);
    assets::image_fallbacks(&document);
    assets::error_fallback(&window);

    ambient::progressive_init();
    log::info!("[init] effects mounted");

    Ok(Diagnostics::new(state, sink, cache, reveal, profile))
}
