use crate::core::easing::{ScrollArbiter, SmoothScroll};
use crate::core::input::InputEvent;
use crate::dom;
use crate::timers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn scroll_event() -> InputEvent {
    InputEvent::Scroll {
        offset: dom::scroll_offset(),
    }
}

/// Animate the viewport to `target`. Starting a new scroll retires the one in
/// flight, so only one animation ever writes the scroll position.
pub fn smooth_scroll_to(arbiter: &Rc<RefCell<ScrollArbiter>>, target: f64, duration_ms: f64) {
    let generation = arbiter.borrow_mut().begin();
    let animation = SmoothScroll::new(dom::scroll_offset(), target, duration_ms);
    log::debug!("[scroll] smooth scroll to {:.0} (gen {})", target, generation);
    step(arbiter.clone(), generation, animation);
}

fn step(arbiter: Rc<RefCell<ScrollArbiter>>, generation: u64, mut animation: SmoothScroll) {
    timers::request_frame(move |timestamp| {
        if !arbiter.borrow().is_current(generation) {
            return;
        }
        let sample = animation.sample(timestamp);
        if let Some(window) = web::window() {
            window.scroll_to_with_x_and_y(0.0, sample.offset);
        }
        if !sample.done {
            step(arbiter, generation, animation);
        }
    });
}

/// In-page anchors scroll smoothly to their section, minus the navbar height.
pub fn wire_anchor_links(
    document: &web::Document,
    navbar: Option<web::HtmlElement>,
    arbiter: Rc<RefCell<ScrollArbiter>>,
    duration_ms: f64,
) {
    for link in dom::query_all(document, r##"a[href^="#"]"##) {
        let doc = document.clone();
        let anchor = link.clone();
        let navbar = navbar.clone();
        let arbiter = arbiter.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(section) = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let navbar_height = navbar.as_ref().map(|n| n.offset_height()).unwrap_or(0) as f64;
            let target = section.offset_top() as f64 - navbar_height;
            smooth_scroll_to(&arbiter, target, duration_ms);
        });
    }
}
