use crate::constants::{MORPH_BASE_RADIUS_PX, MORPH_INTERVAL_MS};
use crate::core::frame::FrameSlot;
use crate::core::input::InputEvent;
use crate::core::parallax;
use crate::core::particles;
use crate::dom;
use crate::timers;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const HOVER_EASE: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

#[inline]
pub fn pointer_event(ev: &web::MouseEvent) -> InputEvent {
    InputEvent::PointerMove {
        client_x: ev.client_x() as f64,
        client_y: ev.client_y() as f64,
    }
}

/// 3D tilt toward the pointer on every `[data-tilt]` element. At most one
/// frame is outstanding per element; leaving cancels it and flattens.
pub fn wire_tilt(elements: &[web::HtmlElement]) {
    for el in elements {
        let slot: Rc<RefCell<FrameSlot<i32>>> = Rc::new(RefCell::new(FrameSlot::default()));

        let target = el.clone();
        let move_slot = slot.clone();
        dom::listen(el, "mousemove", move |ev: web::MouseEvent| {
            if move_slot.borrow().is_armed() {
                return;
            }
            let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);
            let el = target.clone();
            let frame_slot = move_slot.clone();
            let handle = timers::request_frame(move |_ts| {
                let (rx, ry) = parallax::tilt_angles(cx, cy, dom::rect(&el));
                dom::set_style(&el, "transform", &parallax::tilt_transform(rx, ry));
                frame_slot.borrow_mut().clear();
            });
            if let Some(handle) = handle {
                move_slot.borrow_mut().arm(handle);
            }
        });

        let target = el.clone();
        dom::listen(el, "mouseleave", move |_ev: web::MouseEvent| {
            if let Some(handle) = slot.borrow_mut().cancel() {
                timers::cancel_frame(handle);
            }
            dom::set_style(&target, "transform", &parallax::tilt_transform(0.0, 0.0));
        });
    }
}

/// Staggered breathing delay and hover scale on the hero title words.
pub fn wire_title_hover(document: &web::Document) {
    for (index, word) in dom::query_all(document, ".title-word").into_iter().enumerate() {
        dom::set_style(&word, "animation-delay", &format!("{}s", index as f64 * 0.3));

        let el = word.clone();
        dom::listen(&word, "mouseenter", move |_ev: web::MouseEvent| {
            dom::set_style(&el, "transform", "scale(1.05)");
            dom::set_style(&el, "transition", &format!("transform 0.3s {}", HOVER_EASE));
        });
        let el = word.clone();
        dom::listen(&word, "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_style(&el, "transform", "scale(1)");
        });
    }
}

/// Hovered cards periodically morph their border radius.
pub fn wire_morphing_cards(document: &web::Document) {
    for card in dom::query_all(document, ".team-card, .resource-card") {
        let interval: Rc<RefCell<Option<timers::Interval>>> = Rc::new(RefCell::new(None));

        let el = card.clone();
        let enter_interval = interval.clone();
        dom::listen(&card, "mouseenter", move |_ev: web::MouseEvent| {
            let el = el.clone();
            let handle = timers::set_interval(MORPH_INTERVAL_MS as i32, move || {
                let radius = particles::organic_radius(&mut rand::thread_rng());
                dom::set_style(&el, "border-radius", &radius);
                dom::set_style(&el, "transition", "border-radius 2s ease-in-out");
            });
            *enter_interval.borrow_mut() = handle;
        });

        let el = card.clone();
        dom::listen(&card, "mouseleave", move |_ev: web::MouseEvent| {
            interval.borrow_mut().take();
            dom::set_style(&el, "border-radius", &format!("{}px", MORPH_BASE_RADIUS_PX));
            dom::set_style(&el, "transition", "border-radius 0.5s ease-in-out");
        });
    }
}
