use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLDS};
use crate::core::controller::PageState;
use crate::core::reveal::{self, RevealCategory};
use crate::dom;
use crate::timers;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEAL_ID_ATTR: &str = "data-fx-reveal";

/// Live IntersectionObserver plus the elements it was given.
pub struct RevealWiring {
    observer: web::IntersectionObserver,
    elements: FnvHashMap<u32, web::HtmlElement>,
    state: Rc<RefCell<PageState>>,
}

impl RevealWiring {
    /// Put every revealed element back into its hidden, observed state.
    pub fn reset(&self) -> usize {
        let ids = self.state.borrow_mut().reveal().reset();
        for id in ids.iter() {
            if let Some(el) = self.elements.get(id) {
                _ = el.class_list().remove_1(reveal::REVEALED_CLASS);
                dom::set_style(el, "opacity", reveal::HIDDEN_OPACITY);
                dom::set_style(el, "transform", reveal::HIDDEN_TRANSFORM);
                self.observer.observe(el);
            }
        }
        ids.len()
    }
}

fn observer_options() -> web::IntersectionObserverInit {
    let options = js_sys::Object::new();
    let thresholds: js_sys::Array = REVEAL_THRESHOLDS
        .iter()
        .map(|t| JsValue::from_f64(*t))
        .collect();
    _ = js_sys::Reflect::set(&options, &"threshold".into(), &thresholds);
    _ = js_sys::Reflect::set(&options, &"rootMargin".into(), &REVEAL_ROOT_MARGIN.into());
    options.unchecked_into()
}

fn reveal_id(el: &web::Element) -> Option<u32> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}

/// Hide every revealable element and reveal each one, once, the first time
/// it scrolls into view.
pub fn wire(document: &web::Document, state: Rc<RefCell<PageState>>) -> Option<RevealWiring> {
    let callback_state = state.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };
                let reveal_now = callback_state.borrow_mut().reveal().on_intersection(
                    id,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if !reveal_now {
                    continue;
                }
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<web::HtmlElement>() {
                    show(&el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &observer_options(),
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    callback.forget();

    let mut elements = FnvHashMap::default();
    for (index, el) in dom::query_all(document, reveal::REVEAL_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let id = index as u32;
        _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
        dom::set_style(&el, "opacity", reveal::HIDDEN_OPACITY);
        dom::set_style(&el, "transform", reveal::HIDDEN_TRANSFORM);
        dom::set_style(&el, "transition", &reveal::hidden_transition(index));
        state.borrow_mut().reveal().observe(id);
        observer.observe(&el);
        elements.insert(id, el);
    }
    log::debug!("[reveal] observing {} elements", elements.len());

    Some(RevealWiring {
        observer,
        elements,
        state,
    })
}

fn show(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", reveal::SHOWN_OPACITY);
    dom::set_style(el, "transform", reveal::SHOWN_TRANSFORM);
    _ = el.class_list().add_1(reveal::REVEALED_CLASS);

    let classes = dom::class_names(el);
    let Some(category) = RevealCategory::classify(classes.iter().map(String::as_str)) else {
        return;
    };
    let el = el.clone();
    timers::request_frame(move |_ts| match category {
        RevealCategory::TeamCard => animate_team_card(&el),
        RevealCategory::TimelineItem => animate_timeline_item(&el),
        RevealCategory::ResourceCard => animate_resource_card(&el),
        RevealCategory::SectionTitle => {}
    });
}

/// After `delay_ms` jump to `peak`, then settle back after `hold_ms`.
fn pulse(
    el: web::HtmlElement,
    delay_ms: i32,
    peak: &'static str,
    transition: &'static str,
    hold_ms: i32,
    settle: &'static str,
) {
    timers::set_timeout(delay_ms, move || {
        dom::set_style(&el, "transform", peak);
        dom::set_style(&el, "transition", transition);
        timers::set_timeout(hold_ms, move || {
            dom::set_style(&el, "transform", settle);
        });
    });
}

fn animate_team_card(card: &web::HtmlElement) {
    if let Some(avatar) = dom::query_one_in(card, ".card-avatar img") {
        pulse(avatar, 100, "scale(1.02)", "transform 0.3s ease", 200, "scale(1)");
    }
    for (index, link) in dom::query_all_in(card, ".social-link").into_iter().enumerate() {
        dom::set_style(&link, "opacity", "0");
        dom::set_style(&link, "transform", "translateY(10px)");
        timers::set_timeout(200 + index as i32 * 50, move || {
            dom::set_style(&link, "transition", "all 0.3s ease");
            dom::set_style(&link, "transform", "translateY(0)");
            dom::set_style(&link, "opacity", "1");
        });
    }
}

fn animate_timeline_item(item: &web::HtmlElement) {
    if let Some(marker) = dom::query_one_in(item, ".timeline-marker") {
        pulse(
            marker,
            50,
            "translateX(-50%) scale(1.1)",
            "transform 0.2s ease",
            150,
            "translateX(-50%) scale(1)",
        );
    }
    if let Some(content) = dom::query_one_in(item, ".timeline-content") {
        dom::set_style(&content, "opacity", "0");
        dom::set_style(&content, "transform", "translateX(20px)");
        timers::set_timeout(100, move || {
            dom::set_style(&content, "transition", "all 0.4s ease");
            dom::set_style(&content, "opacity", "1");
            dom::set_style(&content, "transform", "translateX(0)");
        });
    }
}

fn animate_resource_card(card: &web::HtmlElement) {
    if let Some(icon) = dom::query_one_in(card, ".resource-icon") {
        pulse(
            icon,
            50,
            "scale(1.1) rotateY(180deg)",
            "transform 0.4s ease",
            300,
            "scale(1) rotateY(0deg)",
        );
    }
}
