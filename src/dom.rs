use crate::core::parallax::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-time lookup of the elements the per-frame effects touch.
#[derive(Default)]
pub struct DomCache {
    pub navbar: Option<web::HtmlElement>,
    pub hero_particles: Option<web::HtmlElement>,
    pub timeline: Option<web::HtmlElement>,
    pub timeline_progress: Option<web::HtmlElement>,
    pub cursor_parallax: Vec<web::HtmlElement>,
    pub parallax_elements: Vec<web::HtmlElement>,
    pub tilt_elements: Vec<web::HtmlElement>,
}

impl DomCache {
    pub fn load(document: &web::Document) -> Self {
        let cache = Self {
            navbar: query_one(document, ".navbar"),
            hero_particles: query_one(document, ".hero-particles"),
            timeline: query_one(document, ".timeline"),
            timeline_progress: query_one(document, ".timeline-progress"),
            cursor_parallax: query_all(document, ".hero-content, .floating-orbs"),
            parallax_elements: query_all(document, "[data-parallax]"),
            tilt_elements: query_all(document, "[data-tilt]"),
        };
        log::debug!(
            "[dom] cached navbar={} parallax={} tilt={}",
            cache.navbar.is_some(),
            cache.parallax_elements.len(),
            cache.tilt_elements.len()
        );
        cache
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body() -> Option<web::HtmlElement> {
    window_document().and_then(|d| d.body())
}

/// Attach a listener for the page lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`] but registered as a passive listener (scroll).
pub fn listen_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = js_sys::Object::new();
    _ = js_sys::Reflect::set(&options, &"passive".into(), &true.into());
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        options.unchecked_ref::<web::AddEventListenerOptions>(),
    );
    closure.forget();
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(parent: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    parent
        .query_selector_all(selector)
        .map(|list| html_elements(&list))
        .unwrap_or_default()
}

pub fn query_one_in(parent: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn html_elements(list: &web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Hidden elements (display:none anywhere up the tree) have no offset parent.
#[inline]
pub fn is_rendered(el: &web::HtmlElement) -> bool {
    el.offset_parent().is_some()
}

pub fn rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Remove `el` from its parent; a node that is already detached is left alone.
#[inline]
pub fn detach(el: &web::Element) {
    if let Some(parent) = el.parent_node() {
        _ = parent.remove_child(el);
    }
}

pub fn viewport_size() -> (f64, f64) {
    web::window()
        .map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            )
        })
        .unwrap_or((0.0, 0.0))
}

pub fn scroll_offset() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn class_names(el: &web::Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}
