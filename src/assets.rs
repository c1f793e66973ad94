use crate::core::device::{self, DeviceProfile};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const ERROR_HANDLED_ATTR: &str = "data-error-handled";

/// Read `navigator.deviceMemory` and `navigator.connection.effectiveType`.
/// Both are non-standard, so they are looked up reflectively.
pub fn detect_profile(window: &web::Window) -> DeviceProfile {
    let navigator: JsValue = window.navigator().into();
    let memory_gb = js_sys::Reflect::get(&navigator, &"deviceMemory".into())
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|gb| *gb > 0.0);
    let connection = js_sys::Reflect::get(&navigator, &"connection".into())
        .ok()
        .filter(|c| c.is_object())
        .and_then(|c| js_sys::Reflect::get(&c, &"effectiveType".into()).ok())
        .and_then(|t| t.as_string());
    DeviceProfile {
        memory_gb,
        connection,
    }
}

/// Tag `<body>` so the stylesheet can tone effects down.
pub fn apply_profile_classes(body: &web::HtmlElement, profile: &DeviceProfile) {
    if profile.is_low_memory() {
        _ = body.class_list().add_1("low-memory-device");
        log::info!("[assets] low-memory device, scroll parallax disabled");
    }
    if profile.is_low_bandwidth() {
        _ = body.class_list().add_1("low-bandwidth");
        log::info!("[assets] slow connection detected");
    }
}

/// Swap `data-src` into `src` once an image gets within 50px of the viewport.
pub fn lazy_images(document: &web::Document) {
    let images = dom::query_all(document, "img[data-src]");
    if images.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(src) = target.get_attribute("data-src") {
                    if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
                        img.set_src(&src);
                    }
                    _ = target.remove_attribute("data-src");
                    _ = target.class_list().add_1("loaded");
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = js_sys::Object::new();
    _ = js_sys::Reflect::set(&options, &"rootMargin".into(), &"50px".into());
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        options.unchecked_ref(),
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[assets] lazy loading unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    for img in images.iter() {
        observer.observe(img);
    }
    log::debug!("[assets] lazy loading {} images", images.len());
}

/// `<link rel="preload" as="image">` for every `img[data-critical]`.
pub fn preload_critical(document: &web::Document) {
    let Some(head) = document.head() else {
        return;
    };
    for el in dom::query_all(document, "img[data-critical]") {
        let Some(img) = el.dyn_ref::<web::HtmlImageElement>() else {
            continue;
        };
        let href = Some(img.src())
            .filter(|s| !s.is_empty())
            .or_else(|| img.get_attribute("data-src"));
        let Some(href) = href else {
            continue;
        };
        let Ok(link) = document
            .create_element("link")
            .and_then(|l| l.dyn_into::<web::HtmlLinkElement>().map_err(JsValue::from))
        else {
            continue;
        };
        link.set_rel("preload");
        link.set_as("image");
        link.set_href(&href);
        _ = head.append_child(&link);
    }
}

fn placeholder_uri(alt: &str) -> String {
    let svg = device::placeholder_svg(alt);
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(&svg))
    )
}

/// Broken images get a generated placeholder, once per image.
pub fn image_fallbacks(document: &web::Document) {
    for el in dom::query_all(document, "img") {
        let img = el.clone();
        dom::listen(&el, "error", move |_ev: web::Event| {
            if img.has_attribute(ERROR_HANDLED_ATTR) {
                return;
            }
            _ = img.set_attribute(ERROR_HANDLED_ATTR, "true");
            let Some(image) = img.dyn_ref::<web::HtmlImageElement>() else {
                return;
            };
            let missing = image.src();
            let alt = Some(image.alt())
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "Image non disponible".to_string());
            image.set_src(&placeholder_uri(&alt));
            dom::set_style(&img, "filter", "grayscale(100%) opacity(0.6)");
            log::warn!("[assets] image not found: {}", missing);
        });
    }
}

/// Script errors are logged; animation-related ones switch the page into
/// `fallback-mode`.
pub fn error_fallback(window: &web::Window) {
    dom::listen(window, "error", move |ev: web::ErrorEvent| {
        let message = ev.message();
        log::warn!(
            "[error] {} ({}:{})",
            message,
            ev.filename(),
            ev.lineno()
        );
        if device::is_animation_error(&message) {
            if let Some(body) = dom::body() {
                _ = body.class_list().add_1("fallback-mode");
            }
            log::warn!("[error] fallback mode enabled, animations disabled");
        }
    });
}
