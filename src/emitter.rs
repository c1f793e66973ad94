use crate::core::particles::{self, ParticleSpec};
use crate::dom;
use crate::timers;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build a decorative node for `spec` and append it to `parent`.
pub fn create(
    document: &web::Document,
    parent: &web::Element,
    spec: &ParticleSpec,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    if let Some(class) = spec.kind.class_name() {
        el.set_class_name(class);
    }
    el.style().set_css_text(&spec.css_text());
    parent.append_child(&el).ok()?;
    Some(el)
}

/// [`create`] under `<body>`, self-removing once its animation has run.
pub fn emit(document: &web::Document, spec: &ParticleSpec) -> Option<web::HtmlElement> {
    let body = document.body()?;
    let el = create(document, &body, spec)?;
    if let Some(lifetime) = spec.kind.lifetime_ms() {
        let node = el.clone();
        timers::set_timeout(lifetime as i32, move || dom::detach(&node));
    }
    Some(el)
}

/// Radial burst centered on `anchor`.
pub fn success_burst(document: &web::Document, anchor: &web::Element) {
    let (cx, cy) = dom::rect(anchor).center();
    let specs = particles::success_burst(&mut rand::thread_rng(), cx, cy);
    for spec in specs.iter() {
        emit(document, spec);
    }
}

/// Fill the hero backdrop with looping particles.
pub fn hero_particles(document: &web::Document, container: &web::Element, viewport_w: f64) {
    let count = particles::hero_particle_count(viewport_w);
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        create(document, container, &particles::ambient(&mut rng));
    }
    log::debug!("[particles] hero backdrop count={}", count);
}
