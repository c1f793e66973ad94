use crate::constants::{
    FULLY_LOADED_DELAY_MS, INIT_STEP_MS, MARKER_PULSE_BASE_MS, MARKER_PULSE_STEP_MS,
    ORB_START_STAGGER_MS, SECTION_STAGGER_MAX_MS, SECTION_STAGGER_MS,
};
use crate::core::particles;
use crate::dom;
use crate::emitter;
use crate::timers;
use web_sys as web;

const ORB_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Hero backdrop particles, skipped on slow connections.
pub fn hero_particles(
    document: &web::Document,
    container: Option<&web::HtmlElement>,
    low_bandwidth: bool,
) {
    let Some(container) = container else {
        return;
    };
    if low_bandwidth {
        log::info!("[ambient] low bandwidth, hero particles skipped");
        return;
    }
    let (width, _) = dom::viewport_size();
    emitter::hero_particles(document, container, width);
}

/// Scatter `.orb` elements, then let each wander on its own staggered loop.
pub fn floating_orbs(document: &web::Document) {
    let mut rng = rand::thread_rng();
    for (index, orb) in dom::query_all(document, ".orb").into_iter().enumerate() {
        let start = particles::orb_step(&mut rng);
        dom::set_style(&orb, "left", &format!("{}%", start.left_pct));
        dom::set_style(&orb, "top", &format!("{}%", start.top_pct));
        let delay = index as u32 * ORB_START_STAGGER_MS;
        timers::set_timeout(delay as i32, move || wander(orb));
    }
}

fn wander(orb: web::HtmlElement) {
    let step = particles::orb_step(&mut rand::thread_rng());
    dom::set_style(
        &orb,
        "transition",
        &format!("all {}s {}", step.duration_sec, ORB_EASING),
    );
    dom::set_style(&orb, "left", &format!("{}%", step.left_pct));
    dom::set_style(&orb, "top", &format!("{}%", step.top_pct));
    dom::set_style(&orb, "opacity", &step.opacity.to_string());
    let next_ms = (step.duration_sec * 1000.0) as i32;
    timers::set_timeout(next_ms, move || wander(orb));
}

/// Periodic pulse on each timeline marker; hidden markers are left alone.
pub fn timeline_markers(document: &web::Document) {
    let mut running = 0;
    for (index, item) in dom::query_all(document, ".timeline-item").into_iter().enumerate() {
        let Some(marker) = dom::query_one_in(&item, ".timeline-marker") else {
            continue;
        };
        let period = MARKER_PULSE_BASE_MS + index as u32 * MARKER_PULSE_STEP_MS;
        let interval = timers::set_interval(period as i32, move || {
            if !dom::is_rendered(&marker) {
                return;
            }
            dom::set_style(&marker, "transform", "translateX(-50%) scale(1.05)");
            dom::set_style(&marker, "transition", "transform 0.15s ease");
            let marker = marker.clone();
            timers::set_timeout(150, move || {
                dom::set_style(&marker, "transform", "translateX(-50%) scale(1)");
            });
        });
        if let Some(interval) = interval {
            interval.forget();
            running += 1;
        }
    }
    log::debug!("[ambient] {} timeline markers pulsing", running);
}

#[inline]
fn section_delay_ms(index: usize) -> u32 {
    (index as u32)
        .saturating_mul(SECTION_STAGGER_MS)
        .min(SECTION_STAGGER_MAX_MS)
}

/// Body and section classes that stage the page in after mount.
pub fn progressive_init() {
    timers::set_timeout(0, || {
        if let Some(body) = dom::body() {
            _ = body.class_list().add_1("loading-complete");
        }
    });

    timers::set_timeout(INIT_STEP_MS as i32, || {
        let Some(document) = dom::window_document() else {
            return;
        };
        for (index, section) in dom::query_all(&document, ".section").into_iter().enumerate() {
            timers::set_timeout(section_delay_ms(index) as i32, move || {
                _ = section.class_list().add_2("page-transition", "loaded");
            });
        }
    });

    timers::set_timeout((2 * INIT_STEP_MS + FULLY_LOADED_DELAY_MS) as i32, || {
        if let Some(body) = dom::body() {
            _ = body.class_list().add_1("fully-loaded");
        }
        log_paint_timings();
    });
}

fn log_paint_timings() {
    let Some(performance) = web::window().and_then(|w| w.performance()) else {
        return;
    };
    _ = performance.mark("site-fully-loaded");
    for entry in performance.get_entries_by_type("paint").iter() {
        let name = js_sys::Reflect::get(&entry, &"name".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let start = js_sys::Reflect::get(&entry, &"startTime".into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        log::info!("[perf] {}: {:.2}ms", name, start);
    }
}
