use crate::core::throttle::{self, Flushed, Throttle, Throttled};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Timeout in whole milliseconds, rounded up so the callback never runs
/// before `delay` has passed.
#[inline]
pub fn millis(delay: Duration) -> i32 {
    throttle::ceil_millis(delay).min(i32::MAX as u64) as i32
}

/// One-shot timer. Returns the browser handle, or `None` without a window.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        )
        .ok()
}

/// Repeating timer; cleared when dropped.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Keep the timer running for the rest of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

pub fn set_interval(period_ms: i32, f: impl FnMut() + 'static) -> Option<Interval> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )
        .ok()?;
    Some(Interval {
        handle,
        _closure: closure,
    })
}

/// Run `f` at the next display refresh with the frame timestamp (ms).
pub fn request_frame(f: impl FnOnce(f64) + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .request_animation_frame(callback.unchecked_ref())
        .ok()
}

pub fn cancel_frame(handle: i32) {
    if let Some(window) = web::window() {
        _ = window.cancel_animation_frame(handle);
    }
}

/// Wrap `handler` so it runs at most once per `interval`, leading edge
/// first, with a trailing call carrying the latest arguments.
pub fn throttle<A: 'static>(
    interval: Duration,
    handler: impl FnMut(A) + 'static,
) -> impl FnMut(A) + 'static {
    let gate = Rc::new(RefCell::new(Throttle::new(interval)));
    let handler: Rc<RefCell<dyn FnMut(A)>> = Rc::new(RefCell::new(handler));
    move |args: A| {
        let decision = gate.borrow_mut().call(Instant::now(), args);
        match decision {
            Throttled::Fire(args) => (*handler.borrow_mut())(args),
            Throttled::Schedule { delay, ticket } => {
                arm_trailing(gate.clone(), handler.clone(), delay, ticket);
            }
            Throttled::Coalesced => {}
        }
    }
}

fn arm_trailing<A: 'static>(
    gate: Rc<RefCell<Throttle<A>>>,
    handler: Rc<RefCell<dyn FnMut(A)>>,
    delay: Duration,
    ticket: u64,
) {
    set_timeout(millis(delay), move || {
        let flushed = gate.borrow_mut().flush(Instant::now(), ticket);
        match flushed {
            Flushed::Fire(args) => (*handler.borrow_mut())(args),
            Flushed::Rearm(delay) => arm_trailing(gate, handler, delay, ticket),
            Flushed::Stale => {}
        }
    });
}
