pub mod keyboard;
pub mod pointer;
pub mod scroll;

use crate::core::input::{InputEvent, InputHandler, InputKind, InputSource};
use crate::dom;
use crate::timers;
use std::time::Duration;
use web_sys as web;

const RESIZE_THROTTLE_MS: u64 = 100;

/// [`InputSource`] backed by listeners on the browser window and document.
pub struct WindowInput {
    window: web::Window,
    document: web::Document,
}

impl WindowInput {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl InputSource for WindowInput {
    fn subscribe(&mut self, kind: InputKind, mut handler: InputHandler) {
        match kind {
            InputKind::PointerMove => {
                dom::listen(&self.document, "mousemove", move |ev: web::MouseEvent| {
                    handler(&pointer::pointer_event(&ev));
                });
            }
            InputKind::Scroll => {
                dom::listen_passive(&self.window, "scroll", move |_ev: web::Event| {
                    handler(&scroll::scroll_event());
                });
            }
            InputKind::KeyDown => {
                dom::listen(&self.document, "keydown", move |ev: web::KeyboardEvent| {
                    handler(&keyboard::key_event(&ev));
                });
            }
            InputKind::Resize => {
                let mut throttled = timers::throttle(
                    Duration::from_millis(RESIZE_THROTTLE_MS),
                    move |(width, height): (f64, f64)| {
                        handler(&InputEvent::Resize { width, height });
                    },
                );
                dom::listen(&self.window, "resize", move |_ev: web::Event| {
                    throttled(dom::viewport_size());
                });
            }
        }
    }
}
