use crate::core::input::InputEvent;
use web_sys as web;

/// Legacy numeric key code; the secret sequence is defined over these.
#[inline]
#[allow(deprecated)]
pub fn key_event(ev: &web::KeyboardEvent) -> InputEvent {
    InputEvent::KeyDown {
        key_code: ev.key_code(),
    }
}
