//! Platform-neutral effect logic. Nothing in here touches `web-sys`, so the
//! host test suite can include these files directly.

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod device;
pub mod easing;
pub mod frame;
pub mod input;
pub mod konami;
pub mod navbar;
pub mod parallax;
pub mod particles;
pub mod reveal;
pub mod throttle;
pub mod trail;
