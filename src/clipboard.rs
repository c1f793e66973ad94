use crate::constants::COPY_PRESS_MS;
use crate::core::clipboard::{CopyButton, CopyMethod};
use crate::dom;
use crate::emitter;
use crate::error::FxError;
use crate::timers;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const ERROR_BACKGROUND: &str = "#dc3545";

/// Copy `text` to the system clipboard, preferring the async clipboard API
/// in secure contexts and falling back to a hidden textarea.
pub async fn copy_text(text: &str) -> Result<CopyMethod, FxError> {
    let window = web::window().ok_or(FxError::NoWindow)?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    let method = CopyMethod::choose(clipboard.is_some(), window.is_secure_context());
    match method {
        CopyMethod::AsyncClipboard => {
            let clipboard = clipboard.ok_or(FxError::ClipboardUnavailable)?;
            let write_text: js_sys::Function =
                js_sys::Reflect::get(&clipboard, &"writeText".into())?.dyn_into()?;
            let promise: js_sys::Promise = write_text
                .call1(&clipboard, &JsValue::from_str(text))?
                .dyn_into()?;
            JsFuture::from(promise).await?;
        }
        CopyMethod::ExecCommand => {
            let document = window.document().ok_or(FxError::NoDocument)?;
            exec_command_copy(&document, text)?;
        }
    }
    Ok(method)
}

fn exec_command_copy(document: &web::Document, text: &str) -> Result<(), FxError> {
    let body = document.body().ok_or(FxError::NoDocument)?;
    let field: web::HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
    field.set_value(text);
    let style = field.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("left", "-9999px");
    _ = style.set_property("opacity", "0");
    body.append_child(&field)?;
    field.select();
    let copied = document
        .unchecked_ref::<web::HtmlDocument>()
        .exec_command("copy");
    dom::detach(&field);
    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(FxError::CopyRejected),
        Err(e) => Err(e.into()),
    }
}

/// Wire the `#copyDiscord` button to copy the `#discordLink` text.
pub fn wire(document: &web::Document, feedback: Duration) {
    let Some(button) = dom::query_one(document, "#copyDiscord") else {
        return;
    };
    let Some(source) = document.get_element_by_id("discordLink") else {
        return;
    };
    let guard = Rc::new(RefCell::new(CopyButton::default()));
    let doc = document.clone();
    let btn = button.clone();
    dom::listen(&button, "click", move |_ev: web::MouseEvent| {
        let label = btn.text_content().unwrap_or_default();
        if !guard.borrow_mut().begin(&label) {
            log::debug!("[copy] ignored click while busy");
            return;
        }
        _ = btn.class_list().add_1("copying");
        let text = source.text_content().unwrap_or_default().trim().to_string();
        let (doc, btn, guard) = (doc.clone(), btn.clone(), guard.clone());
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(method) => {
                    log::info!("[copy] copied via {:?}", method);
                    on_success(&doc, &btn, &guard, feedback);
                }
                Err(e) => {
                    log::error!("[copy] failed: {}", e);
                    on_failure(&btn, &guard, feedback);
                }
            }
        });
    });
}

fn on_success(
    document: &web::Document,
    button: &web::HtmlElement,
    guard: &Rc<RefCell<CopyButton>>,
    feedback: Duration,
) {
    let label = guard.borrow_mut().succeed();
    button.set_text_content(Some(label));
    _ = button.class_list().add_1("copied");

    dom::set_style(button, "transform", "scale(1.05)");
    let el = button.clone();
    timers::set_timeout(COPY_PRESS_MS as i32, move || {
        dom::set_style(&el, "transform", "scale(1)");
    });

    emitter::success_burst(document, button);

    let (el, guard) = (button.clone(), guard.clone());
    timers::set_timeout(timers::millis(feedback), move || {
        let restored = guard.borrow_mut().finish();
        el.set_text_content(Some(&restored));
        _ = el.class_list().remove_2("copied", "copying");
    });
}

fn on_failure(button: &web::HtmlElement, guard: &Rc<RefCell<CopyButton>>, feedback: Duration) {
    let label = guard.borrow_mut().fail();
    button.set_text_content(Some(label));
    dom::set_style(button, "background-color", ERROR_BACKGROUND);

    let (el, guard) = (button.clone(), guard.clone());
    timers::set_timeout(timers::millis(feedback), move || {
        let restored = guard.borrow_mut().finish();
        el.set_text_content(Some(&restored));
        dom::set_style(&el, "background-color", "");
        _ = el.class_list().remove_1("copying");
    });
}
