//! Reading-page effects for the static chapter site.
//!
//! This crate is compiled to WebAssembly and loaded by every generated page.
//! After the document has been parsed it binds three independent effects:
//! a one-shot fade-in reveal for elements scrolled into view, a reading
//! progress bar, and font size buttons for chapter text. A page missing the
//! markup for an effect simply doesn't get that effect.
//!
//! ```js
//! import init, { init as startEffects } from "./reader_fx.js";
//! await init();
//! startEffects();
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | Fade-in reveal controller and the [`reveal::RevealHost`] seam |
//! | [`progress`] | Scroll metrics and the progress bar |
//! | [`font_size`] | Font size adjuster |
//! | [`binding`] | Unbound / Bound component state |
//! | [`style`] | [`style::StyleTarget`] seam and CSS value helpers |
//! | [`config`] | [`config::PageConfig`]: markup contract and knobs |
//! | [`consts`] | Default class names, ids and numeric constants |
//! | [`error`] | [`error::FxError`] |
//! | [`dom`] | `web_sys` glue (browser only at runtime) |

use std::cell::Cell;

use wasm_bindgen::prelude::*;

pub mod binding;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod font_size;
pub mod progress;
pub mod reveal;
pub mod style;

#[cfg(test)]
mod test_support;


use crate::config::PageConfig;
use crate::error::FxError;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Bind page effects using the stock chapter markup contract.
///
/// # Errors
///
/// Returns a JS error string if the document-ready listener can't be added.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    start(PageConfig::default()).map_err(JsValue::from)
}

/// Bind page effects with overrides given as a JSON object, e.g.
/// `{"progressBarId": "reading-bar", "logLevel": "debug"}`.
///
/// # Errors
///
/// Returns a JS error string for malformed JSON, unknown keys, or
/// out-of-range values. Nothing is bound in that case.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = PageConfig::from_json(json)?;
    start(cfg).map_err(JsValue::from)
}

fn start(cfg: PageConfig) -> Result<(), FxError> {
    install_logging(&cfg);
    STARTED.with(|started| {
        run_once(started, || {
            let Some(window) = web_sys::window() else {
                log::warn!("reader-fx: {}", FxError::NoWindow);
                return Ok(());
            };
            let Some(document) = window.document() else {
                log::warn!("reader-fx: {}", FxError::NoDocument);
                return Ok(());
            };

            let ready_document = document.clone();
            dom::when_ready(&document, move || {
                dom::install(&window, &ready_document, &cfg);
            })
        })
    })
}

/// Run `hand_off` unless an earlier call already succeeded. The guard is
/// only set on success, so a failed hand-off can be retried.
fn run_once(guard: &Cell<bool>, hand_off: impl FnOnce() -> Result<(), FxError>) -> Result<(), FxError> {
    if guard.get() {
        log::warn!("reader-fx: already initialized, ignoring");
        return Ok(());
    }
    hand_off()?;
    guard.set(true);
    Ok(())
}

fn install_logging(cfg: &PageConfig) {
    console_error_panic_hook::set_once();
    let level = cfg.log_level.to_level();
    if console_log::init_with_level(level).is_err() {
        // Logger already installed by an earlier call; just adjust verbosity.
        log::set_max_level(level.to_level_filter());
    }
}
