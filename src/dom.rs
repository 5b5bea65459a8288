//! Browser glue: binds the page components to live DOM elements and events.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web_sys`. Component logic lives in
//! [`crate::reveal`], [`crate::progress`] and [`crate::font_size`]; here we
//! look up their elements, adapt `HtmlElement` and `IntersectionObserver` to
//! the component seams, and register listeners.
//!
//! LIFETIMES
//! =========
//! Listeners stay registered for the life of the page, so their closures are
//! leaked with `Closure::forget`. The document-ready callback is a one-shot
//! closure that frees itself after running.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::binding::Binding;
use crate::config::PageConfig;
use crate::error::{FxError, describe_js, js_error};
use crate::font_size::{FontChange, FontControls, FontSizeAdjuster, bind_font_size};
use crate::progress::{ScrollMetrics, bind_progress};
use crate::reveal::{Intersection, RevealController, RevealHost};
use crate::style::StyleTarget;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

// =============================================================================
// SEAM IMPLEMENTATIONS
// =============================================================================

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), FxError> {
        self.style().set_property(property, value).map_err(|e| js_error(&e))
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let window = web_sys::window()?;
        let Ok(Some(declaration)) = window.get_computed_style(self) else {
            return None;
        };
        match declaration.get_property_value(property) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// `IntersectionObserver` plus the visible class, borrowed for one call.
struct DomRevealHost<'a> {
    observer: &'a IntersectionObserver,
    visible_class: &'a str,
}

impl RevealHost for DomRevealHost<'_> {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn is_visible(&self, target: &Element) -> bool {
        target.class_list().contains(self.visible_class)
    }

    fn mark_visible(&mut self, target: &Element) -> Result<(), FxError> {
        target.class_list().add_1(self.visible_class).map_err(|e| js_error(&e))
    }
}

// =============================================================================
// DOCUMENT READY
// =============================================================================

/// Run `setup` once the initial document has been parsed.
///
/// If parsing already finished (the module loaded late), `setup` runs now.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the `DOMContentLoaded` listener can't be added.
pub fn when_ready(document: &Document, setup: impl FnOnce() + 'static) -> Result<(), FxError> {
    if !needs_ready_wait(&document.ready_state()) {
        setup();
        return Ok(());
    }
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(setup);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &options,
        )
        .map_err(|e| js_error(&e))
}

/// Whether a `document.readyState` value means parsing is still under way.
/// `"interactive"` and `"complete"` both come after `DOMContentLoaded`.
#[must_use]
pub fn needs_ready_wait(ready_state: &str) -> bool {
    ready_state == "loading"
}

// =============================================================================
// INSTALL
// =============================================================================

/// What got bound during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Installed {
    /// Number of fade-in elements under observation, if reveal bound.
    pub reveal: Option<usize>,
    pub progress: bool,
    pub font_size: bool,
}

/// Bind all three components. Each is independent; a failure in one is
/// logged and leaves the others untouched.
pub fn install(window: &Window, document: &Document, cfg: &PageConfig) -> Installed {
    let reveal = match Binding::from_lookup("reveal", install_reveal(document, cfg)) {
        Binding::Bound(count) => Some(count),
        Binding::Unbound { .. } => None,
    };
    let progress = install_progress(window, document, cfg);
    let font_size = install_font_size(document, cfg);

    let installed = Installed { reveal, progress, font_size };
    log::info!(
        "reader-fx: reveal={:?} progress={} font_size={}",
        installed.reveal,
        installed.progress,
        installed.font_size
    );
    installed
}

// --- reveal ---

fn install_reveal(document: &Document, cfg: &PageConfig) -> Result<usize, FxError> {
    let targets = query_all(document, &cfg.fade_in_selector())?;

    let controller = Rc::new(RefCell::new(RevealController::new()));
    let cb_controller = Rc::clone(&controller);
    let visible_class = cfg.visible_class.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut host = DomRevealHost { observer: &observer, visible_class: &visible_class };
            let batch = entries.iter().map(|value| {
                let entry: IntersectionObserverEntry = value.unchecked_into();
                Intersection::new(entry.target(), entry.is_intersecting())
            });
            let mut controller = cb_controller.borrow_mut();
            let newly = controller.handle(&mut host, batch);
            if newly > 0 {
                log::debug!("reveal: {newly} revealed, {} pending", controller.pending());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&cfg.reveal_root_margin);
    options.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| FxError::ObserverUnavailable(describe_js(&e)))?;
    callback.forget();

    let mut host = DomRevealHost { observer: &observer, visible_class: &cfg.visible_class };
    let observed = controller.borrow_mut().attach(&mut host, targets);
    Ok(observed)
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    let nodes = document.query_selector_all(selector).map_err(|e| js_error(&e))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

// --- progress ---

fn install_progress(window: &Window, document: &Document, cfg: &PageConfig) -> bool {
    let bar = document.get_element_by_id(&cfg.progress_bar_id).and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
    let Binding::Bound(mut indicator) = bind_progress(bar, &cfg.progress_bar_id) else {
        return false;
    };

    let win = window.clone();
    let doc = document.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = indicator.on_scroll(read_scroll_metrics(&win, &doc)) {
            log::warn!("progress: {err}");
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    match add_listener(window, "scroll", &on_scroll, &options) {
        Ok(()) => {
            on_scroll.forget();
            true
        }
        Err(err) => {
            log::warn!("progress: {err}");
            false
        }
    }
}

/// Current scroll geometry. The offset comes from `window.scrollY` first
/// since element `scrollTop` is truncated to whole pixels; each field then
/// falls back to `documentElement` and finally `body` while it reads zero.
fn read_scroll_metrics(window: &Window, document: &Document) -> ScrollMetrics {
    let offset = match window.scroll_y() {
        Ok(y) => y,
        Err(_) => 0.0,
    };
    let root = document.document_element().map_or_else(ScrollMetrics::default, |el| element_metrics(&el));
    let body = document.body().map_or_else(ScrollMetrics::default, |el| element_metrics(&el));
    ScrollMetrics::new(offset, 0.0, 0.0).or(root).or(body)
}

/// Whole-pixel geometry of one root; `scrollHeight` and `clientHeight` are
/// integers in the DOM anyway.
fn element_metrics(el: &Element) -> ScrollMetrics {
    ScrollMetrics::new(f64::from(el.scroll_top()), f64::from(el.scroll_height()), f64::from(el.client_height()))
}

// --- font size ---

fn install_font_size(document: &Document, cfg: &PageConfig) -> bool {
    let content = match document.query_selector(&cfg.content_selector) {
        Ok(found) => found.and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
        Err(e) => {
            log::warn!("font size: bad content selector ({})", describe_js(&e));
            None
        }
    };
    let Binding::Bound(controls) = bind_font_size(
        document.get_element_by_id(&cfg.increase_font_id),
        document.get_element_by_id(&cfg.decrease_font_id),
        content,
        cfg,
    ) else {
        return false;
    };
    let FontControls { increase, decrease, adjuster } = controls;

    let adjuster = Rc::new(RefCell::new(adjuster));
    let on_increase = click_handler(&adjuster, FontChange::Increase);
    let on_decrease = click_handler(&adjuster, FontChange::Decrease);
    let options = AddEventListenerOptions::new();

    // Both buttons or neither: a half-wired adjuster would report unbound
    // while still reacting to clicks.
    if let Err(err) = add_listener(&increase, "click", &on_increase, &options) {
        log::warn!("font size: {err}");
        return false;
    }
    if let Err(err) = add_listener(&decrease, "click", &on_decrease, &options) {
        log::warn!("font size: {err}");
        if let Err(undo) = remove_listener(&increase, "click", &on_increase) {
            log::warn!("font size: could not detach increase button ({undo})");
        }
        return false;
    }
    on_increase.forget();
    on_decrease.forget();
    true
}

fn click_handler(adjuster: &Rc<RefCell<FontSizeAdjuster<HtmlElement>>>, change: FontChange) -> Closure<dyn FnMut()> {
    let adjuster = Rc::clone(adjuster);
    Closure::<dyn FnMut()>::new(move || match adjuster.borrow_mut().apply(change) {
        Ok(px) => log::debug!("font size: {change:?} -> {px}px"),
        Err(err) => log::warn!("font size: {err}"),
    })
}

// =============================================================================
// LISTENERS
// =============================================================================

fn add_listener(
    target: &EventTarget,
    event: &str,
    handler: &Closure<dyn FnMut()>,
    options: &AddEventListenerOptions,
) -> Result<(), FxError> {
    target
        .add_event_listener_with_callback_and_add_event_listener_options(event, handler.as_ref().unchecked_ref(), options)
        .map_err(|e| js_error(&e))
}

fn remove_listener(target: &EventTarget, event: &str, handler: &Closure<dyn FnMut()>) -> Result<(), FxError> {
    target
        .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|e| js_error(&e))
}
