//! Yew hooks bridging browser event sources to the animation machines.
//!
//! Every subscription made here (observer, timeout, scroll listener) is
//! released by the owning effect's destructor, so nothing fires into a
//! section that has already unmounted.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

use crate::reveal::RevealLatch;
use crate::scroll::back_to_top_visible;
use crate::typewriter::Typewriter;

/// A single pending `setTimeout` step. Dropping it cancels the step, so a
/// canceled callback can never run.
pub(crate) struct StepTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl StepTimer {
    pub(crate) fn schedule(delay_ms: i32, step: impl FnOnce() + 'static) -> Option<Self> {
        let window = window()?;
        let mut step = Some(step);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(step) = step.take() {
                step();
            }
        });
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// Observes the returned node against the viewport and reports whether it
/// has ever been visible past `threshold`.
///
/// The flag flips at most once per mount; later crossings in either
/// direction are absorbed by a [`RevealLatch`]. If the node is never
/// attached the hook observes nothing and the flag stays `false`.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let mut subscription: Option<(
                IntersectionObserver,
                Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>,
            )> = None;

            if let Some(target) = node.cast::<Element>() {
                let mut latch = RevealLatch::new();
                let on_cross = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>)>::new(
                    move |entries: Vec<IntersectionObserverEntry>| {
                        let entered = entries.iter().any(|entry| entry.is_intersecting());
                        if entered && latch.trigger() {
                            revealed.set(true);
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(threshold));
                if let Ok(observer) =
                    IntersectionObserver::new_with_options(on_cross.as_ref().unchecked_ref(), &options)
                {
                    observer.observe(&target);
                    subscription = Some((observer, on_cross));
                }
            }

            move || {
                if let Some((observer, on_cross)) = subscription {
                    observer.disconnect();
                    drop(on_cross);
                }
            }
        });
    }

    (node, *revealed)
}

/// Types `target` out one character at a time on a fixed cadence.
///
/// Returns the prefix shown so far and whether typing has finished. Each
/// step is one cancelable timeout; unmounting between steps cancels the
/// pending one before it can touch state.
#[hook]
pub fn use_typewriter(target: &'static str, interval_ms: i32) -> (String, bool) {
    let machine = use_state(|| Typewriter::new(target));
    let shown = machine.shown().to_string();
    let complete = machine.is_complete();

    {
        let machine = machine.clone();
        use_effect_with(shown.len(), move |_| {
            let pending = if machine.is_complete() {
                None
            } else {
                StepTimer::schedule(interval_ms, move || {
                    let mut next = (*machine).clone();
                    if next.step() {
                        machine.set(next);
                    }
                })
            };
            move || drop(pending)
        });
    }

    (shown, complete)
}

/// Tracks the window scroll offset against the back-to-top threshold.
#[hook]
pub fn use_back_to_top() -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut listener: Option<Closure<dyn FnMut()>> = None;

            if let Some(window) = window() {
                let tracked = window.clone();
                let on_scroll = Closure::<dyn FnMut()>::new(move || {
                    let offset = tracked.scroll_y().unwrap_or(0.0);
                    visible.set(back_to_top_visible(offset));
                });
                if window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    .is_ok()
                {
                    listener = Some(on_scroll);
                }
            }

            move || {
                if let (Some(window), Some(on_scroll)) = (window(), listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *visible
}

/// Smooth-scrolls the page back to offset zero. Fire and forget.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls the section with the given id into view, if present.
pub fn scroll_to_section(id: &str) {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
