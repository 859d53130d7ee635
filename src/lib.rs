//! Single-page portfolio with scroll-driven entrance animations.
//!
//! The animation state lives in small framework-free machines (`reveal`,
//! `typewriter`, `scroll`) that build on every target, so their behavior is
//! testable off the browser. The `hooks` module wires those machines to the
//! browser event sources on wasm, and `frontend` renders the page with Yew.

pub mod reveal;
pub mod scroll;
pub mod typewriter;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
