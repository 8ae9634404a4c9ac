// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_web --heading-base-level=0

//! Browser host adapter for Understory scroll sessions.
//!
//! Scroll sessions never read the host themselves. On `wasm32`, this crate
//! supplies the DOM reads a driver needs to build a
//! [`GeometrySample`](understory_scroll_geometry::GeometrySample) each animation
//! frame:
//!
//! - `viewport`: window inner size, falling back to the root element's client size.
//! - `scroll_offset`: window scroll offset minus the root element's client border.
//! - `element_offset`: document offset of an element (zero for detached or hidden elements).
//! - `ElementHandle`: an element that implements
//!   [`LayoutSource`](understory_scroll_geometry::LayoutSource).
//! - `to_element_handle`: accepts an element or an array-like wrapper of elements.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn frame(
//!     window: &web_sys::Window,
//!     targets: &[understory_scroll_web::ElementHandle],
//!     session: &mut understory_scroll_snooper::SnoopSession,
//!     events: &mut Vec<understory_scroll_snooper::SnoopEvent>,
//! ) -> Result<(), understory_scroll_snooper::SnoopError> {
//!     let sample = understory_scroll_web::sample(window, targets);
//!     session.update(&sample, events).map(|_| ())
//! }
//! ```
//!
//! On other targets the crate is empty.

#![no_std]

extern crate alloc;

#[cfg(any(target_arch = "wasm32", test))]
mod coords;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{ElementHandle, element_offset, sample, scroll_offset, to_element_handle, viewport};
