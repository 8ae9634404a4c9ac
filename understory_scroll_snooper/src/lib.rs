// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_snooper --heading-base-level=0

//! Understory Scroll Snooper: scroll observation sessions.
//!
//! A [`SnoopSession`] watches one element (or a group of elements) as the
//! page scrolls and turns successive geometry samples into callbacks:
//!
//! - `on_enter` / `on_leave` when progress crosses into or out of `(0, 1]`.
//! - `on_scroll` with the current progress while inside the range, or on
//!   every tick when continuous reporting is requested.
//! - `on_enter_full` / `on_leave_partial` when the element becomes fully
//!   visible or stops being fully visible.
//! - `on_change` / `on_found` in most-visible mode, when the most visible
//!   element of a group changes.
//!
//! Sessions do not read the host and do not schedule themselves. A driver
//! (an animation-frame loop, a scroll listener, a test) measures the
//! geometry, builds a [`GeometrySample`], and calls [`SnoopSession::update`].
//! Sessions are plain values: to stop watching, stop calling `update` and
//! drop the session.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_scroll_geometry::GeometrySample;
//! use understory_scroll_snooper::{SnoopEvent, SnoopOptions, SnoopSession};
//!
//! let mut session = SnoopSession::new(SnoopOptions::new());
//! let element = Some(Rect::new(0.0, 1000.0, 300.0, 1200.0));
//! let viewport = Size::new(1024.0, 800.0);
//!
//! let mut events: Vec<SnoopEvent> = Vec::new();
//! for y in [0.0, 500.0, 1500.0] {
//!     let sample = GeometrySample::single(viewport, Vec2::new(0.0, y), element);
//!     session.update(&sample, &mut events).unwrap();
//! }
//!
//! assert!(matches!(events.first(), Some(SnoopEvent::Enter(_))));
//! assert!(events.iter().any(|e| matches!(e, SnoopEvent::Leave(_))));
//! ```
//!
//! ## Direction
//!
//! [`ScrollData::direction`] is `-1` when the scroll position increased since
//! the previous tick and `1` otherwise. Consumers built against this
//! convention depend on it, so it is kept as is.
//!
//! ## Debouncing
//!
//! Drivers that tick on every animation frame can leave debouncing on (the
//! default): a sample whose viewport, scroll offset, and target rectangles all
//! equal the previous evaluated sample is skipped without callbacks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod handler;
mod markers;
mod options;
mod session;

pub use handler::{ScrollData, SnoopEvent, SnoopHandler};
pub use markers::{MarkerPositions, MarkerRenderer};
pub use options::{SnoopMode, SnoopOptions};
pub use session::{SnoopError, SnoopSession, Update, scroll_direction};
