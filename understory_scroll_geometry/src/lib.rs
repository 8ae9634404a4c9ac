// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_geometry --heading-base-level=0

//! Understory Scroll Geometry: scroll progress and visibility primitives.
//!
//! This crate provides pure functions that turn an element rectangle, a
//! viewport size, and a scroll offset into:
//! - Signed distances between an anchor on the element and an anchor on the
//!   viewport ([`distance_to_anchor`]).
//! - A normalized progress ratio between a start and an end descriptor
//!   ([`compute_progress`]).
//! - The visible pixel extent and proportion of the element
//!   ([`compute_visibility`]), and the most visible element of a group
//!   ([`find_most_visible`]).
//!
//! It does **not** read from any host. Callers measure the element and the
//! viewport themselves (for example from the DOM) and pass plain `kurbo`
//! values in. Element rectangles are in document coordinates, so they do not
//! change while scrolling; the scroll offset is subtracted explicitly.
//!
//! ## Descriptors
//!
//! A descriptor such as `"top bottom"` names a point on the element followed
//! by a point on the viewport. Tokens are `top`, `left` (0), `center` (0.5),
//! `bottom`, `right` (1), a percentage (`"25%"`), or a pixel offset
//! (`"40px"`). Pixel offsets are divided by the element extent for the first
//! token and by the viewport extent for the second.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_scroll_geometry::{AnchorDescriptor, Orientation, compute_progress};
//!
//! let element = Rect::new(0.0, 1000.0, 300.0, 1200.0);
//! let viewport = Size::new(1024.0, 800.0);
//! let scroll = Vec2::new(0.0, 500.0);
//!
//! let start = AnchorDescriptor::parse("top bottom").unwrap();
//! let end = AnchorDescriptor::parse("bottom top").unwrap();
//! let result =
//!     compute_progress(Some(element), viewport, scroll, &start, &end, Orientation::Vertical)
//!         .unwrap();
//! assert!((result.progress - 0.3).abs() < 1e-9);
//! assert!(result.is_in_range);
//! ```
//!
//! ## Sentinels
//!
//! Zero-sized elements make `proportion` NaN and pixel anchors infinite.
//! These are returned as-is; use [`f64::is_finite`] to guard. A start and end
//! anchor that coincide are reported as a [`DegenerateRangeError`] instead.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod orientation;
mod progress;
mod sample;
mod visibility;

pub use anchor::{
    Anchor, AnchorDescriptor, AnchorSpec, ParseError, parse_anchor_spec, resolve_anchor,
};
pub use orientation::Orientation;
pub use progress::{
    DegenerateRangeError, ProgressResult, compute_progress, distance_to_anchor, progress_between,
};
pub use sample::{GeometrySample, LayoutSource, SampleFingerprint, geometry_changed};
pub use visibility::{
    MostVisible, VisibilityResult, compute_visibility, find_most_visible, is_in_viewport,
};
