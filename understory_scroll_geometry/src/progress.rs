// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Rect, Size, Vec2};

use crate::{AnchorDescriptor, AnchorSpec, Orientation};

/// Error returned when the start and end anchors coincide.
///
/// Progress is a ratio over the distance between the two anchors, so a zero
/// length range has no defined progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateRangeError {
    /// The shared signed distance of both anchors.
    pub distance: f64,
}

impl fmt::Display for DegenerateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start and end anchors coincide at distance {}, progress is undefined",
            self.distance
        )
    }
}

impl core::error::Error for DegenerateRangeError {}

/// Progress of an element between its start and end anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressResult {
    /// `0.0` at the start anchor, `1.0` at the end anchor. Values outside
    /// `[0, 1]` mean the range has not been reached yet or has been passed.
    pub progress: f64,
    /// `true` when `0 < progress <= 1`.
    pub is_in_range: bool,
}

impl ProgressResult {
    /// Wraps a raw progress value, deriving [`ProgressResult::is_in_range`].
    ///
    /// The upper bound is inclusive: an element exactly at its end anchor is
    /// still in range, one exactly at its start anchor is not.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self {
            progress,
            is_in_range: progress > 0.0 && progress <= 1.0,
        }
    }
}

/// Signed distance from the element's anchor to the viewport's anchor.
///
/// `element` is in document coordinates; the scroll offset is subtracted
/// explicitly. The distance shrinks toward zero as forward scrolling brings
/// the two anchors together.
#[must_use]
pub fn distance_to_anchor(
    element: Rect,
    viewport: Size,
    scroll: Vec2,
    spec: AnchorSpec,
    orientation: Orientation,
) -> f64 {
    let element_anchor =
        orientation.leading_edge(element) + orientation.extent(element) * spec.element;
    let viewport_anchor =
        orientation.scroll_position(scroll) + orientation.viewport_extent(viewport) * spec.viewport;
    element_anchor - viewport_anchor
}

/// Progress from two anchor distances: `-start / (end - start)`.
pub fn progress_between(
    distance_start: f64,
    distance_end: f64,
) -> Result<f64, DegenerateRangeError> {
    let span = distance_end - distance_start;
    if span == 0.0 {
        return Err(DegenerateRangeError {
            distance: distance_start,
        });
    }
    Ok(-distance_start / span)
}

/// Computes how far `element` has travelled from `start` to `end`.
///
/// Both descriptors are resolved against the element's and the viewport's
/// current extents. An absent element yields a neutral progress of `0.0`
/// rather than an error, so that ticks arriving before layout is ready are
/// harmless.
pub fn compute_progress(
    element: Option<Rect>,
    viewport: Size,
    scroll: Vec2,
    start: &AnchorDescriptor,
    end: &AnchorDescriptor,
    orientation: Orientation,
) -> Result<ProgressResult, DegenerateRangeError> {
    let Some(element) = element else {
        return Ok(ProgressResult::new(0.0));
    };
    let element_size = orientation.extent(element);
    let viewport_size = orientation.viewport_extent(viewport);
    let start = start.resolve(element_size, viewport_size);
    let end = end.resolve(element_size, viewport_size);

    let distance_start = distance_to_anchor(element, viewport, scroll, start, orientation);
    let distance_end = distance_to_anchor(element, viewport, scroll, end, orientation);
    progress_between(distance_start, distance_end).map(ProgressResult::new)
}
