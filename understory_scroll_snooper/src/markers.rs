// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_scroll_geometry::Orientation;

/// Where debug markers for a session's range should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPositions {
    /// Start anchor on the viewport, as a fraction of the viewport extent.
    pub viewport_start: f64,
    /// End anchor on the viewport, as a fraction of the viewport extent.
    pub viewport_end: f64,
    /// Start anchor on the element, in document coordinates along the axis.
    pub element_start: f64,
    /// End anchor on the element, in document coordinates along the axis.
    pub element_end: f64,
    /// Axis the positions are measured along.
    pub orientation: Orientation,
}

/// Host capability that draws range markers for visual debugging.
///
/// The session only computes positions; all drawing happens behind this
/// trait so the session itself never touches the host.
pub trait MarkerRenderer {
    /// Moves the markers to `positions`.
    fn place(&mut self, positions: &MarkerPositions);

    /// Removes any markers from the host. Called when the renderer is detached.
    fn remove(&mut self) {}
}
