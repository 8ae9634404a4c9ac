// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for progress and visibility geometry.

use kurbo::{Rect, Size, Vec2};
use proptest::prelude::*;
use understory_scroll_geometry::{
    AnchorDescriptor, Orientation, compute_progress, compute_visibility,
};

// Keyword and quarter-percent anchors keep every distance exact for integer
// geometry, so coinciding anchors always produce an exact zero span.
const DESCRIPTORS: &[&str] = &[
    "top bottom",
    "bottom top",
    "center center",
    "top top",
    "bottom bottom",
    "25% 75%",
    "75% 25%",
    "center 50%",
];

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Vertical), Just(Orientation::Horizontal)]
}

fn element(orientation: Orientation, leading: f64, extent: f64) -> Rect {
    match orientation {
        Orientation::Vertical => Rect::new(0.0, leading, 320.0, leading + extent),
        Orientation::Horizontal => Rect::new(leading, 0.0, leading + extent, 240.0),
    }
}

fn scroll(orientation: Orientation, position: f64) -> Vec2 {
    match orientation {
        Orientation::Vertical => Vec2::new(0.0, position),
        Orientation::Horizontal => Vec2::new(position, 0.0),
    }
}

proptest! {
    #[test]
    fn progress_is_monotonic_in_scroll(
        orientation in orientation_strategy(),
        leading in 0_u32..5_000,
        extent in 1_u32..1_000,
        viewport_extent in 100_u32..2_000,
        start_ix in 0..DESCRIPTORS.len(),
        end_ix in 0..DESCRIPTORS.len(),
        mut positions in prop::collection::vec(0_u32..10_000, 2..32),
    ) {
        let start = AnchorDescriptor::parse(DESCRIPTORS[start_ix]).unwrap();
        let end = AnchorDescriptor::parse(DESCRIPTORS[end_ix]).unwrap();
        let rect = element(orientation, f64::from(leading), f64::from(extent));
        let viewport = Size::new(f64::from(viewport_extent), f64::from(viewport_extent));
        positions.sort_unstable();

        let mut progress = Vec::with_capacity(positions.len());
        for p in &positions {
            match compute_progress(
                Some(rect),
                viewport,
                scroll(orientation, f64::from(*p)),
                &start,
                &end,
                orientation,
            ) {
                Ok(result) => progress.push(result.progress),
                // Coinciding anchors have no progress at any scroll position.
                Err(_) => return Ok(()),
            }
        }

        let first = progress[0];
        let last = progress[progress.len() - 1];
        for pair in progress.windows(2) {
            if last >= first {
                prop_assert!(pair[1] >= pair[0] - 1e-9, "not non-decreasing: {progress:?}");
            } else {
                prop_assert!(pair[1] <= pair[0] + 1e-9, "not non-increasing: {progress:?}");
            }
        }
    }

    #[test]
    fn visible_pixels_are_bounded(
        orientation in orientation_strategy(),
        leading in -5_000.0_f64..5_000.0,
        extent in 0.0_f64..3_000.0,
        viewport_extent in 0.0_f64..2_000.0,
        position in -5_000.0_f64..10_000.0,
    ) {
        let rect = element(orientation, leading, extent);
        let viewport = Size::new(viewport_extent, viewport_extent);
        let v = compute_visibility(rect, viewport, scroll(orientation, position), orientation);

        prop_assert!(v.pixels >= 0.0);
        prop_assert!(v.pixels <= extent.min(viewport_extent) + 1e-9);
        if orientation.extent(rect) > 0.0 {
            prop_assert!((0.0..=1.0).contains(&v.proportion));
        }
    }
}
