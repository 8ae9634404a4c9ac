// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::{AnchorDescriptor, AnchorSpec, Orientation, compute_progress, distance_to_anchor};

/// On-screen extent of an element along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct VisibilityResult {
    /// Visible pixels of the element, in `[0, min(element extent, viewport extent)]`.
    pub pixels: f64,
    /// `pixels` as a fraction of the element's own extent.
    ///
    /// NaN when the element has zero extent.
    pub proportion: f64,
}

/// Computes how much of `element` intersects the viewport along `orientation`.
#[must_use]
pub fn compute_visibility(
    element: Rect,
    viewport: Size,
    scroll: Vec2,
    orientation: Orientation,
) -> VisibilityResult {
    let extent = orientation.extent(element);
    let leading_to_trailing = distance_to_anchor(
        element,
        viewport,
        scroll,
        AnchorSpec::LEADING_TRAILING,
        orientation,
    );
    let trailing_to_leading = distance_to_anchor(
        element,
        viewport,
        scroll,
        AnchorSpec::TRAILING_LEADING,
        orientation,
    );

    // min/max rather than clamp: extent may be NaN for a broken layout.
    let from_trailing = (-leading_to_trailing).min(extent).max(0.0);
    let from_leading = trailing_to_leading.min(extent).max(0.0);
    let pixels = from_trailing
        .min(from_leading)
        .min(orientation.viewport_extent(viewport));

    VisibilityResult {
        pixels,
        proportion: pixels / extent,
    }
}

/// Returns `true` when `element` is between `"top bottom"` and `"bottom top"`
/// (or their horizontal equivalents) and at least `proportion` of it is visible.
///
/// An absent element is never in the viewport.
#[must_use]
pub fn is_in_viewport(
    element: Option<Rect>,
    viewport: Size,
    scroll: Vec2,
    orientation: Orientation,
    proportion: f64,
) -> bool {
    let Some(rect) = element else {
        return false;
    };
    let in_range = compute_progress(
        element,
        viewport,
        scroll,
        &AnchorDescriptor::LEADING_TRAILING,
        &AnchorDescriptor::TRAILING_LEADING,
        orientation,
    )
    .is_ok_and(|p| p.is_in_range);
    let visible = compute_visibility(rect, viewport, scroll, orientation);
    in_range && visible.proportion >= proportion
}

/// Outcome of a most-visible scan.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MostVisible {
    /// Index of the winning candidate, if any.
    pub index: Option<usize>,
    /// Visible pixels of the winner, `0.0` when nothing was found.
    pub pixels: f64,
    /// Visible proportion of the winner, `0.0` when nothing was found.
    pub proportion: f64,
}

impl MostVisible {
    /// Whether any candidate qualified.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}

/// Scans `candidates` once and returns the one with the most visible pixels.
///
/// A candidate qualifies when it shows at least `min_pixels` and strictly more
/// pixels than the best so far, starting from zero. Ties keep the earliest
/// candidate, and a set where nothing is visible finds nothing even with
/// `min_pixels == 0`. Absent candidates are skipped but still consume an index.
pub fn find_most_visible<I>(
    candidates: I,
    min_pixels: f64,
    viewport: Size,
    scroll: Vec2,
    orientation: Orientation,
) -> MostVisible
where
    I: IntoIterator<Item = Option<Rect>>,
{
    let mut best = MostVisible::default();
    for (index, candidate) in candidates.into_iter().enumerate() {
        let Some(rect) = candidate else {
            continue;
        };
        let visibility = compute_visibility(rect, viewport, scroll, orientation);
        if visibility.pixels >= min_pixels && visibility.pixels > best.pixels {
            best = MostVisible {
                index: Some(index),
                pixels: visibility.pixels,
                proportion: visibility.proportion,
            };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size, Vec2};

    use super::*;

    const VIEWPORT: Size = Size::new(1024.0, 800.0);

    fn band(top: f64, height: f64) -> Rect {
        Rect::new(0.0, top, 100.0, top + height)
    }

    fn at(y: f64) -> Vec2 {
        Vec2::new(0.0, y)
    }

    fn visible(rect: Rect, scroll_y: f64) -> VisibilityResult {
        compute_visibility(rect, VIEWPORT, at(scroll_y), Orientation::Vertical)
    }

    fn most_visible<const N: usize>(candidates: [Option<Rect>; N], min: f64) -> MostVisible {
        find_most_visible(candidates, min, VIEWPORT, at(0.0), Orientation::Vertical)
    }

    #[test]
    fn partially_visible_from_bottom() {
        // Viewport covers 500..1300, element 1000..1200.
        let v = visible(band(1000.0, 200.0), 500.0);
        assert_eq!(v.pixels, 200.0);
        assert_eq!(v.proportion, 1.0);

        // Viewport covers 0..800, element 700..900.
        let v = visible(band(700.0, 200.0), 0.0);
        assert_eq!(v.pixels, 100.0);
        assert_eq!(v.proportion, 0.5);
    }

    #[test]
    fn partially_visible_from_top() {
        // Viewport covers 150..950, element 100..300.
        let v = visible(band(100.0, 200.0), 150.0);
        assert_eq!(v.pixels, 150.0);
        assert_eq!(v.proportion, 0.75);
    }

    #[test]
    fn off_screen_is_zero() {
        assert_eq!(visible(band(0.0, 100.0), 500.0).pixels, 0.0);
        assert_eq!(visible(band(2000.0, 100.0), 0.0).pixels, 0.0);
    }

    #[test]
    fn taller_than_viewport_caps_at_viewport() {
        let v = visible(band(0.0, 3000.0), 1000.0);
        assert_eq!(v.pixels, 800.0);
        assert!((v.proportion - 800.0 / 3000.0).abs() < 1e-12);
    }

    #[test]
    fn zero_extent_yields_nan_proportion() {
        let v = visible(band(400.0, 0.0), 0.0);
        assert_eq!(v.pixels, 0.0);
        assert!(v.proportion.is_nan());
    }

    #[test]
    fn in_viewport_checks_range_and_proportion() {
        let el = Some(band(700.0, 200.0));
        assert!(is_in_viewport(el, VIEWPORT, at(0.0), Orientation::Vertical, 0.0));
        assert!(is_in_viewport(el, VIEWPORT, at(0.0), Orientation::Vertical, 0.5));
        assert!(!is_in_viewport(el, VIEWPORT, at(0.0), Orientation::Vertical, 0.6));
        assert!(!is_in_viewport(el, VIEWPORT, at(2000.0), Orientation::Vertical, 0.0));
        assert!(!is_in_viewport(None, VIEWPORT, at(0.0), Orientation::Vertical, 0.0));
    }

    #[test]
    fn most_visible_over_empty_set() {
        let result = find_most_visible(
            Vec::<Option<Rect>>::new(),
            0.0,
            VIEWPORT,
            at(0.0),
            Orientation::Vertical,
        );
        assert!(!result.is_found());
        assert_eq!(result.index, None);
    }

    #[test]
    fn all_hidden_candidates_find_nothing_even_with_zero_threshold() {
        let result = most_visible([Some(band(2000.0, 100.0)), Some(band(3000.0, 100.0))], 0.0);
        assert!(!result.is_found());
        assert_eq!(result.pixels, 0.0);
    }

    #[test]
    fn most_visible_picks_largest_and_first_on_ties() {
        let candidates = [
            Some(band(700.0, 200.0)), // 100 px
            Some(band(100.0, 200.0)), // 200 px
            Some(band(300.0, 200.0)), // 200 px, tie
        ];
        let result = most_visible(candidates, 0.0);
        assert_eq!(result.index, Some(1));
        assert_eq!(result.pixels, 200.0);
        assert_eq!(result.proportion, 1.0);
    }

    #[test]
    fn most_visible_respects_threshold_and_skips_absent() {
        let candidates = [None, Some(band(700.0, 200.0))];
        assert_eq!(most_visible(candidates, 50.0).index, Some(1));
        assert!(!most_visible(candidates, 150.0).is_found());
    }
}
