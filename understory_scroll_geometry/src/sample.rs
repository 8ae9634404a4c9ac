// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

/// Anything that can report a layout rectangle in document coordinates.
///
/// Hosts implement this for their element handles. `None` means the element
/// is absent or has no layout yet.
pub trait LayoutSource {
    /// Current layout rectangle in document (scroll-invariant) coordinates.
    fn layout_rect(&self) -> Option<Rect>;
}

impl LayoutSource for Rect {
    fn layout_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl LayoutSource for Option<Rect> {
    fn layout_rect(&self) -> Option<Rect> {
        *self
    }
}

impl<T: LayoutSource + ?Sized> LayoutSource for &T {
    fn layout_rect(&self) -> Option<Rect> {
        (**self).layout_rect()
    }
}

/// One tick's worth of geometry.
///
/// Samples are taken fresh on every tick by the driver and are never reused.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GeometrySample {
    /// Size of the visible area of the scrolling container.
    pub viewport: Size,
    /// Scroll position of the container.
    pub scroll: Vec2,
    /// Layout rectangles of the watched targets, in configuration order.
    pub targets: Vec<Option<Rect>>,
}

impl GeometrySample {
    /// A sample for a single watched element.
    #[must_use]
    pub fn single(viewport: Size, scroll: Vec2, element: Option<Rect>) -> Self {
        Self {
            viewport,
            scroll,
            targets: vec![element],
        }
    }

    /// A sample for a group of watched elements.
    #[must_use]
    pub fn group(
        viewport: Size,
        scroll: Vec2,
        elements: impl IntoIterator<Item = Option<Rect>>,
    ) -> Self {
        Self {
            viewport,
            scroll,
            targets: elements.into_iter().collect(),
        }
    }

    /// Reads every source's current rectangle.
    #[must_use]
    pub fn from_sources<S: LayoutSource>(viewport: Size, scroll: Vec2, sources: &[S]) -> Self {
        Self::group(viewport, scroll, sources.iter().map(|s| s.layout_rect()))
    }

    /// The first target, used by single-element sessions.
    #[must_use]
    pub fn primary(&self) -> Option<Rect> {
        self.targets.first().copied().flatten()
    }

    /// A comparable snapshot of everything that affects progress or visibility.
    #[must_use]
    pub fn fingerprint(&self) -> SampleFingerprint {
        SampleFingerprint::of(self)
    }
}

/// Snapshot used to skip ticks whose geometry did not change.
///
/// Target rectangles are part of the fingerprint, so a layout shift without
/// scrolling is still seen as a change.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleFingerprint {
    viewport: Size,
    scroll: Vec2,
    targets: Vec<Option<Rect>>,
}

impl SampleFingerprint {
    /// Captures `sample`.
    #[must_use]
    pub fn of(sample: &GeometrySample) -> Self {
        Self {
            viewport: sample.viewport,
            scroll: sample.scroll,
            targets: sample.targets.clone(),
        }
    }

    /// Whether `sample` has the same geometry as this snapshot.
    #[must_use]
    pub fn matches(&self, sample: &GeometrySample) -> bool {
        self.viewport == sample.viewport
            && self.scroll == sample.scroll
            && self.targets == sample.targets
    }
}

/// Returns `true` unless `sample` matches the `previous` fingerprint.
#[must_use]
pub fn geometry_changed(previous: Option<&SampleFingerprint>, sample: &GeometrySample) -> bool {
    previous.is_none_or(|fp| !fp.matches(sample))
}
