// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_scroll_geometry::{AnchorDescriptor, Orientation, ParseError};

/// What a session reports on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SnoopMode {
    /// Track one element between its start and end anchors and report
    /// enter, leave, scroll, and fully-visible transitions.
    #[default]
    Progress,
    /// Track which element of a group shows the most pixels.
    MostVisible {
        /// Minimum visible pixels for a candidate to qualify.
        at_least_pixels: f64,
    },
}

/// Configuration of a [`SnoopSession`](crate::SnoopSession).
///
/// Descriptors are parsed when they are set, so a malformed descriptor is
/// reported before any session exists.
///
/// ```rust
/// use understory_scroll_geometry::Orientation;
/// use understory_scroll_snooper::SnoopOptions;
///
/// let options = SnoopOptions::new()
///     .with_orientation(Orientation::Horizontal)
///     .with_start("left 75%")?
///     .with_visibility(true);
/// assert!(options.visibility());
///
/// assert!(SnoopOptions::new().with_end("top").is_err());
/// # Ok::<(), understory_scroll_geometry::ParseError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SnoopOptions {
    start: Option<AnchorDescriptor>,
    end: Option<AnchorDescriptor>,
    orientation: Orientation,
    visibility: bool,
    markers: bool,
    progress_out_of_view: bool,
    debounce: bool,
    mode: SnoopMode,
}

impl Default for SnoopOptions {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            orientation: Orientation::Vertical,
            visibility: false,
            markers: false,
            progress_out_of_view: false,
            debounce: true,
            mode: SnoopMode::Progress,
        }
    }
}

impl SnoopOptions {
    /// Default options: vertical, `"top bottom"` to `"bottom top"`, debounced.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start descriptor.
    pub fn with_start(mut self, descriptor: &str) -> Result<Self, ParseError> {
        self.start = Some(AnchorDescriptor::parse(descriptor)?);
        Ok(self)
    }

    /// Sets the end descriptor.
    pub fn with_end(mut self, descriptor: &str) -> Result<Self, ParseError> {
        self.end = Some(AnchorDescriptor::parse(descriptor)?);
        Ok(self)
    }

    /// Sets both descriptors.
    pub fn with_range(self, start: &str, end: &str) -> Result<Self, ParseError> {
        self.with_start(start)?.with_end(end)
    }

    /// Selects the scroll axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Attaches a visibility measurement to every reported payload.
    #[must_use]
    pub fn with_visibility(mut self, visibility: bool) -> Self {
        self.visibility = visibility;
        self
    }

    /// Drives an attached [`MarkerRenderer`](crate::MarkerRenderer).
    #[must_use]
    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Reports scroll progress on every tick, even while outside the range.
    #[must_use]
    pub fn with_progress_out_of_view(mut self, progress_out_of_view: bool) -> Self {
        self.progress_out_of_view = progress_out_of_view;
        self
    }

    /// Skips ticks whose geometry is identical to the previous tick.
    #[must_use]
    pub fn with_debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }

    /// Switches to most-visible tracking with the given pixel threshold.
    #[must_use]
    pub fn with_most_visible(mut self, at_least_pixels: f64) -> Self {
        self.mode = SnoopMode::MostVisible { at_least_pixels };
        self
    }

    /// Effective start descriptor.
    ///
    /// Without an explicit descriptor this is `"top bottom"` for vertical and
    /// `"left right"` for horizontal sessions.
    #[must_use]
    pub fn start(&self) -> AnchorDescriptor {
        self.start.unwrap_or(AnchorDescriptor::LEADING_TRAILING)
    }

    /// Effective end descriptor, `"bottom top"` / `"right left"` by default.
    #[must_use]
    pub fn end(&self) -> AnchorDescriptor {
        self.end.unwrap_or(AnchorDescriptor::TRAILING_LEADING)
    }

    /// Scroll axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether payloads carry a visibility measurement.
    #[must_use]
    pub fn visibility(&self) -> bool {
        self.visibility
    }

    /// Whether markers are driven.
    #[must_use]
    pub fn markers(&self) -> bool {
        self.markers
    }

    /// Whether scroll progress is reported outside the range.
    #[must_use]
    pub fn progress_out_of_view(&self) -> bool {
        self.progress_out_of_view
    }

    /// Whether unchanged ticks are skipped.
    #[must_use]
    pub fn debounce(&self) -> bool {
        self.debounce
    }

    /// Reporting mode.
    #[must_use]
    pub fn mode(&self) -> SnoopMode {
        self.mode
    }
}
