// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::Rect;
use understory_scroll_geometry::{
    DegenerateRangeError, GeometrySample, Orientation, SampleFingerprint, compute_progress,
    compute_visibility, find_most_visible, geometry_changed,
};

use crate::{MarkerPositions, MarkerRenderer, ScrollData, SnoopHandler, SnoopMode, SnoopOptions};

const LOG_TARGET: &str = "scroll_snooper";

/// Error returned by [`SnoopSession::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnoopError {
    /// The configured start and end anchors coincide for this tick's geometry.
    DegenerateRange(DegenerateRangeError),
}

impl fmt::Display for SnoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRange(err) => write!(f, "cannot compute scroll progress: {err}"),
        }
    }
}

impl core::error::Error for SnoopError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::DegenerateRange(err) => Some(err),
        }
    }
}

impl From<DegenerateRangeError> for SnoopError {
    fn from(err: DegenerateRangeError) -> Self {
        Self::DegenerateRange(err)
    }
}

/// Outcome of a successful [`SnoopSession::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    /// The sample was evaluated and callbacks fired as needed.
    Evaluated,
    /// The sample matched the previous one and was ignored.
    Skipped,
}

/// Scroll direction sign between two positions along the axis.
///
/// An increasing position yields `-1`; an unchanged or decreasing position,
/// or the very first sample, yields `1`.
#[must_use]
pub fn scroll_direction(previous: Option<f64>, current: f64) -> i8 {
    match previous {
        Some(previous) if current > previous => -1,
        _ => 1,
    }
}

/// One watcher over a target element or a group of elements.
///
/// A session holds only transition state. The driver calls
/// [`update`](Self::update) with fresh geometry whenever it wants the session
/// to reassess, and drops the session to stop watching.
pub struct SnoopSession {
    options: SnoopOptions,
    entered: bool,
    fully_visible: bool,
    // Outer `None`: no most-visible scan has run yet.
    last_most_visible: Option<Option<usize>>,
    last_position: Option<f64>,
    last_fingerprint: Option<SampleFingerprint>,
    markers: Option<Box<dyn MarkerRenderer>>,
}

impl fmt::Debug for SnoopSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnoopSession")
            .field("options", &self.options)
            .field("entered", &self.entered)
            .field("fully_visible", &self.fully_visible)
            .field("last_most_visible", &self.last_most_visible)
            .field("last_position", &self.last_position)
            .field("last_fingerprint", &self.last_fingerprint)
            .field("markers", &self.markers.is_some())
            .finish()
    }
}

impl SnoopSession {
    /// Creates a session in the outside state.
    #[must_use]
    pub fn new(options: SnoopOptions) -> Self {
        Self {
            options,
            entered: false,
            fully_visible: false,
            last_most_visible: None,
            last_position: None,
            last_fingerprint: None,
            markers: None,
        }
    }

    /// The session's configuration.
    #[must_use]
    pub fn options(&self) -> &SnoopOptions {
        &self.options
    }

    /// Whether the element is currently inside its range.
    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Whether the element was fully visible on the last evaluated tick.
    #[must_use]
    pub fn is_fully_visible(&self) -> bool {
        self.fully_visible
    }

    /// Index of the most visible element found by the last scan.
    #[must_use]
    pub fn most_visible_index(&self) -> Option<usize> {
        self.last_most_visible.flatten()
    }

    /// Attaches a marker renderer, replacing (and removing) any previous one.
    ///
    /// The renderer is only driven when markers are enabled in the options.
    pub fn attach_markers(&mut self, renderer: Box<dyn MarkerRenderer>) {
        self.detach_markers();
        self.markers = Some(renderer);
    }

    /// Detaches the marker renderer after asking it to remove its markers.
    pub fn detach_markers(&mut self) -> Option<Box<dyn MarkerRenderer>> {
        let mut renderer = self.markers.take()?;
        renderer.remove();
        Some(renderer)
    }

    /// Returns the session to its initial state, keeping options and markers.
    pub fn reset(&mut self) {
        self.entered = false;
        self.fully_visible = false;
        self.last_most_visible = None;
        self.last_position = None;
        self.last_fingerprint = None;
    }

    /// Reassesses the session against one tick of geometry.
    ///
    /// Callbacks fire synchronously on `handler` before this returns. On error
    /// no state changes, so the next tick is evaluated from scratch.
    pub fn update<H>(
        &mut self,
        sample: &GeometrySample,
        handler: &mut H,
    ) -> Result<Update, SnoopError>
    where
        H: SnoopHandler + ?Sized,
    {
        let debounce = self.options.debounce();
        if debounce && !geometry_changed(self.last_fingerprint.as_ref(), sample) {
            log::trace!(target: LOG_TARGET, "geometry unchanged, skipping tick");
            return Ok(Update::Skipped);
        }

        match self.options.mode() {
            SnoopMode::Progress => self.update_progress(sample, handler)?,
            SnoopMode::MostVisible { at_least_pixels } => {
                self.update_most_visible(sample, at_least_pixels, handler);
            }
        }

        if debounce {
            self.last_fingerprint = Some(sample.fingerprint());
        }
        Ok(Update::Evaluated)
    }

    fn update_progress<H>(
        &mut self,
        sample: &GeometrySample,
        handler: &mut H,
    ) -> Result<(), SnoopError>
    where
        H: SnoopHandler + ?Sized,
    {
        let orientation = self.options.orientation();
        let rect = sample.primary();
        let result = compute_progress(
            rect,
            sample.viewport,
            sample.scroll,
            &self.options.start(),
            &self.options.end(),
            orientation,
        )?;

        let position = orientation.scroll_position(sample.scroll);
        let direction = scroll_direction(self.last_position, position);
        self.last_position = Some(position);

        let visibility =
            rect.map(|r| compute_visibility(r, sample.viewport, sample.scroll, orientation));
        let data = ScrollData {
            rect,
            progress: result.progress,
            direction,
            is_in_viewport: result.is_in_range,
            visibility: visibility.filter(|_| self.options.visibility()),
        };

        let was_entered = self.entered;
        if result.is_in_range && !was_entered {
            self.entered = true;
            log::debug!(target: LOG_TARGET, "enter at progress {:.4}", data.progress);
            handler.on_enter(&data);
        } else if !result.is_in_range && was_entered {
            self.entered = false;
            log::debug!(target: LOG_TARGET, "leave at progress {:.4}", data.progress);
            handler.on_leave(&data);
        }

        let fully_visible = visibility.is_some_and(|v| v.proportion >= 1.0);
        if fully_visible && !self.fully_visible {
            self.fully_visible = true;
            handler.on_enter_full(&data);
        } else if !fully_visible && self.fully_visible {
            self.fully_visible = false;
            handler.on_leave_partial(&data);
        }

        // Far from the range: stay quiet unless asked for continuous reports.
        if !result.is_in_range && !was_entered && !self.options.progress_out_of_view() {
            return Ok(());
        }

        if self.options.markers()
            && let (Some(renderer), Some(rect)) = (self.markers.as_mut(), rect)
        {
            renderer.place(&marker_positions(&self.options, sample, rect, orientation));
        }

        handler.on_scroll(&data);
        Ok(())
    }

    fn update_most_visible<H>(
        &mut self,
        sample: &GeometrySample,
        at_least_pixels: f64,
        handler: &mut H,
    )
    where
        H: SnoopHandler + ?Sized,
    {
        let most_visible = find_most_visible(
            sample.targets.iter().copied(),
            at_least_pixels,
            sample.viewport,
            sample.scroll,
            self.options.orientation(),
        );
        if self.last_most_visible == Some(most_visible.index) {
            return;
        }
        log::debug!(
            target: LOG_TARGET,
            "most visible changed from {:?} to {:?}",
            self.most_visible_index(),
            most_visible.index
        );
        self.last_most_visible = Some(most_visible.index);
        handler.on_change(&most_visible);
        if most_visible.is_found() {
            handler.on_found(&most_visible);
        }
    }
}

fn marker_positions(
    options: &SnoopOptions,
    sample: &GeometrySample,
    rect: Rect,
    orientation: Orientation,
) -> MarkerPositions {
    let extent = orientation.extent(rect);
    let viewport_extent = orientation.viewport_extent(sample.viewport);
    let start = options.start().resolve(extent, viewport_extent);
    let end = options.end().resolve(extent, viewport_extent);
    let leading = orientation.leading_edge(rect);
    MarkerPositions {
        viewport_start: start.viewport,
        viewport_end: end.viewport,
        element_start: leading + extent * start.element,
        element_end: leading + extent * end.element,
        orientation,
    }
}
