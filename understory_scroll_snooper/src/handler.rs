// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks fired by a session.
//!
//! Every method of [`SnoopHandler`] has a no-op default, so handlers only
//! implement the transitions they care about. `Vec<SnoopEvent>` implements the
//! trait by recording every call, which is convenient for tests and for hosts
//! that prefer to drain events after a tick.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_scroll_geometry::{MostVisible, VisibilityResult};

/// Payload of progress-mode callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollData {
    /// The watched element's rectangle for this tick, if present.
    pub rect: Option<Rect>,
    /// Progress between the start and end anchors.
    pub progress: f64,
    /// `-1` when the scroll position increased since the previous tick,
    /// `1` otherwise (including the first tick and unchanged positions).
    pub direction: i8,
    /// `true` when `0 < progress <= 1`.
    pub is_in_viewport: bool,
    /// Visible pixels and proportion, when the session asks for them.
    pub visibility: Option<VisibilityResult>,
}

/// Receiver of session callbacks.
pub trait SnoopHandler {
    /// The element crossed into its range.
    fn on_enter(&mut self, data: &ScrollData) {
        let _ = data;
    }

    /// The element left its range.
    fn on_leave(&mut self, data: &ScrollData) {
        let _ = data;
    }

    /// Progress report for this tick.
    fn on_scroll(&mut self, data: &ScrollData) {
        let _ = data;
    }

    /// The element became fully visible.
    fn on_enter_full(&mut self, data: &ScrollData) {
        let _ = data;
    }

    /// The element stopped being fully visible.
    fn on_leave_partial(&mut self, data: &ScrollData) {
        let _ = data;
    }

    /// The most visible element of the group changed.
    fn on_change(&mut self, most_visible: &MostVisible) {
        let _ = most_visible;
    }

    /// A most visible element was found after a change.
    fn on_found(&mut self, most_visible: &MostVisible) {
        let _ = most_visible;
    }
}

impl SnoopHandler for () {}

impl<H: SnoopHandler + ?Sized> SnoopHandler for &mut H {
    fn on_enter(&mut self, data: &ScrollData) {
        (**self).on_enter(data);
    }

    fn on_leave(&mut self, data: &ScrollData) {
        (**self).on_leave(data);
    }

    fn on_scroll(&mut self, data: &ScrollData) {
        (**self).on_scroll(data);
    }

    fn on_enter_full(&mut self, data: &ScrollData) {
        (**self).on_enter_full(data);
    }

    fn on_leave_partial(&mut self, data: &ScrollData) {
        (**self).on_leave_partial(data);
    }

    fn on_change(&mut self, most_visible: &MostVisible) {
        (**self).on_change(most_visible);
    }

    fn on_found(&mut self, most_visible: &MostVisible) {
        (**self).on_found(most_visible);
    }
}

/// A recorded callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnoopEvent {
    /// See [`SnoopHandler::on_enter`].
    Enter(ScrollData),
    /// See [`SnoopHandler::on_leave`].
    Leave(ScrollData),
    /// See [`SnoopHandler::on_scroll`].
    Scroll(ScrollData),
    /// See [`SnoopHandler::on_enter_full`].
    EnterFull(ScrollData),
    /// See [`SnoopHandler::on_leave_partial`].
    LeavePartial(ScrollData),
    /// See [`SnoopHandler::on_change`].
    Change(MostVisible),
    /// See [`SnoopHandler::on_found`].
    Found(MostVisible),
}

impl SnoopHandler for Vec<SnoopEvent> {
    fn on_enter(&mut self, data: &ScrollData) {
        self.push(SnoopEvent::Enter(*data));
    }

    fn on_leave(&mut self, data: &ScrollData) {
        self.push(SnoopEvent::Leave(*data));
    }

    fn on_scroll(&mut self, data: &ScrollData) {
        self.push(SnoopEvent::Scroll(*data));
    }

    fn on_enter_full(&mut self, data: &ScrollData) {
        self.push(SnoopEvent::EnterFull(*data));
    }

    fn on_leave_partial(&mut self, data: &ScrollData) {
        self.push(SnoopEvent::LeavePartial(*data));
    }

    fn on_change(&mut self, most_visible: &MostVisible) {
        self.push(SnoopEvent::Change(*most_visible));
    }

    fn on_found(&mut self, most_visible: &MostVisible) {
        self.push(SnoopEvent::Found(*most_visible));
    }
}
