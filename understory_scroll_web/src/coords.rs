// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate arithmetic shared by the DOM reads.

use kurbo::Vec2;

/// Document offset of a box from its client (viewport-relative) position and
/// the window's page offset.
pub(crate) fn document_offset(client: Vec2, page_offset: Vec2) -> Vec2 {
    client + page_offset
}

/// Scroll position reported to sessions: the page offset minus the root
/// element's client inset (`clientLeft`/`clientTop`).
pub(crate) fn inset_scroll(page_offset: Vec2, client_inset: Vec2) -> Vec2 {
    page_offset - client_inset
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{document_offset, inset_scroll};

    #[test]
    fn element_offset_uses_the_raw_page_offset() {
        let page = Vec2::new(0.0, 500.0);
        let inset = Vec2::new(0.0, 2.0);

        let element = document_offset(Vec2::new(0.0, 100.0), page);
        let scroll = inset_scroll(page, inset);
        assert_eq!(element, Vec2::new(0.0, 600.0));
        assert_eq!(scroll, Vec2::new(0.0, 498.0));

        // Anchor distances therefore carry the root inset once.
        assert_eq!(element.y - scroll.y, 102.0);
    }

    #[test]
    fn no_inset_no_shift() {
        let page = Vec2::new(40.0, 0.0);
        let element = document_offset(Vec2::new(10.0, 0.0), page);
        let scroll = inset_scroll(page, Vec2::ZERO);
        assert_eq!(element - scroll, Vec2::new(10.0, 0.0));
    }
}
