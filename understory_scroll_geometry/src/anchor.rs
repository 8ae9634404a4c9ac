// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor descriptors: `"top bottom"`, `"center 50%"`, `"40px 200px"`.
//!
//! A descriptor names one point on the element and one point on the viewport.
//! Parsing is split from resolution: a descriptor is parsed once when a
//! session is configured, and resolved against the live element and viewport
//! sizes on every tick, since pixel tokens depend on those sizes.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Error produced when an anchor token or descriptor cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The token is neither a keyword nor a `%`/`px` value.
    UnknownToken(String),
    /// The token has a `%` or `px` suffix but its prefix is not a finite number.
    InvalidNumber(String),
    /// The descriptor did not split into exactly two tokens.
    TokenCount {
        /// Number of whitespace-separated tokens found.
        found: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken(token) => write!(f, "unrecognized anchor token {token:?}"),
            Self::InvalidNumber(token) => {
                write!(f, "anchor token {token:?} does not start with a number")
            }
            Self::TokenCount { found } => {
                write!(f, "anchor descriptor must have exactly two tokens, found {found}")
            }
        }
    }
}

impl core::error::Error for ParseError {}

/// One parsed, unresolved anchor token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// A keyword position: `top`/`left` = 0, `center` = 0.5, `bottom`/`right` = 1.
    Fraction(f64),
    /// A percentage of the reference size, stored as written (`25%` is `25.0`).
    Percent(f64),
    /// An absolute pixel offset from the leading edge.
    Pixels(f64),
}

impl Anchor {
    /// Normalizes this anchor against `reference_size`.
    ///
    /// Pixel anchors divide by `reference_size` and therefore produce NaN or an
    /// infinity when the reference size is zero.
    #[must_use]
    pub fn resolve(self, reference_size: f64) -> f64 {
        match self {
            Self::Fraction(f) => f,
            Self::Percent(p) => p / 100.0,
            Self::Pixels(px) => px / reference_size,
        }
    }
}

impl FromStr for Anchor {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "top" | "left" => return Ok(Self::Fraction(0.0)),
            "center" => return Ok(Self::Fraction(0.5)),
            "bottom" | "right" => return Ok(Self::Fraction(1.0)),
            _ => {}
        }
        if let Some(number) = token.strip_suffix('%') {
            return parse_number(number, token).map(Self::Percent);
        }
        if let Some(number) = token.strip_suffix("px") {
            return parse_number(number, token).map(Self::Pixels);
        }
        Err(ParseError::UnknownToken(token.to_string()))
    }
}

fn parse_number(number: &str, token: &str) -> Result<f64, ParseError> {
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber(token.to_string())),
    }
}

/// A parsed `"<element> <viewport>"` descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorDescriptor {
    /// Point on the element, resolved against the element's extent.
    pub element: Anchor,
    /// Point on the viewport, resolved against the viewport's extent.
    pub viewport: Anchor,
}

impl AnchorDescriptor {
    /// `"top bottom"` / `"left right"`: the default start of a range.
    pub const LEADING_TRAILING: Self = Self {
        element: Anchor::Fraction(0.0),
        viewport: Anchor::Fraction(1.0),
    };
    /// `"bottom top"` / `"right left"`: the default end of a range.
    pub const TRAILING_LEADING: Self = Self {
        element: Anchor::Fraction(1.0),
        viewport: Anchor::Fraction(0.0),
    };

    /// Parses a descriptor made of exactly two whitespace-separated tokens.
    pub fn parse(descriptor: &str) -> Result<Self, ParseError> {
        let mut tokens = descriptor.split_whitespace();
        let (Some(element), Some(viewport)) = (tokens.next(), tokens.next()) else {
            return Err(ParseError::TokenCount {
                found: descriptor.split_whitespace().count(),
            });
        };
        let extra = tokens.count();
        if extra > 0 {
            return Err(ParseError::TokenCount { found: 2 + extra });
        }
        Ok(Self {
            element: element.parse()?,
            viewport: viewport.parse()?,
        })
    }

    /// Resolves both anchors against the current element and viewport extents.
    #[must_use]
    pub fn resolve(&self, element_size: f64, viewport_size: f64) -> AnchorSpec {
        AnchorSpec {
            element: self.element.resolve(element_size),
            viewport: self.viewport.resolve(viewport_size),
        }
    }
}

impl FromStr for AnchorDescriptor {
    type Err = ParseError;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        Self::parse(descriptor)
    }
}

/// A resolved pair of normalized anchors.
///
/// `0.0` is the leading edge, `1.0` the trailing edge. Pixel anchors may fall
/// outside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AnchorSpec {
    /// Normalized point on the element.
    pub element: f64,
    /// Normalized point on the viewport.
    pub viewport: f64,
}

impl AnchorSpec {
    /// Element leading edge against viewport trailing edge (`"top bottom"`).
    pub const LEADING_TRAILING: Self = Self::new(0.0, 1.0);
    /// Element trailing edge against viewport leading edge (`"bottom top"`).
    pub const TRAILING_LEADING: Self = Self::new(1.0, 0.0);

    /// Creates a spec from already-normalized anchors.
    #[must_use]
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }
}

/// Resolves a single position token against `reference_size`.
pub fn resolve_anchor(token: &str, reference_size: f64) -> Result<f64, ParseError> {
    token
        .parse::<Anchor>()
        .map(|anchor| anchor.resolve(reference_size))
}

/// Parses and resolves a two-token descriptor in one step.
///
/// The first token resolves against `element_size`, the second against
/// `viewport_size`.
pub fn parse_anchor_spec(
    descriptor: &str,
    element_size: f64,
    viewport_size: f64,
) -> Result<AnchorSpec, ParseError> {
    AnchorDescriptor::parse(descriptor)
        .map(|d| d.resolve(element_size, viewport_size))
}
