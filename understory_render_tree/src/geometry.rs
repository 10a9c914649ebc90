// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers: closed-bounds containment and first-line height.
//!
//! [`kurbo::Rect::contains`] is half-open on the maximum edges. Hover
//! resolution treats every edge of a box as inside, so it goes through
//! [`point_in_rect`] instead.

use core::fmt;

use kurbo::{Point, Rect};

use crate::types::{LineHeight, TextMetrics};

/// Returns true if `pt` lies within `rect`, inclusive of all four edges.
///
/// Points with a `NaN` coordinate are never inside.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_render_tree::point_in_rect;
///
/// let r = Rect::new(10.0, 10.0, 20.0, 20.0);
/// assert!(point_in_rect(Point::new(10.0, 15.0), r));
/// assert!(point_in_rect(Point::new(20.0, 20.0), r));
/// assert!(!point_in_rect(Point::new(20.5, 15.0), r));
/// ```
pub fn point_in_rect(pt: Point, rect: Rect) -> bool {
    rect.x0 <= pt.x && pt.x <= rect.x1 && rect.y0 <= pt.y && pt.y <= rect.y1
}

/// What to do when a typographic metric is missing, zero, negative, or not finite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MissingMetric {
    /// Fall back to the font size when the line height is unusable.
    #[default]
    UseFontSize,
    /// Report an unusable line height as [`MetricError::LineHeight`].
    Error,
}

/// A typographic metric needed for first-line height was unusable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MetricError {
    /// The font size was needed and was not a positive finite number.
    FontSize(f64),
    /// The line height was not a positive finite number.
    LineHeight(f64),
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontSize(v) => write!(f, "unusable font size: {v}"),
            Self::LineHeight(v) => write!(f, "unusable line height: {v}"),
        }
    }
}

impl core::error::Error for MetricError {}

fn usable(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

/// Height of the first rendered line of text.
///
/// - [`LineHeight::Normal`] yields the font size.
/// - [`LineHeight::Px`] yields that pixel value.
///
/// Unusable values never produce `NaN`; they either fall back per
/// `on_missing` or return a [`MetricError`].
///
/// ```
/// use understory_render_tree::{first_line_height, LineHeight, MissingMetric, TextMetrics};
///
/// let m = TextMetrics::new(16.0, LineHeight::Px(24.0));
/// assert_eq!(first_line_height(m, MissingMetric::UseFontSize), Ok(24.0));
///
/// let normal = TextMetrics::new(16.0, LineHeight::Normal);
/// assert_eq!(first_line_height(normal, MissingMetric::Error), Ok(16.0));
/// ```
pub fn first_line_height(
    metrics: TextMetrics,
    on_missing: MissingMetric,
) -> Result<f64, MetricError> {
    match metrics.line_height {
        LineHeight::Px(h) => match (usable(h), on_missing) {
            (Some(h), _) => Ok(h),
            (None, MissingMetric::Error) => Err(MetricError::LineHeight(h)),
            (None, MissingMetric::UseFontSize) => font_size(metrics),
        },
        LineHeight::Normal => font_size(metrics),
    }
}

fn font_size(metrics: TextMetrics) -> Result<f64, MetricError> {
    usable(metrics.font_size).ok_or(MetricError::FontSize(metrics.font_size))
}
