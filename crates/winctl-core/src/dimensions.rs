use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An axis-aligned rectangle in virtual-screen coordinates.
///
/// Edges are stored the way the OS reports them (`left/top/right/bottom`).
/// `right >= left` and `bottom >= top` always hold; zero-sized rectangles
/// are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Dimensions {
    /// Creates a rectangle from its four edges.
    ///
    /// Fails with [`Error::InvalidDimensions`] if the rectangle would have a
    /// negative width or height.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        if right < left || bottom < top {
            return Err(Error::InvalidDimensions {
                left,
                top,
                right,
                bottom,
            });
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Creates a rectangle from an origin and a size.
    ///
    /// Fails with [`Error::InvalidDimensions`] if the size is negative or
    /// the far edge does not fit in an `i32`.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        match (x.checked_add(width), y.checked_add(height)) {
            (Some(right), Some(bottom)) => Self::new(x, y, right, bottom),
            _ => Err(Error::InvalidDimensions {
                left: x,
                top: y,
                right: x.saturating_add(width),
                bottom: y.saturating_add(height),
            }),
        }
    }

    /// Horizontal extent, saturating at `i32::MAX` for rectangles wider
    /// than an `i32` can express.
    pub fn width(&self) -> i32 {
        clamp_span(self.span_x())
    }

    /// Vertical extent, saturating like [`width`](Self::width).
    pub fn height(&self) -> i32 {
        clamp_span(self.span_y())
    }

    /// Area in square pixels, saturating at `i64::MAX`.
    pub fn area(&self) -> i64 {
        self.span_x().saturating_mul(self.span_y())
    }

    /// Returns the number of pixels shared with `other`.
    ///
    /// Zero when the rectangles only touch or do not meet at all.
    pub fn overlap_area(&self, other: &Dimensions) -> i64 {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        let w = i64::from(right) - i64::from(left);
        let h = i64::from(bottom) - i64::from(top);
        w.max(0).saturating_mul(h.max(0))
    }

    fn span_x(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    fn span_y(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Dimensions) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns a copy shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            right: self.right.saturating_add(dx),
            bottom: self.bottom.saturating_add(dy),
        }
    }
}

fn clamp_span(span: i64) -> i32 {
    i32::try_from(span).unwrap_or(i32::MAX)
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}) {}x{}",
            self.left,
            self.top,
            self.span_x(),
            self.span_y()
        )
    }
}
