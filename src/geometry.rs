//! Core geometry types: Point, Dimension, Bounds, Insets.
//!
//! These are the value types the whole toolkit is built on. They are `Copy`,
//! compared structurally, and never hold a negative extent: constructors panic
//! on a negative (or NaN) width/height/inset, and the `try_new` variants report
//! the same violation as [`Error::InvalidArgument`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Error, Result};

fn check_extent(name: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            name,
            reason: format!("must be zero or a positive number, got {value}"),
        })
    }
}

fn expect_extent(name: &'static str, value: f64) {
    assert!(value >= 0.0, "argument '{name}' must be zero or a positive number, got {value}");
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A position (or displacement) in logical pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f64) -> Point {
        Point { x: self.x / rhs, y: self.y / rhs }
    }
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// A non-negative 2D size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    /// A zero-sized dimension.
    pub const ZERO: Dimension = Dimension { width: 0.0, height: 0.0 };

    /// Create a new dimension.
    ///
    /// # Panics
    ///
    /// Panics if either extent is negative or NaN.
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        expect_extent("width", width);
        expect_extent("height", height);
        Self { width, height }
    }

    /// Create a new dimension, rejecting negative extents.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        Ok(Self { width, height })
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Dimension) -> Dimension {
        Dimension {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Whether both extents are at least those of `other`.
    #[inline]
    pub fn covers(self, other: Dimension) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// Convert to [`Bounds`] positioned at the origin.
    #[inline]
    pub const fn to_bounds(self) -> Bounds {
        Bounds { x: 0.0, y: 0.0, width: self.width, height: self.height }
    }
}

impl Add for Dimension {
    type Output = Dimension;
    #[inline]
    fn add(self, rhs: Dimension) -> Dimension {
        Dimension { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

/// Subtraction saturates at zero on each axis.
impl Sub for Dimension {
    type Output = Dimension;
    #[inline]
    fn sub(self, rhs: Dimension) -> Dimension {
        Dimension {
            width: (self.width - rhs.width).max(0.0),
            height: (self.height - rhs.height).max(0.0),
        }
    }
}

impl Mul<f64> for Dimension {
    type Output = Dimension;
    #[inline]
    fn mul(self, rhs: f64) -> Dimension {
        Dimension::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<f64> for Dimension {
    type Output = Dimension;
    #[inline]
    fn div(self, rhs: f64) -> Dimension {
        Dimension::new(self.width / rhs, self.height / rhs)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and a non-negative size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// An empty rectangle at the origin.
    pub const EMPTY: Bounds = Bounds { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create new bounds.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative or NaN.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        expect_extent("width", width);
        expect_extent("height", height);
        Self { x, y, width, height }
    }

    /// Create new bounds, rejecting negative extents.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        Ok(Self { x, y, width, height })
    }

    /// Build bounds from a location and a size.
    #[inline]
    pub const fn from_parts(location: Point, size: Dimension) -> Self {
        Self { x: location.x, y: location.y, width: size.width, height: size.height }
    }

    /// The right edge: `x + width`.
    #[inline]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// The bottom edge: `y + height`.
    #[inline]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn location(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// The size.
    #[inline]
    pub const fn size(self) -> Dimension {
        Dimension { width: self.width, height: self.height }
    }

    /// The four corners, clockwise from the top-left.
    pub fn points(self) -> [Point; 4] {
        [
            self.location(),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
        ]
    }

    /// Whether `point` lies inside, edges included.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        self.x <= point.x && point.x <= self.right() && self.y <= point.y && point.y <= self.bottom()
    }

    /// The overlapping rectangle, or `None` when the overlap has no area.
    pub fn intersection(self, other: Bounds) -> Option<Bounds> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 - x1 > 0.0 && y2 - y1 > 0.0 {
            Some(Bounds { x: x1, y: y1, width: x2 - x1, height: y2 - y1 })
        } else {
            None
        }
    }

    /// Same size, new location.
    #[inline]
    pub fn move_to(self, location: Point) -> Bounds {
        Bounds { x: location.x, y: location.y, ..self }
    }

    /// Same size, location shifted by `offset`.
    #[inline]
    pub fn move_by(self, offset: Point) -> Bounds {
        Bounds { x: self.x + offset.x, y: self.y + offset.y, ..self }
    }

    /// Same location, new size.
    #[inline]
    pub fn with_size(self, size: Dimension) -> Bounds {
        Bounds { width: size.width, height: size.height, ..self }
    }
}

/// Extend the rectangle so that it includes `point`.
impl Add<Point> for Bounds {
    type Output = Bounds;
    fn add(self, point: Point) -> Bounds {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        Bounds { x, y, width: right - x, height: bottom - y }
    }
}

/// The smallest rectangle containing both operands.
impl Add<Bounds> for Bounds {
    type Output = Bounds;
    fn add(self, other: Bounds) -> Bounds {
        other.points().into_iter().fold(self, |acc, p| acc + p)
    }
}

/// Grow outward by the insets.
impl Add<Insets> for Bounds {
    type Output = Bounds;
    #[inline]
    fn add(self, insets: Insets) -> Bounds {
        Bounds {
            x: self.x - insets.left,
            y: self.y - insets.top,
            width: self.width + insets.width(),
            height: self.height + insets.height(),
        }
    }
}

/// Shrink inward by the insets; the size is floored at zero.
impl Sub<Insets> for Bounds {
    type Output = Bounds;
    #[inline]
    fn sub(self, insets: Insets) -> Bounds {
        Bounds {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.width()).max(0.0),
            height: (self.height - insets.height()).max(0.0),
        }
    }
}

/// Scale the size, keeping the location.
impl Mul<f64> for Bounds {
    type Output = Bounds;
    #[inline]
    fn mul(self, rhs: f64) -> Bounds {
        Bounds::new(self.x, self.y, self.width * rhs, self.height * rhs)
    }
}

impl Div<f64> for Bounds {
    type Output = Bounds;
    #[inline]
    fn div(self, rhs: f64) -> Bounds {
        Bounds::new(self.x, self.y, self.width / rhs, self.height / rhs)
    }
}

// ---------------------------------------------------------------------------
// Insets
// ---------------------------------------------------------------------------

/// Non-negative spacing around the four sides of a rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Zero on all sides.
    pub const ZERO: Insets = Insets { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create insets with explicit values for each side.
    ///
    /// # Panics
    ///
    /// Panics if any side is negative or NaN.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        expect_extent("top", top);
        expect_extent("right", right);
        expect_extent("bottom", bottom);
        expect_extent("left", left);
        Self { top, right, bottom, left }
    }

    /// Create insets, rejecting negative sides.
    pub fn try_new(top: f64, right: f64, bottom: f64, left: f64) -> Result<Self> {
        check_extent("top", top)?;
        check_extent("right", right)?;
        check_extent("bottom", bottom)?;
        check_extent("left", left)?;
        Ok(Self { top, right, bottom, left })
    }

    /// All four sides set to the same value.
    pub fn all(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn width(self) -> f64 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn height(self) -> f64 {
        self.top + self.bottom
    }

    /// The space the insets occupy as a [`Dimension`].
    #[inline]
    pub fn size(self) -> Dimension {
        Dimension { width: self.width(), height: self.height() }
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Insets {
        Insets {
            top: f(self.top).max(0.0),
            right: f(self.right).max(0.0),
            bottom: f(self.bottom).max(0.0),
            left: f(self.left).max(0.0),
        }
    }
}

impl Add for Insets {
    type Output = Insets;
    #[inline]
    fn add(self, rhs: Insets) -> Insets {
        Insets {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

/// Side-wise subtraction, floored at zero.
impl Sub for Insets {
    type Output = Insets;
    #[inline]
    fn sub(self, rhs: Insets) -> Insets {
        Insets {
            top: (self.top - rhs.top).max(0.0),
            right: (self.right - rhs.right).max(0.0),
            bottom: (self.bottom - rhs.bottom).max(0.0),
            left: (self.left - rhs.left).max(0.0),
        }
    }
}

impl Add<f64> for Insets {
    type Output = Insets;
    #[inline]
    fn add(self, rhs: f64) -> Insets {
        self.map(|v| v + rhs)
    }
}

impl Sub<f64> for Insets {
    type Output = Insets;
    #[inline]
    fn sub(self, rhs: f64) -> Insets {
        self.map(|v| v - rhs)
    }
}

impl Mul<f64> for Insets {
    type Output = Insets;
    #[inline]
    fn mul(self, rhs: f64) -> Insets {
        Insets::new(self.top * rhs, self.right * rhs, self.bottom * rhs, self.left * rhs)
    }
}

impl Div<f64> for Insets {
    type Output = Insets;
    #[inline]
    fn div(self, rhs: f64) -> Insets {
        Insets::new(self.top / rhs, self.right / rhs, self.bottom / rhs, self.left / rhs)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
