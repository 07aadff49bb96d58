//! Geometric primitives for layout positioning.
//!
//! # Coordinate System
//!
//! Kith uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Positions produced by the layout engine are in this layout-local space;
//! a consumer applies its own zoom/pan transforms on top.

/// A 2D point in layout coordinate space.
///
/// Points use `f32` coordinates with origin at top-left and Y increasing
/// downward (see [module documentation](self)).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}
