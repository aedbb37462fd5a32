//! Core types for star geometry

/// A 2D point in unit-radius star space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, where every wedge apex sits
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of the vector from the origin, in radians (-π, π]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// One filled spoke of the star: a triangle with its apex at the center
///
/// Vertices are stored in drawing order: apex, then the counter-clockwise
/// edge end (`upper`), then the clockwise edge end (`lower`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub apex: Point,
    pub upper: Point,
    pub lower: Point,
}

impl Wedge {
    pub fn new(apex: Point, upper: Point, lower: Point) -> Self {
        Self { apex, upper, lower }
    }

    /// Vertices in drawing order
    pub fn vertices(&self) -> [Point; 3] {
        [self.apex, self.upper, self.lower]
    }

    /// X coordinates in drawing order
    pub fn xs(&self) -> [f64; 3] {
        [self.apex.x, self.upper.x, self.lower.x]
    }

    /// Y coordinates in drawing order
    pub fn ys(&self) -> [f64; 3] {
        [self.apex.y, self.upper.y, self.lower.y]
    }

    /// Direction of the wedge centerline, in radians
    pub fn direction(&self) -> f64 {
        let mid = Point::new(
            (self.upper.x + self.lower.x) / 2.0,
            (self.upper.y + self.lower.y) / 2.0,
        );
        Point::new(mid.x - self.apex.x, mid.y - self.apex.y).angle()
    }

    /// Largest vertex-to-vertex distance against another wedge
    pub fn max_deviation(&self, other: &Wedge) -> f64 {
        self.vertices()
            .iter()
            .zip(other.vertices().iter())
            .map(|(a, b)| a.distance(*b))
            .fold(0.0, f64::max)
    }
}
