//! Siemens star construction.
//!
//! A star with `n` spokes splits the circle into `2n` equal sectors of
//! angle θ = π/n and fills every other one. The first wedge has its apex at
//! the origin and is symmetric about the X axis; each following wedge is the
//! first one rotated by a multiple of 2θ.

use std::f64::consts::PI;
use std::fmt;

use tracing::debug;

use crate::error::StarError;

use super::transform::RotationMatrix;
use super::types::{Point, Wedge};

/// Number of spokes, validated to be at least two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpokeCount(usize);

impl SpokeCount {
    /// Spoke count used when none is given
    pub const DEFAULT: SpokeCount = SpokeCount(20);

    /// Smallest accepted spoke count
    pub const MIN: usize = 2;

    /// Validate a raw spoke count
    pub fn new(n: i64) -> Result<Self, StarError> {
        match usize::try_from(n) {
            Ok(count) if count >= Self::MIN => Ok(Self(count)),
            _ => Err(StarError::invalid_argument(n)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SpokeCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for SpokeCount {
    type Error = StarError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for SpokeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How successive wedges are derived from the first one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WedgeStrategy {
    /// Rotate the first wedge by `k * 2θ`, computed per wedge
    #[default]
    Direct,
    /// Rotate the previous wedge by a fixed `2θ` step
    Accumulated,
}

/// Analytic description of a star in unit-radius space
#[derive(Debug, Clone, PartialEq)]
pub struct StarGeometry {
    spokes: SpokeCount,
    /// Angle spanned by one wedge (and by one gap)
    theta: f64,
    first: Wedge,
    step: RotationMatrix,
}

impl StarGeometry {
    /// Derive the wedge primitive and step rotation for `spokes`
    pub fn compute(spokes: SpokeCount) -> Self {
        let theta = PI / spokes.get() as f64;
        let (half_sin, half_cos) = (theta / 2.0).sin_cos();

        let first = Wedge::new(
            Point::origin(),
            Point::new(half_cos, half_sin),
            Point::new(half_cos, -half_sin),
        );
        let step = RotationMatrix::new(2.0 * theta);

        debug!(spokes = spokes.get(), theta, "computed star geometry");

        Self {
            spokes,
            theta,
            first,
            step,
        }
    }

    pub fn spokes(&self) -> SpokeCount {
        self.spokes
    }

    /// Angular width of a single wedge, in radians
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Rotation between consecutive wedges, in radians
    pub fn step_angle(&self) -> f64 {
        2.0 * self.theta
    }

    pub fn first_wedge(&self) -> Wedge {
        self.first
    }

    /// The fixed rotation applied between consecutive wedges
    pub fn step_matrix(&self) -> RotationMatrix {
        self.step
    }

    /// The `index`-th wedge (zero-based), rotated directly from the first
    pub fn wedge(&self, index: usize) -> Wedge {
        if index == 0 {
            return self.first;
        }
        RotationMatrix::new(index as f64 * self.step_angle()).transform_wedge(&self.first)
    }

    /// All wedges in emission order, generated lazily
    pub fn wedges(&self, strategy: WedgeStrategy) -> Wedges<'_> {
        Wedges {
            star: self,
            strategy,
            index: 0,
            current: self.first,
        }
    }
}

/// Iterator over the wedges of a star
#[derive(Debug, Clone)]
pub struct Wedges<'a> {
    star: &'a StarGeometry,
    strategy: WedgeStrategy,
    index: usize,
    /// Last wedge yielded, or the first wedge before iteration starts
    current: Wedge,
}

impl Iterator for Wedges<'_> {
    type Item = Wedge;

    fn next(&mut self) -> Option<Wedge> {
        if self.index >= self.star.spokes.get() {
            return None;
        }
        let wedge = match (self.strategy, self.index) {
            (_, 0) => self.star.first,
            (WedgeStrategy::Direct, k) => self.star.wedge(k),
            (WedgeStrategy::Accumulated, _) => self.star.step.transform_wedge(&self.current),
        };
        self.current = wedge;
        self.index += 1;
        Some(wedge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.star.spokes.get() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Wedges<'_> {}
