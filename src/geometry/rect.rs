use crate::math::polygon_2d::polygons_intersect;
use crate::math::transform_2d::transform_point;
use crate::math::{Matrix3, Point2};

/// An axis-aligned rectangle: origin plus extent.
///
/// Width and height are non-negative by convention; the geometry
/// predicates do not validate this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Computes the axis-aligned bounding box of a point set.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Inclusive containment test against all four edges.
    #[must_use]
    pub fn contains_point(&self, point: Point2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Returns the four corners in fixed winding order: top-left,
    /// top-right, bottom-right, bottom-left (screen convention, y down).
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.x + self.width, self.y),
            Point2::new(self.x + self.width, self.y + self.height),
            Point2::new(self.x, self.y + self.height),
        ]
    }

    /// Returns the four corners mapped through a transform, preserving
    /// the winding order of [`Rect::corners`].
    #[must_use]
    pub fn transformed_corners(&self, transform: &Matrix3) -> [Point2; 4] {
        self.corners().map(|c| transform_point(transform, c))
    }

    /// Cover test: whether this rectangle overlaps `target` after
    /// `target` is mapped through `target_transform`.
    ///
    /// This is the selection-marquee test: an axis-aligned selection
    /// rectangle against a node's bounding box under the node transform.
    #[must_use]
    pub fn intersects_transformed(&self, target: &Rect, target_transform: &Matrix3) -> bool {
        polygons_intersect(
            &self.corners(),
            &target.transformed_corners(target_transform),
        )
    }
}
