use crate::geometry::anchor::Anchor;
use crate::geometry::rect::Rect;
use crate::math::{Point2, Vector2, TOLERANCE};

/// One cubic Bezier span between two neighboring anchors.
///
/// Control points are absolute: `ctrl1` is the start anchor's position
/// plus its outgoing handle, `ctrl2` the end anchor's position plus its
/// incoming handle. An anchor without the relevant handle contributes a
/// zero offset, so a span between two handle-less anchors degenerates
/// to the straight chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Start point.
    pub from: Point2,
    /// First control point.
    pub ctrl1: Point2,
    /// Second control point.
    pub ctrl2: Point2,
    /// End point.
    pub to: Point2,
}

impl CubicSegment {
    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let c0 = u * u * u;
        let c1 = 3.0 * u * u * t;
        let c2 = 3.0 * u * t * t;
        let c3 = t * t * t;
        Point2::new(
            c0 * self.from.x + c1 * self.ctrl1.x + c2 * self.ctrl2.x + c3 * self.to.x,
            c0 * self.from.y + c1 * self.ctrl1.y + c2 * self.ctrl2.y + c3 * self.to.y,
        )
    }

    /// Returns true when both control points sit on their endpoints, so
    /// the span is a straight line.
    #[must_use]
    pub fn is_line(&self) -> bool {
        (self.ctrl1 - self.from).norm() < TOLERANCE && (self.ctrl2 - self.to).norm() < TOLERANCE
    }
}

/// An ordered run of anchors forming an open or closed Bezier path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    /// Anchors in traversal order.
    pub anchors: Vec<Anchor>,
    /// Whether a closing segment joins the last anchor back to the first.
    pub closed: bool,
}

impl Path {
    /// Creates an empty open path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from existing anchors.
    #[must_use]
    pub fn from_anchors(anchors: Vec<Anchor>, closed: bool) -> Self {
        Self { anchors, closed }
    }

    /// Inserts an anchor at `index`, or appends when `index` is `None`.
    ///
    /// An out-of-range index is clamped to the end rather than rejected,
    /// so repeated inserts from stale indices still build a valid path.
    pub fn insert_anchor(&mut self, anchor: Anchor, index: Option<usize>) {
        let at = index.unwrap_or(self.anchors.len()).min(self.anchors.len());
        self.anchors.insert(at, anchor);
    }

    /// Number of Bezier segments the path traverses.
    ///
    /// A closed path has as many segments as anchors; an open path has
    /// one fewer. Paths with fewer than two anchors have none.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.anchors.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates the path's cubic segments in order.
    ///
    /// Segment `i` runs from anchor `i` to anchor `i + 1`; on a closed
    /// path the final segment wraps back to anchor `0`. Missing handles
    /// are treated as zero offsets.
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        let n = self.anchors.len();
        (0..self.segment_count()).map(move |i| {
            let start = &self.anchors[i];
            let end = &self.anchors[(i + 1) % n];
            let out = start.out_handle().unwrap_or_else(Vector2::zeros);
            let inh = end.in_handle().unwrap_or_else(Vector2::zeros);
            CubicSegment {
                from: start.position,
                ctrl1: start.position + out,
                ctrl2: end.position + inh,
                to: end.position,
            }
        })
    }

    /// Returns the path traversed in the opposite direction.
    ///
    /// Anchor order is reversed and each anchor's handles are swapped,
    /// so the reversed path draws the same curve backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            anchors: self.anchors.iter().rev().map(Anchor::reversed).collect(),
            closed: self.closed,
        }
    }

    /// Approximates the path with a polyline whose chords deviate from
    /// the true curve by no more than `tolerance`.
    ///
    /// Straight segments contribute their endpoints only; curved ones
    /// are subdivided uniformly in parameter space. Returns an empty
    /// vector for paths with no segments.
    #[must_use]
    pub fn flattened(&self, tolerance: f64) -> Vec<Point2> {
        let mut points = Vec::new();
        for (i, segment) in self.segments().enumerate() {
            if i == 0 {
                points.push(segment.from);
            }
            if segment.is_line() {
                points.push(segment.to);
            } else {
                let n_sub = cubic_subdivision_count(&segment, tolerance);
                for j in 1..n_sub {
                    let t = f64::from(j) / f64::from(n_sub);
                    points.push(segment.point_at(t));
                }
                points.push(segment.to);
            }
        }
        points
    }

    /// Axis-aligned bounding box over anchor positions and handle tips,
    /// or `None` for an empty path.
    ///
    /// Handle tips bound the curve conservatively (the convex hull
    /// property), so the box never clips it.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = Vec::with_capacity(self.anchors.len() * 3);
        for anchor in &self.anchors {
            points.push(anchor.position);
            if let Some(h) = anchor.in_handle() {
                points.push(anchor.position + h);
            }
            if let Some(h) = anchor.out_handle() {
                points.push(anchor.position + h);
            }
        }
        Rect::from_points(&points)
    }
}

/// Uniform subdivision count for one curved segment.
///
/// The chord error of an `n`-piece uniform subdivision is bounded by
/// `3 * d / (4 * n^2)` where `d` is the largest second difference of
/// the control polygon, which gives `n = ceil(sqrt(0.75 * d / tol))`.
fn cubic_subdivision_count(segment: &CubicSegment, tolerance: f64) -> u32 {
    let d1 = segment.from.coords - 2.0 * segment.ctrl1.coords + segment.ctrl2.coords;
    let d2 = segment.ctrl1.coords - 2.0 * segment.ctrl2.coords + segment.to.coords;
    let deviation = d1.norm().max(d2.norm());
    if deviation < TOLERANCE || tolerance <= 0.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (0.75 * deviation / tolerance).sqrt().ceil() as u32;
    n.max(1)
}
