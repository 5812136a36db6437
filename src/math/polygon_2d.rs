use super::{Point2, Vector2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Returns `0.0`
/// for fewer than 3 vertices.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Projects every vertex of a polygon onto an axis.
///
/// Returns the `(min, max)` interval of the projections. The axis does
/// not need to be normalized; intervals projected onto the same axis
/// scale together, which is all the separating-axis test requires.
#[must_use]
pub fn project_onto(polygon: &[Point2], axis: Vector2) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in polygon {
        let d = p.coords.dot(&axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Separating-axis overlap test between two polygons.
///
/// For every edge of both polygons (vertex lists are treated as cyclic),
/// both polygons are projected onto the edge normal `(dy, -dx)`; if the
/// projected intervals are disjoint on any axis, the polygons do not
/// overlap and the test short-circuits to `false`.
///
/// Exact for convex polygons. For concave inputs the test is
/// conservative: it can report an overlap where none exists, never the
/// reverse. An empty polygon never intersects anything.
#[must_use]
pub fn polygons_intersect(a: &[Point2], b: &[Point2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    for polygon in [a, b] {
        let n = polygon.len();
        for i in 0..n {
            let edge = polygon[(i + 1) % n] - polygon[i];
            let normal = Vector2::new(edge.y, -edge.x);

            let (min_a, max_a) = project_onto(a, normal);
            let (min_b, max_b) = project_onto(b, normal);
            if max_a < min_b || max_b < min_a {
                return false;
            }
        }
    }
    true
}
