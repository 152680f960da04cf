use crate::Point;

/// Minimum |area| below which a vertex triple counts as degenerate.
const MIN_AREA: f64 = 1e-6;
/// Circumcenter farther than this from the centroid means a very obtuse or
/// near-degenerate shape; recenter on the centroid to keep it in view.
const MAX_CIRCUMCENTER_DIST: f64 = 50.0;

#[inline]
fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Triangle from two sides and the included angle at vertex 0.
///
/// Vertex 0 at the origin, vertex 1 at `(side_a, 0)`, vertex 2 on the ray at
/// `included_angle_deg` with length `side_b`. Returns the recentered triple,
/// or `None` when the inputs are degenerate. A right triangle is the
/// `included_angle_deg = 90` case: side 0 and side 2 are the legs, side 1
/// the hypotenuse.
pub fn construct_sas(side_a: f64, included_angle_deg: f64, side_b: f64) -> Option<[Point; 3]> {
    if !(side_a.is_finite() && side_b.is_finite() && included_angle_deg.is_finite()) {
        return None;
    }
    if side_a <= 0.0 || side_b <= 0.0 {
        return None;
    }
    if included_angle_deg <= 0.0 || included_angle_deg >= 180.0 {
        return None;
    }
    let rad = deg_to_rad(included_angle_deg);
    let p0 = Point::zeros();
    let p1 = Point::new(side_a, 0.0);
    let p2 = Point::new(side_b * rad.cos(), side_b * rad.sin());
    finish([p0, p1, p2])
}

/// Triangle from two angles and the included side (side 0, on the x-axis).
///
/// The apex is the intersection of the ray leaving vertex 0 at `angle_a_deg`
/// with the ray leaving vertex 1 at `180 - angle_b_deg`, solved via slopes.
pub fn construct_asa(angle_a_deg: f64, included_side: f64, angle_b_deg: f64) -> Option<[Point; 3]> {
    if !(angle_a_deg.is_finite() && angle_b_deg.is_finite() && included_side.is_finite()) {
        return None;
    }
    if included_side <= 0.0 {
        return None;
    }
    if angle_a_deg <= 0.0 || angle_b_deg <= 0.0 || angle_a_deg + angle_b_deg >= 180.0 {
        return None;
    }
    let p0 = Point::zeros();
    let p1 = Point::new(included_side, 0.0);
    let t1 = deg_to_rad(angle_a_deg).tan();
    let t2 = deg_to_rad(180.0 - angle_b_deg).tan();
    // Rays y = t1*x and y = t2*(x - side) meet where (t2 - t1)*x = t2*side.
    if (t2 - t1).abs() < 1e-9 {
        return None; // near-parallel rays
    }
    let x = t2 * included_side / (t2 - t1);
    let y = t1 * x;
    finish([p0, p1, Point::new(x, y)])
}

/// Reject degenerate triples, then recenter about the circumcenter with the
/// centroid as fallback.
fn finish(points: [Point; 3]) -> Option<[Point; 3]> {
    if super::measure::area(&points).abs() < MIN_AREA {
        return None;
    }
    let centroid = (points[0] + points[1] + points[2]) / 3.0;
    let center = match circumcenter(&points) {
        Some(c) if (c - centroid).norm() <= MAX_CIRCUMCENTER_DIST => c,
        _ => centroid,
    };
    Some([points[0] - center, points[1] - center, points[2] - center])
}

/// Circumcenter in the determinant form; `None` near collinearity.
fn circumcenter(p: &[Point; 3]) -> Option<Point> {
    let d = 2.0
        * (p[0].x * (p[1].y - p[2].y) + p[1].x * (p[2].y - p[0].y) + p[2].x * (p[0].y - p[1].y));
    if d.abs() < 1e-3 {
        return None;
    }
    let sq = |v: Point| v.x * v.x + v.y * v.y;
    let ux = (sq(p[0]) * (p[1].y - p[2].y)
        + sq(p[1]) * (p[2].y - p[0].y)
        + sq(p[2]) * (p[0].y - p[1].y))
        / d;
    let uy = (sq(p[0]) * (p[2].x - p[1].x)
        + sq(p[1]) * (p[0].x - p[2].x)
        + sq(p[2]) * (p[1].x - p[0].x))
        / d;
    Some(Point::new(ux, uy))
}
