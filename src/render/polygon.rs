//! Point-in-polygon classification and fill-seed search.
//!
//! Polygons are closed rings given as point slices whose last point repeats
//! the first. Edges are consecutive pairs plus the wrap-around pair from the
//! last point back to the first (a zero-length edge for a properly closed
//! ring, which never changes the crossing count).

use crate::config::SeedStrategy;
use crate::geometry::{BoundingBox, Point};

/// X coordinate of the far end of the point-in-polygon ray.
const RAY_EXTREME_X: i32 = i32::MAX;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// `p -> q -> r` turns clockwise (in y-down screen space).
    Clockwise,
    /// `p -> q -> r` turns counterclockwise.
    CounterClockwise,
}

/// Orientation of the triple `(p, q, r)`.
///
/// Sign of `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`, computed
/// in 128-bit arithmetic so far-away ray endpoints cannot overflow.
#[must_use]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let (px, py) = (i128::from(p.x), i128::from(p.y));
    let (qx, qy) = (i128::from(q.x), i128::from(q.y));
    let (rx, ry) = (i128::from(r.x), i128::from(r.y));
    let val = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    match val.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Whether `q` lies within the bounding box of `p` and `r`.
///
/// Only meaningful once [`orientation`] has established collinearity.
#[must_use]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segment `p1-q1` intersects segment `p2-q2`, touching included.
#[must_use]
pub fn intersects(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    use Orientation::Collinear;

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Collinear && on_segment(p1, p2, q1))
        || (o2 == Collinear && on_segment(p1, q2, q1))
        || (o3 == Collinear && on_segment(p2, p1, q2))
        || (o4 == Collinear && on_segment(p2, q1, q2))
}

/// Edges of the ring, including the closing edge from the last point back
/// to the first.
fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from `p` towards `+x` and counts the polygon edges
/// it meets. A point lying on an edge is reported as outside, so fill seeds
/// never start on the outline. Fewer than three points is never inside, and
/// neither is a point outside the bounding box.
///
/// A ray passing exactly through a vertex meets both edges sharing it; such
/// rows count the vertex twice.
#[must_use]
pub fn is_inside(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if !BoundingBox::of(polygon).is_some_and(|b| b.contains(p)) {
        return false;
    }

    let extreme = Point::new(RAY_EXTREME_X, p.y);
    let mut count = 0usize;
    for (a, b) in edges(polygon) {
        if intersects(a, b, p, extreme) {
            if orientation(a, p, b) == Orientation::Collinear && on_segment(a, p, b) {
                return false;
            }
            count += 1;
        }
    }
    count % 2 == 1
}

/// Candidate fill seeds for `polygon`, best first.
///
/// [`SeedStrategy::Midlines`] scans the horizontal midline of the bounding
/// box, then the vertical midline. For each interior point `(x, y)` found,
/// the candidate is `(x + 1, y + 1)`, nudged off a possible outline pixel.
///
/// [`SeedStrategy::Scanline`] keeps only the midline candidates that are
/// still inside after the nudge, then yields every interior point of every
/// row of the bounding box, unshifted. Rows through a vertex are skipped,
/// since [`is_inside`] counts such a vertex twice and can report an
/// exterior point as inside.
pub fn seed_candidates(
    polygon: &[Point],
    strategy: SeedStrategy,
) -> impl Iterator<Item = Point> + '_ {
    let bbox = BoundingBox::of(polygon);
    let trusted = move |p: &Point| {
        polygon.iter().all(|v| v.y != p.y) && is_inside(*p, polygon)
    };
    let midlines = midline_candidates(bbox, polygon)
        .filter(move |p| strategy == SeedStrategy::Midlines || trusted(p));
    let rows = bbox
        .filter(|_| strategy == SeedStrategy::Scanline)
        .into_iter()
        .flat_map(|b| {
            (b.min_y..b.max_y).flat_map(move |y| (b.min_x..b.max_x).map(move |x| Point::new(x, y)))
        })
        .filter(trusted);

    midlines.chain(rows)
}

fn midline_candidates(
    bbox: Option<BoundingBox>,
    polygon: &[Point],
) -> impl Iterator<Item = Point> + '_ {
    bbox.into_iter()
        .flat_map(|b| {
            let mid = b.center();
            let across = (b.min_x..b.max_x).map(move |x| Point::new(x, mid.y));
            let down = (b.min_y..b.max_y).map(move |y| Point::new(mid.x, y));
            across.chain(down)
        })
        .filter(move |p| is_inside(*p, polygon))
        .map(|p| p.offset(1, 1))
}

/// First seed candidate, or `None` if the search is exhausted.
///
/// With [`SeedStrategy::Midlines`] this can fail for strongly concave
/// shapes whose midlines miss the interior.
#[must_use]
pub fn find_seed(polygon: &[Point], strategy: SeedStrategy) -> Option<Point> {
    seed_candidates(polygon, strategy).next()
}
