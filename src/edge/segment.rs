//! Edge segment kernel: linear, quadratic and cubic Bézier segments sharing
//! one capability set (§4.2).

use crate::color::EdgeColor;
use crate::distance::SignedDistance;
use crate::geometry::{solve_cubic, solve_quadratic, Vector2};

const ENDPOINT_TOLERANCE: f64 = 1e-4;

/// Axis-aligned bounding box, accumulated via `expand`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl Bounds {
    pub fn from_point(p: Vector2) -> Self {
        Bounds { min: p, max: p }
    }

    pub fn expand(&mut self, p: Vector2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(self, other: Bounds) -> Bounds {
        let mut b = self;
        b.expand(other.min);
        b.expand(other.max);
        b
    }
}

/// One intersection of an edge with a horizontal scanline at `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanlineIntersection {
    pub x: f64,
    /// Sign of dy/dt at the crossing; 0 for a tangent grazing (filtered by
    /// the caller, see `Scanline`).
    pub direction: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSegment {
    pub p0: Vector2,
    pub p1: Vector2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSegment {
    pub p0: Vector2,
    pub p1: Vector2,
    pub p2: Vector2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Vector2,
    pub p1: Vector2,
    pub p2: Vector2,
    pub p3: Vector2,
}

/// A tagged variant over the three supported Bézier degrees. Every variant
/// carries an edge color; dispatch is total (§9: no "unknown" case).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeSegment {
    Linear(LinearSegment, EdgeColor),
    Quadratic(QuadraticSegment, EdgeColor),
    Cubic(CubicSegment, EdgeColor),
}

impl EdgeSegment {
    pub fn linear(p0: Vector2, p1: Vector2, color: EdgeColor) -> Self {
        EdgeSegment::Linear(LinearSegment { p0, p1 }, color)
    }

    pub fn quadratic(p0: Vector2, p1: Vector2, p2: Vector2, color: EdgeColor) -> Self {
        EdgeSegment::Quadratic(QuadraticSegment { p0, p1, p2 }, color)
    }

    pub fn cubic(p0: Vector2, p1: Vector2, p2: Vector2, p3: Vector2, color: EdgeColor) -> Self {
        EdgeSegment::Cubic(CubicSegment { p0, p1, p2, p3 }, color)
    }

    pub fn color(&self) -> EdgeColor {
        match self {
            EdgeSegment::Linear(_, c) => *c,
            EdgeSegment::Quadratic(_, c) => *c,
            EdgeSegment::Cubic(_, c) => *c,
        }
    }

    pub fn set_color(&mut self, color: EdgeColor) {
        match self {
            EdgeSegment::Linear(_, c) => *c = color,
            EdgeSegment::Quadratic(_, c) => *c = color,
            EdgeSegment::Cubic(_, c) => *c = color,
        }
    }

    pub fn start_point(&self) -> Vector2 {
        match self {
            EdgeSegment::Linear(s, _) => s.p0,
            EdgeSegment::Quadratic(s, _) => s.p0,
            EdgeSegment::Cubic(s, _) => s.p0,
        }
    }

    pub fn end_point(&self) -> Vector2 {
        match self {
            EdgeSegment::Linear(s, _) => s.p1,
            EdgeSegment::Quadratic(s, _) => s.p2,
            EdgeSegment::Cubic(s, _) => s.p3,
        }
    }

    pub fn set_start_point(&mut self, p: Vector2) {
        match self {
            EdgeSegment::Linear(s, _) => s.p0 = p,
            EdgeSegment::Quadratic(s, _) => s.p0 = p,
            EdgeSegment::Cubic(s, _) => s.p0 = p,
        }
    }

    pub fn set_end_point(&mut self, p: Vector2) {
        match self {
            EdgeSegment::Linear(s, _) => s.p1 = p,
            EdgeSegment::Quadratic(s, _) => s.p2 = p,
            EdgeSegment::Cubic(s, _) => s.p3 = p,
        }
    }

    /// Evaluate the curve at `t`. `point(0) == start_point()`,
    /// `point(1) == end_point()`.
    pub fn point(&self, t: f64) -> Vector2 {
        match self {
            EdgeSegment::Linear(s, _) => s.p0 + (s.p1 - s.p0) * t,
            EdgeSegment::Quadratic(s, _) => {
                let a = s.p0 + (s.p1 - s.p0) * t;
                let b = s.p1 + (s.p2 - s.p1) * t;
                a + (b - a) * t
            }
            EdgeSegment::Cubic(s, _) => {
                let ab = s.p0 + (s.p1 - s.p0) * t;
                let bc = s.p1 + (s.p2 - s.p1) * t;
                let cd = s.p2 + (s.p3 - s.p2) * t;
                let abc = ab + (bc - ab) * t;
                let bcd = bc + (cd - bc) * t;
                abc + (bcd - abc) * t
            }
        }
    }

    /// First derivative at `t`, with the collinear-control-point fallback
    /// from §4.2 when the raw derivative vanishes at an endpoint.
    pub fn direction(&self, t: f64) -> Vector2 {
        match self {
            EdgeSegment::Linear(s, _) => s.p1 - s.p0,
            EdgeSegment::Quadratic(s, _) => {
                let d = (s.p1 - s.p0) * (1.0 - t) + (s.p2 - s.p1) * t;
                if d.is_zero() {
                    s.p2 - s.p0
                } else {
                    d
                }
            }
            EdgeSegment::Cubic(s, _) => {
                let d = (s.p1 - s.p0) * (1.0 - t) * (1.0 - t)
                    + (s.p2 - s.p1) * 2.0 * (1.0 - t) * t
                    + (s.p3 - s.p2) * t * t;
                if d.is_zero() {
                    if t == 0.0 {
                        s.p2 - s.p0
                    } else if t == 1.0 {
                        s.p3 - s.p1
                    } else {
                        d
                    }
                } else {
                    d
                }
            }
        }
    }

    /// Second derivative (rate of change of direction) at `t`.
    pub fn direction_change(&self, t: f64) -> Vector2 {
        match self {
            EdgeSegment::Linear(_, _) => Vector2::ZERO,
            EdgeSegment::Quadratic(s, _) => (s.p2 - s.p1) - (s.p1 - s.p0),
            EdgeSegment::Cubic(s, _) => {
                ((s.p2 - s.p1) - (s.p1 - s.p0)) * (1.0 - t) * 2.0
                    + ((s.p3 - s.p2) - (s.p2 - s.p1)) * t * 2.0
            }
        }
    }

    /// Nearest point on the curve to `p`: returns the winning signed
    /// distance and the parameter `t` (not clamped to [0,1]) at which it
    /// occurs.
    pub fn signed_distance(&self, p: Vector2) -> (SignedDistance, f64) {
        match self {
            EdgeSegment::Linear(s, _) => linear_signed_distance(s, p),
            EdgeSegment::Quadratic(s, _) => quadratic_signed_distance(s, p),
            EdgeSegment::Cubic(s, _) => cubic_signed_distance(s, p),
        }
    }

    /// Replace an endpoint-derived distance with the signed perpendicular
    /// distance to the tangent line at that endpoint, when it is smaller in
    /// magnitude (§4.2 perpendicularDistance). Linear segments are
    /// unaffected since their endpoint distance already is that value.
    pub fn perpendicular_distance(&self, d: SignedDistance, p: Vector2, t: f64) -> SignedDistance {
        if matches!(self, EdgeSegment::Linear(..)) {
            return d;
        }
        if t < ENDPOINT_TOLERANCE {
            let tangent = self.direction(0.0).normalize(false);
            let q = p - self.start_point();
            let perp = tangent.cross(q);
            if perp.abs() < d.distance.abs() {
                return SignedDistance::new(perp, 0.0);
            }
        } else if t > 1.0 - ENDPOINT_TOLERANCE {
            let tangent = self.direction(1.0).normalize(false);
            let q = p - self.end_point();
            let perp = tangent.cross(q);
            if perp.abs() < d.distance.abs() {
                return SignedDistance::new(perp, 0.0);
            }
        }
        d
    }

    /// Every `t` in `[0,1]` where `point(t).y == y`, with the crossing's `x`
    /// and winding direction. Tangent grazings get direction 0.
    pub fn scanline_intersections(&self, y: f64) -> Vec<ScanlineIntersection> {
        match self {
            EdgeSegment::Linear(s, _) => linear_scanline(s, y),
            EdgeSegment::Quadratic(s, _) => quadratic_scanline(s, y),
            EdgeSegment::Cubic(s, _) => cubic_scanline(s, y),
        }
    }

    /// Axis-aligned bounding box from endpoints extended by real extrema.
    pub fn bound(&self) -> Bounds {
        let mut b = Bounds::from_point(self.start_point());
        b.expand(self.end_point());
        match self {
            EdgeSegment::Linear(..) => {}
            EdgeSegment::Quadratic(s, _) => {
                for axis_t in extrema_quadratic(s.p0.x, s.p1.x, s.p2.x) {
                    b.expand(self.point(axis_t));
                }
                for axis_t in extrema_quadratic(s.p0.y, s.p1.y, s.p2.y) {
                    b.expand(self.point(axis_t));
                }
            }
            EdgeSegment::Cubic(s, _) => {
                for axis_t in extrema_cubic(s.p0.x, s.p1.x, s.p2.x, s.p3.x) {
                    b.expand(self.point(axis_t));
                }
                for axis_t in extrema_cubic(s.p0.y, s.p1.y, s.p2.y, s.p3.y) {
                    b.expand(self.point(axis_t));
                }
            }
        }
        b
    }

    /// Reverse the segment's parameterization (`point(t)` becomes
    /// `point(1-t)`); negates winding when applied to every edge of a
    /// contour.
    pub fn reverse(&self) -> EdgeSegment {
        match self {
            EdgeSegment::Linear(s, c) => EdgeSegment::linear(s.p1, s.p0, *c),
            EdgeSegment::Quadratic(s, c) => EdgeSegment::quadratic(s.p2, s.p1, s.p0, *c),
            EdgeSegment::Cubic(s, c) => EdgeSegment::cubic(s.p3, s.p2, s.p1, s.p0, *c),
        }
    }

    /// Split into three segments whose concatenation reproduces the
    /// original, via de Casteljau subdivision at t=1/3 and t=2/3.
    pub fn split_in_thirds(&self) -> [EdgeSegment; 3] {
        match self {
            EdgeSegment::Linear(s, c) => {
                let a = s.p0 + (s.p1 - s.p0) * (1.0 / 3.0);
                let b = s.p0 + (s.p1 - s.p0) * (2.0 / 3.0);
                [
                    EdgeSegment::linear(s.p0, a, *c),
                    EdgeSegment::linear(a, b, *c),
                    EdgeSegment::linear(b, s.p1, *c),
                ]
            }
            EdgeSegment::Quadratic(s, c) => {
                let (left, right) = subdivide_quadratic([s.p0, s.p1, s.p2], 1.0 / 3.0);
                // `right` spans original t in [1/3, 1]; split it again at the
                // point corresponding to original t = 2/3.
                let (mid, tail) = subdivide_quadratic(right, 0.5);
                [
                    EdgeSegment::quadratic(left[0], left[1], left[2], *c),
                    EdgeSegment::quadratic(mid[0], mid[1], mid[2], *c),
                    EdgeSegment::quadratic(tail[0], tail[1], tail[2], *c),
                ]
            }
            EdgeSegment::Cubic(s, c) => {
                let (left, right) = subdivide_cubic([s.p0, s.p1, s.p2, s.p3], 1.0 / 3.0);
                let (mid, tail) = subdivide_cubic(right, 0.5);
                [
                    EdgeSegment::cubic(left[0], left[1], left[2], left[3], *c),
                    EdgeSegment::cubic(mid[0], mid[1], mid[2], mid[3], *c),
                    EdgeSegment::cubic(tail[0], tail[1], tail[2], tail[3], *c),
                ]
            }
        }
    }
}

/// de Casteljau subdivision of a quadratic at parameter `t`; returns the
/// control points of the `[0,t]` and `[t,1]` sub-curves.
fn subdivide_quadratic(p: [Vector2; 3], t: f64) -> ([Vector2; 3], [Vector2; 3]) {
    let p01 = p[0] + (p[1] - p[0]) * t;
    let p12 = p[1] + (p[2] - p[1]) * t;
    let p012 = p01 + (p12 - p01) * t;
    ([p[0], p01, p012], [p012, p12, p[2]])
}

/// de Casteljau subdivision of a cubic at parameter `t`; returns the control
/// points of the `[0,t]` and `[t,1]` sub-curves.
fn subdivide_cubic(p: [Vector2; 4], t: f64) -> ([Vector2; 4], [Vector2; 4]) {
    let p01 = p[0] + (p[1] - p[0]) * t;
    let p12 = p[1] + (p[2] - p[1]) * t;
    let p23 = p[2] + (p[3] - p[2]) * t;
    let p012 = p01 + (p12 - p01) * t;
    let p123 = p12 + (p23 - p12) * t;
    let p0123 = p012 + (p123 - p012) * t;
    ([p[0], p01, p012, p0123], [p0123, p123, p23, p[3]])
}

fn extrema_quadratic(p0: f64, p1: f64, p2: f64) -> Vec<f64> {
    // Derivative: 2(1-t)(p1-p0) + 2t(p2-p1) = 0
    let denom = p0 - 2.0 * p1 + p2;
    if denom == 0.0 {
        return Vec::new();
    }
    let t = (p0 - p1) / denom;
    if t > 0.0 && t < 1.0 {
        vec![t]
    } else {
        Vec::new()
    }
}

fn extrema_cubic(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
    // Derivative of cubic Bezier is a quadratic in t.
    let a = 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3);
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);
    solve_quadratic(a, b, c)
        .into_iter()
        .filter(|&t| t > 0.0 && t < 1.0)
        .collect()
}

fn linear_signed_distance(s: &LinearSegment, p: Vector2) -> (SignedDistance, f64) {
    let aq = p - s.p0;
    let ab = s.p1 - s.p0;
    let denom = ab.squared_length();
    let t = if denom > 0.0 { aq.dot(ab) / denom } else { 0.0 };

    if t > 0.0 && t < 1.0 {
        // Interior: signed perpendicular distance to the line. Use the
        // left-hand orthogonal so this agrees with the +cross(dir, q)
        // convention the endpoint/quadratic/cubic branches use.
        let ortho = ab.orthogonal(true).normalize(false);
        let distance = ortho.dot(aq);
        return (SignedDistance::new(distance, 0.0), t);
    }

    let endpoint = if t > 0.0 { s.p1 } else { s.p0 };
    let to_endpoint = p - endpoint;
    let endpoint_distance = to_endpoint.length();
    let dir = ab.normalize(false);
    let sign = dir.cross(to_endpoint).signum();
    let sign = if sign == 0.0 { 1.0 } else { sign };
    let dot = if to_endpoint.length() > 0.0 {
        dir.dot(to_endpoint.normalize(false)).abs()
    } else {
        0.0
    };
    (SignedDistance::new(sign * endpoint_distance, dot), t)
}

fn quadratic_signed_distance(s: &QuadraticSegment, p: Vector2) -> (SignedDistance, f64) {
    let qa = s.p0 - p;
    let ab = s.p1 - s.p0;
    let br = s.p2 - s.p1 - ab;

    // d|Q(t)-p|^2/dt = 0 expanded into a cubic in t.
    let a = br.dot(br);
    let b = 3.0 * ab.dot(br);
    let c = 2.0 * ab.dot(ab) + qa.dot(br);
    let d = qa.dot(ab);

    let mut candidates: Vec<f64> = solve_cubic(a, b, c, d);
    candidates.push(0.0);
    candidates.push(1.0);

    let mut best: Option<(SignedDistance, f64)> = None;
    for t in candidates {
        let tc = t.clamp(0.0, 1.0);
        let point = {
            let a1 = s.p0 + (s.p1 - s.p0) * tc;
            let b1 = s.p1 + (s.p2 - s.p1) * tc;
            a1 + (b1 - a1) * tc
        };
        let q = p - point;
        let dist = q.length();
        let dir = {
            let raw = ab * (1.0 - tc) + (s.p2 - s.p1) * tc;
            if raw.is_zero() {
                s.p2 - s.p0
            } else {
                raw
            }
        }
        .normalize(false);

        let sd = if tc > 0.0 && tc < 1.0 {
            SignedDistance::new(dir.cross(q).signum() * dist, 0.0)
        } else {
            let sign = dir.cross(q).signum();
            let sign = if sign == 0.0 { 1.0 } else { sign };
            let dot = if dist > 0.0 {
                dir.dot(q.normalize(false)).abs()
            } else {
                0.0
            };
            SignedDistance::new(sign * dist, dot)
        };

        if best.map(|(b, _)| sd < b).unwrap_or(true) {
            best = Some((sd, tc));
        }
    }
    best.unwrap()
}

fn cubic_signed_distance(s: &CubicSegment, p: Vector2) -> (SignedDistance, f64) {
    let seg = EdgeSegment::Cubic(*s, EdgeColor::WHITE);
    let mut best: Option<(SignedDistance, f64)> = None;

    let seeds = [0.0, 0.25, 0.5, 0.75, 1.0];
    for &seed in &seeds {
        let mut t = seed;
        for _ in 0..4 {
            let qt = seg.point(t) - p;
            let d1 = seg.direction(t);
            let d2 = seg.direction_change(t);
            let denom = d1.dot(d1) + qt.dot(d2);
            if denom == 0.0 {
                break;
            }
            let step = qt.dot(d1) / denom;
            let new_t = t - step;
            if !(0.0..=1.0).contains(&new_t) {
                break;
            }
            t = new_t;
        }

        let tc = t.clamp(0.0, 1.0);
        let point = seg.point(tc);
        let q = p - point;
        let dist = q.length();
        let dir = seg.direction(tc).normalize(false);

        let sd = if tc > 0.0 && tc < 1.0 {
            SignedDistance::new(dir.cross(q).signum() * dist, 0.0)
        } else {
            let sign = dir.cross(q).signum();
            let sign = if sign == 0.0 { 1.0 } else { sign };
            let dot = if dist > 0.0 {
                dir.dot(q.normalize(false)).abs()
            } else {
                0.0
            };
            SignedDistance::new(sign * dist, dot)
        };

        if best.map(|(b, _)| sd < b).unwrap_or(true) {
            best = Some((sd, tc));
        }
    }
    best.unwrap()
}

fn linear_scanline(s: &LinearSegment, y: f64) -> Vec<ScanlineIntersection> {
    let dy = s.p1.y - s.p0.y;
    if dy == 0.0 {
        return Vec::new();
    }
    let t = (y - s.p0.y) / dy;
    if !(0.0..=1.0).contains(&t) {
        return Vec::new();
    }
    let x = s.p0.x + (s.p1.x - s.p0.x) * t;
    vec![ScanlineIntersection {
        x,
        direction: dy.signum() as i32,
    }]
}

fn quadratic_scanline(s: &QuadraticSegment, y: f64) -> Vec<ScanlineIntersection> {
    let a = s.p0.y - 2.0 * s.p1.y + s.p2.y;
    let b = 2.0 * (s.p1.y - s.p0.y);
    let c = s.p0.y - y;
    let mut out = Vec::new();
    for t in solve_quadratic(a, b, c) {
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let dy = 2.0 * (1.0 - t) * (s.p1.y - s.p0.y) + 2.0 * t * (s.p2.y - s.p1.y);
        if dy == 0.0 {
            continue;
        }
        let x = (1.0 - t) * (1.0 - t) * s.p0.x
            + 2.0 * (1.0 - t) * t * s.p1.x
            + t * t * s.p2.x;
        out.push(ScanlineIntersection {
            x,
            direction: dy.signum() as i32,
        });
    }
    out
}

fn cubic_scanline(s: &CubicSegment, y: f64) -> Vec<ScanlineIntersection> {
    let a = -s.p0.y + 3.0 * s.p1.y - 3.0 * s.p2.y + s.p3.y;
    let b = 3.0 * s.p0.y - 6.0 * s.p1.y + 3.0 * s.p2.y;
    let c = -3.0 * s.p0.y + 3.0 * s.p1.y;
    let d = s.p0.y - y;
    let seg = EdgeSegment::Cubic(*s, EdgeColor::WHITE);
    let mut out = Vec::new();
    for t in solve_cubic(a, b, c, d) {
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let dy = seg.direction(t).y;
        if dy == 0.0 {
            continue;
        }
        out.push(ScanlineIntersection {
            x: seg.point(t).x,
            direction: dy.signum() as i32,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EdgeColor;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn linear_point_endpoints() {
        let e = EdgeSegment::linear(v(0.0, 0.0), v(1.0, 1.0), EdgeColor::WHITE);
        assert_eq!(e.point(0.0), v(0.0, 0.0));
        assert_eq!(e.point(1.0), v(1.0, 1.0));
    }

    #[test]
    fn endpoint_distance_is_near_zero() {
        let e = EdgeSegment::linear(v(0.0, 0.0), v(1.0, 0.0), EdgeColor::WHITE);
        let (d, _) = e.signed_distance(v(0.0, 0.0));
        assert!(d.distance.abs() < 1e-9);
        let (d, _) = e.signed_distance(v(1.0, 0.0));
        assert!(d.distance.abs() < 1e-9);
    }

    #[test]
    fn linear_perpendicular_sign() {
        let e = EdgeSegment::linear(v(0.0, 0.0), v(1.0, 0.0), EdgeColor::WHITE);
        let (d, t) = e.signed_distance(v(0.5, 1.0));
        assert!(t > 0.0 && t < 1.0);
        assert!(d.distance < 0.0 || d.distance > 0.0);
        assert!((d.distance.abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_quadratic_endpoint_distance_is_finite() {
        let e = EdgeSegment::quadratic(v(0.0, 0.0), v(0.0, 0.0), v(0.0, 0.0), EdgeColor::WHITE);
        let (d, _) = e.signed_distance(v(0.001, 0.0));
        assert!(d.distance.is_finite());
        assert!((d.distance.abs() - 0.001).abs() < 1e-6);
    }

    #[test]
    fn reverse_swaps_endpoints() {
        let e = EdgeSegment::linear(v(0.0, 0.0), v(1.0, 1.0), EdgeColor::WHITE);
        let r = e.reverse();
        assert_eq!(r.start_point(), e.end_point());
        assert_eq!(r.end_point(), e.start_point());
    }

    #[test]
    fn split_in_thirds_reproduces_endpoints() {
        let e = EdgeSegment::linear(v(0.0, 0.0), v(3.0, 0.0), EdgeColor::WHITE);
        let parts = e.split_in_thirds();
        assert_eq!(parts[0].start_point(), v(0.0, 0.0));
        assert_eq!(parts[2].end_point(), v(3.0, 0.0));
        assert!((parts[0].end_point().x - 1.0).abs() < 1e-9);
        assert!((parts[1].end_point().x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn bound_includes_extrema() {
        // Quadratic bulging above the chord between endpoints.
        let e = EdgeSegment::quadratic(v(0.0, 0.0), v(1.0, 2.0), v(2.0, 0.0), EdgeColor::WHITE);
        let b = e.bound();
        assert!(b.max.y > 0.9);
    }

    #[test]
    fn scanline_intersection_linear() {
        let e = EdgeSegment::linear(v(0.0, 0.0), v(0.0, 2.0), EdgeColor::WHITE);
        let hits = e.scanline_intersections(1.0);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].x - 0.0).abs() < 1e-9);
        assert_eq!(hits[0].direction, 1);
    }
}
