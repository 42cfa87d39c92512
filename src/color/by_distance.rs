//! "By-distance" edge coloring (§4.5): the most expensive but most reliable
//! algorithm. Splines that pass close to each other (including splines from
//! different contours, which matters for overlapping shapes) are forced
//! into a proper 3-coloring; splines that stay far apart are left to a
//! greedy initial assignment since a shared color between them is visually
//! harmless.

use std::collections::{HashSet, VecDeque};

use super::prng::SeedStream;
use super::simple::{detect_corners, spline_ranges};
use super::{EdgeColor, PALETTE};
use crate::config::ColoringConfig;
use crate::distance::SignedDistance;
use crate::geometry::Vector2;
use crate::shape::Shape;

/// Below this absolute signed distance, two splines are treated as touching
/// (§9: "consider a small tolerance" for numerically-near-coincident
/// endpoints that an exact `== 0.0` test would miss).
const NUMERIC_ZERO: f64 = 1e-9;

const MAX_REPAIR_STEPS: usize = 16;

#[derive(Debug, Clone, Copy)]
struct SplineRef {
    contour: usize,
    start: usize,
    len: usize,
}

pub fn color_by_distance(shape: &mut Shape, config: &ColoringConfig) {
    let cross_threshold = config.angle_threshold.sin();
    let mut splines = Vec::new();
    for (ci, contour) in shape.contours.iter().enumerate() {
        if contour.edges.is_empty() {
            continue;
        }
        let n = contour.edges.len();
        let corners = detect_corners(contour, cross_threshold);
        if corners.len() < 2 {
            splines.push(SplineRef {
                contour: ci,
                start: 0,
                len: n,
            });
        } else {
            for (start, len) in spline_ranges(&corners, n) {
                splines.push(SplineRef {
                    contour: ci,
                    start,
                    len,
                });
            }
        }
    }

    let m = splines.len();
    if m == 0 {
        return;
    }
    if m == 1 {
        paint(shape, &splines[0], PALETTE[0]);
        return;
    }

    let mut pair_distance = vec![vec![0.0_f64; m]; m];
    for a in 0..m {
        for b in (a + 1)..m {
            let d = spline_pair_distance(shape, &splines[a], &splines[b], config.precision);
            pair_distance[a][b] = d;
            pair_distance[b][a] = d;
        }
    }

    let mut graph: Vec<HashSet<usize>> = vec![HashSet::new(); m];
    for a in 0..m {
        for b in (a + 1)..m {
            if pair_distance[a][b] <= NUMERIC_ZERO {
                graph[a].insert(b);
                graph[b].insert(a);
            }
        }
    }

    let mut seed = SeedStream::new(config.seed);
    let mut color_idx: Vec<Option<usize>> = vec![None; m];
    for v in 0..m {
        let mut forbidden = [false; 3];
        for &nb in &graph[v] {
            if let Some(c) = color_idx[nb] {
                forbidden[c] = true;
            }
        }
        let free: Vec<usize> = (0..3).filter(|&c| !forbidden[c]).collect();
        color_idx[v] = Some(if free.is_empty() {
            (seed.next_trit() as usize) % 3
        } else {
            free[(seed.next_trit() as usize) % free.len()]
        });
    }
    let mut color_idx: Vec<usize> = color_idx.into_iter().map(|c| c.unwrap()).collect();

    let mut remaining: Vec<(usize, usize, f64)> = Vec::new();
    for a in 0..m {
        for b in (a + 1)..m {
            if pair_distance[a][b] > NUMERIC_ZERO {
                remaining.push((a, b, pair_distance[a][b]));
            }
        }
    }
    remaining.sort_by(|x, y| x.2.partial_cmp(&y.2).unwrap());

    for (a, b, _d) in remaining {
        if color_idx[a] != color_idx[b] {
            graph[a].insert(b);
            graph[b].insert(a);
            continue;
        }
        if try_repair(a, b, &graph, &mut color_idx, &mut seed) {
            graph[a].insert(b);
            graph[b].insert(a);
        }
    }

    for (spline, &idx) in splines.iter().zip(&color_idx) {
        paint(shape, spline, PALETTE[idx]);
    }
}

fn paint(shape: &mut Shape, spline: &SplineRef, color: EdgeColor) {
    let contour = &mut shape.contours[spline.contour];
    let n = contour.edges.len();
    for step in 0..spline.len {
        let idx = (spline.start + step) % n;
        contour.edges[idx].set_color(color);
    }
}

fn sample_point(shape: &Shape, spline: &SplineRef, t: f64) -> Vector2 {
    let contour = &shape.contours[spline.contour];
    let n = contour.edges.len();
    let pos = t * spline.len as f64;
    let edge_offset = (pos.floor() as usize).min(spline.len - 1);
    let local_t = (pos - edge_offset as f64).clamp(0.0, 1.0);
    let idx = (spline.start + edge_offset) % n;
    contour.edges[idx].point(local_t)
}

fn nearest_signed_distance(shape: &Shape, spline: &SplineRef, p: Vector2) -> SignedDistance {
    let contour = &shape.contours[spline.contour];
    let n = contour.edges.len();
    let mut best = SignedDistance::INITIAL;
    for step in 0..spline.len {
        let idx = (spline.start + step) % n;
        let (d, _t) = contour.edges[idx].signed_distance(p);
        if d < best {
            best = d;
        }
    }
    best
}

fn spline_pair_distance(shape: &Shape, a: &SplineRef, b: &SplineRef, precision: usize) -> f64 {
    let samples = precision + 1;
    let mut best = f64::INFINITY;
    for &(src, dst) in &[(a, b), (b, a)] {
        for k in 0..samples {
            let t = if samples > 1 {
                k as f64 / (samples - 1) as f64
            } else {
                0.5
            };
            let p = sample_point(shape, src, t);
            let d = nearest_signed_distance(shape, dst, p).distance.abs();
            if d < NUMERIC_ZERO {
                return 0.0;
            }
            if d < best {
                best = d;
            }
        }
    }
    best
}

/// Bounded BFS repair: try to recolor `b` (and any neighbor this forces into
/// conflict) so that `a` and `b` end up with different colors, without
/// violating any existing graph constraint. Operates on a scratch copy and
/// only commits on success.
fn try_repair(a: usize, b: usize, graph: &[HashSet<usize>], colors: &mut [usize], seed: &mut SeedStream) -> bool {
    let mut trial = colors.to_vec();
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    queue.push_back(b);
    visited.insert(b);
    let mut steps = 0usize;

    while let Some(v) = queue.pop_front() {
        if steps >= MAX_REPAIR_STEPS {
            return false;
        }
        steps += 1;

        let mut forbidden = [false; 3];
        for &nb in &graph[v] {
            forbidden[trial[nb]] = true;
        }
        if v == b {
            forbidden[trial[a]] = true;
        }
        let free: Vec<usize> = (0..3).filter(|&c| !forbidden[c]).collect();

        let chosen = if free.is_empty() {
            return false;
        } else if free.len() == 1 {
            free[0]
        } else {
            let mut choice = steps % 3;
            while forbidden[choice] {
                choice = (choice + 1) % 3;
            }
            let _ = seed.next_bit();
            choice
        };

        if trial[v] == chosen {
            continue;
        }
        trial[v] = chosen;

        for &w in &graph[v] {
            if trial[w] == trial[v] && !visited.contains(&w) {
                visited.insert(w);
                queue.push_back(w);
            }
        }
    }

    colors.copy_from_slice(&trial);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeSegment;
    use crate::shape::{Contour, YAxisOrientation};

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    fn square() -> Contour {
        let pts = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        let mut edges = Vec::new();
        for i in 0..4 {
            edges.push(EdgeSegment::linear(pts[i], pts[(i + 1) % 4], EdgeColor::WHITE));
        }
        Contour::new(edges)
    }

    #[test]
    fn adjacent_splines_on_a_square_get_distinct_colors() {
        let mut shape = Shape::new(YAxisOrientation::Upward);
        shape.add_contour(square());
        let config = ColoringConfig {
            angle_threshold: 3.0,
            seed: 5,
            precision: 7,
        };
        color_by_distance(&mut shape, &config);
        let edges = &shape.contours[0].edges;
        for i in 0..edges.len() {
            let cur = edges[i].color();
            let next = edges[(i + 1) % edges.len()].color();
            assert_ne!(cur, next);
        }
    }

    #[test]
    fn far_apart_splines_may_share_a_color_without_panicking() {
        let mut shape = Shape::new(YAxisOrientation::Upward);
        shape.add_contour(square());
        let mut far = square();
        for edge in &mut far.edges {
            let p0 = edge.start_point() + v(1000.0, 1000.0);
            let p1 = edge.end_point() + v(1000.0, 1000.0);
            edge.set_start_point(p0);
            edge.set_end_point(p1);
        }
        shape.add_contour(far);
        let config = ColoringConfig {
            angle_threshold: 3.0,
            seed: 9,
            precision: 7,
        };
        color_by_distance(&mut shape, &config);
        for contour in &shape.contours {
            for edge in &contour.edges {
                assert_ne!(edge.color(), EdgeColor::BLACK);
            }
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut shape_a = Shape::new(YAxisOrientation::Upward);
        shape_a.add_contour(square());
        let mut shape_b = shape_a.clone();
        let config = ColoringConfig {
            angle_threshold: 3.0,
            seed: 11,
            precision: 7,
        };
        color_by_distance(&mut shape_a, &config);
        color_by_distance(&mut shape_b, &config);
        for (ea, eb) in shape_a.contours[0].edges.iter().zip(&shape_b.contours[0].edges) {
            assert_eq!(ea.color(), eb.color());
        }
    }
}
