//! "Simple" edge coloring (§4.5): detect corners by tangent discontinuity,
//! then assign colors per corner count (smooth loop / teardrop / splines).

use super::prng::SeedStream;
use super::{EdgeColor, PALETTE};
use crate::config::ColoringConfig;
use crate::shape::{Contour, Shape};

pub fn color_simple(shape: &mut Shape, config: &ColoringConfig) {
    let cross_threshold = config.angle_threshold.sin();
    let mut seed = SeedStream::new(config.seed);
    for contour in &mut shape.contours {
        color_contour_simple(contour, cross_threshold, &mut seed);
    }
}

pub(super) fn color_contour_simple(contour: &mut Contour, cross_threshold: f64, seed: &mut SeedStream) {
    if contour.edges.is_empty() {
        return;
    }
    let corners = detect_corners(contour, cross_threshold);
    match corners.len() {
        0 => {
            let color = next_palette_color(seed);
            for edge in &mut contour.edges {
                edge.set_color(color);
            }
        }
        1 => color_teardrop(contour, corners[0], seed),
        _ => color_splines(contour, &corners, seed),
    }
}

/// Indices `i` (in `0..edges.len()`) at which the tangent across the
/// boundary between edge `i-1` and edge `i` changes sharply enough to count
/// as a corner, per §4.5's `cos <= 0 || |sin| > sin(angleThreshold)` test.
pub(super) fn detect_corners(contour: &Contour, cross_threshold: f64) -> Vec<usize> {
    let n = contour.edges.len();
    let mut corners = Vec::new();
    for i in 0..n {
        let prev = &contour.edges[(i + n - 1) % n];
        let cur = &contour.edges[i];
        let prev_dir = prev.direction(1.0).normalize(false);
        let cur_dir = cur.direction(0.0).normalize(false);
        let cos = prev_dir.dot(cur_dir);
        let sin = prev_dir.cross(cur_dir);
        if cos <= 0.0 || sin.abs() > cross_threshold {
            corners.push(i);
        }
    }
    corners
}

pub(super) fn next_palette_color(seed: &mut SeedStream) -> EdgeColor {
    PALETTE[(seed.next_trit() % 3) as usize]
}

/// Pick a palette color different from `prev` and, unless `banned` is
/// `EdgeColor::BLACK`, different from `banned` too. With only three palette
/// entries at least one choice always remains.
pub(super) fn next_different_color(prev: EdgeColor, banned: EdgeColor, seed: &mut SeedStream) -> EdgeColor {
    let options: Vec<EdgeColor> = PALETTE
        .iter()
        .copied()
        .filter(|&c| c != prev && c != banned)
        .collect();
    let pool = if options.is_empty() {
        PALETTE.iter().copied().filter(|&c| c != prev).collect()
    } else {
        options
    };
    let idx = (seed.next_trit() as usize) % pool.len();
    pool[idx]
}

fn color_teardrop(contour: &mut Contour, _corner: usize, seed: &mut SeedStream) {
    // A single corner can't bound enough edges to give each of the three
    // colors a contiguous run; split every edge into thirds first so the
    // trichotomy below has somewhere to place them (§9: only valid when the
    // lone corner index is 0 or 1, which holds for contours this small).
    if contour.edges.len() < 3 {
        let mut expanded = Vec::with_capacity(contour.edges.len() * 3);
        for edge in &contour.edges {
            expanded.extend(edge.split_in_thirds());
        }
        contour.edges = expanded;
    }

    let a = next_palette_color(seed);
    let b = next_different_color(a, EdgeColor::BLACK, seed);
    let m = contour.edges.len();
    for (i, edge) in contour.edges.iter_mut().enumerate() {
        let color = match trichotomy(i, m) {
            -1 => a,
            1 => b,
            _ => EdgeColor::WHITE,
        };
        edge.set_color(color);
    }
}

/// Balanced ternary split of index `i` of `m` into {-1, 0, +1}, per §4.5's
/// `floor(3 + 2.875*i/(m-1) - 1.4375 + 0.5) - 3`.
fn trichotomy(i: usize, m: usize) -> i32 {
    if m <= 1 {
        return 0;
    }
    let value = 3.0 + 2.875 * (i as f64) / ((m - 1) as f64) - 1.4375 + 0.5;
    (value.floor() as i32 - 3).clamp(-1, 1)
}

/// Spline ranges between consecutive corners: `(start_edge, len)` pairs
/// covering every edge exactly once, cyclically starting at `corners[0]`.
pub(super) fn spline_ranges(corners: &[usize], n: usize) -> Vec<(usize, usize)> {
    let m = corners.len();
    (0..m)
        .map(|k| {
            let start = corners[k];
            let end = corners[(k + 1) % m];
            let len = match (end + n - start) % n {
                0 => n,
                other => other,
            };
            (start, len)
        })
        .collect()
}

fn color_splines(contour: &mut Contour, corners: &[usize], seed: &mut SeedStream) {
    let n = contour.edges.len();
    let ranges = spline_ranges(corners, n);
    let m = ranges.len();
    let mut colors = vec![EdgeColor::WHITE; m];
    colors[0] = next_palette_color(seed);
    for k in 1..m {
        let banned = if k == m - 1 { colors[0] } else { EdgeColor::BLACK };
        colors[k] = next_different_color(colors[k - 1], banned, seed);
    }
    for (k, &(start, len)) in ranges.iter().enumerate() {
        for step in 0..len {
            let idx = (start + step) % n;
            contour.edges[idx].set_color(colors[k]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeSegment;
    use crate::geometry::Vector2;
    use crate::shape::YAxisOrientation;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    fn square_contour() -> Contour {
        let pts = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        let mut edges = Vec::new();
        for i in 0..4 {
            edges.push(EdgeSegment::linear(pts[i], pts[(i + 1) % 4], EdgeColor::WHITE));
        }
        Contour::new(edges)
    }

    #[test]
    fn square_has_four_corners_and_four_colors_no_adjacent_repeat() {
        let mut contour = square_contour();
        let mut seed = SeedStream::new(7);
        let corners = detect_corners(&contour, (3.0_f64).sin());
        assert_eq!(corners.len(), 4);
        color_contour_simple(&mut contour, (3.0_f64).sin(), &mut seed);
        let n = contour.edges.len();
        for i in 0..n {
            let cur = contour.edges[i].color();
            let next = contour.edges[(i + 1) % n].color();
            assert_ne!(cur, next);
        }
    }

    #[test]
    fn smooth_loop_gets_single_color() {
        // A near-circular quad of quadratics whose tangents never turn
        // sharply has zero detected corners.
        let mut contour = Contour::new(vec![
            EdgeSegment::quadratic(v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), EdgeColor::WHITE),
            EdgeSegment::quadratic(v(0.0, 1.0), v(-1.0, 1.0), v(-1.0, 0.0), EdgeColor::WHITE),
            EdgeSegment::quadratic(v(-1.0, 0.0), v(-1.0, -1.0), v(0.0, -1.0), EdgeColor::WHITE),
            EdgeSegment::quadratic(v(0.0, -1.0), v(1.0, -1.0), v(1.0, 0.0), EdgeColor::WHITE),
        ]);
        let mut seed = SeedStream::new(1);
        color_contour_simple(&mut contour, (3.0_f64).sin(), &mut seed);
        let first = contour.edges[0].color();
        assert!(contour.edges.iter().all(|e| e.color() == first));
        assert_ne!(first, EdgeColor::WHITE);
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut shape_a = Shape::new(YAxisOrientation::Upward);
        shape_a.add_contour(square_contour());
        let mut shape_b = shape_a.clone();
        let config = ColoringConfig {
            angle_threshold: 3.0,
            seed: 42,
            precision: 7,
        };
        color_simple(&mut shape_a, &config);
        color_simple(&mut shape_b, &config);
        for (ca, cb) in shape_a.contours[0].edges.iter().zip(&shape_b.contours[0].edges) {
            assert_eq!(ca.color(), cb.color());
        }
    }
}
