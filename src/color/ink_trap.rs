//! "Ink trap" edge coloring (§4.5): like `color_simple`, but corners
//! flanked by splines that are both longer than the short spline between
//! them ("ink traps") don't get a fresh seeded color. Instead the trap's
//! short spline is colored as the complement of the bitwise-AND of its
//! surrounding (longer) splines' colors, which keeps the trap visually
//! distinct without spending a seed draw on a feature too small to need
//! three full colors of its own.
//!
//! The heuristic for what counts as a "minor" (ink-trap) corner is only
//! approximately specified; this implementation flags a spline as a
//! bridging ink trap when both its neighboring splines are strictly longer,
//! and marks the two corners bounding it as minor.

use super::prng::SeedStream;
use super::simple::{color_contour_simple, detect_corners, next_different_color, next_palette_color, spline_ranges};
use super::EdgeColor;
use crate::config::ColoringConfig;
use crate::shape::{Contour, Shape};

pub fn color_ink_trap(shape: &mut Shape, config: &ColoringConfig) {
    let cross_threshold = config.angle_threshold.sin();
    let mut seed = SeedStream::new(config.seed);
    for contour in &mut shape.contours {
        color_contour_ink_trap(contour, cross_threshold, &mut seed);
    }
}

fn color_contour_ink_trap(contour: &mut Contour, cross_threshold: f64, seed: &mut SeedStream) {
    if contour.edges.is_empty() {
        return;
    }
    let corners = detect_corners(contour, cross_threshold);
    if corners.len() < 2 {
        color_contour_simple(contour, cross_threshold, seed);
        return;
    }

    let n = contour.edges.len();
    let ranges = spline_ranges(&corners, n);
    let m = ranges.len();
    let lengths: Vec<f64> = ranges
        .iter()
        .map(|&(start, len)| spline_length(contour, start, len, n))
        .collect();

    // A spline is a bridge (ink-trap bottom) when both neighbors outlast it.
    let is_bridge: Vec<bool> = (0..m)
        .map(|b| {
            let prev = lengths[(b + m - 1) % m];
            let next = lengths[(b + 1) % m];
            prev > lengths[b] && next > lengths[b]
        })
        .collect();

    // Union-find over splines: merge non-bridge-adjacent pairs so the major
    // coloring pass treats a bridge and both its flanking splines as one
    // contiguous group (colored uniformly, then the bridge gets overridden).
    let mut parent: Vec<usize> = (0..m).collect();
    fn find(parent: &mut [usize], x: usize) -> usize {
        if parent[x] != x {
            parent[x] = find(parent, parent[x]);
        }
        parent[x]
    }
    for b in 0..m {
        if is_bridge[b] {
            let a = find(&mut parent, (b + m - 1) % m);
            let c = find(&mut parent, b);
            parent[a] = c;
            let c = find(&mut parent, b);
            let d = find(&mut parent, (b + 1) % m);
            parent[c] = d;
        }
    }

    // Assign a group id per spline in cyclic order, then color groups the
    // same way `color_splines` colors bare splines.
    let mut group_of = vec![0usize; m];
    let mut group_order: Vec<usize> = Vec::new();
    let mut seen = std::collections::HashMap::new();
    for b in 0..m {
        let root = find(&mut parent, b);
        let gid = *seen.entry(root).or_insert_with(|| {
            let id = group_order.len();
            group_order.push(root);
            id
        });
        group_of[b] = gid;
    }
    let num_groups = group_order.len();

    let mut group_color = vec![EdgeColor::WHITE; num_groups];
    group_color[0] = next_palette_color(seed);
    for g in 1..num_groups {
        let banned = if g == num_groups - 1 && num_groups > 1 {
            group_color[0]
        } else {
            EdgeColor::BLACK
        };
        group_color[g] = next_different_color(group_color[g - 1], banned, seed);
    }

    for (b, &(start, len)) in ranges.iter().enumerate() {
        let color = group_color[group_of[b]];
        for step in 0..len {
            let idx = (start + step) % n;
            contour.edges[idx].set_color(color);
        }
    }

    // Override each bridge spline with the complement of the AND of its
    // flanking groups' colors.
    for (b, &(start, len)) in ranges.iter().enumerate() {
        if !is_bridge[b] {
            continue;
        }
        let before = group_color[group_of[(b + m - 1) % m]];
        let after = group_color[group_of[(b + 1) % m]];
        let color = before.intersect(after).complement();
        for step in 0..len {
            let idx = (start + step) % n;
            contour.edges[idx].set_color(color);
        }
    }
}

fn spline_length(contour: &Contour, start: usize, len: usize, n: usize) -> f64 {
    let mut total = 0.0;
    for step in 0..len {
        let idx = (start + step) % n;
        let edge = &contour.edges[idx];
        total += (edge.end_point() - edge.start_point()).length();
    }
    total
}
