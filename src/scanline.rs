//! Scanline: sorted intersections of a horizontal line with a shape's
//! outline, supporting winding evaluation at arbitrary x (§4.7).

use crate::edge::ScanlineIntersection;

/// Ordered list of (x, direction) crossings at one fixed `y`.
#[derive(Debug, Clone, Default)]
pub struct Scanline {
    intersections: Vec<ScanlineIntersection>,
    sorted: bool,
    /// Cursor optimization for monotonically increasing `x` queries.
    cursor: usize,
}

impl Scanline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.intersections.clear();
        self.sorted = false;
        self.cursor = 0;
    }

    /// Tangent grazings (direction 0) are discarded on insertion.
    pub fn add_intersection(&mut self, x: f64, direction: i32) {
        if direction == 0 {
            return;
        }
        self.intersections.push(ScanlineIntersection { x, direction });
        self.sorted = false;
    }

    pub fn sort(&mut self) {
        self.intersections
            .sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        self.sorted = true;
        self.cursor = 0;
    }

    /// Sum of directions of intersections with `x' < x`. Requires `sort()`
    /// to have been called since the last mutation.
    pub fn winding(&mut self, x: f64) -> i32 {
        debug_assert!(self.sorted, "Scanline::winding called before sort()");
        // Re-seek the cursor if x moved backwards relative to the last
        // query (monotonic increasing queries reuse the cursor as-is).
        if self.cursor > 0 && self.cursor <= self.intersections.len() {
            if self.intersections[self.cursor - 1].x >= x {
                self.cursor = 0;
            }
        }
        while self.cursor < self.intersections.len() && self.intersections[self.cursor].x < x {
            self.cursor += 1;
        }
        self.intersections[..self.cursor]
            .iter()
            .map(|i| i.direction)
            .sum()
    }

    pub fn filled(&mut self, x: f64) -> bool {
        self.winding(x) != 0
    }

    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convex_region_filled_inside_only() {
        // A unit square's crossings of the scanline at y=0.5: entering at
        // x=0 (dir +1), leaving at x=1 (dir -1).
        let mut sl = Scanline::new();
        sl.add_intersection(0.0, 1);
        sl.add_intersection(1.0, -1);
        sl.sort();
        assert!(!sl.filled(-1.0));
        assert!(sl.filled(0.5));
        assert!(!sl.filled(1.5));
    }

    #[test]
    fn grazing_intersections_discarded() {
        let mut sl = Scanline::new();
        sl.add_intersection(0.5, 0);
        sl.sort();
        assert_eq!(sl.len(), 0);
    }

    #[test]
    fn symmetric_plus_minus_counts_on_closed_contour() {
        let mut sl = Scanline::new();
        sl.add_intersection(0.0, 1);
        sl.add_intersection(1.0, -1);
        sl.add_intersection(2.0, 1);
        sl.add_intersection(3.0, -1);
        let plus = sl
            .intersections
            .iter()
            .filter(|i| i.direction > 0)
            .count();
        let minus = sl
            .intersections
            .iter()
            .filter(|i| i.direction < 0)
            .count();
        assert_eq!(plus, minus);
    }

    #[test]
    fn winding_with_monotonic_cursor_reuse() {
        let mut sl = Scanline::new();
        sl.add_intersection(0.0, 1);
        sl.add_intersection(2.0, -1);
        sl.add_intersection(4.0, 1);
        sl.add_intersection(6.0, -1);
        sl.sort();
        assert_eq!(sl.winding(1.0), 1);
        assert_eq!(sl.winding(3.0), 0);
        assert_eq!(sl.winding(5.0), 1);
        assert_eq!(sl.winding(7.0), 0);
    }
}
