//! Contour combiners: feed every edge of every contour into a selector and,
//! for the overlapping variant, correct the result's sign against a
//! scanline-derived non-zero winding fill test (§4.4).

use crate::geometry::Vector2;
use crate::scanline::Scanline;
use crate::shape::Shape;

use super::selector::DistanceSelector;

/// No winding correction: plain minimum distance over all edges.
#[derive(Debug, Clone)]
pub struct SimpleContourCombiner<S: DistanceSelector> {
    selector: S,
}

impl<S: DistanceSelector + Default> Default for SimpleContourCombiner<S> {
    fn default() -> Self {
        SimpleContourCombiner {
            selector: S::default(),
        }
    }
}

impl<S: DistanceSelector + Default> SimpleContourCombiner<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance_at(&mut self, shape: &Shape, origin: Vector2) -> S::Output {
        self.selector.reset(origin);
        for contour in &shape.contours {
            for edge in &contour.edges {
                let (d, t) = edge.signed_distance(origin);
                self.selector.add_edge(edge, origin, d, t);
            }
        }
        self.selector.distance()
    }
}

/// Scanline-corrected non-zero-winding combiner: flips the selector's sign
/// when the even-odd/non-zero fill test at the query point disagrees with
/// the selector's own sign, so overlapping or self-intersecting contours
/// render with the non-zero fill rule (§4.4).
#[derive(Debug, Clone)]
pub struct OverlappingContourCombiner<S: DistanceSelector> {
    selector: S,
    scanline: Scanline,
    cached_y: Option<f64>,
}

impl<S: DistanceSelector + Default> Default for OverlappingContourCombiner<S> {
    fn default() -> Self {
        OverlappingContourCombiner {
            selector: S::default(),
            scanline: Scanline::new(),
            cached_y: None,
        }
    }
}

impl<S: DistanceSelector + Default> OverlappingContourCombiner<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance_at(&mut self, shape: &Shape, origin: Vector2) -> S::Output
    where
        S::Output: SignFlippable,
    {
        if self.cached_y != Some(origin.y) {
            self.scanline.reset();
            for contour in &shape.contours {
                for edge in &contour.edges {
                    for hit in edge.scanline_intersections(origin.y) {
                        self.scanline.add_intersection(hit.x, hit.direction);
                    }
                }
            }
            self.scanline.sort();
            self.cached_y = Some(origin.y);
        }

        self.selector.reset(origin);
        for contour in &shape.contours {
            for edge in &contour.edges {
                let (d, t) = edge.signed_distance(origin);
                self.selector.add_edge(edge, origin, d, t);
            }
        }
        let mut result = self.selector.distance();

        // Interior reads positive (§4.2): a point the scanline fill test
        // calls filled must end up with a positive representative distance.
        let filled = self.scanline.filled(origin.x);
        let result_is_positive = result.representative() > 0.0;
        if filled != result_is_positive {
            result = result.flip_sign();
        }
        result
    }
}

/// Allows `OverlappingContourCombiner` to flip the sign of every scalar
/// channel in a selector's output, independent of how many channels it has.
pub trait SignFlippable: Copy {
    fn representative(&self) -> f64;
    fn flip_sign(self) -> Self;
}

impl SignFlippable for super::signed::SignedDistance {
    fn representative(&self) -> f64 {
        self.distance
    }
    fn flip_sign(self) -> Self {
        super::signed::SignedDistance::new(-self.distance, self.dot)
    }
}

impl SignFlippable for super::multi::MultiDistance {
    fn representative(&self) -> f64 {
        self.median()
    }
    fn flip_sign(self) -> Self {
        super::multi::MultiDistance::new(-self.r, -self.g, -self.b)
    }
}

impl SignFlippable for super::multi::MultiAndTrueDistance {
    fn representative(&self) -> f64 {
        self.median()
    }
    fn flip_sign(self) -> Self {
        super::multi::MultiAndTrueDistance::new(-self.r, -self.g, -self.b, -self.a)
    }
}
