//! Shape model: contours of edge segments (§3 Contour, Shape).

mod contour;

pub use contour::Contour;

use crate::edge::Bounds;

/// Upward = mathematical Y axis (Y increases going up); downward = image
/// convention (Y increases going down). Determines the generator's vertical
/// iteration direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YAxisOrientation {
    Upward,
    Downward,
}

/// An ordered sequence of contours.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    pub contours: Vec<Contour>,
    pub y_axis_orientation: YAxisOrientation,
}

impl Default for YAxisOrientation {
    fn default() -> Self {
        YAxisOrientation::Upward
    }
}

impl Shape {
    pub fn new(y_axis_orientation: YAxisOrientation) -> Self {
        Shape {
            contours: Vec::new(),
            y_axis_orientation,
        }
    }

    pub fn add_contour(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    pub fn edge_count(&self) -> usize {
        self.contours.iter().map(Contour::edge_count).sum()
    }

    /// Aggregate bounding box: the union of every edge's bound, across every
    /// contour. Returns `None` for an empty shape.
    pub fn bound(&self) -> Option<Bounds> {
        let mut acc: Option<Bounds> = None;
        for contour in &self.contours {
            for edge in &contour.edges {
                let b = edge.bound();
                acc = Some(match acc {
                    Some(existing) => existing.union(b),
                    None => b,
                });
            }
        }
        acc
    }

    /// Flip any contour with negative winding so every contour ends up with
    /// winding >= 0. Idempotent (§8 Shape normalize idempotence).
    ///
    /// Per §9's open question: this does not distinguish an intentional hole
    /// contour (meant to stay oppositely wound under the non-zero rule) from
    /// a genuinely miswound outer contour — callers that rely on the hole
    /// convention should skip normalization and construct winding-correct
    /// contours directly instead.
    pub fn normalize(&mut self) {
        for contour in &mut self.contours {
            if contour.winding() < 0 {
                contour.reverse_in_place();
            }
        }
    }

    /// Advisory validation (§7: "the `validate()` contract on a shape is
    /// advisory"). Returns a list of human-readable issues found; never
    /// fails. Degenerate shapes still produce well-formed (if uninformative)
    /// distance fields when fed through the generator.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for (ci, contour) in self.contours.iter().enumerate() {
            if contour.edges.is_empty() {
                issues.push(format!("contour {ci} has no edges"));
                continue;
            }
            const TOLERANCE: f64 = 1e-6;
            for (ei, edge) in contour.edges.iter().enumerate() {
                let next = &contour.edges[(ei + 1) % contour.edges.len()];
                let gap = (edge.end_point() - next.start_point()).length();
                if gap > TOLERANCE {
                    issues.push(format!(
                        "contour {ci} edge {ei} does not connect to the next edge (gap {gap:e})"
                    ));
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EdgeColor;
    use crate::edge::EdgeSegment;
    use crate::geometry::Vector2;

    fn unit_square() -> Shape {
        let mut shape = Shape::new(YAxisOrientation::Upward);
        let pts = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        let mut contour = Contour::default();
        for i in 0..4 {
            contour.edges.push(EdgeSegment::linear(
                pts[i],
                pts[(i + 1) % 4],
                EdgeColor::WHITE,
            ));
        }
        shape.add_contour(contour);
        shape
    }

    #[test]
    fn normalize_idempotent_and_nonnegative_winding() {
        let mut shape = unit_square();
        shape.contours[0].reverse_in_place(); // force negative winding
        assert!(shape.contours[0].winding() < 0);
        shape.normalize();
        assert!(shape.contours[0].winding() >= 0);
        let snapshot = shape.clone();
        shape.normalize();
        assert_eq!(snapshot.contours[0].winding(), shape.contours[0].winding());
    }

    #[test]
    fn bound_matches_square_extent() {
        let shape = unit_square();
        let b = shape.bound().unwrap();
        assert_eq!(b.min, Vector2::new(0.0, 0.0));
        assert_eq!(b.max, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn validate_reports_open_contour() {
        let mut shape = unit_square();
        shape.contours[0].edges[0].set_end_point(Vector2::new(5.0, 5.0));
        let issues = shape.validate();
        assert!(!issues.is_empty());
    }
}
