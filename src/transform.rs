//! Spatial projection and distance-value mapping (§3 Projection, Distance
//! mapping).

use crate::geometry::Vector2;

/// Component-wise scale and translate between shape space and pixel space:
/// `project(p) = scale ⊙ (p + translate)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: Vector2,
    pub translate: Vector2,
}

impl Projection {
    pub fn new(scale: Vector2, translate: Vector2) -> Self {
        Projection { scale, translate }
    }

    pub fn identity() -> Self {
        Projection {
            scale: Vector2::new(1.0, 1.0),
            translate: Vector2::ZERO,
        }
    }

    pub fn project(&self, p: Vector2) -> Vector2 {
        self.scale * (p + self.translate)
    }

    /// Exact inverse of `project`.
    pub fn unproject(&self, p: Vector2) -> Vector2 {
        p / self.scale - self.translate
    }

    /// Projects a direction/delta (ignores translation).
    pub fn project_vector(&self, v: Vector2) -> Vector2 {
        self.scale * v
    }

    pub fn unproject_vector(&self, v: Vector2) -> Vector2 {
        v / self.scale
    }
}

/// Affine mapping from a signed distance to an output channel value:
/// `map(d) = scale * (d + translate)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMapping {
    pub scale: f64,
    pub translate: f64,
}

impl DistanceMapping {
    pub fn new(scale: f64, translate: f64) -> Self {
        DistanceMapping { scale, translate }
    }

    /// Build from a symmetric-or-asymmetric distance range `[lo, hi]`, the
    /// typical convention where `distance == lo` maps to 0 and
    /// `distance == hi` maps to 1.
    pub fn from_range(lo: f64, hi: f64) -> Self {
        let scale = 1.0 / (hi - lo);
        DistanceMapping {
            scale,
            translate: -lo,
        }
    }

    pub fn map(&self, d: f64) -> f64 {
        self.scale * (d + self.translate)
    }

    /// `map` without the translation; used for direction-like quantities.
    pub fn map_delta(&self, d: f64) -> f64 {
        self.scale * d
    }

    pub fn inverse(&self) -> DistanceMapping {
        DistanceMapping {
            scale: 1.0 / self.scale,
            translate: -self.translate * self.scale,
        }
    }
}

/// Bundles a `Projection` with a `DistanceMapping`; this is what
/// `generateSDF`/`generateMSDF`/etc. take as the single "SDF transformation"
/// parameter in §4.6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SdfTransformation {
    pub projection: Projection,
    pub distance_mapping: DistanceMapping,
}

impl SdfTransformation {
    pub fn new(projection: Projection, distance_mapping: DistanceMapping) -> Self {
        SdfTransformation {
            projection,
            distance_mapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_round_trip() {
        let proj = Projection::new(Vector2::new(28.0, 28.0), Vector2::new(-0.5, -0.5));
        let p = Vector2::new(0.3, 0.7);
        let round = proj.unproject(proj.project(p));
        assert!((round.x - p.x).abs() < 1e-9);
        assert!((round.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn distance_mapping_inverse_round_trip() {
        let mapping = DistanceMapping::from_range(-2.0, 2.0);
        let inv = mapping.inverse();
        let x = 0.37;
        let round = inv.map(mapping.map(x));
        assert!((round - x).abs() < 1e-9);
    }

    #[test]
    fn distance_mapping_midpoint_is_half() {
        let mapping = DistanceMapping::from_range(-2.0, 2.0);
        assert!((mapping.map(0.0) - 0.5).abs() < 1e-9);
    }
}
