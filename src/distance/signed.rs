//! Scalar signed distance with a tie-breaking "dot" field (§3 Signed distance).

use std::cmp::Ordering;

/// A signed distance candidate: `distance` is negative on the filled side of
/// the nearest edge; `dot` is the absolute cosine between the edge tangent
/// and the direction to the sample, used only to break ties between equally
/// distant candidates (e.g. two edges meeting at a corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedDistance {
    pub distance: f64,
    pub dot: f64,
}

impl SignedDistance {
    pub const INITIAL: SignedDistance = SignedDistance {
        distance: f64::NEG_INFINITY,
        dot: 0.0,
    };

    pub fn new(distance: f64, dot: f64) -> Self {
        SignedDistance { distance, dot }
    }
}

impl Default for SignedDistance {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Ordering compares by `|distance|` first, then `dot` ascending, matching
/// §3's "compare by |distance| first, then by dot ascending".
impl PartialOrd for SignedDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let a = self.distance.abs();
        let b = other.distance.abs();
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) => self.dot.partial_cmp(&other.dot),
            other => other,
        }
    }
}
