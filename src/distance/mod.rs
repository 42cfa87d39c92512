//! Distance-selection pipeline: scalar/multi-channel signed distances,
//! per-edge selectors, and contour combiners (§4.3, §4.4, §3).

mod combiner;
mod multi;
mod selector;
mod signed;

pub use combiner::{OverlappingContourCombiner, SignFlippable, SimpleContourCombiner};
pub use multi::{MultiAndTrueDistance, MultiDistance};
pub use selector::{
    DistanceSelector, MultiAndTrueDistanceSelector, MultiDistanceSelector,
    PerpendicularDistanceSelector, TrueDistanceSelector,
};
pub use signed::SignedDistance;
