//! Edge segment kernel (§4.2, §3 Edge segment).

mod segment;

pub use segment::{
    Bounds, CubicSegment, EdgeSegment, LinearSegment, QuadraticSegment, ScanlineIntersection,
};
