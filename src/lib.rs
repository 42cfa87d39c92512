//! Multi-channel signed distance field generation from 2-D vector outlines.
//!
//! The pipeline: build a [`shape::Shape`] of [`edge::EdgeSegment`]s, assign
//! edge colors with one of the [`color`] algorithms, then call one of the
//! four [`generator`] entry points to fill a caller-owned bitmap.

pub mod bitmap;
pub mod color;
pub mod config;
pub mod distance;
pub mod edge;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod scanline;
pub mod shape;
pub mod telemetry;
pub mod transform;

pub use bitmap::{Bitmap, PixelStore};
pub use color::{color_by_distance, color_ink_trap, color_simple, EdgeColor};
pub use config::{ColoringConfig, GeneratorConfig, GeneratorConfigBuilder, MsdfGeneratorConfig};
pub use distance::{MultiAndTrueDistance, MultiDistance, SignedDistance};
pub use edge::EdgeSegment;
pub use error::{MsdfError, MsdfResult};
pub use generator::{generate_msdf, generate_mtsdf, generate_psdf, generate_sdf};
pub use geometry::Vector2;
pub use shape::{Contour, Shape, YAxisOrientation};
pub use transform::{DistanceMapping, Projection, SdfTransformation};
