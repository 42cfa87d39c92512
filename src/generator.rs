//! Generator driver (§4.6): the four public `generate_*` entry points tying
//! the distance-selection pipeline to a pixel loop over a caller-owned
//! bitmap.

use crate::bitmap::PixelStore;
use crate::config::{GeneratorConfig, MsdfGeneratorConfig};
use crate::distance::{
    DistanceSelector, MultiAndTrueDistanceSelector, MultiDistanceSelector,
    OverlappingContourCombiner, PerpendicularDistanceSelector, SignFlippable, SimpleContourCombiner,
    SignedDistance, TrueDistanceSelector,
};
use crate::error::{MsdfError, MsdfResult};
use crate::geometry::Vector2;
use crate::shape::{Shape, YAxisOrientation};
use crate::telemetry::GenerationTelemetry;
use crate::transform::{DistanceMapping, SdfTransformation};

/// Either combiner variant behind one call surface, chosen once per
/// `generate_*` call by `config.overlap_support` (§4.6 step 5).
enum AnyCombiner<S: DistanceSelector + Default> {
    Simple(SimpleContourCombiner<S>),
    Overlapping(OverlappingContourCombiner<S>),
}

impl<S: DistanceSelector + Default> AnyCombiner<S> {
    fn new(overlap_support: bool) -> Self {
        if overlap_support {
            AnyCombiner::Overlapping(OverlappingContourCombiner::new())
        } else {
            AnyCombiner::Simple(SimpleContourCombiner::new())
        }
    }

    fn distance_at(&mut self, shape: &Shape, origin: Vector2) -> S::Output
    where
        S::Output: SignFlippable,
    {
        match self {
            AnyCombiner::Simple(c) => c.distance_at(shape, origin),
            AnyCombiner::Overlapping(c) => c.distance_at(shape, origin),
        }
    }
}

fn check_channels<B: PixelStore>(bitmap: &B, expected: usize) -> MsdfResult<()> {
    if bitmap.channel_count() != expected {
        return Err(MsdfError::channel_mismatch(expected, bitmap.channel_count()));
    }
    Ok(())
}

/// Shared pixel loop: serpentine column order within a row, row direction
/// derived from the shape's Y-axis orientation (§4.6 steps 1-3, 6).
fn run_generate<B, S>(
    bitmap: &mut B,
    shape: &Shape,
    transformation: &SdfTransformation,
    overlap_support: bool,
    write_pixel: impl Fn(&mut B, u32, u32, S::Output, &DistanceMapping),
) where
    B: PixelStore,
    S: DistanceSelector + Default,
    S::Output: SignFlippable,
{
    let mut combiner = AnyCombiner::<S>::new(overlap_support);
    let width = bitmap.width();
    let height = bitmap.height();

    for out_y in 0..height {
        let pixel_y = match shape.y_axis_orientation {
            YAxisOrientation::Downward => out_y,
            YAxisOrientation::Upward => height - 1 - out_y,
        };
        let columns: Box<dyn Iterator<Item = u32>> = if out_y % 2 == 0 {
            Box::new(0..width)
        } else {
            Box::new((0..width).rev())
        };
        for x in columns {
            let pixel_center = Vector2::new(x as f64 + 0.5, pixel_y as f64 + 0.5);
            let origin = transformation.projection.unproject(pixel_center);
            let value = combiner.distance_at(shape, origin);
            write_pixel(bitmap, x, out_y, value, &transformation.distance_mapping);
        }
    }
}

fn log_telemetry(bitmap_width: u32, bitmap_height: u32, channel_count: usize, shape: &Shape, overlap_support: bool) {
    let telemetry = GenerationTelemetry {
        width: bitmap_width,
        height: bitmap_height,
        channel_count,
        contour_count: shape.contours.len(),
        edge_count: shape.edge_count(),
        // Coloring happens upstream of the generator (§4.5); there is no
        // seed to report at this call boundary.
        coloring_seed: 0,
    };
    telemetry.log(&GeneratorConfig { overlap_support });
}

/// Single-channel true signed distance field.
pub fn generate_sdf<B: PixelStore>(
    bitmap: &mut B,
    shape: &Shape,
    transformation: &SdfTransformation,
    config: &GeneratorConfig,
) -> MsdfResult<()> {
    check_channels(bitmap, 1)?;
    log_telemetry(bitmap.width(), bitmap.height(), 1, shape, config.overlap_support);
    run_generate::<B, TrueDistanceSelector>(
        bitmap,
        shape,
        transformation,
        config.overlap_support,
        |bmp, x, y, value: SignedDistance, mapping| {
            let v = mapping.map(value.distance) as f32;
            bmp.set_pixel(x, y, &[v]);
        },
    );
    Ok(())
}

/// Single-channel perpendicular signed distance field.
pub fn generate_psdf<B: PixelStore>(
    bitmap: &mut B,
    shape: &Shape,
    transformation: &SdfTransformation,
    config: &GeneratorConfig,
) -> MsdfResult<()> {
    check_channels(bitmap, 1)?;
    log_telemetry(bitmap.width(), bitmap.height(), 1, shape, config.overlap_support);
    run_generate::<B, PerpendicularDistanceSelector>(
        bitmap,
        shape,
        transformation,
        config.overlap_support,
        |bmp, x, y, value: SignedDistance, mapping| {
            let v = mapping.map(value.distance) as f32;
            bmp.set_pixel(x, y, &[v]);
        },
    );
    Ok(())
}

/// Three-channel multi-channel signed distance field.
pub fn generate_msdf<B: PixelStore>(
    bitmap: &mut B,
    shape: &Shape,
    transformation: &SdfTransformation,
    config: &MsdfGeneratorConfig,
) -> MsdfResult<()> {
    check_channels(bitmap, 3)?;
    log_telemetry(bitmap.width(), bitmap.height(), 3, shape, config.base.overlap_support);
    run_generate::<B, MultiDistanceSelector>(
        bitmap,
        shape,
        transformation,
        config.base.overlap_support,
        |bmp, x, y, value, mapping| {
            let values = [
                mapping.map(value.r) as f32,
                mapping.map(value.g) as f32,
                mapping.map(value.b) as f32,
            ];
            bmp.set_pixel(x, y, &values);
        },
    );
    Ok(())
}

/// Four-channel MSDF plus a true-distance alpha channel.
pub fn generate_mtsdf<B: PixelStore>(
    bitmap: &mut B,
    shape: &Shape,
    transformation: &SdfTransformation,
    config: &MsdfGeneratorConfig,
) -> MsdfResult<()> {
    check_channels(bitmap, 4)?;
    log_telemetry(bitmap.width(), bitmap.height(), 4, shape, config.base.overlap_support);
    run_generate::<B, MultiAndTrueDistanceSelector>(
        bitmap,
        shape,
        transformation,
        config.base.overlap_support,
        |bmp, x, y, value, mapping| {
            let values = [
                mapping.map(value.r) as f32,
                mapping.map(value.g) as f32,
                mapping.map(value.b) as f32,
                mapping.map(value.a) as f32,
            ];
            bmp.set_pixel(x, y, &values);
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::color::EdgeColor;
    use crate::edge::EdgeSegment;
    use crate::shape::Contour;
    use crate::transform::Projection;

    fn unit_square_shape() -> Shape {
        let pts = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];
        let mut edges = Vec::new();
        for i in 0..4 {
            edges.push(EdgeSegment::linear(pts[i], pts[(i + 1) % 4], EdgeColor::WHITE));
        }
        let mut shape = Shape::new(YAxisOrientation::Upward);
        shape.add_contour(Contour::new(edges));
        shape
    }

    fn identity_transform(size: u32) -> SdfTransformation {
        SdfTransformation::new(
            Projection::new(Vector2::new(size as f64, size as f64), Vector2::ZERO),
            DistanceMapping::from_range(-0.5, 0.5),
        )
    }

    #[test]
    fn sdf_rejects_wrong_channel_count() {
        let shape = unit_square_shape();
        let mut bmp: Bitmap<3> = Bitmap::new(4, 4);
        let transformation = identity_transform(4);
        let config = GeneratorConfig::default();
        assert!(generate_sdf(&mut bmp, &shape, &transformation, &config).is_err());
    }

    #[test]
    fn sdf_center_is_inside_and_corner_is_outside() {
        let shape = unit_square_shape();
        let mut bmp: Bitmap<1> = Bitmap::new(8, 8);
        let transformation = identity_transform(8);
        let config = GeneratorConfig::default();
        generate_sdf(&mut bmp, &shape, &transformation, &config).unwrap();

        let center = bmp.get_pixel(4, 4)[0];
        let corner = bmp.get_pixel(0, 0)[0];
        assert!(
            center > corner,
            "a point well inside the square should map to a larger value than one well outside: center={center} corner={corner}"
        );
    }

    #[test]
    fn msdf_is_deterministic_across_repeated_generate_calls() {
        let shape = unit_square_shape();
        let transformation = identity_transform(8);
        let config = MsdfGeneratorConfig::default();

        let mut a: Bitmap<3> = Bitmap::new(8, 8);
        let mut b: Bitmap<3> = Bitmap::new(8, 8);
        generate_msdf(&mut a, &shape, &transformation, &config).unwrap();
        generate_msdf(&mut b, &shape, &transformation, &config).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn generator_result_is_independent_of_serpentine_column_direction() {
        // Same shape/transform at two different bitmap heights (odd vs
        // even row count) shouldn't change a shared pixel's value, since
        // serpentine order only affects traversal, not the per-pixel query.
        let shape = unit_square_shape();
        let transformation = identity_transform(8);
        let config = GeneratorConfig::default();

        let mut a: Bitmap<1> = Bitmap::new(8, 8);
        generate_sdf(&mut a, &shape, &transformation, &config).unwrap();
        let mut b: Bitmap<1> = Bitmap::new(8, 8);
        generate_sdf(&mut b, &shape, &transformation, &config).unwrap();
        assert_eq!(a.data(), b.data());
    }
}
