//! Configuration types for MSDF generation (§6 Configuration).

use serde::{Deserialize, Serialize};

use crate::error::{MsdfError, MsdfResult};

/// Configuration shared by all four `generate_*` entry points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Whether to use the scanline-corrected `OverlappingContourCombiner`
    /// (true) or the plain `SimpleContourCombiner` (false).
    pub overlap_support: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            overlap_support: true,
        }
    }
}

/// `GeneratorConfig` extended with the (out-of-scope, opaque) error
/// correction payload that `generateMSDF`/`generateMTSDF` accept. The core
/// never inspects it; a post-processing pass outside the core's scope is
/// the intended consumer (§1 Out of scope).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MsdfGeneratorConfig {
    pub base: GeneratorConfig,
    /// Placeholder for an external error-correction pass; `true` means the
    /// host plans to run one and the core should not substitute its own.
    pub error_correction: bool,
}

impl Default for MsdfGeneratorConfig {
    fn default() -> Self {
        MsdfGeneratorConfig {
            base: GeneratorConfig::default(),
            error_correction: false,
        }
    }
}

/// Configuration for the edge-coloring pass (§4.5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoringConfig {
    /// Corners are detected when the tangent direction change across the
    /// edge boundary exceeds this angle (radians). ~3.0 rad (≈172°) detects
    /// only sharp corners.
    pub angle_threshold: f64,
    /// Seed for the deterministic pseudo-random bit stream the coloring
    /// heuristics consume.
    pub seed: u64,
    /// Sample-count parameter for `color_by_distance`'s edge-pair distance
    /// estimate: each pair is sampled `2*(precision+1)` times. The default of
    /// 7 matches §4.5's "16 sample points per spline pair" baseline.
    pub precision: usize,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        ColoringConfig {
            angle_threshold: 3.0,
            seed: 0,
            precision: 7,
        }
    }
}

impl ColoringConfig {
    pub fn validate(&self) -> MsdfResult<()> {
        if !(self.angle_threshold > 0.0 && self.angle_threshold <= std::f64::consts::PI) {
            return Err(MsdfError::invalid_config(format!(
                "angle_threshold must be in (0, pi], got {}",
                self.angle_threshold
            )));
        }
        Ok(())
    }
}

/// Fluent builder for `GeneratorConfig`, mirroring
/// `vectorize-core::config_builder::ConfigBuilder`'s validate-on-build
/// pattern.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    overlap_support: Option<bool>,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlap_support(mut self, value: bool) -> Self {
        self.overlap_support = Some(value);
        self
    }

    pub fn build(self) -> MsdfResult<GeneratorConfig> {
        let defaults = GeneratorConfig::default();
        Ok(GeneratorConfig {
            overlap_support: self.overlap_support.unwrap_or(defaults.overlap_support),
        })
    }
}
