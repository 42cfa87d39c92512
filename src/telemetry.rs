//! Per-run summary logging.
//!
//! Trimmed from `vectorize-core::telemetry`'s config/stats JSON+CSV dump to a
//! `log`-only summary: the core's resource model (§5) promises no file
//! descriptors, so this stays in-process rather than writing artifacts next
//! to the output bitmap the way the teacher's run logger does.

use crate::config::GeneratorConfig;

/// Snapshot of one `generate_*` call, logged at `debug` level when the
/// `telemetry` feature is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationTelemetry {
    pub width: u32,
    pub height: u32,
    pub channel_count: usize,
    pub contour_count: usize,
    pub edge_count: usize,
    pub coloring_seed: u64,
}

impl GenerationTelemetry {
    pub fn log(&self, config: &GeneratorConfig) {
        if cfg!(feature = "telemetry") {
            log::debug!(
                "generate: {}x{} channels={} contours={} edges={} seed={} overlap_support={}",
                self.width,
                self.height,
                self.channel_count,
                self.contour_count,
                self.edge_count,
                self.coloring_seed,
                config.overlap_support,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_does_not_panic_without_a_logger_installed() {
        let telemetry = GenerationTelemetry {
            width: 32,
            height: 32,
            channel_count: 3,
            contour_count: 1,
            edge_count: 4,
            coloring_seed: 0,
        };
        telemetry.log(&GeneratorConfig::default());
    }
}
