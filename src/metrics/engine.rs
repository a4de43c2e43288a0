//! Metrics engine: single-point summaries and aggregates.
//!
//! Every summary card on the dashboard is a [`GameMetricsSnapshot`]
//! computed here. The engine owns no state beyond an injected reference
//! [`Catalog`]; everything is recomputed from the key's seed on request,
//! so any number of rendering contexts can call in without coordination.

use serde::Serialize;

use crate::catalog::{Catalog, CoreTopology};
use crate::series::{frequency, temperature};
use crate::synth::{derive_seed, unit};

use super::modifiers::{build_bonus, sku_multiplier};

/// Why turbo was clipped during the modeled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThrottleReason {
    PowerLimit,
    Thermal,
}

impl std::fmt::Display for ThrottleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThrottleReason::PowerLimit => write!(f, "Power Limit"),
            ThrottleReason::Thermal => write!(f, "Thermal"),
        }
    }
}

/// Single-point summary for one (game, SKU, build) key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameMetricsSnapshot {
    pub avg_fps: f64,
    pub one_percent_low_fps: f64,
    pub point_one_percent_low_fps: f64,
    pub min_fps: f64,
    pub max_fps: f64,
    pub avg_cpu_util_percent: f64,
    pub avg_gpu_util_percent: f64,
    pub p_core_mhz_min: f64,
    pub p_core_mhz_avg: f64,
    pub p_core_mhz_max: f64,
    pub e_core_mhz_min: f64,
    pub e_core_mhz_avg: f64,
    pub e_core_mhz_max: f64,
    pub package_temp_avg_c: f64,
    pub package_temp_max_c: f64,
    pub power_draw_avg_w: f64,
    pub power_draw_max_w: f64,
    /// Empty, `[PowerLimit]`, or `[Thermal, PowerLimit]`
    pub throttle_reasons: Vec<ThrottleReason>,
}

/// One entry of a build-over-build trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildTrendPoint {
    pub build: &'static str,
    pub avg_fps: f64,
}

/// Build-over-build trend for one (game, SKU) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildTrendResult {
    /// Up to 4 consecutive builds ending at the requested one, oldest first
    pub points: Vec<BuildTrendPoint>,
    /// FPS difference between the final two points; 0 with fewer than 2
    pub delta: f64,
    /// `delta` as a percentage of the previous build's FPS
    pub delta_percent: f64,
}

/// Pure metrics engine over an injected read-only catalog.
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine {
    catalog: Catalog,
}

impl MetricsEngine {
    /// Build an engine over a catalog. Panics if the catalog is
    /// misconfigured; that is a defect in the static reference data.
    pub fn new(catalog: Catalog) -> Self {
        catalog.validate();
        MetricsEngine { catalog }
    }

    /// The catalog this engine reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Compute the summary snapshot for a (game, SKU, build) key.
    ///
    /// The base FPS draw lands in [80, 180), scaled by the SKU tier and
    /// the build-progression bonus; every other field is a fixed
    /// transform of that value plus its own decorrelated noise draw.
    /// Paired families satisfy min <= avg <= max by construction.
    pub fn game_metrics(&self, game_id: u32, sku_id: &str, build_id: &str) -> GameMetricsSnapshot {
        let s = derive_seed(game_id, sku_id, build_id) as f64;
        let step = self.catalog.build_step(build_id);

        let avg_fps =
            (80.0 + 100.0 * unit(s)) * sku_multiplier(sku_id) * build_bonus(sku_id, game_id, step);

        let one_percent_low_fps = avg_fps * (0.70 + 0.08 * unit(s + 1.0));
        let point_one_percent_low_fps = one_percent_low_fps * (0.82 + 0.08 * unit(s + 2.0));
        let min_fps = point_one_percent_low_fps * (0.90 + 0.05 * unit(s + 3.0));
        let max_fps = avg_fps * (1.25 + 0.15 * unit(s + 4.0));

        let p_core_mhz_avg = 4850.0 + 300.0 * unit(s + 7.0);
        let e_core_mhz_avg = 3650.0 + 300.0 * unit(s + 10.0);
        let package_temp_avg_c = 62.0 + 18.0 * unit(s + 13.0);
        let power_draw_avg_w = 60.0 + 45.0 * unit(s + 15.0);

        let power_limited = unit(s + 17.0) > 0.75;
        let mut throttle_reasons = Vec::new();
        if power_limited {
            if unit(s + 18.0) > 0.85 {
                throttle_reasons.push(ThrottleReason::Thermal);
            }
            throttle_reasons.push(ThrottleReason::PowerLimit);
        }

        GameMetricsSnapshot {
            avg_fps,
            one_percent_low_fps,
            point_one_percent_low_fps,
            min_fps,
            max_fps,
            avg_cpu_util_percent: 35.0 + 40.0 * unit(s + 5.0),
            avg_gpu_util_percent: 55.0 + 40.0 * unit(s + 6.0),
            p_core_mhz_min: p_core_mhz_avg - 300.0 - 400.0 * unit(s + 9.0),
            p_core_mhz_avg,
            p_core_mhz_max: p_core_mhz_avg + 100.0 + 150.0 * unit(s + 8.0),
            e_core_mhz_min: e_core_mhz_avg - 250.0 - 350.0 * unit(s + 12.0),
            e_core_mhz_avg,
            e_core_mhz_max: e_core_mhz_avg + 100.0 + 150.0 * unit(s + 11.0),
            package_temp_avg_c,
            package_temp_max_c: package_temp_avg_c + 4.0 + 8.0 * unit(s + 14.0),
            power_draw_avg_w,
            power_draw_max_w: power_draw_avg_w + 12.0 + 20.0 * unit(s + 16.0),
            throttle_reasons,
        }
    }

    /// Mean `avg_fps` across the whole game catalog for one (SKU, build)
    /// pair. Panics on an empty catalog; that is a configuration defect,
    /// not a runtime condition.
    pub fn performance_index(&self, sku_id: &str, build_id: &str) -> f64 {
        assert!(
            !self.catalog.games.is_empty(),
            "performance index over an empty game catalog"
        );

        let total: f64 = self
            .catalog
            .games
            .iter()
            .map(|game| self.game_metrics(game.id, sku_id, build_id).avg_fps)
            .sum();

        total / self.catalog.games.len() as f64
    }

    /// Build-over-build trend ending at `current_build`.
    ///
    /// Takes the current build plus up to 3 builds after it in the
    /// newest-first catalog (i.e. the 3 preceding it chronologically) and
    /// returns them oldest first. On the oldest cataloged build the
    /// window is a single point and both deltas are 0 — that is the
    /// defined answer, not an error. Unknown labels resolve to the
    /// newest build.
    pub fn build_trend(&self, game_id: u32, sku_id: &str, current_build: &str) -> BuildTrendResult {
        let position = self.catalog.build_position(current_build).unwrap_or_else(|| {
            tracing::debug!(current_build, "unknown build label, trending from newest");
            0
        });

        let window_end = (position + 4).min(self.catalog.builds.len());
        let mut points: Vec<BuildTrendPoint> = self.catalog.builds[position..window_end]
            .iter()
            .map(|&build| BuildTrendPoint {
                build,
                avg_fps: self.game_metrics(game_id, sku_id, build).avg_fps,
            })
            .collect();
        points.reverse();

        let (delta, delta_percent) = match points.len() {
            0 | 1 => (0.0, 0.0),
            n => {
                let previous = points[n - 2].avg_fps;
                let delta = points[n - 1].avg_fps - previous;
                (delta, delta / previous * 100.0)
            }
        };

        BuildTrendResult {
            points,
            delta,
            delta_percent,
        }
    }

    /// Per-core frequency series for a SKU, resolving its topology.
    pub fn core_frequency_series(&self, sku_id: &str, seed: i64) -> frequency::CoreFrequencySeries {
        frequency::series(self.topology_for(sku_id), seed)
    }

    /// Per-core temperature series for a SKU, resolving its topology.
    pub fn core_temperature_series(
        &self,
        sku_id: &str,
        seed: i64,
    ) -> temperature::CoreTemperatureSeries {
        temperature::series(self.topology_for(sku_id), seed)
    }

    /// Topology of a SKU, defaulting to 8 total cores for unknown ids so
    /// a chart can always render.
    fn topology_for(&self, sku_id: &str) -> CoreTopology {
        match self.catalog.find_sku(sku_id) {
            Some(sku) => sku.topology,
            None => {
                tracing::debug!(sku_id, "unknown SKU, defaulting to 8-core topology");
                CoreTopology::from_total(8)
            }
        }
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        MetricsEngine::new(crate::catalog::BUILTIN)
    }
}

impl std::fmt::Display for GameMetricsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 44;

        writeln!(f, "┌{}┐", "─".repeat(WIDTH))?;
        writeln!(f, "│{:^WIDTH$}│", "GAME METRICS")?;
        writeln!(f, "├{}┤", "─".repeat(WIDTH))?;
        writeln!(f, "│ Average FPS:     {:>8.1}              │", self.avg_fps)?;
        writeln!(
            f,
            "│ 1% Low FPS:      {:>8.1}              │",
            self.one_percent_low_fps
        )?;
        writeln!(
            f,
            "│ 0.1% Low FPS:    {:>8.1}              │",
            self.point_one_percent_low_fps
        )?;
        writeln!(f, "│ Min FPS:         {:>8.1}              │", self.min_fps)?;
        writeln!(f, "│ Max FPS:         {:>8.1}              │", self.max_fps)?;
        writeln!(f, "├{}┤", "─".repeat(WIDTH))?;
        writeln!(
            f,
            "│ CPU / GPU Util:  {:>5.1}% / {:>5.1}%        │",
            self.avg_cpu_util_percent, self.avg_gpu_util_percent
        )?;
        writeln!(
            f,
            "│ P-core MHz:   {:>6.0} / {:>6.0} / {:>6.0}   │",
            self.p_core_mhz_min, self.p_core_mhz_avg, self.p_core_mhz_max
        )?;
        writeln!(
            f,
            "│ E-core MHz:   {:>6.0} / {:>6.0} / {:>6.0}   │",
            self.e_core_mhz_min, self.e_core_mhz_avg, self.e_core_mhz_max
        )?;
        writeln!(
            f,
            "│ Package Temp:  {:>5.1}°C avg, {:>5.1}°C max │",
            self.package_temp_avg_c, self.package_temp_max_c
        )?;
        writeln!(
            f,
            "│ Power Draw:    {:>5.1}W avg, {:>6.1}W max  │",
            self.power_draw_avg_w, self.power_draw_max_w
        )?;

        let throttling = if self.throttle_reasons.is_empty() {
            "none".to_string()
        } else {
            self.throttle_reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(f, "│ Throttling:      {:<WIDTH$}│", throttling)?;
        writeln!(f, "└{}┘", "─".repeat(WIDTH))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricsEngine, ThrottleReason};
    use crate::catalog::BUILTIN;

    fn engine() -> MetricsEngine {
        MetricsEngine::default()
    }

    #[test]
    fn snapshots_are_deterministic() {
        let engine = engine();
        let first = engine.game_metrics(1, "arl-s", "2025.48");
        let second = engine.game_metrics(1, "arl-s", "2025.48");
        assert_eq!(first, second);
    }

    #[test]
    fn paired_families_are_ordered() {
        let engine = engine();
        for game in BUILTIN.games {
            for build in BUILTIN.builds {
                let snapshot = engine.game_metrics(game.id, "arl-hx", build);
                assert!(snapshot.min_fps <= snapshot.avg_fps);
                assert!(snapshot.avg_fps <= snapshot.max_fps);
                assert!(snapshot.point_one_percent_low_fps <= snapshot.one_percent_low_fps);
                assert!(snapshot.one_percent_low_fps <= snapshot.avg_fps);
                assert!(snapshot.p_core_mhz_min <= snapshot.p_core_mhz_avg);
                assert!(snapshot.p_core_mhz_avg <= snapshot.p_core_mhz_max);
                assert!(snapshot.e_core_mhz_min <= snapshot.e_core_mhz_avg);
                assert!(snapshot.e_core_mhz_avg <= snapshot.e_core_mhz_max);
                assert!(snapshot.package_temp_avg_c <= snapshot.package_temp_max_c);
                assert!(snapshot.power_draw_avg_w <= snapshot.power_draw_max_w);
            }
        }
    }

    #[test]
    fn throttle_set_takes_one_of_three_shapes() {
        let engine = engine();
        for game in BUILTIN.games {
            for build in BUILTIN.builds {
                let reasons = engine.game_metrics(game.id, "ptl-h", build).throttle_reasons;
                let allowed = reasons.is_empty()
                    || reasons == vec![ThrottleReason::PowerLimit]
                    || reasons == vec![ThrottleReason::Thermal, ThrottleReason::PowerLimit];
                assert!(allowed, "unexpected throttle set {reasons:?}");
            }
        }
    }

    #[test]
    fn desktop_flagship_outscores_ultra_mobile_on_every_build() {
        let engine = engine();
        for build in BUILTIN.builds {
            let desktop = engine.performance_index("arl-s", build);
            let ultra_mobile = engine.performance_index("ptl-u", build);
            assert!(
                desktop > ultra_mobile,
                "build {build}: {desktop} vs {ultra_mobile}"
            );
        }
    }

    #[test]
    fn performance_index_is_the_catalog_mean() {
        let engine = engine();
        let mean: f64 = BUILTIN
            .games
            .iter()
            .map(|g| engine.game_metrics(g.id, "lnl-v", "2025.44").avg_fps)
            .sum::<f64>()
            / BUILTIN.games.len() as f64;
        let index = engine.performance_index("lnl-v", "2025.44");
        assert!((index - mean).abs() < 1e-9);
    }

    #[test]
    fn trend_window_is_chronological_and_bounded() {
        let engine = engine();
        let trend = engine.build_trend(1, "arl-s", "2025.48");
        assert_eq!(trend.points.len(), 4);
        assert_eq!(trend.points.last().map(|p| p.build), Some("2025.48"));
        // oldest first
        assert_eq!(trend.points[0].build, "2025.42");

        let previous = trend.points[2].avg_fps;
        let expected_delta = trend.points[3].avg_fps - previous;
        assert!((trend.delta - expected_delta).abs() < 1e-9);
        assert!((trend.delta_percent - expected_delta / previous * 100.0).abs() < 1e-9);
    }

    #[test]
    fn trend_on_the_oldest_build_is_a_single_flat_point() {
        let engine = engine();
        let trend = engine.build_trend(1, "arl-s", "2025.40");
        assert_eq!(trend.points.len(), 1);
        assert_eq!(trend.delta, 0.0);
        assert_eq!(trend.delta_percent, 0.0);
    }

    #[test]
    fn trend_points_agree_with_snapshots() {
        let engine = engine();
        let trend = engine.build_trend(5, "arl-hx", "2025.46");
        for point in &trend.points {
            let snapshot = engine.game_metrics(5, "arl-hx", point.build);
            assert_eq!(point.avg_fps, snapshot.avg_fps);
        }
    }

    #[test]
    fn unknown_sku_series_render_with_default_topology() {
        let engine = engine();
        let freq = engine.core_frequency_series("xyz-9", 42);
        assert_eq!(freq.performance_cores + freq.efficiency_cores, 8);

        let temps = engine.core_temperature_series("xyz-9", 42);
        assert_eq!(temps.cores, 8);
    }

    #[test]
    fn known_sku_series_use_catalog_topology() {
        let engine = engine();
        let freq = engine.core_frequency_series("arl-s", 42);
        assert_eq!(freq.performance_cores, 8);
        assert_eq!(freq.efficiency_cores, 16);
    }

    #[test]
    fn display_renders_a_closed_table() {
        let snapshot = engine().game_metrics(1, "arl-s", "2025.48");
        let rendered = snapshot.to_string();
        assert!(rendered.starts_with('┌'));
        assert!(rendered.trim_end().ends_with('┘'));
        assert!(rendered.contains("Average FPS"));
    }
}
