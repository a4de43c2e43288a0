//! Reference catalogs module
//!
//! Read-only program/SKU, game, and build catalogs, wrapped in a
//! [`Catalog`] repository that gets injected into the metrics engine at
//! construction. Populated once at startup, never mutated.

mod builds;
mod games;
mod programs;

pub use builds::BUILDS;
pub use games::{Game, Genre, GAMES};
pub use programs::{CoreTopology, Program, Sku, PROGRAMS};

/// Read-only repository over the reference catalogs.
///
/// The engine never scans free-floating module state; it goes through an
/// injected `Catalog` so tests can substitute a smaller one.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub programs: &'static [Program],
    pub games: &'static [Game],
    /// Build labels, newest first
    pub builds: &'static [&'static str],
}

/// The built-in catalog.
pub static BUILTIN: Catalog = Catalog {
    programs: PROGRAMS,
    games: GAMES,
    builds: BUILDS,
};

impl Catalog {
    /// Panic if the static reference data is unusable. Misconfigured
    /// catalogs are a programming error, not a runtime condition; surface
    /// them loudly at startup instead of substituting data silently.
    pub fn validate(&self) {
        assert!(!self.games.is_empty(), "game catalog is empty");
        assert!(!self.builds.is_empty(), "build catalog is empty");
        assert!(!self.programs.is_empty(), "program catalog is empty");
        for program in self.programs {
            assert!(
                !program.skus.is_empty(),
                "program '{}' has no SKUs",
                program.id
            );
            for sku in program.skus {
                assert!(
                    sku.topology.total() > 0,
                    "SKU '{}' has an empty topology",
                    sku.id
                );
            }
        }
    }

    /// Find a SKU by id across all programs.
    pub fn find_sku(&self, sku_id: &str) -> Option<&'static Sku> {
        self.programs
            .iter()
            .flat_map(|p| p.skus.iter())
            .find(|s| s.id == sku_id)
    }

    /// Find a game by id.
    pub fn find_game(&self, game_id: u32) -> Option<&'static Game> {
        self.games.iter().find(|g| g.id == game_id)
    }

    /// Position of a build label in the newest-first catalog.
    pub fn build_position(&self, build_id: &str) -> Option<usize> {
        self.builds.iter().position(|b| *b == build_id)
    }

    /// Zero-based progression step of a build, counting backward from the
    /// newest label: the newest build has the highest step, the oldest
    /// step 0. Unknown labels resolve to step 0.
    pub fn build_step(&self, build_id: &str) -> usize {
        match self.build_position(build_id) {
            Some(position) => self.builds.len() - 1 - position,
            None => {
                tracing::debug!(build_id, "unknown build label, using step 0");
                0
            }
        }
    }
}
