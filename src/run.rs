//! Orchestration of Monte Carlo batches of plasma sheet crossings.

use crate::{
    constants::{TAIL_X_MAX, TAIL_X_MIN, TAIL_Y_MAX, TAIL_Y_MIN},
    crossing::{Crossing, CrossingConfig},
    error::McResult,
    fluxrope::{Direction, WidthRange},
    geometry::{
        Dim2::{X, Y},
        Point2,
    },
    grid::{GridUpdate, TailGrid},
    sampling::{fmc, DistributionSpec},
};
use rand::Rng;

/// Configuration for a full simulation batch.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Number of independent crossings to simulate.
    pub num_orbits: usize,
    /// Parameters shared by every crossing.
    pub crossing: CrossingConfig,
    /// Bounds of the tail region tracked by the occupancy grid.
    pub tail_x_bounds: (fmc, fmc),
    pub tail_y_bounds: (fmc, fmc),
    /// Occupancy grid bin widths.
    pub delx: fmc,
    pub dely: fmc,
}

impl RunConfig {
    /// Creates a configuration with the given number of orbits and the
    /// default distribution, width and grid parameters.
    pub fn new(num_orbits: usize) -> Self {
        Self {
            num_orbits,
            crossing: CrossingConfig {
                orbit_x: DistributionSpec::Uniform {
                    low: -3.0,
                    high: -1.5,
                },
                orbit_y: DistributionSpec::Uniform {
                    low: -2.0,
                    high: 2.0,
                },
                neutral_line_x: DistributionSpec::Uniform {
                    low: -3.0,
                    high: -1.5,
                },
                neutral_line_y: DistributionSpec::Uniform {
                    low: -2.0,
                    high: 2.0,
                },
                recon_prob: 0.5,
                width_range: WidthRange::new(1.0, 5.0)
                    .expect("Default width range was not valid."),
            },
            tail_x_bounds: (TAIL_X_MIN, TAIL_X_MAX),
            tail_y_bounds: (TAIL_Y_MIN, TAIL_Y_MAX),
            delx: 0.25,
            dely: 0.25,
        }
    }
}

/// Tally of one grid accumulation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridAccumulation {
    /// Number of flux ropes whose extent covered at least one bin.
    pub added: usize,
    /// Number of flux ropes generated outside the tracked region.
    pub outside: usize,
}

/// A batch of independently generated plasma sheet crossings together with
/// the occupancy grid tracking tail coverage.
#[derive(Clone, Debug)]
pub struct Run {
    crossings: Vec<Crossing>,
    grid: TailGrid,
}

impl Run {
    /// Generates a new batch of `num_orbits` independent crossings.
    ///
    /// Fails fast on the first malformed configuration parameter, aborting
    /// the whole batch.
    pub fn generate<R: Rng>(config: &RunConfig, rng: &mut R) -> McResult<Self> {
        config.crossing.validate()?;
        let grid = TailGrid::new(
            config.tail_x_bounds,
            config.tail_y_bounds,
            config.delx,
            config.dely,
        )?;
        let crossings = (0..config.num_orbits)
            .map(|index| Crossing::generate(index, &config.crossing, rng))
            .collect::<McResult<Vec<_>>>()?;
        Ok(Self { crossings, grid })
    }

    /// Returns the generated crossings in index order.
    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Returns the tail occupancy grid.
    pub fn grid(&self) -> &TailGrid {
        &self.grid
    }

    /// Returns the total number of flux ropes generated across all crossings.
    pub fn total_flux_rope_count(&self) -> usize {
        self.crossings.iter().map(Crossing::flux_rope_count).sum()
    }

    /// Returns the center locations of every generated flux rope, ordered by
    /// crossing index and within-crossing order.
    pub fn flux_rope_locations(&self) -> Vec<Point2<fmc>> {
        self.crossings
            .iter()
            .flat_map(|crossing| crossing.flux_rope_locations())
            .collect()
    }

    /// Feeds every generated flux rope's center and width into the occupancy
    /// grid and reports how many ropes were added or fell outside the
    /// tracked region.
    ///
    /// This performs one full accumulation pass; calling it a second time
    /// would double-count every rope.
    pub fn accumulate_grid(&mut self) -> GridAccumulation {
        let Self {
            ref crossings,
            ref mut grid,
        } = *self;
        let mut tally = GridAccumulation::default();
        for crossing in crossings {
            for rope in crossing.flux_ropes() {
                match grid.add_flux_rope(rope.location(), rope.width()) {
                    GridUpdate::Covered { .. } => tally.added += 1,
                    GridUpdate::OutsideRegion => tally.outside += 1,
                }
            }
        }
        tally
    }

    /// Returns one row per generated flux rope, for downstream tabulation.
    pub fn flux_rope_rows(&self) -> Vec<FluxRopeRow> {
        self.crossings
            .iter()
            .flat_map(|crossing| {
                crossing.flux_ropes().iter().map(|rope| FluxRopeRow {
                    orbit_number: crossing.index(),
                    spacecraft_x: crossing.spacecraft_location()[X],
                    spacecraft_y: crossing.spacecraft_location()[Y],
                    reconnection_x: rope.location()[X],
                    reconnection_y: rope.location()[Y],
                    width: rope.width(),
                    detected: rope.is_detected(),
                    direction: rope.direction(),
                })
            })
            .collect()
    }

    /// Returns one row per crossing, for downstream tabulation.
    pub fn orbit_rows(&self) -> Vec<OrbitRow> {
        self.crossings
            .iter()
            .map(|crossing| OrbitRow {
                orbit_number: crossing.index(),
                spacecraft_x: crossing.spacecraft_location()[X],
                spacecraft_y: crossing.spacecraft_location()[Y],
                flux_rope_count: crossing.flux_rope_count(),
                duration: crossing.duration(),
            })
            .collect()
    }
}

/// One row of the flux rope table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluxRopeRow {
    pub orbit_number: usize,
    pub spacecraft_x: fmc,
    pub spacecraft_y: fmc,
    pub reconnection_x: fmc,
    pub reconnection_y: fmc,
    pub width: fmc,
    pub detected: bool,
    pub direction: Direction,
}

/// One row of the orbit table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitRow {
    pub orbit_number: usize,
    pub spacecraft_x: fmc,
    pub spacecraft_y: fmc,
    pub flux_rope_count: usize,
    pub duration: fmc,
}
