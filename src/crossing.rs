//! Individual spacecraft crossings of the plasma sheet.

use crate::{
    constants::CROSSING_DURATION_MAX,
    error::{McError, McResult},
    fluxrope::{FluxRope, WidthRange},
    geometry::Point2,
    sampling::{fmc, DistributionSpec},
};
use rand::Rng;

/// Configuration shared by every crossing of a simulation batch.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossingConfig {
    /// Distribution of the spacecraft x-location.
    pub orbit_x: DistributionSpec,
    /// Distribution of the spacecraft y-location.
    pub orbit_y: DistributionSpec,
    /// Distribution of the neutral line (flux rope center) x-location.
    pub neutral_line_x: DistributionSpec,
    /// Distribution of the neutral line (flux rope center) y-location.
    pub neutral_line_y: DistributionSpec,
    /// Probability that reconnection occurs during a passage.
    pub recon_prob: fmc,
    /// Bounds for the cross-tail width of generated flux ropes.
    pub width_range: WidthRange,
}

impl CrossingConfig {
    /// Validates every parameter, failing on the first malformed one.
    pub fn validate(&self) -> McResult<()> {
        self.orbit_x.validate()?;
        self.orbit_y.validate()?;
        self.neutral_line_x.validate()?;
        self.neutral_line_y.validate()?;
        if !(0.0..=1.0).contains(&self.recon_prob) {
            return Err(McError::InvalidParameter(format!(
                "reconnection probability {} is outside [0, 1]",
                self.recon_prob
            )));
        }
        Ok(())
    }
}

/// One simulated traversal of the plasma sheet, spawning at most one flux
/// rope under the current reconnection policy.
#[derive(Clone, Debug)]
pub struct Crossing {
    index: usize,
    spacecraft_location: Point2<fmc>,
    duration: fmc,
    flux_ropes: Vec<FluxRope>,
}

impl Crossing {
    /// Generates a new crossing with the given configuration.
    ///
    /// The spacecraft location is sampled without rejection; a Bernoulli draw
    /// with the configured reconnection probability then decides whether one
    /// flux rope is generated near this crossing's spacecraft location.
    pub fn generate<R: Rng>(index: usize, config: &CrossingConfig, rng: &mut R) -> McResult<Self> {
        config.validate()?;

        let duration = rng.gen_range(0.0..CROSSING_DURATION_MAX);

        let spacecraft_location =
            Point2::new(config.orbit_x.sample(rng), config.orbit_y.sample(rng));

        let flux_ropes = if rng.gen_bool(config.recon_prob) {
            vec![FluxRope::generate(
                0,
                &config.neutral_line_x,
                &config.neutral_line_y,
                &config.width_range,
                &spacecraft_location,
                rng,
            )?]
        } else {
            Vec::new()
        };

        Ok(Self {
            index,
            spacecraft_location,
            duration,
            flux_ropes,
        })
    }

    /// Returns the index of the crossing within its batch.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the location of the spacecraft during the crossing.
    pub fn spacecraft_location(&self) -> &Point2<fmc> {
        &self.spacecraft_location
    }

    /// Returns the duration of the crossing [min].
    pub fn duration(&self) -> fmc {
        self.duration
    }

    /// Returns the flux ropes generated during the crossing.
    pub fn flux_ropes(&self) -> &[FluxRope] {
        &self.flux_ropes
    }

    /// Returns the number of flux ropes generated during the crossing.
    pub fn flux_rope_count(&self) -> usize {
        self.flux_ropes.len()
    }

    /// Returns the center locations of the generated flux ropes.
    pub fn flux_rope_locations(&self) -> Vec<Point2<fmc>> {
        self.flux_ropes
            .iter()
            .map(|rope| *rope.location())
            .collect()
    }
}
