//! Synthetic flux rope signatures sampled directly from physical parameter
//! ranges, the sibling sampler to the orbit-oriented Monte Carlo.

use crate::{
    constants::BESSEL_J0_FIRST_ROOT,
    error::{McError, McResult},
    math::{bessel_j0, bessel_j1},
    sampling::fmc,
};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Closed-form magnetic signature quantities of one flux rope encounter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignatureProperties {
    /// Magnitude of the Bz deflection over the encounter [nT].
    pub delta_bz: fmc,
    /// Duration of the signature [s].
    pub duration: fmc,
    /// Peak axial field along the chord [nT].
    pub by_max: fmc,
    /// Peak total field along the chord [nT].
    pub btot_max: fmc,
}

/// Evaluates the signature a spacecraft chord through a force-free
/// (Lundquist) flux rope leaves in the magnetic field.
///
/// The impact parameter is the normalized closest-approach distance of the
/// trajectory to the rope axis and must lie in `[0, 1)`; the core field is
/// in nT, the velocity in km/s and the radius in km.
pub fn signature_properties(
    impact_parameter: fmc,
    core_field: fmc,
    velocity: fmc,
    radius: fmc,
) -> McResult<SignatureProperties> {
    if !(0.0..1.0).contains(&impact_parameter) {
        return Err(McError::InvalidParameter(format!(
            "impact parameter {} is outside [0, 1)",
            impact_parameter
        )));
    }
    if core_field <= 0.0 || velocity <= 0.0 || radius <= 0.0 {
        return Err(McError::InvalidParameter(format!(
            "core field {}, velocity {} and radius {} must be positive",
            core_field, velocity, radius
        )));
    }

    let alpha_max = 2.0 * impact_parameter.acos();
    // Length of the chord in units of the rope radius.
    let a_max = 2.0 * (0.5 * alpha_max).sin();

    let duration = radius * a_max / velocity;

    // Azimuthal field at the rope boundary.
    let b_azimuthal = core_field * bessel_j1(BESSEL_J0_FIRST_ROOT);

    let delta_bz = if impact_parameter == 0.0 {
        // Central crossing: Bz swings from -B_phi to +B_phi.
        2.0 * b_azimuthal
    } else {
        let theta_last = (0.5 * a_max / impact_parameter).atan();
        let theta_first = -theta_last;
        b_azimuthal * (theta_last.sin() - theta_first.sin())
    };

    let by_max = core_field * bessel_j0(impact_parameter * BESSEL_J0_FIRST_ROOT);
    let b_azimuthal_mid = core_field * bessel_j1(impact_parameter * BESSEL_J0_FIRST_ROOT);
    let btot_max = by_max.hypot(b_azimuthal_mid);

    Ok(SignatureProperties {
        delta_bz,
        duration,
        by_max,
        btot_max,
    })
}

/// Uniform physical parameter ranges for the properties-oriented sampler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyRanges {
    /// Impact parameter range (dimensionless, within [0, 1)).
    pub impact_parameter: (fmc, fmc),
    /// Core field range [nT].
    pub core_field: (fmc, fmc),
    /// Traversal velocity range [km/s].
    pub velocity: (fmc, fmc),
    /// Rope radius range [km].
    pub radius: (fmc, fmc),
}

impl Default for PropertyRanges {
    fn default() -> Self {
        Self {
            impact_parameter: (0.0, 0.99),
            core_field: (5.0, 50.0),
            velocity: (250.0, 1000.0),
            radius: (50.0, 1000.0),
        }
    }
}

impl PropertyRanges {
    /// Validates every range, failing on the first malformed one.
    pub fn validate(&self) -> McResult<()> {
        for (name, (low, high)) in [
            ("impact parameter", self.impact_parameter),
            ("core field", self.core_field),
            ("velocity", self.velocity),
            ("radius", self.radius),
        ] {
            if low >= high {
                return Err(McError::InvalidParameter(format!(
                    "{} lower bound {} is not below upper bound {}",
                    name, low, high
                )));
            }
        }
        if self.impact_parameter.0 < 0.0 || self.impact_parameter.1 > 1.0 {
            return Err(McError::InvalidParameter(format!(
                "impact parameter range ({}, {}) is outside [0, 1]",
                self.impact_parameter.0, self.impact_parameter.1
            )));
        }
        if self.core_field.0 <= 0.0 || self.velocity.0 <= 0.0 || self.radius.0 <= 0.0 {
            return Err(McError::InvalidParameter(
                "core field, velocity and radius ranges must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// One synthetic flux rope drawn from physical parameter ranges, with its
/// derived signature and the background sheet statistics.
#[derive(Clone, Copy, Debug)]
pub struct SampledFluxRope {
    pub impact_parameter: fmc,
    pub core_field: fmc,
    pub velocity: fmc,
    pub radius: fmc,
    /// Derived magnetic signature of the encounter.
    pub properties: SignatureProperties,
    /// Standard deviation of Bz in the surrounding plasma sheet [nT].
    pub sigma_bz: fmc,
    /// Mean By in the surrounding plasma sheet [nT].
    pub mean_by: fmc,
    /// Mean total field in the surrounding plasma sheet [nT].
    pub mean_btot: fmc,
}

/// Generator for ensembles of synthetic flux rope signatures.
#[derive(Clone, Debug)]
pub struct PropertyEnsemble {
    samples: Vec<SampledFluxRope>,
}

impl PropertyEnsemble {
    /// Generates `number` synthetic flux ropes from the given ranges.
    pub fn generate<R: Rng>(
        number: usize,
        ranges: &PropertyRanges,
        rng: &mut R,
    ) -> McResult<Self> {
        ranges.validate()?;

        // Stand-in for measured current sheet statistics.
        let background_field = Normal::new(0.0, 20.0)
            .expect("Background field standard deviation was not positive.");

        let samples = (0..number)
            .map(|_| {
                let impact_parameter =
                    rng.gen_range(ranges.impact_parameter.0..ranges.impact_parameter.1);
                let core_field = rng.gen_range(ranges.core_field.0..ranges.core_field.1);
                let velocity = rng.gen_range(ranges.velocity.0..ranges.velocity.1);
                let radius = rng.gen_range(ranges.radius.0..ranges.radius.1);

                let properties =
                    signature_properties(impact_parameter, core_field, velocity, radius)?;

                Ok(SampledFluxRope {
                    impact_parameter,
                    core_field,
                    velocity,
                    radius,
                    properties,
                    sigma_bz: background_field.sample(rng),
                    mean_by: background_field.sample(rng),
                    mean_btot: rng.gen_range(10.0..80.0),
                })
            })
            .collect::<McResult<Vec<_>>>()?;

        Ok(Self { samples })
    }

    /// Returns the generated samples.
    pub fn samples(&self) -> &[SampledFluxRope] {
        &self.samples
    }

    /// Returns the number of generated samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the ensemble is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
