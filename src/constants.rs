//! Physical and policy constants of the magnetotail model.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Domain constants

/// Half-thickness of the plasma sheet [R_M].
///
/// Normal-distributed flux rope y-locations are resampled until they fall
/// within this bound, independently of the configured orbit limits.
pub const PLASMA_SHEET_HALF_THICKNESS: fcn = 2.0;

/// First root of the Bessel function J0, the field profile constant of a
/// force-free (Lundquist) flux rope with B(r) = B0 * J(ALPHA * r / R0).
pub const BESSEL_J0_FIRST_ROOT: fcn = 2.4048;

// Policy constants

/// Upper end of the empirical crossing-duration range [min].
pub const CROSSING_DURATION_MAX: fcn = 10.0;

/// Default bounds of the tail region tracked by the occupancy grid [R_M].
pub const TAIL_X_MIN: fcn = -5.0;
pub const TAIL_X_MAX: fcn = 0.0;
pub const TAIL_Y_MIN: fcn = -2.0;
pub const TAIL_Y_MAX: fcn = 2.0;

/// Maximum number of draws a rejection sampling loop may make before
/// failing with a timeout.
pub const MAX_REJECTION_ATTEMPTS: usize = 10_000;
