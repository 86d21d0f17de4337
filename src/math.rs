//! Math utilities.

/// Number of terms retained in the ascending Bessel series, enough for full
/// double precision on arguments up to the first few roots.
const BESSEL_SERIES_TERMS: usize = 20;

/// Evaluates the Bessel function of the first kind J0(x) using the ascending
/// power series.
pub fn bessel_j0(x: f64) -> f64 {
    let quarter_x_squared = 0.25 * x * x;
    let mut term = 1.0;
    let mut sum = term;
    for m in 1..=BESSEL_SERIES_TERMS {
        term *= -quarter_x_squared / ((m * m) as f64);
        sum += term;
    }
    sum
}

/// Evaluates the Bessel function of the first kind J1(x) using the ascending
/// power series.
pub fn bessel_j1(x: f64) -> f64 {
    let quarter_x_squared = 0.25 * x * x;
    let mut term = 0.5 * x;
    let mut sum = term;
    for m in 1..=BESSEL_SERIES_TERMS {
        term *= -quarter_x_squared / ((m * (m + 1)) as f64);
        sum += term;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BESSEL_J0_FIRST_ROOT;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bessel_j0_matches_reference_values() {
        assert_abs_diff_eq!(bessel_j0(0.0), 1.0);
        assert_abs_diff_eq!(bessel_j0(1.0), 0.765_197_686_557_966_6, epsilon = 1e-12);
        assert_abs_diff_eq!(bessel_j0(2.0), 0.223_890_779_141_235_7, epsilon = 1e-12);
        // The hard-coded root constant is truncated, so J0 is only near zero.
        assert_abs_diff_eq!(bessel_j0(BESSEL_J0_FIRST_ROOT), 0.0, epsilon = 2e-4);
    }

    #[test]
    fn bessel_j1_matches_reference_values() {
        assert_abs_diff_eq!(bessel_j1(0.0), 0.0);
        assert_abs_diff_eq!(bessel_j1(1.0), 0.440_050_585_744_933_5, epsilon = 1e-12);
        assert_abs_diff_eq!(bessel_j1(2.0), 0.576_724_807_756_873_4, epsilon = 1e-12);
    }
}
