use std::f64::consts::{PI, TAU};

use num_complex::Complex64;
use thiserror::Error;

/// Norms below this are treated as degenerate (division by zero).
pub const NORM_EPSILON: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("degenerate state: |alpha|^2 + |beta|^2 is zero, cannot normalize")]
    DegenerateState,

    #[error("not a real number: '{0}'")]
    InvalidNumericInput(String),

    #[error("input event for a mode that is not active")]
    InactiveMode,
}

/// A normalized pure qubit state |psi> = alpha|0> + beta|1>.
///
/// Construction goes through `normalized`, so `|alpha|^2 + |beta|^2 = 1`
/// holds (up to float tolerance) for every value of this type. Global
/// phase is not fixed here; `from_angles` produces the canonical
/// representative with alpha real and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitState {
    pub alpha: Complex64,
    pub beta: Complex64,
}

impl QubitState {
    /// Normalize an arbitrary amplitude pair.
    ///
    /// Fails with `DegenerateState` when the norm is below `NORM_EPSILON`;
    /// callers must treat that as a no-op and keep their last good state.
    pub fn normalized(alpha: Complex64, beta: Complex64) -> Result<Self, StateError> {
        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if norm < NORM_EPSILON {
            return Err(StateError::DegenerateState);
        }
        Ok(Self {
            alpha: alpha / norm,
            beta: beta / norm,
        })
    }

    /// Build the canonical state for Bloch angles (radians).
    ///
    /// alpha = cos(theta/2) is real and non-negative; the free global
    /// phase is spent making it so. Exact inverse of `to_angles` up to
    /// that convention.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let half = theta / 2.0;
        Self {
            alpha: Complex64::new(half.cos(), 0.0),
            beta: Complex64::from_polar(half.sin(), phi),
        }
    }

    /// Bloch angles (theta in [0, pi], phi in [0, 2*pi)) of this state.
    ///
    /// phi = arg(beta) - arg(alpha), which is independent of global phase.
    /// When alpha = 0 its argument is undefined; by convention arg(alpha)
    /// is taken as 0 there, so phi degenerates to arg(beta). (atan2(0, 0)
    /// already yields 0, so no special case is needed.)
    pub fn to_angles(&self) -> (f64, f64) {
        // |alpha| can exceed 1 by a float hair after normalization
        let theta = 2.0 * self.alpha.norm().clamp(0.0, 1.0).acos();
        let phi = wrap_phase(self.beta.arg() - self.alpha.arg());
        (theta, phi)
    }

    /// Cartesian Bloch vector via Pauli expectation values:
    /// x = 2*Re(conj(alpha)*beta), y = 2*Im(conj(alpha)*beta),
    /// z = |alpha|^2 - |beta|^2.
    pub fn bloch_vector(&self) -> [f64; 3] {
        let cross = self.alpha.conj() * self.beta;
        [
            2.0 * cross.re,
            2.0 * cross.im,
            self.alpha.norm_sqr() - self.beta.norm_sqr(),
        ]
    }

    pub fn norm(&self) -> f64 {
        (self.alpha.norm_sqr() + self.beta.norm_sqr()).sqrt()
    }
}

/// Wrap an angle into the canonical [0, 2*pi) range.
pub fn wrap_phase(phi: f64) -> f64 {
    let wrapped = phi.rem_euclid(TAU);
    // rem_euclid can return TAU itself for inputs a hair below 0
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Clamp a polar angle into [0, pi].
pub fn clamp_theta(theta: f64) -> f64 {
    theta.clamp(0.0, PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_normalized_has_unit_norm() {
        let cases = [
            (c(3.0, 0.0), c(4.0, 0.0)),
            (c(0.1, -0.7), c(-0.3, 0.2)),
            (c(0.0, 0.0), c(1e-3, 0.0)),
            (c(-5.0, 5.0), c(5.0, -5.0)),
        ];
        for (a, b) in cases {
            let state = QubitState::normalized(a, b).unwrap();
            assert!((state.norm() - 1.0).abs() < TOL, "norm for {a} {b}");
        }
    }

    #[test]
    fn test_degenerate_pair_is_rejected() {
        let err = QubitState::normalized(c(0.0, 0.0), c(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, StateError::DegenerateState));

        // below epsilon also counts as degenerate
        let err = QubitState::normalized(c(1e-13, 0.0), c(0.0, 1e-14)).unwrap_err();
        assert!(matches!(err, StateError::DegenerateState));
    }

    #[test]
    fn test_angle_roundtrip_over_canonical_ranges() {
        for ti in 0..=12 {
            let theta = PI * ti as f64 / 12.0;
            for pi_i in 0..24 {
                let phi = TAU * pi_i as f64 / 24.0;
                let state = QubitState::from_angles(theta, phi);
                let (t2, p2) = state.to_angles();
                assert!((t2 - theta).abs() < 1e-6, "theta {theta} -> {t2}");
                // phi is meaningless at the poles where sin(theta/2) or
                // cos(theta/2) vanishes
                if theta > 1e-9 && theta < PI - 1e-9 {
                    let mut dp = (p2 - phi).abs();
                    if dp > PI {
                        dp = TAU - dp;
                    }
                    assert!(dp < 1e-6, "phi {phi} -> {p2} at theta {theta}");
                }
            }
        }
    }

    #[test]
    fn test_amplitude_roundtrip_up_to_global_phase() {
        // the startup example: alpha = 1/sqrt(2), beta = -1/2 - i/2
        let a = c(1.0 / 2f64.sqrt(), 0.0);
        let b = c(-0.5, -0.5);
        let state = QubitState::normalized(a, b).unwrap();
        assert!((state.beta.norm_sqr() - 0.5).abs() < TOL);

        let (theta, phi) = state.to_angles();
        assert!((theta.to_degrees() - 90.0).abs() < 1e-6);
        assert!((phi.to_degrees() - 225.0).abs() < 1e-6);

        // reconstructing from the angles reproduces the same physical
        // point even though the global phase differs
        let rebuilt = QubitState::from_angles(theta, phi);
        let v1 = state.bloch_vector();
        let v2 = rebuilt.bloch_vector();
        for i in 0..3 {
            assert!((v1[i] - v2[i]).abs() < TOL);
        }
    }

    #[test]
    fn test_from_angles_example_values() {
        // theta = 90 deg, phi = 45 deg
        let state = QubitState::from_angles(FRAC_PI_2, 45f64.to_radians());
        assert!((state.alpha.re - 0.7071).abs() < 1e-4);
        assert!(state.alpha.im.abs() < TOL);
        assert!((state.beta.re - 0.5).abs() < 1e-9);
        assert!((state.beta.im - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_phi_convention_when_alpha_is_zero() {
        // |1> with a phase on beta: phi must come from beta alone, not NaN
        let state = QubitState::normalized(c(0.0, 0.0), c(0.0, -1.0)).unwrap();
        let (theta, phi) = state.to_angles();
        assert!((theta - PI).abs() < TOL);
        assert!(phi.is_finite());
        assert!((phi - 3.0 * FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn test_phi_is_global_phase_free() {
        let base = QubitState::normalized(c(0.6, 0.0), c(0.0, 0.8)).unwrap();
        let rot = Complex64::from_polar(1.0, 1.234);
        let phased = QubitState::normalized(base.alpha * rot, base.beta * rot).unwrap();
        let (t1, p1) = base.to_angles();
        let (t2, p2) = phased.to_angles();
        assert!((t1 - t2).abs() < TOL);
        assert!((p1 - p2).abs() < TOL);
    }

    #[test]
    fn test_bloch_vector_special_states() {
        // |0> -> north pole
        let zero = QubitState::normalized(c(1.0, 0.0), c(0.0, 0.0)).unwrap();
        let v = zero.bloch_vector();
        assert!((v[2] - 1.0).abs() < TOL && v[0].abs() < TOL && v[1].abs() < TOL);

        // |+> -> +x
        let plus = QubitState::normalized(c(1.0, 0.0), c(1.0, 0.0)).unwrap();
        let v = plus.bloch_vector();
        assert!((v[0] - 1.0).abs() < TOL && v[2].abs() < TOL);

        // |+i> -> +y
        let plus_i = QubitState::normalized(c(1.0, 0.0), c(0.0, 1.0)).unwrap();
        let v = plus_i.bloch_vector();
        assert!((v[1] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_wrap_phase() {
        assert!((wrap_phase(0.0) - 0.0).abs() < TOL);
        assert!((wrap_phase(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < TOL);
        assert!((wrap_phase(TAU + 0.25) - 0.25).abs() < TOL);
        assert!(wrap_phase(-1e-18) < TAU);
    }
}
