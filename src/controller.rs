use num_complex::Complex64;

use crate::data::{clamp_theta, wrap_phase, QubitState, StateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The four amplitude sliders are the source of truth.
    Amplitude,
    /// The theta/phi controls are the source of truth.
    Angle,
}

/// One render hand-off: the normalized amplitudes plus the angles they
/// were derived from (or that they were derived from, in Angle mode).
/// Angles are radians.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame {
    pub state: QubitState,
    pub theta: f64,
    pub phi: f64,
}

impl RenderFrame {
    fn from_state(state: QubitState) -> Self {
        let (theta, phi) = state.to_angles();
        Self { state, theta, phi }
    }
}

/// Mediates between raw widget values and the state math.
///
/// Owns the current input mode and the last frame that reached the
/// renderer. Pure compute: every operation returns the frame to render
/// and leaves side effects (redraws, label updates, widget visibility)
/// to the callback layer, so all of this is unit-testable without FLTK.
pub struct Controller {
    mode: InputMode,
    last_frame: RenderFrame,
}

impl Controller {
    /// Startup state: amplitude mode with alpha = 1/sqrt(2),
    /// beta = -1/2 - i/2 (already normalized).
    pub fn new() -> Self {
        let state = QubitState {
            alpha: Complex64::new(1.0 / 2f64.sqrt(), 0.0),
            beta: Complex64::new(-0.5, -0.5),
        };
        Self {
            mode: InputMode::Amplitude,
            last_frame: RenderFrame::from_state(state),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// The last frame handed to the renderer; always valid.
    pub fn last_frame(&self) -> RenderFrame {
        self.last_frame
    }

    /// Amplitude-mode input event: the four slider values.
    ///
    /// Normalizes the pair and derives the angles so a later mode switch
    /// starts from a current value. A degenerate (0,0) pair is rejected
    /// and `last_frame` is left untouched; the caller skips the render.
    pub fn on_amplitude_input(
        &mut self,
        re_alpha: f64,
        im_alpha: f64,
        re_beta: f64,
        im_beta: f64,
    ) -> Result<RenderFrame, StateError> {
        if self.mode != InputMode::Amplitude {
            return Err(StateError::InactiveMode);
        }
        let state = QubitState::normalized(
            Complex64::new(re_alpha, im_alpha),
            Complex64::new(re_beta, im_beta),
        )?;
        self.last_frame = RenderFrame::from_state(state);
        Ok(self.last_frame)
    }

    /// Angle-mode input event, in degrees as delivered by the widgets.
    ///
    /// The returned frame carries the supplied angles (clamped/wrapped),
    /// not angles re-derived from the amplitudes: re-derivation can
    /// disagree with what the user typed in the last float digits, which
    /// shows up as a distracting flicker in the on-screen readout.
    pub fn on_angle_input(
        &mut self,
        theta_deg: f64,
        phi_deg: f64,
    ) -> Result<RenderFrame, StateError> {
        if self.mode != InputMode::Angle {
            return Err(StateError::InactiveMode);
        }
        let theta = clamp_theta(theta_deg.to_radians());
        let phi = wrap_phase(phi_deg.to_radians());
        let state = QubitState::from_angles(theta, phi);
        self.last_frame = RenderFrame { state, theta, phi };
        Ok(self.last_frame)
    }

    /// Switch the source-of-truth representation.
    ///
    /// On a real transition the counterpart representation is recomputed
    /// from the last-known values so the visualized point does not jump;
    /// the returned frame drives one immediate render and tells the UI
    /// layer which canonical values to load into the now-visible widgets.
    /// Switching to the current mode is a no-op.
    pub fn switch_mode(&mut self, target: InputMode) -> RenderFrame {
        if target == self.mode {
            return self.last_frame;
        }
        self.mode = target;
        match target {
            InputMode::Amplitude => {
                // re-canonicalize: amplitudes from the last-known angles
                let state = QubitState::from_angles(self.last_frame.theta, self.last_frame.phi);
                self.last_frame = RenderFrame {
                    state,
                    theta: self.last_frame.theta,
                    phi: self.last_frame.phi,
                };
            }
            InputMode::Angle => {
                self.last_frame = RenderFrame::from_state(self.last_frame.state);
            }
        }
        self.last_frame
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    fn bloch_distance(a: &RenderFrame, b: &RenderFrame) -> f64 {
        let va = a.state.bloch_vector();
        let vb = b.state.bloch_vector();
        (0..3).map(|i| (va[i] - vb[i]).powi(2)).sum::<f64>().sqrt()
    }

    #[test]
    fn test_startup_frame_is_normalized_amplitude_mode() {
        let ctl = Controller::new();
        assert_eq!(ctl.mode(), InputMode::Amplitude);
        let frame = ctl.last_frame();
        assert!((frame.state.norm() - 1.0).abs() < TOL);
        assert!((frame.theta.to_degrees() - 90.0).abs() < 1e-6);
        assert!((frame.phi.to_degrees() - 225.0).abs() < 1e-6);
    }

    #[test]
    fn test_amplitude_input_normalizes() {
        let mut ctl = Controller::new();
        let frame = ctl.on_amplitude_input(3.0, 0.0, 4.0, 0.0).unwrap();
        assert!((frame.state.norm() - 1.0).abs() < TOL);
        assert!((frame.state.alpha.re - 0.6).abs() < TOL);
        assert!((frame.state.beta.re - 0.8).abs() < TOL);
    }

    #[test]
    fn test_degenerate_input_is_a_no_op() {
        let mut ctl = Controller::new();
        let before = ctl.last_frame();
        let err = ctl.on_amplitude_input(0.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, StateError::DegenerateState));
        // the last rendered frame is retained unchanged
        assert!(bloch_distance(&before, &ctl.last_frame()) < TOL);
    }

    #[test]
    fn test_angle_frame_carries_supplied_angles_exactly() {
        let mut ctl = Controller::new();
        ctl.switch_mode(InputMode::Angle);
        let frame = ctl.on_angle_input(90.0, 45.0).unwrap();
        // supplied values, not a float round-trip through the amplitudes
        assert_eq!(frame.theta, FRAC_PI_2);
        assert_eq!(frame.phi, 45f64.to_radians());
        assert!((frame.state.alpha.re - 0.7071).abs() < 1e-4);
        assert!((frame.state.beta.re - 0.5).abs() < TOL);
        assert!((frame.state.beta.im - 0.5).abs() < TOL);
    }

    #[test]
    fn test_angle_input_clamps_and_wraps() {
        let mut ctl = Controller::new();
        ctl.switch_mode(InputMode::Angle);
        let frame = ctl.on_angle_input(200.0, -90.0).unwrap();
        assert!((frame.theta - std::f64::consts::PI).abs() < TOL);
        assert!((frame.phi.to_degrees() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_for_inactive_mode_is_rejected() {
        let mut ctl = Controller::new();
        let err = ctl.on_angle_input(90.0, 45.0).unwrap_err();
        assert!(matches!(err, StateError::InactiveMode));

        ctl.switch_mode(InputMode::Angle);
        let err = ctl.on_amplitude_input(1.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, StateError::InactiveMode));
    }

    #[test]
    fn test_mode_switch_does_not_move_the_point() {
        let mut ctl = Controller::new();
        ctl.switch_mode(InputMode::Angle);
        let angle_frame = ctl.on_angle_input(90.0, 45.0).unwrap();
        let amp_frame = ctl.switch_mode(InputMode::Amplitude);
        assert!(bloch_distance(&angle_frame, &amp_frame) < TOL);
        // and back again
        let angle_again = ctl.switch_mode(InputMode::Angle);
        assert!(bloch_distance(&amp_frame, &angle_again) < TOL);
    }

    #[test]
    fn test_switch_to_current_mode_is_idempotent() {
        let mut ctl = Controller::new();
        let before = ctl.last_frame();
        let after = ctl.switch_mode(InputMode::Amplitude);
        assert!(bloch_distance(&before, &after) < TOL);
        assert_eq!(ctl.mode(), InputMode::Amplitude);
    }

    #[test]
    fn test_rapid_updates_are_independent() {
        let mut ctl = Controller::new();
        // a burst of slider ticks, each a full recompute from raw values
        for i in 1..=50 {
            let x = i as f64 / 50.0;
            let frame = ctl.on_amplitude_input(x, -x / 2.0, 1.0 - x, 0.3).unwrap();
            assert!((frame.state.norm() - 1.0).abs() < TOL, "tick {i}");
            assert!(frame.theta.is_finite() && frame.phi.is_finite());
        }
    }
}
