pub mod camera;
pub mod qubit_state;

pub use camera::Camera;
pub use qubit_state::{clamp_theta, wrap_phase, QubitState, StateError, NORM_EPSILON};
