/// Orthographic camera for the sphere display.
///
/// Yaw spins the view around the vertical (z) axis, pitch tilts it up and
/// down. Projection returns screen-plane coordinates in sphere units
/// (right = +x, up = +y) plus a depth along the view direction, used to
/// dim wireframe lines on the far hemisphere.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub yaw: f64,   // radians
    pub pitch: f64, // radians, clamped to +/- PITCH_LIMIT
}

const PITCH_LIMIT: f64 = 89.0 * std::f64::consts::PI / 180.0;

pub const DEFAULT_YAW_DEG: f64 = -60.0;
pub const DEFAULT_PITCH_DEG: f64 = 22.0;

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW_DEG.to_radians(),
            pitch: DEFAULT_PITCH_DEG.to_radians(),
        }
    }
}

impl Camera {
    /// Project a world point onto the screen plane.
    /// Returns (screen_x, screen_y, depth); depth > 0 faces the viewer.
    pub fn project(&self, p: [f64; 3]) -> (f64, f64, f64) {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();

        // Orthonormal view basis: right, up, toward-viewer
        let right = [-sy, cy, 0.0];
        let toward = [cy * cp, sy * cp, sp];
        let up = [-cy * sp, -sy * sp, cp];

        (dot(p, right), dot(p, up), dot(p, toward))
    }

    /// Apply a mouse drag, in radians. Pitch is clamped so the view never
    /// flips over the poles.
    pub fn rotate(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_identity_orientation_axes() {
        let cam = Camera { yaw: 0.0, pitch: 0.0 };

        // +y is screen right, +z is screen up, +x faces the viewer
        let (sx, sy, d) = cam.project([0.0, 1.0, 0.0]);
        assert!((sx - 1.0).abs() < TOL && sy.abs() < TOL && d.abs() < TOL);

        let (sx, sy, d) = cam.project([0.0, 0.0, 1.0]);
        assert!(sx.abs() < TOL && (sy - 1.0).abs() < TOL && d.abs() < TOL);

        let (sx, sy, d) = cam.project([1.0, 0.0, 0.0]);
        assert!(sx.abs() < TOL && sy.abs() < TOL && (d - 1.0).abs() < TOL);
    }

    #[test]
    fn test_projection_preserves_length_for_unit_points() {
        let cam = Camera::default();
        let (sx, sy, d) = cam.project([0.0, 0.0, 1.0]);
        let len = (sx * sx + sy * sy + d * d).sqrt();
        assert!((len - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pitch_clamp_and_reset() {
        let mut cam = Camera::default();
        cam.rotate(0.3, 10.0);
        assert!(cam.pitch <= PITCH_LIMIT + TOL);
        cam.rotate(0.0, -20.0);
        assert!(cam.pitch >= -PITCH_LIMIT - TOL);
        cam.reset();
        assert!((cam.yaw - DEFAULT_YAW_DEG.to_radians()).abs() < TOL);
        assert!((cam.pitch - DEFAULT_PITCH_DEG.to_radians()).abs() < TOL);
    }
}
