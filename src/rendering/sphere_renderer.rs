use fltk::draw;
use fltk::enums::{Color, Font};

use crate::controller::RenderFrame;
use crate::data::Camera;
use crate::ui::theme;

const CIRCLE_SEGMENTS: usize = 96;
const MERIDIAN_STEP_DEG: usize = 30;
const LATITUDE_RINGS_DEG: [f64; 4] = [-60.0, -30.0, 30.0, 60.0];
const AXIS_REACH: f64 = 1.15;
const SPHERE_FILL: f64 = 0.40; // sphere radius as a fraction of min(w, h)

/// Paints the wireframe unit sphere, axes, state vector and angle
/// annotations into a widget rectangle. Pure sink: everything it needs
/// arrives as arguments, it owns no state and validates nothing.
pub struct BlochSphereRenderer {
    show_grid: bool,
}

impl BlochSphereRenderer {
    pub fn new() -> Self {
        Self { show_grid: true }
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn draw(&self, frame: &RenderFrame, camera: &Camera, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }

        draw::set_draw_color(theme::color(theme::BG_DARK));
        draw::draw_rectf(x, y, w, h);

        let radius = SPHERE_FILL * w.min(h) as f64;
        let cx = x as f64 + w as f64 / 2.0;
        let cy = y as f64 + h as f64 / 2.0;
        let to_px = |sx: f64, sy: f64| (cx + sx * radius, cy - sy * radius);

        // Far hemisphere first so near lines paint over it
        if self.show_grid {
            self.draw_wireframe(camera, &to_px, false);
            self.draw_wireframe(camera, &to_px, true);
        }
        self.draw_axes(camera, &to_px);
        self.draw_state_vector(frame, camera, &to_px);
        self.draw_annotations(frame, x, y);
    }

    fn draw_wireframe(&self, camera: &Camera, to_px: &impl Fn(f64, f64) -> (f64, f64), front: bool) {
        let hex = if front { theme::WIRE_FRONT } else { theme::WIRE_BACK };
        draw::set_draw_color(theme::color(hex));

        // Latitude rings plus equator
        for lat_deg in LATITUDE_RINGS_DEG.iter().copied().chain([0.0]) {
            let lat = lat_deg.to_radians();
            let (z, ring_r) = (lat.sin(), lat.cos());
            self.draw_circle(camera, to_px, front, |t| {
                [ring_r * t.cos(), ring_r * t.sin(), z]
            });
        }

        // Meridians (full great circles through the poles)
        for az_deg in (0..180).step_by(MERIDIAN_STEP_DEG) {
            let az = (az_deg as f64).to_radians();
            self.draw_circle(camera, to_px, front, |t| {
                [t.cos() * az.cos(), t.cos() * az.sin(), t.sin()]
            });
        }
    }

    /// Draw the segments of a parametric circle whose endpoints are both on
    /// the requested hemisphere (front: depth >= 0).
    fn draw_circle(
        &self,
        camera: &Camera,
        to_px: &impl Fn(f64, f64) -> (f64, f64),
        front: bool,
        point_at: impl Fn(f64) -> [f64; 3],
    ) {
        let step = std::f64::consts::TAU / CIRCLE_SEGMENTS as f64;
        let mut prev: Option<(f64, f64, f64)> = None;
        for i in 0..=CIRCLE_SEGMENTS {
            let (sx, sy, depth) = camera.project(point_at(i as f64 * step));
            if let Some((px, py, pd)) = prev {
                let visible = if front {
                    depth >= 0.0 && pd >= 0.0
                } else {
                    depth < 0.0 || pd < 0.0
                };
                if visible {
                    let (x0, y0) = to_px(px, py);
                    let (x1, y1) = to_px(sx, sy);
                    draw::draw_line(x0 as i32, y0 as i32, x1 as i32, y1 as i32);
                }
            }
            prev = Some((sx, sy, depth));
        }
    }

    fn draw_axes(&self, camera: &Camera, to_px: &impl Fn(f64, f64) -> (f64, f64)) {
        draw::set_draw_color(theme::color(theme::AXIS));
        draw::set_font(Font::Helvetica, 12);

        let axes: [([f64; 3], &str); 3] = [
            ([1.0, 0.0, 0.0], "x |+\u{27e9}"),
            ([0.0, 1.0, 0.0], "y |+i\u{27e9}"),
            ([0.0, 0.0, 1.0], "|0\u{27e9}"),
        ];

        for (dir, label) in axes {
            let tip = [dir[0] * AXIS_REACH, dir[1] * AXIS_REACH, dir[2] * AXIS_REACH];
            let (sx0, sy0, _) = camera.project([-tip[0], -tip[1], -tip[2]]);
            let (sx1, sy1, _) = camera.project(tip);
            let (x0, y0) = to_px(sx0, sy0);
            let (x1, y1) = to_px(sx1, sy1);
            draw::draw_line(x0 as i32, y0 as i32, x1 as i32, y1 as i32);
            draw::draw_text(label, x1 as i32 + 4, y1 as i32 + 4);
        }

        // South pole label on the -z axis
        let (sx, sy, _) = camera.project([0.0, 0.0, -AXIS_REACH]);
        let (px, py) = to_px(sx, sy);
        draw::draw_text("|1\u{27e9}", px as i32 + 4, py as i32 + 12);
    }

    fn draw_state_vector(
        &self,
        frame: &RenderFrame,
        camera: &Camera,
        to_px: &impl Fn(f64, f64) -> (f64, f64),
    ) {
        let (sx, sy, _) = camera.project(frame.state.bloch_vector());
        let (ox, oy) = to_px(0.0, 0.0);
        let (px, py) = to_px(sx, sy);

        draw::set_draw_color(theme::color(theme::VECTOR));
        draw::set_line_style(draw::LineStyle::Solid, 2);
        draw::draw_line(ox as i32, oy as i32, px as i32, py as i32);
        draw::set_line_style(draw::LineStyle::Solid, 0);

        // point marker at the tip
        draw::draw_pie(px as i32 - 4, py as i32 - 4, 8, 8, 0.0, 360.0);
    }

    /// On-canvas degree readout, two decimals, matching the sidebar.
    fn draw_annotations(&self, frame: &RenderFrame, x: i32, y: i32) {
        draw::set_draw_color(theme::color(theme::ANNOTATION));
        draw::set_font(Font::Helvetica, 13);
        draw::draw_text(
            &format!("\u{03b8} = {:.2}\u{00b0}", frame.theta.to_degrees()),
            x + 10,
            y + 20,
        );
        draw::draw_text(
            &format!("\u{03c6} = {:.2}\u{00b0}", frame.phi.to_degrees()),
            x + 10,
            y + 38,
        );
    }
}

impl Default for BlochSphereRenderer {
    fn default() -> Self {
        Self::new()
    }
}
