use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::{Controller, RenderFrame};
use crate::data::Camera;
use crate::rendering::BlochSphereRenderer;
use crate::ui::tooltips::TooltipManager;

// ─── App State ─────────────────────────────────────────────────────────────

/// Everything the callbacks share, behind one Rc<RefCell<..>>.
///
/// The controller owns the mode and last rendered frame; the camera owns
/// the view orientation. Neither is reachable any other way, so there is
/// no ambient widget or figure state to keep in sync.
pub struct AppState {
    pub controller: Controller,
    pub camera: Camera,
    pub renderer: BlochSphereRenderer,
    pub tooltip_mgr: TooltipManager,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: Controller::new(),
            camera: Camera::default(),
            renderer: BlochSphereRenderer::new(),
            tooltip_mgr: TooltipManager::new(),
        }
    }
}

pub type SharedState = Rc<RefCell<AppState>>;

// ─── Shared callback type ──────────────────────────────────────────────────

pub type SharedCb = Rc<RefCell<Box<dyn FnMut()>>>;

/// Cross-callback updates that more than one widget needs to trigger.
pub struct SharedCallbacks {
    /// Refresh the sidebar state readout from the controller's last frame.
    pub update_readout: SharedCb,
    /// Show the amplitude group, hide the angle group.
    pub show_amplitude_widgets: SharedCb,
    /// Show the angle group, hide the amplitude group.
    pub show_angle_widgets: SharedCb,
}

// ─── Readout formatting ────────────────────────────────────────────────────

/// Sidebar readout text for a frame: amplitudes in rectangular form,
/// angles in degrees (two decimals, same precision as the canvas).
pub fn format_readout(frame: &RenderFrame) -> String {
    format!(
        "\u{03b1} = {:+.4} {:+.4}i\n\
         \u{03b2} = {:+.4} {:+.4}i\n\
         \u{03b8} = {:.2}\u{00b0}\n\
         \u{03c6} = {:.2}\u{00b0}\n\
         norm = {:.6}",
        frame.state.alpha.re,
        frame.state.alpha.im,
        frame.state.beta.re,
        frame.state.beta.im,
        frame.theta.to_degrees(),
        frame.phi.to_degrees(),
        frame.state.norm(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_readout_shows_angles_in_degrees() {
        let ctl = Controller::new();
        let text = format_readout(&ctl.last_frame());
        assert!(text.contains("90.00\u{00b0}"));
        assert!(text.contains("225.00\u{00b0}"));
        assert!(text.contains("norm = 1.000000"));
    }
}
