use std::cell::RefCell;
use std::rc::Rc;

use fltk::enums::Shortcut;
use fltk::menu;
use fltk::prelude::*;

use crate::app_state::{format_readout, AppState, SharedCallbacks};
use crate::controller::{InputMode, RenderFrame};
use crate::data::StateError;
use crate::layout::{Widgets, AMP_GROUP_H, ANGLE_GROUP_H};
use crate::validation::parse_degrees;

// ═══════════════════════════════════════════════════════════════════════════
//  SHARED CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

pub fn build_shared_callbacks(
    widgets: &Widgets,
    state: &Rc<RefCell<AppState>>,
) -> SharedCallbacks {
    let update_readout: crate::app_state::SharedCb = {
        let state = state.clone();
        let mut lbl_readout = widgets.lbl_readout.clone();
        Rc::new(RefCell::new(Box::new(move || {
            let frame = state.borrow().controller.last_frame();
            lbl_readout.set_label(&format_readout(&frame));
        })))
    };

    let show_amplitude_widgets: crate::app_state::SharedCb = {
        let mut sidebar = widgets.sidebar.clone();
        let mut amp_group = widgets.amp_group.clone();
        let mut angle_group = widgets.angle_group.clone();
        Rc::new(RefCell::new(Box::new(move || {
            angle_group.hide();
            amp_group.show();
            sidebar.fixed(&angle_group, 0);
            sidebar.fixed(&amp_group, AMP_GROUP_H);
            sidebar.layout();
        })))
    };

    let show_angle_widgets: crate::app_state::SharedCb = {
        let mut sidebar = widgets.sidebar.clone();
        let mut amp_group = widgets.amp_group.clone();
        let mut angle_group = widgets.angle_group.clone();
        Rc::new(RefCell::new(Box::new(move || {
            amp_group.hide();
            angle_group.show();
            sidebar.fixed(&amp_group, 0);
            sidebar.fixed(&angle_group, ANGLE_GROUP_H);
            sidebar.layout();
        })))
    };

    SharedCallbacks {
        update_readout,
        show_amplitude_widgets,
        show_angle_widgets,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MODE CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

/// Copy the canonical values of a frame into the amplitude widgets.
/// set_value() never fires callbacks, so this cannot feed back into the
/// controller.
fn sync_amplitude_widgets(widgets: &mut AmpWidgets, frame: &RenderFrame) {
    let st = &frame.state;
    widgets.slider_re_alpha.set_value(st.alpha.re);
    widgets.slider_im_alpha.set_value(st.alpha.im);
    widgets.slider_re_beta.set_value(st.beta.re);
    widgets.slider_im_beta.set_value(st.beta.im);
    widgets.lbl_re_alpha.set_label(&format!("Re(\u{03b1}): {:+.4}", st.alpha.re));
    widgets.lbl_im_alpha.set_label(&format!("Im(\u{03b1}): {:+.4}", st.alpha.im));
    widgets.lbl_re_beta.set_label(&format!("Re(\u{03b2}): {:+.4}", st.beta.re));
    widgets.lbl_im_beta.set_label(&format!("Im(\u{03b2}): {:+.4}", st.beta.im));
}

/// Copy the canonical angles of a frame into the angle widgets.
fn sync_angle_widgets(widgets: &mut AngleWidgets, frame: &RenderFrame) {
    let theta_deg = frame.theta.to_degrees();
    let phi_deg = frame.phi.to_degrees();
    widgets.slider_theta.set_value(theta_deg);
    widgets.slider_phi.set_value(phi_deg);
    widgets.input_theta.set_value(&format!("{theta_deg:.2}"));
    widgets.input_phi.set_value(&format!("{phi_deg:.2}"));
    widgets.lbl_theta.set_label(&format!("\u{03b8}: {theta_deg:.2}\u{00b0}"));
    widgets.lbl_phi.set_label(&format!("\u{03c6}: {phi_deg:.2}\u{00b0}"));
}

/// Cloned handles for the amplitude group, bundled so the mode callbacks
/// stay readable.
struct AmpWidgets {
    slider_re_alpha: fltk::valuator::HorNiceSlider,
    slider_im_alpha: fltk::valuator::HorNiceSlider,
    slider_re_beta: fltk::valuator::HorNiceSlider,
    slider_im_beta: fltk::valuator::HorNiceSlider,
    lbl_re_alpha: fltk::frame::Frame,
    lbl_im_alpha: fltk::frame::Frame,
    lbl_re_beta: fltk::frame::Frame,
    lbl_im_beta: fltk::frame::Frame,
}

impl AmpWidgets {
    fn from(widgets: &Widgets) -> Self {
        Self {
            slider_re_alpha: widgets.slider_re_alpha.clone(),
            slider_im_alpha: widgets.slider_im_alpha.clone(),
            slider_re_beta: widgets.slider_re_beta.clone(),
            slider_im_beta: widgets.slider_im_beta.clone(),
            lbl_re_alpha: widgets.lbl_re_alpha.clone(),
            lbl_im_alpha: widgets.lbl_im_alpha.clone(),
            lbl_re_beta: widgets.lbl_re_beta.clone(),
            lbl_im_beta: widgets.lbl_im_beta.clone(),
        }
    }
}

struct AngleWidgets {
    slider_theta: fltk::valuator::HorNiceSlider,
    slider_phi: fltk::valuator::HorNiceSlider,
    input_theta: fltk::input::FloatInput,
    input_phi: fltk::input::FloatInput,
    lbl_theta: fltk::frame::Frame,
    lbl_phi: fltk::frame::Frame,
}

impl AngleWidgets {
    fn from(widgets: &Widgets) -> Self {
        Self {
            slider_theta: widgets.slider_theta.clone(),
            slider_phi: widgets.slider_phi.clone(),
            input_theta: widgets.input_theta.clone(),
            input_phi: widgets.input_phi.clone(),
            lbl_theta: widgets.lbl_theta.clone(),
            lbl_phi: widgets.lbl_phi.clone(),
        }
    }
}

pub fn setup_mode_callbacks(
    widgets: &Widgets,
    state: &Rc<RefCell<AppState>>,
    shared: &SharedCallbacks,
) {
    // Amplitude mode radio
    {
        let state = state.clone();
        let mut amp = AmpWidgets::from(widgets);
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();
        let show_amplitude = shared.show_amplitude_widgets.clone();

        let mut mode_amplitude = widgets.mode_amplitude.clone();
        mode_amplitude.set_callback(move |_| {
            let frame = state.borrow_mut().controller.switch_mode(InputMode::Amplitude);
            sync_amplitude_widgets(&mut amp, &frame);
            (show_amplitude.borrow_mut())();
            (update_readout.borrow_mut())();
            status_bar.set_label("Amplitude mode");
            sphere_display.redraw();
        });
    }

    // Angle mode radio
    {
        let state = state.clone();
        let mut angle = AngleWidgets::from(widgets);
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();
        let show_angle = shared.show_angle_widgets.clone();

        let mut mode_angle = widgets.mode_angle.clone();
        mode_angle.set_callback(move |_| {
            let frame = state.borrow_mut().controller.switch_mode(InputMode::Angle);
            sync_angle_widgets(&mut angle, &frame);
            (show_angle.borrow_mut())();
            (update_readout.borrow_mut())();
            status_bar.set_label("Angle mode");
            sphere_display.redraw();
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  AMPLITUDE CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup_amplitude_callbacks(
    widgets: &Widgets,
    state: &Rc<RefCell<AppState>>,
    shared: &SharedCallbacks,
) {
    // All four sliders share one handler: every tick reads all four raw
    // values and recomputes from scratch, so events never accumulate.
    let sliders = [
        widgets.slider_re_alpha.clone(),
        widgets.slider_im_alpha.clone(),
        widgets.slider_re_beta.clone(),
        widgets.slider_im_beta.clone(),
    ];
    let labels = [
        (widgets.lbl_re_alpha.clone(), "Re(\u{03b1})"),
        (widgets.lbl_im_alpha.clone(), "Im(\u{03b1})"),
        (widgets.lbl_re_beta.clone(), "Re(\u{03b2})"),
        (widgets.lbl_im_beta.clone(), "Im(\u{03b2})"),
    ];

    for i in 0..4 {
        let state = state.clone();
        let sliders = sliders.clone();
        let (mut lbl, name) = labels[i].clone();
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();

        let mut slider = sliders[i].clone();
        slider.set_callback(move |s| {
            lbl.set_label(&format!("{name}: {:+.4}", s.value()));
            let result = state.borrow_mut().controller.on_amplitude_input(
                sliders[0].value(),
                sliders[1].value(),
                sliders[2].value(),
                sliders[3].value(),
            );
            match result {
                Ok(_) => {
                    (update_readout.borrow_mut())();
                    status_bar.set_label("Amplitude mode");
                    sphere_display.redraw();
                }
                Err(StateError::DegenerateState) => {
                    // keep the last rendered frame on screen
                    status_bar.set_label("All four amplitudes are zero; state unchanged");
                }
                Err(e) => {
                    status_bar.set_label(&e.to_string());
                }
            }
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  ANGLE CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup_angle_callbacks(
    widgets: &Widgets,
    state: &Rc<RefCell<AppState>>,
    shared: &SharedCallbacks,
) {
    // Theta slider
    {
        let state = state.clone();
        let mut angle = AngleWidgets::from(widgets);
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();

        let mut slider_theta = widgets.slider_theta.clone();
        slider_theta.set_callback(move |s| {
            let theta_deg = s.value();
            let phi_deg = angle.slider_phi.value();
            apply_angles(
                &state, &mut angle, &mut sphere_display, &mut status_bar,
                &update_readout, theta_deg, phi_deg,
            );
        });
    }

    // Phi slider
    {
        let state = state.clone();
        let mut angle = AngleWidgets::from(widgets);
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();

        let mut slider_phi = widgets.slider_phi.clone();
        slider_phi.set_callback(move |s| {
            let theta_deg = angle.slider_theta.value();
            let phi_deg = s.value();
            apply_angles(
                &state, &mut angle, &mut sphere_display, &mut status_bar,
                &update_readout, theta_deg, phi_deg,
            );
        });
    }

    // Typed theta (fires on Enter)
    {
        let state = state.clone();
        let mut angle = AngleWidgets::from(widgets);
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();

        let mut input_theta = widgets.input_theta.clone();
        input_theta.set_callback(move |inp| {
            match parse_degrees(&inp.value()) {
                Ok(theta_deg) => {
                    let phi_deg = angle.slider_phi.value();
                    apply_angles(
                        &state, &mut angle, &mut sphere_display, &mut status_bar,
                        &update_readout, theta_deg, phi_deg,
                    );
                }
                Err(e) => {
                    // restore the last committed value
                    let frame = state.borrow().controller.last_frame();
                    inp.set_value(&format!("{:.2}", frame.theta.to_degrees()));
                    status_bar.set_label(&e.to_string());
                }
            }
        });
    }

    // Typed phi (fires on Enter)
    {
        let state = state.clone();
        let mut angle = AngleWidgets::from(widgets);
        let mut sphere_display = widgets.sphere_display.clone();
        let mut status_bar = widgets.status_bar.clone();
        let update_readout = shared.update_readout.clone();

        let mut input_phi = widgets.input_phi.clone();
        input_phi.set_callback(move |inp| {
            match parse_degrees(&inp.value()) {
                Ok(phi_deg) => {
                    let theta_deg = angle.slider_theta.value();
                    apply_angles(
                        &state, &mut angle, &mut sphere_display, &mut status_bar,
                        &update_readout, theta_deg, phi_deg,
                    );
                }
                Err(e) => {
                    let frame = state.borrow().controller.last_frame();
                    inp.set_value(&format!("{:.2}", frame.phi.to_degrees()));
                    status_bar.set_label(&e.to_string());
                }
            }
        });
    }
}

/// Push one angle event through the controller and mirror the committed
/// (clamped/wrapped) values back into every angle widget.
fn apply_angles(
    state: &Rc<RefCell<AppState>>,
    angle: &mut AngleWidgets,
    sphere_display: &mut fltk::widget::Widget,
    status_bar: &mut fltk::frame::Frame,
    update_readout: &crate::app_state::SharedCb,
    theta_deg: f64,
    phi_deg: f64,
) {
    let result = state.borrow_mut().controller.on_angle_input(theta_deg, phi_deg);
    match result {
        Ok(frame) => {
            sync_angle_widgets(angle, &frame);
            (update_readout.borrow_mut())();
            status_bar.set_label("Angle mode");
            sphere_display.redraw();
        }
        Err(e) => {
            status_bar.set_label(&e.to_string());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  VIEW / MISC CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup_view_callbacks(widgets: &Widgets, state: &Rc<RefCell<AppState>>) {
    // Reset camera
    {
        let state = state.clone();
        let mut sphere_display = widgets.sphere_display.clone();

        let mut btn_reset_view = widgets.btn_reset_view.clone();
        btn_reset_view.set_callback(move |_| {
            state.borrow_mut().camera.reset();
            sphere_display.redraw();
        });
    }

    // Wireframe toggle
    {
        let state = state.clone();
        let mut sphere_display = widgets.sphere_display.clone();

        let mut check_grid = widgets.check_grid.clone();
        check_grid.set_callback(move |c| {
            state.borrow_mut().renderer.set_show_grid(c.is_checked());
            sphere_display.redraw();
        });
    }

    // Tooltip toggle
    {
        let state = state.clone();

        let mut btn_tooltips = widgets.btn_tooltips.clone();
        btn_tooltips.set_callback(move |c| {
            state.borrow_mut().tooltip_mgr.set_enabled(c.is_checked());
        });
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MENU
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup_menu(widgets: &Widgets, state: &Rc<RefCell<AppState>>) {
    let mut menu = widgets.menu.clone();

    menu.add(
        "&File/&Quit\t",
        Shortcut::Ctrl | 'q',
        menu::MenuFlag::Normal,
        |_| fltk::app::quit(),
    );

    {
        let state = state.clone();
        let mut sphere_display = widgets.sphere_display.clone();
        menu.add(
            "&View/&Reset View\t",
            Shortcut::Ctrl | 'r',
            menu::MenuFlag::Normal,
            move |_| {
                state.borrow_mut().camera.reset();
                sphere_display.redraw();
            },
        );
    }
}
