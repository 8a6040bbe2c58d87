use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    enums::{Align, FrameType},
    frame::Frame,
    group::Flex,
    input::FloatInput,
    menu::MenuBar,
    prelude::*,
    valuator::HorNiceSlider,
    widget::Widget,
    window::Window,
};

use crate::ui::theme;
use crate::ui::tooltips::set_tooltip;
use crate::validation::attach_float_validation;

// ─── Window Layout Constants ────────────────────────────────────────────────
pub const WIN_W: i32 = 980;
pub const WIN_H: i32 = 680;
const MENU_H: i32 = 25;
const STATUS_H: i32 = 25;
const SIDEBAR_W: i32 = 260;

/// Fixed sidebar heights for the two input groups; the hidden group is
/// collapsed to zero by the mode-switch callback.
pub const AMP_GROUP_H: i32 = 4 * (16 + 22) + 6;
pub const ANGLE_GROUP_H: i32 = 2 * (16 + 22 + 25) + 6;

// Startup values: alpha = 1/sqrt(2), beta = -1/2 - i/2 (normalized),
// which sits at theta = 90, phi = 225 degrees.
const INIT_RE_ALPHA: f64 = 0.7071;
const INIT_IM_ALPHA: f64 = 0.0;
const INIT_RE_BETA: f64 = -0.5;
const INIT_IM_BETA: f64 = -0.5;
const INIT_THETA_DEG: f64 = 90.0;
const INIT_PHI_DEG: f64 = 225.0;

// ─── Widgets struct ─────────────────────────────────────────────────────────
// Cloneable handles to every widget the callbacks need.

pub struct Widgets {
    pub menu: MenuBar,

    pub mode_amplitude: RadioRoundButton,
    pub mode_angle: RadioRoundButton,

    pub amp_group: Flex,
    pub slider_re_alpha: HorNiceSlider,
    pub slider_im_alpha: HorNiceSlider,
    pub slider_re_beta: HorNiceSlider,
    pub slider_im_beta: HorNiceSlider,
    pub lbl_re_alpha: Frame,
    pub lbl_im_alpha: Frame,
    pub lbl_re_beta: Frame,
    pub lbl_im_beta: Frame,

    pub angle_group: Flex,
    pub slider_theta: HorNiceSlider,
    pub slider_phi: HorNiceSlider,
    pub lbl_theta: Frame,
    pub lbl_phi: Frame,
    pub input_theta: FloatInput,
    pub input_phi: FloatInput,

    pub btn_reset_view: Button,
    pub check_grid: CheckButton,
    pub btn_tooltips: CheckButton,
    pub lbl_readout: Frame,

    pub sidebar: Flex,
    pub sphere_display: Widget,
    pub status_bar: Frame,
}

// ─── Build UI ───────────────────────────────────────────────────────────────

pub fn build_ui() -> (Window, Widgets) {
    let mut win = Window::new(80, 80, WIN_W, WIN_H, "Bloch Sphere Explorer");
    win.make_resizable(true);
    win.set_color(theme::color(theme::BG_DARK));

    let mut menu = MenuBar::default().with_size(WIN_W, MENU_H);
    menu.set_color(theme::color(theme::BG_PANEL));
    menu.set_text_color(theme::color(theme::TEXT_PRIMARY));
    menu.set_text_size(12);

    let mut root = Flex::default()
        .with_pos(0, MENU_H)
        .with_size(WIN_W, WIN_H - MENU_H - STATUS_H)
        .row();

    // ─── LEFT PANEL (Controls) ─────────────────────────────────────────────
    let mut left = Flex::default().column();
    left.set_color(theme::color(theme::BG_PANEL));
    left.set_frame(FrameType::FlatBox);
    left.set_margin(6);
    left.set_pad(2);
    root.fixed(&left, SIDEBAR_W);

    let mut title = Frame::default().with_label("Bloch Sphere Explorer");
    title.set_label_size(15);
    title.set_label_color(theme::color(theme::ACCENT_BLUE));
    left.fixed(&title, 28);

    // ════════════════════════════════════════════════════════════════
    //  SECTION: Input Mode
    // ════════════════════════════════════════════════════════════════

    let mut lbl_mode = Frame::default().with_label("MODE");
    lbl_mode.set_label_color(theme::section_header_color());
    lbl_mode.set_label_size(11);
    lbl_mode.set_align(Align::Inside | Align::Left);
    left.fixed(&lbl_mode, 18);

    let mut mode_amplitude = RadioRoundButton::default().with_label(" Amplitudes (\u{03b1}, \u{03b2})");
    mode_amplitude.set_label_color(theme::color(theme::TEXT_PRIMARY));
    mode_amplitude.toggle(true);
    set_tooltip(
        &mut mode_amplitude,
        "Drive the state from the four amplitude sliders.\nValues are normalized before plotting.",
    );
    left.fixed(&mode_amplitude, 22);

    let mut mode_angle = RadioRoundButton::default().with_label(" Angles (\u{03b8}, \u{03c6})");
    mode_angle.set_label_color(theme::color(theme::TEXT_PRIMARY));
    set_tooltip(
        &mut mode_angle,
        "Drive the state from the Bloch angles.\nAmplitudes are reconstructed as cos(\u{03b8}/2) and sin(\u{03b8}/2)\u{00b7}e^(i\u{03c6}).",
    );
    left.fixed(&mode_angle, 22);

    let mut sep1 = Frame::default();
    sep1.set_frame(FrameType::FlatBox);
    sep1.set_color(theme::color(theme::SEPARATOR));
    left.fixed(&sep1, 1);

    // ════════════════════════════════════════════════════════════════
    //  SECTION: Amplitude sliders (visible in Amplitude mode)
    // ════════════════════════════════════════════════════════════════

    let mut amp_group = Flex::default().column();
    amp_group.set_pad(2);

    let amp_slider = |group: &mut Flex, label: String, init: f64, tip: &str| {
        let mut lbl = Frame::default().with_label(&label);
        lbl.set_label_color(theme::color(theme::TEXT_SECONDARY));
        lbl.set_label_size(11);
        lbl.set_align(Align::Inside | Align::Left);
        group.fixed(&lbl, 16);

        let mut slider = HorNiceSlider::default();
        slider.set_minimum(-1.0);
        slider.set_maximum(1.0);
        slider.set_value(init);
        slider.set_color(theme::color(theme::BG_WIDGET));
        slider.set_selection_color(theme::color(theme::ACCENT_YELLOW));
        set_tooltip(&mut slider, tip);
        group.fixed(&slider, 22);

        (slider, lbl)
    };

    let (slider_re_alpha, lbl_re_alpha) = amp_slider(
        &mut amp_group,
        format!("Re(\u{03b1}): {INIT_RE_ALPHA:+.4}"),
        INIT_RE_ALPHA,
        "Real part of the |0\u{27e9} amplitude.\nRange: -1 to 1.",
    );
    let (slider_im_alpha, lbl_im_alpha) = amp_slider(
        &mut amp_group,
        format!("Im(\u{03b1}): {INIT_IM_ALPHA:+.4}"),
        INIT_IM_ALPHA,
        "Imaginary part of the |0\u{27e9} amplitude.\nRange: -1 to 1.",
    );
    let (slider_re_beta, lbl_re_beta) = amp_slider(
        &mut amp_group,
        format!("Re(\u{03b2}): {INIT_RE_BETA:+.4}"),
        INIT_RE_BETA,
        "Real part of the |1\u{27e9} amplitude.\nRange: -1 to 1.",
    );
    let (slider_im_beta, lbl_im_beta) = amp_slider(
        &mut amp_group,
        format!("Im(\u{03b2}): {INIT_IM_BETA:+.4}"),
        INIT_IM_BETA,
        "Imaginary part of the |1\u{27e9} amplitude.\nRange: -1 to 1.",
    );

    amp_group.end();
    left.fixed(&amp_group, AMP_GROUP_H);

    // ════════════════════════════════════════════════════════════════
    //  SECTION: Angle controls (visible in Angle mode)
    // ════════════════════════════════════════════════════════════════

    let mut angle_group = Flex::default().column();
    angle_group.set_pad(2);

    let mut lbl_theta = Frame::default().with_label(&format!("\u{03b8}: {INIT_THETA_DEG:.2}\u{00b0}"));
    lbl_theta.set_label_color(theme::color(theme::TEXT_SECONDARY));
    lbl_theta.set_label_size(11);
    lbl_theta.set_align(Align::Inside | Align::Left);
    angle_group.fixed(&lbl_theta, 16);

    let mut slider_theta = HorNiceSlider::default();
    slider_theta.set_minimum(0.0);
    slider_theta.set_maximum(180.0);
    slider_theta.set_value(INIT_THETA_DEG);
    slider_theta.set_color(theme::color(theme::BG_WIDGET));
    slider_theta.set_selection_color(theme::color(theme::ACCENT_GREEN));
    set_tooltip(
        &mut slider_theta,
        "Polar angle in degrees.\n0\u{00b0} = |0\u{27e9} (north pole), 180\u{00b0} = |1\u{27e9} (south pole).",
    );
    angle_group.fixed(&slider_theta, 22);

    let mut input_theta = FloatInput::default().with_label("deg:");
    input_theta.set_value(&format!("{INIT_THETA_DEG:.2}"));
    input_theta.set_color(theme::color(theme::BG_WIDGET));
    input_theta.set_text_color(theme::color(theme::TEXT_PRIMARY));
    set_tooltip(&mut input_theta, "Type an exact \u{03b8} in degrees and press Enter.\nClamped to 0..180.");
    attach_float_validation(&mut input_theta);
    angle_group.fixed(&input_theta, 25);

    let mut lbl_phi = Frame::default().with_label(&format!("\u{03c6}: {INIT_PHI_DEG:.2}\u{00b0}"));
    lbl_phi.set_label_color(theme::color(theme::TEXT_SECONDARY));
    lbl_phi.set_label_size(11);
    lbl_phi.set_align(Align::Inside | Align::Left);
    angle_group.fixed(&lbl_phi, 16);

    let mut slider_phi = HorNiceSlider::default();
    slider_phi.set_minimum(0.0);
    slider_phi.set_maximum(360.0);
    slider_phi.set_value(INIT_PHI_DEG);
    slider_phi.set_color(theme::color(theme::BG_WIDGET));
    slider_phi.set_selection_color(theme::color(theme::ACCENT_GREEN));
    set_tooltip(
        &mut slider_phi,
        "Azimuthal angle in degrees, measured from +x toward +y.\nWrapped modulo 360\u{00b0}.",
    );
    angle_group.fixed(&slider_phi, 22);

    let mut input_phi = FloatInput::default().with_label("deg:");
    input_phi.set_value(&format!("{INIT_PHI_DEG:.2}"));
    input_phi.set_color(theme::color(theme::BG_WIDGET));
    input_phi.set_text_color(theme::color(theme::TEXT_PRIMARY));
    set_tooltip(&mut input_phi, "Type an exact \u{03c6} in degrees and press Enter.\nWrapped modulo 360.");
    attach_float_validation(&mut input_phi);
    angle_group.fixed(&input_phi, 25);

    angle_group.end();
    // amplitude mode at startup; the mode callback restores ANGLE_GROUP_H
    angle_group.hide();
    left.fixed(&angle_group, 0);

    let mut sep2 = Frame::default();
    sep2.set_frame(FrameType::FlatBox);
    sep2.set_color(theme::color(theme::SEPARATOR));
    left.fixed(&sep2, 1);

    // ════════════════════════════════════════════════════════════════
    //  SECTION: View
    // ════════════════════════════════════════════════════════════════

    let mut lbl_view = Frame::default().with_label("VIEW");
    lbl_view.set_label_color(theme::section_header_color());
    lbl_view.set_label_size(11);
    lbl_view.set_align(Align::Inside | Align::Left);
    left.fixed(&lbl_view, 18);

    let mut btn_reset_view = Button::default().with_label("Reset View");
    btn_reset_view.set_color(theme::color(theme::BG_WIDGET));
    btn_reset_view.set_label_color(theme::color(theme::TEXT_PRIMARY));
    set_tooltip(&mut btn_reset_view, "Restore the default camera orientation.\nDrag the sphere to rotate it.");
    left.fixed(&btn_reset_view, 26);

    let mut check_grid = CheckButton::default().with_label(" Show Wireframe");
    check_grid.set_checked(true);
    check_grid.set_label_color(theme::color(theme::TEXT_PRIMARY));
    set_tooltip(&mut check_grid, "Toggle the latitude/longitude grid on the sphere.");
    left.fixed(&check_grid, 22);

    let mut sep3 = Frame::default();
    sep3.set_frame(FrameType::FlatBox);
    sep3.set_color(theme::color(theme::SEPARATOR));
    left.fixed(&sep3, 1);

    // ════════════════════════════════════════════════════════════════
    //  SECTION: State readout (read-only)
    // ════════════════════════════════════════════════════════════════

    let mut lbl_state = Frame::default().with_label("STATE");
    lbl_state.set_label_color(theme::section_header_color());
    lbl_state.set_label_size(11);
    lbl_state.set_align(Align::Inside | Align::Left);
    left.fixed(&lbl_state, 18);

    let mut lbl_readout = Frame::default();
    lbl_readout.set_label_color(theme::color(theme::TEXT_SECONDARY));
    lbl_readout.set_label_size(11);
    lbl_readout.set_align(Align::Inside | Align::Left | Align::Top);
    left.fixed(&lbl_readout, 90);

    let mut btn_tooltips = CheckButton::default().with_label(" Show Tooltips");
    btn_tooltips.set_checked(true);
    btn_tooltips.set_label_color(theme::color(theme::TEXT_SECONDARY));
    btn_tooltips.set_label_size(10);
    set_tooltip(&mut btn_tooltips, "Toggle tooltip help bubbles on/off.");
    left.fixed(&btn_tooltips, 22);

    // Spacer to push everything up
    Frame::default();

    left.end();

    // ─── RIGHT PANEL (Sphere display) ──────────────────────────────────────

    let mut sphere_display = Widget::default();
    sphere_display.set_frame(FrameType::FlatBox);
    sphere_display.set_color(theme::color(theme::BG_DARK));

    root.end();

    // ─── STATUS BAR ────────────────────────────────────────────────────────

    let mut status_bar = Frame::default()
        .with_pos(0, WIN_H - STATUS_H)
        .with_size(WIN_W, STATUS_H)
        .with_label("Ready | Amplitude mode");
    status_bar.set_frame(FrameType::FlatBox);
    status_bar.set_color(theme::color(theme::BG_PANEL));
    status_bar.set_label_color(theme::color(theme::TEXT_SECONDARY));
    status_bar.set_label_size(11);
    status_bar.set_align(Align::Inside | Align::Left);

    win.end();
    win.resizable(&root);

    let widgets = Widgets {
        menu,
        mode_amplitude,
        mode_angle,
        amp_group,
        slider_re_alpha,
        slider_im_alpha,
        slider_re_beta,
        slider_im_beta,
        lbl_re_alpha,
        lbl_im_alpha,
        lbl_re_beta,
        lbl_im_beta,
        angle_group,
        slider_theta,
        slider_phi,
        lbl_theta,
        lbl_phi,
        input_theta,
        input_phi,
        btn_reset_view,
        check_grid,
        btn_tooltips,
        lbl_readout,
        sidebar: left,
        sphere_display,
        status_bar,
    };

    (win, widgets)
}
