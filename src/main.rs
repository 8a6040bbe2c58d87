mod app_state;
mod callbacks_draw;
mod callbacks_ui;
mod controller;
mod data;
mod layout;
mod rendering;
mod ui;
mod validation;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use fltk::{app, prelude::*};

use app_state::AppState;
use ui::theme;

fn main() -> Result<()> {
    let fl_app = app::App::default();

    theme::apply_dark_theme();
    app::set_visual(fltk::enums::Mode::Rgb8).ok();

    let state = Rc::new(RefCell::new(AppState::new()));

    let (mut win, widgets) = layout::build_ui();

    let shared = callbacks_ui::build_shared_callbacks(&widgets, &state);
    callbacks_ui::setup_mode_callbacks(&widgets, &state, &shared);
    callbacks_ui::setup_amplitude_callbacks(&widgets, &state, &shared);
    callbacks_ui::setup_angle_callbacks(&widgets, &state, &shared);
    callbacks_ui::setup_view_callbacks(&widgets, &state);
    callbacks_ui::setup_menu(&widgets, &state);
    callbacks_draw::setup_draw_callbacks(&widgets, &state);

    // populate the readout before the first event arrives
    (shared.update_readout.borrow_mut())();

    win.show();
    fl_app.run()?;
    Ok(())
}
