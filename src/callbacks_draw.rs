use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, enums::Event, prelude::*};

use crate::app_state::AppState;
use crate::layout::Widgets;

/// Rotation speed in radians per dragged pixel.
const DRAG_SENSITIVITY: f64 = 0.01;

// ═══════════════════════════════════════════════════════════════════════════
//  DRAW CALLBACKS
// ═══════════════════════════════════════════════════════════════════════════

pub fn setup_draw_callbacks(widgets: &Widgets, state: &Rc<RefCell<AppState>>) {
    setup_sphere_draw(widgets, state);
    setup_sphere_mouse(widgets, state);
}

// ── Sphere display ──
fn setup_sphere_draw(widgets: &Widgets, state: &Rc<RefCell<AppState>>) {
    let state = state.clone();

    let mut sphere_display = widgets.sphere_display.clone();
    sphere_display.draw(move |w| {
        if !w.visible_r() || w.w() <= 0 || w.h() <= 0 {
            return;
        }

        let Ok(st) = state.try_borrow() else { return; };

        let frame = st.controller.last_frame();
        st.renderer.draw(&frame, &st.camera, w.x(), w.y(), w.w(), w.h());
    });
}

// ── Sphere mouse handling (drag to rotate) ──
fn setup_sphere_mouse(widgets: &Widgets, state: &Rc<RefCell<AppState>>) {
    let state = state.clone();
    let mut status_bar = widgets.status_bar.clone();

    // drag anchor from the last Push/Drag event
    let last_pos: Rc<RefCell<Option<(i32, i32)>>> = Rc::new(RefCell::new(None));

    let mut sphere_display = widgets.sphere_display.clone();
    sphere_display.handle(move |w, ev| match ev {
        Event::Push => {
            *last_pos.borrow_mut() = Some((app::event_x(), app::event_y()));
            // double-click resets the camera
            if app::event_clicks() {
                state.borrow_mut().camera.reset();
                w.redraw();
            }
            true
        }
        Event::Drag => {
            let (mx, my) = (app::event_x(), app::event_y());
            let mut anchor = last_pos.borrow_mut();
            if let Some((px, py)) = *anchor {
                let dyaw = (mx - px) as f64 * DRAG_SENSITIVITY;
                let dpitch = (my - py) as f64 * DRAG_SENSITIVITY;
                let mut st = state.borrow_mut();
                st.camera.rotate(dyaw, dpitch);
                let (yaw, pitch) = (st.camera.yaw.to_degrees(), st.camera.pitch.to_degrees());
                drop(st);
                status_bar.set_label(&format!("View: yaw {yaw:.0}\u{00b0}, pitch {pitch:.0}\u{00b0}"));
                w.redraw();
            }
            *anchor = Some((mx, my));
            true
        }
        Event::Released => {
            *last_pos.borrow_mut() = None;
            true
        }
        _ => false,
    });
}
