use std::cell::RefCell;
use std::rc::Rc;

use gtk4::cairo;
use gtk4::prelude::*;
use gtk4::{glib, EventControllerMotion, GestureDrag, PropagationPhase};

use crate::fog::FogField;

use super::page::PageWidgets;
use super::FrameLoops;

/// Per-blob gradient tint, back to front.
const BLOB_COLORS: [(f64, f64, f64, f64); 3] = [
    (0.22, 0.33, 0.58, 0.30),
    (0.42, 0.26, 0.52, 0.24),
    (0.16, 0.42, 0.44, 0.22),
];

const BACKGROUND_RGB: (f64, f64, f64) = (0.043, 0.051, 0.071);

pub(super) fn attach(page: &Rc<PageWidgets>, motion_enabled: bool, frame_loops: &FrameLoops) {
    let field = Rc::new(RefCell::new(FogField::default()));

    {
        let field = field.clone();
        page.fog_area.set_draw_func(move |_, context, width, height| {
            if width <= 0 || height <= 0 {
                return;
            }
            draw_fog(context, &field.borrow(), width as f64, height as f64);
        });
    }

    // reduced motion renders the resting fog once and never animates
    if !motion_enabled {
        return;
    }

    let pointer = EventControllerMotion::new();
    {
        let page = page.clone();
        let field = field.clone();
        pointer.connect_motion(move |_, x, y| {
            let width = page.window.width();
            let height = page.window.height();
            if width <= 0 || height <= 0 {
                return;
            }
            field
                .borrow_mut()
                .set_target(x, y, width as f64, height as f64);
        });
    }
    page.window.add_controller(pointer);

    // touch drags steer the fog the same way the pointer does
    let drag = GestureDrag::new();
    drag.set_touch_only(true);
    drag.set_propagation_phase(PropagationPhase::Capture);
    {
        let page = page.clone();
        let field = field.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            let width = page.window.width();
            let height = page.window.height();
            if width <= 0 || height <= 0 {
                return;
            }
            field.borrow_mut().set_target(
                start_x + offset_x,
                start_y + offset_y,
                width as f64,
                height as f64,
            );
        });
    }
    page.window.add_controller(drag);

    let tick_page = page.clone();
    let handle = page.window.add_tick_callback(move |_, _| {
        field.borrow_mut().step();
        tick_page.fog_area.queue_draw();
        glib::ControlFlow::Continue
    });
    frame_loops.borrow_mut().push(handle);
}

fn draw_fog(context: &cairo::Context, field: &FogField, width: f64, height: f64) {
    let (r, g, b) = BACKGROUND_RGB;
    context.set_source_rgb(r, g, b);
    context.paint().ok();

    let radius = width.max(height) * 0.45;
    for ((px, py), (r, g, b, a)) in field.blob_positions().iter().zip(BLOB_COLORS.iter()) {
        let cx = px / 100.0 * width;
        let cy = py / 100.0 * height;
        let gradient = cairo::RadialGradient::new(cx, cy, 0.0, cx, cy, radius);
        gradient.add_color_stop_rgba(0.0, *r, *g, *b, *a);
        gradient.add_color_stop_rgba(1.0, *r, *g, *b, 0.0);
        let _ = context.set_source(&gradient);
        context.paint().ok();
    }
}
