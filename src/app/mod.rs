use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ShowcaseManifest;
use crate::error::{AppError, AppResult};
use crate::ui::LAYOUT_TOKENS;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Application;

mod bootstrap;
mod feed_runtime;
mod fog_runtime;
mod modal_runtime;
mod page;
mod preview_runtime;
mod runtime_css;

use self::bootstrap::motion_enabled;
use self::page::build_page;

const APP_ID: &str = "io.github.vitrine.Vitrine";

/// Frame-loop handles collected at attach time so every render loop can
/// be torn down when the window closes.
pub(crate) type FrameLoops = Rc<RefCell<Vec<gtk4::TickCallbackId>>>;

pub struct App {
    manifest: ShowcaseManifest,
}

impl App {
    pub fn new(manifest: ShowcaseManifest) -> Self {
        Self { manifest }
    }

    pub fn start(self) -> AppResult<()> {
        let application = Application::builder().application_id(APP_ID).build();
        let manifest = Rc::new(self.manifest);

        application.connect_activate(move |app| {
            build_and_present(app, &manifest);
        });

        let exit = application.run();
        if exit != glib::ExitCode::SUCCESS {
            return Err(AppError::Exit { code: i32::from(exit) });
        }
        Ok(())
    }
}

fn build_and_present(app: &Application, manifest: &Rc<ShowcaseManifest>) {
    let motion = motion_enabled();
    runtime_css::install_runtime_css(LAYOUT_TOKENS, motion);

    let page = Rc::new(build_page(app, manifest, LAYOUT_TOKENS));
    let frame_loops: FrameLoops = Rc::new(RefCell::new(Vec::new()));

    preview_runtime::attach(&page, LAYOUT_TOKENS);
    feed_runtime::attach(&page, &frame_loops);
    fog_runtime::attach(&page, motion, &frame_loops);
    modal_runtime::attach(&page);

    {
        let frame_loops = frame_loops.clone();
        page.window.connect_close_request(move |_| {
            for handle in frame_loops.borrow_mut().drain(..) {
                handle.remove();
            }
            glib::Propagation::Proceed
        });
    }

    page.window.present();
    tracing::info!(motion, "showcase window presented");
}
