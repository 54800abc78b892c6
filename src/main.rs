mod app;
mod utils;
mod ui;

use adw::prelude::*;
use adw::Application;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = Application::builder()
        .application_id("io.github.zclerigo.Portfolio")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run();
}
