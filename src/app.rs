use adw::Application;
use log::{error, warn};
use portfolio::api::client::StoreClient;
use portfolio::config::StoreSettings;
use portfolio::contact::ContactForm;
use std::sync::Arc;

pub fn build_ui(app: &Application) {
    let settings = StoreSettings::load();
    if settings.url.is_empty() || settings.anon_key.is_empty() {
        warn!("Store URL or key is not configured; contact messages will not be delivered");
    }

    let form = match StoreClient::new(settings) {
        Ok(client) => Some(ContactForm::new(Arc::new(client))),
        Err(e) => {
            error!("Could not create store client: {e}");
            None
        }
    };
    crate::ui::main_window::show_main_window(app, form);
}
