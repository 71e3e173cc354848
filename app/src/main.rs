mod api;
mod app;
mod components;

use app::App;

fn main() {
    if let Err(e) = dioxus_logger::init(tracing::Level::INFO) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    dioxus::launch(App);
}
