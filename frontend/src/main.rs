use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use leavedesk_frontend::{app, config};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting Leave Desk frontend: initializing runtime config".into());

    spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
        app::mount_app();
    });
}
