mod app;
mod core;
mod pages;

use app::App;
use leptos::*;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_log_startup();
    mount_to_body(|| view! { <App/> })
}

fn console_log_startup() {
    let config = crate::core::network_config::current_chain_config();
    log::info!(
        "Starting NFT minter v{} on {} ({})",
        env!("CARGO_PKG_VERSION"),
        config.chain_name,
        config.chain_id
    );
}
