//! Leptos Playground Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod forms;
mod hooks;
mod pages;
mod query;
mod storage;
mod store;
mod todos;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger(config::APP_NAME, config::log_level()) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    log::info!("starting {}", config::APP_NAME);
    mount_to_body(App);
}
