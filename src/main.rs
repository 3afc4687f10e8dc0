#![allow(warnings)]
//! Tier Maker Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod models;
mod store;
mod upload;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(LoggerConfig::default()) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
