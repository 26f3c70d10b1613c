#![allow(warnings)]
//! To-Do Widget Entry Point

mod models;
mod board;
mod filter;
mod date;
mod error;
mod config;
mod storage;
mod logging;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let config = AppConfig::load(&BrowserStorage);
    log::set_max_level(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
