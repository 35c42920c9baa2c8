#![allow(warnings)]
//! Foodgram Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod error;
mod form;
mod list_state;
mod logging;
mod models;
mod navigation;
mod pages;
mod pagination;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("[App] starting, api at {}", config::api_base());
    mount_to_body(App);
}
