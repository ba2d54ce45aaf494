//! Chirper web client.
//!
//! A small social feed: post chirps, follow friends, watch the activity
//! stream update live. All state of interest flows through
//! `chirper_client`; this crate is routing, forms, and layout.

mod app;
mod components;
mod layout;
mod pages;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(|| leptos::view! { <app::App/> });
}
