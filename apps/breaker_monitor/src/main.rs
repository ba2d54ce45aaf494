//! Circuit-breaker monitoring dashboard.
//!
//! Watches a service's `_status/circuit-breaker/stream` endpoint and renders
//! each breaker's state and latency distribution live. The monitored
//! `host:port` is persisted across visits.

mod app;
mod dashboard;
mod layout;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(|| leptos::view! { <app::App/> });
}
