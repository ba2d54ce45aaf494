//! Content framing for the dashboard page.

use leptos::prelude::*;

/// Titled content region.
#[component]
pub fn ContentLayout(#[prop(into)] subtitle: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div id="page-content">
            <section id="top">
                <div class="row">
                    <header class="large-12 columns">
                        <h1>{move || subtitle.get()}</h1>
                    </header>
                </div>
            </section>
            {children()}
        </div>
    }
}

/// A full-width row section.
#[component]
pub fn Section(children: Children) -> impl IntoView {
    view! {
        <section class="fw-wrapper feature">
            <div class="row">{children()}</div>
        </section>
    }
}
