//! Application root component.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use chirper_client::provide_monitor_target;

use crate::dashboard::BreakersPage;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_monitor_target();

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/cb"/> }>
                <Route path=path!("/cb") view=BreakersPage/>
            </Routes>
        </Router>
    }
}
