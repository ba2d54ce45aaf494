//! Static page shell: header, navigation, and content framing.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use chirper_types::User;

/// Page chrome with the site header and navigation.
///
/// Three states, driven by the props: logged in (friend/feed/profile links
/// plus logout), logged out on the login page (sign-up button), and logged
/// out elsewhere (login button).
#[component]
pub fn PageLayout(
    #[prop(into, default = Signal::derive(|| None))] user: Signal<Option<User>>,
    #[prop(optional, into)] logout: Option<Callback<()>>,
    #[prop(optional)] show_signup: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div id="clipped">
            <div id="site-header">
                <div class="row">
                    <div class="small-3 columns">
                        <A href="/" attr:id="logo">"Chirper"</A>
                    </div>
                    <div class="small-9 columns">
                        <nav>
                            <div class="tertiary-nav">
                                {move || {
                                    user.get()
                                        .map(|current| {
                                            view! {
                                                <A href="/addFriend">"Add Friend"</A>
                                                ", "
                                                <A href="/">"Feed"</A>
                                                ", "
                                                <A href=format!(
                                                    "/users/{}",
                                                    current.user_id,
                                                )>{current.name.clone()}</A>
                                            }
                                        })
                                }}
                            </div>
                            <div class="primary-nav">
                                {move || {
                                    if user.get().is_some() {
                                        view! {
                                            <a
                                                class="btn"
                                                href="#"
                                                on:click=move |ev: MouseEvent| {
                                                    ev.prevent_default();
                                                    if let Some(logout) = logout {
                                                        logout.run(());
                                                    }
                                                }
                                            >
                                                "Logout"
                                            </a>
                                        }
                                            .into_any()
                                    } else if show_signup {
                                        view! {
                                            <A href="/signup" attr:class="btn">
                                                "Sign up"
                                            </A>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <A href="/" attr:class="btn">
                                                "Login"
                                            </A>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </nav>
                    </div>
                </div>
            </div>
            {children()}
        </div>
    }
}

/// Titled content region below the header.
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

/// Inline error line rendered beside a form.
#[component]
pub fn ErrorText(message: String) -> impl IntoView {
    view! {
        <div>
            <span class="error">{message}</span>
        </div>
    }
}
