//! Application root component and session shell.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use chirper_client::{ApiClient, provide_session, use_session};
use chirper_types::User;

use crate::layout::{ContentLayout, PageLayout};
use crate::pages::{ActivityPage, AddFriendPage, LoginForm, SignUpPage, UserChirpsPage};

/// Host (including port) the page was served from; the live streams connect
/// back to it.
pub(crate) fn page_host() -> String {
    window().location().host().unwrap_or_default()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiClient::same_origin());
    provide_session();

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Not found"</p> }>
                <Route path=path!("/signup") view=SignUpPage/>
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("") view=ActivityPage/>
                    <Route path=path!("users/:user_id") view=UserChirpsPage/>
                    <Route path=path!("addFriend") view=AddFriendPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Session shell around the logged-in routes.
///
/// Validates the persisted user id once on mount; a stale id is cleared and
/// the login form shown instead of the child route.
#[component]
fn Shell() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = use_session();
    let (login_checked, set_login_checked) = signal(false);
    let (user, set_user) = signal(None::<User>);

    {
        let api = api.clone();
        let stored = session.current();
        spawn_local(async move {
            if let Some(id) = stored {
                match api.get_user(&id).await {
                    Ok(Some(profile)) => {
                        set_user.try_set(Some(profile));
                    }
                    Ok(None) => session.logout(),
                    Err(err) => {
                        log::warn!("session check for {id} failed: {err}");
                        session.logout();
                    }
                }
            }
            set_login_checked.try_set(true);
        });
    }

    let logout = Callback::new(move |()| {
        session.logout();
        set_user.set(None);
    });
    let on_login = Callback::new(move |profile: User| {
        set_user.set(Some(profile));
    });

    view! {
        {move || {
            if !login_checked.get() {
                return view! { <div class="loading"></div> }.into_any();
            }
            if user.get().is_some() {
                view! {
                    <PageLayout user=user logout=logout>
                        <Outlet/>
                    </PageLayout>
                }
                .into_any()
            } else {
                view! {
                    <PageLayout show_signup=true>
                        <ContentLayout subtitle="Login".to_string()>
                            <LoginForm on_login=on_login/>
                        </ContentLayout>
                    </PageLayout>
                }
                .into_any()
            }
        }}
    }
}
