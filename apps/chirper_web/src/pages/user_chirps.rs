//! A single user's chirp page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use chirper_client::{ApiClient, StreamSource, use_session};
use chirper_types::User;

use crate::app::page_host;
use crate::components::{ChirpComposer, ChirpFeed};
use crate::layout::{ContentLayout, Section};

/// Route shim: re-create the page whenever the path user changes so each
/// viewed user gets its own stream connection and directory.
#[component]
pub fn UserChirpsPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let user_id = params.read().get("user_id").unwrap_or_default();
            view! { <UserChirps user_id=user_id/> }
        }}
    }
}

/// Chirps posted by one user, with the composer on the session user's own
/// page.
#[component]
fn UserChirps(user_id: String) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = use_session();
    let (profile, set_profile) = signal(None::<User>);
    let (not_found, set_not_found) = signal(false);

    {
        let api = api.clone();
        let id = user_id.clone();
        spawn_local(async move {
            match api.get_user(&id).await {
                Ok(Some(profile)) => {
                    set_profile.try_set(Some(profile));
                }
                Ok(None) => {
                    set_not_found.try_set(true);
                }
                Err(err) => {
                    log::warn!("loading user {id} failed: {err}");
                    set_not_found.try_set(true);
                }
            }
        });
    }

    let own_page = session.current().as_deref() == Some(user_id.as_str());
    let source = StreamSource::chirps(&page_host(), vec![user_id.clone()]);
    let subtitle = {
        let fallback = user_id.clone();
        Signal::derive(move || {
            let name = profile
                .get()
                .map(|profile| profile.name)
                .unwrap_or_else(|| fallback.clone());
            format!("Chirps for {name}")
        })
    };

    view! {
        {move || {
            if not_found.get() {
                let id = user_id.clone();
                view! {
                    <div class="user-chirps">
                        <h1>{format!("User {id} not found")}</h1>
                    </div>
                }
                    .into_any()
            } else {
                let source = source.clone();
                view! {
                    <ContentLayout subtitle=subtitle>
                        <Section>
                            <div class="small-12 columns">
                                <Show when=move || own_page>
                                    <ChirpComposer/>
                                </Show>
                                <ChirpFeed source=source.clone() seed=profile/>
                            </div>
                        </Section>
                    </ContentLayout>
                }
                    .into_any()
            }
        }}
    }
}
