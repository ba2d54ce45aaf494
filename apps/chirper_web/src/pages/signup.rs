//! Sign-up page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chirper_client::{ApiClient, non_blank, use_session};
use chirper_types::CreateUser;

use crate::layout::{ContentLayout, ErrorText, PageLayout, Section};

/// Creates a user and logs straight into it.
///
/// Lives outside the session shell: sign-up must be reachable while logged
/// out, and a successful registration navigates home where the shell picks
/// the fresh session up.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = use_session();
    let navigate = leptos_router::hooks::use_navigate();
    let (user_id, set_user_id) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw_id = user_id.get();
        let raw_name = name.get();
        let (Some(id), Some(display_name)) = (non_blank(&raw_id), non_blank(&raw_name)) else {
            return;
        };
        let id = id.to_owned();
        let display_name = display_name.to_owned();
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let user = CreateUser {
                user_id: id.clone(),
                name: display_name,
            };
            match api.create_user(&user).await {
                Ok(()) => {
                    session.login(&id);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    log::error!("sign-up for {id} failed: {err}");
                    set_error.try_set(Some(format!("User {id} already exists.")));
                }
            }
        });
    };

    view! {
        <PageLayout>
            <ContentLayout subtitle="Sign up".to_string()>
                <Section>
                    <div class="small-12 large-4 columns">
                        <form class="signup-form" on:submit=submit>
                            <input
                                type="text"
                                placeholder="Username..."
                                prop:value=move || user_id.get()
                                on:input=move |ev| set_user_id.set(event_target_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="Name..."
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            {move || {
                                error.get().map(|message| view! { <ErrorText message=message/> })
                            }}
                            <input type="submit" value="Sign up"/>
                        </form>
                    </div>
                </Section>
            </ContentLayout>
        </PageLayout>
    }
}
