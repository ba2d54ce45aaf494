//! Login form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chirper_client::{ApiClient, non_blank, use_session};
use chirper_types::User;

use crate::layout::{ErrorText, Section};

/// Looks up the entered id; a known user becomes the persisted session, an
/// unknown one renders an inline error.
#[component]
pub fn LoginForm(on_login: Callback<User>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = use_session();
    let (user_id, set_user_id) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw = user_id.get();
        let Some(id) = non_blank(&raw) else {
            return;
        };
        let id = id.to_owned();
        let api = api.clone();
        spawn_local(async move {
            match api.get_user(&id).await {
                Ok(Some(profile)) => {
                    session.login(&profile.user_id);
                    on_login.run(profile);
                }
                Ok(None) => {
                    set_error.try_set(Some(format!("User {id} does not exist.")));
                }
                Err(err) => {
                    log::error!("login for {id} failed: {err}");
                    set_error.try_set(Some(format!("User {id} does not exist.")));
                }
            }
        });
    };

    view! {
        <Section>
            <div class="small-12 large-4 columns">
                <form class="login-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Username..."
                        prop:value=move || user_id.get()
                        on:input=move |ev| set_user_id.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|message| view! { <ErrorText message=message/> })}
                    <input type="submit" value="Login"/>
                </form>
            </div>
        </Section>
    }
}
