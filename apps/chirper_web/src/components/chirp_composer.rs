//! Chirp input form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chirper_client::{ApiClient, non_blank, use_session};
use chirper_types::PostChirp;

use crate::layout::ErrorText;

/// Form for posting a chirp as the session user.
///
/// Whitespace-only input performs no network call; a successful post clears
/// the field, a failed one renders an inline error and leaves it editable.
#[component]
pub fn ChirpComposer() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = use_session();
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw = message.get();
        let Some(text) = non_blank(&raw) else {
            return;
        };
        let text = text.to_owned();
        let Some(user_id) = session.current() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let chirp = PostChirp {
                user_id: user_id.clone(),
                message: text,
            };
            match api.post_chirp(&user_id, &chirp).await {
                Ok(()) => {
                    set_message.try_set(String::new());
                    set_error.try_set(None);
                }
                Err(err) => {
                    log::error!("posting chirp failed: {err}");
                    set_error.try_set(Some("Could not post the chirp.".to_owned()));
                }
            }
        });
    };

    view! {
        <form class="chirp-form" on:submit=submit>
            <input
                type="text"
                placeholder="Say something..."
                maxlength="140"
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <ErrorText message=message/> })}
            <input type="submit" value="Post"/>
        </form>
    }
}
