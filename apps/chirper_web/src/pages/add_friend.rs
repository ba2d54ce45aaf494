//! Add-friend page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use chirper_client::{ApiClient, non_blank, use_session};
use chirper_types::AddFriend;

use crate::layout::{ContentLayout, ErrorText, Section};

/// Links another user to the session user's feed.
///
/// The friend id is validated with a lookup before the POST so a typo gets a
/// precise error instead of a generic failure.
#[component]
pub fn AddFriendPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = use_session();
    let navigate = leptos_router::hooks::use_navigate();
    let (friend_id, set_friend_id) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let raw = friend_id.get();
        let Some(friend) = non_blank(&raw) else {
            return;
        };
        let friend = friend.to_owned();
        let Some(me) = session.current() else {
            return;
        };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.get_user(&friend).await {
                Ok(Some(_)) => {
                    let request = AddFriend {
                        friend_id: friend.clone(),
                    };
                    match api.add_friend(&me, &request).await {
                        Ok(()) => {
                            set_friend_id.try_set(String::new());
                            navigate("/", Default::default());
                        }
                        Err(err) => {
                            log::error!("adding friend {friend} failed: {err}");
                            set_error
                                .try_set(Some("Error occurred while adding friend.".to_owned()));
                        }
                    }
                }
                Ok(None) => {
                    set_error.try_set(Some(format!("User {friend} does not exist.")));
                }
                Err(err) => {
                    log::error!("looking up friend {friend} failed: {err}");
                    set_error.try_set(Some("Error occurred while adding friend.".to_owned()));
                }
            }
        });
    };

    view! {
        <ContentLayout subtitle="Add friend".to_string()>
            <Section>
                <div class="small-12 large-4 columns">
                    <form class="friend-form" on:submit=submit>
                        <input
                            type="text"
                            placeholder="Friends ID..."
                            prop:value=move || friend_id.get()
                            on:input=move |ev| set_friend_id.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|message| view! { <ErrorText message=message/> })}
                        <input type="submit" value="Add Friend"/>
                    </form>
                </div>
            </Section>
        </ContentLayout>
    }
}
