//! Live chirp list bound to a stream source.

use leptos::prelude::*;
use leptos_router::components::A;

use chirper_client::{ApiClient, EventLog, StreamSource, use_event_stream, use_user_directory};
use chirper_types::{Chirp, ChirpSubscription, User};

/// Live list of chirps, newest first.
///
/// Owns one stream connection for its lifetime and a user directory that
/// resolves author names lazily; chirps from unresolved authors render the
/// raw id until the profile arrives.
#[component]
pub fn ChirpFeed(
    source: StreamSource<ChirpSubscription>,
    /// A profile the caller already holds (e.g. the viewed user's own page),
    /// seeded into the directory so its chirps never render with a raw id.
    #[prop(into, default = Signal::derive(|| None))]
    seed: Signal<Option<User>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let directory = use_user_directory(api);

    Effect::new(move |_| {
        if let Some(profile) = seed.get() {
            directory.insert(profile);
        }
    });

    let feed = use_event_stream(source, EventLog::new(), |log: &EventLog<Chirp>, chirp| {
        log.push(chirp)
    });

    view! {
        <div class="chirp-stream">
            <hr/>
            <For
                each=move || feed.state.get().entries().to_vec()
                key=|chirp: &Chirp| chirp.uuid.clone()
                children=move |chirp: Chirp| {
                    let author = chirp.user_id.clone();
                    let name = Signal::derive(move || directory.display_name(&author));
                    view! {
                        <ChirpCard
                            user_id=chirp.user_id.clone()
                            name=name
                            message=chirp.message.clone()
                        />
                    }
                }
            />
        </div>
    }
}

/// A single chirp: author link plus message text.
#[component]
fn ChirpCard(user_id: String, name: Signal<String>, message: String) -> impl IntoView {
    view! {
        <div class="chirp">
            <h3 class="chirp-user">
                <A href=format!("/users/{user_id}")>{move || name.get()}</A>
            </h3>
            {message}
            <hr/>
        </div>
    }
}
