//! The activity feed: chirps from the session user and their friends.

use leptos::prelude::*;

use chirper_client::{StreamSource, use_session};

use crate::app::page_host;
use crate::components::{ChirpComposer, ChirpFeed};
use crate::layout::{ContentLayout, Section};

#[component]
pub fn ActivityPage() -> impl IntoView {
    let session = use_session();
    // The shell guarantees a login before this page renders.
    let user_id = session.current().unwrap_or_default();
    let source = StreamSource::activity(&page_host(), &user_id);

    view! {
        <ContentLayout subtitle="Chirps feed".to_string()>
            <Section>
                <div class="small-12 columns">
                    <ChirpComposer/>
                    <ChirpFeed source=source/>
                </div>
            </Section>
        </ContentLayout>
    }
}
