//! # Chirper Client
//!
//! Reactive live-update client library for the chirper front-end apps.
//!
//! The backend pushes events over plain WebSocket streams (UTF-8 JSON, one
//! payload per frame) and answers REST calls for everything else. This crate
//! wraps that surface in Leptos-friendly pieces:
//!
//! - **Single-subscriber streams**: [`use_event_stream`] opens exactly one
//!   socket for the calling component's lifetime and folds every inbound
//!   frame into reactive state with a pure reducer
//! - **Pure feed reducers**: [`EventLog`] (newest-first prepend) and
//!   [`Snapshot`] (wholesale replace)
//! - **Lazy entity resolution**: [`use_user_directory`] caches user lookups
//!   and deduplicates concurrent fetches per id
//! - **REST glue**: [`ApiClient`] for the user/chirp/friend endpoints
//! - **Explicit persisted state**: [`Session`] and [`MonitorTarget`] instead
//!   of ambient localStorage reads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use chirper_client::{use_event_stream, EventLog, StreamSource};
//! use chirper_types::Chirp;
//!
//! #[component]
//! fn Feed(host: String, user_id: String) -> impl IntoView {
//!     let feed = use_event_stream(
//!         StreamSource::activity(&host, &user_id),
//!         EventLog::new(),
//!         |log: &EventLog<Chirp>, chirp| log.push(chirp),
//!     );
//!
//!     view! {
//!         <For
//!             each=move || feed.state.get().entries().to_vec()
//!             key=|chirp| chirp.uuid.clone()
//!             let:chirp
//!         >
//!             <p>{chirp.message}</p>
//!         </For>
//!     }
//! }
//! ```

// Module declarations
mod api;
mod error;
mod feed;
mod format;
mod resolver;
mod session;
mod stream;

// Re-exports
pub use api::ApiClient;
pub use error::ApiError;
pub use feed::{EventLog, Snapshot};
pub use format::format_latency;
pub use resolver::{FetchTicket, Lookup, ResolverLedger, UserDirectory, use_user_directory};
pub use session::{
    DEFAULT_SERVICE_HOST_PORT, MonitorTarget, Session, non_blank, provide_monitor_target,
    provide_session, use_monitor_target, use_session,
};
pub use stream::{EventStreamHandle, StreamSource, use_event_stream};

// Re-export ConnectionReadyState for convenience
pub use leptos_use::core::ConnectionReadyState;
