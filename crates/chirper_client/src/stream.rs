//! Live-update streams: endpoint sources and the single-subscriber hook.

use std::sync::Arc;

use codee::string::JsonSerdeCodec;
use leptos::prelude::*;
use leptos_use::core::ConnectionReadyState;
use leptos_use::{
    DummyEncoder, UseWebSocketOptions, UseWebSocketReturn, use_websocket_with_options,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use chirper_types::ChirpSubscription;

/// A live endpoint plus the subscription payload transmitted once the socket
/// reports open.
///
/// All streams share this shape; sources that need no payload simply carry
/// `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamSource<Tx = ()> {
    url: String,
    subscribe: Option<Tx>,
}

impl StreamSource<ChirpSubscription> {
    /// Chirps posted by a set of users: `ws://{host}/api/chirps/live`,
    /// subscribing with `{"userIds": [...]}` on open.
    pub fn chirps(host: &str, user_ids: Vec<String>) -> Self {
        Self {
            url: format!("ws://{host}/api/chirps/live"),
            subscribe: Some(ChirpSubscription { user_ids }),
        }
    }

    /// Chirps from a user and their friends:
    /// `ws://{host}/api/activity/{userId}/live`.
    pub fn activity(host: &str, user_id: &str) -> Self {
        Self {
            url: format!("ws://{host}/api/activity/{user_id}/live"),
            subscribe: None,
        }
    }
}

impl StreamSource<()> {
    /// Circuit-breaker snapshots from a service:
    /// `ws://{host_port}/_status/circuit-breaker/stream`.
    pub fn circuit_breakers(host_port: &str) -> Self {
        Self {
            url: format!("ws://{host_port}/_status/circuit-breaker/stream"),
            subscribe: None,
        }
    }
}

impl<Tx> StreamSource<Tx> {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn subscribe_payload(&self) -> Option<&Tx> {
        self.subscribe.as_ref()
    }
}

/// Reactive handle returned by [`use_event_stream`].
pub struct EventStreamHandle<S: 'static> {
    /// Folded feed state; starts at `init` and advances once per inbound
    /// frame, in delivery order.
    pub state: ReadSignal<S>,
    /// State of the underlying connection.
    pub ready_state: Signal<ConnectionReadyState>,
}

impl<S> Clone for EventStreamHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for EventStreamHandle<S> {}

/// Subscribe the calling component to a live stream.
///
/// Opens exactly one WebSocket for the component's lifetime; the connection
/// is closed once when the component's scope is disposed. Each inbound frame
/// is decoded as UTF-8 JSON into `Rx` and folded into the state with the
/// pure `fold(&state, event) -> state` reducer.
///
/// There is no reconnection and no buffering: a socket error or close is
/// logged and the feed silently stops updating. A frame that fails to decode
/// is dropped by the codec layer for the same reason.
pub fn use_event_stream<Tx, Rx, S, F>(
    source: StreamSource<Tx>,
    init: S,
    fold: F,
) -> EventStreamHandle<S>
where
    Tx: Serialize + Clone + Send + Sync + 'static,
    Rx: DeserializeOwned + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    F: Fn(&S, Rx) -> S + Send + Sync + 'static,
{
    let (state, set_state) = signal(init);

    // The send handle only exists once the hook returns, but the subscribe
    // payload has to go out from on_open. Stash the handle in a StoredValue
    // the callback reads at fire time; it is set synchronously below, before
    // the socket can possibly open.
    let send_fn: StoredValue<Option<Arc<dyn Fn(&Tx) + Send + Sync>>> = StoredValue::new(None);
    let subscribe = StoredValue::new(source.subscribe);

    let UseWebSocketReturn {
        ready_state,
        message,
        send,
        ..
    } = use_websocket_with_options::<Tx, Rx, JsonSerdeCodec, (), DummyEncoder>(
        &source.url,
        UseWebSocketOptions::default()
            .on_open(move |_| {
                if let (Some(send), Some(payload)) = (send_fn.get_value(), subscribe.get_value()) {
                    send(&payload);
                }
            })
            .on_error(move |e| {
                // No recovery: a broken stream simply stops delivering.
                log::warn!("live stream error: {e:?}");
            }),
    );

    send_fn.set_value(Some(Arc::new(move |payload: &Tx| send(payload))));

    // The message signal is set once per inbound frame; fold each into the
    // feed state in delivery order.
    Effect::new(move |_| {
        if let Some(event) = message.get() {
            set_state.update(|state| *state = fold(state, event));
        }
    });

    EventStreamHandle { state, ready_state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chirp_source_subscribes_with_the_user_list() {
        let source = StreamSource::chirps("localhost:9000", vec!["alice".into()]);
        assert_eq!(source.url(), "ws://localhost:9000/api/chirps/live");
        assert_eq!(
            serde_json::to_string(source.subscribe_payload().unwrap()).unwrap(),
            r#"{"userIds":["alice"]}"#
        );
    }

    #[test]
    fn activity_source_has_no_subscribe_payload() {
        let source = StreamSource::activity("localhost:9000", "alice");
        assert_eq!(source.url(), "ws://localhost:9000/api/activity/alice/live");
        assert!(source.subscribe_payload().is_none());
    }

    #[test]
    fn breaker_source_targets_the_status_endpoint() {
        let source = StreamSource::circuit_breakers("localhost:27462");
        assert_eq!(
            source.url(),
            "ws://localhost:27462/_status/circuit-breaker/stream"
        );
        assert!(source.subscribe_payload().is_none());
    }
}
