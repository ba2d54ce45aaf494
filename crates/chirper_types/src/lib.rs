//! Shared wire types for the chirper front-end applications.
//!
//! Everything here mirrors the backend's JSON exactly: structs rename to
//! camelCase, messages are UTF-8 JSON frames, and nothing is validated beyond
//! what serde needs to build the value. Both the live streams and the REST
//! endpoints speak these types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user profile: identifier plus display name.
///
/// The friend list is only populated by the friend endpoints; the feed UI
/// reads `user_id` and `name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub friends: Vec<String>,
}

/// One message posted by a user.
///
/// `uuid` is the render key; `timestamp` is fractional epoch seconds as the
/// backend serializes instants, and is assigned server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chirp {
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<f64>,
    pub uuid: String,
}

/// Subscription payload for the chirp live stream, sent once when the socket
/// opens: `{"userIds": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChirpSubscription {
    pub user_ids: Vec<String>,
}

/// Body of `POST /api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub user_id: String,
    pub name: String,
}

/// Body of `POST /api/chirps/live/{userId}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChirp {
    pub user_id: String,
    pub message: String,
}

/// Body of `POST /api/users/{userId}/friends`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriend {
    pub friend_id: String,
}

/// Circuit breaker state as reported on the status stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
    /// Anything the dashboard does not recognize; rendered as-is with error
    /// styling rather than failing the whole frame.
    #[serde(other)]
    Unknown,
}

impl BreakerState {
    pub fn is_closed(&self) -> bool {
        matches!(self, BreakerState::Closed)
    }
}

impl fmt::Display for BreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BreakerState::Closed => "closed",
            BreakerState::Open => "open",
            BreakerState::HalfOpen => "half-open",
            BreakerState::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// Latency distribution of a circuit breaker, in microseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyMicros {
    pub median: f64,
    pub percentile98th: f64,
    pub percentile99th: f64,
    pub percentile999th: f64,
    pub mean: f64,
    pub min: u64,
    pub max: u64,
}

/// One circuit breaker's snapshot on the status stream.
///
/// The stream delivers an array of these per frame; each frame replaces the
/// previous one wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitBreakerStatus {
    pub id: String,
    pub timestamp: f64,
    pub state: BreakerState,
    pub total_success_count: u64,
    pub total_failure_count: u64,
    pub latency_micros: LatencyMicros,
    pub throughput_one_minute: f64,
    pub failed_throughput_one_minute: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chirp_parses_from_wire_json() {
        let json = r#"{
            "userId": "alice",
            "message": "hello chirpers",
            "timestamp": 1470145236.837,
            "uuid": "0191b8f0-2be1-44a4-9e45-2caa09e1a1a7"
        }"#;
        let chirp: Chirp = serde_json::from_str(json).unwrap();
        assert_eq!(chirp.user_id, "alice");
        assert_eq!(chirp.message, "hello chirpers");
        assert_eq!(chirp.uuid, "0191b8f0-2be1-44a4-9e45-2caa09e1a1a7");
    }

    #[test]
    fn chirp_timestamp_is_optional() {
        let json = r#"{"userId": "bob", "message": "hi", "uuid": "u-1"}"#;
        let chirp: Chirp = serde_json::from_str(json).unwrap();
        assert_eq!(chirp.timestamp, None);
    }

    #[test]
    fn user_friends_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"userId": "alice", "name": "Alice"}"#).unwrap();
        assert!(user.friends.is_empty());
    }

    #[test]
    fn post_bodies_serialize_camel_case() {
        let chirp = PostChirp {
            user_id: "alice".into(),
            message: "hello".into(),
        };
        assert_eq!(
            serde_json::to_string(&chirp).unwrap(),
            r#"{"userId":"alice","message":"hello"}"#
        );

        let friend = AddFriend {
            friend_id: "bob".into(),
        };
        assert_eq!(
            serde_json::to_string(&friend).unwrap(),
            r#"{"friendId":"bob"}"#
        );
    }

    #[test]
    fn subscription_serializes_user_id_list() {
        let sub = ChirpSubscription {
            user_ids: vec!["alice".into()],
        };
        assert_eq!(
            serde_json::to_string(&sub).unwrap(),
            r#"{"userIds":["alice"]}"#
        );
    }

    #[test]
    fn breaker_frame_parses_from_wire_json() {
        let json = r#"[{
            "id": "friendservice",
            "timestamp": 1470145236.837,
            "state": "half-open",
            "totalSuccessCount": 120,
            "totalFailureCount": 3,
            "latencyMicros": {
                "median": 820.0,
                "percentile98th": 1400.5,
                "percentile99th": 2200.0,
                "percentile999th": 12000.0,
                "mean": 910.2,
                "min": 240,
                "max": 15800
            },
            "throughputOneMinute": 41.7,
            "failedThroughputOneMinute": 0.2
        }]"#;
        let frame: Vec<CircuitBreakerStatus> = serde_json::from_str(json).unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame[0].state, BreakerState::HalfOpen);
        assert_eq!(frame[0].latency_micros.min, 240);
        assert!(!frame[0].state.is_closed());
    }

    #[test]
    fn unknown_breaker_state_does_not_fail_the_frame() {
        let state: BreakerState = serde_json::from_str(r#""isolated""#).unwrap();
        assert_eq!(state, BreakerState::Unknown);
        assert_eq!(state.to_string(), "unknown");
    }
}
