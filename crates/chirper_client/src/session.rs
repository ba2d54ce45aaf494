//! Explicit persisted state.
//!
//! Both apps keep exactly one string per browser profile: the chirper app's
//! current user id, and the dashboard's target `host:port`. Instead of
//! ambient localStorage reads scattered through the tree, each app creates
//! one of these objects at its root and threads it down via context.

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

const USER_ID_KEY: &str = "userId";
const SERVICE_HOST_PORT_KEY: &str = "serviceHostPort";

/// Fallback dashboard target when nothing is persisted yet.
pub const DEFAULT_SERVICE_HOST_PORT: &str = "localhost:27462";

/// Trimmed input, or `None` when there is nothing left.
///
/// Forms submit through this: a whitespace-only message, user id, friend id,
/// or host:port performs no network call and changes nothing.
pub fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Persisted login for the chirper app.
#[derive(Clone, Copy)]
pub struct Session {
    user_id: Signal<String>,
    set_user_id: WriteSignal<String>,
}

impl Session {
    fn new() -> Self {
        let (user_id, set_user_id, _) =
            use_local_storage::<String, FromToStringCodec>(USER_ID_KEY);
        Self {
            user_id,
            set_user_id,
        }
    }

    /// The persisted user id, if a login is stored.
    pub fn current(&self) -> Option<String> {
        let id = self.user_id.get();
        non_blank(&id).map(str::to_owned)
    }

    pub fn login(&self, user_id: &str) {
        self.set_user_id.set(user_id.to_owned());
    }

    pub fn logout(&self) {
        self.set_user_id.set(String::new());
    }
}

/// Create the session at the application root and provide it as context.
pub fn provide_session() {
    provide_context(Session::new());
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided. Call provide_session at the app root.")
}

/// Persisted `host:port` the dashboard monitors.
#[derive(Clone, Copy)]
pub struct MonitorTarget {
    host_port: Signal<String>,
    set_host_port: WriteSignal<String>,
}

impl MonitorTarget {
    fn new() -> Self {
        let (host_port, set_host_port, _) =
            use_local_storage::<String, FromToStringCodec>(SERVICE_HOST_PORT_KEY);
        Self {
            host_port,
            set_host_port,
        }
    }

    pub fn get(&self) -> String {
        let stored = self.host_port.get();
        match non_blank(&stored) {
            Some(host_port) => host_port.to_owned(),
            None => DEFAULT_SERVICE_HOST_PORT.to_owned(),
        }
    }

    /// Persist a new target. Whitespace-only input is ignored.
    pub fn set(&self, host_port: &str) -> bool {
        match non_blank(host_port) {
            Some(host_port) => {
                self.set_host_port.set(host_port.to_owned());
                true
            }
            None => false,
        }
    }
}

/// Create the monitor target at the dashboard root and provide it as context.
pub fn provide_monitor_target() {
    provide_context(MonitorTarget::new());
}

pub fn use_monitor_target() -> MonitorTarget {
    use_context::<MonitorTarget>()
        .expect("MonitorTarget not provided. Call provide_monitor_target at the app root.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  alice  "), Some("alice"));
        assert_eq!(non_blank("chirp away"), Some("chirp away"));
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank("\t\n"), None);
    }
}
