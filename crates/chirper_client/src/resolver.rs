//! Lazy user resolution with in-flight deduplication.
//!
//! Chirps carry only the author's id. The directory fetches each referenced
//! profile once, caches it for the subscriber's lifetime, and substitutes the
//! raw id until (and unless) the profile resolves. A failed lookup leaves the
//! id marked in flight, which also suppresses any retry for that id.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use leptos::task::spawn_local;

use chirper_types::User;

use crate::api::ApiClient;

/// Handed out by [`ResolverLedger::begin`] when the caller should fetch.
///
/// Carries the generation the fetch was started under so completions that
/// land after the subscriber retired are recognized and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    user_id: String,
    generation: u64,
}

impl FetchTicket {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Outcome of a cache lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// The profile is cached; use it synchronously.
    Cached(User),
    /// A fetch for this id is already outstanding (or has failed; failures
    /// are not retried).
    InFlight,
    /// No fetch yet: the caller owns starting one with this ticket.
    Fetch(FetchTicket),
}

/// Pure bookkeeping behind [`UserDirectory`]: resolved-profile cache,
/// in-flight set, and the retirement generation.
#[derive(Debug, Default)]
pub struct ResolverLedger {
    cache: HashMap<String, User>,
    in_flight: HashSet<String>,
    generation: u64,
}

impl ResolverLedger {
    pub fn begin(&mut self, user_id: &str) -> Lookup {
        if let Some(user) = self.cache.get(user_id) {
            return Lookup::Cached(user.clone());
        }
        if self.in_flight.contains(user_id) {
            return Lookup::InFlight;
        }
        self.in_flight.insert(user_id.to_owned());
        Lookup::Fetch(FetchTicket {
            user_id: user_id.to_owned(),
            generation: self.generation,
        })
    }

    /// Record a fetch outcome. Returns whether the cache changed.
    ///
    /// A ticket from a retired generation is ignored. A missing profile
    /// leaves the id in flight: lookups for it stay unresolved and no new
    /// fetch is started.
    pub fn complete(&mut self, ticket: FetchTicket, user: Option<User>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match user {
            Some(user) => {
                self.cache.insert(ticket.user_id, user);
                true
            }
            None => false,
        }
    }

    /// Seed the cache with a profile the caller already holds.
    pub fn insert(&mut self, user: User) {
        self.cache.insert(user.user_id.clone(), user);
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.cache.get(user_id)
    }

    /// Invalidate all outstanding tickets.
    pub fn retire(&mut self) {
        self.generation += 1;
    }
}

/// Per-subscriber resolver over the ledger.
///
/// Cheap to copy into closures; all state lives in the reactive arena.
#[derive(Clone, Copy)]
pub struct UserDirectory {
    ledger: StoredValue<ResolverLedger>,
    /// Bumped whenever the cache gains a profile, so names re-render.
    version: RwSignal<u64>,
    api: StoredValue<ApiClient>,
}

impl UserDirectory {
    /// Display name for `user_id`: the cached profile's name, or the raw id
    /// while unresolved. Starts at most one fetch per id.
    pub fn display_name(&self, user_id: &str) -> String {
        self.version.track();
        let lookup = self
            .ledger
            .try_update_value(|ledger| ledger.begin(user_id))
            .unwrap_or(Lookup::InFlight);
        match lookup {
            Lookup::Cached(user) => user.name,
            Lookup::InFlight => user_id.to_owned(),
            Lookup::Fetch(ticket) => {
                self.spawn_fetch(ticket);
                user_id.to_owned()
            }
        }
    }

    /// Seed the cache with a profile the caller already holds.
    pub fn insert(&self, user: User) {
        let inserted = self
            .ledger
            .try_update_value(|ledger| ledger.insert(user))
            .is_some();
        if inserted {
            self.version.try_update(|version| *version += 1);
        }
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let api = self.api.get_value();
        let directory = *self;
        spawn_local(async move {
            let user = match api.get_user(ticket.user_id()).await {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("resolving user {} failed: {err}", ticket.user_id());
                    None
                }
            };
            directory.complete(ticket, user);
        });
    }

    fn complete(&self, ticket: FetchTicket, user: Option<User>) {
        // try_* throughout: the completion may land after the owning scope
        // was disposed.
        let changed = self
            .ledger
            .try_update_value(|ledger| ledger.complete(ticket, user))
            .unwrap_or(false);
        if changed {
            self.version.try_update(|version| *version += 1);
        }
    }
}

/// Create a [`UserDirectory`] owned by the calling component.
///
/// Teardown retires the ledger, so fetches still in flight at unmount are
/// dropped on completion instead of touching discarded state.
pub fn use_user_directory(api: ApiClient) -> UserDirectory {
    let directory = UserDirectory {
        ledger: StoredValue::new(ResolverLedger::default()),
        version: RwSignal::new(0),
        api: StoredValue::new(api),
    };
    on_cleanup(move || {
        let _ = directory.ledger.try_update_value(|ledger| ledger.retire());
    });
    directory
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            user_id: "alice".into(),
            name: "Alice".into(),
            friends: Vec::new(),
        }
    }

    #[test]
    fn first_lookup_yields_a_ticket_and_marks_in_flight() {
        let mut ledger = ResolverLedger::default();
        let Lookup::Fetch(ticket) = ledger.begin("alice") else {
            panic!("expected a fetch ticket");
        };
        assert_eq!(ticket.user_id(), "alice");
        // Concurrent lookups for the same id do not start a second fetch.
        assert_eq!(ledger.begin("alice"), Lookup::InFlight);
    }

    #[test]
    fn successful_completion_resolves_subsequent_lookups() {
        let mut ledger = ResolverLedger::default();
        let Lookup::Fetch(ticket) = ledger.begin("alice") else {
            panic!("expected a fetch ticket");
        };
        assert!(ledger.complete(ticket, Some(alice())));
        assert_eq!(ledger.begin("alice"), Lookup::Cached(alice()));
    }

    #[test]
    fn failure_is_not_retried() {
        let mut ledger = ResolverLedger::default();
        let Lookup::Fetch(ticket) = ledger.begin("ghost") else {
            panic!("expected a fetch ticket");
        };
        assert!(!ledger.complete(ticket, None));
        // The id stays marked in flight, permanently suppressing a new fetch.
        assert_eq!(ledger.begin("ghost"), Lookup::InFlight);
        assert_eq!(ledger.get("ghost"), None);
    }

    #[test]
    fn stale_completion_after_retirement_is_dropped() {
        let mut ledger = ResolverLedger::default();
        let Lookup::Fetch(ticket) = ledger.begin("alice") else {
            panic!("expected a fetch ticket");
        };
        ledger.retire();
        assert!(!ledger.complete(ticket, Some(alice())));
        assert_eq!(ledger.get("alice"), None);
    }

    #[test]
    fn seeded_profiles_resolve_without_a_fetch() {
        let mut ledger = ResolverLedger::default();
        ledger.insert(alice());
        assert_eq!(ledger.begin("alice"), Lookup::Cached(alice()));
    }
}
