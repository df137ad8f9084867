//! Character Search - name lookups against the armory with stale-result guarding
//!
//! Each search target (the standalone search box, or the add-participant box
//! of one raid) has at most one current lookup. Starting a new lookup for a
//! target supersedes the previous one; when the older request resolves it
//! comes back as [`SearchOutcome::Stale`] and callers drop it.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::ports::outbound::{CharacterLookupPort, LookupError};
use raidmint_domain::{validate, CharacterProfile, RaidId, SchemaError};

/// Where a lookup result will be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTarget {
    Standalone,
    Raid(RaidId),
}

/// Handle for one lookup. Only the most recent ticket per target is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    target: SearchTarget,
    generation: u64,
}

impl LookupTicket {
    pub fn target(&self) -> SearchTarget {
        self.target
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchFailure {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Character payload rejected: {0}")]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(CharacterProfile),
    NotFound,
    FetchFailed(SearchFailure),
    /// The name was blank; no request was sent
    EmptyQuery,
    /// A newer lookup for the same target was started, or the target was
    /// dismissed, before this one resolved
    Stale,
}

impl SearchOutcome {
    /// Message to show next to the search box, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some("Character not found"),
            Self::FetchFailed(_) => Some("Failed to fetch character"),
            Self::Found(_) | Self::EmptyQuery | Self::Stale => None,
        }
    }

    pub fn profile(&self) -> Option<&CharacterProfile> {
        match self {
            Self::Found(profile) => Some(profile),
            _ => None,
        }
    }
}

#[derive(Default)]
struct PendingLookups {
    next_generation: u64,
    current: HashMap<SearchTarget, u64>,
}

pub struct CharacterSearch<L: CharacterLookupPort> {
    lookup: L,
    pending: Mutex<PendingLookups>,
}

impl<L: CharacterLookupPort> CharacterSearch<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            pending: Mutex::new(PendingLookups::default()),
        }
    }

    /// Start a lookup for `target`, superseding any pending one.
    pub fn begin(&self, target: SearchTarget) -> LookupTicket {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.next_generation += 1;
        let generation = pending.next_generation;
        pending.current.insert(target, generation);
        LookupTicket { target, generation }
    }

    pub fn is_current(&self, ticket: &LookupTicket) -> bool {
        let pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.current.get(&ticket.target) == Some(&ticket.generation)
    }

    /// Forget the pending lookup for `target`; its result will be stale.
    pub fn dismiss(&self, target: SearchTarget) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.current.remove(&target);
    }

    /// Run the lookup for `ticket`.
    pub async fn search(&self, ticket: LookupTicket, name: &str) -> SearchOutcome {
        let name = name.trim();
        if name.is_empty() {
            self.resolve(&ticket);
            return SearchOutcome::EmptyQuery;
        }

        tracing::debug!(search_target = ?ticket.target, name, "Looking up character");
        let outcome = match self.lookup.fetch_character(name).await {
            Ok(None) => SearchOutcome::NotFound,
            Ok(Some(raw)) => match validate(&raw) {
                Ok(profile) => SearchOutcome::Found(profile),
                Err(e) => {
                    tracing::warn!(name, field = %e.field, "Lookup returned an invalid profile");
                    SearchOutcome::FetchFailed(e.into())
                }
            },
            Err(e) => {
                tracing::warn!(name, "Character lookup failed: {}", e);
                SearchOutcome::FetchFailed(e.into())
            }
        };

        if self.resolve(&ticket) {
            outcome
        } else {
            tracing::debug!(search_target = ?ticket.target, name, "Discarding stale lookup");
            SearchOutcome::Stale
        }
    }

    /// Begin and run a lookup in one step.
    pub async fn lookup(&self, target: SearchTarget, name: &str) -> SearchOutcome {
        let ticket = self.begin(target);
        self.search(ticket, name).await
    }

    /// Clear `ticket` if it is still current. Returns whether it was.
    fn resolve(&self, ticket: &LookupTicket) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if pending.current.get(&ticket.target) == Some(&ticket.generation) {
            pending.current.remove(&ticket.target);
            true
        } else {
            false
        }
    }
}
