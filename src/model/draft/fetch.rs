use std::fmt::Display;

use crate::model::common::{ElectionType, LocationSelection};

/// What a template fetch was made for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub election_type: ElectionType,
    pub location: LocationSelection,
}

/// Handed out when a fetch starts, and handed back with its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub key: FetchKey,
}

/// What to do with a fetch response.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Settlement<T> {
    /// The response is current; use it.
    Apply(T),
    /// A newer fetch has started, or the form has moved on.
    Discard,
}

/// Latest-request-wins bookkeeping for template fetches.
///
/// Each new fetch bumps the generation. Only a response carrying the current
/// generation, for the key the form currently has, is applied. Failed fetches
/// settle to an empty result and keep the error message for display.
#[derive(Debug, Default)]
pub struct FetchTracker {
    generation: u64,
    requested: Option<FetchKey>,
    pending: bool,
    last_error: Option<String>,
}

impl FetchTracker {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Has nothing been fetched for `key` yet?
    pub fn needs_fetch(&self, key: &FetchKey) -> bool {
        self.requested.as_ref() != Some(key)
    }

    /// Start a fetch for `key`, superseding any fetch still in flight.
    pub fn begin(&mut self, key: FetchKey) -> FetchTicket {
        self.generation += 1;
        self.requested = Some(key.clone());
        self.pending = true;
        debug!("Template fetch {} started", self.generation);
        FetchTicket {
            generation: self.generation,
            key,
        }
    }

    /// Decide whether a response is still wanted, and record its outcome if so.
    pub fn settle<T, E>(
        &mut self,
        ticket: &FetchTicket,
        current: &FetchKey,
        result: Result<T, E>,
    ) -> Settlement<T>
    where
        T: Default,
        E: Display,
    {
        if ticket.generation != self.generation || &ticket.key != current {
            debug!(
                "Discarding stale template fetch {} (latest is {})",
                ticket.generation, self.generation
            );
            return Settlement::Discard;
        }

        self.pending = false;
        match result {
            Ok(value) => {
                self.last_error = None;
                Settlement::Apply(value)
            }
            Err(e) => {
                warn!("Template fetch {} failed: {e}", ticket.generation);
                self.last_error = Some(e.to_string());
                Settlement::Apply(T::default())
            }
        }
    }
}
