mod action;
mod candidate;
mod election;
mod fetch;
mod session;
mod state;

use thiserror::Error;

use crate::model::cascade::CascadeError;

pub use action::DraftAction;
pub use candidate::CandidateDraft;
pub use election::{ElectionDraft, ElectionSpec, RegionHierarchy, Seat};
pub use fetch::{FetchKey, FetchTicket, FetchTracker, Settlement};
pub use session::{DraftSession, DraftSessions, DraftView, SessionId, SharedSession};
pub use state::DraftState;

/// An edit or submission a draft refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error(transparent)]
    Cascade(#[from] CascadeError),
    #[error("No candidate template named {0:?} for this seat")]
    UnknownTemplate(String),
    #[error("No party template named {0:?} for this election type")]
    UnknownParty(String),
    #[error("There is no candidate row {0}")]
    NoSuchCandidate(usize),
    #[error("Only local elections have a ward")]
    WardOutsideLocal,
    #[error("The draft is being submitted")]
    Submitting,
    #[error("Templates for this seat are still loading")]
    FetchPending,
}
