mod candidate;
mod catalog;
mod matcher;
mod party;

use std::fmt::{Display, Formatter};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::model::cascade::{CascadeError, LocationField};
use crate::model::common::ElectionType;
use crate::model::id::RecordId;

pub use candidate::{CandidateTemplate, CandidateTemplateCore, NewCandidateTemplate};
pub use catalog::{RecordSet, TemplateCatalog};
pub use matcher::{match_candidates, match_parties, resolve_candidate};
pub use party::{NewPartyTemplate, PartyTemplate, PartyTemplateCore};

/// The two kinds of reusable record kept by the template store.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum TemplateKind {
    Candidate,
    Party,
}

impl TemplateKind {
    /// The path segment the template store files this kind under.
    pub fn path(self) -> &'static str {
        match self {
            Self::Candidate => "candidates",
            Self::Party => "parties",
        }
    }
}

impl Display for TemplateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Candidate => write!(f, "candidate"),
            Self::Party => write!(f, "party"),
        }
    }
}

/// A template as stored upstream, with its ID.
pub trait TemplateRecord: Serialize + DeserializeOwned + Send + Sync {
    const KIND: TemplateKind;

    fn id(&self) -> &RecordId;
}

/// A template body that failed its shape check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template is missing `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    Location(#[from] CascadeError),
    #[error("A {election_type} template needs a {field}")]
    IncompleteLocation {
        election_type: ElectionType,
        field: LocationField,
    },
}
