use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::common::ElectionType;

use super::CandidateDraft;

/// A single edit to an election form. Every change to a [`super::DraftState`]
/// goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DraftAction {
    SetTitle {
        value: String,
    },
    SetDescription {
        value: String,
    },
    SetElectionType {
        value: ElectionType,
    },
    SetSchedule {
        #[serde(rename = "startDate")]
        start_date: Option<DateTime<Utc>>,
        #[serde(rename = "endDate")]
        end_date: Option<DateTime<Utc>>,
    },
    SetState {
        value: String,
    },
    SetDistrict {
        value: String,
    },
    SetConstituency {
        value: String,
    },
    SetNationalConstituency {
        value: String,
    },
    /// Local elections only; blank clears it.
    SetWard {
        value: String,
    },
    /// An empty list restores the default derived from the location.
    SetAllowedRegions {
        value: Vec<String>,
    },
    /// Append a row, blank unless given.
    AddCandidate {
        #[serde(default)]
        candidate: CandidateDraft,
    },
    /// Append a row copied from the candidate template with this exact name.
    AddCandidateFromTemplate {
        name: String,
    },
    /// Append a row with only the party filled in from a party template.
    AddCandidateFromParty {
        party: String,
    },
    /// Copy a party template's details onto an existing row.
    ApplyPartyTemplate {
        index: usize,
        party: String,
    },
    UpdateCandidate {
        index: usize,
        candidate: CandidateDraft,
    },
    RemoveCandidate {
        index: usize,
    },
}

impl DraftAction {
    /// Can this action change which templates apply to the form?
    pub fn affects_templates(&self) -> bool {
        matches!(
            self,
            Self::SetElectionType { .. }
                | Self::SetState { .. }
                | Self::SetDistrict { .. }
                | Self::SetConstituency { .. }
                | Self::SetNationalConstituency { .. }
        )
    }
}
