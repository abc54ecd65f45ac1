use serde::{Deserialize, Serialize};

use crate::model::template::{CandidateTemplate, PartyTemplate};

/// One candidate row of an election being configured.
///
/// Rows may be half-filled while the form is edited; uniqueness is only
/// enforced when the election is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub party: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_description: Option<String>,
}

impl CandidateDraft {
    /// Copy every field a candidate template carries.
    pub fn from_template(template: &CandidateTemplate) -> Self {
        Self {
            name: template.candidate_name.clone(),
            party: template.party_name.clone(),
            biography: template.description.clone(),
            photo: template.photo.clone(),
            party_symbol: template.party_symbol.clone(),
            party_description: None,
        }
    }

    /// A row with only the party filled in.
    pub fn from_party(party: &PartyTemplate) -> Self {
        let mut draft = Self::default();
        draft.apply_party(party);
        draft
    }

    /// Overwrite the party fields, leaving the candidate's own details alone.
    pub fn apply_party(&mut self, party: &PartyTemplate) {
        self.party = party.party_name.clone();
        self.party_symbol = party.party_symbol.clone();
        self.party_description = party.history.clone();
    }

    /// Does this row have both a name and a party? Other rows are ignored.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty() && !self.party.trim().is_empty()
    }
}
