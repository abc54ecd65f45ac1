use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::model::cascade::RegionCascade;
use crate::model::common::{non_blank, ElectionType, LocationSelection};
use crate::model::id::RecordId;
use crate::model::region::RegionCatalog;

use super::{TemplateError, TemplateKind, TemplateRecord};

/// Core candidate template data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTemplateCore {
    pub candidate_name: String,
    pub party_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub election_type: ElectionType,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_constituency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly_constituency: Option<String>,
}

impl CandidateTemplateCore {
    /// The seat this candidate is contesting, as a selection.
    pub fn location(&self) -> LocationSelection {
        LocationSelection {
            state: Some(self.state.clone()),
            district: self.district.clone(),
            constituency: self.assembly_constituency.clone(),
            national_constituency: self.national_constituency.clone(),
        }
    }

    /// Check the template is usable for its election type and tidy it up.
    ///
    /// Names are trimmed, the location is run through a [`RegionCascade`] for
    /// the election type's scope, and location levels that scope doesn't use
    /// are dropped.
    pub fn normalize(self, catalog: &RegionCatalog) -> Result<Self, TemplateError> {
        let candidate_name =
            non_blank(&self.candidate_name).ok_or(TemplateError::MissingField("candidateName"))?;
        let party_name =
            non_blank(&self.party_name).ok_or(TemplateError::MissingField("partyName"))?;
        let state = non_blank(&self.state).ok_or(TemplateError::MissingField("state"))?;

        let scope = self.election_type.scope();
        let mut cascade = RegionCascade::new(*catalog, scope);
        cascade.set_state(&state);
        if scope.uses_district() {
            cascade.set_district(self.district.as_deref().unwrap_or_default())?;
        }
        if scope.uses_constituency() {
            cascade.set_constituency(self.assembly_constituency.as_deref().unwrap_or_default())?;
        }
        if scope.uses_national_constituency() {
            cascade.set_national_constituency(
                self.national_constituency.as_deref().unwrap_or_default(),
            )?;
        }
        if let Some(field) = scope.first_missing(cascade.selection()) {
            return Err(TemplateError::IncompleteLocation {
                election_type: self.election_type,
                field,
            });
        }

        let location = cascade.selection().clone();
        Ok(Self {
            candidate_name,
            party_name,
            party_symbol: self.party_symbol.as_deref().and_then(non_blank),
            description: self.description.as_deref().and_then(non_blank),
            photo: self.photo,
            election_type: self.election_type,
            state,
            district: location.district,
            national_constituency: location.national_constituency,
            assembly_constituency: location.constituency,
        })
    }
}

/// A candidate template that hasn't been stored yet.
pub type NewCandidateTemplate = CandidateTemplateCore;

/// A candidate template from the template store, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTemplate {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub template: CandidateTemplateCore,
}

impl Deref for CandidateTemplate {
    type Target = CandidateTemplateCore;

    fn deref(&self) -> &Self::Target {
        &self.template
    }
}

impl DerefMut for CandidateTemplate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.template
    }
}

impl TemplateRecord for CandidateTemplate {
    const KIND: TemplateKind = TemplateKind::Candidate;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl CandidateTemplateCore {
        /// A Lok Sabha candidate for Karnataka / Bagalkot.
        pub fn example_national() -> Self {
            Self {
                candidate_name: "Asha Patil".to_string(),
                party_name: "Jana Sangama".to_string(),
                party_symbol: Some("lamp".to_string()),
                description: Some("Two-term MP".to_string()),
                photo: None,
                election_type: ElectionType::National,
                state: "Karnataka".to_string(),
                district: None,
                national_constituency: Some("Bagalkot".to_string()),
                assembly_constituency: None,
            }
        }

        /// A Vidhan Sabha candidate for Karnataka / Bagalkot / Jamkhandi.
        pub fn example_assembly() -> Self {
            Self {
                candidate_name: "Ravi Kulkarni".to_string(),
                party_name: "Krishna Vedike".to_string(),
                party_symbol: None,
                description: None,
                photo: None,
                election_type: ElectionType::State,
                state: "Karnataka".to_string(),
                district: Some("Bagalkot".to_string()),
                national_constituency: None,
                assembly_constituency: Some("Jamkhandi".to_string()),
            }
        }

        /// A municipal candidate for Maharashtra / Pune.
        pub fn example_local() -> Self {
            Self {
                candidate_name: "Meera Joshi".to_string(),
                party_name: "Pune Nagrik Aghadi".to_string(),
                party_symbol: None,
                description: None,
                photo: None,
                election_type: ElectionType::Local,
                state: "Maharashtra".to_string(),
                district: Some("Pune".to_string()),
                national_constituency: None,
                assembly_constituency: None,
            }
        }
    }

    impl CandidateTemplate {
        pub fn example(id: &str, template: CandidateTemplateCore) -> Self {
            Self {
                id: RecordId::new(id),
                template,
            }
        }
    }
}
