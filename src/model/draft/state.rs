use chrono::{DateTime, Utc};

use crate::model::cascade::RegionCascade;
use crate::model::common::{non_blank, ElectionType, LocationSelection};
use crate::model::region::RegionCatalog;
use crate::model::template::{match_candidates, match_parties, resolve_candidate, TemplateCatalog};

use super::{
    CandidateDraft, DraftAction, DraftError, ElectionDraft, ElectionSpec, FetchKey, RegionHierarchy,
};

/// Everything entered into an election form so far.
///
/// [`DraftState::apply`] is the only way to change it, so the location stays
/// consistent with the election type and the catalog.
#[derive(Debug, Clone)]
pub struct DraftState {
    title: String,
    description: String,
    election_type: ElectionType,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    cascade: RegionCascade,
    ward: Option<String>,
    allowed_regions: Vec<String>,
    candidates: Vec<CandidateDraft>,
}

impl DraftState {
    pub fn new(catalog: RegionCatalog, election_type: ElectionType) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            election_type,
            start_date: None,
            end_date: None,
            cascade: RegionCascade::new(catalog, election_type.scope()),
            ward: None,
            allowed_regions: Vec::new(),
            candidates: Vec::new(),
        }
    }

    pub fn election_type(&self) -> ElectionType {
        self.election_type
    }

    pub fn location(&self) -> &LocationSelection {
        self.cascade.selection()
    }

    pub fn is_location_complete(&self) -> bool {
        self.cascade.is_complete()
    }

    pub fn candidates(&self) -> &[CandidateDraft] {
        &self.candidates
    }

    /// The templates this form currently needs.
    pub fn fetch_key(&self) -> FetchKey {
        FetchKey {
            election_type: self.election_type,
            location: self.location().clone(),
        }
    }

    /// Apply one edit. A rejected edit leaves the state untouched.
    pub fn apply(
        &mut self,
        action: DraftAction,
        templates: &TemplateCatalog,
    ) -> Result<(), DraftError> {
        match action {
            DraftAction::SetTitle { value } => self.title = value,
            DraftAction::SetDescription { value } => self.description = value,
            DraftAction::SetElectionType { value } => {
                self.election_type = value;
                self.cascade.set_scope(value.scope());
                if value != ElectionType::Local {
                    self.ward = None;
                }
            }
            DraftAction::SetSchedule {
                start_date,
                end_date,
            } => {
                self.start_date = start_date;
                self.end_date = end_date;
            }
            DraftAction::SetState { value } => self.cascade.set_state(&value),
            DraftAction::SetDistrict { value } => self.cascade.set_district(&value)?,
            DraftAction::SetConstituency { value } => self.cascade.set_constituency(&value)?,
            DraftAction::SetNationalConstituency { value } => {
                self.cascade.set_national_constituency(&value)?
            }
            DraftAction::SetWard { value } => {
                if self.election_type != ElectionType::Local {
                    return Err(DraftError::WardOutsideLocal);
                }
                self.ward = non_blank(&value);
            }
            DraftAction::SetAllowedRegions { value } => {
                self.allowed_regions = value.iter().filter_map(|r| non_blank(r)).collect();
            }
            DraftAction::AddCandidate { candidate } => self.candidates.push(candidate),
            DraftAction::AddCandidateFromTemplate { name } => {
                let matched = match_candidates(templates, self.election_type, self.location());
                let template = resolve_candidate(&name, matched)
                    .ok_or(DraftError::UnknownTemplate(name))?;
                self.candidates.push(CandidateDraft::from_template(template));
            }
            DraftAction::AddCandidateFromParty { party } => {
                let template = self.resolve_party(templates, party)?;
                self.candidates.push(CandidateDraft::from_party(template));
            }
            DraftAction::ApplyPartyTemplate { index, party } => {
                let template = self.resolve_party(templates, party)?;
                self.candidate_mut(index)?.apply_party(template);
            }
            DraftAction::UpdateCandidate { index, candidate } => {
                *self.candidate_mut(index)? = candidate;
            }
            DraftAction::RemoveCandidate { index } => {
                self.candidate_mut(index)?;
                self.candidates.remove(index);
            }
        }
        Ok(())
    }

    /// Assemble the election as it would be submitted.
    pub fn build(&self) -> ElectionDraft {
        let location = self.location();
        let constituency = match self.election_type {
            ElectionType::National => location.national_constituency.clone(),
            ElectionType::State => location.constituency.clone(),
            ElectionType::Local => None,
        };
        let allowed_regions = if self.allowed_regions.is_empty() {
            self.default_allowed_regions()
        } else {
            self.allowed_regions.clone()
        };

        ElectionDraft {
            spec: ElectionSpec {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                election_type: self.election_type,
                start_date: self.start_date,
                end_date: self.end_date,
                allowed_regions,
                region_hierarchy: RegionHierarchy {
                    state: location.state.clone(),
                    district: location.district.clone(),
                    ward: self.ward.clone(),
                },
                constituency,
            },
            candidates: self.candidates.clone(),
        }
    }

    /// The region the seat itself covers, if chosen.
    fn default_allowed_regions(&self) -> Vec<String> {
        let location = self.location();
        let region = match self.election_type {
            ElectionType::National => location.national_constituency.clone(),
            ElectionType::State => location.constituency.clone(),
            ElectionType::Local => self.ward.clone().or_else(|| location.district.clone()),
        };
        region.into_iter().collect()
    }

    fn resolve_party<'t>(
        &self,
        templates: &'t TemplateCatalog,
        party: String,
    ) -> Result<&'t crate::model::template::PartyTemplate, DraftError> {
        match_parties(templates, self.election_type, None)
            .into_iter()
            .find(|template| template.party_name == party)
            .ok_or(DraftError::UnknownParty(party))
    }

    fn candidate_mut(&mut self, index: usize) -> Result<&mut CandidateDraft, DraftError> {
        self.candidates
            .get_mut(index)
            .ok_or(DraftError::NoSuchCandidate(index))
    }
}
