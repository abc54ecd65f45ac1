use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::Arc;

use rocket::{
    http::{
        impl_from_uri_param_identity,
        uri::fmt::{Path, UriDisplay},
    },
    request::FromParam,
    tokio::sync::Mutex,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::model::auth::Credential;
use crate::model::common::LocationSelection;
use crate::model::eligibility::validate_draft;
use crate::model::template::{
    match_candidates, match_parties, CandidateTemplate, PartyTemplate, TemplateCatalog,
};

use super::{DraftAction, DraftError, DraftState, ElectionDraft, FetchTicket, FetchTracker, Settlement};

/// An unguessable handle on a draft session.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct SessionId(u64);

impl SessionId {
    pub fn random() -> Self {
        Self(rand::random())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

impl<'a> FromParam<'a> for SessionId {
    type Error = ParseIntError;

    fn from_param(param: &'a str) -> std::result::Result<Self, Self::Error> {
        param.parse()
    }
}

impl UriDisplay<Path> for SessionId {
    fn fmt(&self, formatter: &mut rocket::http::uri::fmt::Formatter<'_, Path>) -> std::fmt::Result {
        formatter.write_value(self.to_string())
    }
}

impl_from_uri_param_identity!([Path] SessionId);

impl Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// One administrator's election form, with the templates fetched for it.
#[derive(Debug)]
pub struct DraftSession {
    state: DraftState,
    templates: TemplateCatalog,
    fetch: FetchTracker,
    submitting: bool,
}

impl DraftSession {
    pub fn new(state: DraftState) -> Self {
        Self {
            state,
            templates: TemplateCatalog::default(),
            fetch: FetchTracker::default(),
            submitting: false,
        }
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn fetch(&self) -> &FetchTracker {
        &self.fetch
    }

    /// Start a template fetch if the current form hasn't had one.
    pub fn refresh_templates(&mut self) -> Option<FetchTicket> {
        let key = self.state.fetch_key();
        self.fetch
            .needs_fetch(&key)
            .then(|| self.fetch.begin(key))
    }

    /// Apply an edit, returning a ticket if the edit calls for new templates.
    pub fn apply(&mut self, action: DraftAction) -> std::result::Result<Option<FetchTicket>, DraftError> {
        if self.submitting {
            return Err(DraftError::Submitting);
        }
        let affects_templates = action.affects_templates();
        self.state.apply(action, &self.templates)?;
        Ok(if affects_templates {
            self.refresh_templates()
        } else {
            None
        })
    }

    /// Hand back a fetch response. Returns whether it was used.
    pub fn settle_fetch<E>(
        &mut self,
        ticket: &FetchTicket,
        result: std::result::Result<TemplateCatalog, E>,
    ) -> bool
    where
        E: Display,
    {
        let current = self.state.fetch_key();
        match self.fetch.settle(ticket, &current, result) {
            Settlement::Apply(templates) => {
                self.templates = templates;
                true
            }
            Settlement::Discard => false,
        }
    }

    pub fn matched_candidates(&self) -> Vec<&CandidateTemplate> {
        match_candidates(
            &self.templates,
            self.state.election_type(),
            self.state.location(),
        )
    }

    pub fn matched_parties(&self, typed_so_far: Option<&str>) -> Vec<&PartyTemplate> {
        match_parties(&self.templates, self.state.election_type(), typed_so_far)
    }

    /// Freeze the draft for submission once it is settled and valid.
    pub fn begin_submission(&mut self) -> Result<ElectionDraft> {
        if self.submitting {
            return Err(DraftError::Submitting.into());
        }
        if self.fetch.is_pending() {
            return Err(DraftError::FetchPending.into());
        }
        let draft = self.state.build();
        validate_draft(&draft)?;
        self.submitting = true;
        Ok(draft)
    }

    /// Unfreeze the draft after a failed submission.
    pub fn abort_submission(&mut self) {
        self.submitting = false;
    }

    pub fn view(&self, id: SessionId) -> DraftView {
        DraftView {
            id,
            location: self.state.location().clone(),
            location_complete: self.state.is_location_complete(),
            draft: self.state.build(),
            templates_pending: self.fetch.is_pending(),
            template_error: self.fetch.last_error().map(str::to_string),
            submitting: self.submitting,
        }
    }
}

/// A snapshot of a draft session, as returned to the form.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub id: SessionId,
    pub location: LocationSelection,
    pub location_complete: bool,
    pub draft: ElectionDraft,
    pub templates_pending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_error: Option<String>,
    pub submitting: bool,
}

pub type SharedSession = Arc<Mutex<DraftSession>>;

/// Every open draft session, each owned by the credential that opened it.
#[derive(Default)]
pub struct DraftSessions {
    sessions: Mutex<HashMap<SessionId, (Credential, SharedSession)>>,
}

impl DraftSessions {
    pub async fn insert(&self, owner: Credential, session: DraftSession) -> (SessionId, SharedSession) {
        let mut sessions = self.sessions.lock().await;
        let mut id = SessionId::random();
        while sessions.contains_key(&id) {
            id = SessionId::random();
        }
        let session = Arc::new(Mutex::new(session));
        sessions.insert(id, (owner, session.clone()));
        info!("Opened draft session {id}");
        (id, session)
    }

    /// Look up a session. Sessions owned by someone else are reported as
    /// missing, so their existence isn't leaked.
    pub async fn get(&self, id: SessionId, credential: &Credential) -> Result<SharedSession> {
        let sessions = self.sessions.lock().await;
        match sessions.get(&id) {
            Some((owner, session)) if owner == credential => Ok(session.clone()),
            _ => Err(Error::not_found(format!("Draft {}", id))),
        }
    }

    pub async fn remove(&self, id: SessionId, credential: &Credential) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(&id) {
            Some((owner, _)) if owner == credential => {
                sessions.remove(&id);
                info!("Closed draft session {id}");
                Ok(())
            }
            _ => Err(Error::not_found(format!("Draft {}", id))),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
