use rocket::{serde::json::Json, Route, State};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::Result,
    logging::RequestId,
    model::{
        auth::Credential,
        common::ElectionType,
        draft::{
            DraftAction, DraftSession, DraftSessions, DraftState, DraftView, FetchTicket,
            SessionId, SharedSession,
        },
        eligibility::validate_draft,
        region::RegionCatalog,
        template::{CandidateTemplate, PartyTemplate},
    },
    upstream::{fetch_catalog, submit, SubmissionReport, Upstream},
};

pub fn routes() -> Vec<Route> {
    routes![
        create_draft,
        get_draft,
        apply_action,
        draft_candidates,
        draft_parties,
        validate,
        submit_draft,
        delete_draft,
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewDraft {
    election_type: ElectionType,
}

/// The outcome of checking a draft without submitting it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Validation {
    valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

/// Fetch templates for `ticket` and hand them to the session, which drops
/// them if the form has moved on in the meantime.
async fn load_templates(
    session: &SharedSession,
    ticket: FetchTicket,
    upstream: &Upstream,
    credential: &Credential,
) {
    let result = fetch_catalog(&*upstream.templates, credential).await;
    if !session.lock().await.settle_fetch(&ticket, result) {
        debug!("Dropped stale templates from fetch {}", ticket.generation);
    }
}

#[post("/drafts", data = "<new_draft>", format = "json")]
async fn create_draft(
    credential: Credential,
    new_draft: Json<NewDraft>,
    catalog: &State<RegionCatalog>,
    sessions: &State<DraftSessions>,
    upstream: &State<Upstream>,
) -> Json<DraftView> {
    let mut session = DraftSession::new(DraftState::new(**catalog, new_draft.election_type));
    let ticket = session.refresh_templates();
    let (id, session) = sessions.insert(credential.clone(), session).await;

    if let Some(ticket) = ticket {
        load_templates(&session, ticket, upstream, &credential).await;
    }
    let view = session.lock().await.view(id);
    Json(view)
}

#[get("/drafts/<id>")]
async fn get_draft(
    credential: Credential,
    id: SessionId,
    sessions: &State<DraftSessions>,
) -> Result<Json<DraftView>> {
    let session = sessions.get(id, &credential).await?;
    let view = session.lock().await.view(id);
    Ok(Json(view))
}

#[post("/drafts/<id>/actions", data = "<action>", format = "json")]
async fn apply_action(
    credential: Credential,
    id: SessionId,
    action: Json<DraftAction>,
    sessions: &State<DraftSessions>,
    upstream: &State<Upstream>,
) -> Result<Json<DraftView>> {
    let session = sessions.get(id, &credential).await?;
    // The lock is released while templates load, so other edits can land.
    let ticket = session.lock().await.apply(action.into_inner())?;
    if let Some(ticket) = ticket {
        load_templates(&session, ticket, upstream, &credential).await;
    }
    let view = session.lock().await.view(id);
    Ok(Json(view))
}

/// Candidate templates for the draft's seat.
#[get("/drafts/<id>/candidates")]
async fn draft_candidates(
    credential: Credential,
    id: SessionId,
    sessions: &State<DraftSessions>,
) -> Result<Json<Vec<CandidateTemplate>>> {
    let session = sessions.get(id, &credential).await?;
    let session = session.lock().await;
    Ok(Json(session.matched_candidates().into_iter().cloned().collect()))
}

/// Party templates for the draft's election type, narrowed by `q`.
#[get("/drafts/<id>/parties?<q>")]
async fn draft_parties(
    credential: Credential,
    id: SessionId,
    q: Option<&str>,
    sessions: &State<DraftSessions>,
) -> Result<Json<Vec<PartyTemplate>>> {
    let session = sessions.get(id, &credential).await?;
    let session = session.lock().await;
    Ok(Json(session.matched_parties(q).into_iter().cloned().collect()))
}

#[get("/drafts/<id>/validation")]
async fn validate(
    credential: Credential,
    id: SessionId,
    sessions: &State<DraftSessions>,
) -> Result<Json<Validation>> {
    let session = sessions.get(id, &credential).await?;
    let draft = session.lock().await.state().build();
    let validation = match validate_draft(&draft) {
        Ok(()) => Validation {
            valid: true,
            error: None,
            kind: None,
        },
        Err(e) => Validation {
            valid: false,
            error: Some(e.to_string()),
            kind: Some(e.kind().to_string()),
        },
    };
    Ok(Json(validation))
}

#[post("/drafts/<id>/submit")]
async fn submit_draft(
    request: RequestId,
    credential: Credential,
    id: SessionId,
    sessions: &State<DraftSessions>,
    upstream: &State<Upstream>,
    config: &State<Config>,
) -> Result<Json<SubmissionReport>> {
    let session = sessions.get(id, &credential).await?;
    let draft = session.lock().await.begin_submission()?;
    info!("req{request} submitting draft {id} ({})", draft.title);

    match submit(upstream, &draft, &credential, config.rollback_partial_elections()).await {
        Ok(report) => {
            sessions.remove(id, &credential).await?;
            Ok(Json(report))
        }
        Err(e) => {
            session.lock().await.abort_submission();
            Err(e)
        }
    }
}

#[delete("/drafts/<id>")]
async fn delete_draft(
    credential: Credential,
    id: SessionId,
    sessions: &State<DraftSessions>,
) -> Result<()> {
    sessions.remove(id, &credential).await
}
