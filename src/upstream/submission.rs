use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::auth::Credential;
use crate::model::draft::{CandidateDraft, ElectionDraft};
use crate::model::id::RecordId;

use super::Upstream;

/// What a successful submission created.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub election_id: RecordId,
    pub candidates_added: usize,
}

/// Create the election, then add its filled candidate rows one at a time.
///
/// If a candidate can't be added, the election record already exists. With
/// `rollback` set it is deleted again; either way the failure is reported as
/// [`Error::PartialElection`].
pub async fn submit(
    upstream: &Upstream,
    draft: &ElectionDraft,
    credential: &Credential,
    rollback: bool,
) -> Result<SubmissionReport> {
    let election_id = upstream
        .elections
        .create_election(&draft.spec, credential)
        .await?;
    info!("Created election {election_id}");

    let candidates: Vec<&CandidateDraft> = draft.filled_candidates().collect();
    let total = candidates.len();
    for (added, candidate) in candidates.into_iter().enumerate() {
        if let Err(e) = upstream
            .elections
            .add_candidate(&election_id, candidate, credential)
            .await
        {
            error!(
                "Adding candidate {} of {total} to election {election_id} failed: {e}",
                added + 1
            );
            let rolled_back = rollback && roll_back(upstream, &election_id, credential).await;
            return Err(Error::PartialElection {
                election_id,
                added,
                total,
                reason: e.to_string(),
                rolled_back,
            });
        }
    }

    info!("Added {total} candidates to election {election_id}");
    Ok(SubmissionReport {
        election_id,
        candidates_added: total,
    })
}

async fn roll_back(upstream: &Upstream, election_id: &RecordId, credential: &Credential) -> bool {
    match upstream
        .elections
        .delete_election(election_id, credential)
        .await
    {
        Ok(()) => {
            warn!("Rolled back partial election {election_id}");
            true
        }
        Err(e) => {
            error!("Failed to roll back partial election {election_id}: {e}");
            false
        }
    }
}
