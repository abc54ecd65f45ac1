use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use reqwest::{Client, Url};
use rocket::tokio::sync::Mutex;
use serde::Deserialize;

use crate::model::auth::Credential;
use crate::model::draft::{CandidateDraft, ElectionSpec};
use crate::model::id::RecordId;

use super::{endpoint, send, UpstreamError};

const SERVICE: &str = "election service";

/// The service that persists elections and their candidates.
#[rocket::async_trait]
pub trait ElectionService: Send + Sync {
    /// Create the election record, without candidates.
    async fn create_election(
        &self,
        spec: &ElectionSpec,
        credential: &Credential,
    ) -> Result<RecordId, UpstreamError>;

    async fn add_candidate(
        &self,
        election: &RecordId,
        candidate: &CandidateDraft,
        credential: &Credential,
    ) -> Result<(), UpstreamError>;

    async fn delete_election(
        &self,
        election: &RecordId,
        credential: &Credential,
    ) -> Result<(), UpstreamError>;
}

/// Reply to an election creation. Services differ in what they call the ID.
#[derive(Deserialize)]
struct Created {
    #[serde(alias = "_id", alias = "electionId")]
    id: RecordId,
}

/// An election service reached over HTTP.
pub struct HttpElectionService {
    client: Client,
    base_url: Url,
}

impl HttpElectionService {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[rocket::async_trait]
impl ElectionService for HttpElectionService {
    async fn create_election(
        &self,
        spec: &ElectionSpec,
        credential: &Credential,
    ) -> Result<RecordId, UpstreamError> {
        let url = endpoint(&self.base_url, &["elections"]);
        let request = self
            .client
            .post(url)
            .bearer_auth(credential.token())
            .json(spec);
        let response = send(SERVICE, request).await?;
        let Created { id } = response
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed {
                service: SERVICE,
                message: e.to_string(),
            })?;
        Ok(id)
    }

    async fn add_candidate(
        &self,
        election: &RecordId,
        candidate: &CandidateDraft,
        credential: &Credential,
    ) -> Result<(), UpstreamError> {
        let url = endpoint(&self.base_url, &["elections", &**election, "candidates"]);
        let request = self
            .client
            .post(url)
            .bearer_auth(credential.token())
            .json(candidate);
        send(SERVICE, request).await?;
        Ok(())
    }

    async fn delete_election(
        &self,
        election: &RecordId,
        credential: &Credential,
    ) -> Result<(), UpstreamError> {
        let url = endpoint(&self.base_url, &["elections", &**election]);
        let request = self.client.delete(url).bearer_auth(credential.token());
        send(SERVICE, request).await?;
        Ok(())
    }
}

/// An election as held by [`MemoryElectionService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredElection {
    pub spec: ElectionSpec,
    pub candidates: Vec<CandidateDraft>,
}

/// An election service held in memory, used when no service is configured
/// and in tests. It can be told to fail part-way through a submission.
#[derive(Default)]
pub struct MemoryElectionService {
    elections: Mutex<BTreeMap<RecordId, StoredElection>>,
    next_id: AtomicU64,
    /// Candidate additions still allowed before they start failing.
    candidate_budget: Mutex<Option<usize>>,
    refuse_deletes: AtomicBool,
}

impl MemoryElectionService {
    /// Let `count` more candidate additions succeed, then fail the rest.
    pub async fn fail_candidates_after(&self, count: usize) {
        *self.candidate_budget.lock().await = Some(count);
    }

    pub fn refuse_deletes(&self, refuse: bool) {
        self.refuse_deletes.store(refuse, Ordering::Relaxed);
    }

    pub async fn elections(&self) -> BTreeMap<RecordId, StoredElection> {
        self.elections.lock().await.clone()
    }
}

#[rocket::async_trait]
impl ElectionService for MemoryElectionService {
    async fn create_election(
        &self,
        spec: &ElectionSpec,
        _credential: &Credential,
    ) -> Result<RecordId, UpstreamError> {
        let id = RecordId::from(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let election = StoredElection {
            spec: spec.clone(),
            candidates: Vec::new(),
        };
        self.elections.lock().await.insert(id.clone(), election);
        Ok(id)
    }

    async fn add_candidate(
        &self,
        election: &RecordId,
        candidate: &CandidateDraft,
        _credential: &Credential,
    ) -> Result<(), UpstreamError> {
        if let Some(budget) = self.candidate_budget.lock().await.as_mut() {
            if *budget == 0 {
                return Err(UpstreamError::Unavailable(SERVICE));
            }
            *budget -= 1;
        }
        let mut elections = self.elections.lock().await;
        let stored = elections
            .get_mut(election)
            .ok_or_else(|| UpstreamError::NotFound(format!("Election {election}")))?;
        stored.candidates.push(candidate.clone());
        Ok(())
    }

    async fn delete_election(
        &self,
        election: &RecordId,
        _credential: &Credential,
    ) -> Result<(), UpstreamError> {
        if self.refuse_deletes.load(Ordering::Relaxed) {
            return Err(UpstreamError::Unavailable(SERVICE));
        }
        self.elections
            .lock()
            .await
            .remove(election)
            .map(|_| ())
            .ok_or_else(|| UpstreamError::NotFound(format!("Election {election}")))
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::{json, serde_json};

    use super::*;

    #[test]
    fn created_id_aliases() {
        for reply in [json!({ "id": "e1" }), json!({ "_id": "e1" }), json!({ "electionId": "e1" })] {
            let Created { id } = serde_json::from_value(reply).unwrap();
            assert_eq!(id, RecordId::new("e1"));
        }
    }

    #[rocket::async_test]
    async fn candidate_budget() {
        let service = MemoryElectionService::default();
        let credential = Credential::example();
        let id = service
            .create_election(&ElectionSpec::example_local(), &credential)
            .await
            .unwrap();
        service.fail_candidates_after(1).await;

        let candidate = CandidateDraft::example("A", "X");
        service.add_candidate(&id, &candidate, &credential).await.unwrap();
        let err = service
            .add_candidate(&id, &candidate, &credential)
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Unavailable(_)));
        assert_eq!(service.elections().await[&id].candidates.len(), 1);
    }
}
