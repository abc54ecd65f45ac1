use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use reqwest::{Client, Url};
use rocket::{
    serde::json::{serde_json, Value},
    tokio::sync::Mutex,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::model::auth::Credential;
use crate::model::id::RecordId;
use crate::model::template::{
    CandidateTemplate, PartyTemplate, TemplateCatalog, TemplateKind, TemplateRecord,
};

use super::{endpoint, send, UpstreamError};

const SERVICE: &str = "template store";

/// CRUD over the externally owned candidate and party templates.
///
/// Records are opaque JSON here; shapes are checked by the callers before
/// anything is written.
#[rocket::async_trait]
pub trait TemplateStore: Send + Sync {
    async fn list(&self, kind: TemplateKind, credential: &Credential)
        -> Result<Vec<Value>, UpstreamError>;

    /// Store a new record, returning it as stored (with its ID).
    async fn create(
        &self,
        kind: TemplateKind,
        record: Value,
        credential: &Credential,
    ) -> Result<Value, UpstreamError>;

    /// Replace a record, returning it as stored.
    async fn update(
        &self,
        kind: TemplateKind,
        id: &RecordId,
        record: Value,
        credential: &Credential,
    ) -> Result<Value, UpstreamError>;

    async fn delete(
        &self,
        kind: TemplateKind,
        id: &RecordId,
        credential: &Credential,
    ) -> Result<(), UpstreamError>;
}

/// A template store reached over HTTP.
pub struct HttpTemplateStore {
    client: Client,
    base_url: Url,
}

impl HttpTemplateStore {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[rocket::async_trait]
impl TemplateStore for HttpTemplateStore {
    async fn list(
        &self,
        kind: TemplateKind,
        credential: &Credential,
    ) -> Result<Vec<Value>, UpstreamError> {
        let url = endpoint(&self.base_url, &["templates", kind.path()]);
        let request = self.client.get(url).bearer_auth(credential.token());
        let response = send(SERVICE, request).await?;
        read_json(response).await
    }

    async fn create(
        &self,
        kind: TemplateKind,
        record: Value,
        credential: &Credential,
    ) -> Result<Value, UpstreamError> {
        let url = endpoint(&self.base_url, &["templates", kind.path()]);
        let request = self
            .client
            .post(url)
            .bearer_auth(credential.token())
            .json(&record);
        let response = send(SERVICE, request).await?;
        read_json(response).await
    }

    async fn update(
        &self,
        kind: TemplateKind,
        id: &RecordId,
        record: Value,
        credential: &Credential,
    ) -> Result<Value, UpstreamError> {
        let url = endpoint(&self.base_url, &["templates", kind.path(), &**id]);
        let request = self
            .client
            .put(url)
            .bearer_auth(credential.token())
            .json(&record);
        let response = send(SERVICE, request).await?;
        read_json(response).await
    }

    async fn delete(
        &self,
        kind: TemplateKind,
        id: &RecordId,
        credential: &Credential,
    ) -> Result<(), UpstreamError> {
        let url = endpoint(&self.base_url, &["templates", kind.path(), &**id]);
        let request = self.client.delete(url).bearer_auth(credential.token());
        send(SERVICE, request).await?;
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, UpstreamError> {
    response
        .json()
        .await
        .map_err(|e| UpstreamError::Malformed {
            service: SERVICE,
            message: e.to_string(),
        })
}

/// A template store held in memory, used when no store is configured and in
/// tests.
#[derive(Default)]
pub struct MemoryTemplateStore {
    records: Mutex<HashMap<TemplateKind, Vec<Value>>>,
    next_id: AtomicU64,
    unavailable: AtomicBool,
}

impl MemoryTemplateStore {
    /// Make every call fail, or succeed again.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Everything stored of one kind.
    pub async fn records(&self, kind: TemplateKind) -> Vec<Value> {
        self.records
            .lock()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Store a record exactly as given, bypassing any shape checks.
    pub async fn insert_raw(&self, kind: TemplateKind, record: Value) {
        self.records
            .lock()
            .await
            .entry(kind)
            .or_default()
            .push(record);
    }

    fn check_available(&self) -> Result<(), UpstreamError> {
        if self.unavailable.load(Ordering::Relaxed) {
            Err(UpstreamError::Unavailable(SERVICE))
        } else {
            Ok(())
        }
    }

    fn with_id(mut record: Value, id: &RecordId) -> Result<Value, UpstreamError> {
        let object = record
            .as_object_mut()
            .ok_or_else(|| UpstreamError::Malformed {
                service: SERVICE,
                message: "records must be JSON objects".to_string(),
            })?;
        object.insert("id".to_string(), Value::String(id.to_string()));
        Ok(record)
    }
}

fn id_of(record: &Value) -> Option<RecordId> {
    record
        .get("id")
        .or_else(|| record.get("_id"))
        .and_then(|id| serde_json::from_value(id.clone()).ok())
}

#[rocket::async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list(
        &self,
        kind: TemplateKind,
        _credential: &Credential,
    ) -> Result<Vec<Value>, UpstreamError> {
        self.check_available()?;
        Ok(self.records(kind).await)
    }

    async fn create(
        &self,
        kind: TemplateKind,
        record: Value,
        _credential: &Credential,
    ) -> Result<Value, UpstreamError> {
        self.check_available()?;
        let id = RecordId::from(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let record = Self::with_id(record, &id)?;
        self.insert_raw(kind, record.clone()).await;
        Ok(record)
    }

    async fn update(
        &self,
        kind: TemplateKind,
        id: &RecordId,
        record: Value,
        _credential: &Credential,
    ) -> Result<Value, UpstreamError> {
        self.check_available()?;
        let record = Self::with_id(record, id)?;
        let mut records = self.records.lock().await;
        let existing = records
            .get_mut(&kind)
            .and_then(|records| records.iter_mut().find(|r| id_of(r).as_ref() == Some(id)))
            .ok_or_else(|| UpstreamError::NotFound(format!("{kind} template {id}")))?;
        *existing = record.clone();
        Ok(record)
    }

    async fn delete(
        &self,
        kind: TemplateKind,
        id: &RecordId,
        _credential: &Credential,
    ) -> Result<(), UpstreamError> {
        self.check_available()?;
        let mut records = self.records.lock().await;
        let records = records.entry(kind).or_default();
        let before = records.len();
        records.retain(|r| id_of(r).as_ref() != Some(id));
        if records.len() == before {
            Err(UpstreamError::NotFound(format!("{kind} template {id}")))
        } else {
            Ok(())
        }
    }
}

/// Every record of one kind that has the right shape. Records that don't are
/// skipped with a warning rather than failing the whole listing.
pub async fn list_templates<T: TemplateRecord>(
    store: &dyn TemplateStore,
    credential: &Credential,
) -> Result<Vec<T>, UpstreamError> {
    let records = store.list(T::KIND, credential).await?;
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(template) => Some(template),
            Err(e) => {
                warn!("Skipping malformed {} template: {e}", T::KIND);
                None
            }
        })
        .collect())
}

pub async fn create_template<T: TemplateRecord>(
    store: &dyn TemplateStore,
    template: &impl Serialize,
    credential: &Credential,
) -> Result<T, UpstreamError> {
    let stored = store.create(T::KIND, to_record(template)?, credential).await?;
    from_record(stored)
}

pub async fn update_template<T: TemplateRecord>(
    store: &dyn TemplateStore,
    id: &RecordId,
    template: &impl Serialize,
    credential: &Credential,
) -> Result<T, UpstreamError> {
    let stored = store
        .update(T::KIND, id, to_record(template)?, credential)
        .await?;
    from_record(stored)
}

/// Load both template kinds into a fresh [`TemplateCatalog`].
pub async fn fetch_catalog(
    store: &dyn TemplateStore,
    credential: &Credential,
) -> Result<TemplateCatalog, UpstreamError> {
    let mut catalog = TemplateCatalog::default();
    catalog
        .candidates
        .replace_all(list_templates::<CandidateTemplate>(store, credential).await?);
    catalog
        .parties
        .replace_all(list_templates::<PartyTemplate>(store, credential).await?);
    Ok(catalog)
}

fn to_record(template: &impl Serialize) -> Result<Value, UpstreamError> {
    serde_json::to_value(template).map_err(|e| UpstreamError::Malformed {
        service: SERVICE,
        message: e.to_string(),
    })
}

fn from_record<T: TemplateRecord>(record: Value) -> Result<T, UpstreamError> {
    serde_json::from_value(record).map_err(|e| UpstreamError::Malformed {
        service: SERVICE,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::json;

    use crate::model::common::PartyTier;
    use crate::model::template::{CandidateTemplateCore, PartyTemplateCore};

    use super::*;

    #[rocket::async_test]
    async fn create_update_delete() {
        let store = MemoryTemplateStore::default();
        let credential = Credential::example();

        let created: PartyTemplate = create_template(
            &store,
            &PartyTemplateCore::example("Lok Morcha", PartyTier::State),
            &credential,
        )
        .await
        .unwrap();
        assert_eq!(created.party_name, "Lok Morcha");

        let mut renamed = created.template.clone();
        renamed.party_name = "Lok Morcha (Secular)".to_string();
        let updated: PartyTemplate = update_template(&store, &created.id, &renamed, &credential)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let listed: Vec<PartyTemplate> = list_templates(&store, &credential).await.unwrap();
        assert_eq!(listed, vec![updated]);

        store
            .delete(TemplateKind::Party, &created.id, &credential)
            .await
            .unwrap();
        let err = store
            .delete(TemplateKind::Party, &created.id, &credential)
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::NotFound(_)));
    }

    #[rocket::async_test]
    async fn malformed_records_are_skipped() {
        let store = MemoryTemplateStore::default();
        let credential = Credential::example();
        store
            .insert_raw(TemplateKind::Candidate, json!({ "id": "bad", "candidateName": 7 }))
            .await;
        let good: CandidateTemplate = create_template(
            &store,
            &CandidateTemplateCore::example_local(),
            &credential,
        )
        .await
        .unwrap();

        let catalog = fetch_catalog(&store, &credential).await.unwrap();
        assert_eq!(catalog.candidates.all(), &[good][..]);
        assert!(catalog.parties.is_empty());
    }

    #[rocket::async_test]
    async fn unavailable_store_fails() {
        let store = MemoryTemplateStore::default();
        store.set_unavailable(true);
        let err = fetch_catalog(&store, &Credential::example())
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Unavailable(_)));
    }

    #[test]
    fn endpoints_append_segments() {
        let base = Url::parse("https://store.example/api/").unwrap();
        let url = endpoint(&base, &["templates", "candidates", "a b"]);
        assert_eq!(url.as_str(), "https://store.example/api/templates/candidates/a%20b");
    }
}
