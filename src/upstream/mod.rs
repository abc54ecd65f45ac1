//! Clients for the services that own templates and elections.

mod elections;
mod error;
mod submission;
mod templates;

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode, Url};

pub use elections::{ElectionService, HttpElectionService, MemoryElectionService, StoredElection};
pub use error::UpstreamError;
pub use submission::{submit, SubmissionReport};
pub use templates::{
    create_template, fetch_catalog, list_templates, update_template, HttpTemplateStore,
    MemoryTemplateStore, TemplateStore,
};

/// The upstream services, as managed state.
#[derive(Clone)]
pub struct Upstream {
    pub templates: Arc<dyn TemplateStore>,
    pub elections: Arc<dyn ElectionService>,
}

impl Upstream {
    pub fn new(templates: Arc<dyn TemplateStore>, elections: Arc<dyn ElectionService>) -> Self {
        Self {
            templates,
            elections,
        }
    }

    /// Both services held in memory.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryTemplateStore::default()),
            Arc::new(MemoryElectionService::default()),
        )
    }
}

/// `base` with `segments` appended as percent-encoded path segments.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Only fails for URLs that can't be a base, which are rejected at launch.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Send a request, turning error statuses into [`UpstreamError`]s that carry
/// the service's own message.
pub(crate) async fn send(
    service: &'static str,
    request: RequestBuilder,
) -> Result<Response, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|source| UpstreamError::Transport { service, source })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().path().to_string();
    let message = response.text().await.unwrap_or_default();
    warn!("The {service} responded {status} to {url}: {message}");
    if status == StatusCode::NOT_FOUND {
        Err(UpstreamError::NotFound(url))
    } else {
        Err(UpstreamError::Status {
            service,
            status: status.as_u16(),
            message,
        })
    }
}

/// Example data for tests.
#[cfg(test)]
pub(crate) mod examples {
    use crate::model::auth::Credential;
    use crate::model::common::PartyTier;
    use crate::model::template::{
        CandidateTemplate, CandidateTemplateCore, PartyTemplate, PartyTemplateCore,
    };

    use super::*;

    /// Fill a store with a candidate for each example seat and a party of each tier.
    pub async fn seed_templates(store: &dyn TemplateStore) {
        let credential = Credential::example();
        for template in [
            CandidateTemplateCore::example_national(),
            CandidateTemplateCore::example_assembly(),
            CandidateTemplateCore::example_local(),
        ] {
            create_template::<CandidateTemplate>(store, &template, &credential)
                .await
                .unwrap();
        }
        for (name, tier) in [
            ("Jana Sangama", PartyTier::National),
            ("Krishna Vedike", PartyTier::State),
            ("Lok Morcha", PartyTier::State),
            ("Pune Nagrik Aghadi", PartyTier::Local),
        ] {
            create_template::<PartyTemplate>(store, &PartyTemplateCore::example(name, tier), &credential)
                .await
                .unwrap();
        }
    }
}
