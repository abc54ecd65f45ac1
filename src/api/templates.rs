use rocket::{serde::json::Json, Route, State};

use crate::{
    error::Result,
    model::{
        auth::Credential,
        common::{non_blank, ElectionType, LocationSelection},
        id::RecordId,
        region::RegionCatalog,
        template::{
            match_candidates, match_parties, CandidateTemplate, NewCandidateTemplate,
            NewPartyTemplate, PartyTemplate, TemplateKind,
        },
    },
    upstream::{create_template, fetch_catalog, list_templates, update_template, Upstream},
};

pub fn routes() -> Vec<Route> {
    routes![
        get_candidates,
        create_candidate,
        update_candidate,
        delete_candidate,
        candidate_matches,
        get_parties,
        create_party,
        update_party,
        delete_party,
        party_matches,
    ]
}

/// A seat to match candidate templates against.
#[derive(Debug, FromForm)]
struct SeatQuery {
    #[field(name = "electionType")]
    election_type: ElectionType,
    state: Option<String>,
    district: Option<String>,
    constituency: Option<String>,
    #[field(name = "nationalConstituency")]
    national_constituency: Option<String>,
}

impl SeatQuery {
    fn location(&self) -> LocationSelection {
        let field = |value: &Option<String>| value.as_deref().and_then(non_blank);
        LocationSelection {
            state: field(&self.state),
            district: field(&self.district),
            constituency: field(&self.constituency),
            national_constituency: field(&self.national_constituency),
        }
    }
}

#[derive(Debug, FromForm)]
struct PartyQuery {
    #[field(name = "electionType")]
    election_type: ElectionType,
    q: Option<String>,
}

#[get("/templates/candidates")]
async fn get_candidates(
    credential: Credential,
    upstream: &State<Upstream>,
) -> Result<Json<Vec<CandidateTemplate>>> {
    let templates = list_templates(&*upstream.templates, &credential).await?;
    Ok(Json(templates))
}

#[post("/templates/candidates", data = "<template>", format = "json")]
async fn create_candidate(
    credential: Credential,
    template: Json<NewCandidateTemplate>,
    catalog: &State<RegionCatalog>,
    upstream: &State<Upstream>,
) -> Result<Json<CandidateTemplate>> {
    let template = template.into_inner().normalize(catalog)?;
    let created: CandidateTemplate =
        create_template(&*upstream.templates, &template, &credential).await?;
    info!("Created candidate template {} ({})", created.id, created.candidate_name);
    Ok(Json(created))
}

#[put("/templates/candidates/<id>", data = "<template>", format = "json")]
async fn update_candidate(
    credential: Credential,
    id: RecordId,
    template: Json<NewCandidateTemplate>,
    catalog: &State<RegionCatalog>,
    upstream: &State<Upstream>,
) -> Result<Json<CandidateTemplate>> {
    let template = template.into_inner().normalize(catalog)?;
    let updated = update_template(&*upstream.templates, &id, &template, &credential).await?;
    Ok(Json(updated))
}

#[delete("/templates/candidates/<id>")]
async fn delete_candidate(
    credential: Credential,
    id: RecordId,
    upstream: &State<Upstream>,
) -> Result<()> {
    upstream
        .templates
        .delete(TemplateKind::Candidate, &id, &credential)
        .await?;
    info!("Deleted candidate template {id}");
    Ok(())
}

/// Candidate templates for one seat, fetched fresh from the store.
#[get("/templates/candidates/matches?<seat..>")]
async fn candidate_matches(
    credential: Credential,
    seat: SeatQuery,
    upstream: &State<Upstream>,
) -> Result<Json<Vec<CandidateTemplate>>> {
    let catalog = fetch_catalog(&*upstream.templates, &credential).await?;
    let location = seat.location();
    let matched = match_candidates(&catalog, seat.election_type, &location)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(matched))
}

#[get("/templates/parties")]
async fn get_parties(
    credential: Credential,
    upstream: &State<Upstream>,
) -> Result<Json<Vec<PartyTemplate>>> {
    let templates = list_templates(&*upstream.templates, &credential).await?;
    Ok(Json(templates))
}

#[post("/templates/parties", data = "<template>", format = "json")]
async fn create_party(
    credential: Credential,
    template: Json<NewPartyTemplate>,
    upstream: &State<Upstream>,
) -> Result<Json<PartyTemplate>> {
    let template = template.into_inner().normalize()?;
    let created: PartyTemplate =
        create_template(&*upstream.templates, &template, &credential).await?;
    info!("Created party template {} ({})", created.id, created.party_name);
    Ok(Json(created))
}

#[put("/templates/parties/<id>", data = "<template>", format = "json")]
async fn update_party(
    credential: Credential,
    id: RecordId,
    template: Json<NewPartyTemplate>,
    upstream: &State<Upstream>,
) -> Result<Json<PartyTemplate>> {
    let template = template.into_inner().normalize()?;
    let updated = update_template(&*upstream.templates, &id, &template, &credential).await?;
    Ok(Json(updated))
}

#[delete("/templates/parties/<id>")]
async fn delete_party(
    credential: Credential,
    id: RecordId,
    upstream: &State<Upstream>,
) -> Result<()> {
    upstream
        .templates
        .delete(TemplateKind::Party, &id, &credential)
        .await?;
    info!("Deleted party template {id}");
    Ok(())
}

/// Party templates of the right tier, best matches for `q` first.
#[get("/templates/parties/matches?<query..>")]
async fn party_matches(
    credential: Credential,
    query: PartyQuery,
    upstream: &State<Upstream>,
) -> Result<Json<Vec<PartyTemplate>>> {
    let catalog = fetch_catalog(&*upstream.templates, &credential).await?;
    let matched = match_parties(&catalog, query.election_type, query.q.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(matched))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::{Client, LocalResponse},
        serde::json::{json, serde_json, Value},
    };

    use crate::model::common::PartyTier;
    use crate::model::template::{CandidateTemplateCore, PartyTemplateCore};
    use crate::upstream::MemoryTemplateStore;

    use super::*;

    async fn body<T: serde::de::DeserializeOwned>(response: LocalResponse<'_>) -> T {
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap()
    }

    #[backend_test]
    async fn credential_required(client: Client) {
        let response = client.get(uri!(get_candidates)).dispatch().await;
        assert_eq!(response.status(), Status::Unauthorized);
        let error: Value = body(response).await;
        assert_eq!(error["error"], "Missing bearer credential");
    }

    #[backend_test]
    async fn create_normalizes(client: Client, templates: Arc<MemoryTemplateStore>) {
        let mut template = CandidateTemplateCore::example_assembly();
        template.candidate_name = "  Ravi Kulkarni ".to_string();
        // A national constituency means nothing to a state election.
        template.national_constituency = Some("Bagalkot".to_string());

        let response = client
            .post(uri!(create_candidate))
            .header(Credential::example().header())
            .header(ContentType::JSON)
            .body(json!(template).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let created: CandidateTemplate = body(response).await;
        assert_eq!(created.candidate_name, "Ravi Kulkarni");
        assert_eq!(created.national_constituency, None);

        let stored = templates.records(TemplateKind::Candidate).await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["candidateName"], "Ravi Kulkarni");
    }

    #[backend_test]
    async fn bad_templates_rejected(client: Client, templates: Arc<MemoryTemplateStore>) {
        // District that isn't in Karnataka.
        let mut template = CandidateTemplateCore::example_assembly();
        template.district = Some("Pune".to_string());
        let response = client
            .post(uri!(create_candidate))
            .header(Credential::example().header())
            .header(ContentType::JSON)
            .body(json!(template).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);

        // National template without its constituency.
        let mut template = CandidateTemplateCore::example_national();
        template.national_constituency = None;
        let response = client
            .post(uri!(create_candidate))
            .header(Credential::example().header())
            .header(ContentType::JSON)
            .body(json!(template).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);

        // Blank party name.
        let response = client
            .post(uri!(create_party))
            .header(Credential::example().header())
            .header(ContentType::JSON)
            .body(json!(PartyTemplateCore::example(" ", PartyTier::State)).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let error: Value = body(response).await;
        assert_eq!(error["kind"], "template");

        assert!(templates.records(TemplateKind::Candidate).await.is_empty());
        assert!(templates.records(TemplateKind::Party).await.is_empty());
    }

    #[backend_test(seeded)]
    async fn update_and_delete_party(client: Client) {
        let response = client
            .get(uri!(get_parties))
            .header(Credential::example().header())
            .dispatch()
            .await;
        let parties: Vec<PartyTemplate> = body(response).await;
        assert_eq!(parties.len(), 4);
        let lok_morcha = parties
            .iter()
            .find(|p| p.party_name == "Lok Morcha")
            .unwrap()
            .clone();

        let mut changed = lok_morcha.template.clone();
        changed.history = Some("Founded 1998".to_string());
        let response = client
            .put(uri!(update_party(&lok_morcha.id)))
            .header(Credential::example().header())
            .header(ContentType::JSON)
            .body(json!(changed).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let updated: PartyTemplate = body(response).await;
        assert_eq!(updated.history.as_deref(), Some("Founded 1998"));

        let response = client
            .delete(uri!(delete_party(&lok_morcha.id)))
            .header(Credential::example().header())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let response = client
            .delete(uri!(delete_party(&lok_morcha.id)))
            .header(Credential::example().header())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[backend_test(seeded)]
    async fn matches(client: Client) {
        let response = client
            .get("/templates/candidates/matches?electionType=state&state=Karnataka&district=Bagalkot&constituency=Jamkhandi")
            .header(Credential::example().header())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let candidates: Vec<CandidateTemplate> = body(response).await;
        let names: Vec<_> = candidates.iter().map(|c| c.candidate_name.as_str()).collect();
        assert_eq!(names, vec!["Ravi Kulkarni"]);

        // Locations are compared as written.
        let response = client
            .get("/templates/candidates/matches?electionType=state&state=Karnataka&district=Bagalkot&constituency=jamkhandi")
            .header(Credential::example().header())
            .dispatch()
            .await;
        let candidates: Vec<CandidateTemplate> = body(response).await;
        assert!(candidates.is_empty());

        // Incomplete seat: nothing matches.
        let response = client
            .get("/templates/candidates/matches?electionType=state&state=Karnataka")
            .header(Credential::example().header())
            .dispatch()
            .await;
        let candidates: Vec<CandidateTemplate> = body(response).await;
        assert!(candidates.is_empty());

        let response = client
            .get("/templates/parties/matches?electionType=state&q=lok")
            .header(Credential::example().header())
            .dispatch()
            .await;
        let parties: Vec<PartyTemplate> = body(response).await;
        let names: Vec<_> = parties.iter().map(|p| p.party_name.as_str()).collect();
        assert_eq!(names, vec!["Lok Morcha"]);

        let response = client
            .get("/templates/parties/matches?electionType=mayoral")
            .header(Credential::example().header())
            .dispatch()
            .await;
        assert_ne!(response.status(), Status::Ok);
    }

    #[backend_test]
    async fn store_outage(client: Client, templates: Arc<MemoryTemplateStore>) {
        templates.set_unavailable(true);
        let response = client
            .get(uri!(get_parties))
            .header(Credential::example().header())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadGateway);
        let error: Value = body(response).await;
        assert_eq!(error["error"], "The template store is unavailable");
    }
}
