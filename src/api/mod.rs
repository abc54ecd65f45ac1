use rocket::{
    http::Status,
    serde::json::{json, Json, Value},
    Catcher, Request, Route,
};

mod drafts;
mod regions;
mod templates;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(regions::routes());
    routes.extend(templates::routes());
    routes.extend(drafts::routes());
    routes
}

pub fn catchers() -> Vec<Catcher> {
    catchers![json_catcher]
}

/// Failures that never reach a handler (bad guards, unmatched routes,
/// undecodable bodies) still get a JSON body.
#[catch(default)]
fn json_catcher(status: Status, _req: &Request) -> (Status, Json<Value>) {
    let message = match status.code {
        401 => "Missing bearer credential",
        404 => "Not found",
        422 => "Request body could not be understood",
        _ => status.reason().unwrap_or("Request failed"),
    };
    (status, Json(json!({ "error": message, "kind": "status" })))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::{serde_json, Value},
    };

    use crate::model::auth::Credential;

    async fn error_body(response: rocket::local::asynchronous::LocalResponse<'_>) -> Value {
        serde_json::from_str(&response.into_string().await.unwrap()).unwrap()
    }

    #[backend_test]
    async fn unmatched_routes_get_json(client: Client) {
        let response = client.get("/no/such/route").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        let error = error_body(response).await;
        assert_eq!(error["error"], "Not found");
        assert_eq!(error["kind"], "status");
    }

    #[backend_test]
    async fn undecodable_body_gets_json(client: Client) {
        let response = client
            .post("/drafts")
            .header(Credential::example().header())
            .header(ContentType::JSON)
            .body(r#"{"electionType": 7}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
        let error = error_body(response).await;
        assert_eq!(error["error"], "Request body could not be understood");
    }
}
