use std::fmt::{Debug, Formatter};

use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use crate::error::Error;

/// The caller's bearer credential, passed through to every upstream call.
///
/// The token is opaque: it is never decoded or checked here. The upstream
/// services decide what it permits.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of the logs.
impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(..)")
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Credential {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let token = req
            .headers()
            .get_one("Authorization")
            .and_then(|header| header.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => Outcome::Success(Credential::new(token)),
            None => Outcome::Failure((
                Status::Unauthorized,
                Error::Status(
                    Status::Unauthorized,
                    "Missing bearer credential".to_string(),
                ),
            )),
        }
    }
}
