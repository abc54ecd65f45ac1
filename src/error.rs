use std::fmt::Display;

use rocket::{
    http::Status,
    response::Responder,
    serde::json::{json, Json},
    Request,
};
use thiserror::Error;

use crate::model::cascade::CascadeError;
use crate::model::draft::DraftError;
use crate::model::eligibility::EligibilityError;
use crate::model::id::RecordId;
use crate::model::template::TemplateError;
use crate::upstream::UpstreamError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Cascade(#[from] CascadeError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Eligibility(#[from] EligibilityError),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("Election {election_id} was created but only {added} of {total} candidates were added: {reason}")]
    PartialElection {
        election_id: RecordId,
        added: usize,
        total: usize,
        reason: String,
        rolled_back: bool,
    },
    #[error("{1}")]
    Status(Status, String),
}

impl Error {
    pub fn not_found(what: impl Display) -> Self {
        Self::Status(Status::NotFound, format!("{what} not found"))
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Cascade(_) | Self::Template(_) | Self::Eligibility(_) => {
                Status::UnprocessableEntity
            }
            Self::Draft(DraftError::Submitting | DraftError::FetchPending) => Status::Conflict,
            Self::Draft(_) => Status::UnprocessableEntity,
            Self::Upstream(UpstreamError::NotFound(_)) => Status::NotFound,
            Self::Upstream(_) | Self::PartialElection { .. } => Status::BadGateway,
            Self::Status(status, _) => *status,
        }
    }

    /// Stable machine-readable name for the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cascade(_) => "location",
            Self::Template(_) => "template",
            Self::Eligibility(e) => e.kind(),
            Self::Draft(DraftError::Cascade(_)) => "location",
            Self::Draft(DraftError::Submitting) => "submitting",
            Self::Draft(DraftError::FetchPending) => "fetchPending",
            Self::Draft(_) => "draft",
            Self::Upstream(UpstreamError::NotFound(_)) => "notFound",
            Self::Upstream(_) => "upstream",
            Self::PartialElection { .. } => "partialElection",
            Self::Status(..) => "status",
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        if status.code >= 500 {
            error!("{self}");
        } else {
            debug!("{self}");
        }

        let mut body = json!({
            "error": self.to_string(),
            "kind": self.kind(),
        });
        if let Self::PartialElection {
            election_id,
            added,
            rolled_back,
            ..
        } = &self
        {
            body["electionId"] = json!(election_id);
            body["candidatesAdded"] = json!(added);
            body["rolledBack"] = json!(rolled_back);
        }
        (status, Json(body)).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::eligibility::MissingField;

    use super::*;

    #[test]
    fn statuses() {
        let input: Error = EligibilityError::IncompleteLocation(MissingField::District).into();
        assert_eq!(input.status(), Status::UnprocessableEntity);
        assert_eq!(input.kind(), "incompleteLocation");

        let pending: Error = DraftError::FetchPending.into();
        assert_eq!(pending.status(), Status::Conflict);

        let upstream: Error = UpstreamError::Status {
            service: "template store",
            status: 500,
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(upstream.status(), Status::BadGateway);
        assert!(upstream.to_string().ends_with("disk full"));

        assert_eq!(Error::not_found("Draft 1").status(), Status::NotFound);
    }
}
