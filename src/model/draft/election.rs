use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::common::ElectionType;

use super::CandidateDraft;

/// Where the election sits in the region hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionHierarchy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,
}

/// Everything about an election except its candidates. This is what the
/// election service creates the election record from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSpec {
    pub title: String,
    pub description: String,
    pub election_type: ElectionType,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub allowed_regions: Vec<String>,
    pub region_hierarchy: RegionHierarchy,
    /// The contested seat: national or assembly constituency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituency: Option<String>,
}

impl ElectionSpec {
    pub fn seat(&self) -> Seat {
        Seat {
            district: self.region_hierarchy.district.clone(),
            constituency: self.constituency.clone(),
            allowed_regions: self.allowed_regions.clone(),
        }
    }
}

/// A fully assembled election, ready for validation and submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionDraft {
    #[serde(flatten)]
    pub spec: ElectionSpec,
    pub candidates: Vec<CandidateDraft>,
}

impl ElectionDraft {
    /// Rows that will actually be submitted.
    pub fn filled_candidates(&self) -> impl Iterator<Item = &CandidateDraft> {
        self.candidates.iter().filter(|c| c.is_filled())
    }
}

impl Deref for ElectionDraft {
    type Target = ElectionSpec;

    fn deref(&self) -> &Self::Target {
        &self.spec
    }
}

impl DerefMut for ElectionDraft {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.spec
    }
}

/// The location fields eligibility is judged against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    pub district: Option<String>,
    pub constituency: Option<String>,
    pub allowed_regions: Vec<String>,
}

impl Seat {
    /// The key two candidates of one party may not share: the constituency
    /// for national and state elections, the first allowed region for local.
    pub fn key(&self, election_type: ElectionType) -> Option<&str> {
        let key = match election_type {
            ElectionType::National | ElectionType::State => self.constituency.as_deref(),
            ElectionType::Local => self.allowed_regions.first().map(String::as_str),
        };
        key.map(str::trim).filter(|key| !key.is_empty())
    }

    pub fn district(&self) -> Option<&str> {
        self.district
            .as_deref()
            .map(str::trim)
            .filter(|district| !district.is_empty())
    }
}


#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn seat_keys() {
        let seat = Seat {
            district: Some("Bagalkot".to_string()),
            constituency: Some("Jamkhandi".to_string()),
            allowed_regions: vec!["Ward 4".to_string()],
        };
        assert_eq!(seat.key(ElectionType::National), Some("Jamkhandi"));
        assert_eq!(seat.key(ElectionType::State), Some("Jamkhandi"));
        assert_eq!(seat.key(ElectionType::Local), Some("Ward 4"));
        assert_eq!(Seat::example_region("  ").key(ElectionType::Local), None);
    }

    #[test]
    fn draft_flattens_spec() {
        let draft = ElectionDraft {
            spec: ElectionSpec::example_local(),
            candidates: vec![CandidateDraft::example("A", "X")],
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["title"], "Pune Municipal Corporation 2026");
        assert_eq!(value["electionType"], "local");
        assert_eq!(value["regionHierarchy"]["district"], "Pune");
        assert_eq!(value["candidates"][0]["name"], "A");
        assert!(value.get("constituency").is_none());

        let back: ElectionDraft = serde_json::from_value(value).unwrap();
        assert_eq!(back, draft);
    }
}
