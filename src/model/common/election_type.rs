use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use rocket::form::{self, prelude::ErrorKind, FromFormField, ValueField};
use serde::{Deserialize, Serialize};

use crate::model::cascade::CascadeScope;

/// The level of government an election is for.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionType {
    /// Lok Sabha: one seat per national constituency.
    National,
    /// Vidhan Sabha: one seat per assembly constituency.
    State,
    /// Municipal / panchayat: scoped to a district.
    Local,
}

impl ElectionType {
    pub const ALL: [ElectionType; 3] = [Self::National, Self::State, Self::Local];

    /// The geography this election type is contested over.
    pub fn scope(self) -> CascadeScope {
        match self {
            Self::National => CascadeScope::NationalConstituency,
            Self::State => CascadeScope::Assembly,
            Self::Local => CascadeScope::District,
        }
    }

    /// The tier of party that fields candidates in this election type.
    pub fn party_tier(self) -> PartyTier {
        match self {
            Self::National => PartyTier::National,
            Self::State => PartyTier::State,
            Self::Local => PartyTier::Local,
        }
    }
}

impl Display for ElectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::National => write!(f, "national"),
            Self::State => write!(f, "state"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl<'r> FromFormField<'r> for ElectionType {
    fn from_value(field: ValueField<'r>) -> form::Result<'r, Self> {
        Self::ALL
            .into_iter()
            .find(|election_type| election_type.to_string() == field.value)
            .ok_or_else(|| {
                ErrorKind::InvalidChoice {
                    choices: Cow::Owned(Self::ALL.iter().map(|t| t.to_string().into()).collect()),
                }
                .into()
            })
    }
}

/// Recognition tier of a political party.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyTier {
    #[serde(rename = "national-party")]
    National,
    #[serde(rename = "state-party")]
    State,
    #[serde(rename = "local-party")]
    Local,
}
