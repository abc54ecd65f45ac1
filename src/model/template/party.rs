use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::model::common::{non_blank, PartyTier};
use crate::model::id::RecordId;

use super::{TemplateError, TemplateKind, TemplateRecord};

/// Core party template data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyTemplateCore {
    pub party_name: String,
    pub party_tier: PartyTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
}

impl PartyTemplateCore {
    pub fn normalize(self) -> Result<Self, TemplateError> {
        Ok(Self {
            party_name: non_blank(&self.party_name)
                .ok_or(TemplateError::MissingField("partyName"))?,
            party_tier: self.party_tier,
            party_symbol: self.party_symbol.as_deref().and_then(non_blank),
            history: self.history.as_deref().and_then(non_blank),
        })
    }
}

/// A party template that hasn't been stored yet.
pub type NewPartyTemplate = PartyTemplateCore;

/// A party template from the template store, with its unique ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTemplate {
    #[serde(alias = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub template: PartyTemplateCore,
}

impl Deref for PartyTemplate {
    type Target = PartyTemplateCore;

    fn deref(&self) -> &Self::Target {
        &self.template
    }
}

impl DerefMut for PartyTemplate {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.template
    }
}

impl TemplateRecord for PartyTemplate {
    const KIND: TemplateKind = TemplateKind::Party;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
