use serde::{Deserialize, Serialize};

/// A location picked in a form, from State down to the seat.
///
/// Only [`crate::model::cascade::RegionCascade`] mutates this, so that the
/// parent/child consistency rules live in one place.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Assembly constituency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_constituency: Option<String>,
}

impl LocationSelection {
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn constituency(&self) -> Option<&str> {
        self.constituency.as_deref()
    }

    pub fn national_constituency(&self) -> Option<&str> {
        self.national_constituency.as_deref()
    }

    /// Clear everything below the State level.
    pub(crate) fn clear_below_state(&mut self) {
        self.district = None;
        self.constituency = None;
        self.national_constituency = None;
    }
}

/// Normalize a free-text field: trimmed, and `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
