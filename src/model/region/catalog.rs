use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::data::INDIA;

/// Whether a first-level division is a State or a Union Territory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateKind {
    State,
    UnionTerritory,
}

/// Reference data for a single State or Union Territory.
#[derive(Debug)]
pub struct StateRecord {
    pub name: &'static str,
    pub kind: StateKind,
    /// Seats in the national legislature.
    pub lok_sabha_seats: u16,
    /// Seats in the state legislature; `None` for UTs without an assembly.
    pub vidhan_sabha_seats: Option<u16>,
    pub districts: &'static [DistrictRecord],
    pub national_constituencies: &'static [&'static str],
}

impl StateRecord {
    pub fn has_assembly_data(&self) -> bool {
        self.vidhan_sabha_seats.is_some()
    }

    fn district(&self, name: &str) -> Option<&'static DistrictRecord> {
        if !self.has_assembly_data() {
            return None;
        }
        self.districts.iter().find(|district| district.name == name)
    }

    /// The display label, e.g. `Karnataka (Lok Sabha: 28, Vidhan Sabha: 224)`.
    pub fn label(&self) -> String {
        match self.vidhan_sabha_seats {
            Some(assembly) => format!(
                "{} (Lok Sabha: {}, Vidhan Sabha: {})",
                self.name, self.lok_sabha_seats, assembly
            ),
            None => format!("{} (Lok Sabha: {})", self.name, self.lok_sabha_seats),
        }
    }
}

/// Reference data for a district and its enumerated assembly constituencies.
#[derive(Debug)]
pub struct DistrictRecord {
    pub name: &'static str,
    /// May be empty, in which case constituencies are entered as free text.
    pub constituencies: &'static [&'static str],
}

/// A selectable value paired with its display label.
///
/// Forms send `value` back; `label` is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOption {
    pub value: String,
    pub label: String,
}

impl RegionOption {
    fn plain(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

impl Display for RegionOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Read-only lookup over the State → District → Constituency hierarchy.
///
/// Lookups never fail: unknown keys produce empty sequences, and callers fall
/// back to free-text entry.
#[derive(Debug, Clone, Copy)]
pub struct RegionCatalog {
    states: &'static [StateRecord],
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::india()
    }
}

impl RegionCatalog {
    /// The built-in catalog of Indian States and Union Territories.
    pub const fn india() -> Self {
        Self { states: INDIA }
    }

    pub const fn new(states: &'static [StateRecord]) -> Self {
        Self { states }
    }

    pub fn states(&self) -> &'static [StateRecord] {
        self.states
    }

    pub fn state(&self, name: &str) -> Option<&'static StateRecord> {
        self.states.iter().find(|state| state.name == name)
    }

    pub fn has_assembly_data(&self, state: &str) -> bool {
        self.state(state)
            .map(StateRecord::has_assembly_data)
            .unwrap_or(false)
    }

    pub fn districts_of(&self, state: &str) -> Vec<&'static str> {
        match self.state(state) {
            Some(record) if record.has_assembly_data() => {
                record.districts.iter().map(|d| d.name).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn constituencies_of(&self, state: &str, district: &str) -> Vec<&'static str> {
        self.state(state)
            .and_then(|record| record.district(district))
            .map(|district| district.constituencies.to_vec())
            .unwrap_or_default()
    }

    pub fn national_constituencies_of(&self, state: &str) -> Vec<&'static str> {
        self.state(state)
            .map(|record| record.national_constituencies.to_vec())
            .unwrap_or_default()
    }

    /// Is `district` one of the enumerated districts of `state`?
    pub fn is_district_of(&self, state: &str, district: &str) -> bool {
        self.state(state)
            .and_then(|record| record.district(district))
            .is_some()
    }

    pub fn state_options(&self) -> Vec<RegionOption> {
        self.states
            .iter()
            .map(|state| RegionOption {
                value: state.name.to_string(),
                label: state.label(),
            })
            .collect()
    }

    pub fn district_options(&self, state: &str) -> Vec<RegionOption> {
        self.districts_of(state)
            .into_iter()
            .map(RegionOption::plain)
            .collect()
    }

    pub fn constituency_options(&self, state: &str, district: &str) -> Vec<RegionOption> {
        self.constituencies_of(state, district)
            .into_iter()
            .map(RegionOption::plain)
            .collect()
    }

    pub fn national_constituency_options(&self, state: &str) -> Vec<RegionOption> {
        self.national_constituencies_of(state)
            .into_iter()
            .map(RegionOption::plain)
            .collect()
    }
}
