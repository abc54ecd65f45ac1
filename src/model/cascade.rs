use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::common::{non_blank, LocationSelection};
use crate::model::region::RegionCatalog;

/// Which levels of the location hierarchy a particular form works with.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CascadeScope {
    /// State, then national constituency.
    NationalConstituency,
    /// State, then district, then assembly constituency.
    Assembly,
    /// State, then district.
    District,
}

impl CascadeScope {
    pub fn uses_district(self) -> bool {
        matches!(self, Self::Assembly | Self::District)
    }

    pub fn uses_constituency(self) -> bool {
        self == Self::Assembly
    }

    pub fn uses_national_constituency(self) -> bool {
        self == Self::NationalConstituency
    }

    /// Has every level this scope needs been chosen?
    pub fn is_complete(self, selection: &LocationSelection) -> bool {
        self.first_missing(selection).is_none()
    }

    /// The highest level this scope needs that hasn't been chosen yet.
    pub fn first_missing(self, selection: &LocationSelection) -> Option<LocationField> {
        if selection.state.is_none() {
            return Some(LocationField::State);
        }
        if self.uses_district() && selection.district.is_none() {
            return Some(LocationField::District);
        }
        if self.uses_constituency() && selection.constituency.is_none() {
            return Some(LocationField::Constituency);
        }
        if self.uses_national_constituency() && selection.national_constituency.is_none() {
            return Some(LocationField::NationalConstituency);
        }
        None
    }
}

impl Display for CascadeScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NationalConstituency => write!(f, "national-constituency"),
            Self::Assembly => write!(f, "assembly"),
            Self::District => write!(f, "district"),
        }
    }
}

/// A single level of a [`LocationSelection`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationField {
    State,
    District,
    Constituency,
    NationalConstituency,
}

impl Display for LocationField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::State => write!(f, "state"),
            Self::District => write!(f, "district"),
            Self::Constituency => write!(f, "constituency"),
            Self::NationalConstituency => write!(f, "national constituency"),
        }
    }
}

/// A location write that was refused. The selection is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    #[error("A {field} is not part of a {scope} selection")]
    OutOfScope {
        field: LocationField,
        scope: CascadeScope,
    },
    #[error("Select a {parent} before choosing a {field}")]
    MissingParent {
        field: LocationField,
        parent: LocationField,
    },
    #[error("{value:?} is not a {field} of {parent:?}")]
    NotInCatalog {
        field: LocationField,
        value: String,
        parent: String,
    },
}

/// Keeps a [`LocationSelection`] consistent as its levels are written.
///
/// Every write clears the levels beneath it, and stale children are dropped
/// by [`RegionCascade::recompute`], which runs after every State and District
/// write. Catalog membership is only enforced where the catalog actually
/// enumerates the children; otherwise free text is accepted verbatim.
#[derive(Debug, Clone)]
pub struct RegionCascade {
    catalog: RegionCatalog,
    scope: CascadeScope,
    selection: LocationSelection,
}

impl RegionCascade {
    pub fn new(catalog: RegionCatalog, scope: CascadeScope) -> Self {
        Self {
            catalog,
            scope,
            selection: LocationSelection::default(),
        }
    }

    /// Adopt an existing selection, dropping anything invalid in it.
    pub fn with_selection(
        catalog: RegionCatalog,
        scope: CascadeScope,
        selection: LocationSelection,
    ) -> Self {
        let mut cascade = Self {
            catalog,
            scope,
            selection,
        };
        cascade.recompute();
        cascade
    }

    pub fn selection(&self) -> &LocationSelection {
        &self.selection
    }

    pub fn scope(&self) -> CascadeScope {
        self.scope
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn is_complete(&self) -> bool {
        self.scope.is_complete(&self.selection)
    }

    /// Switch to a different scope, trimming levels the new scope doesn't use.
    pub fn set_scope(&mut self, scope: CascadeScope) {
        self.scope = scope;
        self.recompute();
    }

    /// Choose a State. Everything beneath it is cleared, even when the same
    /// State is chosen again. A blank value clears it.
    pub fn set_state(&mut self, state: &str) {
        let state = non_blank(state);
        debug!("Cascade: state {:?} -> {:?}", self.selection.state, state);
        self.selection.state = state;
        self.selection.clear_below_state();
        self.recompute();
    }

    pub fn set_district(&mut self, district: &str) -> Result<(), CascadeError> {
        self.check_scope(LocationField::District, self.scope.uses_district())?;
        match non_blank(district) {
            None => {
                self.selection.district = None;
                self.selection.constituency = None;
            }
            Some(district) => {
                let state = self.require_state(LocationField::District)?;
                if self.catalog.has_assembly_data(state)
                    && !self.catalog.is_district_of(state, &district)
                {
                    return Err(CascadeError::NotInCatalog {
                        field: LocationField::District,
                        value: district,
                        parent: state.to_string(),
                    });
                }
                self.selection.constituency = None;
                self.selection.district = Some(district);
            }
        }
        self.recompute();
        Ok(())
    }

    pub fn set_constituency(&mut self, constituency: &str) -> Result<(), CascadeError> {
        self.check_scope(LocationField::Constituency, self.scope.uses_constituency())?;
        let Some(constituency) = non_blank(constituency) else {
            self.selection.constituency = None;
            return Ok(());
        };
        let state = self.require_state(LocationField::Constituency)?;
        let district = self
            .selection
            .district
            .as_deref()
            .ok_or(CascadeError::MissingParent {
                field: LocationField::Constituency,
                parent: LocationField::District,
            })?;
        let enumerated = self.catalog.constituencies_of(state, district);
        if !enumerated.is_empty() && !enumerated.contains(&constituency.as_str()) {
            return Err(CascadeError::NotInCatalog {
                field: LocationField::Constituency,
                value: constituency,
                parent: district.to_string(),
            });
        }
        self.selection.constituency = Some(constituency);
        Ok(())
    }

    pub fn set_national_constituency(&mut self, constituency: &str) -> Result<(), CascadeError> {
        self.check_scope(
            LocationField::NationalConstituency,
            self.scope.uses_national_constituency(),
        )?;
        let Some(constituency) = non_blank(constituency) else {
            self.selection.national_constituency = None;
            return Ok(());
        };
        let state = self.require_state(LocationField::NationalConstituency)?;
        let enumerated = self.catalog.national_constituencies_of(state);
        if !enumerated.is_empty() && !enumerated.contains(&constituency.as_str()) {
            return Err(CascadeError::NotInCatalog {
                field: LocationField::NationalConstituency,
                value: constituency,
                parent: state.to_string(),
            });
        }
        self.selection.national_constituency = Some(constituency);
        Ok(())
    }

    /// Drop any level that is outside the scope or no longer valid under its
    /// parent. Idempotent.
    pub fn recompute(&mut self) {
        let selection = &mut self.selection;
        if !self.scope.uses_district() {
            selection.district = None;
        }
        if !self.scope.uses_constituency() {
            selection.constituency = None;
        }
        if !self.scope.uses_national_constituency() {
            selection.national_constituency = None;
        }

        let Some(state) = selection.state.as_deref() else {
            selection.clear_below_state();
            return;
        };

        let stale_district = selection.district.as_deref().map_or(false, |district| {
            self.catalog.has_assembly_data(state) && !self.catalog.is_district_of(state, district)
        });
        if stale_district {
            debug!("Cascade: dropping stale district {:?}", selection.district);
            selection.district = None;
        }

        let stale_constituency = match (
            selection.district.as_deref(),
            selection.constituency.as_deref(),
        ) {
            (None, Some(_)) => true,
            (Some(district), Some(constituency)) => {
                let enumerated = self.catalog.constituencies_of(state, district);
                !enumerated.is_empty() && !enumerated.contains(&constituency)
            }
            _ => false,
        };
        if stale_constituency {
            debug!("Cascade: dropping stale constituency {:?}", selection.constituency);
            selection.constituency = None;
        }

        let stale_national = selection
            .national_constituency
            .as_deref()
            .map_or(false, |constituency| {
                let enumerated = self.catalog.national_constituencies_of(state);
                !enumerated.is_empty() && !enumerated.contains(&constituency)
            });
        if stale_national {
            debug!(
                "Cascade: dropping stale national constituency {:?}",
                selection.national_constituency
            );
            selection.national_constituency = None;
        }
    }

    fn check_scope(&self, field: LocationField, in_scope: bool) -> Result<(), CascadeError> {
        if in_scope {
            Ok(())
        } else {
            Err(CascadeError::OutOfScope {
                field,
                scope: self.scope,
            })
        }
    }

    fn require_state(&self, field: LocationField) -> Result<&str, CascadeError> {
        self.selection
            .state
            .as_deref()
            .ok_or(CascadeError::MissingParent {
                field,
                parent: LocationField::State,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembly() -> RegionCascade {
        RegionCascade::new(RegionCatalog::india(), CascadeScope::Assembly)
    }

    #[test]
    fn karnataka_bagalkot_jamkhandi() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        let constituencies = cascade
            .catalog()
            .constituencies_of("Karnataka", "Bagalkot");
        assert!(constituencies.contains(&"Jamkhandi"));
        cascade.set_constituency("Jamkhandi").unwrap();
        assert_eq!(cascade.selection(), &LocationSelection::example_assembly());
        assert!(cascade.is_complete());
    }

    fn fill_below_state(cascade: &mut RegionCascade, state: &str) {
        let catalog = *cascade.catalog();
        if let Some(district) = catalog.districts_of(state).first() {
            let _ = cascade.set_district(district);
            if let Some(c) = catalog.constituencies_of(state, district).first() {
                let _ = cascade.set_constituency(c);
            }
        } else {
            let _ = cascade.set_district("Somewhere");
            let _ = cascade.set_constituency("Somewhere Central");
        }
        match catalog.national_constituencies_of(state).first() {
            Some(nc) => {
                let _ = cascade.set_national_constituency(nc);
            }
            None => {
                let _ = cascade.set_national_constituency("Somewhere North");
            }
        }
    }

    #[test]
    fn changing_state_clears_every_descendant() {
        let catalog = RegionCatalog::india();
        let states = catalog.states();
        for first in states {
            for second in states.iter().filter(|s| s.name != first.name) {
                for scope in [
                    CascadeScope::Assembly,
                    CascadeScope::District,
                    CascadeScope::NationalConstituency,
                ] {
                    let mut cascade = RegionCascade::new(catalog, scope);
                    cascade.set_state(first.name);
                    fill_below_state(&mut cascade, first.name);

                    cascade.set_state(second.name);
                    let selection = cascade.selection();
                    assert_eq!(selection.state(), Some(second.name));
                    assert_eq!(selection.district, None);
                    assert_eq!(selection.constituency, None);
                    assert_eq!(selection.national_constituency, None);
                }
            }
        }
    }

    #[test]
    fn union_territory_then_enumerated_state() {
        let mut cascade = assembly();
        cascade.set_state("Lakshadweep");
        cascade.set_district("Kavaratti").unwrap();
        cascade.set_constituency("Kavaratti North").unwrap();
        cascade.set_state("Karnataka");
        assert_eq!(cascade.selection().district(), None);
        assert_eq!(cascade.selection().constituency(), None);
        cascade.set_district("Bagalkot").unwrap();
        cascade.set_constituency("Jamkhandi").unwrap();
        assert_eq!(cascade.selection(), &LocationSelection::example_assembly());
    }

    #[test]
    fn reselecting_same_state_clears_children() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        cascade.set_constituency("Jamkhandi").unwrap();
        cascade.set_state("Karnataka");
        assert_eq!(cascade.selection().state(), Some("Karnataka"));
        assert_eq!(cascade.selection().district(), None);
        assert_eq!(cascade.selection().constituency(), None);

        let mut cascade =
            RegionCascade::new(RegionCatalog::india(), CascadeScope::NationalConstituency);
        cascade.set_state("Kerala");
        cascade.set_national_constituency("Wayanad").unwrap();
        cascade.set_state("Kerala");
        assert_eq!(cascade.selection().national_constituency(), None);
    }

    #[test]
    fn reselecting_same_district_clears_constituency() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        cascade.set_constituency("Jamkhandi").unwrap();
        cascade.set_district("Bagalkot").unwrap();
        assert_eq!(cascade.selection().district(), Some("Bagalkot"));
        assert_eq!(cascade.selection().constituency(), None);
    }

    #[test]
    fn unknown_district_rejected_when_enumerated() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        let before = cascade.selection().clone();

        let err = cascade.set_district("Pune").unwrap_err();
        assert_eq!(
            err,
            CascadeError::NotInCatalog {
                field: LocationField::District,
                value: "Pune".to_string(),
                parent: "Karnataka".to_string(),
            }
        );
        assert_eq!(cascade.selection(), &before);
    }

    #[test]
    fn free_text_district_without_assembly_data() {
        let mut cascade = RegionCascade::new(RegionCatalog::india(), CascadeScope::District);
        cascade.set_state("Lakshadweep");
        assert!(cascade.catalog().districts_of("Lakshadweep").is_empty());
        cascade.set_district("Kavaratti").unwrap();
        assert_eq!(cascade.selection().district(), Some("Kavaratti"));
        assert!(cascade.is_complete());
    }

    #[test]
    fn free_text_constituency_when_not_enumerated() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Mysuru").unwrap();
        cascade.set_constituency("Chamundeshwari").unwrap();
        assert_eq!(cascade.selection().constituency(), Some("Chamundeshwari"));
    }

    #[test]
    fn enumerated_constituency_checked() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        assert!(matches!(
            cascade.set_constituency("Kothrud"),
            Err(CascadeError::NotInCatalog { .. })
        ));
        assert_eq!(cascade.selection().constituency(), None);
    }

    #[test]
    fn changing_district_clears_constituency() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        cascade.set_constituency("Jamkhandi").unwrap();
        cascade.set_district("Udupi").unwrap();
        assert_eq!(cascade.selection().constituency(), None);
    }

    #[test]
    fn parents_required() {
        let mut cascade = assembly();
        assert_eq!(
            cascade.set_district("Bagalkot"),
            Err(CascadeError::MissingParent {
                field: LocationField::District,
                parent: LocationField::State,
            })
        );
        cascade.set_state("Karnataka");
        assert_eq!(
            cascade.set_constituency("Jamkhandi"),
            Err(CascadeError::MissingParent {
                field: LocationField::Constituency,
                parent: LocationField::District,
            })
        );
    }

    #[test]
    fn out_of_scope_fields_rejected() {
        let mut cascade =
            RegionCascade::new(RegionCatalog::india(), CascadeScope::NationalConstituency);
        cascade.set_state("Karnataka");
        assert!(matches!(
            cascade.set_district("Bagalkot"),
            Err(CascadeError::OutOfScope { .. })
        ));
        cascade.set_national_constituency("Bagalkot").unwrap();
        assert_eq!(cascade.selection(), &LocationSelection::example_national());
    }

    #[test]
    fn national_constituency_checked_against_state() {
        let mut cascade =
            RegionCascade::new(RegionCatalog::india(), CascadeScope::NationalConstituency);
        cascade.set_state("Kerala");
        assert!(cascade.set_national_constituency("Bagalkot").is_err());
        cascade.set_national_constituency("Wayanad").unwrap();
        // Gujarat doesn't enumerate its constituencies.
        cascade.set_state("Gujarat");
        cascade.set_national_constituency("Gandhinagar").unwrap();
    }

    #[test]
    fn recompute_drops_stale_selection() {
        let stale = LocationSelection {
            state: Some("Kerala".to_string()),
            district: Some("Bagalkot".to_string()),
            constituency: Some("Jamkhandi".to_string()),
            national_constituency: None,
        };
        let mut cascade =
            RegionCascade::with_selection(RegionCatalog::india(), CascadeScope::Assembly, stale);
        assert_eq!(cascade.selection().state(), Some("Kerala"));
        assert_eq!(cascade.selection().district(), None);
        assert_eq!(cascade.selection().constituency(), None);

        let settled = cascade.selection().clone();
        cascade.recompute();
        assert_eq!(cascade.selection(), &settled);
    }

    #[test]
    fn scope_change_trims_fields() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        cascade.set_constituency("Jamkhandi").unwrap();

        cascade.set_scope(CascadeScope::District);
        assert_eq!(cascade.selection().district(), Some("Bagalkot"));
        assert_eq!(cascade.selection().constituency(), None);

        cascade.set_scope(CascadeScope::NationalConstituency);
        assert_eq!(cascade.selection().district(), None);
        assert_eq!(cascade.selection().state(), Some("Karnataka"));
    }

    #[test]
    fn blank_clears() {
        let mut cascade = assembly();
        cascade.set_state("Karnataka");
        cascade.set_district("Bagalkot").unwrap();
        cascade.set_constituency("Jamkhandi").unwrap();
        cascade.set_district("  ").unwrap();
        assert_eq!(cascade.selection().district(), None);
        assert_eq!(cascade.selection().constituency(), None);
        cascade.set_state("");
        assert_eq!(cascade.selection(), &LocationSelection::default());
    }

    #[test]
    fn first_missing_walks_down() {
        let selection = LocationSelection::example_assembly();
        assert_eq!(CascadeScope::Assembly.first_missing(&selection), None);
        assert_eq!(
            CascadeScope::NationalConstituency.first_missing(&selection),
            Some(LocationField::NationalConstituency)
        );
        assert_eq!(
            CascadeScope::District.first_missing(&LocationSelection::default()),
            Some(LocationField::State)
        );

        let district_only = LocationSelection::example_district();
        assert!(CascadeScope::District.is_complete(&district_only));
        assert_eq!(
            CascadeScope::Assembly.first_missing(&district_only),
            Some(LocationField::Constituency)
        );
    }
}
