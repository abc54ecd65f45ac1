//! Pure filters from a [`TemplateCatalog`] to the templates relevant to a form.

use crate::model::common::{ElectionType, LocationSelection};

use super::{CandidateTemplate, PartyTemplate, TemplateCatalog};

/// Candidate templates for exactly this seat.
///
/// Only the levels the election type is contested over are compared, and they
/// must be equal. If any of those levels is missing from `location`, nothing
/// matches.
pub fn match_candidates<'a>(
    catalog: &'a TemplateCatalog,
    election_type: ElectionType,
    location: &LocationSelection,
) -> Vec<&'a CandidateTemplate> {
    let scope = election_type.scope();
    if !scope.is_complete(location) {
        return Vec::new();
    }

    catalog
        .candidates
        .all()
        .iter()
        .filter(|template| template.election_type == election_type)
        .filter(|template| {
            let candidate = template.location();
            same_place(location.state(), candidate.state())
                && (!scope.uses_district() || same_place(location.district(), candidate.district()))
                && (!scope.uses_constituency()
                    || same_place(location.constituency(), candidate.constituency()))
                && (!scope.uses_national_constituency()
                    || same_place(
                        location.national_constituency(),
                        candidate.national_constituency(),
                    ))
        })
        .collect()
}

/// Party templates of the tier that contests `election_type`.
///
/// With `typed_so_far`, only parties whose name contains it (ignoring case)
/// are kept, and names starting with it come first. An empty result means
/// the party is entered as free text.
pub fn match_parties<'a>(
    catalog: &'a TemplateCatalog,
    election_type: ElectionType,
    typed_so_far: Option<&str>,
) -> Vec<&'a PartyTemplate> {
    let tier = election_type.party_tier();
    let mut parties: Vec<&PartyTemplate> = catalog
        .parties
        .all()
        .iter()
        .filter(|party| party.party_tier == tier)
        .collect();

    let needle = typed_so_far.map(|typed| typed.trim().to_lowercase());
    if let Some(needle) = needle.filter(|needle| !needle.is_empty()) {
        parties.retain(|party| party.party_name.to_lowercase().contains(&needle));
        // Stable, so catalog order is kept within each group.
        parties.sort_by_key(|party| !party.party_name.to_lowercase().starts_with(&needle));
    }
    parties
}

/// Look a candidate up by exact, case-sensitive name.
pub fn resolve_candidate<'a, I>(name: &str, candidates: I) -> Option<&'a CandidateTemplate>
where
    I: IntoIterator<Item = &'a CandidateTemplate>,
{
    candidates
        .into_iter()
        .find(|candidate| candidate.candidate_name == name)
}

fn same_place(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::common::PartyTier;
    use crate::model::template::CandidateTemplateCore;

    use super::*;

    fn catalog() -> TemplateCatalog {
        let mut catalog = TemplateCatalog::default();
        catalog.candidates.replace_all(vec![
            CandidateTemplate::example("n1", CandidateTemplateCore::example_national()),
            CandidateTemplate::example("a1", CandidateTemplateCore::example_assembly()),
            CandidateTemplate::example("l1", CandidateTemplateCore::example_local()),
        ]);
        catalog.parties.replace_all(vec![
            PartyTemplate::example("p1", "Bharatiya Lok Dal", PartyTier::National),
            PartyTemplate::example("p2", "Lokshakti", PartyTier::National),
            PartyTemplate::example("p3", "Akhil Lok Paksha", PartyTier::National),
            PartyTemplate::example("p4", "Lok Morcha", PartyTier::State),
            PartyTemplate::example("p5", "Nagar Vikas", PartyTier::Local),
        ]);
        catalog
    }

    fn ids(templates: Vec<&CandidateTemplate>) -> Vec<&str> {
        templates.into_iter().map(|t| &*t.id).collect()
    }

    #[test]
    fn candidates_match_exact_seat() {
        let catalog = catalog();
        let found = match_candidates(
            &catalog,
            ElectionType::National,
            &LocationSelection::example_national(),
        );
        assert_eq!(ids(found), vec!["n1"]);

        let found = match_candidates(
            &catalog,
            ElectionType::State,
            &LocationSelection::example_assembly(),
        );
        assert_eq!(ids(found), vec!["a1"]);

        let found = match_candidates(
            &catalog,
            ElectionType::Local,
            &LocationSelection::example_district(),
        );
        assert_eq!(ids(found), vec!["l1"]);
    }

    #[test]
    fn location_must_be_equal() {
        let catalog = catalog();
        let location = LocationSelection {
            state: Some(" karnataka".to_string()),
            district: Some("BAGALKOT ".to_string()),
            constituency: Some("jamkhandi".to_string()),
            ..Default::default()
        };
        assert!(match_candidates(&catalog, ElectionType::State, &location).is_empty());

        let mut location = LocationSelection::example_assembly();
        location.constituency = Some("JAMKHANDI".to_string());
        assert!(match_candidates(&catalog, ElectionType::State, &location).is_empty());
    }

    #[test]
    fn partial_location_matches_nothing() {
        let catalog = catalog();
        for election_type in ElectionType::ALL {
            assert!(match_candidates(&catalog, election_type, &LocationSelection::default())
                .is_empty());
        }

        let mut location = LocationSelection::example_assembly();
        location.constituency = None;
        assert!(match_candidates(&catalog, ElectionType::State, &location).is_empty());

        let mut location = LocationSelection::example_national();
        location.national_constituency = None;
        assert!(match_candidates(&catalog, ElectionType::National, &location).is_empty());
    }

    #[test]
    fn election_type_must_agree() {
        let catalog = catalog();
        // The assembly candidate's district is a full local-election location too.
        let location = LocationSelection {
            state: Some("Karnataka".to_string()),
            district: Some("Bagalkot".to_string()),
            ..Default::default()
        };
        assert!(match_candidates(&catalog, ElectionType::Local, &location).is_empty());
    }

    #[test]
    fn parties_filtered_by_tier() {
        let catalog = catalog();
        let names: Vec<_> = match_parties(&catalog, ElectionType::National, None)
            .into_iter()
            .map(|p| p.party_name.as_str())
            .collect();
        assert_eq!(names, vec!["Bharatiya Lok Dal", "Lokshakti", "Akhil Lok Paksha"]);

        let names: Vec<_> = match_parties(&catalog, ElectionType::Local, Some("  "))
            .into_iter()
            .map(|p| p.party_name.as_str())
            .collect();
        assert_eq!(names, vec!["Nagar Vikas"]);
    }

    #[test]
    fn prefix_hits_first() {
        let catalog = catalog();
        let names: Vec<_> = match_parties(&catalog, ElectionType::National, Some("lok"))
            .into_iter()
            .map(|p| p.party_name.as_str())
            .collect();
        assert_eq!(names, vec!["Lokshakti", "Bharatiya Lok Dal", "Akhil Lok Paksha"]);

        assert!(match_parties(&catalog, ElectionType::State, Some("Vikas")).is_empty());
    }

    #[test]
    fn resolve_is_exact() {
        let catalog = catalog();
        let all = catalog.candidates.all();
        assert_eq!(
            resolve_candidate("Meera Joshi", all).map(|c| &*c.id),
            Some("l1")
        );
        assert!(resolve_candidate("meera joshi", all).is_none());
        assert!(resolve_candidate("Meera", all).is_none());
    }
}
