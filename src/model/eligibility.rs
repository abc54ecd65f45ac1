//! Checks run on an assembled election before anything is sent upstream.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

use crate::model::common::ElectionType;
use crate::model::draft::{CandidateDraft, ElectionDraft, Seat};

/// A location field an election still needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingField {
    Constituency,
    District,
    AllowedRegion,
}

impl Display for MissingField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constituency => write!(f, "constituency"),
            Self::District => write!(f, "district"),
            Self::AllowedRegion => write!(f, "allowed region"),
        }
    }
}

/// Why an election can't be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityError {
    #[error("An election needs at least two candidates with both a name and a party")]
    InsufficientCandidates,
    #[error("Candidate {name:?} is listed twice (rows {first} and {second})")]
    DuplicateCandidate {
        name: String,
        first: usize,
        second: usize,
    },
    #[error("{first:?} and {second:?} are both standing for {party:?} in the same seat")]
    DuplicatePartyForSeat {
        party: String,
        first: String,
        second: String,
    },
    #[error("The election needs a {0}")]
    IncompleteLocation(MissingField),
    #[error("The election needs a title")]
    MissingTitle,
    #[error("The election needs a start date before its end date")]
    InvalidSchedule,
}

impl EligibilityError {
    /// Stable machine-readable name for the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InsufficientCandidates => "insufficientCandidates",
            Self::DuplicateCandidate { .. } => "duplicateCandidate",
            Self::DuplicatePartyForSeat { .. } => "duplicatePartyForSeat",
            Self::IncompleteLocation(_) => "incompleteLocation",
            Self::MissingTitle => "missingTitle",
            Self::InvalidSchedule => "invalidSchedule",
        }
    }
}

/// Check a candidate list for one seat.
///
/// The checks run in a fixed order and the first failure is reported. Rows
/// without both a name and a party are ignored, as they won't be submitted.
pub fn validate(
    election_type: ElectionType,
    seat: &Seat,
    drafts: &[CandidateDraft],
) -> Result<(), EligibilityError> {
    let filled: Vec<(usize, &CandidateDraft)> = drafts
        .iter()
        .enumerate()
        .filter(|(_, draft)| draft.is_filled())
        .collect();

    if filled.len() < 2 {
        return Err(EligibilityError::InsufficientCandidates);
    }

    for (i, (first, a)) in filled.iter().enumerate() {
        for (second, b) in &filled[i + 1..] {
            if normalize(&a.name) == normalize(&b.name) {
                return Err(EligibilityError::DuplicateCandidate {
                    name: a.name.trim().to_string(),
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    // Every row of one election contests the same seat.
    for (i, (_, a)) in filled.iter().enumerate() {
        for (_, b) in &filled[i + 1..] {
            if normalize(&a.party) == normalize(&b.party) {
                return Err(EligibilityError::DuplicatePartyForSeat {
                    party: a.party.trim().to_string(),
                    first: a.name.trim().to_string(),
                    second: b.name.trim().to_string(),
                });
            }
        }
    }

    match election_type {
        ElectionType::National => {
            require(seat.key(election_type).is_some(), MissingField::Constituency)
        }
        ElectionType::State => {
            require(seat.district().is_some(), MissingField::District)?;
            require(seat.key(election_type).is_some(), MissingField::Constituency)
        }
        ElectionType::Local => {
            require(seat.key(election_type).is_some(), MissingField::AllowedRegion)
        }
    }
}

/// Check a whole election: its candidates first, then its title and schedule.
pub fn validate_draft(draft: &ElectionDraft) -> Result<(), EligibilityError> {
    validate(draft.election_type, &draft.seat(), &draft.candidates)?;

    if draft.title.trim().is_empty() {
        return Err(EligibilityError::MissingTitle);
    }
    match (draft.start_date, draft.end_date) {
        (Some(start), Some(end)) if end > start => Ok(()),
        _ => Err(EligibilityError::InvalidSchedule),
    }
}

fn require(present: bool, field: MissingField) -> Result<(), EligibilityError> {
    if present {
        Ok(())
    } else {
        Err(EligibilityError::IncompleteLocation(field))
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use crate::model::draft::ElectionSpec;

    use super::*;

    fn drafts(rows: &[(&str, &str)]) -> Vec<CandidateDraft> {
        rows.iter()
            .map(|(name, party)| CandidateDraft::example(name, party))
            .collect()
    }

    #[test]
    fn duplicate_candidate() {
        let result = validate(
            ElectionType::National,
            &Seat::example_constituency("Bagalkot"),
            &drafts(&[("A", "X"), ("A", "Y")]),
        );
        assert_eq!(
            result,
            Err(EligibilityError::DuplicateCandidate {
                name: "A".to_string(),
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn duplicate_candidate_is_normalized() {
        let result = validate(
            ElectionType::National,
            &Seat::example_constituency("Bagalkot"),
            &drafts(&[("Asha Patil", "X"), ("", "Z"), ("  asha PATIL ", "Y")]),
        );
        assert_eq!(
            result,
            Err(EligibilityError::DuplicateCandidate {
                name: "Asha Patil".to_string(),
                first: 0,
                second: 2,
            })
        );
    }

    #[test]
    fn duplicate_party_for_seat() {
        let result = validate(
            ElectionType::Local,
            &Seat::example_region("Pune"),
            &drafts(&[("A", "X"), ("B", "x ")]),
        );
        assert_eq!(
            result,
            Err(EligibilityError::DuplicatePartyForSeat {
                party: "X".to_string(),
                first: "A".to_string(),
                second: "B".to_string(),
            })
        );
    }

    #[test]
    fn distinct_candidates_pass() {
        let result = validate(
            ElectionType::National,
            &Seat::example_constituency("Bagalkot"),
            &drafts(&[("A", "X"), ("B", "Y")]),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn blank_rows_ignored() {
        let rows = drafts(&[("A", "X"), ("", "X"), ("B", ""), ("C", "Y")]);
        let result = validate(
            ElectionType::Local,
            &Seat::example_region("Pune"),
            &rows,
        );
        assert_eq!(result, Ok(()));

        let rows = drafts(&[("A", "X"), ("B", " ")]);
        let result = validate(ElectionType::Local, &Seat::example_region("Pune"), &rows);
        assert_eq!(result, Err(EligibilityError::InsufficientCandidates));
    }

    #[test]
    fn checks_run_in_order() {
        // Too few candidates wins over a missing location.
        let result = validate(ElectionType::State, &Seat::default(), &drafts(&[("A", "X")]));
        assert_eq!(result, Err(EligibilityError::InsufficientCandidates));

        // A duplicate party wins over a missing location.
        let result = validate(
            ElectionType::State,
            &Seat::default(),
            &drafts(&[("A", "X"), ("B", "X")]),
        );
        assert!(matches!(
            result,
            Err(EligibilityError::DuplicatePartyForSeat { .. })
        ));
    }

    #[test]
    fn location_completeness() {
        let rows = drafts(&[("A", "X"), ("B", "Y")]);

        let result = validate(ElectionType::National, &Seat::default(), &rows);
        assert_eq!(
            result,
            Err(EligibilityError::IncompleteLocation(MissingField::Constituency))
        );

        let seat = Seat::example_constituency("Jamkhandi");
        let result = validate(ElectionType::State, &seat, &rows);
        assert_eq!(
            result,
            Err(EligibilityError::IncompleteLocation(MissingField::District))
        );

        let seat = Seat {
            district: Some("Bagalkot".to_string()),
            ..Default::default()
        };
        let result = validate(ElectionType::State, &seat, &rows);
        assert_eq!(
            result,
            Err(EligibilityError::IncompleteLocation(MissingField::Constituency))
        );

        let result = validate(ElectionType::Local, &Seat::default(), &rows);
        assert_eq!(
            result,
            Err(EligibilityError::IncompleteLocation(MissingField::AllowedRegion))
        );
    }

    #[test]
    fn whole_draft() {
        let mut draft = ElectionDraft {
            spec: ElectionSpec::example_local(),
            candidates: drafts(&[("A", "X"), ("B", "Y")]),
        };
        assert_eq!(validate_draft(&draft), Ok(()));

        draft.title = "  ".to_string();
        assert_eq!(validate_draft(&draft), Err(EligibilityError::MissingTitle));

        draft.title = "Pune".to_string();
        draft.end_date = draft.start_date.map(|start| start - Duration::hours(1));
        assert_eq!(validate_draft(&draft), Err(EligibilityError::InvalidSchedule));

        draft.end_date = None;
        assert_eq!(validate_draft(&draft), Err(EligibilityError::InvalidSchedule));
    }
}
