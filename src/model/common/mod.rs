mod election_type;
mod location;

pub use election_type::{ElectionType, PartyTier};
pub use location::LocationSelection;

pub(crate) use location::non_blank;
