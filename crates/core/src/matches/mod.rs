mod error;
mod events;
mod merge;
mod operations;
mod types;

pub use error::MatchError;
pub use events::MatchEvent;
pub use merge::merge_match;
pub use operations::{select_matches, validate_new_match, validate_patch};
pub use types::{Match, MatchId, MatchPatch, MatchStatus, NewMatch, RefereeId};
