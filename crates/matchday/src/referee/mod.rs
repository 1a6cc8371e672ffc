//! Referee availability lookups.

mod roster;

pub use roster::{RefereeRoster, RosterParseError};
