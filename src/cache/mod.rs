mod directory;
mod roster;

pub use directory::{PlayerDirectory, RosterStatus};
pub use roster::Roster;
