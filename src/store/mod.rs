pub mod filter;
pub mod roster;

pub use filter::{filter_by_name, matches_name};
pub use roster::Roster;
