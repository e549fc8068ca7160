pub mod age;
pub mod clock;
pub mod error;
pub mod types;

pub use age::{age_on, backdate_by_years};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, RosterError};
pub use types::{Gender, Profile, ProfileId};
