use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::age::age_on;

pub type ProfileId = u64;

/// A celebrity profile as loaded from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub first: String,
    pub last: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub country: String,
    pub email: String,
    pub picture: String,
    pub description: String,
}

impl Profile {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.dob, today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Transgender,
    RatherNotSay,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 5] = [
        Gender::Male,
        Gender::Female,
        Gender::Transgender,
        Gender::RatherNotSay,
        Gender::Other,
    ];

    /// Parse the wire value (`"rather_not_say"` etc). Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Transgender => "transgender",
            Gender::RatherNotSay => "rather_not_say",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Transgender => "Transgender",
            Gender::RatherNotSay => "Rather not say",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
