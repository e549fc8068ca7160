use chrono::NaiveDate;
use std::fmt;

use crate::core::{Gender, Profile, ProfileId, Result, RosterError, age_on, backdate_by_years};

/// Editable fields of the profile form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    First,
    Last,
    /// Synthetic: writes go to the date of birth.
    Age,
    Gender,
    Country,
    Email,
    Picture,
    Description,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::First,
        ProfileField::Last,
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::Country,
        ProfileField::Email,
        ProfileField::Picture,
        ProfileField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::First => "First Name",
            ProfileField::Last => "Last Name",
            ProfileField::Age => "Age",
            ProfileField::Gender => "Gender",
            ProfileField::Country => "Country",
            ProfileField::Email => "Email",
            ProfileField::Picture => "Picture",
            ProfileField::Description => "Description",
        }
    }

    /// Text shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::Gender => "Select Gender",
            other => other.label(),
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of writing one field into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Applied,
    /// The input was not accepted and the buffer is unchanged.
    Rejected,
}

/// Scratch copy of one profile while it is being edited.
///
/// Text fields are plain strings so that any input, including an empty one,
/// can be held until save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    original: Profile,
    first: String,
    last: String,
    dob: NaiveDate,
    gender: String,
    country: String,
    email: String,
    picture: String,
    description: String,
    dirty: bool,
}

impl EditBuffer {
    pub fn new(original: Profile) -> Self {
        Self {
            first: original.first.clone(),
            last: original.last.clone(),
            dob: original.dob,
            gender: original.gender.as_str().to_string(),
            country: original.country.clone(),
            email: original.email.clone(),
            picture: original.picture.clone(),
            description: original.description.clone(),
            dirty: false,
            original,
        }
    }

    pub fn id(&self) -> ProfileId {
        self.original.id
    }

    pub fn original(&self) -> &Profile {
        &self.original
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    /// Discard all changes.
    pub fn reset(&mut self) {
        *self = Self::new(self.original.clone());
    }

    /// Current text of `field`. `Age` is derived from the buffered date of
    /// birth as of `today`.
    pub fn value(&self, field: ProfileField, today: NaiveDate) -> String {
        match field {
            ProfileField::First => self.first.clone(),
            ProfileField::Last => self.last.clone(),
            ProfileField::Age => age_on(self.dob, today).to_string(),
            ProfileField::Gender => self.gender.clone(),
            ProfileField::Country => self.country.clone(),
            ProfileField::Email => self.email.clone(),
            ProfileField::Picture => self.picture.clone(),
            ProfileField::Description => self.description.clone(),
        }
    }

    /// Write `value` into `field`.
    ///
    /// `Age` accepts only ASCII digits and rewrites the date of birth to
    /// today's month/day `value` years ago; empty input, overflow and dates
    /// that do not exist are dropped. `Country` refuses any digit.
    pub fn set_field(&mut self, field: ProfileField, value: &str, today: NaiveDate) -> FieldUpdate {
        let slot = match field {
            ProfileField::Age => {
                if !value.chars().all(|c| c.is_ascii_digit()) {
                    return FieldUpdate::Rejected;
                }
                let Some(dob) = value
                    .parse::<u32>()
                    .ok()
                    .and_then(|years| backdate_by_years(today, years))
                else {
                    return FieldUpdate::Rejected;
                };
                self.dob = dob;
                self.dirty = true;
                return FieldUpdate::Applied;
            }
            ProfileField::Country if value.chars().any(|c| c.is_ascii_digit()) => {
                return FieldUpdate::Rejected;
            }
            ProfileField::First => &mut self.first,
            ProfileField::Last => &mut self.last,
            ProfileField::Gender => &mut self.gender,
            ProfileField::Country => &mut self.country,
            ProfileField::Email => &mut self.email,
            ProfileField::Picture => &mut self.picture,
            ProfileField::Description => &mut self.description,
        };
        *slot = value.to_string();
        self.dirty = true;
        FieldUpdate::Applied
    }

    /// First field, in form order, holding an empty string.
    pub fn first_empty_field(&self) -> Option<ProfileField> {
        ProfileField::ALL.into_iter().find(|field| match field {
            ProfileField::First => self.first.is_empty(),
            ProfileField::Last => self.last.is_empty(),
            ProfileField::Age => false,
            ProfileField::Gender => self.gender.is_empty(),
            ProfileField::Country => self.country.is_empty(),
            ProfileField::Email => self.email.is_empty(),
            ProfileField::Picture => self.picture.is_empty(),
            ProfileField::Description => self.description.is_empty(),
        })
    }

    /// Build the committed profile. Fails on an empty field or an unknown
    /// gender value.
    pub fn to_profile(&self) -> Result<Profile> {
        if self.first_empty_field().is_some() {
            return Err(RosterError::validation("All fields must be filled."));
        }
        let gender = Gender::parse(&self.gender)
            .ok_or_else(|| RosterError::validation(format!("Unknown gender '{}'", self.gender)))?;

        Ok(Profile {
            id: self.original.id,
            first: self.first.clone(),
            last: self.last.clone(),
            dob: self.dob,
            gender,
            country: self.country.clone(),
            email: self.email.clone(),
            picture: self.picture.clone(),
            description: self.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn sample() -> Profile {
        Profile {
            id: 1,
            first: "Anna".to_string(),
            last: "Smith".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: Gender::Female,
            country: "Norway".to_string(),
            email: "anna@example.com".to_string(),
            picture: "https://example.com/anna.jpg".to_string(),
            description: "Actor.".to_string(),
        }
    }

    #[test]
    fn test_new_buffer_is_clean() {
        let buffer = EditBuffer::new(sample());
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.to_profile().unwrap(), sample());
        assert_eq!(buffer.value(ProfileField::Age, today()), "36");
        assert_eq!(buffer.value(ProfileField::Gender, today()), "female");
    }

    #[test]
    fn test_text_field_accepts_anything() {
        let mut buffer = EditBuffer::new(sample());
        assert_eq!(buffer.set_field(ProfileField::First, "Ann3", today()), FieldUpdate::Applied);
        assert_eq!(buffer.set_field(ProfileField::Email, "", today()), FieldUpdate::Applied);
        assert!(buffer.is_dirty());
        assert_eq!(buffer.value(ProfileField::First, today()), "Ann3");
        assert_eq!(buffer.first_empty_field(), Some(ProfileField::Email));
    }

    #[test]
    fn test_country_rejects_digits() {
        let mut buffer = EditBuffer::new(sample());
        assert_eq!(buffer.set_field(ProfileField::Country, "Norway1", today()), FieldUpdate::Rejected);
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.value(ProfileField::Country, today()), "Norway");

        assert_eq!(buffer.set_field(ProfileField::Country, "Sweden", today()), FieldUpdate::Applied);
        assert_eq!(buffer.value(ProfileField::Country, today()), "Sweden");
    }

    #[test]
    fn test_age_rewrites_dob() {
        let mut buffer = EditBuffer::new(sample());
        assert_eq!(buffer.set_field(ProfileField::Age, "25", today()), FieldUpdate::Applied);
        assert_eq!(buffer.dob(), NaiveDate::from_ymd_opt(2001, 10, 18).unwrap());
        assert_eq!(buffer.value(ProfileField::Age, today()), "25");
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_age_rejects_non_digits_and_empty() {
        let mut buffer = EditBuffer::new(sample());
        for input in ["", "-3", "2a", "1.5", " 30"] {
            assert_eq!(buffer.set_field(ProfileField::Age, input, today()), FieldUpdate::Rejected);
        }
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.dob(), sample().dob);
    }

    #[test]
    fn test_age_dropped_when_date_invalid() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut buffer = EditBuffer::new(sample());
        assert_eq!(buffer.set_field(ProfileField::Age, "3", leap), FieldUpdate::Rejected);
        assert_eq!(buffer.set_field(ProfileField::Age, "99999999999", leap), FieldUpdate::Rejected);
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.set_field(ProfileField::Age, "4", leap), FieldUpdate::Applied);
    }

    #[test]
    fn test_unknown_gender_fails_on_commit() {
        let mut buffer = EditBuffer::new(sample());
        buffer.set_field(ProfileField::Gender, "robot", today());
        assert!(matches!(buffer.to_profile(), Err(RosterError::Validation(_))));
    }

    #[test]
    fn test_reset_restores_original() {
        let mut buffer = EditBuffer::new(sample());
        buffer.set_field(ProfileField::Last, "Jones", today());
        buffer.set_field(ProfileField::Age, "40", today());
        buffer.reset();
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.to_profile().unwrap(), sample());
    }

    #[test]
    fn test_empty_gender_shows_select_prompt() {
        assert_eq!(ProfileField::Gender.placeholder(), "Select Gender");
        assert_eq!(ProfileField::Email.placeholder(), "Email");

        let mut buffer = EditBuffer::new(sample());
        buffer.set_field(ProfileField::Gender, "", today());
        assert_eq!(buffer.value(ProfileField::Gender, today()), "");
        assert_eq!(buffer.first_empty_field(), Some(ProfileField::Gender));
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(ProfileField::First.next(), ProfileField::Last);
        assert_eq!(ProfileField::Description.next(), ProfileField::First);
        assert_eq!(ProfileField::First.previous(), ProfileField::Description);
    }
}
