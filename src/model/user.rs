//! User record and the envelope it arrives in

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use super::lenient;

/// Gender as reported by the generator
///
/// Input matching is case-insensitive ("male", "Male", "MALE").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Plural noun used in statistic labels ("males", "females")
    pub fn plural(&self) -> &'static str {
        match self {
            Gender::Male => "males",
            Gender::Female => "females",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(serde::de::Error::unknown_variant(&raw, &["male", "female"])),
        }
    }
}

/// A user's name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub title: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

impl Name {
    pub fn new(first: Option<&str>, last: Option<&str>) -> Self {
        Name {
            title: None,
            first: first.map(str::to_string),
            last: last.map(str::to_string),
        }
    }
}

/// Identifier issued to the user (SSN, etc.)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Post codes and street numbers come back as either numbers or strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostCode::Number(n) => write!(f, "{}", n),
            PostCode::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub number: Option<PostCode>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timezone {
    pub offset: Option<String>,
    pub description: Option<String>,
}

/// Where the user lives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Option<Street>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<PostCode>,
    pub coordinates: Option<Coordinates>,
    pub timezone: Option<Timezone>,
}

impl Location {
    pub fn with_state(state: &str) -> Self {
        Location {
            state: Some(state.to_string()),
            ..Location::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub salt: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
}

/// A date together with the whole number of years elapsed since it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDate {
    #[serde(default)]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub age: Option<i32>,
}

impl AgeDate {
    pub fn with_age(age: i32) -> Self {
        AgeDate {
            date: None,
            age: Some(age),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

/// A single generated user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: Name,
    pub id: Option<Identification>,
    pub gender: Option<Gender>,
    pub location: Option<Location>,
    pub email: Option<String>,
    pub login: Option<Login>,
    #[serde(rename = "dob")]
    pub date_of_birth: Option<AgeDate>,
    pub registered: Option<AgeDate>,
    pub phone: Option<String>,
    pub cell: Option<String>,
    pub picture: Option<Picture>,
    #[serde(rename = "nat")]
    pub nationality: Option<String>,
}

impl User {
    pub fn first_name(&self) -> Option<&str> {
        self.name.first.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.name.last.as_deref()
    }

    /// State name, if both the location and its state are present
    pub fn state(&self) -> Option<&str> {
        self.location.as_ref()?.state.as_deref()
    }

    pub fn age(&self) -> Option<i32> {
        self.date_of_birth.as_ref().and_then(|dob| dob.age)
    }
}

/// Payload envelope used both by the generator and by direct submissions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomUserResults {
    pub results: Option<Vec<User>>,
    pub info: Option<RandomUserInfo>,
}

impl RandomUserResults {
    pub fn from_users(users: Vec<User>) -> Self {
        RandomUserResults {
            results: Some(users),
            info: None,
        }
    }

    /// The user list, when present and non-empty
    pub fn into_non_empty_results(self) -> Option<Vec<User>> {
        self.results.filter(|users| !users.is_empty())
    }
}

/// The `info` block of a generator response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomUserInfo {
    pub seed: Option<String>,
    pub results: Option<u32>,
    pub page: Option<u32>,
    pub version: Option<String>,
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod user_tests;
