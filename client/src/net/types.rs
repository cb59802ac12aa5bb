//! Shared DTOs for the identity adapter and the plant service.
//!
//! DESIGN
//! ======
//! Plant records mirror the remote service's camelCase JSON (including the
//! Mongo `_id`) so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire format of plant watering dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` date; calendar-invalid days are rejected.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Provider-assigned user id.
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl UserIdentity {
    /// Name to show in headers: display name, then email, then a generic label.
    pub fn label(&self) -> String {
        self.display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Plant lover")
            .to_owned()
    }
}

/// How demanding a plant is to keep alive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CareLevel {
    Easy,
    Moderate,
    Difficult,
    /// A value the service returned that this client does not know.
    Other(String),
}

impl CareLevel {
    pub const CHOICES: [CareLevel; 3] = [CareLevel::Easy, CareLevel::Moderate, CareLevel::Difficult];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Difficult => "difficult",
            Self::Other(raw) => raw,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Moderate => 1,
            Self::Difficult => 2,
            Self::Other(_) => 3,
        }
    }
}

impl Default for CareLevel {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for CareLevel {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Self::Easy,
            "moderate" | "medium" => Self::Moderate,
            "difficult" | "hard" => Self::Difficult,
            _ => Self::Other(raw),
        }
    }
}

impl From<CareLevel> for String {
    fn from(level: CareLevel) -> Self {
        level.as_str().to_owned()
    }
}

impl fmt::Display for CareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for CareLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CareLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank()).then_with(|| self.as_str().cmp(other.as_str()))
    }
}

/// A plant listing as stored by the plant service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: NewPlant,
}

/// Plant fields sent on create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlant {
    #[serde(default)]
    pub image: String,
    pub plant_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub care_level: CareLevel,
    #[serde(default)]
    pub watering_frequency: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub last_watered_date: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub next_watering_date: String,
    #[serde(default)]
    pub health_status: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
}

impl NewPlant {
    pub fn last_watered(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.last_watered_date)
    }

    pub fn next_watering(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.next_watering_date)
    }
}

/// Acknowledgement body returned by the plant service on writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteAck {
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default)]
    pub inserted_id: Option<String>,
    #[serde(default)]
    pub modified_count: Option<u64>,
    #[serde(default)]
    pub deleted_count: Option<u64>,
}
